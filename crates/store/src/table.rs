//! Names of the reference tables

/// Every table the lookup layer reads from a reference store
///
/// The paths follow the group layout of the reference dataset, e.g.
/// `/decay/gammas`. File based stores map these onto relative file names.
///
/// ```rust
/// # use nucdata_store::Table;
/// assert_eq!(Table::Gammas.path(), "/decay/gammas");
/// assert_eq!(Table::Gammas.file_name("csv"), "decay/gammas.csv");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Table {
    /// Atomic masses and natural abundances
    AtomicMass,
    /// Bound coherent and incoherent neutron scattering lengths
    ScatteringLengths,
    /// WIMS-D fission product yields
    WimsFissionYields,
    /// NDS thermal, fast, and 14 MeV fission product yields
    NdsFissionYields,
    /// Half-lives, decay constants, and branch ratios by parent
    HalfLife,
    /// Nuclear level energies, half-lives, and metastable ordinals
    LevelList,
    /// Parent to daughter decay channels
    Decays,
    /// Gamma emission lines
    Gammas,
    /// Alpha emission lines
    Alphas,
    /// Beta-minus emission spectra
    Betas,
    /// Electron capture and beta-plus emission spectra
    Ecbp,
}

impl Table {
    /// All tables, in dataset order
    pub const ALL: [Table; 11] = [
        Table::AtomicMass,
        Table::ScatteringLengths,
        Table::WimsFissionYields,
        Table::NdsFissionYields,
        Table::HalfLife,
        Table::LevelList,
        Table::Decays,
        Table::Gammas,
        Table::Alphas,
        Table::Betas,
        Table::Ecbp,
    ];

    /// Full path of the table within a dataset
    pub fn path(&self) -> &'static str {
        match self {
            Table::AtomicMass => "/atomic_mass",
            Table::ScatteringLengths => "/neutron/scattering_lengths",
            Table::WimsFissionYields => "/neutron/wimsd_fission_products",
            Table::NdsFissionYields => "/neutron/nds_fission_products",
            Table::HalfLife => "/decay/half_life",
            Table::LevelList => "/decay/level_list",
            Table::Decays => "/decay/decays",
            Table::Gammas => "/decay/gammas",
            Table::Alphas => "/decay/alphas",
            Table::Betas => "/decay/betas",
            Table::Ecbp => "/decay/ecbp",
        }
    }

    /// Relative file name for stores that keep one file per table
    pub fn file_name(&self, extension: &str) -> String {
        let path = self.path().trim_start_matches('/');
        nucdata_utils::f!("{path}.{extension}")
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl std::str::FromStr for Table {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        let path = s.trim_end_matches('/');
        Table::ALL
            .into_iter()
            .find(|table| table.path() == path || table.path().trim_start_matches('/') == path)
            .ok_or_else(|| crate::error::Error::MissingTable {
                table: s.to_string(),
            })
    }
}
