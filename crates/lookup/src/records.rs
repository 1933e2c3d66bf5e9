//! Record layouts of the reference tables
//!
//! Each record mirrors one row of a [Table] in the reference store. Field
//! names match the column names, so the same types deserialise from both the
//! binary dataset and the CSV directory layout.
//!
//! Records that are kept whole in a cache implement [Project] for small field
//! enums, grouped by the type they project to.

// external crates
use serde::{Deserialize, Serialize};

// nucdata modules
use nucdata_nucname::Nucid;
use nucdata_store::Table;

// internal modules
use crate::cache::Project;

/// A complex number, used for scattering lengths
///
/// ```rust
/// # use nucdata_lookup::Complex;
/// let b = Complex::new(3.0, 4.0);
/// assert_eq!(b.norm_sqr(), 25.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    /// Zero
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };

    /// New complex number from its parts
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Squared magnitude, `re² + im²`
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.im.is_sign_negative() {
            true => write!(f, "{}-{}i", self.re, -self.im),
            false => write!(f, "{}+{}i", self.re, self.im),
        }
    }
}

/// Row of `/atomic_mass`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassRecord {
    pub nuc: Nucid,
    /// Atomic mass (amu)
    pub mass: f64,
    pub error: f64,
    /// Natural abundance as a fraction
    pub abund: f64,
}

/// Row of `/neutron/scattering_lengths`
///
/// Lengths are in cm and cross sections in barns.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatteringRecord {
    pub nuc: Nucid,
    pub b_coherent_re: f64,
    pub b_coherent_im: f64,
    pub b_incoherent_re: f64,
    pub b_incoherent_im: f64,
    pub xs_coherent: f64,
    pub xs_incoherent: f64,
    pub xs: f64,
}

impl ScatteringRecord {
    /// Bound coherent scattering length
    pub fn b_coherent(&self) -> Complex {
        Complex::new(self.b_coherent_re, self.b_coherent_im)
    }

    /// Bound incoherent scattering length
    pub fn b_incoherent(&self) -> Complex {
        Complex::new(self.b_incoherent_re, self.b_incoherent_im)
    }
}

/// Row of `/neutron/wimsd_fission_products`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct WimsYieldRecord {
    pub from_nuc: Nucid,
    pub to_nuc: Nucid,
    pub yields: f64,
}

/// Row of `/neutron/nds_fission_products`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NdsYieldRecord {
    pub from_nuc: Nucid,
    pub to_nuc: Nucid,
    pub yield_thermal: f64,
    pub yield_thermal_err: f64,
    pub yield_fast: f64,
    pub yield_fast_err: f64,
    pub yield_14mev: f64,
    pub yield_14mev_err: f64,
}

/// Real valued fields of an [NdsYieldRecord]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NdsYield {
    Thermal,
    ThermalErr,
    Fast,
    FastErr,
    FourteenMeV,
    FourteenMeVErr,
}

impl Project<NdsYield> for NdsYieldRecord {
    type Output = f64;

    fn project(&self, field: NdsYield) -> f64 {
        match field {
            NdsYield::Thermal => self.yield_thermal,
            NdsYield::ThermalErr => self.yield_thermal_err,
            NdsYield::Fast => self.yield_fast,
            NdsYield::FastErr => self.yield_fast_err,
            NdsYield::FourteenMeV => self.yield_14mev,
            NdsYield::FourteenMeVErr => self.yield_14mev_err,
        }
    }
}

/// Row of `/decay/half_life`
///
/// One row per decay channel of a parent, possibly from an excited level.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalfLifeRecord {
    pub from_nuc: Nucid,
    /// Level energy of the parent, 0.0 for the ground state
    pub level: f64,
    pub to_nuc: Nucid,
    /// Half-life (s)
    pub half_life: f64,
    /// Decay constant (1/s)
    pub decay_const: f64,
    pub branch_ratio: f64,
}

/// Row of `/decay/level_list`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub nuc_id: Nucid,
    /// Level energy (keV)
    pub level: f64,
    /// Half-life (s)
    pub half_life: f64,
    /// Metastable ordinal, 0 if the level is not metastable
    ///
    /// Stored as a real number, so `1` and `1.0` both read as the first
    /// metastable state.
    pub metastable: f64,
}

/// Real valued fields of a [LevelRecord]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LevelField {
    Energy,
    HalfLife,
}

impl Project<LevelField> for LevelRecord {
    type Output = f64;

    fn project(&self, field: LevelField) -> f64 {
        match field {
            LevelField::Energy => self.level,
            LevelField::HalfLife => self.half_life,
        }
    }
}

/// Row of `/decay/decays`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayRecord {
    pub parent: Nucid,
    pub daughter: Nucid,
    /// Decay mode, e.g. `B-` or `EC`
    pub decay: String,
    pub half_life: f64,
    pub half_life_error: f64,
    pub branch_ratio: f64,
    pub photon_branch_ratio: f64,
    pub photon_branch_ratio_error: f64,
    pub beta_branch_ratio: f64,
    pub beta_branch_ratio_error: f64,
}

/// Real valued fields of a [DecayRecord]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecayField {
    HalfLife,
    HalfLifeError,
    BranchRatio,
    PhotonBranchRatio,
    PhotonBranchRatioError,
    BetaBranchRatio,
    BetaBranchRatioError,
}

impl Project<DecayField> for DecayRecord {
    type Output = f64;

    fn project(&self, field: DecayField) -> f64 {
        match field {
            DecayField::HalfLife => self.half_life,
            DecayField::HalfLifeError => self.half_life_error,
            DecayField::BranchRatio => self.branch_ratio,
            DecayField::PhotonBranchRatio => self.photon_branch_ratio,
            DecayField::PhotonBranchRatioError => self.photon_branch_ratio_error,
            DecayField::BetaBranchRatio => self.beta_branch_ratio,
            DecayField::BetaBranchRatioError => self.beta_branch_ratio_error,
        }
    }
}

/// A line in one of the emission catalogs
///
/// Lines are indexed both by their owning nuclide and by a characteristic
/// energy, so they can be found per nuclide or within an energy window.
pub trait EmissionLine: Clone {
    /// Table the catalog is loaded from
    const TABLE: Table;

    /// Nuclide the line belongs to
    fn owner(&self) -> Nucid;

    /// Energy used to order and window the lines (keV)
    fn energy(&self) -> f64;
}

/// Row of `/decay/gammas`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GammaRecord {
    pub energy: f64,
    pub energy_err: f64,
    pub photon_intensity: f64,
    pub photon_intensity_err: f64,
    pub conv_intensity: f64,
    pub conv_intensity_err: f64,
    pub total_intensity: f64,
    pub total_intensity_err: f64,
    /// Level the transition starts from
    pub from_nuc: Nucid,
    /// Level the transition ends on
    pub to_nuc: Nucid,
    /// Nuclide whose decay populates the transition
    pub parent_nuc: Nucid,
    pub k_conv_e: f64,
    pub l_conv_e: f64,
    pub m_conv_e: f64,
}

/// Real valued fields of a [GammaRecord]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GammaReal {
    Energy,
    EnergyErr,
    PhotonIntensity,
    PhotonIntensityErr,
    ConvIntensity,
    ConvIntensityErr,
    TotalIntensity,
    TotalIntensityErr,
    KConv,
    LConv,
    MConv,
}

/// Nuclide fields of a [GammaRecord]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GammaNuc {
    From,
    To,
    Parent,
}

impl Project<GammaReal> for GammaRecord {
    type Output = f64;

    fn project(&self, field: GammaReal) -> f64 {
        match field {
            GammaReal::Energy => self.energy,
            GammaReal::EnergyErr => self.energy_err,
            GammaReal::PhotonIntensity => self.photon_intensity,
            GammaReal::PhotonIntensityErr => self.photon_intensity_err,
            GammaReal::ConvIntensity => self.conv_intensity,
            GammaReal::ConvIntensityErr => self.conv_intensity_err,
            GammaReal::TotalIntensity => self.total_intensity,
            GammaReal::TotalIntensityErr => self.total_intensity_err,
            GammaReal::KConv => self.k_conv_e,
            GammaReal::LConv => self.l_conv_e,
            GammaReal::MConv => self.m_conv_e,
        }
    }
}

impl Project<GammaNuc> for GammaRecord {
    type Output = Nucid;

    fn project(&self, field: GammaNuc) -> Nucid {
        match field {
            GammaNuc::From => self.from_nuc,
            GammaNuc::To => self.to_nuc,
            GammaNuc::Parent => self.parent_nuc,
        }
    }
}

impl EmissionLine for GammaRecord {
    const TABLE: Table = Table::Gammas;

    fn owner(&self) -> Nucid {
        self.parent_nuc
    }

    fn energy(&self) -> f64 {
        self.energy
    }
}

/// Row of `/decay/alphas`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlphaRecord {
    pub energy: f64,
    pub intensity: f64,
    pub from_nuc: Nucid,
    pub to_nuc: Nucid,
}

/// Real valued fields of an [AlphaRecord]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlphaReal {
    Energy,
    Intensity,
}

/// Nuclide fields of an [AlphaRecord]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlphaNuc {
    From,
    To,
}

impl Project<AlphaReal> for AlphaRecord {
    type Output = f64;

    fn project(&self, field: AlphaReal) -> f64 {
        match field {
            AlphaReal::Energy => self.energy,
            AlphaReal::Intensity => self.intensity,
        }
    }
}

impl Project<AlphaNuc> for AlphaRecord {
    type Output = Nucid;

    fn project(&self, field: AlphaNuc) -> Nucid {
        match field {
            AlphaNuc::From => self.from_nuc,
            AlphaNuc::To => self.to_nuc,
        }
    }
}

impl EmissionLine for AlphaRecord {
    const TABLE: Table = Table::Alphas;

    fn owner(&self) -> Nucid {
        self.from_nuc
    }

    fn energy(&self) -> f64 {
        self.energy
    }
}

/// Row of `/decay/betas`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetaRecord {
    pub endpoint_energy: f64,
    pub avg_energy: f64,
    pub intensity: f64,
    pub from_nuc: Nucid,
    pub to_nuc: Nucid,
}

/// Real valued fields of a [BetaRecord]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BetaReal {
    EndpointEnergy,
    AverageEnergy,
    Intensity,
}

/// Nuclide fields of a [BetaRecord]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BetaNuc {
    From,
    To,
}

impl Project<BetaReal> for BetaRecord {
    type Output = f64;

    fn project(&self, field: BetaReal) -> f64 {
        match field {
            BetaReal::EndpointEnergy => self.endpoint_energy,
            BetaReal::AverageEnergy => self.avg_energy,
            BetaReal::Intensity => self.intensity,
        }
    }
}

impl Project<BetaNuc> for BetaRecord {
    type Output = Nucid;

    fn project(&self, field: BetaNuc) -> Nucid {
        match field {
            BetaNuc::From => self.from_nuc,
            BetaNuc::To => self.to_nuc,
        }
    }
}

impl EmissionLine for BetaRecord {
    const TABLE: Table = Table::Betas;

    fn owner(&self) -> Nucid {
        self.from_nuc
    }

    fn energy(&self) -> f64 {
        self.endpoint_energy
    }
}

/// Row of `/decay/ecbp`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcbpRecord {
    pub endpoint_energy: f64,
    pub avg_energy: f64,
    pub beta_plus_intensity: f64,
    pub ec_intensity: f64,
    pub from_nuc: Nucid,
    pub to_nuc: Nucid,
    pub k_conv_e: f64,
    pub l_conv_e: f64,
    pub m_conv_e: f64,
}

/// Real valued fields of an [EcbpRecord]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EcbpReal {
    EndpointEnergy,
    AverageEnergy,
    BetaPlusIntensity,
    EcIntensity,
    KConv,
    LConv,
    MConv,
}

/// Nuclide fields of an [EcbpRecord]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EcbpNuc {
    From,
    To,
}

impl Project<EcbpReal> for EcbpRecord {
    type Output = f64;

    fn project(&self, field: EcbpReal) -> f64 {
        match field {
            EcbpReal::EndpointEnergy => self.endpoint_energy,
            EcbpReal::AverageEnergy => self.avg_energy,
            EcbpReal::BetaPlusIntensity => self.beta_plus_intensity,
            EcbpReal::EcIntensity => self.ec_intensity,
            EcbpReal::KConv => self.k_conv_e,
            EcbpReal::LConv => self.l_conv_e,
            EcbpReal::MConv => self.m_conv_e,
        }
    }
}

impl Project<EcbpNuc> for EcbpRecord {
    type Output = Nucid;

    fn project(&self, field: EcbpNuc) -> Nucid {
        match field {
            EcbpNuc::From => self.from_nuc,
            EcbpNuc::To => self.to_nuc,
        }
    }
}

impl EmissionLine for EcbpRecord {
    const TABLE: Table = Table::Ecbp;

    fn owner(&self) -> Nucid {
        self.from_nuc
    }

    fn energy(&self) -> f64 {
        self.endpoint_energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_display() {
        assert_eq!(Complex::new(1.5, -0.25).to_string(), "1.5-0.25i");
        assert_eq!(Complex::new(1.5, 0.25).to_string(), "1.5+0.25i");
    }

    #[test]
    fn project_pairs_mixed_types() {
        let line = AlphaRecord {
            energy: 5156.59,
            intensity: 70.77,
            from_nuc: Nucid(942390000),
            to_nuc: Nucid(922350001),
        };

        let (energy, daughter) = line.project((AlphaReal::Energy, AlphaNuc::To));
        assert_eq!(energy, 5156.59);
        assert_eq!(daughter, Nucid(922350001));
    }

    #[test]
    fn emission_owners() {
        let gamma = GammaRecord {
            energy: 1332.492,
            from_nuc: Nucid(280600001),
            to_nuc: Nucid(280600000),
            parent_nuc: Nucid(270600000),
            ..Default::default()
        };

        assert_eq!(gamma.owner(), Nucid(270600000));
        assert_eq!(gamma.energy(), 1332.492);
        assert_eq!(GammaRecord::TABLE, Table::Gammas);
    }
}
