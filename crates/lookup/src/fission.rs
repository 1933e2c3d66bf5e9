//! Fission product yields from the WIMS-D and NDS libraries

// external crates
use log::trace;

// nucdata modules
use nucdata_nucname::Nucid;
use nucdata_store::{ReferenceStore, Table};

// internal modules
use crate::cache::Project;
use crate::data::NuclearData;
use crate::error::{Error, Result};
use crate::records::{NdsYield, WimsYieldRecord};

/// Library and incident energy for a fission yield
///
/// The legacy integer codes convert with `TryFrom<u8>`.
///
/// | Code | Source                       |
/// | ---- | ---------------------------- |
/// | 0    | [FissionSource::Wims]        |
/// | 1    | [FissionSource::Thermal]     |
/// | 2    | [FissionSource::Fast]        |
/// | 3    | [FissionSource::FourteenMeV] |
///
/// ```rust
/// # use nucdata_lookup::FissionSource;
/// assert_eq!(FissionSource::try_from(2).unwrap(), FissionSource::Fast);
/// assert!(FissionSource::try_from(4).is_err());
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FissionSource {
    /// WIMS-D library, yields without uncertainties
    #[default]
    Wims,
    /// NDS thermal neutron yields
    Thermal,
    /// NDS fast neutron yields
    Fast,
    /// NDS 14 MeV neutron yields
    FourteenMeV,
}

impl FissionSource {
    /// Field of the NDS record for this source, `None` for WIMS
    fn nds_field(self, get_error: bool) -> Option<NdsYield> {
        match (self, get_error) {
            (FissionSource::Wims, _) => None,
            (FissionSource::Thermal, false) => Some(NdsYield::Thermal),
            (FissionSource::Thermal, true) => Some(NdsYield::ThermalErr),
            (FissionSource::Fast, false) => Some(NdsYield::Fast),
            (FissionSource::Fast, true) => Some(NdsYield::FastErr),
            (FissionSource::FourteenMeV, false) => Some(NdsYield::FourteenMeV),
            (FissionSource::FourteenMeV, true) => Some(NdsYield::FourteenMeVErr),
        }
    }
}

impl TryFrom<u8> for FissionSource {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(FissionSource::Wims),
            1 => Ok(FissionSource::Thermal),
            2 => Ok(FissionSource::Fast),
            3 => Ok(FissionSource::FourteenMeV),
            _ => Err(Error::UnknownFissionSource(code)),
        }
    }
}

impl std::fmt::Display for FissionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            FissionSource::Wims => "WIMS-D",
            FissionSource::Thermal => "NDS thermal",
            FissionSource::Fast => "NDS fast",
            FissionSource::FourteenMeV => "NDS 14 MeV",
        };
        write!(f, "{name}")
    }
}

impl<S: ReferenceStore> NuclearData<S> {
    fn load_wims_yields(&self) -> Result<()> {
        self.wims_guard.run(
            || self.wims_yields.needs_load(),
            || {
                let rows: Vec<WimsYieldRecord> = self.read_rows(Table::WimsFissionYields)?;
                self.wims_yields
                    .fill(rows.into_iter().map(|r| ((r.from_nuc, r.to_nuc), r.yields)));
                Ok(())
            },
        )
    }

    fn load_nds_yields(&self) -> Result<()> {
        self.load_records(
            &self.nds_guard,
            &self.nds_yields,
            Table::NdsFissionYields,
            |r| (r.from_nuc, r.to_nuc),
        )
    }

    fn cached_yield(
        &self,
        key: &(Nucid, Nucid),
        source: FissionSource,
        get_error: bool,
    ) -> Option<f64> {
        match source.nds_field(get_error) {
            Some(field) => self.nds_yields.with_entry(key, |r| r.project(field)),
            None => self.wims_yields.get(key),
        }
    }

    /// Independent fission product yield of a daughter from a parent
    ///
    /// With `get_error` the uncertainty is returned instead of the yield.
    /// WIMS-D has no uncertainties, so `get_error` is ignored for
    /// [FissionSource::Wims].
    ///
    /// If the pair is not cached, whichever library has not been loaded yet is
    /// loaded, WIMS-D first. A pair that is in neither gives `0.0`.
    ///
    /// ```rust
    /// # use nucdata_lookup::{FissionSource, NuclearData, NdsYieldRecord};
    /// # use nucdata_nucname::Nucid;
    /// # use nucdata_store::{Dataset, Table};
    /// # let wims: Vec<nucdata_lookup::WimsYieldRecord> = vec![];
    /// let (u235, cs137) = (Nucid(922350000), Nucid(551370000));
    /// let nds = NdsYieldRecord {
    ///     from_nuc: u235,
    ///     to_nuc: cs137,
    ///     yield_thermal: 0.0619,
    ///     yield_thermal_err: 0.0011,
    ///     ..Default::default()
    /// };
    ///
    /// let dataset = Dataset::new()
    ///     .with_table(Table::WimsFissionYields, &wims)
    ///     .unwrap()
    ///     .with_table(Table::NdsFissionYields, &[nds])
    ///     .unwrap();
    /// let data = NuclearData::new(dataset);
    ///
    /// let thermal = data.fpyield(u235, cs137, FissionSource::Thermal, false).unwrap();
    /// let error = data.fpyield(u235, cs137, FissionSource::Thermal, true).unwrap();
    /// assert_eq!((thermal, error), (0.0619, 0.0011));
    /// ```
    ///
    /// Fails if a library that needs loading can not be loaded.
    ///
    /// Note that the `0.0` for a missing pair is remembered in the WIMS-D
    /// table whichever source was asked for, so a later WIMS-D query for a
    /// pair that WIMS-D does not have also gives `0.0` without loading.
    pub fn fpyield(
        &self,
        parent: Nucid,
        daughter: Nucid,
        source: FissionSource,
        get_error: bool,
    ) -> Result<f64> {
        let key = (parent, daughter);

        if let Some(value) = self.cached_yield(&key, source, get_error) {
            return Ok(value);
        }

        if self.wims_yields.needs_load() {
            self.load_wims_yields()?;
            if let Some(value) = self.cached_yield(&key, source, get_error) {
                return Ok(value);
            }
        }

        if self.nds_yields.needs_load() {
            self.load_nds_yields()?;
            if let Some(value) = self.cached_yield(&key, source, get_error) {
                return Ok(value);
            }
        }

        // an existing WIMS-D yield for the pair is kept
        trace!("No {source} yield for {parent} -> {daughter}");
        self.wims_yields.memoize(key, 0.0);
        Ok(0.0)
    }
}
