//! Gamma, alpha, beta, and electron capture/beta-plus line catalogs
//!
//! Lines are kept twice, once keyed by `(owner, energy)` for per-nuclide
//! queries and once by `(energy, owner)` for energy windows. Both orderings
//! are filled by the same load.
//!
//! Nothing is ever estimated. A nuclide without lines, or a window without
//! lines, is an empty list.

// standard library
use std::ops::RangeInclusive;

// external crates
use log::debug;
use serde::de::DeserializeOwned;

// nucdata modules
use nucdata_nucname::Nucid;
use nucdata_store::ReferenceStore;
use nucdata_utils::Real;

// internal modules
use crate::cache::{CacheTable, LoadGuard, Project};
use crate::data::NuclearData;
use crate::error::Result;
use crate::records::{
    AlphaNuc, AlphaReal, BetaNuc, BetaReal, EcbpNuc, EcbpReal, EmissionLine, GammaNuc, GammaReal,
};

/// One emission catalog, indexed by owner and by energy
#[derive(Debug)]
pub(crate) struct EmissionCatalog<R> {
    by_owner: CacheTable<(Nucid, Real), R>,
    by_energy: CacheTable<(Real, Nucid), R>,
    guard: LoadGuard,
}

impl<R> EmissionCatalog<R>
where
    R: EmissionLine + DeserializeOwned,
{
    pub(crate) fn new(owner_name: &'static str, energy_name: &'static str) -> Self {
        Self {
            by_owner: CacheTable::new(owner_name),
            by_energy: CacheTable::new(energy_name),
            guard: LoadGuard::default(),
        }
    }

    fn load<S: ReferenceStore>(&self, data: &NuclearData<S>) -> Result<()> {
        self.guard.run(
            || self.by_owner.needs_load() || self.by_energy.needs_load(),
            || {
                let lines: Vec<R> = data.read_rows(R::TABLE)?;
                self.by_energy.fill(
                    lines
                        .iter()
                        .map(|line| ((Real(line.energy()), line.owner()), line.clone())),
                );
                let added = self.by_owner.fill(
                    lines
                        .into_iter()
                        .map(|line| ((line.owner(), Real(line.energy())), line)),
                );
                debug!("Cached {added} {}", self.by_owner.name());
                Ok(())
            },
        )
    }

    /// Field of every line owned by `owner`, in energy order
    fn of<S, F>(&self, data: &NuclearData<S>, owner: Nucid, field: F) -> Result<Vec<R::Output>>
    where
        S: ReferenceStore,
        R: Project<F>,
        F: Copy,
    {
        self.by_owner.project_range(
            (owner, Real::MIN)..=(owner, Real::MAX),
            field,
            || self.load(data),
        )
    }

    /// Field of every line with energy in `[energy - error, energy + error]`
    fn within<S, F>(
        &self,
        data: &NuclearData<S>,
        energy: f64,
        error: f64,
        field: F,
    ) -> Result<Vec<R::Output>>
    where
        S: ReferenceStore,
        R: Project<F>,
        F: Copy,
    {
        self.by_energy
            .project_range(energy_window(energy, error), field, || self.load(data))
    }
}

/// Key range covering every owner between two energies
///
/// The bounds are ordered so that a negative error still gives a valid range.
fn energy_window(energy: f64, error: f64) -> RangeInclusive<(Real, Nucid)> {
    let (a, b) = (Real(energy - error), Real(energy + error));
    let (low, high) = match a <= b {
        true => (a, b),
        false => (b, a),
    };
    (low, Nucid::MIN)..=(high, Nucid::MAX)
}

/// Gamma lines
///
/// Lines are owned by the nuclide whose decay populates them, i.e. the
/// `parent_nuc` column.
impl<S: ReferenceStore> NuclearData<S> {
    /// Energies and their errors for every gamma line of a parent (keV)
    ///
    /// ```rust
    /// # use nucdata_lookup::{GammaRecord, NuclearData};
    /// # use nucdata_nucname::Nucid;
    /// # use nucdata_store::{Dataset, Table};
    /// let co60 = Nucid(270600000);
    /// let lines = [1173.228, 1332.492].map(|energy| GammaRecord {
    ///     energy,
    ///     energy_err: 0.003,
    ///     parent_nuc: co60,
    ///     ..Default::default()
    /// });
    ///
    /// let dataset = Dataset::new().with_table(Table::Gammas, &lines).unwrap();
    /// let data = NuclearData::new(dataset);
    ///
    /// assert_eq!(
    ///     data.gamma_energy(co60).unwrap(),
    ///     vec![(1173.228, 0.003), (1332.492, 0.003)]
    /// );
    /// ```
    ///
    /// Fails only if the gamma table can not be loaded.
    pub fn gamma_energy(&self, parent: Nucid) -> Result<Vec<(f64, f64)>> {
        self.gammas
            .of(self, parent, (GammaReal::Energy, GammaReal::EnergyErr))
    }

    /// Photon intensities and their errors for every gamma line of a parent
    pub fn gamma_photon_intensity(&self, parent: Nucid) -> Result<Vec<(f64, f64)>> {
        self.gammas.of(
            self,
            parent,
            (GammaReal::PhotonIntensity, GammaReal::PhotonIntensityErr),
        )
    }

    /// Conversion electron intensities and their errors for a parent
    pub fn gamma_conversion_intensity(&self, parent: Nucid) -> Result<Vec<(f64, f64)>> {
        self.gammas.of(
            self,
            parent,
            (GammaReal::ConvIntensity, GammaReal::ConvIntensityErr),
        )
    }

    /// Total transition intensities and their errors for a parent
    pub fn gamma_total_intensity(&self, parent: Nucid) -> Result<Vec<(f64, f64)>> {
        self.gammas.of(
            self,
            parent,
            (GammaReal::TotalIntensity, GammaReal::TotalIntensityErr),
        )
    }

    /// Initial and final levels of every gamma transition of a parent
    pub fn gamma_from_to(&self, parent: Nucid) -> Result<Vec<(Nucid, Nucid)>> {
        self.gammas.of(self, parent, (GammaNuc::From, GammaNuc::To))
    }

    /// Initial and final levels of every gamma transition in an energy window
    pub fn gamma_from_to_window(&self, energy: f64, error: f64) -> Result<Vec<(Nucid, Nucid)>> {
        self.gammas
            .within(self, energy, error, (GammaNuc::From, GammaNuc::To))
    }

    /// Parents of every gamma line in an energy window
    ///
    /// A parent appears once per matching line, in energy order.
    pub fn gamma_parent(&self, energy: f64, error: f64) -> Result<Vec<Nucid>> {
        self.gammas.within(self, energy, error, GammaNuc::Parent)
    }

    /// K-shell internal conversion coefficients for a parent
    pub fn gamma_k_conv(&self, parent: Nucid) -> Result<Vec<f64>> {
        self.gammas.of(self, parent, GammaReal::KConv)
    }

    /// L-shell internal conversion coefficients for a parent
    pub fn gamma_l_conv(&self, parent: Nucid) -> Result<Vec<f64>> {
        self.gammas.of(self, parent, GammaReal::LConv)
    }

    /// M-shell internal conversion coefficients for a parent
    pub fn gamma_m_conv(&self, parent: Nucid) -> Result<Vec<f64>> {
        self.gammas.of(self, parent, GammaReal::MConv)
    }
}

/// Alpha lines
impl<S: ReferenceStore> NuclearData<S> {
    /// Alpha energies of a parent (keV)
    pub fn alpha_energy(&self, parent: Nucid) -> Result<Vec<f64>> {
        self.alphas.of(self, parent, AlphaReal::Energy)
    }

    /// Alpha intensities of a parent
    pub fn alpha_intensity(&self, parent: Nucid) -> Result<Vec<f64>> {
        self.alphas.of(self, parent, AlphaReal::Intensity)
    }

    /// Daughters of every alpha line of a parent
    pub fn alpha_daughter(&self, parent: Nucid) -> Result<Vec<Nucid>> {
        self.alphas.of(self, parent, AlphaNuc::To)
    }

    /// Parents of every alpha line in an energy window
    pub fn alpha_parent(&self, energy: f64, error: f64) -> Result<Vec<Nucid>> {
        self.alphas.within(self, energy, error, AlphaNuc::From)
    }

    /// Daughters of every alpha line in an energy window
    pub fn alpha_daughter_window(&self, energy: f64, error: f64) -> Result<Vec<Nucid>> {
        self.alphas.within(self, energy, error, AlphaNuc::To)
    }
}

/// Beta-minus spectra
///
/// Spectra are ordered and windowed by their endpoint energy.
impl<S: ReferenceStore> NuclearData<S> {
    /// Endpoint energies of a parent's beta spectra (keV)
    pub fn beta_endpoint_energy(&self, parent: Nucid) -> Result<Vec<f64>> {
        self.betas.of(self, parent, BetaReal::EndpointEnergy)
    }

    /// Average energies of a parent's beta spectra (keV)
    pub fn beta_average_energy(&self, parent: Nucid) -> Result<Vec<f64>> {
        self.betas.of(self, parent, BetaReal::AverageEnergy)
    }

    /// Intensities of a parent's beta spectra
    pub fn beta_intensity(&self, parent: Nucid) -> Result<Vec<f64>> {
        self.betas.of(self, parent, BetaReal::Intensity)
    }

    /// Daughters of a parent's beta spectra
    pub fn beta_daughter(&self, parent: Nucid) -> Result<Vec<Nucid>> {
        self.betas.of(self, parent, BetaNuc::To)
    }

    /// Parents of every beta spectrum with an endpoint in the window
    pub fn beta_parent(&self, energy: f64, error: f64) -> Result<Vec<Nucid>> {
        self.betas.within(self, energy, error, BetaNuc::From)
    }

    /// Daughters of every beta spectrum with an endpoint in the window
    pub fn beta_daughter_window(&self, energy: f64, error: f64) -> Result<Vec<Nucid>> {
        self.betas.within(self, energy, error, BetaNuc::To)
    }
}

/// Electron capture and beta-plus spectra
impl<S: ReferenceStore> NuclearData<S> {
    /// Endpoint energies of a parent's beta-plus spectra (keV)
    pub fn ecbp_endpoint_energy(&self, parent: Nucid) -> Result<Vec<f64>> {
        self.ecbp.of(self, parent, EcbpReal::EndpointEnergy)
    }

    /// Average energies of a parent's beta-plus spectra (keV)
    pub fn ecbp_average_energy(&self, parent: Nucid) -> Result<Vec<f64>> {
        self.ecbp.of(self, parent, EcbpReal::AverageEnergy)
    }

    /// Electron capture intensities of a parent
    pub fn ec_intensity(&self, parent: Nucid) -> Result<Vec<f64>> {
        self.ecbp.of(self, parent, EcbpReal::EcIntensity)
    }

    /// Beta-plus intensities of a parent
    pub fn bp_intensity(&self, parent: Nucid) -> Result<Vec<f64>> {
        self.ecbp.of(self, parent, EcbpReal::BetaPlusIntensity)
    }

    /// Daughters of a parent's electron capture and beta-plus decays
    pub fn ecbp_daughter(&self, parent: Nucid) -> Result<Vec<Nucid>> {
        self.ecbp.of(self, parent, EcbpNuc::To)
    }

    /// Parents of every spectrum with an endpoint in the window
    pub fn ecbp_parent(&self, energy: f64, error: f64) -> Result<Vec<Nucid>> {
        self.ecbp.within(self, energy, error, EcbpNuc::From)
    }

    /// Daughters of every spectrum with an endpoint in the window
    pub fn ecbp_daughter_window(&self, energy: f64, error: f64) -> Result<Vec<Nucid>> {
        self.ecbp.within(self, energy, error, EcbpNuc::To)
    }

    /// K-shell conversion coefficients of a parent's spectra
    pub fn ecbp_k_conv(&self, parent: Nucid) -> Result<Vec<f64>> {
        self.ecbp.of(self, parent, EcbpReal::KConv)
    }

    /// L-shell conversion coefficients of a parent's spectra
    pub fn ecbp_l_conv(&self, parent: Nucid) -> Result<Vec<f64>> {
        self.ecbp.of(self, parent, EcbpReal::LConv)
    }

    /// M-shell conversion coefficients of a parent's spectra
    pub fn ecbp_m_conv(&self, parent: Nucid) -> Result<Vec<f64>> {
        self.ecbp.of(self, parent, EcbpReal::MConv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_with_negative_error() {
        let window = energy_window(100.0, -5.0);
        assert_eq!(window.start().0, Real(95.0));
        assert_eq!(window.end().0, Real(105.0));
    }

    #[test]
    fn window_spans_all_owners() {
        let window = energy_window(100.0, 0.0);
        assert!(window.contains(&(Real(100.0), Nucid(10010000))));
        assert!(window.contains(&(Real(100.0), Nucid(1182940000))));
        assert!(!window.contains(&(Real(100.5), Nucid(10010000))));
    }
}
