//! Atomic masses and natural abundances
//!
//! Both come from the `/atomic_mass` table and are filled together. They are
//! the only quantities that always give an answer: failing to load the table
//! is logged and the value is estimated instead.

// nucdata modules
use nucdata_nucname::Nucid;
use nucdata_store::{ReferenceStore, Table};

// internal modules
use crate::cache::LoadPolicy;
use crate::data::NuclearData;
use crate::error::Result;
use crate::records::MassRecord;

impl<S: ReferenceStore> NuclearData<S> {
    fn load_masses(&self) -> Result<()> {
        self.mass_guard.run(
            || self.atomic_mass.needs_load() || self.natural_abund.needs_load(),
            || {
                let rows: Vec<MassRecord> = self.read_rows(Table::AtomicMass)?;
                self.atomic_mass.fill(rows.iter().map(|r| (r.nuc, r.mass)));
                self.natural_abund.fill(rows.iter().map(|r| (r.nuc, r.abund)));
                Ok(())
            },
        )
    }

    /// Atomic mass in atomic mass units
    ///
    /// Never fails. Nuclides missing from the reference data are estimated,
    /// and the estimate is remembered:
    ///
    /// - excited states take the mass of their ground state
    /// - anything else takes its mass number
    ///
    /// If the table can not be loaded a warning is logged and the estimate is
    /// used.
    ///
    /// ```rust
    /// # use nucdata_lookup::NuclearData;
    /// # use nucdata_nucname::Nucid;
    /// # use nucdata_store::Dataset;
    /// // No tables at all, so everything is estimated
    /// let data = NuclearData::new(Dataset::new());
    ///
    /// assert_eq!(data.atomic_mass(Nucid(922350000)), 235.0);
    /// assert_eq!(data.atomic_mass(Nucid(922350001)), 235.0);
    /// ```
    pub fn atomic_mass(&self, id: Nucid) -> f64 {
        // estimates never fail
        self.atomic_mass
            .lookup(
                &id,
                LoadPolicy::Estimate,
                || self.load_masses(),
                |_| match id.is_excited() {
                    true => self.atomic_mass(id.ground_state()),
                    false => f64::from(id.anum()),
                },
            )
            .unwrap_or_default()
    }

    /// Natural abundance as an atom fraction
    ///
    /// Never fails. Excited states take the abundance of their ground state,
    /// anything else missing from the reference data is exactly `0.0`.
    /// Estimates are remembered.
    ///
    /// If the table can not be loaded a warning is logged and the estimate is
    /// used.
    pub fn natural_abund(&self, id: Nucid) -> f64 {
        self.natural_abund
            .lookup(
                &id,
                LoadPolicy::Estimate,
                || self.load_masses(),
                |_| match id.is_excited() {
                    true => self.natural_abund(id.ground_state()),
                    false => 0.0,
                },
            )
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nucdata_store::Dataset;

    fn masses() -> Dataset {
        let rows = vec![
            MassRecord {
                nuc: Nucid(10010000),
                mass: 1.00782503,
                error: 0.0,
                abund: 0.999885,
            },
            MassRecord {
                nuc: Nucid(922350000),
                mass: 235.0439,
                error: 0.0,
                abund: 0.0072,
            },
        ];
        Dataset::new().with_table(Table::AtomicMass, &rows).unwrap()
    }

    #[test]
    fn loaded_values() {
        let data = NuclearData::new(masses());
        assert_eq!(data.atomic_mass(Nucid(10010000)), 1.00782503);
        assert_eq!(data.natural_abund(Nucid(10010000)), 0.999885);
    }

    #[test]
    fn both_tables_filled_by_one_load() {
        let data = NuclearData::new(masses());
        data.atomic_mass(Nucid(10010000));

        assert!(!data.natural_abund.needs_load());
        assert_eq!(data.natural_abund.len(), 2);
    }

    #[test]
    fn excited_abundance_lands_in_abundance_table() {
        let data = NuclearData::new(masses());
        assert_eq!(data.natural_abund(Nucid(922350001)), 0.0072);

        assert_eq!(data.natural_abund.get(&Nucid(922350001)), Some(0.0072));
        assert_eq!(data.atomic_mass.get(&Nucid(922350001)), None);
    }

    #[test]
    fn excited_mass_lands_in_mass_table() {
        let data = NuclearData::new(masses());
        assert_eq!(data.atomic_mass(Nucid(922350001)), 235.0439);

        assert_eq!(data.atomic_mass.get(&Nucid(922350001)), Some(235.0439));
        assert_eq!(data.natural_abund.get(&Nucid(922350001)), None);
    }

    #[test]
    fn unknown_isotope_mass_is_mass_number() {
        let data = NuclearData::new(masses());
        assert_eq!(data.atomic_mass(Nucid(942390000)), 239.0);
        assert_eq!(data.atomic_mass.get(&Nucid(942390000)), Some(239.0));
    }
}
