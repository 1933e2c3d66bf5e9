//! Bound neutron scattering lengths

// nucdata modules
use nucdata_nucname::Nucid;
use nucdata_store::{ReferenceStore, Table};

// internal modules
use crate::cache::{CacheTable, LoadPolicy};
use crate::data::NuclearData;
use crate::error::Result;
use crate::records::{Complex, ScatteringRecord};

/// Nearest stand-in for a nuclide missing from a scattering length table
///
/// First entry in id order with the same mass number, then the first with the
/// same atomic number, otherwise zero.
fn nearest_length(table: &CacheTable<Nucid, Complex>, id: Nucid) -> Complex {
    table
        .scan(|k, b| (k.anum() == id.anum()).then_some(*b))
        .or_else(|| table.scan(|k, b| (k.znum() == id.znum()).then_some(*b)))
        .unwrap_or(Complex::ZERO)
}

impl<S: ReferenceStore> NuclearData<S> {
    fn load_scattering_lengths(&self) -> Result<()> {
        self.scattering_guard.run(
            || self.b_coherent.needs_load() || self.b_incoherent.needs_load(),
            || {
                let rows: Vec<ScatteringRecord> = self.read_rows(Table::ScatteringLengths)?;
                self.b_coherent
                    .fill(rows.iter().map(|r| (r.nuc, r.b_coherent())));
                self.b_incoherent
                    .fill(rows.iter().map(|r| (r.nuc, r.b_incoherent())));
                Ok(())
            },
        )
    }

    /// Bound coherent scattering length (cm)
    ///
    /// Nuclides missing from the table take the length of the first tabulated
    /// nuclide with the same mass number, then the same atomic number, and
    /// are otherwise zero. The stand-in is remembered.
    ///
    /// Fails if the scattering length table can not be loaded.
    pub fn b_coherent(&self, id: Nucid) -> Result<Complex> {
        self.b_coherent.lookup(
            &id,
            LoadPolicy::Propagate,
            || self.load_scattering_lengths(),
            |table| nearest_length(table, id),
        )
    }

    /// Bound incoherent scattering length (cm)
    ///
    /// Missing nuclides are handled exactly as for
    /// [b_coherent()](NuclearData::b_coherent).
    ///
    /// Fails if the scattering length table can not be loaded.
    pub fn b_incoherent(&self, id: Nucid) -> Result<Complex> {
        self.b_incoherent.lookup(
            &id,
            LoadPolicy::Propagate,
            || self.load_scattering_lengths(),
            |table| nearest_length(table, id),
        )
    }

    /// Combined scattering length (cm)
    ///
    /// The magnitude of the coherent and incoherent lengths taken together,
    /// `sqrt(|b_coh|² + |b_inc|²)`. Not cached, it is recomputed from the two
    /// complex lengths on every call.
    ///
    /// ```rust
    /// # use nucdata_lookup::{NuclearData, ScatteringRecord};
    /// # use nucdata_nucname::Nucid;
    /// # use nucdata_store::{Dataset, Table};
    /// let h1 = ScatteringRecord {
    ///     nuc: Nucid(10010000),
    ///     b_coherent_re: 3.0,
    ///     b_incoherent_re: 4.0,
    ///     ..Default::default()
    /// };
    ///
    /// let dataset = Dataset::new()
    ///     .with_table(Table::ScatteringLengths, &[h1])
    ///     .unwrap();
    ///
    /// let data = NuclearData::new(dataset);
    /// assert_eq!(data.b(Nucid(10010000)).unwrap(), 5.0);
    /// ```
    ///
    /// Fails if the scattering length table can not be loaded.
    pub fn b(&self, id: Nucid) -> Result<f64> {
        let coherent = self.b_coherent(id)?;
        let incoherent = self.b_incoherent(id)?;
        Ok((coherent.norm_sqr() + incoherent.norm_sqr()).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nucdata_store::Dataset;

    fn entry(nuc: u32, re: f64) -> ScatteringRecord {
        ScatteringRecord {
            nuc: Nucid(nuc),
            b_coherent_re: re,
            b_incoherent_re: -re,
            ..Default::default()
        }
    }

    #[test]
    fn stand_in_is_remembered() {
        let rows = vec![entry(260560000, 9.45e-13)];
        let dataset = Dataset::new()
            .with_table(Table::ScatteringLengths, &rows)
            .unwrap();
        let data = NuclearData::new(dataset);

        let fe57 = Nucid(260570000);
        assert_eq!(data.b_coherent(fe57).unwrap(), Complex::new(9.45e-13, 0.0));
        assert_eq!(
            data.b_coherent.get(&fe57),
            Some(Complex::new(9.45e-13, 0.0))
        );
        assert_eq!(data.b_incoherent.get(&fe57), None);
    }

    #[test]
    fn nothing_similar_is_zero() {
        let rows = vec![entry(10010000, -3.7406e-13)];
        let dataset = Dataset::new()
            .with_table(Table::ScatteringLengths, &rows)
            .unwrap();
        let data = NuclearData::new(dataset);

        assert_eq!(data.b_incoherent(Nucid(922350000)).unwrap(), Complex::ZERO);
    }
}
