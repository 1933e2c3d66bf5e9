//! Nuclear level scheme and metastable state resolution
//!
//! Levels are keyed by their full identifier, so every level of a (Z, A)
//! pair sits in the block between its ground state and
//! [last_in_block()](Nucid::last_in_block).

// nucdata modules
use nucdata_nucname::Nucid;
use nucdata_store::{ReferenceStore, Table};

// internal modules
use crate::data::NuclearData;
use crate::error::Result;
use crate::records::LevelField;

impl<S: ReferenceStore> NuclearData<S> {
    fn load_levels(&self) -> Result<()> {
        self.load_records(&self.levels_guard, &self.levels, Table::LevelList, |r| r.nuc_id)
    }

    /// Excitation energy of a level (keV)
    ///
    /// `0.0` for anything not in the level scheme. Nothing is remembered.
    ///
    /// The first call loads the level table and then answers from it, so a
    /// known level gives its energy straight away rather than `0.0`.
    ///
    /// Fails if the level table can not be loaded.
    pub fn state_energy(&self, id: Nucid) -> Result<f64> {
        let energy = self
            .levels
            .project(&id, LevelField::Energy, || self.load_levels())?;
        Ok(energy.unwrap_or(0.0))
    }

    /// Half-life of a level (s)
    ///
    /// `0.0` for anything not in the level scheme. Nothing is remembered.
    ///
    /// Fails if the level table can not be loaded.
    pub fn half_life(&self, id: Nucid) -> Result<f64> {
        let half_life = self
            .levels
            .project(&id, LevelField::HalfLife, || self.load_levels())?;
        Ok(half_life.unwrap_or(0.0))
    }

    /// Identifier of the `m`-th metastable state of a nuclide
    ///
    /// Any state of the nuclide may be given, the search always covers every
    /// level sharing its atomic and mass numbers. The lowest identifier with
    /// metastable ordinal `m` is returned.
    ///
    /// `None` if `m` is zero, or if no level has that ordinal.
    ///
    /// ```rust
    /// # use nucdata_lookup::{LevelRecord, NuclearData};
    /// # use nucdata_nucname::Nucid;
    /// # use nucdata_store::{Dataset, Table};
    /// let levels = [
    ///     (952420000, 0.0, 0.0),
    ///     (952420001, 48.6, 1.0),
    ///     (952420002, 2200.0, 2.0),
    /// ]
    /// .map(|(id, level, metastable)| LevelRecord {
    ///     nuc_id: Nucid(id),
    ///     level,
    ///     metastable,
    ///     ..Default::default()
    /// });
    ///
    /// let dataset = Dataset::new().with_table(Table::LevelList, &levels).unwrap();
    /// let data = NuclearData::new(dataset);
    ///
    /// let am242 = Nucid(952420000);
    /// assert_eq!(data.metastable_id(am242, 2).unwrap(), Some(Nucid(952420002)));
    /// assert_eq!(data.metastable_id(am242, 0).unwrap(), None);
    /// ```
    ///
    /// Fails if the level table can not be loaded.
    pub fn metastable_id(&self, id: Nucid, m: u32) -> Result<Option<Nucid>> {
        if m == 0 {
            return Ok(None);
        }

        let block = id.ground_state()..=id.last_in_block();
        let matches = self.levels.range_with(block, || self.load_levels(), |k, level| {
            (level.metastable == f64::from(m)).then_some(*k)
        })?;

        Ok(matches.into_iter().flatten().next())
    }

    /// Identifier of the first metastable state of a nuclide
    ///
    /// Shorthand for [metastable_id()](NuclearData::metastable_id) with
    /// `m = 1`.
    pub fn first_metastable_id(&self, id: Nucid) -> Result<Option<Nucid>> {
        self.metastable_id(id, 1)
    }

    /// Position of a level among the known levels of its nuclide
    ///
    /// The ground state is normally index 0, with excited levels numbered in
    /// identifier order after it. `None` if the level is not in the level
    /// scheme.
    ///
    /// Fails if the level table can not be loaded.
    pub fn state_index(&self, id: Nucid) -> Result<Option<u32>> {
        let block = id.ground_state()..=id.last_in_block();
        let levels = self
            .levels
            .range_with(block, || self.load_levels(), |k, _| *k)?;

        Ok(levels
            .iter()
            .position(|level| *level == id)
            .and_then(|i| u32::try_from(i).ok()))
    }
}
