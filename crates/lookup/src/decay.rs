//! Decay constants, branch ratios, and decay channels
//!
//! Two reference tables are involved:
//!
//! - `/decay/half_life` gives one scalar per nuclide or channel, with
//!   estimates of zero remembered for anything missing
//! - `/decay/decays` gives full channel records that are looked up exactly,
//!   with zeros for missing channels that are never remembered

// standard library
use std::collections::{BTreeMap, BTreeSet};

// nucdata modules
use nucdata_nucname::Nucid;
use nucdata_store::{ReferenceStore, Table};

// internal modules
use crate::cache::LoadPolicy;
use crate::data::NuclearData;
use crate::error::Result;
use crate::records::{DecayField, DecayRecord, HalfLifeRecord};

/// Scalar tables derived from the half-life rows
///
/// Rows for a nuclide's ground level take precedence, otherwise the first row
/// seen for a key is kept.
#[derive(Debug, Default)]
struct HalfLifeTables {
    half_life: BTreeMap<Nucid, f64>,
    decay_const: BTreeMap<Nucid, f64>,
    branch_ratio: BTreeMap<(Nucid, Nucid), f64>,
    children: BTreeMap<Nucid, BTreeSet<Nucid>>,
}

impl HalfLifeTables {
    fn from_rows(rows: &[HalfLifeRecord]) -> Self {
        let mut tables = Self::default();

        for row in rows {
            let ground = row.level == 0.0;
            let channel = (row.from_nuc, row.to_nuc);

            if ground || !tables.half_life.contains_key(&row.from_nuc) {
                tables.half_life.insert(row.from_nuc, row.half_life);
            }

            if ground || !tables.decay_const.contains_key(&row.from_nuc) {
                tables.decay_const.insert(row.from_nuc, row.decay_const);
            }

            if ground || !tables.branch_ratio.contains_key(&channel) {
                tables.branch_ratio.insert(channel, row.branch_ratio);
            }

            // stable entries list themselves with a zero decay constant
            if row.decay_const != 0.0 {
                tables
                    .children
                    .entry(row.from_nuc)
                    .or_default()
                    .insert(row.to_nuc);
            }
        }

        tables
    }
}

impl<S: ReferenceStore> NuclearData<S> {
    fn load_half_lives(&self) -> Result<()> {
        self.half_life_guard.run(
            || {
                self.half_life.needs_load()
                    || self.decay_const.needs_load()
                    || self.branch_ratio.needs_load()
                    || self.decay_children.needs_load()
            },
            || {
                let rows: Vec<HalfLifeRecord> = self.read_rows(Table::HalfLife)?;
                let tables = HalfLifeTables::from_rows(&rows);
                self.half_life.fill(tables.half_life);
                self.decay_const.fill(tables.decay_const);
                self.branch_ratio.fill(tables.branch_ratio);
                self.decay_children.fill(tables.children);
                Ok(())
            },
        )
    }

    fn load_decays(&self) -> Result<()> {
        self.load_records(&self.decays_guard, &self.decays, Table::Decays, |r| {
            (r.parent, r.daughter)
        })
    }

    /// Decay constant (1/s)
    ///
    /// Zero for anything not in the half-life table, which is remembered.
    ///
    /// Fails if the half-life table can not be loaded.
    pub fn decay_const(&self, id: Nucid) -> Result<f64> {
        self.decay_const.lookup(
            &id,
            LoadPolicy::Propagate,
            || self.load_half_lives(),
            |_| 0.0,
        )
    }

    /// Fraction of a parent's decays that go to a daughter
    ///
    /// Zero for any channel not in the half-life table, which is remembered.
    ///
    /// Fails if the half-life table can not be loaded.
    pub fn branch_ratio(&self, parent: Nucid, daughter: Nucid) -> Result<f64> {
        self.branch_ratio.lookup(
            &(parent, daughter),
            LoadPolicy::Propagate,
            || self.load_half_lives(),
            |_| 0.0,
        )
    }

    /// Every daughter a nuclide decays to
    ///
    /// Empty for stable or unknown nuclides, which is remembered.
    ///
    /// ```rust
    /// # use nucdata_lookup::{HalfLifeRecord, NuclearData};
    /// # use nucdata_nucname::Nucid;
    /// # use nucdata_store::{Dataset, Table};
    /// let co60 = HalfLifeRecord {
    ///     from_nuc: Nucid(270600000),
    ///     to_nuc: Nucid(280600000),
    ///     half_life: 1.6634e8,
    ///     decay_const: 4.167e-9,
    ///     branch_ratio: 1.0,
    ///     ..Default::default()
    /// };
    ///
    /// let dataset = Dataset::new().with_table(Table::HalfLife, &[co60]).unwrap();
    /// let data = NuclearData::new(dataset);
    ///
    /// let children = data.decay_children(Nucid(270600000)).unwrap();
    /// assert!(children.contains(&Nucid(280600000)));
    /// assert!(data.decay_children(Nucid(280600000)).unwrap().is_empty());
    /// ```
    ///
    /// Fails if the half-life table can not be loaded.
    pub fn decay_children(&self, id: Nucid) -> Result<BTreeSet<Nucid>> {
        self.decay_children.lookup(
            &id,
            LoadPolicy::Propagate,
            || self.load_half_lives(),
            |_| BTreeSet::new(),
        )
    }

    /// Half-life of a nuclide from the half-life table (s)
    ///
    /// Zero for anything not in the table, which is remembered. See
    /// [half_life()](NuclearData::half_life) for the level scheme value.
    ///
    /// Fails if the half-life table can not be loaded.
    pub fn decay_half_life_of(&self, id: Nucid) -> Result<f64> {
        self.half_life.lookup(
            &id,
            LoadPolicy::Propagate,
            || self.load_half_lives(),
            |_| 0.0,
        )
    }

    fn decay_pair(
        &self,
        parent: Nucid,
        daughter: Nucid,
        value: DecayField,
        error: DecayField,
    ) -> Result<(f64, f64)> {
        let pair = self
            .decays
            .project(&(parent, daughter), (value, error), || self.load_decays())?;
        Ok(pair.unwrap_or_default())
    }

    fn decay_pairs(
        &self,
        parent: Nucid,
        value: DecayField,
        error: DecayField,
    ) -> Result<Vec<(f64, f64)>> {
        self.decays.project_range(
            (parent, Nucid::MIN)..=(parent, Nucid::MAX),
            (value, error),
            || self.load_decays(),
        )
    }

    /// Half-life of a decay channel and its error (s)
    ///
    /// `(0.0, 0.0)` if the channel is not in the decays table.
    ///
    /// Fails if the decays table can not be loaded.
    pub fn decay_half_life(&self, parent: Nucid, daughter: Nucid) -> Result<(f64, f64)> {
        self.decay_pair(
            parent,
            daughter,
            DecayField::HalfLife,
            DecayField::HalfLifeError,
        )
    }

    /// Half-lives and errors of every decay channel of a parent (s)
    pub fn decay_half_lifes(&self, parent: Nucid) -> Result<Vec<(f64, f64)>> {
        self.decay_pairs(parent, DecayField::HalfLife, DecayField::HalfLifeError)
    }

    /// Branch ratio of a decay channel
    ///
    /// `0.0` if the channel is not in the decays table.
    ///
    /// Fails if the decays table can not be loaded.
    pub fn decay_branch_ratio(&self, parent: Nucid, daughter: Nucid) -> Result<f64> {
        let ratio = self.decays.project(
            &(parent, daughter),
            DecayField::BranchRatio,
            || self.load_decays(),
        )?;
        Ok(ratio.unwrap_or_default())
    }

    /// Branch ratios of every decay channel of a parent, in daughter order
    pub fn decay_branch_ratios(&self, parent: Nucid) -> Result<Vec<f64>> {
        self.decays.project_range(
            (parent, Nucid::MIN)..=(parent, Nucid::MAX),
            DecayField::BranchRatio,
            || self.load_decays(),
        )
    }

    /// Photon branch ratio of a decay channel and its error
    pub fn decay_photon_branch_ratio(
        &self,
        parent: Nucid,
        daughter: Nucid,
    ) -> Result<(f64, f64)> {
        self.decay_pair(
            parent,
            daughter,
            DecayField::PhotonBranchRatio,
            DecayField::PhotonBranchRatioError,
        )
    }

    /// Photon branch ratios and errors of every decay channel of a parent
    pub fn decay_photon_branch_ratios(&self, parent: Nucid) -> Result<Vec<(f64, f64)>> {
        self.decay_pairs(
            parent,
            DecayField::PhotonBranchRatio,
            DecayField::PhotonBranchRatioError,
        )
    }

    /// Beta branch ratio of a decay channel and its error
    pub fn decay_beta_branch_ratio(&self, parent: Nucid, daughter: Nucid) -> Result<(f64, f64)> {
        self.decay_pair(
            parent,
            daughter,
            DecayField::BetaBranchRatio,
            DecayField::BetaBranchRatioError,
        )
    }

    /// Beta branch ratios and errors of every decay channel of a parent
    pub fn decay_beta_branch_ratios(&self, parent: Nucid) -> Result<Vec<(f64, f64)>> {
        self.decay_pairs(
            parent,
            DecayField::BetaBranchRatio,
            DecayField::BetaBranchRatioError,
        )
    }

    /// Decay mode of a channel, e.g. `B-`
    ///
    /// `None` if the channel is not in the decays table.
    ///
    /// Fails if the decays table can not be loaded.
    pub fn decay_mode(&self, parent: Nucid, daughter: Nucid) -> Result<Option<String>> {
        self.decays.find_with(
            &(parent, daughter),
            || self.load_decays(),
            |record: &DecayRecord| record.decay.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(from: u32, level: f64, to: u32, decay_const: f64, ratio: f64) -> HalfLifeRecord {
        HalfLifeRecord {
            from_nuc: Nucid(from),
            level,
            to_nuc: Nucid(to),
            half_life: 1.0 / decay_const.max(1e-30),
            decay_const,
            branch_ratio: ratio,
        }
    }

    #[test]
    fn ground_level_takes_precedence() {
        let rows = vec![
            row(952420000, 48.6, 962420000, 0.5, 0.2),
            row(952420000, 0.0, 962420000, 0.1, 0.8),
            row(952420000, 75.0, 962420000, 0.9, 0.4),
        ];
        let tables = HalfLifeTables::from_rows(&rows);

        let channel = (Nucid(952420000), Nucid(962420000));
        assert_eq!(tables.decay_const[&Nucid(952420000)], 0.1);
        assert_eq!(tables.branch_ratio[&channel], 0.8);
    }

    #[test]
    fn first_excited_row_kept_without_ground() {
        let rows = vec![
            row(952420001, 48.6, 942420000, 0.5, 0.2),
            row(952420001, 75.0, 942420000, 0.9, 0.4),
        ];
        let tables = HalfLifeTables::from_rows(&rows);
        assert_eq!(tables.decay_const[&Nucid(952420001)], 0.5);
    }

    #[test]
    fn stable_rows_have_no_children() {
        let rows = vec![
            row(10010000, 0.0, 10010000, 0.0, 1.0),
            row(270600000, 0.0, 280600000, 4.167e-9, 1.0),
        ];
        let tables = HalfLifeTables::from_rows(&rows);

        assert!(!tables.children.contains_key(&Nucid(10010000)));
        assert_eq!(tables.children[&Nucid(270600000)].len(), 1);
    }
}
