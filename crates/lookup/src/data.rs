// standard library
use std::collections::BTreeSet;

// external crates
use log::debug;
use serde::de::DeserializeOwned;

// nucdata modules
use nucdata_nucname::Nucid;
use nucdata_store::{DatasetFile, ReferenceStore, Table};

// internal modules
use crate::cache::{CacheTable, LoadGuard};
use crate::emission::EmissionCatalog;
use crate::error::Result;
use crate::records::{
    AlphaRecord, BetaRecord, Complex, DecayRecord, EcbpRecord, GammaRecord, LevelRecord,
    NdsYieldRecord,
};

/// Memoized access to every reference quantity
///
/// Owns one [CacheTable] per quantity along with the guards for their bulk
/// loaders. Nothing is read from the store until the first lookup that needs
/// it, and nothing loaded or estimated is ever forgotten.
///
/// All queries take canonical [Nucid]s. Names and raw buffers convert through
/// [Nucid]'s `FromStr` and `TryFrom` implementations.
///
/// ```rust, no_run
/// # use nucdata_lookup::NuclearData;
/// # use nucdata_nucname::Nucid;
/// // Dataset path from NUCDATA_PATH, or nuc_data.bin by default
/// let data = NuclearData::from_env();
///
/// let u235: Nucid = "U235".parse().unwrap();
/// println!("{} amu", data.atomic_mass(u235));
/// ```
///
/// Any [ReferenceStore] will do, for example a directory of CSV tables.
///
/// ```rust, no_run
/// # use nucdata_lookup::NuclearData;
/// # use nucdata_store::CsvStore;
/// let data = NuclearData::new(CsvStore::new("/path/to/tables"));
/// ```
///
/// The context is `Sync` as long as the store is, so one instance can be
/// shared between threads.
#[derive(Debug)]
pub struct NuclearData<S = DatasetFile> {
    pub(crate) store: S,

    pub(crate) atomic_mass: CacheTable<Nucid, f64>,
    pub(crate) natural_abund: CacheTable<Nucid, f64>,
    pub(crate) mass_guard: LoadGuard,

    pub(crate) b_coherent: CacheTable<Nucid, Complex>,
    pub(crate) b_incoherent: CacheTable<Nucid, Complex>,
    pub(crate) scattering_guard: LoadGuard,

    pub(crate) half_life: CacheTable<Nucid, f64>,
    pub(crate) decay_const: CacheTable<Nucid, f64>,
    pub(crate) branch_ratio: CacheTable<(Nucid, Nucid), f64>,
    pub(crate) decay_children: CacheTable<Nucid, BTreeSet<Nucid>>,
    pub(crate) half_life_guard: LoadGuard,

    pub(crate) decays: CacheTable<(Nucid, Nucid), DecayRecord>,
    pub(crate) decays_guard: LoadGuard,

    pub(crate) levels: CacheTable<Nucid, LevelRecord>,
    pub(crate) levels_guard: LoadGuard,

    pub(crate) wims_yields: CacheTable<(Nucid, Nucid), f64>,
    pub(crate) wims_guard: LoadGuard,
    pub(crate) nds_yields: CacheTable<(Nucid, Nucid), NdsYieldRecord>,
    pub(crate) nds_guard: LoadGuard,

    pub(crate) gammas: EmissionCatalog<GammaRecord>,
    pub(crate) alphas: EmissionCatalog<AlphaRecord>,
    pub(crate) betas: EmissionCatalog<BetaRecord>,
    pub(crate) ecbp: EmissionCatalog<EcbpRecord>,
}

impl NuclearData<DatasetFile> {
    /// Use the binary dataset given by the environment
    ///
    /// The path is taken from `NUCDATA_PATH` if set, otherwise `nuc_data.bin`
    /// in the working directory. Nothing is opened until the first lookup.
    pub fn from_env() -> Self {
        Self::new(DatasetFile::from_env())
    }
}

impl<S: ReferenceStore> NuclearData<S> {
    /// Empty caches in front of any reference store
    pub fn new(store: S) -> Self {
        Self {
            store,
            atomic_mass: CacheTable::new("atomic masses"),
            natural_abund: CacheTable::new("natural abundances"),
            mass_guard: LoadGuard::default(),
            b_coherent: CacheTable::new("coherent scattering lengths"),
            b_incoherent: CacheTable::new("incoherent scattering lengths"),
            scattering_guard: LoadGuard::default(),
            half_life: CacheTable::new("half-lives"),
            decay_const: CacheTable::new("decay constants"),
            branch_ratio: CacheTable::new("branch ratios"),
            decay_children: CacheTable::new("decay children"),
            half_life_guard: LoadGuard::default(),
            decays: CacheTable::new("decays"),
            decays_guard: LoadGuard::default(),
            levels: CacheTable::new("levels"),
            levels_guard: LoadGuard::default(),
            wims_yields: CacheTable::new("WIMS fission yields"),
            wims_guard: LoadGuard::default(),
            nds_yields: CacheTable::new("NDS fission yields"),
            nds_guard: LoadGuard::default(),
            gammas: EmissionCatalog::new("gamma lines", "gamma lines by energy"),
            alphas: EmissionCatalog::new("alpha lines", "alpha lines by energy"),
            betas: EmissionCatalog::new("beta lines", "beta lines by energy"),
            ecbp: EmissionCatalog::new("ecbp lines", "ecbp lines by energy"),
        }
    }

    /// The reference store behind the caches
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read a whole table from the store
    pub(crate) fn read_rows<R: DeserializeOwned>(&self, table: Table) -> Result<Vec<R>> {
        let rows: Vec<R> = self.store.read_table(table)?;
        debug!("Read {} rows from {table}", rows.len());
        Ok(rows)
    }

    /// Guarded load of a table that caches whole records under one key
    pub(crate) fn load_records<K, R>(
        &self,
        guard: &LoadGuard,
        cache: &CacheTable<K, R>,
        table: Table,
        key: impl Fn(&R) -> K,
    ) -> Result<()>
    where
        K: Ord + Clone + std::fmt::Debug,
        R: DeserializeOwned + Clone,
    {
        guard.run(
            || cache.needs_load(),
            || {
                let rows: Vec<R> = self.read_rows(table)?;
                let added = cache.fill(rows.into_iter().map(|r| (key(&r), r)));
                debug!("Cached {added} {}", cache.name());
                Ok(())
            },
        )
    }
}
