//! Lazily loaded, memoizing lookup tables
//!
//! Every quantity follows the same pattern:
//!
//! 1. Return the cached value if the key is present
//! 2. If the table has never been filled, bulk load it once and look again
//! 3. Otherwise apply the quantity's estimate, remember it, and return it
//!
//! [CacheTable] implements this once for any ordered key, leaving the load and
//! the estimate to the caller.

// standard library
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::ops::RangeBounds;
use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// external crates
use log::{trace, warn};

// internal modules
use crate::error::Result;

/// What to do when a bulk load fails
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Hand the load failure back to the caller
    Propagate,
    /// Log the failure and fall through to the estimate
    Estimate,
}

/// Extract a single field from a record
///
/// Each record type has small enums naming its fields, grouped by the type
/// they project to. A pair of fields projects to a pair of values.
pub trait Project<F> {
    /// Type of the projected field
    type Output;

    /// Value of `field` for this record
    fn project(&self, field: F) -> Self::Output;
}

impl<R, A, B> Project<(A, B)> for R
where
    R: Project<A> + Project<B>,
{
    type Output = (<R as Project<A>>::Output, <R as Project<B>>::Output);

    fn project(&self, (a, b): (A, B)) -> Self::Output {
        (
            <R as Project<A>>::project(self, a),
            <R as Project<B>>::project(self, b),
        )
    }
}

/// One-shot guard for a bulk loader
///
/// Several tables can share one loader. The guard serialises loads so that
/// concurrent first misses only read the reference store once. The `pending`
/// check runs under the lock, so anything loaded by another caller in the
/// meantime is seen.
#[derive(Debug, Default)]
pub struct LoadGuard {
    lock: Mutex<()>,
}

impl LoadGuard {
    /// Run `load` if `pending` is still true once the guard is held
    pub fn run<P, L>(&self, pending: P, load: L) -> Result<()>
    where
        P: FnOnce() -> bool,
        L: FnOnce() -> Result<()>,
    {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        match pending() {
            true => load(),
            false => Ok(()),
        }
    }
}

#[derive(Debug)]
struct Entries<K, V> {
    map: BTreeMap<K, V>,
    loaded: bool,
}

/// A memoizing table with a one-time bulk load
///
/// Keys are anything ordered, typically a [Nucid](nucdata_nucname::Nucid), a
/// pair of them, or a nuclide paired with a [Real](nucdata_utils::Real).
///
/// The table is never cleared. Values filled by a load and values remembered
/// from an estimate are indistinguishable afterwards.
///
/// ```rust
/// # use nucdata_lookup::{CacheTable, LoadPolicy};
/// let table: CacheTable<u32, f64> = CacheTable::new("example");
///
/// let load = || {
///     table.fill([(1, 1.5), (2, 2.5)]);
///     Ok(())
/// };
///
/// // First miss loads the table
/// let value = table.lookup(&2, LoadPolicy::Propagate, load, |_| 0.0).unwrap();
/// assert_eq!(value, 2.5);
///
/// // Later misses are estimated and remembered
/// let value = table.lookup(&7, LoadPolicy::Propagate, || Ok(()), |_| -1.0).unwrap();
/// assert_eq!(value, -1.0);
/// assert_eq!(table.get(&7), Some(-1.0));
/// ```
#[derive(Debug)]
pub struct CacheTable<K, V> {
    name: &'static str,
    inner: RwLock<Entries<K, V>>,
}

impl<K, V> CacheTable<K, V>
where
    K: Ord + Clone + Debug,
    V: Clone,
{
    /// An empty table, named for log messages
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: RwLock::new(Entries {
                map: BTreeMap::new(),
                loaded: false,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Entries<K, V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries<K, V>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Name of the table
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of entries, loaded or estimated
    pub fn len(&self) -> usize {
        self.read().map.len()
    }

    /// True if there are no entries at all
    pub fn is_empty(&self) -> bool {
        self.read().map.is_empty()
    }

    /// True if the table is empty and no load has succeeded yet
    pub fn needs_load(&self) -> bool {
        let entries = self.read();
        entries.map.is_empty() && !entries.loaded
    }

    /// Check for a key without loading
    pub fn contains_key(&self, key: &K) -> bool {
        self.read().map.contains_key(key)
    }

    /// Copy of the value for a key, without loading
    pub fn get(&self, key: &K) -> Option<V> {
        self.read().map.get(key).cloned()
    }

    /// Apply `f` to the value for a key, without loading
    pub fn with_entry<T>(&self, key: &K, f: impl FnOnce(&V) -> T) -> Option<T> {
        self.read().map.get(key).map(f)
    }

    /// Bulk insert the rows of a load and mark the table as loaded
    ///
    /// Duplicate keys within `rows` resolve to the last one seen. Keys that
    /// are already present keep their current value, so a key never changes
    /// its answer once given.
    ///
    /// Returns the number of new keys.
    pub fn fill<I>(&self, rows: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let loaded: BTreeMap<K, V> = rows.into_iter().collect();

        let mut entries = self.write();
        let before = entries.map.len();
        for (key, value) in loaded {
            entries.map.entry(key).or_insert(value);
        }
        entries.loaded = true;
        entries.map.len() - before
    }

    /// Remember a value for a key, keeping any value already present
    ///
    /// Returns whichever value the table holds afterwards.
    pub fn memoize(&self, key: K, value: V) -> V {
        self.write().map.entry(key).or_insert(value).clone()
    }

    /// First entry in key order for which `f` returns something
    pub fn scan<T>(&self, mut f: impl FnMut(&K, &V) -> Option<T>) -> Option<T> {
        self.read().map.iter().find_map(|(k, v)| f(k, v))
    }

    /// Map every entry within `range`, in key order, without loading
    pub fn map_range<R, T>(&self, range: R, mut f: impl FnMut(&K, &V) -> T) -> Vec<T>
    where
        R: RangeBounds<K>,
    {
        self.read().map.range(range).map(|(k, v)| f(k, v)).collect()
    }

    /// Load if needed, then the value for `key` or a remembered estimate
    ///
    /// The `load` is only attempted when the table [needs_load()]. How a
    /// failed load is handled depends on the `policy`:
    ///
    /// - [LoadPolicy::Propagate] returns the error
    /// - [LoadPolicy::Estimate] logs a warning and carries on
    ///
    /// On a miss after loading, `fallback` is called with the table to
    /// produce a value that is remembered under `key` and returned.
    ///
    /// No locks are held while `load` or `fallback` run, so a fallback may
    /// look up other keys in the same table.
    ///
    /// [needs_load()]: CacheTable::needs_load
    pub fn lookup<L, F>(&self, key: &K, policy: LoadPolicy, load: L, fallback: F) -> Result<V>
    where
        L: FnOnce() -> Result<()>,
        F: FnOnce(&Self) -> V,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }

        if self.needs_load() {
            match load() {
                Ok(()) => {
                    if let Some(value) = self.get(key) {
                        return Ok(value);
                    }
                }
                Err(e) if policy == LoadPolicy::Estimate => {
                    warn!("Unable to load {} ({e}), estimating {key:?}", self.name);
                }
                Err(e) => return Err(e),
            }
        }

        let estimate = fallback(self);
        trace!("{}: remembering estimate for {key:?}", self.name);
        Ok(self.memoize(key.clone(), estimate))
    }

    /// Load if needed, then apply `f` to the value for `key`
    ///
    /// Nothing is estimated or remembered on a miss.
    pub fn find_with<L, T>(&self, key: &K, load: L, f: impl FnOnce(&V) -> T) -> Result<Option<T>>
    where
        L: FnOnce() -> Result<()>,
    {
        if self.needs_load() && !self.contains_key(key) {
            load()?;
        }
        Ok(self.with_entry(key, f))
    }

    /// Load if needed, then map every entry within `range` in key order
    ///
    /// An empty result is a valid answer and nothing is estimated.
    pub fn range_with<R, L, T>(
        &self,
        range: R,
        load: L,
        f: impl FnMut(&K, &V) -> T,
    ) -> Result<Vec<T>>
    where
        R: RangeBounds<K>,
        L: FnOnce() -> Result<()>,
    {
        if self.needs_load() {
            load()?;
        }
        Ok(self.map_range(range, f))
    }

    /// Load if needed, then project one field of the record under `key`
    pub fn project<F, L>(&self, key: &K, field: F, load: L) -> Result<Option<V::Output>>
    where
        V: Project<F>,
        L: FnOnce() -> Result<()>,
    {
        self.find_with(key, load, |record| record.project(field))
    }

    /// Load if needed, then project one field of every record in `range`
    pub fn project_range<R, F, L>(&self, range: R, field: F, load: L) -> Result<Vec<V::Output>>
    where
        R: RangeBounds<K>,
        V: Project<F>,
        F: Copy,
        L: FnOnce() -> Result<()>,
    {
        self.range_with(range, load, |_, record| record.project(field))
    }
}
