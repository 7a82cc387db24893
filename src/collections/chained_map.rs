use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::Result;

use super::bucket::ArrayMap;
use super::iterators::ChainedIter;

const INITIAL_CAPACITY: usize = 16;
const LOAD_FACTOR: f64 = 0.75;

/// Hash map with chaining collision resolution.
///
/// Each table slot holds an [`ArrayMap`] of the entries whose hash lands in
/// it. The table doubles when the load factor crosses 0.75 or when a single
/// chain outgrows the table itself (severe clustering). Iteration order is
/// unspecified across resizes but stable for one unmutated state.
#[derive(Debug, Clone)]
pub struct ChainedMap<K, V> {
    buckets: Vec<ArrayMap<K, V>>,
    len: usize,
}

impl<K, V> ChainedMap<K, V>
where
    K: Hash + Eq,
{
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: (0..capacity.max(1)).map(|_| ArrayMap::new()).collect(),
            len: 0,
        }
    }

    fn bucket_index<Q>(key: &Q, capacity: usize) -> usize
    where
        Q: Hash + ?Sized,
    {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % capacity
    }

    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[Self::bucket_index(key, self.buckets.len())].get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = Self::bucket_index(key, self.buckets.len());
        self.buckets[index].get_mut(key)
    }

    /// Inserts or overwrites, returning the previous value if the key was
    /// already present. Never fails.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[allow(clippy::cast_precision_loss)]
        if self.len as f64 / self.buckets.len() as f64 > LOAD_FACTOR {
            self.resize();
        }

        let index = Self::bucket_index(&key, self.buckets.len());
        let previous = self.buckets[index].insert(key, value);

        if previous.is_none() {
            self.len += 1;
            // Safety valve: a chain longer than the table means the hash is
            // clustering badly for the current capacity.
            if self.buckets[index].len() > self.buckets.len() {
                self.resize();
            }
        }

        previous
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = Self::bucket_index(key, self.buckets.len());
        let value = self.buckets[index].remove(key)?;
        self.len -= 1;
        Ok(value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[Self::bucket_index(key, self.buckets.len())].contains_key(key)
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> ChainedIter<'_, K, V> {
        ChainedIter::new(&self.buckets)
    }

    /// Rehashes every live entry into a table of twice the capacity. The new
    /// table is fully built before it replaces the old one.
    fn resize(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let old_buckets = std::mem::replace(
            &mut self.buckets,
            (0..new_capacity).map(|_| ArrayMap::new()).collect(),
        );

        for bucket in old_buckets {
            for (key, value) in bucket.into_pairs() {
                let index = Self::bucket_index(&key, new_capacity);
                self.buckets[index].insert(key, value);
            }
        }
    }
}

impl<K: Hash + Eq, V> Default for ChainedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
