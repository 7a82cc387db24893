use std::borrow::Borrow;

use crate::error::{Error, Result};

/// Flat key/value container backing a single hash chain.
///
/// Lookups are linear scans, so this is only suitable for the handful of
/// entries that share a bucket. Removal swaps with the last pair; buckets
/// are unordered by contract.
#[derive(Debug, Clone)]
pub struct ArrayMap<K, V> {
    pairs: Vec<(K, V)>,
}

impl<K, V> ArrayMap<K, V>
where
    K: Eq,
{
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.pairs
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
            .ok_or(Error::NotFound)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.pairs
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
            .ok_or(Error::NotFound)
    }

    /// Inserts or overwrites, returning the previous value if the key was
    /// already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        for (k, v) in &mut self.pairs {
            if *k == key {
                return Some(std::mem::replace(v, value));
            }
        }
        self.pairs.push((key, value));
        None
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self
            .pairs
            .iter()
            .position(|(k, _)| k.borrow() == key)
            .ok_or(Error::NotFound)?;

        Ok(self.pairs.swap_remove(index).1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.pairs.iter().any(|(k, _)| k.borrow() == key)
    }
}

impl<K, V> ArrayMap<K, V> {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (K, V)> {
        self.pairs.iter()
    }

    pub fn into_pairs(self) -> Vec<(K, V)> {
        self.pairs
    }
}

impl<K: Eq, V> Default for ArrayMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut map = ArrayMap::new();

        assert_eq!(map.insert("a".to_string(), 1), None);
        assert_eq!(map.insert("b".to_string(), 2), None);
        assert_eq!(map.get("a").expect("Failed to get value"), &1);
        assert_eq!(map.get("b").expect("Failed to get value"), &2);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn insert_overwrites() {
        let mut map = ArrayMap::new();

        map.insert("a".to_string(), 1);
        assert_eq!(map.insert("a".to_string(), 5), Some(1));
        assert_eq!(map.get("a").expect("Failed to get value"), &5);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn remove_returns_value() {
        let mut map = ArrayMap::new();

        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);

        assert_eq!(map.remove("a").expect("Failed to remove value"), 1);
        assert!(!map.contains_key("a"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn missing_key_is_not_found() {
        let mut map: ArrayMap<String, i32> = ArrayMap::new();

        assert!(matches!(map.get("nope"), Err(Error::NotFound)));
        assert!(matches!(map.remove("nope"), Err(Error::NotFound)));
    }
}
