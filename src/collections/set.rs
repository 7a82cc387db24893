use std::borrow::Borrow;
use std::hash::Hash;

use super::chained_map::ChainedMap;
use super::iterators::ChainedIter;

/// Hash set built on the same chaining substrate as [`ChainedMap`].
#[derive(Debug, Clone)]
pub struct ChainedSet<T> {
    map: ChainedMap<T, ()>,
}

impl<T: Hash + Eq> Default for ChainedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ChainedSet<T>
where
    T: Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            map: ChainedMap::new(),
        }
    }

    /// Returns `true` if the value was not already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.map.insert(value, ()).is_none()
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(value)
    }

    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(value).is_ok()
    }

    pub const fn len(&self) -> usize {
        self.map.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> SetIter<'_, T> {
        SetIter {
            inner: self.map.iter(),
        }
    }
}

pub struct SetIter<'a, T> {
    inner: ChainedIter<'a, T, ()>,
}

impl<'a, T> Iterator for SetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(value, ())| value)
    }
}

impl<'a, T: Hash + Eq> IntoIterator for &'a ChainedSet<T> {
    type Item = &'a T;
    type IntoIter = SetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
