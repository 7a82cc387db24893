use std::slice::Iter as SliceIter;

use super::bucket::ArrayMap;
use super::chained_map::ChainedMap;

/// Single-pass traversal over every live entry of a [`ChainedMap`].
///
/// Walks the bucket table in slot order, draining one chain before moving to
/// the next. Order is unspecified across resizes but fixed for one unmutated
/// snapshot of the map.
pub struct ChainedIter<'a, K, V> {
    buckets: SliceIter<'a, ArrayMap<K, V>>,
    pairs: SliceIter<'a, (K, V)>,
}

impl<'a, K, V> ChainedIter<'a, K, V> {
    pub(super) fn new(buckets: &'a [ArrayMap<K, V>]) -> Self {
        Self {
            buckets: buckets.iter(),
            pairs: [].iter(),
        }
    }
}

impl<'a, K, V> Iterator for ChainedIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, value)) = self.pairs.next() {
                return Some((key, value));
            }

            self.pairs = self.buckets.next()?.iter();
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ChainedMap<K, V>
where
    K: std::hash::Hash + Eq,
{
    type Item = (&'a K, &'a V);
    type IntoIter = ChainedIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
