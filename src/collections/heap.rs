use crate::error::{Error, Result};

const BRANCHING: usize = 4;

/// Array-backed 4-ary min-heap.
///
/// Every node orders at or below each of its up-to-four children. The parent
/// of node `i` sits at `(i - 1) / 4`, its children at `4i + 1 ..= 4i + 4`.
/// Ties break arbitrarily.
#[derive(Debug, Clone)]
pub struct QuaternaryHeap<T> {
    items: Vec<T>,
}

impl<T> QuaternaryHeap<T>
where
    T: Ord,
{
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.percolate_up(self.items.len() - 1);
    }

    pub fn peek_min(&self) -> Result<&T> {
        self.items.first().ok_or(Error::EmptyContainer)
    }

    pub fn remove_min(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::EmptyContainer);
        }

        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.percolate_down(0);
        }

        Ok(min)
    }

    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn percolate_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / BRANCHING;
            if self.items[index] >= self.items[parent] {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn percolate_down(&mut self, mut index: usize) {
        loop {
            let first_child = BRANCHING * index + 1;
            if first_child >= self.items.len() {
                break;
            }

            let last_child = (first_child + BRANCHING).min(self.items.len());
            let mut smallest = index;
            for child in first_child..last_child {
                if self.items[child] < self.items[smallest] {
                    smallest = child;
                }
            }

            if smallest == index {
                break;
            }
            self.items.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> Default for QuaternaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
