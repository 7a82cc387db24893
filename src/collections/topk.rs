use crate::error::{Error, Result};

use super::heap::QuaternaryHeap;

/// Selects the `k` largest elements, returned in ascending order.
///
/// Keeps a min-heap bounded at `k` entries and evicts the minimum whenever it
/// overflows, so the whole selection runs in O(n log k). Asking for more
/// elements than exist returns every element sorted ascending; `k = 0`
/// returns an empty vec.
pub fn top_k<T, I>(k: i64, items: I) -> Result<Vec<T>>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    if k < 0 {
        return Err(Error::InvalidArgument(format!(
            "k must be non-negative, got {k}"
        )));
    }

    #[allow(clippy::cast_sign_loss)]
    let k = k as usize;

    let mut heap = QuaternaryHeap::new();
    for item in items {
        heap.insert(item);
        if heap.len() > k {
            heap.remove_min()?;
        }
    }

    let mut selected = Vec::with_capacity(heap.len());
    while let Ok(item) = heap.remove_min() {
        selected.push(item);
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_largest_in_ascending_order() {
        let top = top_k(5, 0..20).expect("Failed to select top k");
        assert_eq!(top, vec![15, 16, 17, 18, 19]);
    }

    #[test]
    fn returns_exactly_k_elements() {
        let top = top_k(10, 0..20).expect("Failed to select top k");
        assert_eq!(top.len(), 10);
    }

    #[test]
    fn k_of_zero_is_empty() {
        let top = top_k(0, 0..20).expect("Failed to select top k");
        assert!(top.is_empty());
    }

    #[test]
    fn k_larger_than_input_sorts_everything() {
        let top = top_k(25, (0..20).rev()).expect("Failed to select top k");
        assert_eq!(top, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn negative_k_is_invalid() {
        assert!(matches!(
            top_k(-1, 0..20),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn orders_comparable_objects() {
        let words = ["a", "b", "apple", "ape", "banana", "bad", "a"];
        let top = top_k(7, words).expect("Failed to select top k");

        assert_eq!(top, vec!["a", "a", "ape", "apple", "b", "bad", "banana"]);
    }

    #[test]
    fn empty_input_is_empty() {
        let top: Vec<i32> = top_k(5, std::iter::empty()).expect("Failed to select top k");
        assert!(top.is_empty());
    }
}
