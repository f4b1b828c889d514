//! Binary search over a sorted slice, the array-backed counterpart to searching a
//! [`Tree`][crate::tree::Tree].

use std::cmp::Ordering;

/// Returns the index of an element equal to `target` in `sorted`, or `None` if there isn't one.
/// `sorted` must be in ascending order. If several elements are equal to `target` any one of
/// their indices may be returned.
///
/// # Examples
///
/// ```
/// use dsperf::search::binary_search;
///
/// let xs = [1, 3, 5, 7, 9];
///
/// assert_eq!(binary_search(&xs, &7), Some(3));
/// assert_eq!(binary_search(&xs, &4), None);
/// assert_eq!(binary_search::<i32>(&[], &4), None);
/// ```
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    // Half-open window so `high` never has to go below zero.
    let mut low = 0;
    let mut high = sorted.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match sorted[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}
