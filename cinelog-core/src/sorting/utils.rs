//! Utility functions for sorting operations
//!
//! Permutation checks, move-based reordering and the stable index sort used
//! by the table sorter.

use crate::error::SortError;
use std::cmp::Ordering;

/// Check that `order` is a permutation of `0..len`
pub fn validate_permutation(len: usize, order: &[usize]) -> Result<(), SortError> {
    if order.len() != len {
        return Err(SortError::InvalidPermutation {
            reason: format!("expected {len} indices, got {}", order.len()),
        });
    }

    let mut seen = vec![false; len];
    for &idx in order {
        match seen.get_mut(idx) {
            Some(slot) if !*slot => *slot = true,
            Some(_) => {
                return Err(SortError::InvalidPermutation {
                    reason: format!("index {idx} appears more than once"),
                });
            }
            None => {
                return Err(SortError::InvalidPermutation {
                    reason: format!("index {idx} is out of bounds for {len} rows"),
                });
            }
        }
    }
    Ok(())
}

/// Reorder items in-place based on the given indices
///
/// Each index in `order` names the element that should end up at that
/// position. Elements are moved, never cloned; on error `items` is untouched.
pub fn apply_permutation<T>(items: &mut Vec<T>, order: &[usize]) -> Result<(), SortError> {
    validate_permutation(items.len(), order)?;

    let mut slots: Vec<Option<T>> = items.drain(..).map(Some).collect();
    items.extend(order.iter().filter_map(|&idx| slots[idx].take()));
    Ok(())
}

/// Stable merge sort over the indices `0..len`.
///
/// `slice::sort_by` may panic when the comparator is not a total order, and a
/// column that mixes numeric and text cells does not give one. Merging only
/// moves the right-hand element ahead when the comparator says `Greater`, so
/// `Equal` always keeps the current relative order.
pub fn stable_sort_indices<F>(len: usize, mut compare: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut order: Vec<usize> = (0..len).collect();
    let mut scratch = Vec::with_capacity(len);
    merge_sort(&mut order, &mut scratch, &mut compare);
    order
}

fn merge_sort<F>(items: &mut [usize], scratch: &mut Vec<usize>, compare: &mut F)
where
    F: FnMut(usize, usize) -> Ordering,
{
    if items.len() < 2 {
        return;
    }

    let mid = items.len() / 2;
    merge_sort(&mut items[..mid], scratch, compare);
    merge_sort(&mut items[mid..], scratch, compare);

    scratch.clear();
    let (mut left, mut right) = (0, mid);
    while left < mid && right < items.len() {
        if compare(items[left], items[right]) == Ordering::Greater {
            scratch.push(items[right]);
            right += 1;
        } else {
            scratch.push(items[left]);
            left += 1;
        }
    }
    scratch.extend_from_slice(&items[left..mid]);
    scratch.extend_from_slice(&items[right..]);
    items.copy_from_slice(&scratch[..]);
}
