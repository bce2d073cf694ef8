//! In-place selection sort over a caller-supplied ordering.
//!
//! O(n²) comparisons, at most n - 1 swaps, O(1) extra space. Not stable:
//! equal elements may change their relative order.

/// Sort `items` in place so that no element is `less` than one before it.
///
/// `less` should be a strict weak ordering. If it is not, the result order
/// is unspecified but the call still terminates without panicking and the
/// slice remains a permutation of its input.
pub fn selection_sort<T, F>(items: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool,
{
    let len = items.len();
    for i in 0..len {
        let mut min_index = i;
        for j in (i + 1)..len {
            if less(&items[j], &items[min_index]) {
                min_index = j;
            }
        }

        if min_index != i {
            items.swap(i, min_index);
        }
    }
}

/// Selection sort a cloned working copy, leaving `items` untouched.
pub fn sorted_copy<T, F>(items: &[T], less: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut copy = items.to_vec();
    selection_sort(&mut copy, less);
    copy
}
