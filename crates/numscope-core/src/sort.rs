//! In-place selection sort.
//!
//! Quadratic in comparisons but performs at most `n - 1` swaps, which keeps
//! writes to the buffer minimal. Equal elements may be reordered.

/// Sort `values` in place into non-decreasing order.
///
/// For every position `i`, the remainder `i..` is scanned for its minimum,
/// which is then swapped into `i`. Slices of length 0 or 1 are left as-is.
pub fn selection_sort<T: Ord>(values: &mut [T]) {
    let len = values.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let mut min_idx = i;
        for j in (i + 1)..len {
            if values[j] < values[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            values.swap(i, min_idx);
        }
    }
}
