//! Recursive binary search over sorted slices.

use std::cmp::Ordering;

/// Check whether `key` occurs in `sorted`.
///
/// `sorted` must be in non-decreasing order. This is a caller contract: it is
/// only verified in debug builds, and an unsorted input gives an unspecified
/// (but memory-safe) answer.
pub fn binary_search<T: Ord>(sorted: &[T], key: &T) -> bool {
    debug_assert!(sorted.is_sorted(), "binary_search requires sorted input");

    if sorted.is_empty() {
        return false;
    }
    search_range(sorted, key, 0, sorted.len())
}

/// Search the half-open range `[left, right)`.
fn search_range<T: Ord>(values: &[T], key: &T, left: usize, right: usize) -> bool {
    if left >= right {
        return false;
    }

    let mid = left + (right - left) / 2;
    match key.cmp(&values[mid]) {
        Ordering::Equal => true,
        Ordering::Less => search_range(values, key, left, mid),
        Ordering::Greater => search_range(values, key, mid + 1, right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_and_missing() {
        let values = [1, 3, 5, 7, 9, 11];
        for v in values {
            assert!(binary_search(&values, &v), "expected to find {v}");
        }
        for v in [0, 2, 4, 6, 8, 10, 12] {
            assert!(!binary_search(&values, &v), "did not expect {v}");
        }
    }

    #[test]
    fn test_empty() {
        let values: [i32; 0] = [];
        assert!(!binary_search(&values, &0));
        assert!(!binary_search(&values, &i32::MIN));
    }

    #[test]
    fn test_single_and_duplicates() {
        assert!(binary_search(&[4], &4));
        assert!(!binary_search(&[4], &5));
        assert!(binary_search(&[2, 2, 2, 2], &2));
    }

    #[test]
    fn test_extreme_keys() {
        let values = [i32::MIN, 0, i32::MAX];
        assert!(binary_search(&values, &i32::MIN));
        assert!(binary_search(&values, &i32::MAX));
        assert!(!binary_search(&values, &1));
    }
}
