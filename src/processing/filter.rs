//! Stable element filtering for in-memory sequences.

/// Returns a new `Vec` containing clones of exactly the elements of `input`
/// for which `predicate` returns `true`, in their original relative order.
///
/// The predicate is evaluated exactly once per element, in index order. If no
/// element matches, the result is an empty `Vec` (never an absent value).
///
/// The returned `Vec` is compacted: its capacity equals its length. Matching
/// elements accumulate in a working buffer sized for the worst case (all
/// elements match), and the excess capacity is shed with a final
/// `shrink_to_fit` before returning.
pub fn filter<T, F>(input: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut out = Vec::with_capacity(input.len());
    for item in input {
        if predicate(item) {
            out.push(item.clone());
        }
    }
    out.shrink_to_fit();
    out
}

/// Fallible variant of [`filter`]: stops at the first `Err` and returns it
/// unchanged.
///
/// Elements past the failing one are never visited. On success the output is
/// identical to what [`filter`] would produce, compaction included.
pub fn try_filter<T, E, F>(input: &[T], mut predicate: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T) -> Result<bool, E>,
{
    let mut out = Vec::with_capacity(input.len());
    for item in input {
        if predicate(item)? {
            out.push(item.clone());
        }
    }
    out.shrink_to_fit();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{filter, try_filter};

    #[test]
    fn filter_keeps_even_numbers_in_order() {
        let out = filter(&[1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
        assert_eq!(out, vec![2, 4, 6]);
    }

    #[test]
    fn filter_preserves_relative_order_of_duplicates() {
        let input = vec![(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd')];
        let out = filter(&input, |(k, _)| *k == 2);
        assert_eq!(out, vec![(2, 'b'), (2, 'd')]);
        // Original unchanged
        assert_eq!(input.len(), 4);
    }

    #[test]
    fn filter_empty_returns_empty() {
        let out: Vec<i64> = filter(&[], |_| true);
        assert!(out.is_empty());
    }

    #[test]
    fn filter_all_false_returns_empty_with_no_spare_capacity() {
        let out = filter(&[1, 2, 3], |n| *n > 10);
        assert!(out.is_empty());
        assert_eq!(out.capacity(), 0);
    }

    #[test]
    fn filter_result_capacity_matches_length() {
        let out = filter(&[1, 2, 3, 4, 5, 6, 7, 8], |n| n % 2 == 0);
        assert_eq!(out, vec![2, 4, 6, 8]);
        assert_eq!(out.capacity(), out.len());
    }

    #[test]
    fn filter_evaluates_predicate_once_per_element_in_index_order() {
        let mut seen = Vec::new();
        let _ = filter(&[5, 6, 7], |n| {
            seen.push(*n);
            false
        });
        assert_eq!(seen, vec![5, 6, 7]);
    }

    #[test]
    fn try_filter_collects_on_success() {
        let out: Result<Vec<i64>, String> = try_filter(&[1, 2, 3, 4], |n| Ok(n % 2 == 0));
        let out = out.unwrap();
        assert_eq!(out, vec![2, 4]);
        assert_eq!(out.capacity(), out.len());
    }

    #[test]
    fn try_filter_short_circuits_on_first_error() {
        let mut calls = 0;
        let out: Result<Vec<i64>, &str> = try_filter(&[1, 2, 3], |n| {
            calls += 1;
            if *n == 2 { Err("boom") } else { Ok(true) }
        });
        assert_eq!(out.unwrap_err(), "boom");
        assert_eq!(calls, 2);
    }
}
