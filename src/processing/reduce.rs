//! Left-fold reductions for in-memory sequences.

use crate::error::{ProcessingError, ProcessingResult};

/// Reduces `input` to a single value by a strict left-to-right fold.
///
/// Starting from `init`, the accumulator function is applied once per
/// element, in index order: `acc = accumulate(acc, &input[i])`. Both the
/// visit order and the left-associativity are observable, so non-commutative
/// and non-associative accumulators behave exactly like the hand-written
/// loop. An empty input returns `init` unchanged with the accumulator never
/// invoked.
///
/// A panic raised by `accumulate` unwinds to the caller unchanged. For
/// accumulators that fail recoverably, use [`try_reduce`].
pub fn reduce<I, A, F>(input: &[I], init: A, mut accumulate: F) -> A
where
    F: FnMut(A, &I) -> A,
{
    input.iter().fold(init, |acc, item| accumulate(acc, item))
}

/// Fallible variant of [`reduce`]: stops at the first `Err` and returns it
/// unchanged.
///
/// Elements past the failing one are never visited.
pub fn try_reduce<I, A, E, F>(input: &[I], init: A, mut accumulate: F) -> Result<A, E>
where
    F: FnMut(A, &I) -> Result<A, E>,
{
    let mut acc = init;
    for item in input {
        acc = accumulate(acc, item)?;
    }
    Ok(acc)
}

/// Left fold seeded from the first element instead of an explicit initial
/// value.
///
/// Equivalent to `reduce(&input[1..], input[0].clone(), accumulate)` for
/// nonempty input. An empty input has no element to seed from and yields
/// [`ProcessingError::EmptySequence`].
pub fn reduce_first<T, F>(input: &[T], accumulate: F) -> ProcessingResult<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    match input.split_first() {
        Some((first, rest)) => Ok(reduce(rest, first.clone(), accumulate)),
        None => Err(ProcessingError::EmptySequence),
    }
}

#[cfg(test)]
mod tests {
    use super::{reduce, reduce_first, try_reduce};
    use crate::error::ProcessingError;

    #[test]
    fn reduce_sum_of_squares_with_seed() {
        let out = reduce(&[1_i64, 2, 3, 4], 1_i64, |acc, n| acc + n * n);
        assert_eq!(out, 31);
    }

    #[test]
    fn reduce_empty_returns_init_without_invoking_accumulator() {
        let out = reduce(&[] as &[i64], 42, |_, _| panic!("accumulator must not run"));
        assert_eq!(out, 42);
    }

    #[test]
    fn reduce_is_left_associative_for_non_commutative_accumulators() {
        // String concatenation makes fold order visible.
        let out = reduce(&["a", "b", "c"], String::from("v"), |acc, s| {
            format!("({acc}+{s})")
        });
        assert_eq!(out, "(((v+a)+b)+c)");
    }

    #[test]
    fn reduce_subtraction_order_matters() {
        // ((10 - 1) - 2) - 3 = 4, not 10 - (1 - (2 - 3)) = 6
        let out = reduce(&[1, 2, 3], 10, |acc, n| acc - n);
        assert_eq!(out, 4);
    }

    #[test]
    fn reduce_visits_each_element_once_in_index_order() {
        let out = reduce(&[7, 8, 9], Vec::new(), |mut acc: Vec<i64>, n| {
            acc.push(*n);
            acc
        });
        assert_eq!(out, vec![7, 8, 9]);
    }

    #[test]
    fn try_reduce_folds_on_success() {
        let out: Result<i64, String> = try_reduce(&[1, 2, 3], 0, |acc, n| Ok(acc + n));
        assert_eq!(out.unwrap(), 6);
    }

    #[test]
    fn try_reduce_short_circuits_on_first_error() {
        let mut calls = 0;
        let out: Result<i64, &str> = try_reduce(&[1, 2, 3, 4], 0, |acc, n| {
            calls += 1;
            if *n == 3 { Err("overflow") } else { Ok(acc + n) }
        });
        assert_eq!(out.unwrap_err(), "overflow");
        assert_eq!(calls, 3);
    }

    #[test]
    fn reduce_first_seeds_from_first_element() {
        let out = reduce_first(&[3_i64, 4, 5], |acc, n| acc.max(*n));
        assert_eq!(out.unwrap(), 5);
    }

    #[test]
    fn reduce_first_matches_reduce_seeded_with_head() {
        let input = [2_i64, 7, 1, 8];
        let via_first = reduce_first(&input, |acc, n| acc * 10 + n).unwrap();
        let via_reduce = reduce(&input[1..], input[0], |acc, n| acc * 10 + n);
        assert_eq!(via_first, via_reduce);
    }

    #[test]
    fn reduce_first_errors_on_empty_input() {
        let out = reduce_first(&[] as &[i64], |acc, n| acc + n);
        assert_eq!(out.unwrap_err(), ProcessingError::EmptySequence);
    }
}
