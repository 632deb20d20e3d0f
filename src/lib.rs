//! `seq-processing` is a small library providing generic map/filter/reduce
//! operations over in-memory sequences (`&[T]` in, freshly allocated `Vec`
//! out), for call sites that want the explicit function shape rather than an
//! iterator chain.
//!
//! The three core operations are pure, synchronous, and single-pass:
//!
//! - [`processing::map`]: apply a transform to every element, preserving
//!   length and order
//! - [`processing::reduce`]: strict left-to-right fold from an initial value
//! - [`processing::filter`]: stable predicate filtering, with the result
//!   compacted so its capacity equals its length
//!
//! Each has a fallible `try_*` variant that short-circuits on the first
//! `Err` from the callback and returns it unchanged. Panicking callbacks are
//! never caught: they unwind to the caller as-is.
//!
//! ## Quick example
//!
//! ```rust
//! use seq_processing::processing::{filter, map, reduce};
//!
//! let out = map(&[1, 2, 3, 4], |n| *n as f64);
//! assert_eq!(out, vec![1.0, 2.0, 3.0, 4.0]);
//!
//! let out = reduce(&[1, 2, 3, 4], 1, |acc, n| acc + n * n);
//! assert_eq!(out, 31);
//!
//! let out = filter(&[1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
//! assert_eq!(out, vec![2, 4, 6]);
//! assert_eq!(out.capacity(), out.len());
//! ```
//!
//! ## Modules
//!
//! - [`processing`]: the core sequence operations and their fallible variants
//! - [`execution`]: chunked parallel execution engine with throttling,
//!   metrics, and observer hooks
//! - [`error`]: error types for operations that can fail on their own
//!
//! ## Parallel execution
//!
//! The [`execution::ExecutionEngine`] runs map/filter over chunks of the
//! input on a Rayon thread pool, bounded by a configurable number of
//! in-flight chunks, and produces output identical (order included) to the
//! sequential operations:
//!
//! ```rust
//! use seq_processing::execution::{ExecutionEngine, ExecutionOptions};
//!
//! let input: Vec<i64> = (0..10_000).collect();
//! let engine = ExecutionEngine::new(ExecutionOptions::default());
//!
//! let evens = engine.filter_parallel(&input, |n| n % 2 == 0);
//! assert_eq!(evens.len(), 5_000);
//! ```

pub mod error;
pub mod execution;
pub mod processing;

pub use error::{ProcessingError, ProcessingResult};
