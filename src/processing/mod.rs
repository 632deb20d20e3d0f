//! Generic in-memory sequence transformations.
//!
//! The processing layer operates on plain slices and produces freshly
//! allocated `Vec`s; input sequences are never mutated. All operations here
//! are synchronous, single-pass, and stateless. For chunked parallel
//! execution see [`crate::execution`].
//!
//! Currently implemented:
//!
//! - [`filter()`] / [`try_filter()`]: stable element filtering by predicate
//! - [`map()`] / [`try_map()`]: element mapping by user function
//! - [`reduce()`] / [`try_reduce()`] / [`reduce_first()`]: strict left folds
//!
//! ## Example: filter → map → reduce
//!
//! ```rust
//! use seq_processing::processing::{filter, map, reduce};
//!
//! let scores = vec![3_i64, 18, 7, 42, 11];
//!
//! // Keep only passing scores.
//! let passing = filter(&scores, |s| *s >= 10);
//!
//! // Scale them.
//! let scaled = map(&passing, |s| *s as f64 * 1.5);
//!
//! // Sum the result.
//! let total = reduce(&scaled, 0.0, |acc, s| acc + s);
//! assert_eq!(total, (18.0 + 42.0 + 11.0) * 1.5);
//! ```

pub mod filter;
pub mod map;
pub mod reduce;

pub use filter::{filter, try_filter};
pub use map::{map, try_map};
pub use reduce::{reduce, reduce_first, try_reduce};
