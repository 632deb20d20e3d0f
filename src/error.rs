use thiserror::Error;

/// Convenience result type for processing operations.
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Error type returned by processing operations whose contract can fail on
/// its own, independent of any user-supplied callback.
///
/// Callback failures are deliberately not represented here: a panicking
/// callback unwinds to the caller unchanged, and the `try_*` variants return
/// the callback's own error type unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProcessingError {
    /// [`crate::processing::reduce_first`] was given an empty sequence, so
    /// there is no element to seed the fold with.
    #[error("cannot reduce an empty sequence without an initial value")]
    EmptySequence,
}
