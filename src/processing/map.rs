//! Element mapping for in-memory sequences.

/// Returns a new `Vec` by applying `transform` to every element of `input`.
///
/// The output has exactly the same length as `input`, with the element at
/// index `i` equal to `transform(&input[i])`. The transform is called exactly
/// once per element, in index order, so transforms with observable side
/// effects see elements front to back. An empty input yields an empty `Vec`.
///
/// A panic raised by `transform` unwinds to the caller unchanged; nothing is
/// caught or wrapped. For transforms that fail recoverably, use [`try_map`].
pub fn map<I, O, F>(input: &[I], transform: F) -> Vec<O>
where
    F: FnMut(&I) -> O,
{
    input.iter().map(transform).collect()
}

/// Fallible variant of [`map`]: stops at the first `Err` and returns it
/// unchanged.
///
/// Elements past the failing one are never visited. On success the output is
/// identical to what [`map`] would produce with the unwrapped transform.
pub fn try_map<I, O, E, F>(input: &[I], mut transform: F) -> Result<Vec<O>, E>
where
    F: FnMut(&I) -> Result<O, E>,
{
    let mut out = Vec::with_capacity(input.len());
    for item in input {
        out.push(transform(item)?);
    }
    Ok(out)
}
