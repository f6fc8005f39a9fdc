//! Branch weight hint for the rejection paths of the decoder.

#[inline(always)]
#[cold]
const fn cold_path() {}

/// Returns `b` unchanged, marking `true` as the rare outcome.
#[inline(always)]
pub(crate) const fn unlikely(b: bool) -> bool {
    if b {
        cold_path();
    }
    b
}
