use std::ops::{Bound, Range, RangeBounds};

use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum RangeError {
    #[error("range start {start} is greater than range end {end}")]
    Inverted { start: usize, end: usize },
    #[error("range end {end} is out of bounds for a sequence of length {len}")]
    OutOfBounds { end: usize, len: usize },
    #[error("destination ending at {end} cannot hold {count} elements")]
    DestinationUnderflow { end: usize, count: usize },
}

/// Resolves `range` against a sequence of length `len`.
///
/// Unbounded ends resolve to `0` and `len`. The result always satisfies
/// `start <= end <= len`.
pub fn checked_range<R: RangeBounds<usize>>(
    range: R,
    len: usize,
) -> Result<Range<usize>, RangeError> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };

    if end > len {
        return Err(RangeError::OutOfBounds { end, len });
    }
    if start > end {
        return Err(RangeError::Inverted { start, end });
    }
    Ok(start..end)
}
