//! Misc stuff.

use std::ops::Range;

use pad::{Alignment, PadStr};


pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given range of values.
    fn is_within(&self, range: Range<Self>) -> bool where Self: Sized;
}

// Define RangeExt on *anything* that can be compared, though it's only
// really ever used for numeric ranges...

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: Range<Self>) -> bool {
        *self >= range.start && *self < range.end
    }
}


/// Renders a number as a decimal string at least two characters wide,
/// left-padded with a zero. Values of three or more digits are rendered at
/// their natural width, never truncated.
pub(crate) fn zero_pad(value: i8) -> String {
    value.to_string().pad(2, '0', Alignment::Right, false)
}
