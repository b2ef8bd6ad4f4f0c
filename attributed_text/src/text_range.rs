// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error, TextStorage};

/// A byte range that has been checked against a text.
///
/// A `TextRange` guarantees `start <= end`, that both ends are within the text, and that
/// both ends lie on UTF-8 character boundaries. It does not remember *which* text it was
/// checked against; reuse it only with that text (or with text that only grew at the end).
///
/// ```
/// use attributed_text::{AttributedText, TextRange};
///
/// let mut text = AttributedText::new("Hello!");
/// let range = TextRange::new(text.text(), 0..5).unwrap();
/// text.apply_attribute(range, ());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Checks `range` against `text`.
    pub fn new<T: TextStorage + ?Sized>(text: &T, range: Range<usize>) -> Result<Self, Error> {
        validate_range(text, &range)?;
        Ok(Self::new_unchecked(range.start, range.end))
    }

    /// Creates a `TextRange` from offsets the caller already knows to be valid.
    ///
    /// Passing offsets that break the invariants does not cause undefined behavior, but
    /// later attribute queries will report meaningless results.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "TextRange start must not exceed end");
        Self { start, end }
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// The length of the range in bytes.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for a zero-length range.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `index` lies in `start..end`.
    #[must_use]
    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

pub(crate) fn validate_range<T: TextStorage + ?Sized>(
    text: &T,
    range: &Range<usize>,
) -> Result<(), Error> {
    let len = text.len();
    if range.start > range.end {
        return Err(Error::reversed(range.clone(), len));
    }
    if range.end > len {
        return Err(Error::out_of_bounds(range.clone(), len));
    }
    if !text.is_char_boundary(range.start) {
        return Err(Error::off_boundary(text, range.clone(), Endpoint::Start));
    }
    if !text.is_char_boundary(range.end) {
        return Err(Error::off_boundary(text, range.clone(), Endpoint::End));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::TextRange;
    use crate::{Endpoint, ErrorKind};
    use alloc::string::ToString;

    #[test]
    fn accepts_valid_ranges() {
        let t = "Hello!";
        assert_eq!(TextRange::new(&t, 0..0).unwrap().len(), 0);
        assert_eq!(TextRange::new(&t, 6..6).unwrap().as_range(), 6..6);
        let r = TextRange::new(&t, 1..3).unwrap();
        assert_eq!((r.start(), r.end(), r.len()), (1, 3, 2));
        assert!(r.contains(1));
        assert!(!r.contains(3));
    }

    #[test]
    #[expect(
        clippy::reversed_empty_ranges,
        reason = "We want an invalid range for testing."
    )]
    fn rejects_reversed_range() {
        let err = TextRange::new(&"Hello!", 4..3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert_eq!(err.range(), 4..3);
        assert_eq!(err.text_len(), 6);
        assert!(err.to_string().contains("start > end"));
    }

    #[test]
    fn rejects_out_of_bounds() {
        let err = TextRange::new(&"Hello!", 2..7).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(err.to_string(), "range 2..7 out of bounds for len 6");
    }

    #[test]
    fn reports_enclosing_character() {
        // "€" is three bytes long.
        let t = "a€b";
        let err = TextRange::new(&t, 0..2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let b = err.boundary().expect("boundary info");
        assert_eq!(b.which, Endpoint::End);
        assert_eq!((b.index, b.char_start, b.char_end), (2, 1, 4));
        assert_eq!(
            err.to_string(),
            "range 0..2: end index 2 not on UTF-8 boundary (char 1..4)"
        );

        let err = TextRange::new(&t, 3..5).unwrap_err();
        let b = err.boundary().expect("boundary info");
        assert_eq!(b.which, Endpoint::Start);
        assert_eq!((b.char_start, b.char_end), (1, 4));
    }
}
