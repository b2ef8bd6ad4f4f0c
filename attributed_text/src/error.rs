// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

use crate::TextStorage;

/// Error returned when a byte range or index does not fit the text it is applied to.
///
/// The [`ErrorKind`] says what went wrong; the remaining accessors describe the
/// attempted range and the text it was checked against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    range: Range<usize>,
    text_len: usize,
    boundary: Option<BoundaryInfo>,
}

impl Error {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The byte range that was rejected.
    ///
    /// Errors raised for a single index (for example by
    /// [`AttributedText::insert_str`](crate::AttributedText::insert_str)) report an
    /// empty range at that index.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The start of the rejected range.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// The end (exclusive) of the rejected range.
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// The length in bytes of the text at the time the error was raised.
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// Details about the offending index for [`ErrorKind::NotOnCharBoundary`].
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    fn new(kind: ErrorKind, range: Range<usize>, text_len: usize) -> Self {
        Self {
            kind,
            range,
            text_len,
            boundary: None,
        }
    }

    pub(crate) fn out_of_bounds(range: Range<usize>, text_len: usize) -> Self {
        Self::new(ErrorKind::InvalidBounds, range, text_len)
    }

    pub(crate) fn reversed(range: Range<usize>, text_len: usize) -> Self {
        Self::new(ErrorKind::InvalidRange, range, text_len)
    }

    pub(crate) fn off_boundary<T: TextStorage + ?Sized>(
        text: &T,
        range: Range<usize>,
        which: Endpoint,
    ) -> Self {
        let index = match which {
            Endpoint::Start => range.start,
            Endpoint::End => range.end,
        };
        let (char_start, char_end) = enclosing_char(text, index);
        Self {
            kind: ErrorKind::NotOnCharBoundary,
            text_len: text.len(),
            range,
            boundary: Some(BoundaryInfo {
                which,
                index,
                char_start,
                char_end,
            }),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Range { start, end } = self.range;
        match (self.kind, self.boundary) {
            (ErrorKind::InvalidBounds, _) => write!(
                f,
                "range {start}..{end} out of bounds for len {}",
                self.text_len
            ),
            (ErrorKind::InvalidRange, _) => {
                write!(f, "invalid range {start}..{end}: start > end")
            }
            (ErrorKind::NotOnCharBoundary, Some(b)) => write!(
                f,
                "range {start}..{end}: {} index {} not on UTF-8 boundary (char {}..{})",
                b.which, b.index, b.char_start, b.char_end
            ),
            (ErrorKind::NotOnCharBoundary, None) => {
                write!(f, "range {start}..{end} not on UTF-8 boundary")
            }
        }
    }
}

impl core::error::Error for Error {}

/// The category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An index lies past the end of the text.
    InvalidBounds,

    /// The range has `start > end`.
    InvalidRange,

    /// An index splits a UTF-8 encoded character.
    NotOnCharBoundary,
}

/// Which end of a range failed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` of the range.
    Start,

    /// The `end` of the range.
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// Location of an index that fell inside a UTF-8 encoded character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint was invalid.
    pub which: Endpoint,

    /// The offending byte index.
    pub index: usize,

    /// Start of the character containing `index`.
    pub char_start: usize,

    /// End (exclusive) of the character containing `index`.
    pub char_end: usize,
}

/// Finds the character that contains `index`.
///
/// UTF-8 characters are at most four bytes long, so both scans are bounded.
fn enclosing_char<T: TextStorage + ?Sized>(text: &T, index: usize) -> (usize, usize) {
    let len = text.len();
    if index >= len || text.is_char_boundary(index) {
        return (index, index);
    }
    let start = (index.saturating_sub(3)..index)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    let end = (index + 1..=(index + 3).min(len))
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(len);
    (start, end)
}
