// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How an attribute's range reacts to text inserted exactly at one of its ends.
///
/// An *inclusive* end absorbs text inserted at that offset, so the attribute grows to
/// cover it. An *exclusive* end leaves inserted text outside the attribute. Text inserted
/// strictly inside a range always grows it, and text inserted strictly before a range
/// always shifts it.
///
/// The default, [`Edges::InclusiveExclusive`], is what a typing cursor usually wants: text
/// typed at the start of a styled run takes on its style, text typed right after it does
/// not.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Edges {
    /// Neither end absorbs inserted text.
    ExclusiveExclusive,

    /// Text inserted at the start joins the attribute; text inserted at the end does not.
    #[default]
    InclusiveExclusive,

    /// Text inserted at the end joins the attribute; text inserted at the start does not.
    ExclusiveInclusive,

    /// Both ends absorb inserted text.
    InclusiveInclusive,
}

impl Edges {
    /// Returns `true` if text inserted at the start offset joins the attribute.
    #[must_use]
    pub const fn start_inclusive(self) -> bool {
        matches!(self, Self::InclusiveExclusive | Self::InclusiveInclusive)
    }

    /// Returns `true` if text inserted at the end offset joins the attribute.
    #[must_use]
    pub const fn end_inclusive(self) -> bool {
        matches!(self, Self::ExclusiveInclusive | Self::InclusiveInclusive)
    }

    /// Moves `start..end` to account for `inserted` bytes placed at `at`.
    pub(crate) fn shift(
        self,
        start: usize,
        end: usize,
        at: usize,
        inserted: usize,
    ) -> (usize, usize) {
        let start = if at < start || (at == start && !self.start_inclusive()) {
            start + inserted
        } else {
            start
        };
        let end = if at < end || (at == end && self.end_inclusive()) {
            end + inserted
        } else {
            end
        };
        // An exclusive start on an empty range can overtake its end.
        (start, end.max(start))
    }
}
