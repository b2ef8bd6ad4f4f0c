// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::text_range::validate_range;
use crate::{Edges, Error, TextRange, TextStorage};

#[derive(Clone, Debug)]
struct Annotation<Attr> {
    range: TextRange,
    edges: Edges,
    attribute: Attr,
}

/// A block of text with attributes applied to byte ranges within it.
///
/// Attributes may overlap or nest freely. They are kept in the order they were applied,
/// and every query reports them in that order.
#[derive(Clone, Debug)]
pub struct AttributedText<T: Debug + TextStorage, Attr: Debug> {
    text: T,
    attributes: Vec<Annotation<Attr>>,
}

impl<T: Debug + TextStorage + Default, Attr: Debug> Default for AttributedText<T, Attr> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Debug + TextStorage, Attr: Debug> AttributedText<T, Attr> {
    /// Creates an `AttributedText` with no attributes applied.
    pub fn new(text: T) -> Self {
        Self {
            text,
            attributes: Vec::new(),
        }
    }

    /// Borrows the underlying text storage.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Returns the length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Borrows the text as `&str` when the storage is contiguous.
    pub fn as_str(&self) -> &str
    where
        T: AsRef<str>,
    {
        self.text.as_ref()
    }

    /// Replaces the text and drops every applied attribute.
    pub fn set_text(&mut self, text: T) {
        self.text = text;
        self.attributes.clear();
    }

    /// Validates `range` against this text and returns a [`TextRange`].
    pub fn range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        TextRange::new(&self.text, range)
    }

    /// Applies `attribute` to a validated `range` with [`Edges::InclusiveExclusive`].
    pub fn apply_attribute(&mut self, range: TextRange, attribute: Attr) {
        self.apply_attribute_with_edges(range, Edges::default(), attribute);
    }

    /// Applies `attribute` to a validated `range` with the given edge behavior.
    pub fn apply_attribute_with_edges(&mut self, range: TextRange, edges: Edges, attribute: Attr) {
        debug_assert!(
            range.end() <= self.text.len(),
            "TextRange {:?} used with text of len {}",
            range,
            self.text.len()
        );
        self.attributes.push(Annotation {
            range,
            edges,
            attribute,
        });
    }

    /// Applies `attribute` to the byte `range`, validating it first.
    pub fn apply_attribute_bytes(
        &mut self,
        range: Range<usize>,
        attribute: Attr,
    ) -> Result<(), Error> {
        let range = self.range(range)?;
        self.apply_attribute(range, attribute);
        Ok(())
    }

    /// Iterates over all attributes with the ranges they cover, in application order.
    pub fn attributes_iter(&self) -> impl ExactSizeIterator<Item = (Range<usize>, &Attr)> {
        self.attributes
            .iter()
            .map(|a| (a.range.as_range(), &a.attribute))
    }

    /// Iterates over all attributes with their ranges and edge behavior, in application order.
    pub fn annotations(&self) -> impl ExactSizeIterator<Item = (TextRange, Edges, &Attr)> {
        self.attributes
            .iter()
            .map(|a| (a.range, a.edges, &a.attribute))
    }

    /// Iterates over the attributes whose range contains the byte at `index`.
    ///
    /// Zero-length ranges never contain an index.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = (Range<usize>, &Attr)> {
        self.attributes
            .iter()
            .filter(move |a| a.range.contains(index))
            .map(|a| (a.range.as_range(), &a.attribute))
    }

    /// Iterates over the attributes whose range overlaps `range`.
    pub fn attributes_for_range(
        &self,
        range: Range<usize>,
    ) -> impl Iterator<Item = (Range<usize>, &Attr)> {
        self.attributes
            .iter()
            .filter(move |a| a.range.start() < range.end && a.range.end() > range.start)
            .map(|a| (a.range.as_range(), &a.attribute))
    }

    /// Returns the number of applied attributes.
    pub fn attributes_len(&self) -> usize {
        self.attributes.len()
    }

    /// Removes every applied attribute, keeping the text.
    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }

    /// Splits this value into its text and `(range, attribute)` pairs in application order.
    pub fn into_parts(self) -> (T, Vec<(Range<usize>, Attr)>) {
        let attributes = self
            .attributes
            .into_iter()
            .map(|a| (a.range.as_range(), a.attribute))
            .collect();
        (self.text, attributes)
    }
}

impl<Attr: Debug> AttributedText<String, Attr> {
    /// Appends `text` at the end.
    ///
    /// Existing attributes keep their ranges, whatever their [`Edges`]; appending is how
    /// attributed text is built up, and a range that ends at the current length must not
    /// absorb text added after it was applied.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Inserts `text` at byte `index`, moving attribute ranges according to their [`Edges`].
    pub fn insert_str(&mut self, index: usize, text: &str) -> Result<(), Error> {
        validate_range(&self.text, &(index..index))?;
        if text.is_empty() {
            return Ok(());
        }
        self.text.insert_str(index, text);
        for a in &mut self.attributes {
            let (start, end) = a
                .edges
                .shift(a.range.start(), a.range.end(), index, text.len());
            a.range = TextRange::new_unchecked(start, end);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{AttributedText, Edges, ErrorKind};
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    #[derive(Clone, Debug, PartialEq)]
    enum Mark {
        Strong,
        Quiet,
    }

    #[test]
    fn queries_report_application_order() {
        let mut at = AttributedText::new("Hello!");
        at.apply_attribute_bytes(1..3, Mark::Strong).unwrap();
        at.apply_attribute_bytes(2..5, Mark::Quiet).unwrap();

        assert!(at.attributes_at(0).next().is_none());
        let at_2: Vec<_> = at.attributes_at(2).map(|(_, m)| m).collect();
        assert_eq!(at_2, [&Mark::Strong, &Mark::Quiet]);
        let at_4: Vec<_> = at.attributes_at(4).collect();
        assert_eq!(at_4, [(2..5, &Mark::Quiet)]);
        assert_eq!(at.attributes_for_range(0..2).count(), 1);
        assert_eq!(at.attributes_for_range(3..6).count(), 1);
        assert_eq!(at.attributes_for_range(0..6).count(), 2);
    }

    #[test]
    fn empty_ranges_are_kept_but_never_hit() {
        let mut at = AttributedText::new("abc");
        at.apply_attribute_bytes(1..1, Mark::Strong).unwrap();
        assert_eq!(at.attributes_len(), 1);
        assert!(at.attributes_at(1).next().is_none());
    }

    #[test]
    #[expect(
        clippy::reversed_empty_ranges,
        reason = "We want an invalid range for testing."
    )]
    fn rejects_bad_ranges() {
        let mut at = AttributedText::new("éclair");
        let err = at.apply_attribute_bytes(4..3, Mark::Strong).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        let err = at.apply_attribute_bytes(0..8, Mark::Strong).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert!(err.to_string().contains("len 7"));
        let err = at.apply_attribute_bytes(1..2, Mark::Strong).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        assert_eq!(at.attributes_len(), 0);
    }

    #[test]
    fn push_str_leaves_ranges_alone() {
        let mut at = AttributedText::new(String::from("ab"));
        let all = at.range(0..2).unwrap();
        at.apply_attribute_with_edges(all, Edges::InclusiveInclusive, Mark::Strong);
        at.push_str("cd");
        assert_eq!(at.as_str(), "abcd");
        assert_eq!(at.attributes_iter().next(), Some((0..2, &Mark::Strong)));
    }

    #[test]
    fn insert_str_follows_edges() {
        let mut at = AttributedText::new(String::from("abcd"));
        let mid = at.range(1..3).unwrap();
        at.apply_attribute(mid, Mark::Strong);
        at.apply_attribute_with_edges(mid, Edges::ExclusiveExclusive, Mark::Quiet);

        at.insert_str(1, "xy").unwrap();
        assert_eq!(at.as_str(), "axybcd");
        let ranges: Vec<_> = at.attributes_iter().map(|(r, _)| r).collect();
        assert_eq!(ranges, [1..5, 3..5]);

        at.insert_str(5, "z").unwrap();
        assert_eq!(at.as_str(), "axybczd");
        let ranges: Vec<_> = at.attributes_iter().map(|(r, _)| r).collect();
        assert_eq!(ranges, [1..5, 3..5]);
    }

    #[test]
    fn insert_str_validates_index() {
        let mut at = AttributedText::<String, Mark>::new(String::from("é"));
        let err = at.insert_str(1, "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let err = at.insert_str(3, "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(err.range(), 3..3);
    }

    #[test]
    fn set_text_and_into_parts() {
        let mut at = AttributedText::new(String::from("one"));
        at.apply_attribute_bytes(0..3, Mark::Quiet).unwrap();
        at.set_text("two".to_string());
        assert_eq!(at.attributes_len(), 0);

        at.apply_attribute_bytes(1..2, Mark::Strong).unwrap();
        let (text, attributes) = at.into_parts();
        assert_eq!(text, "two");
        assert_eq!(attributes, [(1..2, Mark::Strong)]);
    }
}
