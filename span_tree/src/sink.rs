// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt::Debug;
use core::ops::Range;

use attributed_text::{AttributedText, Edges, TextRange};

/// Destination for [`Span::build_into`](crate::Span::build_into).
///
/// A sink is a text buffer that can grow at the end and record attachments over byte
/// ranges of what it already holds.
pub trait SpanSink<A> {
    /// The current length of the buffer in bytes.
    fn current_len(&self) -> usize;

    /// Appends `text` at the end of the buffer.
    fn append(&mut self, text: &str);

    /// Records `attachment` over `range`.
    ///
    /// `range` always lies within the buffer and on character boundaries: both ends are
    /// lengths previously reported by [`current_len`](Self::current_len).
    fn annotate(&mut self, attachment: A, range: Range<usize>);
}

/// Annotations are applied with [`Edges::InclusiveExclusive`].
///
/// Every annotation is kept, including ones that repeat an earlier attachment over the
/// same range, and they stay in the order they were made.
impl<A: Debug> SpanSink<A> for AttributedText<String, A> {
    fn current_len(&self) -> usize {
        self.len()
    }

    fn append(&mut self, text: &str) {
        self.push_str(text);
    }

    fn annotate(&mut self, attachment: A, range: Range<usize>) {
        debug_assert!(
            self.range(range.clone()).is_ok(),
            "annotation range {range:?} does not fit text of len {}",
            self.len()
        );
        let range = TextRange::new_unchecked(range.start, range.end);
        self.apply_attribute_with_edges(range, Edges::InclusiveExclusive, attachment);
    }
}

impl<A, S: SpanSink<A> + ?Sized> SpanSink<A> for &mut S {
    fn current_len(&self) -> usize {
        (**self).current_len()
    }

    fn append(&mut self, text: &str) {
        (**self).append(text);
    }

    fn annotate(&mut self, attachment: A, range: Range<usize>) {
        (**self).annotate(attachment, range);
    }
}
