// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build [`attributed_text`] from a tree of nested styled spans.
//!
//! Instead of computing byte offsets and applying attributes by hand, describe the text as
//! a tree: a [`Span`] holds text fragments and styled regions, and each region holds an
//! opaque attachment plus children of its own. [`Span::build`] walks the tree once and
//! produces the concatenated text with every region's attachment applied over exactly the
//! text its children produced.
//!
//! - [`Span`], [`Node`], [`Leaf`]: the tree.
//! - [`SpanSink`]: where a tree is built into; implemented for [`AttributedText`].
//! - [`style`]: [`SpanStyle`], a catalog of common attachments, with shorthand methods
//!   such as [`Span::bold`] and [`Span::url`].
//! - [`interact`]: clickable regions and links, and [`activate_at`] to dispatch taps.
//!
//! Attachments are never inspected while building. Any type works; the shorthand methods
//! need it to implement `From<SpanStyle>`.
//!
//! ## Example
//!
//! ```
//! use span_tree::{span, SpanStyle, FontStyle};
//!
//! let tree = span::<SpanStyle>(|s| {
//!     s.text("Hello ");
//!     s.bold(|s| {
//!         s.text("world");
//!     });
//!     s.text("!");
//! });
//!
//! let text = tree.build();
//! assert_eq!(text.as_str(), "Hello world!");
//! let attributes: Vec<_> = text.attributes_iter().collect();
//! assert_eq!(attributes, [(6..11, &SpanStyle::FontStyle(FontStyle::Bold))]);
//! ```
//!
//! ## Ranges
//!
//! Ranges are UTF-8 byte offsets, half open (`start..end`). Nested regions produce nested
//! ranges, and a region is applied after all the regions inside it. Attributes are applied
//! with [`Edges::InclusiveExclusive`](attributed_text::Edges::InclusiveExclusive).
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library for floating point math in `peniko`.
//! - `libm`: Use `libm` for floating point math in `peniko` when `std` is disabled.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub mod interact;
pub mod style;

mod builders;
mod sink;
mod tree;


pub use attributed_text::AttributedText;
pub use interact::{activate_at, Activate, Clickable, Link, Navigator};
pub use sink::SpanSink;
pub use style::{
    Alignment, BlurStyle, FontStyle, ImageSource, LeadingMargin, MaskFilter, SpanStyle,
    VerticalAlignment,
};
pub use tree::{span, Child, Leaf, Node, Span};
