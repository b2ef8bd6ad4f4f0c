// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Text stores a block of text together with attributes applied to byte ranges
//! within it.
//!
//! It is the output format of the `span_tree` builder, and can equally be filled by hand:
//!
//! ```
//! use attributed_text::AttributedText;
//!
//! let mut text = AttributedText::new(String::new());
//! text.push_str("Hello ");
//! let start = text.len();
//! text.push_str("world");
//! let range = text.range(start..text.len()).unwrap();
//! text.apply_attribute(range, "bold");
//! text.push_str("!");
//!
//! assert_eq!(text.as_str(), "Hello world!");
//! assert_eq!(text.attributes_at(7).next(), Some((6..11, &"bold")));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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

mod attributed_text;
mod edges;
mod error;
mod text_range;
mod text_storage;

pub use crate::attributed_text::AttributedText;
pub use crate::edges::Edges;
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::text_range::TextRange;
pub use crate::text_storage::TextStorage;
