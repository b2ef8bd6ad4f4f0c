// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree of nested styled spans.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};

use attributed_text::AttributedText;

use crate::SpanSink;

/// An ordered list of text fragments and styled regions.
///
/// A `Span` without a parent is the root of a tree; every [`Node`] owns one as its body.
/// Children are only ever appended, and [`build`](Self::build) reads the tree without
/// changing it, so a tree can be built any number of times.
#[derive(Clone, PartialEq)]
pub struct Span<A> {
    children: Vec<Child<A>>,
}

/// One child of a [`Span`].
#[derive(Clone, Debug, PartialEq)]
pub enum Child<A> {
    /// Literal text.
    Text(Leaf),
    /// A styled region with its own children.
    Node(Node<A>),
}

/// Literal text content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Leaf {
    content: String,
}

/// A styled region: an attachment applied to everything its body produces.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<A> {
    attachment: A,
    body: Span<A>,
}

/// Builds a root [`Span`] by running `build` against it.
///
/// ```
/// use span_tree::span;
///
/// let tree = span(|s| {
///     s.text("Hello ").span("bold", |s| {
///         s.text("world");
///     });
///     s.text("!");
/// });
/// let text = tree.build();
/// assert_eq!(text.as_str(), "Hello world!");
/// assert_eq!(text.attributes_iter().collect::<Vec<_>>(), [(6..11, &"bold")]);
/// ```
pub fn span<A>(build: impl FnOnce(&mut Span<A>)) -> Span<A> {
    let mut root = Span::new();
    build(&mut root);
    root
}

impl<A> Default for Span<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Span<A> {
    /// Creates an empty span.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Appends the string form of `content` as a text fragment.
    pub fn text(&mut self, content: impl Display) -> &mut Self {
        self.children.push(Child::Text(Leaf::new(content)));
        self
    }

    /// Appends a styled region.
    ///
    /// `build` runs immediately against the region's (initially empty) body; the finished
    /// region is then appended to `self`. Returns `self` so that siblings can be chained.
    pub fn span(&mut self, attachment: A, build: impl FnOnce(&mut Self)) -> &mut Self {
        let mut body = Self::new();
        build(&mut body);
        self.children.push(Child::Node(Node::new(attachment, body)));
        self
    }

    /// Appends an already built child.
    pub fn push(&mut self, child: impl Into<Child<A>>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Appends every child of `children`, in order.
    pub fn append<C: Into<Child<A>>>(
        &mut self,
        children: impl IntoIterator<Item = C>,
    ) -> &mut Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// The children of this span, in order.
    pub fn children(&self) -> &[Child<A>] {
        &self.children
    }

    /// Returns `true` if this span has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The length in bytes of the text this span produces.
    pub fn text_len(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Child::Text(leaf) => leaf.content.len(),
                Child::Node(node) => node.body.text_len(),
            })
            .sum()
    }

    /// Flattens this tree into `sink`.
    ///
    /// Children are visited depth first, in order. Text is appended as it is reached; a
    /// styled region is annotated over `start..end`, where `start` is the sink length before
    /// its body and `end` the length after it. A region is therefore annotated only after
    /// every region nested inside it (inner before outer), and an empty region yields an
    /// empty range at the current position.
    ///
    /// Ranges are offsets into the sink, so building into a sink that already holds text
    /// places every range after that text.
    pub fn build_into<'s, S: SpanSink<A>>(&self, sink: &'s mut S) -> &'s mut S
    where
        A: Clone,
    {
        let offset = sink.current_len();
        let annotations = self.flatten(sink);
        log::trace!(
            "built span tree into sink: {} bytes at offset {offset}, {annotations} annotations",
            sink.current_len() - offset,
        );
        sink
    }

    /// Flattens this tree into new [`AttributedText`].
    pub fn build(&self) -> AttributedText<String, A>
    where
        A: Clone + Debug,
    {
        let mut text = AttributedText::new(String::with_capacity(self.text_len()));
        self.build_into(&mut text);
        text
    }

    fn flatten<S: SpanSink<A>>(&self, sink: &mut S) -> usize
    where
        A: Clone,
    {
        let mut annotations = 0;
        for child in &self.children {
            match child {
                Child::Text(leaf) => sink.append(&leaf.content),
                Child::Node(node) => {
                    let start = sink.current_len();
                    annotations += node.body.flatten(sink);
                    let end = sink.current_len();
                    sink.annotate(node.attachment.clone(), start..end);
                    annotations += 1;
                }
            }
        }
        annotations
    }

    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in &self.children {
            match child {
                Child::Text(leaf) => f.write_str(&leaf.content)?,
                Child::Node(node) => node.body.write_text(f)?,
            }
        }
        Ok(())
    }
}

impl<A: Debug> Debug for Span<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.children).finish()
    }
}

/// Writes the plain text the span produces, without any styling.
impl<A> Display for Span<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}

impl<A, C: Into<Child<A>>> FromIterator<C> for Span<A> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut span = Self::new();
        span.append(iter);
        span
    }
}

impl<A, C: Into<Child<A>>> Extend<C> for Span<A> {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl Leaf {
    /// Creates a leaf holding the string form of `content`.
    pub fn new(content: impl Display) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    /// The text of this leaf.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl<A> Node<A> {
    /// Creates a styled region from an attachment and a body.
    pub fn new(attachment: A, body: Span<A>) -> Self {
        Self { attachment, body }
    }

    /// The style attachment of this region.
    pub fn attachment(&self) -> &A {
        &self.attachment
    }

    /// The children of this region.
    pub fn body(&self) -> &Span<A> {
        &self.body
    }

    /// Splits the region into its attachment and body.
    pub fn into_parts(self) -> (A, Span<A>) {
        (self.attachment, self.body)
    }
}

impl<A> From<Leaf> for Child<A> {
    fn from(leaf: Leaf) -> Self {
        Self::Text(leaf)
    }
}

impl<A> From<&str> for Child<A> {
    fn from(text: &str) -> Self {
        Self::Text(Leaf {
            content: text.into(),
        })
    }
}

impl<A> From<String> for Child<A> {
    fn from(content: String) -> Self {
        Self::Text(Leaf { content })
    }
}

impl<A> From<Node<A>> for Child<A> {
    fn from(node: Node<A>) -> Self {
        Self::Node(node)
    }
}
