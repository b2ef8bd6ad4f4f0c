// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A closed catalog of style attachments.
//!
//! [`SpanStyle`] covers the treatments a rich text view commonly offers: emphasis,
//! typefaces, sizes, colors, decorations, paragraph markers, images and interactive
//! regions. None of these are interpreted here; they are carried through
//! [`Span::build`](crate::Span::build) for a rendering layer to consume.
//!
//! Constructors do not validate their arguments. A negative size or a non-finite
//! proportion is carried through as given.

use alloc::sync::Arc;

use peniko::Color;

use crate::interact::{Clickable, Link};

/// The color used by [`SpanStyle::Quote`] and [`SpanStyle::Bullet`] when none is chosen.
pub const DEFAULT_MARKER_COLOR: Color = Color::BLACK;

/// Generic typeface family for sans-serif text.
pub const SANS_SERIF: &str = "sans-serif";

/// Generic typeface family for serif text.
pub const SERIF: &str = "serif";

/// Generic typeface family for monospaced text.
pub const MONOSPACE: &str = "monospace";

/// A style attachment.
#[derive(Clone, Debug, PartialEq)]
pub enum SpanStyle {
    /// Weight and slant emphasis.
    FontStyle(FontStyle),
    /// Underline decoration.
    Underline,
    /// Strikethrough decoration.
    Strikethrough,
    /// A typeface family, by name.
    Typeface(Arc<str>),
    /// A host-defined text appearance, by resource id.
    TextAppearance(u32),
    /// Raise the baseline.
    Superscript,
    /// Lower the baseline.
    Subscript,
    /// Horizontal scale of glyphs, as a proportion of their natural width.
    ScaleX(f32),
    /// Text size as a proportion of the surrounding size.
    RelativeSize(f32),
    /// Text size in pixels, or density independent pixels when `dip` is set.
    AbsoluteSize {
        /// The size.
        size: u32,
        /// Whether `size` is in density independent pixels.
        dip: bool,
    },
    /// A vertical stripe before each covered paragraph.
    Quote(Color),
    /// A mask filter applied when drawing glyphs.
    Mask(MaskFilter),
    /// Paragraph indentation.
    LeadingMargin(LeadingMargin),
    /// Text color.
    ForegroundColor(Color),
    /// Highlight color behind the text.
    BackgroundColor(Color),
    /// A bullet before each covered paragraph.
    Bullet {
        /// Space between the bullet and the text, in pixels.
        gap_width: u32,
        /// Bullet color.
        color: Color,
    },
    /// Paragraph alignment.
    Alignment(Alignment),
    /// An image in the leading margin.
    DrawableMargin {
        /// The image.
        image: ImageSource,
        /// Space between the image and the text, in pixels.
        padding: u32,
    },
    /// An icon in the leading margin.
    IconMargin {
        /// The icon.
        image: ImageSource,
        /// Space between the icon and the text, in pixels.
        padding: u32,
    },
    /// An image drawn in place of the covered text.
    Image {
        /// The image.
        source: ImageSource,
        /// How the image sits against the line.
        vertical_alignment: VerticalAlignment,
    },
    /// A region that reports taps.
    Clickable(Clickable),
    /// A hyperlink.
    Link(Link),
}

/// Weight and slant emphasis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Neither bold nor italic.
    #[default]
    Normal,
    /// Bold.
    Bold,
    /// Italic.
    Italic,
    /// Bold and italic.
    BoldItalic,
}

/// Paragraph alignment, relative to the paragraph's direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Aligned to the start edge.
    #[default]
    Normal,
    /// Aligned to the end edge.
    Opposite,
    /// Centered.
    Center,
}

/// How an inline image sits against the line it is part of.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// The bottom of the image meets the bottom of the line.
    #[default]
    Bottom,
    /// The bottom of the image meets the baseline.
    Baseline,
    /// The image is centered on the line.
    Center,
}

/// Indentation of covered paragraphs, in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LeadingMargin {
    /// Indent of the first line of each paragraph.
    pub first: u32,
    /// Indent of the remaining lines.
    pub rest: u32,
}

impl LeadingMargin {
    /// The same indent for every line.
    pub const fn every(indent: u32) -> Self {
        Self {
            first: indent,
            rest: indent,
        }
    }
}

/// A filter applied to the alpha mask of glyphs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MaskFilter {
    /// Blur by `radius` pixels.
    Blur {
        /// Blur radius.
        radius: f32,
        /// Which side of the glyph edge is blurred.
        style: BlurStyle,
    },
    /// Emboss lighting.
    Emboss {
        /// Direction of the light source.
        direction: [f32; 3],
        /// Ambient light level, `0..=1`.
        ambient: f32,
        /// Specular highlight coefficient.
        specular: f32,
        /// Blur applied before lighting.
        blur_radius: f32,
    },
}

/// Which side of a glyph edge a [`MaskFilter::Blur`] affects.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlurStyle {
    /// Blur inside and outside.
    #[default]
    Normal,
    /// Solid inside, blurred outside.
    Solid,
    /// Nothing inside, blurred outside.
    Outer,
    /// Blurred inside, nothing outside.
    Inner,
}

/// Where an image comes from.
///
/// Images are only referenced; loading and decoding are up to the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// A URI to load the image from.
    Uri(Arc<str>),
    /// A host-defined resource id.
    Resource(u32),
    /// Encoded image bytes.
    Encoded(Arc<[u8]>),
}

impl From<FontStyle> for SpanStyle {
    fn from(style: FontStyle) -> Self {
        Self::FontStyle(style)
    }
}

impl From<Alignment> for SpanStyle {
    fn from(alignment: Alignment) -> Self {
        Self::Alignment(alignment)
    }
}

impl From<LeadingMargin> for SpanStyle {
    fn from(margin: LeadingMargin) -> Self {
        Self::LeadingMargin(margin)
    }
}

impl From<MaskFilter> for SpanStyle {
    fn from(filter: MaskFilter) -> Self {
        Self::Mask(filter)
    }
}

impl From<Clickable> for SpanStyle {
    fn from(clickable: Clickable) -> Self {
        Self::Clickable(clickable)
    }
}

impl From<Link> for SpanStyle {
    fn from(link: Link) -> Self {
        Self::Link(link)
    }
}
