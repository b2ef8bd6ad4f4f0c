// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shorthands for appending [`SpanStyle`] regions.

use alloc::sync::Arc;

use peniko::Color;

use crate::interact::{Clickable, Link};
use crate::style::{
    Alignment, FontStyle, ImageSource, LeadingMargin, MaskFilter, SpanStyle, VerticalAlignment,
    MONOSPACE, SANS_SERIF, SERIF,
};
use crate::Span;

/// Each method builds one [`SpanStyle`] and appends it with [`Span::span`].
///
/// They are available for any attachment type that can be made from a [`SpanStyle`], so a
/// wrapper attachment can carry extra data and still use them.
///
/// ```
/// use span_tree::{span, FontStyle, SpanStyle};
/// use peniko::Color;
///
/// let tree = span::<SpanStyle>(|s| {
///     s.bold(|s| {
///         s.text("Bold ").foreground_color(Color::WHITE, |s| {
///             s.text("and white");
///         });
///     });
/// });
/// let text = tree.build();
/// let styles: Vec<_> = text.attributes_iter().collect();
/// assert_eq!(
///     styles,
///     [
///         (5..14, &SpanStyle::ForegroundColor(Color::WHITE)),
///         (0..14, &SpanStyle::FontStyle(FontStyle::Bold)),
///     ]
/// );
/// ```
impl<A: From<SpanStyle>> Span<A> {
    /// Appends a region with `style`.
    pub fn styled(&mut self, style: SpanStyle, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.span(A::from(style), build)
    }

    /// Appends a region with the given weight and slant.
    pub fn style(&mut self, style: FontStyle, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::FontStyle(style), build)
    }

    /// Appends a region that is neither bold nor italic.
    pub fn normal(&mut self, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.style(FontStyle::Normal, build)
    }

    /// Appends a bold region.
    pub fn bold(&mut self, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.style(FontStyle::Bold, build)
    }

    /// Appends an italic region.
    pub fn italic(&mut self, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.style(FontStyle::Italic, build)
    }

    /// Appends a bold italic region.
    pub fn bold_italic(&mut self, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.style(FontStyle::BoldItalic, build)
    }

    /// Appends an underlined region.
    pub fn underline(&mut self, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::Underline, build)
    }

    /// Appends a struck through region.
    pub fn strikethrough(&mut self, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::Strikethrough, build)
    }

    /// Appends a region in the typeface `family`.
    pub fn typeface(
        &mut self,
        family: impl Into<Arc<str>>,
        build: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.styled(SpanStyle::Typeface(family.into()), build)
    }

    /// Appends a sans-serif region.
    pub fn sans_serif(&mut self, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.typeface(SANS_SERIF, build)
    }

    /// Appends a serif region.
    pub fn serif(&mut self, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.typeface(SERIF, build)
    }

    /// Appends a monospaced region.
    pub fn monospace(&mut self, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.typeface(MONOSPACE, build)
    }

    /// Appends a region with a host-defined text appearance.
    pub fn appearance(&mut self, appearance: u32, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::TextAppearance(appearance), build)
    }

    /// Appends a superscript region.
    pub fn superscript(&mut self, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::Superscript, build)
    }

    /// Appends a subscript region.
    pub fn subscript(&mut self, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::Subscript, build)
    }

    /// Appends a horizontally scaled region.
    pub fn scale_x(&mut self, proportion: f32, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::ScaleX(proportion), build)
    }

    /// Appends a region sized relative to its surroundings.
    pub fn relative_size(&mut self, proportion: f32, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::RelativeSize(proportion), build)
    }

    /// Appends a region sized in pixels.
    pub fn absolute_size(&mut self, size: u32, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::AbsoluteSize { size, dip: false }, build)
    }

    /// Appends a region sized in density independent pixels.
    pub fn absolute_size_dip(&mut self, size: u32, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::AbsoluteSize { size, dip: true }, build)
    }

    /// Appends a quoted region, marked with a stripe of `color`.
    ///
    /// [`DEFAULT_MARKER_COLOR`](crate::style::DEFAULT_MARKER_COLOR) is the usual choice.
    pub fn quote(&mut self, color: Color, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::Quote(color), build)
    }

    /// Appends a region drawn through a mask filter.
    pub fn mask(&mut self, filter: MaskFilter, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::Mask(filter), build)
    }

    /// Appends a region whose lines are all indented by `every` pixels.
    pub fn leading_margin(&mut self, every: u32, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::LeadingMargin(LeadingMargin::every(every)), build)
    }

    /// Appends a region indented by `first` pixels on first lines and `rest` pixels on others.
    pub fn leading_margin_split(
        &mut self,
        first: u32,
        rest: u32,
        build: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.styled(
            SpanStyle::LeadingMargin(LeadingMargin { first, rest }),
            build,
        )
    }

    /// Appends a region with text color `color`.
    pub fn foreground_color(&mut self, color: Color, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::ForegroundColor(color), build)
    }

    /// Appends a region highlighted with `color`.
    pub fn background_color(&mut self, color: Color, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::BackgroundColor(color), build)
    }

    /// Appends a bulleted region.
    pub fn bullet(
        &mut self,
        gap_width: u32,
        color: Color,
        build: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.styled(SpanStyle::Bullet { gap_width, color }, build)
    }

    /// Appends an aligned region.
    pub fn align(&mut self, alignment: Alignment, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::Alignment(alignment), build)
    }

    /// Appends a region with an image in its leading margin.
    pub fn drawable_margin(
        &mut self,
        image: ImageSource,
        padding: u32,
        build: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.styled(SpanStyle::DrawableMargin { image, padding }, build)
    }

    /// Appends a region with an icon in its leading margin.
    pub fn icon_margin(
        &mut self,
        image: ImageSource,
        padding: u32,
        build: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.styled(SpanStyle::IconMargin { image, padding }, build)
    }

    /// Appends a region displayed as an image.
    ///
    /// The region's text stays in the built text; the renderer draws the image in its place.
    pub fn image(
        &mut self,
        source: ImageSource,
        vertical_alignment: VerticalAlignment,
        build: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.styled(
            SpanStyle::Image {
                source,
                vertical_alignment,
            },
            build,
        )
    }

    /// Appends a region that calls `on_click` when tapped.
    pub fn clickable(
        &mut self,
        on_click: impl Fn(&Clickable) + Send + Sync + 'static,
        build: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.styled(SpanStyle::Clickable(Clickable::new(on_click)), build)
    }

    /// Appends a link to `url`.
    ///
    /// When tapped, `on_click` runs first and navigation follows only if it returns `true`.
    pub fn url(
        &mut self,
        url: impl Into<Arc<str>>,
        on_click: impl Fn(&Link) -> bool + Send + Sync + 'static,
        build: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.styled(SpanStyle::Link(Link::with_callback(url, on_click)), build)
    }

    /// Appends a link to `url` that always navigates when tapped.
    pub fn link(&mut self, url: impl Into<Arc<str>>, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.styled(SpanStyle::Link(Link::new(url)), build)
    }
}
