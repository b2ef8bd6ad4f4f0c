// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive attachments and tap dispatch.
//!
//! The host reports a tap at a text offset through [`activate_at`], which finds the
//! interactive attachment covering that offset and runs its callback.

use alloc::sync::Arc;
use core::fmt::{self, Debug};

use attributed_text::{AttributedText, TextStorage};

use crate::SpanStyle;

type ClickFn = dyn Fn(&Clickable) + Send + Sync;
type LinkFn = dyn Fn(&Link) -> bool + Send + Sync;

/// Host hook that performs the default action for a [`Link`].
///
/// Closures taking the URL implement this trait.
pub trait Navigator {
    /// Opens `url`.
    fn open_url(&mut self, url: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn open_url(&mut self, url: &str) {
        self(url);
    }
}

/// An attachment that can react to a tap.
pub trait Activate {
    /// Returns `true` if this attachment reacts to taps.
    fn is_interactive(&self) -> bool;

    /// Runs the tap behavior. Does nothing unless [`is_interactive`](Self::is_interactive).
    fn activate(&self, navigator: &mut dyn Navigator);
}

/// A region that reports taps to a callback.
///
/// Clones share the callback, and two `Clickable`s are equal only when they share it.
#[derive(Clone)]
pub struct Clickable {
    on_click: Arc<ClickFn>,
}

impl Clickable {
    /// Creates a region that calls `on_click` with itself when tapped.
    pub fn new(on_click: impl Fn(&Self) + Send + Sync + 'static) -> Self {
        Self {
            on_click: Arc::new(on_click),
        }
    }

    /// Runs the callback.
    pub fn activate(&self) {
        (self.on_click)(self);
    }
}

impl Debug for Clickable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clickable").finish_non_exhaustive()
    }
}

impl PartialEq for Clickable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.on_click, &other.on_click)
    }
}

/// A hyperlink.
///
/// When tapped, the optional callback runs first. The [`Navigator`] then opens the URL,
/// unless the callback returned `false`.
#[derive(Clone)]
pub struct Link {
    url: Arc<str>,
    on_click: Option<Arc<LinkFn>>,
}

impl Link {
    /// Creates a link that always navigates to `url` when tapped.
    pub fn new(url: impl Into<Arc<str>>) -> Self {
        Self {
            url: url.into(),
            on_click: None,
        }
    }

    /// Creates a link that asks `on_click` whether to navigate to `url` when tapped.
    pub fn with_callback(
        url: impl Into<Arc<str>>,
        on_click: impl Fn(&Self) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            url: url.into(),
            on_click: Some(Arc::new(on_click)),
        }
    }

    /// The link target.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Runs the callback and, unless it declined, navigates.
    ///
    /// Returns `true` if `navigator` was asked to open the URL.
    pub fn activate(&self, navigator: &mut dyn Navigator) -> bool {
        let navigate = self.on_click.as_ref().is_none_or(|on_click| on_click(self));
        if navigate {
            navigator.open_url(&self.url);
        }
        navigate
    }
}

impl Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("url", &self.url)
            .field("has_callback", &self.on_click.is_some())
            .finish()
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
            && match (&self.on_click, &other.on_click) {
                (None, None) => true,
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                _ => false,
            }
    }
}

impl Activate for SpanStyle {
    fn is_interactive(&self) -> bool {
        matches!(self, Self::Clickable(_) | Self::Link(_))
    }

    fn activate(&self, navigator: &mut dyn Navigator) {
        match self {
            Self::Clickable(clickable) => clickable.activate(),
            Self::Link(link) => {
                link.activate(navigator);
            }
            _ => {}
        }
    }
}

/// Activates the interactive attachment covering byte `index`.
///
/// Attachments are searched in the order they were applied, and the first interactive
/// one containing `index` is activated. For text produced by
/// [`Span::build`](crate::Span::build), nested regions are applied before the regions
/// around them, so the innermost interactive region wins.
///
/// Returns `true` if an attachment was activated.
pub fn activate_at<T, A>(
    text: &AttributedText<T, A>,
    index: usize,
    navigator: &mut dyn Navigator,
) -> bool
where
    T: Debug + TextStorage,
    A: Debug + Activate,
{
    let Some((range, attachment)) = text
        .attributes_at(index)
        .find(|(_, attachment)| attachment.is_interactive())
    else {
        log::debug!("no interactive attachment at {index}");
        return false;
    };
    log::debug!("activating {attachment:?} over {range:?} at {index}");
    attachment.activate(navigator);
    true
}
