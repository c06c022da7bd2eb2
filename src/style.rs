//! The style composition primitive.
//!
//! [`StyleStack`] is a partially-specified style: optional colors plus five
//! tri-state flags. The same type serves as a read-only prototype inside a
//! [`Scheme`](crate::Scheme) and as the transient accumulator the resolver
//! composes layers into. [`StyleAttributes`] is the fully-resolved output.
//!
//! Tri-state semantics: `None` means "not specified by this layer, inherit
//! whatever was set before"; `Some(false)` means "explicitly cleared";
//! `Some(true)` means "explicitly set". [`StyleStack::add`] overrides only
//! the fields the source actually specifies, which is the sole inheritance
//! mechanism in the engine.

use serde::{Deserialize, Serialize};

use crate::attr::Attr;
use crate::color::ColorValue;

/// A fully-resolved display style: foreground, background, attribute bitset.
///
/// Every field is concrete; there is no unset state in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleAttributes {
    pub fg: ColorValue,
    pub bg: ColorValue,
    pub attrs: Attr,
}

impl StyleAttributes {
    /// The neutral style: terminal default colors, no attributes.
    pub const NEUTRAL: StyleAttributes = StyleAttributes {
        fg: ColorValue::Default,
        bg: ColorValue::Default,
        attrs: Attr::empty(),
    };

    /// Builds a ready-to-paint [`console::Style`] from this triple.
    ///
    /// `Default` colors are left unset so the terminal's own colors apply.
    pub fn to_console_style(&self) -> console::Style {
        let mut style = console::Style::new();
        if let Some(fg) = self.fg.to_console() {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg.to_console() {
            style = style.bg(bg);
        }
        if self.attrs.contains(Attr::BOLD) {
            style = style.bold();
        }
        if self.attrs.contains(Attr::UNDERLINE) {
            style = style.underlined();
        }
        if self.attrs.contains(Attr::DIM) {
            style = style.dim();
        }
        if self.attrs.contains(Attr::REVERSE) {
            style = style.reverse();
        }
        style
    }
}

/// A partially-specified style layer.
///
/// Prototypes are built with the fluent setters and composed with
/// [`copy`](StyleStack::copy) and [`add`](StyleStack::add);
/// [`finalize`](StyleStack::finalize) produces the output triple.
///
/// # Example
///
/// ```
/// use undertone::{BaseColor, ColorValue, StyleStack, Attr};
///
/// let directory = StyleStack::new()
///     .fg(ColorValue::Base(BaseColor::Blue))
///     .bright(true)
///     .bold(true);
///
/// let mut stack = StyleStack::new();
/// stack.copy(&directory);
/// let resolved = stack.finalize();
/// assert_eq!(resolved.fg, ColorValue::Bright(BaseColor::Blue));
/// assert_eq!(resolved.attrs, Attr::BOLD);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleStack {
    pub fg: Option<ColorValue>,
    pub bg: Option<ColorValue>,
    pub bright: Option<bool>,
    pub bold: Option<bool>,
    pub underline: Option<bool>,
    pub dim: Option<bool>,
    pub reverse: Option<bool>,
    // Attribute truth accumulated across applied layers. Truth is OR'd in
    // and never subtracted: a later `Some(false)` prevents that layer from
    // setting the flag but cannot clear one contributed earlier.
    #[serde(skip)]
    applied: Attr,
}

impl StyleStack {
    /// An empty stack: nothing specified, everything inherits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    pub fn fg(mut self, color: ColorValue) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the background color.
    pub fn bg(mut self, color: ColorValue) -> Self {
        self.bg = Some(color);
        self
    }

    /// Sets the bright tri-state.
    pub fn bright(mut self, on: bool) -> Self {
        self.bright = Some(on);
        self
    }

    /// Sets the bold tri-state.
    pub fn bold(mut self, on: bool) -> Self {
        self.bold = Some(on);
        self
    }

    /// Sets the underline tri-state.
    pub fn underline(mut self, on: bool) -> Self {
        self.underline = Some(on);
        self
    }

    /// Sets the dim tri-state.
    pub fn dim(mut self, on: bool) -> Self {
        self.dim = Some(on);
        self
    }

    /// Sets the reverse tri-state.
    pub fn reverse(mut self, on: bool) -> Self {
        self.reverse = Some(on);
        self
    }

    /// Unconditional full replacement: every field, set or unset, is taken
    /// from `proto`. Establishes a new base style.
    pub fn copy(&mut self, proto: &StyleStack) -> &mut Self {
        self.fg = proto.fg;
        self.bg = proto.bg;
        self.bright = proto.bright;
        self.bold = proto.bold;
        self.underline = proto.underline;
        self.dim = proto.dim;
        self.reverse = proto.reverse;
        self.applied = proto.truths();
        self
    }

    /// Selective merge: fields `proto` leaves unset keep their current
    /// value; fields it specifies override.
    pub fn add(&mut self, proto: &StyleStack) -> &mut Self {
        if proto.fg.is_some() {
            self.fg = proto.fg;
        }
        if proto.bg.is_some() {
            self.bg = proto.bg;
        }
        if proto.bright.is_some() {
            self.bright = proto.bright;
        }
        if proto.bold.is_some() {
            self.bold = proto.bold;
        }
        if proto.underline.is_some() {
            self.underline = proto.underline;
        }
        if proto.dim.is_some() {
            self.dim = proto.dim;
        }
        if proto.reverse.is_some() {
            self.reverse = proto.reverse;
        }
        self.applied |= proto.truths();
        self
    }

    /// Resolves the tri-states into a concrete triple.
    ///
    /// Unset colors become the terminal default. A `bright` of `Some(true)`
    /// transforms the chosen foreground into its bright variant; the
    /// transform is a guarded no-op for palette indices and the default
    /// color, which have no bright form.
    pub fn finalize(&self) -> StyleAttributes {
        let mut fg = self.fg.unwrap_or(ColorValue::Default);
        if self.bright == Some(true) {
            fg = fg.brightened();
        }
        StyleAttributes {
            fg,
            bg: self.bg.unwrap_or(ColorValue::Default),
            attrs: self.applied | self.truths(),
        }
    }

    /// Attribute bits this layer sets: a flag contributes iff its tri-state
    /// is exactly `Some(true)`.
    fn truths(&self) -> Attr {
        let mut attrs = Attr::empty();
        if self.bold == Some(true) {
            attrs |= Attr::BOLD;
        }
        if self.underline == Some(true) {
            attrs |= Attr::UNDERLINE;
        }
        if self.dim == Some(true) {
            attrs |= Attr::DIM;
        }
        if self.reverse == Some(true) {
            attrs |= Attr::REVERSE;
        }
        attrs
    }
}
