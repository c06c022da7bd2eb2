//! Context-driven display style resolution for terminal file browsers.
//!
//! A host renderer describes what it is about to draw as a set of boolean
//! facts — which UI region, what kind of file, whether it is selected,
//! marked, or carries version-control state — and this crate deterministically
//! resolves that description into a single display style: foreground color,
//! background color, and an attribute bitset.
//!
//! The moving parts:
//!
//! - [`ContextDescriptor`]: the input facts, one per drawable unit
//! - [`Scheme`]: static tables of named, partially-specified style prototypes
//! - [`StyleStack`]: the tri-state builder prototypes compose through
//! - [`StyleAttributes`]: the fully-resolved output triple
//! - [`resolve`] / [`Scheme::resolve`]: the priority-ordered rule engine
//!
//! # Example
//!
//! ```
//! use undertone::{resolve, Attr, BaseColor, ColorValue, ContextDescriptor};
//!
//! let mut ctx = ContextDescriptor::new();
//! ctx.in_browser = true;
//! ctx.directory = true;
//! ctx.selected = true;
//!
//! let style = resolve(&ctx);
//! assert_eq!(style.fg, ColorValue::Bright(BaseColor::Blue));
//! assert_eq!(style.attrs, Attr::BOLD | Attr::REVERSE);
//!
//! // Hosts that paint with `console` can convert directly.
//! let painted = style.to_console_style().apply_to("Documents/");
//! # let _ = painted;
//! ```
//!
//! Resolution is pure and total: every descriptor produces a style, the
//! same descriptor always produces the same style, and the static default
//! scheme may be used from any number of threads without locking.

mod attr;
mod color;
mod context;
mod resolve;
mod scheme;
mod style;

pub use attr::Attr;
pub use color::{BaseColor, ColorValue};
pub use context::{Classifier, ContextDescriptor, ExtensionClassifier};
pub use resolve::resolve;
pub use scheme::{
    default_scheme, BrowserStyles, FileKindStyles, Scheme, SchemeError, StatusStyles, TaskStyles,
    TitleStyles, VcsStyles,
};
pub use style::{StyleAttributes, StyleStack};
