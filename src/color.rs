//! Color values and the bright transform.
//!
//! Resolved styles carry a [`ColorValue`] for foreground and background.
//! A color is either the terminal's own default, one of the eight ANSI
//! base colors, the bright variant of a base color, or a raw 256-color
//! palette index. Conversion to [`console::Color`] is provided for hosts
//! that paint with the `console` crate.

use serde::{Deserialize, Serialize};

/// The eight ANSI base colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl BaseColor {
    /// Palette index of this color (0–7).
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// A foreground or background color.
///
/// `Bright` exists only for the eight base colors; there is no bright
/// variant of a raw palette index or of the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorValue {
    /// The terminal's own foreground/background.
    Default,
    /// One of the eight ANSI base colors.
    Base(BaseColor),
    /// The heightened-intensity variant of a base color.
    Bright(BaseColor),
    /// A raw 256-color palette index.
    Palette(u8),
}

impl ColorValue {
    /// Applies the bright transform.
    ///
    /// Only base colors have a bright variant. `Default` and `Palette`
    /// values are returned unchanged rather than shifted to a different
    /// palette index; an already-bright color stays bright.
    pub fn brightened(self) -> ColorValue {
        match self {
            ColorValue::Base(c) => ColorValue::Bright(c),
            other => other,
        }
    }

    /// Converts to a `console` color, or `None` for the terminal default.
    pub fn to_console(self) -> Option<console::Color> {
        use console::Color;
        match self {
            ColorValue::Default => None,
            ColorValue::Base(c) => Some(match c {
                BaseColor::Black => Color::Black,
                BaseColor::Red => Color::Red,
                BaseColor::Green => Color::Green,
                BaseColor::Yellow => Color::Yellow,
                BaseColor::Blue => Color::Blue,
                BaseColor::Magenta => Color::Magenta,
                BaseColor::Cyan => Color::Cyan,
                BaseColor::White => Color::White,
            }),
            // Bright variants live at palette slots 8-15.
            ColorValue::Bright(c) => Some(Color::Color256(c.index() + 8)),
            ColorValue::Palette(n) => Some(Color::Color256(n)),
        }
    }
}

impl From<BaseColor> for ColorValue {
    fn from(c: BaseColor) -> Self {
        ColorValue::Base(c)
    }
}
