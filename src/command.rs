//! Edits that drive a [`ColorSync`](crate::sync::ColorSync).

use crate::types::{Cmyk, Hsv, Rgb};

/// The three color representations kept in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorSpace {
    Rgb,
    Cmyk,
    Hsv,
}

impl ColorSpace {
    /// Number of input fields for this representation.
    pub const fn field_count(self) -> usize {
        match self {
            ColorSpace::Rgb | ColorSpace::Hsv => 3,
            ColorSpace::Cmyk => 4,
        }
    }
}

impl core::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorSpace::Rgb => f.write_str("RGB"),
            ColorSpace::Cmyk => f.write_str("CMYK"),
            ColorSpace::Hsv => f.write_str("HSV"),
        }
    }
}

/// A user-driven change to the current color.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorEdit {
    /// RGB entered directly.
    SetRgb(Rgb),
    /// CMYK entered directly.
    SetCmyk(Cmyk),
    /// HSV entered directly.
    SetHsv(Hsv),
    /// Color chosen in an external picker.
    Pick(Rgb),
    /// Back to black.
    Reset,
}

impl ColorEdit {
    /// Representation the edit originates from.
    pub const fn source(&self) -> ColorSpace {
        match self {
            ColorEdit::SetRgb(_) | ColorEdit::Pick(_) | ColorEdit::Reset => ColorSpace::Rgb,
            ColorEdit::SetCmyk(_) => ColorSpace::Cmyk,
            ColorEdit::SetHsv(_) => ColorSpace::Hsv,
        }
    }
}
