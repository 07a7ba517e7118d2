//! Parsing of raw text-field input at the UI boundary.
//!
//! Fields use display units: RGB 0-255, CMYK and saturation/value as
//! percentages 0-100, hue in degrees 0-360. Out-of-range numbers are clamped
//! into the field range; blank or non-numeric text is an error.

use crate::command::ColorSpace;
use crate::convert::round_clamped;
use crate::types::{Cmyk, Hsv, Rgb};

/// Units of a single input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldKind {
    /// RGB channel, 0-255.
    Byte,
    /// CMYK channel, saturation or value, 0-100.
    Percent,
    /// Hue, 0-360.
    Degrees,
}

impl FieldKind {
    /// Largest accepted value in display units.
    pub const fn max(self) -> f64 {
        match self {
            FieldKind::Byte => 255.0,
            FieldKind::Percent => 100.0,
            FieldKind::Degrees => 360.0,
        }
    }

    /// Field kinds of a representation, in field order.
    pub const fn layout(space: ColorSpace) -> &'static [FieldKind] {
        match space {
            ColorSpace::Rgb => &[FieldKind::Byte, FieldKind::Byte, FieldKind::Byte],
            ColorSpace::Cmyk => &[
                FieldKind::Percent,
                FieldKind::Percent,
                FieldKind::Percent,
                FieldKind::Percent,
            ],
            ColorSpace::Hsv => &[FieldKind::Degrees, FieldKind::Percent, FieldKind::Percent],
        }
    }
}

/// Field parsing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Field is empty or whitespace only.
    Blank { field: usize },

    /// Field does not contain a finite number.
    NotANumber { field: usize },

    /// Wrong number of fields for the representation.
    FieldCount { expected: usize, found: usize },
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::Blank { field } => write!(f, "field {} is blank", field),
            InputError::NotANumber { field } => {
                write!(f, "field {} is not a number", field)
            }
            InputError::FieldCount { expected, found } => {
                write!(f, "expected {} fields, got {}", expected, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

/// Parses one field and converts it to internal units.
///
/// Byte and degree fields keep their scale; percent fields become fractions.
/// Byte fields are rounded to the nearest integer.
pub fn parse_field(text: &str, kind: FieldKind) -> Result<f64, InputError> {
    parse_indexed(0, text, kind)
}

fn parse_indexed(field: usize, text: &str, kind: FieldKind) -> Result<f64, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Blank { field });
    }

    let number: f64 = text
        .parse()
        .map_err(|_| InputError::NotANumber { field })?;
    if !number.is_finite() {
        return Err(InputError::NotANumber { field });
    }

    let clamped = number.clamp(0.0, kind.max());
    Ok(match kind {
        FieldKind::Byte => round_clamped(clamped, 255.0),
        FieldKind::Percent => clamped / 100.0,
        FieldKind::Degrees => clamped,
    })
}

fn parse_group<const N: usize>(fields: &[&str], space: ColorSpace) -> Result<[f64; N], InputError> {
    if fields.len() != space.field_count() {
        return Err(InputError::FieldCount {
            expected: space.field_count(),
            found: fields.len(),
        });
    }

    // Blank fields take precedence over malformed ones.
    if let Some(field) = fields.iter().position(|text| text.trim().is_empty()) {
        return Err(InputError::Blank { field });
    }

    let mut values = [0.0; N];
    let layout = FieldKind::layout(space);
    for (field, (text, kind)) in fields.iter().zip(layout).enumerate() {
        values[field] = parse_indexed(field, text, *kind)?;
    }
    Ok(values)
}

/// Parses three RGB fields.
pub fn parse_rgb(fields: &[&str]) -> Result<Rgb, InputError> {
    let [r, g, b] = parse_group::<3>(fields, ColorSpace::Rgb)?;
    Ok(Rgb::new(r as u8, g as u8, b as u8))
}

/// Parses four CMYK percentage fields.
pub fn parse_cmyk(fields: &[&str]) -> Result<Cmyk, InputError> {
    let [c, m, y, k] = parse_group::<4>(fields, ColorSpace::Cmyk)?;
    Ok(Cmyk::saturating(c, m, y, k))
}

/// Parses hue (degrees), saturation and value (percent) fields.
pub fn parse_hsv(fields: &[&str]) -> Result<Hsv, InputError> {
    let [h, s, v] = parse_group::<3>(fields, ColorSpace::Hsv)?;
    Ok(Hsv::saturating(h, s, v))
}
