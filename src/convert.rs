//! RGB <-> CMYK and RGB <-> HSV conversions.
//!
//! Every integer result is produced with round-half-away-from-zero and then
//! clamped to `0..=255`.
//!
//! When two channels share the maximum in RGB -> HSV, the hue branch is
//! chosen in the fixed priority order red, green, blue.

use crate::types::{Cmyk, ConversionError, Hsv, Rgb};

/// Converts 8-bit RGB to CMYK. Pure black maps to `(0, 0, 0, 1)`.
pub fn rgb_to_cmyk(red: u8, green: u8, blue: u8) -> Cmyk {
    Rgb::new(red, green, blue).to_cmyk()
}

/// Converts CMYK fractions to 8-bit RGB.
///
/// # Errors
/// `InvalidInput` if any channel is outside `0.0..=1.0` or not finite.
pub fn cmyk_to_rgb(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Result<Rgb, ConversionError> {
    Ok(Cmyk::new(cyan, magenta, yellow, key)?.to_rgb())
}

/// Converts 8-bit RGB to HSV.
pub fn rgb_to_hsv(red: u8, green: u8, blue: u8) -> Hsv {
    Rgb::new(red, green, blue).to_hsv()
}

/// Converts HSV to 8-bit RGB. A hue of 360 is treated as 0.
///
/// # Errors
/// `InvalidInput` if hue is outside `0.0..=360.0` or saturation/value are
/// outside `0.0..=1.0`.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Result<Rgb, ConversionError> {
    Ok(Hsv::new(hue, saturation, value)?.to_rgb())
}

impl Rgb {
    /// Converts to CMYK.
    pub fn to_cmyk(self) -> Cmyk {
        if self == Rgb::new(0, 0, 0) {
            return Cmyk::from_parts(0.0, 0.0, 0.0, 1.0);
        }

        let (r, g, b) = self.normalized();
        let k = 1.0 - r.max(g).max(b);
        let ink = |channel: f64| ((1.0 - channel - k) / (1.0 - k)).clamp(0.0, 1.0);

        Cmyk::from_parts(ink(r), ink(g), ink(b), k.clamp(0.0, 1.0))
    }

    /// Converts to HSV.
    pub fn to_hsv(self) -> Hsv {
        let (r, g, b) = self.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * rem_euclid((g - b) / delta, 6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Hsv::from_parts(wrap_degrees(hue), saturation, max)
    }
}

impl Cmyk {
    /// Converts to 8-bit RGB.
    pub fn to_rgb(&self) -> Rgb {
        let (c, m, y, k) = self.components();
        let white = 1.0 - k;

        Rgb::new(
            round_channel(255.0 * (1.0 - c) * white),
            round_channel(255.0 * (1.0 - m) * white),
            round_channel(255.0 * (1.0 - y) * white),
        )
    }
}

impl Hsv {
    /// Converts to 8-bit RGB.
    pub fn to_rgb(&self) -> Rgb {
        let (hue, saturation, value) = self.components();
        let chroma = value * saturation;
        let sector_pos = hue / 60.0;
        let x = chroma * (1.0 - libm::fabs(rem_euclid(sector_pos, 2.0) - 1.0));
        let m = value - chroma;

        // Sectors are half-open on the lower end: [0, 60), [60, 120), ...
        let (r1, g1, b1) = match sector(sector_pos) {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Rgb::new(
            round_channel((r1 + m) * 255.0),
            round_channel((g1 + m) * 255.0),
            round_channel((b1 + m) * 255.0),
        )
    }
}

/// Index of the 60 degree sector, `0..=5`.
fn sector(sector_pos: f64) -> u8 {
    (libm::floor(sector_pos) as u8).min(5)
}

/// Rounds half away from zero and clamps to a byte. NaN maps to 0.
pub(crate) fn round_channel(value: f64) -> u8 {
    round_clamped(value, 255.0) as u8
}

/// Rounds half away from zero into `0.0..=max`. NaN maps to 0.
pub(crate) fn round_clamped(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    libm::round(value).clamp(0.0, max)
}

/// Remainder with the sign of the modulus, in `0.0..modulus`.
pub(crate) fn rem_euclid(value: f64, modulus: f64) -> f64 {
    let r = libm::fmod(value, modulus);
    if r < 0.0 { r + modulus } else { r }
}

/// Maps any finite angle into `0.0..360.0`.
pub(crate) fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = rem_euclid(degrees, 360.0);
    // -1e-20 + 360.0 == 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
