//! Color value types and the conversion error.
//!
//! All three representations are plain `Copy` values. RGB channels are
//! integers in `0..=255`; CMYK channels, saturation and value are fractions
//! in `0.0..=1.0`; hue is in degrees, `0.0..360.0`.

use crate::convert::wrap_degrees;

/// Identifies a single channel of one of the color representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
    Key,
    Hue,
    Saturation,
    Value,
}

impl Channel {
    /// Lowercase channel name.
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Cyan => "cyan",
            Channel::Magenta => "magenta",
            Channel::Yellow => "yellow",
            Channel::Key => "key",
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Value => "value",
        }
    }
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Conversion errors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionError {
    /// A channel value lies outside its declared domain (or is not finite).
    InvalidInput {
        /// The offending channel
        channel: Channel,
        /// The rejected value
        value: f64,
    },
}

impl core::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConversionError::InvalidInput { channel, value } => {
                write!(f, "invalid {} value {}", channel, value)?;
                match channel {
                    Channel::Red | Channel::Green | Channel::Blue => {
                        write!(f, " (expected 0-255)")
                    }
                    Channel::Hue => write!(f, " (expected 0.0-360.0)"),
                    _ => write!(f, " (expected 0.0-1.0)"),
                }
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConversionError {}

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Creates an RGB color.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates an RGB color from wide integers, rejecting channels outside `0..=255`.
    pub fn try_new(red: i32, green: i32, blue: i32) -> Result<Self, ConversionError> {
        Ok(Self {
            red: byte_channel(Channel::Red, red)?,
            green: byte_channel(Channel::Green, green)?,
            blue: byte_channel(Channel::Blue, blue)?,
        })
    }

    /// Creates an RGB color from wide integers, clamping each channel into `0..=255`.
    pub fn saturating(red: i32, green: i32, blue: i32) -> Self {
        let clamp = |v: i32| v.clamp(0, 255) as u8;
        Self::new(clamp(red), clamp(green), clamp(blue))
    }

    /// Returns `(red, green, blue)`.
    #[inline]
    pub const fn components(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// Returns the channels scaled to `0.0..=1.0`.
    #[inline]
    pub fn normalized(self) -> (f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(rgb: Rgb) -> Self {
        rgb.components()
    }
}

fn byte_channel(channel: Channel, value: i32) -> Result<u8, ConversionError> {
    u8::try_from(value).map_err(|_| ConversionError::InvalidInput {
        channel,
        value: f64::from(value),
    })
}

/// A CMYK color with fractional channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cmyk {
    cyan: f64,
    magenta: f64,
    yellow: f64,
    key: f64,
}

impl Cmyk {
    /// Creates a CMYK color. Every channel must be a finite value in `0.0..=1.0`.
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Result<Self, ConversionError> {
        Ok(Self {
            cyan: unit_channel(Channel::Cyan, cyan)?,
            magenta: unit_channel(Channel::Magenta, magenta)?,
            yellow: unit_channel(Channel::Yellow, yellow)?,
            key: unit_channel(Channel::Key, key)?,
        })
    }

    /// Creates a CMYK color, clamping each channel into `0.0..=1.0`. NaN becomes 0.
    pub fn saturating(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Self {
        Self {
            cyan: clamp_unit(cyan),
            magenta: clamp_unit(magenta),
            yellow: clamp_unit(yellow),
            key: clamp_unit(key),
        }
    }

    /// Caller guarantees all channels are already in range.
    #[inline]
    pub(crate) const fn from_parts(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }

    /// Cyan fraction.
    #[inline]
    pub const fn cyan(&self) -> f64 {
        self.cyan
    }

    /// Magenta fraction.
    #[inline]
    pub const fn magenta(&self) -> f64 {
        self.magenta
    }

    /// Yellow fraction.
    #[inline]
    pub const fn yellow(&self) -> f64 {
        self.yellow
    }

    /// Key (black) fraction.
    #[inline]
    pub const fn key(&self) -> f64 {
        self.key
    }

    /// Returns `(cyan, magenta, yellow, key)`.
    #[inline]
    pub const fn components(&self) -> (f64, f64, f64, f64) {
        (self.cyan, self.magenta, self.yellow, self.key)
    }
}

impl TryFrom<(f64, f64, f64, f64)> for Cmyk {
    type Error = ConversionError;

    fn try_from((c, m, y, k): (f64, f64, f64, f64)) -> Result<Self, Self::Error> {
        Self::new(c, m, y, k)
    }
}

impl From<Cmyk> for (f64, f64, f64, f64) {
    fn from(cmyk: Cmyk) -> Self {
        cmyk.components()
    }
}

/// An HSV color. Hue in degrees, saturation and value as fractions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    hue: f64,
    saturation: f64,
    value: f64,
}

impl Hsv {
    /// Creates an HSV color.
    ///
    /// Hue must lie in `0.0..=360.0`; a hue of exactly 360 is the same angle
    /// as 0 and is stored as 0. Saturation and value must lie in `0.0..=1.0`.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Result<Self, ConversionError> {
        if !(0.0..=360.0).contains(&hue) {
            return Err(ConversionError::InvalidInput {
                channel: Channel::Hue,
                value: hue,
            });
        }

        Ok(Self {
            hue: if hue == 360.0 { 0.0 } else { hue },
            saturation: unit_channel(Channel::Saturation, saturation)?,
            value: unit_channel(Channel::Value, value)?,
        })
    }

    /// Creates an HSV color, wrapping hue into `0.0..360.0` and clamping
    /// saturation and value into `0.0..=1.0`. NaN becomes 0.
    pub fn saturating(hue: f64, saturation: f64, value: f64) -> Self {
        let hue = if hue.is_finite() {
            wrap_degrees(hue)
        } else {
            0.0
        };

        Self {
            hue,
            saturation: clamp_unit(saturation),
            value: clamp_unit(value),
        }
    }

    /// Caller guarantees hue is in `0.0..360.0` and the rest in `0.0..=1.0`.
    #[inline]
    pub(crate) const fn from_parts(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Hue in degrees, `0.0..360.0`.
    #[inline]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    /// Saturation fraction.
    #[inline]
    pub const fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Value (brightness) fraction.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns `(hue, saturation, value)`.
    #[inline]
    pub const fn components(&self) -> (f64, f64, f64) {
        (self.hue, self.saturation, self.value)
    }
}

impl TryFrom<(f64, f64, f64)> for Hsv {
    type Error = ConversionError;

    fn try_from((h, s, v): (f64, f64, f64)) -> Result<Self, Self::Error> {
        Self::new(h, s, v)
    }
}

impl From<Hsv> for (f64, f64, f64) {
    fn from(hsv: Hsv) -> Self {
        hsv.components()
    }
}

// NaN fails the range check.
fn unit_channel(channel: Channel, value: f64) -> Result<f64, ConversionError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConversionError::InvalidInput { channel, value })
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
