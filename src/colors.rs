//! Named colors and conversions to and from `palette` types.
//!
//! `Srgb<f32>` channels are rounded to the nearest byte on the way back;
//! out-of-gamut channels are clamped.

use crate::convert::round_channel;
use crate::types::Rgb;
use palette::Srgb;

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);

impl From<Srgb<u8>> for Rgb {
    fn from(color: Srgb<u8>) -> Self {
        Rgb::new(color.red, color.green, color.blue)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(color: Rgb) -> Self {
        Srgb::new(color.red, color.green, color.blue)
    }
}

impl From<Rgb> for Srgb<f32> {
    fn from(color: Rgb) -> Self {
        Srgb::<u8>::from(color).into_format()
    }
}

impl From<Srgb<f32>> for Rgb {
    fn from(color: Srgb<f32>) -> Self {
        let byte = |channel: f32| round_channel(f64::from(channel) * 255.0);
        Rgb::new(byte(color.red), byte(color.green), byte(color.blue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_u8_is_lossless() {
        let color = Rgb::new(12, 200, 99);
        let srgb: Srgb<u8> = color.into();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (12, 200, 99));
        assert_eq!(Rgb::from(srgb), color);
    }

    #[test]
    fn srgb_f32_rounds_back() {
        let color = Rgb::new(1, 128, 254);
        let srgb: Srgb<f32> = color.into();
        assert_eq!(Rgb::from(srgb), color);
    }

    #[test]
    fn srgb_f32_out_of_gamut_is_clamped() {
        assert_eq!(Rgb::from(Srgb::new(1.2f32, -0.3, 0.5)), Rgb::new(255, 0, 128));
    }
}
