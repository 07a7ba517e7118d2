//! Display-unit values for text fields and sliders.
//!
//! The inverse of [`input`](crate::input): fractions become percentages and
//! everything is rounded to integers with the same rounding as the core.

use core::fmt::Write;

use crate::command::ColorSpace;
use crate::convert::round_clamped;
use crate::sync::ColorSnapshot;
use heapless::{String, Vec};

/// Text of a single field. The widest value is "360".
pub type FieldText = String<3>;

/// Integer slider positions for all three representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayValues {
    /// Red, green, blue: 0-255.
    pub rgb: [u8; 3],
    /// Cyan, magenta, yellow, key: 0-100.
    pub cmyk: [u8; 4],
    /// Hue 0-359, saturation and value 0-100.
    pub hsv: [u16; 3],
}

impl DisplayValues {
    /// Scales a snapshot to display units.
    pub fn from_snapshot(snapshot: &ColorSnapshot) -> Self {
        let (r, g, b) = snapshot.rgb.components();
        let (c, m, y, k) = snapshot.cmyk.components();
        let (h, s, v) = snapshot.hsv.components();

        let hue = round_clamped(h, 360.0) as u16;
        Self {
            rgb: [r, g, b],
            cmyk: [percent(c), percent(m), percent(y), percent(k)],
            // 359.6 rounds to a full turn.
            hsv: [
                if hue == 360 { 0 } else { hue },
                u16::from(percent(s)),
                u16::from(percent(v)),
            ],
        }
    }

    /// Slider positions of one representation.
    pub fn values(&self, space: ColorSpace) -> Vec<u16, 4> {
        let mut values = Vec::new();
        match space {
            ColorSpace::Rgb => {
                values.extend(self.rgb.iter().map(|&v| u16::from(v)));
            }
            ColorSpace::Cmyk => {
                values.extend(self.cmyk.iter().map(|&v| u16::from(v)));
            }
            ColorSpace::Hsv => values.extend(self.hsv.iter().copied()),
        }
        values
    }

    /// Field text of one representation, in field order.
    pub fn field_text(&self, space: ColorSpace) -> Vec<FieldText, 4> {
        self.values(space)
            .iter()
            .map(|value| {
                let mut text = FieldText::new();
                let _ = write!(text, "{}", value);
                text
            })
            .collect()
    }
}

fn percent(fraction: f64) -> u8 {
    round_clamped(fraction * 100.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;

    #[test]
    fn red_scales_to_percentages() {
        let values = DisplayValues::from_snapshot(&ColorSnapshot::from_rgb(Rgb::new(255, 0, 0)));
        assert_eq!(values.rgb, [255, 0, 0]);
        assert_eq!(values.cmyk, [0, 100, 100, 0]);
        assert_eq!(values.hsv, [0, 100, 100]);
    }

    #[test]
    fn percentages_round_half_away_from_zero() {
        // 128 / 255 = 0.50196..., so value shows 50 and key shows 50.
        let values =
            DisplayValues::from_snapshot(&ColorSnapshot::from_rgb(Rgb::new(128, 128, 128)));
        assert_eq!(values.cmyk, [0, 0, 0, 50]);
        assert_eq!(values.hsv, [0, 0, 50]);
    }

    #[test]
    fn field_text_matches_values() {
        let values = DisplayValues::from_snapshot(&ColorSnapshot::from_rgb(Rgb::new(0, 0, 255)));
        let text = values.field_text(ColorSpace::Hsv);
        let text: [&str; 3] = [text[0].as_str(), text[1].as_str(), text[2].as_str()];
        assert_eq!(text, ["240", "100", "100"]);
        assert_eq!(values.field_text(ColorSpace::Cmyk).len(), 4);
    }
}
