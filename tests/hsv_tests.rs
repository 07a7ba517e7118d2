//! Integration tests for RGB <-> HSV conversion

mod common;
use common::*;

use color_model::{Channel, ConversionError, Hsv, Rgb, hsv_to_rgb, rgb_to_hsv};
use palette::{FromColor, Srgb};

type PaletteHsv = palette::Hsv<palette::encoding::Srgb, f64>;

#[test]
fn red_is_hue_zero() {
    assert_eq!(rgb_to_hsv(255, 0, 0).components(), (0.0, 1.0, 1.0));
}

#[test]
fn sector_boundaries_hit_primaries() {
    assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Ok(Rgb::new(255, 0, 0)));
    assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Ok(Rgb::new(0, 255, 0)));
    assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Ok(Rgb::new(0, 0, 255)));
}

#[test]
fn secondary_colors() {
    assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), Ok(Rgb::new(255, 255, 0)));
    assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), Ok(Rgb::new(0, 255, 255)));
    assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), Ok(Rgb::new(255, 0, 255)));
}

#[test]
fn hue_360_equals_hue_0() {
    for step in 0..=20 {
        let s = f64::from(step) / 20.0;
        for step in 0..=20 {
            let v = f64::from(step) / 20.0;
            assert_eq!(hsv_to_rgb(360.0, s, v), hsv_to_rgb(0.0, s, v));
        }
    }
}

#[test]
fn achromatic_has_zero_hue_and_saturation() {
    for level in 0..=255u8 {
        let hsv = rgb_to_hsv(level, level, level);
        assert_eq!(hsv.hue(), 0.0);
        assert_eq!(hsv.saturation(), 0.0);
        assert!(approx_eq(hsv.value(), f64::from(level) / 255.0));
    }
}

#[test]
fn zero_value_is_black_for_any_hue() {
    for hue in [0.0, 45.0, 179.9, 300.0, 359.999] {
        assert_eq!(hsv_to_rgb(hue, 1.0, 0.0), Ok(Rgb::new(0, 0, 0)));
    }
}

#[test]
fn negative_hue_intermediate_is_normalized() {
    // Red is max and blue > green, so (g - b) / delta is negative.
    let hsv = rgb_to_hsv(255, 0, 128);
    assert!(hsv.hue() > 300.0 && hsv.hue() < 360.0, "hue {}", hsv.hue());
}

#[test]
fn tie_break_prefers_red_then_green() {
    assert_eq!(rgb_to_hsv(255, 255, 0).hue(), 60.0);
    assert_eq!(rgb_to_hsv(255, 0, 255).hue(), 300.0);
    assert_eq!(rgb_to_hsv(0, 255, 255).hue(), 180.0);
}

#[test]
fn hsv_to_rgb_rejects_out_of_domain() {
    assert!(matches!(
        hsv_to_rgb(360.1, 1.0, 1.0),
        Err(ConversionError::InvalidInput {
            channel: Channel::Hue,
            ..
        })
    ));
    assert!(matches!(
        hsv_to_rgb(10.0, 1.5, 1.0),
        Err(ConversionError::InvalidInput {
            channel: Channel::Saturation,
            ..
        })
    ));
    assert!(hsv_to_rgb(-1.0, 0.5, 0.5).is_err());
    assert!(hsv_to_rgb(10.0, 0.5, f64::NAN).is_err());
}

#[test]
fn outputs_stay_in_domain() {
    for rgb in all_rgb().step_by(89) {
        let (h, s, v) = rgb.to_hsv().components();
        assert!((0.0..360.0).contains(&h), "{:?} -> hue {}", rgb, h);
        assert!((0.0..=1.0).contains(&s));
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
fn agrees_with_palette() {
    for rgb in all_rgb().step_by(101) {
        let (r, g, b) = rgb.normalized();
        let oracle = PaletteHsv::from_color(Srgb::new(r, g, b));
        let hsv = rgb.to_hsv();

        assert!(approx_eq(hsv.value(), oracle.value), "{:?}", rgb);
        assert!(approx_eq(hsv.saturation(), oracle.saturation), "{:?}", rgb);
        if hsv.saturation() > 0.0 {
            let hue_error = hue_distance(hsv.hue(), oracle.hue.into_positive_degrees());
            assert!(hue_error < 1e-6, "{:?}: {} vs {:?}", rgb, hsv.hue(), oracle.hue);
        }
    }
}

#[test]
fn saturating_wraps_out_of_range_hue() {
    let hsv = Hsv::saturating(480.0, 1.0, 1.0);
    assert_eq!(hsv.to_rgb(), Rgb::new(0, 255, 0));
}

#[test]
fn round_trip_for_every_rgb() {
    for rgb in all_rgb() {
        let back = rgb.to_hsv().to_rgb();
        assert!(within_one(rgb, back), "{:?} -> {:?}", rgb, back);
    }
}
