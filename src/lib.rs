#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Rgb`**: 8-bit red/green/blue, the hub every conversion passes through
//! - **`Cmyk`**: cyan/magenta/yellow/key as fractions in 0.0-1.0
//! - **`Hsv`**: hue in degrees (0.0-360.0), saturation and value as fractions
//! - **`rgb_to_cmyk`, `cmyk_to_rgb`, `rgb_to_hsv`, `hsv_to_rgb`**: the four conversions
//! - **`ConversionError`**: the single error kind, `InvalidInput`
//! - **`ColorSync`**: keeps all three representations consistent for an editor
//! - **`ColorView`**: trait to implement for whatever displays the color
//! - **`ColorEdit`**: edits that can be sent to a `ColorSync`
//!
//! Percentages exist only at the boundary: [`input`] parses text fields in
//! display units and [`display`] produces them. Everything else works in
//! fractions.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod command;
pub mod convert;
pub mod display;
pub mod input;
pub mod sync;
pub mod types;

pub use colors::{BLACK, BLUE, GREEN, RED, WHITE};
pub use command::{ColorEdit, ColorSpace};
pub use convert::{cmyk_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hsv};
pub use display::DisplayValues;
pub use input::{FieldKind, InputError};
pub use sync::{ColorSnapshot, ColorSync, ColorView, SyncError};
pub use types::{Channel, Cmyk, ConversionError, Hsv, Rgb};

