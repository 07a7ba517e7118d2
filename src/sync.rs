//! Keeps RGB, CMYK and HSV representations of one color consistent.
//!
//! Provides [`ColorSync`], which owns the current color and a [`ColorView`]
//! and runs one propagation cycle per edit: store the edited representation,
//! derive the other two, render once.
//!
//! Edits are single-writer. Every mutation takes `&mut self` and the view only
//! ever sees a shared [`ColorSnapshot`], so a render callback cannot start a
//! nested cycle. A view that feeds user changes back must do so after
//! `render` returns, through a new edit.

use crate::colors::BLACK;
use crate::command::{ColorEdit, ColorSpace};
use crate::input::{self, InputError};
use crate::types::{Cmyk, ConversionError, Hsv, Rgb};

/// Trait for whatever displays the current color (fields, sliders, swatch).
pub trait ColorView {
    /// Shows a new consistent state.
    ///
    /// Called exactly once per propagation cycle, and once when the
    /// [`ColorSync`] is created.
    fn render(&mut self, snapshot: &ColorSnapshot);
}

/// One consistent state of all three representations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorSnapshot {
    pub rgb: Rgb,
    pub cmyk: Cmyk,
    pub hsv: Hsv,
    /// Representation the last edit came from. Its value is stored exactly
    /// as entered; the others are derived.
    pub source: ColorSpace,
}

impl ColorSnapshot {
    /// RGB as entered, CMYK and HSV derived from it.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            cmyk: rgb.to_cmyk(),
            hsv: rgb.to_hsv(),
            source: ColorSpace::Rgb,
        }
    }

    /// CMYK as entered, RGB derived from it and HSV from the derived RGB.
    pub fn from_cmyk(cmyk: Cmyk) -> Self {
        let rgb = cmyk.to_rgb();
        Self {
            rgb,
            cmyk,
            hsv: rgb.to_hsv(),
            source: ColorSpace::Cmyk,
        }
    }

    /// HSV as entered, RGB derived from it and CMYK from the derived RGB.
    pub fn from_hsv(hsv: Hsv) -> Self {
        let rgb = hsv.to_rgb();
        Self {
            rgb,
            cmyk: rgb.to_cmyk(),
            hsv,
            source: ColorSpace::Hsv,
        }
    }
}

impl Default for ColorSnapshot {
    fn default() -> Self {
        Self::from_rgb(BLACK)
    }
}

/// Errors from edits that carry unvalidated input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncError {
    /// Text field input could not be parsed.
    Input(InputError),
    /// A numeric channel was outside its domain.
    Conversion(ConversionError),
}

impl core::fmt::Display for SyncError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SyncError::Input(err) => write!(f, "input error: {}", err),
            SyncError::Conversion(err) => write!(f, "conversion error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SyncError {}

impl From<InputError> for SyncError {
    fn from(err: InputError) -> Self {
        SyncError::Input(err)
    }
}

impl From<ConversionError> for SyncError {
    fn from(err: ConversionError) -> Self {
        SyncError::Conversion(err)
    }
}

/// Owns the current color and the view that displays it.
///
/// # Type Parameters
/// * `V` - View implementation type
pub struct ColorSync<V: ColorView> {
    view: V,
    snapshot: ColorSnapshot,
}

impl<V: ColorView> ColorSync<V> {
    /// Creates a sync holding black and renders it.
    pub fn new(mut view: V) -> Self {
        let snapshot = ColorSnapshot::default();
        view.render(&snapshot);

        Self { view, snapshot }
    }

    /// Applies an edit by dispatching to the matching method.
    pub fn handle_edit(&mut self, edit: ColorEdit) -> ColorSnapshot {
        #[cfg(feature = "defmt")]
        defmt::debug!("handling {} edit", edit.source());

        match edit {
            ColorEdit::SetRgb(rgb) => self.set_rgb(rgb),
            ColorEdit::SetCmyk(cmyk) => self.set_cmyk(cmyk),
            ColorEdit::SetHsv(hsv) => self.set_hsv(hsv),
            ColorEdit::Pick(rgb) => self.pick(rgb),
            ColorEdit::Reset => self.reset(),
        }
    }

    /// Sets the color from RGB.
    pub fn set_rgb(&mut self, rgb: Rgb) -> ColorSnapshot {
        self.propagate(ColorSnapshot::from_rgb(rgb))
    }

    /// Sets the color from CMYK, keeping the CMYK values as entered.
    pub fn set_cmyk(&mut self, cmyk: Cmyk) -> ColorSnapshot {
        self.propagate(ColorSnapshot::from_cmyk(cmyk))
    }

    /// Sets the color from HSV, keeping the HSV values as entered.
    pub fn set_hsv(&mut self, hsv: Hsv) -> ColorSnapshot {
        self.propagate(ColorSnapshot::from_hsv(hsv))
    }

    /// Sets the color chosen in an external picker.
    pub fn pick(&mut self, rgb: Rgb) -> ColorSnapshot {
        self.set_rgb(rgb)
    }

    /// Returns to black.
    pub fn reset(&mut self) -> ColorSnapshot {
        self.propagate(ColorSnapshot::default())
    }

    /// Sets the color from unchecked RGB channels.
    ///
    /// # Errors
    /// `SyncError::Conversion` if a channel is outside `0..=255`. The state
    /// is left untouched and nothing is rendered.
    pub fn try_set_rgb(&mut self, red: i32, green: i32, blue: i32) -> Result<ColorSnapshot, SyncError> {
        let rgb = Rgb::try_new(red, green, blue).inspect_err(|_err| self.log_rejected())?;
        Ok(self.set_rgb(rgb))
    }

    /// Sets the color from unchecked CMYK fractions.
    pub fn try_set_cmyk(
        &mut self,
        cyan: f64,
        magenta: f64,
        yellow: f64,
        key: f64,
    ) -> Result<ColorSnapshot, SyncError> {
        let cmyk = Cmyk::new(cyan, magenta, yellow, key).inspect_err(|_err| self.log_rejected())?;
        Ok(self.set_cmyk(cmyk))
    }

    /// Sets the color from unchecked HSV values.
    pub fn try_set_hsv(&mut self, hue: f64, saturation: f64, value: f64) -> Result<ColorSnapshot, SyncError> {
        let hsv = Hsv::new(hue, saturation, value).inspect_err(|_err| self.log_rejected())?;
        Ok(self.set_hsv(hsv))
    }

    /// Sets the color from the raw text fields of one representation.
    ///
    /// Fields are in display units (see [`input`](crate::input)).
    ///
    /// # Errors
    /// * `InputError::Blank` - the state is unchanged and the current state is
    ///   rendered again so the view can restore the field text
    /// * `InputError::NotANumber` / `FieldCount` - the state is unchanged and
    ///   nothing is rendered
    pub fn edit_fields(&mut self, space: ColorSpace, fields: &[&str]) -> Result<ColorSnapshot, SyncError> {
        let parsed = match space {
            ColorSpace::Rgb => input::parse_rgb(fields).map(ColorSnapshot::from_rgb),
            ColorSpace::Cmyk => input::parse_cmyk(fields).map(ColorSnapshot::from_cmyk),
            ColorSpace::Hsv => input::parse_hsv(fields).map(ColorSnapshot::from_hsv),
        };

        match parsed {
            Ok(snapshot) => Ok(self.propagate(snapshot)),
            Err(err) => {
                self.log_rejected();
                if let InputError::Blank { .. } = err {
                    self.view.render(&self.snapshot);
                }
                Err(err.into())
            }
        }
    }

    /// Returns the current state.
    pub fn snapshot(&self) -> ColorSnapshot {
        self.snapshot
    }

    /// Returns the current RGB color.
    pub fn rgb(&self) -> Rgb {
        self.snapshot.rgb
    }

    /// Returns the current CMYK color.
    pub fn cmyk(&self) -> Cmyk {
        self.snapshot.cmyk
    }

    /// Returns the current HSV color.
    pub fn hsv(&self) -> Hsv {
        self.snapshot.hsv
    }

    /// Returns the view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Returns the view mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Consumes the sync and returns its view.
    pub fn into_view(self) -> V {
        self.view
    }

    fn propagate(&mut self, snapshot: ColorSnapshot) -> ColorSnapshot {
        #[cfg(feature = "defmt")]
        defmt::trace!("propagating {} edit: {}", snapshot.source, snapshot.rgb);

        self.snapshot = snapshot;
        self.view.render(&self.snapshot);
        self.snapshot
    }

    fn log_rejected(&self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("edit rejected, keeping {}", self.snapshot.rgb);
    }
}
