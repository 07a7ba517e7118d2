//! Shared test infrastructure for color-model integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use color_model::{ColorSnapshot, ColorView, Rgb};

// ============================================================================
// Mock View
// ============================================================================

/// Mock view that records every rendered snapshot
pub struct MockView {
    current: Option<ColorSnapshot>,
    history: heapless::Vec<ColorSnapshot, 32>,
}

impl MockView {
    pub fn new() -> Self {
        Self {
            current: None,
            history: heapless::Vec::new(),
        }
    }

    pub fn last_snapshot(&self) -> Option<ColorSnapshot> {
        self.current
    }

    pub fn render_count(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[ColorSnapshot] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl ColorView for MockView {
    fn render(&mut self, snapshot: &ColorSnapshot) {
        self.current = Some(*snapshot);
        let _ = self.history.push(*snapshot);
    }
}

// ============================================================================
// Comparison Helpers
// ============================================================================

pub const EPSILON: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Distance between two hues in degrees, going the short way round.
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

/// True if every channel differs by at most one.
pub fn within_one(a: Rgb, b: Rgb) -> bool {
    a.red.abs_diff(b.red) <= 1 && a.green.abs_diff(b.green) <= 1 && a.blue.abs_diff(b.blue) <= 1
}

/// Every 8-bit RGB triple.
pub fn all_rgb() -> impl Iterator<Item = Rgb> {
    (0..=255u8).flat_map(|r| {
        (0..=255u8).flat_map(move |g| (0..=255u8).map(move |b| Rgb::new(r, g, b)))
    })
}
