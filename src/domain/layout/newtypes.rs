// SPDX-License-Identifier: MPL-2.0
//! Layout newtypes.
//!
//! This module provides type-safe wrappers for masonry layout values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_GAP, DEFAULT_MIN_COLUMN_WIDTH, MAX_GAP, MAX_MIN_COLUMN_WIDTH, MIN_GAP,
    MIN_MIN_COLUMN_WIDTH,
};

// =============================================================================
// MinColumnWidth
// =============================================================================

/// Minimum width of a masonry column, guaranteed to be strictly positive.
///
/// The column count of a container is derived from it as
/// `max(1, floor(width / min_column_width))`, so a zero value would be a
/// division by zero.
///
/// # Example
///
/// ```
/// use iced_masonry::domain::layout::MinColumnWidth;
///
/// let width = MinColumnWidth::new(250.0);
/// assert_eq!(width.value(), 250.0);
///
/// // Values outside range are clamped
/// let too_small = MinColumnWidth::new(0.0);
/// assert_eq!(too_small.value(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinColumnWidth(f32);

impl MinColumnWidth {
    /// Creates a new minimum column width, clamping to the valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(MIN_MIN_COLUMN_WIDTH, MAX_MIN_COLUMN_WIDTH))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for MinColumnWidth {
    fn default() -> Self {
        Self(DEFAULT_MIN_COLUMN_WIDTH)
    }
}

// =============================================================================
// GapSize
// =============================================================================

/// Gap between masonry items, never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapSize(f32);

impl GapSize {
    /// Creates a new gap, clamping to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(MIN_GAP, MAX_GAP))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for GapSize {
    fn default() -> Self {
        Self(DEFAULT_GAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_column_width_clamps_to_valid_range() {
        assert_eq!(MinColumnWidth::new(0.0).value(), MIN_MIN_COLUMN_WIDTH);
        assert_eq!(MinColumnWidth::new(-40.0).value(), MIN_MIN_COLUMN_WIDTH);
        assert_eq!(MinColumnWidth::new(1.0e6).value(), MAX_MIN_COLUMN_WIDTH);
    }

    #[test]
    fn min_column_width_accepts_valid_values() {
        assert_eq!(MinColumnWidth::new(300.0).value(), 300.0);
        assert_eq!(MinColumnWidth::new(125.5).value(), 125.5);
    }

    #[test]
    fn min_column_width_rejects_nan() {
        assert_eq!(MinColumnWidth::new(f32::NAN), MinColumnWidth::default());
    }

    #[test]
    fn gap_is_never_negative() {
        assert_eq!(GapSize::new(-1.0).value(), 0.0);
        assert_eq!(GapSize::new(0.0).value(), 0.0);
    }

    #[test]
    fn defaults_match_design_values() {
        assert_eq!(MinColumnWidth::default().value(), 300.0);
        assert_eq!(GapSize::default().value(), 10.0);
    }
}
