// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Masonry column width and gap bounds
//! - **Lightbox**: Transition delays for open, swap and close
//! - **Media**: Placeholder sizes for items without readable dimensions

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default minimum column width in layout units.
pub const DEFAULT_MIN_COLUMN_WIDTH: f32 = 300.0;

/// Smallest accepted minimum column width.
pub const MIN_MIN_COLUMN_WIDTH: f32 = 50.0;

/// Largest accepted minimum column width.
pub const MAX_MIN_COLUMN_WIDTH: f32 = 2000.0;

/// Default gap between items, both horizontally and vertically.
pub const DEFAULT_GAP: f32 = 10.0;

/// Smallest accepted gap.
pub const MIN_GAP: f32 = 0.0;

/// Largest accepted gap.
pub const MAX_GAP: f32 = 200.0;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Delay between the start of an image fade-out and the source swap.
pub const DEFAULT_SWAP_DELAY_MS: u64 = 150;

/// Delay between the start of the exit transition and hiding the overlay.
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 200;

/// Duration of the overlay entrance transition.
pub const DEFAULT_ENTRANCE_MS: u64 = 200;

/// Upper bound for any lightbox transition delay.
pub const MAX_TRANSITION_DELAY_MS: u64 = 5000;

// ==========================================================================
// Media Defaults
// ==========================================================================

/// Intrinsic size assumed for video items (16:9).
pub const VIDEO_PLACEHOLDER_SIZE: (u32, u32) = (1600, 900);

/// Intrinsic size assumed for items whose probe failed.
pub const BROKEN_PLACEHOLDER_SIZE: (u32, u32) = (1, 1);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MIN_COLUMN_WIDTH > 0.0);
    assert!(DEFAULT_MIN_COLUMN_WIDTH >= MIN_MIN_COLUMN_WIDTH);
    assert!(DEFAULT_MIN_COLUMN_WIDTH <= MAX_MIN_COLUMN_WIDTH);

    assert!(MIN_GAP >= 0.0);
    assert!(DEFAULT_GAP >= MIN_GAP);
    assert!(DEFAULT_GAP <= MAX_GAP);

    assert!(DEFAULT_SWAP_DELAY_MS <= MAX_TRANSITION_DELAY_MS);
    assert!(DEFAULT_CLOSE_DELAY_MS <= MAX_TRANSITION_DELAY_MS);
    assert!(DEFAULT_ENTRANCE_MS <= MAX_TRANSITION_DELAY_MS);

    assert!(VIDEO_PLACEHOLDER_SIZE.0 > 0 && VIDEO_PLACEHOLDER_SIZE.1 > 0);
    assert!(BROKEN_PLACEHOLDER_SIZE.0 > 0 && BROKEN_PLACEHOLDER_SIZE.1 > 0);
};
