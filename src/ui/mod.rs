// SPDX-License-Identifier: MPL-2.0
//! Presentation helpers shared by the gallery and lightbox views.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`state`] - Fade animation state for lightbox transitions

pub mod design_tokens;
pub mod state;
pub mod styles;
