// SPDX-License-Identifier: MPL-2.0
//! UI state kept outside the core controllers.

pub mod fade;

pub use fade::{target_opacity, Fade};
