// SPDX-License-Identifier: MPL-2.0
//! Lightbox domain types.

pub mod newtypes;

pub use newtypes::{TransitionDelay, TransitionTimings};
