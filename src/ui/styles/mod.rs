// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the gallery and the lightbox.

pub mod button;
pub mod container;
