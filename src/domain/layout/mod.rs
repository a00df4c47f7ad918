// SPDX-License-Identifier: MPL-2.0
//! Layout domain types.

pub mod newtypes;

pub use newtypes::{GapSize, MinColumnWidth};
