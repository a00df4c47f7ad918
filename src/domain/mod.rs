// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with no GUI dependencies.
//!
//! # Modules
//!
//! - [`layout`]: Masonry layout bounds ([`MinColumnWidth`](layout::MinColumnWidth),
//!   [`GapSize`](layout::GapSize))
//! - [`lightbox`]: Lightbox transition timing ([`TransitionDelay`](lightbox::TransitionDelay),
//!   [`TransitionTimings`](lightbox::TransitionTimings))

pub mod layout;
pub mod lightbox;
