// SPDX-License-Identifier: MPL-2.0
//! `iced_masonry` lays out the images and videos of one or more directories
//! in balanced masonry columns and browses the images in an animated
//! lightbox.
//!
//! The layout engine ([`masonry`]) and the lightbox state machine
//! ([`lightbox`]) have no GUI dependency; [`app`] wires them into an Iced
//! application.

#![doc(html_root_url = "https://docs.rs/iced_masonry/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod lightbox;
pub mod logging;
pub mod masonry;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
