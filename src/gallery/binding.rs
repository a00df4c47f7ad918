// SPDX-License-Identifier: MPL-2.0
//! Glue between gallery input and the lightbox.
//!
//! Clicking an image opens the lightbox on that image's container. While
//! the overlay is visible, Escape closes it and the arrow keys step through
//! the container; the overlay buttons do the same.

use super::GalleryContainer;
use crate::lightbox::{LightboxController, ScheduledTimer};
use std::path::PathBuf;

/// Arguments for [`LightboxController::open`] derived from a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub source: PathBuf,
    pub sources: Vec<PathBuf>,
    pub index: usize,
}

impl Activation {
    /// Resolves a click on item `index` of `container`.
    ///
    /// The index is the item's position among the container's images, so
    /// the session is always scoped to that one container. Videos and
    /// unknown indices produce no activation.
    #[must_use]
    pub fn from_click(container: &GalleryContainer, index: usize) -> Option<Self> {
        let position = container.image_position(index)?;
        let source = container.item(index)?.path().to_path_buf();
        Some(Self {
            source,
            sources: container.image_sources(),
            index: position,
        })
    }
}

/// Keys recognized while the lightbox is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Overlay buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxButton {
    Close,
    Previous,
    Next,
}

/// Opens the lightbox for a click on item `index` of `container`.
pub fn activate(
    lightbox: &mut LightboxController<PathBuf>,
    container: &GalleryContainer,
    index: usize,
) -> Option<ScheduledTimer> {
    let Some(activation) = Activation::from_click(container, index) else {
        tracing::debug!(index, "item is not activatable");
        return None;
    };
    lightbox.open(activation.source, activation.sources, activation.index)
}

/// Routes a key press. Keys are ignored while the overlay is hidden.
pub fn handle_key(
    lightbox: &mut LightboxController<PathBuf>,
    key: NavigationKey,
) -> Option<ScheduledTimer> {
    if !lightbox.is_visible() {
        return None;
    }
    match key {
        NavigationKey::Escape => lightbox.close(),
        NavigationKey::ArrowLeft => lightbox.prev(),
        NavigationKey::ArrowRight => lightbox.next(),
    }
}

pub fn handle_button(
    lightbox: &mut LightboxController<PathBuf>,
    button: LightboxButton,
) -> Option<ScheduledTimer> {
    match button {
        LightboxButton::Close => lightbox.close(),
        LightboxButton::Previous => lightbox.prev(),
        LightboxButton::Next => lightbox.next(),
    }
}
