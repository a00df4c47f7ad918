// SPDX-License-Identifier: MPL-2.0
//! Gallery model: containers of media items and their probed sizes.
//!
//! A [`Gallery`] owns one [`GalleryContainer`] per scanned directory. Sizes
//! arrive asynchronously; the masonry controller is told about each one and
//! reads them back through the application's measurement provider.

pub mod binding;
pub mod item;
pub mod scanner;

pub use binding::{Activation, LightboxButton, NavigationKey};
pub use item::{MediaItem, MediaKind};
pub use scanner::scan_directory;

use crate::config::SortOrder;
use crate::media::IntrinsicSize;
use std::path::{Path, PathBuf};

/// Ordered items of one directory.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryContainer {
    directory: PathBuf,
    items: Vec<MediaItem>,
    sizes: Vec<Option<IntrinsicSize>>,
    error: Option<String>,
}

impl GalleryContainer {
    #[must_use]
    pub fn new(directory: PathBuf, items: Vec<MediaItem>) -> Self {
        let sizes = vec![None; items.len()];
        Self {
            directory,
            items,
            sizes,
            error: None,
        }
    }

    /// Scans `directory`. A failed scan yields an empty container that
    /// remembers the error for display.
    #[must_use]
    pub fn scan(directory: PathBuf, sort_order: SortOrder) -> Self {
        match scan_directory(&directory, sort_order) {
            Ok(items) => Self::new(directory, items),
            Err(err) => {
                tracing::warn!(directory = %directory.display(), error = %err, "scan failed");
                let mut container = Self::new(directory, Vec::new());
                container.error = Some(err.to_string());
                container
            }
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Caption for the container: its directory name.
    #[must_use]
    pub fn title(&self) -> String {
        self.directory
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.directory.display().to_string())
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn size(&self, index: usize) -> Option<IntrinsicSize> {
        self.sizes.get(index).copied().flatten()
    }

    /// Records the probed size of an item. Returns `false` when the index
    /// is out of range.
    pub fn set_size(&mut self, index: usize, size: IntrinsicSize) -> bool {
        match self.sizes.get_mut(index) {
            Some(slot) => {
                *slot = Some(size);
                true
            }
            None => false,
        }
    }

    /// Paths of the images, in container order. Videos are skipped.
    #[must_use]
    pub fn image_sources(&self) -> Vec<PathBuf> {
        self.items
            .iter()
            .filter(|item| item.kind().is_activatable())
            .map(|item| item.path().to_path_buf())
            .collect()
    }

    /// Position of item `index` among the container's images.
    #[must_use]
    pub fn image_position(&self, index: usize) -> Option<usize> {
        let item = self.items.get(index)?;
        if !item.kind().is_activatable() {
            return None;
        }
        Some(
            self.items[..index]
                .iter()
                .filter(|item| item.kind().is_activatable())
                .count(),
        )
    }
}

/// All containers, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    containers: Vec<GalleryContainer>,
}

impl Gallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans each directory into a container.
    #[must_use]
    pub fn scan_all(directories: &[PathBuf], sort_order: SortOrder) -> Self {
        Self {
            containers: directories
                .iter()
                .map(|dir| GalleryContainer::scan(dir.clone(), sort_order))
                .collect(),
        }
    }

    /// Adds a container and returns its index.
    pub fn push(&mut self, container: GalleryContainer) -> usize {
        self.containers.push(container);
        self.containers.len() - 1
    }

    #[must_use]
    pub fn containers(&self) -> &[GalleryContainer] {
        &self.containers
    }

    #[must_use]
    pub fn container(&self, index: usize) -> Option<&GalleryContainer> {
        self.containers.get(index)
    }

    pub fn container_mut(&mut self, index: usize) -> Option<&mut GalleryContainer> {
        self.containers.get_mut(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}
