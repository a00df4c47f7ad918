// SPDX-License-Identifier: MPL-2.0
//! Media items shown in a gallery container.

use std::path::{Path, PathBuf};

/// Image file extensions, lowercase.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// Video file extensions, lowercase.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];

/// Kind of media, decided from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Detects the kind from a path's extension (case-insensitive).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_lowercase)?;

        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            Some(MediaKind::Image)
        } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    /// Only images can be opened in the lightbox.
    #[must_use]
    pub fn is_activatable(self) -> bool {
        matches!(self, MediaKind::Image)
    }
}

/// Checks if a file has a supported media extension.
pub fn is_supported<P: AsRef<Path>>(path: P) -> bool {
    MediaKind::from_path(path).is_some()
}

/// One file of a container: its address and kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaItem {
    path: PathBuf,
    kind: MediaKind,
}

impl MediaItem {
    /// Builds an item when the path has a supported extension.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let kind = MediaKind::from_path(&path)?;
        Some(Self { path, kind })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// File name for captions, falling back to the full path.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_image_extensions_case_insensitively() {
        assert_eq!(MediaKind::from_path("photo.jpg"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_path("photo.PNG"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_path("scan.Tif"), Some(MediaKind::Image));
    }

    #[test]
    fn detects_video_extensions() {
        assert_eq!(MediaKind::from_path("clip.mp4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_path("movie.MKV"), Some(MediaKind::Video));
    }

    #[test]
    fn rejects_unknown_and_missing_extensions() {
        assert!(!is_supported("notes.txt"));
        assert!(!is_supported("README"));
        assert!(!is_supported("vector.svg"));
    }

    #[test]
    fn only_images_are_activatable() {
        assert!(MediaKind::Image.is_activatable());
        assert!(!MediaKind::Video.is_activatable());
    }

    #[test]
    fn display_name_uses_file_name() {
        let item = MediaItem::from_path(PathBuf::from("/photos/cat.jpg")).expect("supported");
        assert_eq!(item.display_name(), "cat.jpg");
        assert_eq!(item.kind(), MediaKind::Image);
    }
}
