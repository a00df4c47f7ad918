// SPDX-License-Identifier: MPL-2.0
//! Intrinsic size probing for gallery items.
//!
//! Images are probed by reading their header only. Videos are not decoded;
//! they get a fixed 16:9 placeholder so they can still take part in layout.

use crate::config::defaults::{BROKEN_PLACEHOLDER_SIZE, VIDEO_PLACEHOLDER_SIZE};
use crate::error::{Error, Result};
use crate::gallery::MediaKind;
use std::path::{Path, PathBuf};

/// Natural pixel size of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntrinsicSize {
    pub width: u32,
    pub height: u32,
}

impl IntrinsicSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Placeholder used for videos.
    #[must_use]
    pub const fn video_placeholder() -> Self {
        Self::new(VIDEO_PLACEHOLDER_SIZE.0, VIDEO_PLACEHOLDER_SIZE.1)
    }

    /// Placeholder used when a probe fails.
    #[must_use]
    pub const fn broken_placeholder() -> Self {
        Self::new(BROKEN_PLACEHOLDER_SIZE.0, BROKEN_PLACEHOLDER_SIZE.1)
    }

    /// Height once the item is scaled to `target_width`, keeping its aspect
    /// ratio. Degenerate sizes render as a square.
    #[must_use]
    pub fn height_at(self, target_width: f32) -> f32 {
        if self.width == 0 || self.height == 0 {
            return target_width.max(0.0);
        }
        (target_width * self.height as f32 / self.width as f32).max(0.0)
    }
}

/// Reads the natural size of the media at `path`.
///
/// # Errors
/// Returns an error if the image header cannot be read or decoded.
pub fn probe(path: &Path, kind: MediaKind) -> Result<IntrinsicSize> {
    match kind {
        MediaKind::Video => Ok(IntrinsicSize::video_placeholder()),
        MediaKind::Image => {
            let (width, height) = image_rs::image_dimensions(path)?;
            if width == 0 || height == 0 {
                return Err(Error::Image(format!(
                    "{} has zero-sized dimensions",
                    path.display()
                )));
            }
            Ok(IntrinsicSize::new(width, height))
        }
    }
}

/// Probes on the blocking pool, for use inside `Task::perform`.
///
/// Always yields a size: failures are logged and replaced by
/// [`IntrinsicSize::broken_placeholder`], so a broken file still becomes
/// ready.
pub async fn probe_or_placeholder(path: PathBuf, kind: MediaKind) -> IntrinsicSize {
    let shown = path.display().to_string();
    let result = tokio::task::spawn_blocking(move || probe(&path, kind))
        .await
        .map_err(|e| Error::Io(e.to_string()))
        .and_then(|result| result);

    match result {
        Ok(size) => size,
        Err(err) => {
            tracing::warn!(path = %shown, error = %err, "probe failed, using placeholder");
            IntrinsicSize::broken_placeholder()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use tempfile::tempdir;

    #[test]
    fn height_scales_with_aspect_ratio() {
        let size = IntrinsicSize::new(400, 300);
        assert_abs_diff_eq!(size.height_at(200.0), 150.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn degenerate_size_renders_square() {
        assert_abs_diff_eq!(
            IntrinsicSize::new(0, 10).height_at(120.0),
            120.0,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn negative_target_width_gives_zero_height() {
        assert_abs_diff_eq!(
            IntrinsicSize::new(4, 3).height_at(-5.0),
            0.0,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn video_uses_placeholder_without_reading_file() {
        let size = probe(Path::new("/does/not/exist.mp4"), MediaKind::Video).expect("placeholder");
        assert_eq!(size, IntrinsicSize::new(1600, 900));
    }

    #[test]
    fn probe_reads_png_header() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("wide.png");
        image_rs::RgbaImage::new(8, 4)
            .save(&path)
            .expect("write test png");

        let size = probe(&path, MediaKind::Image).expect("probe png");
        assert_eq!(size, IntrinsicSize::new(8, 4));
    }

    #[test]
    fn probe_rejects_garbage() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.jpg");
        std::fs::write(&path, b"not an image").expect("write file");

        assert!(probe(&path, MediaKind::Image).is_err());
    }

    #[tokio::test]
    async fn failed_probe_falls_back_to_placeholder() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.png");
        std::fs::write(&path, b"garbage").expect("write file");

        let size = probe_or_placeholder(path, MediaKind::Image).await;
        assert_eq!(size, IntrinsicSize::broken_placeholder());
    }
}
