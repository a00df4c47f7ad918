// SPDX-License-Identifier: MPL-2.0
//! Directory scanner turning a folder into the ordered items of one container.
//!
//! Only the directory itself is read (no recursion). Hidden files and files
//! without a supported extension are skipped, and the result is sorted by
//! the configured [`SortOrder`].

use super::item::MediaItem;
use crate::config::SortOrder;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Scans `directory` for supported media files.
///
/// # Errors
/// Returns [`Error::Scan`] when `directory` is not a directory, and
/// [`Error::Io`] when it cannot be read.
pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Vec<MediaItem>> {
    if !directory.is_dir() {
        return Err(Error::Scan(format!(
            "{} is not a directory",
            directory.display()
        )));
    }

    let mut media_files = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && !is_hidden(&path) && super::item::is_supported(&path) {
            media_files.push(path);
        }
    }

    sort_media_files(&mut media_files, sort_order);
    tracing::debug!(
        directory = %directory.display(),
        count = media_files.len(),
        ?sort_order,
        "scanned directory"
    );

    Ok(media_files
        .into_iter()
        .filter_map(MediaItem::from_path)
        .collect())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Sorts media file paths according to the sort order.
///
/// Files whose timestamps cannot be read sort first; ties keep name order.
fn sort_media_files(media_files: &mut [PathBuf], sort_order: SortOrder) {
    media_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    match sort_order {
        SortOrder::Alphabetical => {}
        SortOrder::ModifiedDate => {
            media_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::CreatedDate => {
            media_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
    }
}
