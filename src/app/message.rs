// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery::{LightboxButton, NavigationKey};
use crate::lightbox::TimerId;
use crate::media::IntrinsicSize;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The size probe of one item finished (successfully or with a placeholder).
    ItemProbed {
        container: usize,
        index: usize,
        size: IntrinsicSize,
    },
    /// An item of the gallery was clicked.
    ItemClicked { container: usize, index: usize },
    /// A recognized key was pressed.
    Key(NavigationKey),
    /// One of the lightbox overlay buttons was pressed.
    Button(LightboxButton),
    /// A scheduled lightbox step is due.
    TimerElapsed(TimerId),
    /// The window was opened or resized.
    WindowResized(iced::Size),
    /// Animation frame while a lightbox transition is running.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Directories to show, one container each, in order.
    pub directories: Vec<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_MASONRY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
