// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence. Without it, the crate logs at `info`, or at
//! `debug` when started with `--verbose`.

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "iced_masonry=debug"
    } else {
        "iced_masonry=info"
    }
}

/// Installs the global fmt subscriber.
///
/// Returns `false` if a subscriber was already installed, in which case the
/// existing one is kept.
pub fn init(verbose: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
