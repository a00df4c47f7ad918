// SPDX-License-Identifier: MPL-2.0
//! Lightbox timing newtypes.

use crate::config::defaults::{
    DEFAULT_CLOSE_DELAY_MS, DEFAULT_ENTRANCE_MS, DEFAULT_SWAP_DELAY_MS, MAX_TRANSITION_DELAY_MS,
};
use std::time::Duration;

/// Delay of one lightbox transition step, bounded to 0–5000 ms.
///
/// # Example
///
/// ```
/// use iced_masonry::domain::lightbox::TransitionDelay;
/// use std::time::Duration;
///
/// let delay = TransitionDelay::from_millis(150);
/// assert_eq!(delay.as_duration(), Duration::from_millis(150));
///
/// // Values outside range are clamped
/// assert_eq!(TransitionDelay::from_millis(60_000).millis(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDelay(u64);

impl TransitionDelay {
    /// Creates a delay, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.min(MAX_TRANSITION_DELAY_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

/// The delays of every timed lightbox step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTimings {
    /// Overlay entrance (opening → open).
    pub entrance: TransitionDelay,
    /// Image fade-out before the source swap, and the fade-in after it.
    pub swap: TransitionDelay,
    /// Overlay exit (closing → closed).
    pub close: TransitionDelay,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            entrance: TransitionDelay::from_millis(DEFAULT_ENTRANCE_MS),
            swap: TransitionDelay::from_millis(DEFAULT_SWAP_DELAY_MS),
            close: TransitionDelay::from_millis(DEFAULT_CLOSE_DELAY_MS),
        }
    }
}
