// SPDX-License-Identifier: MPL-2.0
//! Delayed lightbox steps.
//!
//! The controller never sleeps. It hands out a [`ScheduledTimer`] and the
//! caller reports back with [`TimerId`] once the delay has elapsed. A newer
//! timer for the same slot makes the older id stale, which is how pending
//! steps get cancelled.

use std::time::Duration;

/// Identity of one scheduled step. Ids are never reused by a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// What happens when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Overlay entrance finished: opening → open.
    EntranceComplete,
    /// Fade-out finished: show the session's current item and fade it in.
    SwapSource,
    /// Fade-in of the swapped image finished.
    FadeInComplete,
    /// Overlay exit finished: closing → closed.
    ExitComplete,
}

/// A step the caller must run after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub id: TimerId,
    pub delay: Duration,
    pub kind: TimerKind,
}

/// Hands out monotonically increasing timer ids.
#[derive(Debug, Clone, Default)]
pub(crate) struct TimerIds {
    next: u64,
}

impl TimerIds {
    pub(crate) fn schedule(&mut self, kind: TimerKind, delay: Duration) -> ScheduledTimer {
        self.next += 1;
        ScheduledTimer {
            id: TimerId(self.next),
            delay,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ids = TimerIds::default();
        let first = ids.schedule(TimerKind::SwapSource, Duration::from_millis(150));
        let second = ids.schedule(TimerKind::SwapSource, Duration::from_millis(150));

        assert_ne!(first.id, second.id);
        assert!(second.id > first.id);
    }

    #[test]
    fn schedule_keeps_kind_and_delay() {
        let mut ids = TimerIds::default();
        let timer = ids.schedule(TimerKind::ExitComplete, Duration::from_millis(200));

        assert_eq!(timer.kind, TimerKind::ExitComplete);
        assert_eq!(timer.delay, Duration::from_millis(200));
    }
}
