// SPDX-License-Identifier: MPL-2.0
//! Aggregation of per-item readiness into a single container-ready trigger.

/// What a readiness notification changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyOutcome {
    /// The item was recorded; other items are still pending.
    Pending { remaining: usize },
    /// This notification completed the container. Reported exactly once.
    ContainerReady,
    /// The item was already ready, or the container already fired.
    Ignored,
    /// The index does not belong to the container.
    OutOfRange,
}

/// Tracks which items of one container have become ready.
#[derive(Debug, Clone)]
pub struct ReadinessTracker {
    ready: Vec<bool>,
    remaining: usize,
    fired: bool,
}

impl ReadinessTracker {
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            ready: vec![false; item_count],
            remaining: item_count,
            fired: false,
        }
    }

    /// Whether every item of the container is ready.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    #[must_use]
    pub fn is_item_ready(&self, index: usize) -> bool {
        self.ready.get(index).copied().unwrap_or(false)
    }

    /// Fires the container-ready trigger for a container with no items.
    ///
    /// Returns `true` the first time it is called on an empty container.
    pub fn fire_if_empty(&mut self) -> bool {
        if self.ready.is_empty() && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }

    /// Records that the item at `index` is ready.
    pub fn mark_ready(&mut self, index: usize) -> ReadyOutcome {
        let Some(slot) = self.ready.get_mut(index) else {
            return ReadyOutcome::OutOfRange;
        };
        if *slot {
            return ReadyOutcome::Ignored;
        }
        *slot = true;
        self.remaining -= 1;

        if self.remaining > 0 {
            return ReadyOutcome::Pending {
                remaining: self.remaining,
            };
        }
        if self.fired {
            ReadyOutcome::Ignored
        } else {
            self.fired = true;
            ReadyOutcome::ContainerReady
        }
    }
}
