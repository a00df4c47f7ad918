// SPDX-License-Identifier: MPL-2.0
//! Per-container layout orchestration.
//!
//! The controller owns one slot per registered container and reacts to the
//! two layout triggers:
//! - **container ready**: the last pending item of a container became ready
//! - **resize**: the viewport changed; every ready container is re-measured
//!
//! Each trigger runs a complete [`ColumnBalancer`] pass from scratch using
//! the sizes the [`MeasurementProvider`] reports at that moment.

use super::balancer::{ColumnBalancer, LayoutPass};
use super::readiness::{ReadinessTracker, ReadyOutcome};

/// Identifies a registered container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(usize);

impl ContainerId {
    /// Position of the container in registration order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Source of the measured sizes a layout pass consumes.
///
/// Called synchronously at the start of every pass, so implementations
/// should report current values rather than cached ones.
pub trait MeasurementProvider {
    /// Current width of the container, in layout units.
    fn container_width(&self, container: ContainerId) -> f32;

    /// Rendered height of an item once it is given `item_width`.
    fn item_height(&self, container: ContainerId, index: usize, item_width: f32) -> f32;
}

/// The applied layout of a container.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerLayout {
    /// Width the pass was computed for.
    pub container_width: f32,
    pub pass: LayoutPass,
    /// Number of passes applied to this container so far.
    pub generation: u64,
}

impl ContainerLayout {
    #[must_use]
    pub fn height(&self) -> f32 {
        self.pass.height
    }
}

#[derive(Debug, Clone)]
struct ContainerSlot {
    item_count: usize,
    readiness: ReadinessTracker,
    layout: Option<ContainerLayout>,
}

impl ContainerSlot {
    fn new(item_count: usize) -> Self {
        Self {
            item_count,
            readiness: ReadinessTracker::new(item_count),
            layout: None,
        }
    }
}

/// Binds containers to a shared [`ColumnBalancer`].
#[derive(Debug, Clone, Default)]
pub struct MasonryController {
    balancer: ColumnBalancer,
    containers: Vec<ContainerSlot>,
}

impl MasonryController {
    #[must_use]
    pub fn new(balancer: ColumnBalancer) -> Self {
        Self {
            balancer,
            containers: Vec::new(),
        }
    }

    #[must_use]
    pub fn balancer(&self) -> &ColumnBalancer {
        &self.balancer
    }

    /// Registers a container holding `item_count` items, none of them ready.
    ///
    /// A container without items is ready immediately and gets its
    /// (zero-height) layout right away.
    pub fn register(
        &mut self,
        item_count: usize,
        provider: &impl MeasurementProvider,
    ) -> ContainerId {
        let id = ContainerId(self.containers.len());
        let mut slot = ContainerSlot::new(item_count);
        let fire = slot.readiness.fire_if_empty();
        self.containers.push(slot);
        tracing::debug!(container = id.index(), item_count, "registered container");

        if fire {
            self.run_pass(id, provider);
        }
        id
    }

    /// Replaces the items of a container. Readiness starts over.
    pub fn replace_items(
        &mut self,
        id: ContainerId,
        item_count: usize,
        provider: &impl MeasurementProvider,
    ) {
        let Some(slot) = self.containers.get_mut(id.index()) else {
            tracing::warn!(container = id.index(), "replace_items on unknown container");
            return;
        };
        *slot = ContainerSlot::new(item_count);
        if slot.readiness.fire_if_empty() {
            self.run_pass(id, provider);
        }
    }

    /// Records that one item became ready.
    ///
    /// Returns `true` when this completed the container and a layout pass ran.
    pub fn item_ready(
        &mut self,
        id: ContainerId,
        index: usize,
        provider: &impl MeasurementProvider,
    ) -> bool {
        let Some(slot) = self.containers.get_mut(id.index()) else {
            tracing::warn!(container = id.index(), index, "readiness for unknown container");
            return false;
        };

        match slot.readiness.mark_ready(index) {
            ReadyOutcome::ContainerReady => {
                tracing::debug!(container = id.index(), "all items ready");
                self.run_pass(id, provider);
                true
            }
            ReadyOutcome::Pending { remaining } => {
                tracing::trace!(container = id.index(), index, remaining, "item ready");
                false
            }
            ReadyOutcome::Ignored => false,
            ReadyOutcome::OutOfRange => {
                tracing::warn!(
                    container = id.index(),
                    index,
                    item_count = slot.item_count,
                    "readiness index out of range"
                );
                false
            }
        }
    }

    /// Viewport resize: re-lays out every ready container.
    ///
    /// Returns the number of passes that ran.
    pub fn resize(&mut self, provider: &impl MeasurementProvider) -> usize {
        let ready: Vec<ContainerId> = self
            .containers
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.readiness.is_complete())
            .map(|(index, _)| ContainerId(index))
            .collect();

        for id in &ready {
            self.run_pass(*id, provider);
        }
        ready.len()
    }

    #[must_use]
    pub fn layout(&self, id: ContainerId) -> Option<&ContainerLayout> {
        self.containers.get(id.index())?.layout.as_ref()
    }

    #[must_use]
    pub fn is_ready(&self, id: ContainerId) -> bool {
        self.containers
            .get(id.index())
            .is_some_and(|slot| slot.readiness.is_complete())
    }

    fn run_pass(&mut self, id: ContainerId, provider: &impl MeasurementProvider) {
        let balancer = self.balancer;
        let Some(slot) = self.containers.get_mut(id.index()) else {
            return;
        };

        let container_width = provider.container_width(id);
        let item_width = balancer.item_width(container_width);
        let heights = (0..slot.item_count).map(|index| provider.item_height(id, index, item_width));
        let pass = balancer.balance(container_width, heights);

        let generation = slot.layout.as_ref().map_or(0, |layout| layout.generation) + 1;
        tracing::debug!(
            container = id.index(),
            width = container_width,
            columns = pass.column_count,
            height = pass.height,
            generation,
            "layout pass"
        );
        slot.layout = Some(ContainerLayout {
            container_width,
            pass,
            generation,
        });
    }
}
