// SPDX-License-Identifier: MPL-2.0
//! Masonry layout: column balancing and per-container orchestration.
//!
//! - [`ColumnBalancer`]: pure greedy shortest-column placement
//! - [`MasonryController`]: readiness and resize triggers per container
//! - [`MeasurementProvider`]: injected source of widths and heights

pub mod balancer;
pub mod controller;
pub mod readiness;

pub use balancer::{ColumnBalancer, LayoutPass, Placement};
pub use controller::{ContainerId, ContainerLayout, MasonryController, MeasurementProvider};
pub use readiness::{ReadinessTracker, ReadyOutcome};
