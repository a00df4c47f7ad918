// SPDX-License-Identifier: MPL-2.0
//! Full-screen overlay for browsing the images of one container.

pub mod controller;
pub mod session;
pub mod timer;

pub use controller::{LightboxController, LightboxState, LightboxView, TransitionPhase};
pub use session::LightboxSession;
pub use timer::{ScheduledTimer, TimerId, TimerKind};
