// SPDX-License-Identifier: MPL-2.0
//! Time-based opacity for lightbox transitions.
//!
//! A [`Fade`] moves linearly toward whatever target the current transition
//! phase asks for, at a rate of one full swing per transition duration. It
//! only advances on animation ticks, so it stops costing anything once it
//! has settled.

use crate::lightbox::TransitionPhase;
use crate::ui::design_tokens::opacity;
use std::time::{Duration, Instant};

/// Opacity a transition phase settles at.
#[must_use]
pub fn target_opacity(phase: TransitionPhase) -> f32 {
    match phase {
        TransitionPhase::Entering | TransitionPhase::Steady => opacity::OPAQUE,
        TransitionPhase::Leaving => opacity::TRANSPARENT,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    value: f32,
    last_tick: Option<Instant>,
}

impl Fade {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
            last_tick: None,
        }
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Jumps to `value` without animating.
    pub fn set(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
        self.last_tick = None;
    }

    #[must_use]
    pub fn is_settled(&self, target: f32) -> bool {
        (self.value - target).abs() <= f32::EPSILON
    }

    /// Advances toward `target`. The first tick after settling only records
    /// the time.
    pub fn advance(&mut self, target: f32, now: Instant, duration: Duration) {
        let target = target.clamp(0.0, 1.0);
        if self.is_settled(target) {
            self.value = target;
            self.last_tick = None;
            return;
        }
        if duration.is_zero() {
            self.set(target);
            return;
        }

        let Some(last) = self.last_tick.replace(now) else {
            return;
        };
        let step = now.saturating_duration_since(last).as_secs_f32() / duration.as_secs_f32();
        self.value = if target > self.value {
            (self.value + step).min(target)
        } else {
            (self.value - step).max(target)
        };
        if self.is_settled(target) {
            self.last_tick = None;
        }
    }
}

impl Default for Fade {
    fn default() -> Self {
        Self::new(1.0)
    }
}
