// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay state machine.
//!
//! ```text
//! closed ──open──▶ opening ──entrance──▶ open ──close──▶ closing ──exit──▶ closed
//!                                         │ ▲
//!                              next/prev  ▼ │ swap + fade-in
//!                                       swapping
//! ```
//!
//! Every trigger re-checks its guard against the current state when it is
//! called; triggers that do not apply are dropped. Delayed steps are
//! returned as [`ScheduledTimer`]s and only take effect through
//! [`LightboxController::on_timer`] while they are still the pending step
//! of their slot.
//!
//! Overlapping navigation cancels and restarts: a `next`/`prev` during a
//! running fade replaces the pending swap, so only the latest index is
//! ever displayed. `close` cancels any pending swap, and `open` cancels
//! everything.

use super::session::LightboxSession;
use super::timer::{ScheduledTimer, TimerId, TimerIds, TimerKind};
use crate::domain::lightbox::TransitionTimings;

/// Overlay lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl LightboxState {
    /// Whether the overlay is on screen.
    #[must_use]
    pub fn is_visible(self) -> bool {
        !matches!(self, LightboxState::Closed)
    }

    /// Whether navigation and close requests are accepted.
    #[must_use]
    pub fn accepts_input(self) -> bool {
        matches!(self, LightboxState::Opening | LightboxState::Open)
    }
}

/// Marker the presentation layer maps to a visual effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    Entering,
    #[default]
    Steady,
    Leaving,
}

/// Everything the presentation layer needs to draw the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxView<'a, S> {
    pub visible: bool,
    pub source: Option<&'a S>,
    pub overlay: TransitionPhase,
    pub image: TransitionPhase,
    pub scroll_locked: bool,
    /// Index into the session and session length, while a session exists.
    pub position: Option<(usize, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    id: TimerId,
    kind: TimerKind,
}

/// Single overlay instance owned by the application root.
#[derive(Debug, Clone)]
pub struct LightboxController<S> {
    timings: TransitionTimings,
    state: LightboxState,
    session: Option<LightboxSession<S>>,
    displayed: Option<S>,
    image_phase: TransitionPhase,
    overlay_timer: Option<Pending>,
    image_timer: Option<Pending>,
    ids: TimerIds,
}

impl<S> Default for LightboxController<S> {
    fn default() -> Self {
        Self::new(TransitionTimings::default())
    }
}

impl<S> LightboxController<S> {
    #[must_use]
    pub fn new(timings: TransitionTimings) -> Self {
        Self {
            timings,
            state: LightboxState::Closed,
            session: None,
            displayed: None,
            image_phase: TransitionPhase::Steady,
            overlay_timer: None,
            image_timer: None,
            ids: TimerIds::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> LightboxState {
        self.state
    }

    #[must_use]
    pub fn timings(&self) -> TransitionTimings {
        self.timings
    }

    /// Takes effect for transitions scheduled from now on.
    pub fn set_timings(&mut self, timings: TransitionTimings) {
        self.timings = timings;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Background scrolling is suppressed from `open` until fully closed.
    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.state.is_visible()
    }

    /// True while an image fade-out is waiting for its swap.
    #[must_use]
    pub fn is_swapping(&self) -> bool {
        self.image_phase == TransitionPhase::Leaving
    }

    /// True while any visual transition is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.overlay_timer.is_some() || self.image_timer.is_some()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(LightboxSession::index)
    }

    #[must_use]
    pub fn session(&self) -> Option<&LightboxSession<S>> {
        self.session.as_ref()
    }

    /// The source on screen, which lags the session index during a swap.
    #[must_use]
    pub fn displayed_source(&self) -> Option<&S> {
        self.displayed.as_ref()
    }

    #[must_use]
    pub fn overlay_phase(&self) -> TransitionPhase {
        match self.state {
            LightboxState::Opening => TransitionPhase::Entering,
            LightboxState::Closing => TransitionPhase::Leaving,
            LightboxState::Open | LightboxState::Closed => TransitionPhase::Steady,
        }
    }

    #[must_use]
    pub fn image_phase(&self) -> TransitionPhase {
        self.image_phase
    }

    #[must_use]
    pub fn view(&self) -> LightboxView<'_, S> {
        LightboxView {
            visible: self.is_visible(),
            source: self.displayed.as_ref(),
            overlay: self.overlay_phase(),
            image: self.image_phase,
            scroll_locked: self.is_scroll_locked(),
            position: self
                .session
                .as_ref()
                .map(|session| (session.index(), session.len())),
        }
    }

    /// Shows the next item of the session.
    pub fn next(&mut self) -> Option<ScheduledTimer> {
        self.navigate(Direction::Next)
    }

    /// Shows the previous item of the session.
    pub fn prev(&mut self) -> Option<ScheduledTimer> {
        self.navigate(Direction::Previous)
    }

    /// Starts the exit transition.
    ///
    /// Ignored unless the overlay is opening or open.
    pub fn close(&mut self) -> Option<ScheduledTimer> {
        if !self.state.accepts_input() {
            tracing::debug!(state = ?self.state, "close ignored");
            return None;
        }

        self.image_timer = None;
        self.state = LightboxState::Closing;
        tracing::debug!("lightbox closing");

        let timer = self
            .ids
            .schedule(TimerKind::ExitComplete, self.timings.close.as_duration());
        self.overlay_timer = Some(Pending {
            id: timer.id,
            kind: timer.kind,
        });
        Some(timer)
    }

    fn navigate(&mut self, direction: Direction) -> Option<ScheduledTimer> {
        if !self.state.accepts_input() {
            tracing::debug!(state = ?self.state, ?direction, "navigation ignored");
            return None;
        }
        let session = self.session.as_mut()?;
        if session.is_empty() {
            return None;
        }

        let index = match direction {
            Direction::Next => session.advance(),
            Direction::Previous => session.retreat(),
        };
        if self.image_timer.is_some() {
            tracing::trace!("restarting pending swap");
        }
        tracing::debug!(index, ?direction, "lightbox navigate");

        self.image_phase = TransitionPhase::Leaving;
        let timer = self
            .ids
            .schedule(TimerKind::SwapSource, self.timings.swap.as_duration());
        self.image_timer = Some(Pending {
            id: timer.id,
            kind: timer.kind,
        });
        Some(timer)
    }
}

impl<S: Clone> LightboxController<S> {
    /// Opens the overlay on `source`, browsing `sources` from `index`.
    ///
    /// Any previous session and pending step is discarded. Ignored when
    /// `sources` is empty. The requested item is displayed immediately,
    /// without an image fade.
    pub fn open(&mut self, source: S, sources: Vec<S>, index: usize) -> Option<ScheduledTimer> {
        let Some(session) = LightboxSession::new(sources, index) else {
            tracing::debug!("open ignored: empty container");
            return None;
        };

        tracing::info!(
            index = session.index(),
            len = session.len(),
            previous = ?self.state,
            "lightbox opening"
        );
        self.session = Some(session);
        self.displayed = Some(source);
        self.image_phase = TransitionPhase::Steady;
        self.image_timer = None;
        self.state = LightboxState::Opening;

        let timer = self
            .ids
            .schedule(TimerKind::EntranceComplete, self.timings.entrance.as_duration());
        self.overlay_timer = Some(Pending {
            id: timer.id,
            kind: timer.kind,
        });
        Some(timer)
    }

    /// Runs the step of an elapsed timer.
    ///
    /// Stale ids (cancelled or already handled) are ignored. May return a
    /// follow-up step to schedule.
    pub fn on_timer(&mut self, id: TimerId) -> Option<ScheduledTimer> {
        if let Some(pending) = self.overlay_timer.filter(|pending| pending.id == id) {
            self.overlay_timer = None;
            self.finish_overlay_step(pending.kind);
            return None;
        }
        if let Some(pending) = self.image_timer.filter(|pending| pending.id == id) {
            self.image_timer = None;
            return self.finish_image_step(pending.kind);
        }
        tracing::trace!(timer = id.value(), "stale timer ignored");
        None
    }

    fn finish_overlay_step(&mut self, kind: TimerKind) {
        match (kind, self.state) {
            (TimerKind::EntranceComplete, LightboxState::Opening) => {
                self.state = LightboxState::Open;
                tracing::debug!("lightbox open");
            }
            (TimerKind::ExitComplete, LightboxState::Closing) => {
                self.state = LightboxState::Closed;
                self.session = None;
                self.displayed = None;
                self.image_phase = TransitionPhase::Steady;
                self.image_timer = None;
                tracing::info!("lightbox closed");
            }
            (kind, state) => {
                tracing::warn!(?kind, ?state, "overlay timer does not match state");
            }
        }
    }

    fn finish_image_step(&mut self, kind: TimerKind) -> Option<ScheduledTimer> {
        match kind {
            TimerKind::SwapSource => {
                let session = self.session.as_ref()?;
                self.displayed = Some(session.current().clone());
                self.image_phase = TransitionPhase::Entering;
                let timer = self
                    .ids
                    .schedule(TimerKind::FadeInComplete, self.timings.swap.as_duration());
                self.image_timer = Some(Pending {
                    id: timer.id,
                    kind: timer.kind,
                });
                Some(timer)
            }
            TimerKind::FadeInComplete => {
                self.image_phase = TransitionPhase::Steady;
                None
            }
            other => {
                tracing::warn!(kind = ?other, "image timer with overlay kind");
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}
