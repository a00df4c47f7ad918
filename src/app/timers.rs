// SPDX-License-Identifier: MPL-2.0
//! Runs lightbox timers on the Iced runtime.
//!
//! Timers are never aborted. A cancelled step still wakes up and reports
//! its id, which the lightbox then ignores as stale.

use super::Message;
use crate::lightbox::{ScheduledTimer, TimerId};
use iced::Task;

/// Sleeps for the timer's delay and yields its id.
pub async fn wait(timer: ScheduledTimer) -> TimerId {
    tokio::time::sleep(timer.delay).await;
    timer.id
}

/// Turns an optional lightbox step into a task reporting back to `update`.
pub fn schedule(timer: Option<ScheduledTimer>) -> Task<Message> {
    match timer {
        Some(timer) => {
            tracing::trace!(timer = timer.id.value(), kind = ?timer.kind, delay = ?timer.delay, "scheduling");
            Task::perform(wait(timer), Message::TimerElapsed)
        }
        None => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lightbox::{LightboxController, LightboxState};
    use std::time::Duration;
    use tokio::time::Instant;

    /// Drives every pending step through real (paused) sleeps.
    async fn run_to_idle(lightbox: &mut LightboxController<u32>, timer: Option<ScheduledTimer>) {
        let mut next = timer;
        while let Some(timer) = next {
            let id = wait(timer).await;
            next = lightbox.on_timer(id);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn wait_sleeps_for_the_delay() {
        let mut lightbox = LightboxController::default();
        let timer = lightbox.open(7, vec![7, 8], 0).expect("entrance");

        let start = Instant::now();
        let id = wait(timer).await;

        assert_eq!(id, timer.id);
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn open_next_close_runs_to_completion() {
        let mut lightbox = LightboxController::default();
        let entrance = lightbox.open(1, vec![1, 2, 3], 0);
        run_to_idle(&mut lightbox, entrance).await;
        assert_eq!(lightbox.state(), LightboxState::Open);

        let start = Instant::now();
        let swap = lightbox.next();
        run_to_idle(&mut lightbox, swap).await;
        assert_eq!(lightbox.displayed_source(), Some(&2));
        assert!(start.elapsed() >= Duration::from_millis(300));

        let exit = lightbox.close();
        run_to_idle(&mut lightbox, exit).await;
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn source_is_unchanged_until_swap_delay_elapses() {
        let mut lightbox = LightboxController::default();
        let entrance = lightbox.open(1, vec![1, 2], 0);
        run_to_idle(&mut lightbox, entrance).await;

        let swap = lightbox.next().expect("swap");
        let pending = tokio::spawn(wait(swap));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(lightbox.displayed_source(), Some(&1));

        let id = pending.await.expect("timer task");
        lightbox.on_timer(id);
        assert_eq!(lightbox.displayed_source(), Some(&2));
    }

    #[tokio::test(start_paused = true)]
    async fn stale_swap_wakes_up_but_is_ignored() {
        let mut lightbox = LightboxController::default();
        let entrance = lightbox.open(1, vec![1, 2, 3], 0);
        run_to_idle(&mut lightbox, entrance).await;

        let first = lightbox.next().expect("first swap");
        let second = lightbox.next().expect("second swap");

        let stale = wait(first).await;
        assert!(lightbox.on_timer(stale).is_none());
        assert_eq!(lightbox.displayed_source(), Some(&1));

        run_to_idle(&mut lightbox, Some(second)).await;
        assert_eq!(lightbox.displayed_source(), Some(&3));
    }
}
