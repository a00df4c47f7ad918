// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard input is reduced to the three lightbox keys before it reaches
//! `App::update`; everything else except window sizing is dropped here.

use super::Message;
use crate::gallery::NavigationKey;
use iced::keyboard::{self, key::Named};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Frame interval of the fade animation.
pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Maps a key to the lightbox key it stands for, if any.
#[must_use]
pub fn navigation_key(key: &keyboard::Key) -> Option<NavigationKey> {
    match key {
        keyboard::Key::Named(Named::Escape) => Some(NavigationKey::Escape),
        keyboard::Key::Named(Named::ArrowLeft) => Some(NavigationKey::ArrowLeft),
        keyboard::Key::Named(Named::ArrowRight) => Some(NavigationKey::ArrowRight),
        _ => None,
    }
}

/// Keys and window size changes.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match &event {
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized(*size))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(*size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => navigation_key(key).map(Message::Key),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Animation ticks, only while a lightbox transition is running.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(ANIMATION_FRAME).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
