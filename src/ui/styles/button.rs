// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{opacity, palette::BLACK, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round translucent button for the lightbox controls.
///
/// `fade` scales every alpha so the buttons follow the overlay transition.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    fade: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha * fade,
                ..BLACK
            })),
            text_color: Color {
                a: text_color.a * fade,
                ..text_color
            },
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Invisible button wrapping a gallery tile.
pub fn tile(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        border: Border {
            radius: radius::NONE.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
