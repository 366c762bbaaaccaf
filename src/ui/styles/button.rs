// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main toolbar action ("Add images").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_500,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Destructive actions (clear, delete).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OPAQUE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => 0.85,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::ERROR_500
        })),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Buttons drawn over images (modal arrows, close, tile delete).
///
/// `fade` scales the whole button so it follows the modal fade.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
    fade: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_MEDIUM,
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
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless button wrapping a gallery tile.
pub fn tile(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
