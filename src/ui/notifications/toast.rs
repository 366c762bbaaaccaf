// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the current notification.
//!
//! The toast is a small card with a severity-colored border, pinned to the
//! bottom-right corner. Every color is scaled by the fade-out opacity.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, tooltip, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Shadow, Theme};
use std::time::Instant;

pub struct Toast;

impl Toast {
    /// Renders a single toast at the given opacity.
    pub fn view<'a>(
        notification: &'a Notification,
        i18n: &'a I18n,
        alpha: f32,
    ) -> Element<'a, Message> {
        let accent_color = faded(notification.severity().color(), alpha);

        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let message_widget = Text::new(message_text)
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(faded(theme.palette().text, alpha)),
            });

        let dismiss_button = tooltip(
            button(text("✕").size(typography::CAPTION))
                .on_press(Message::Dismiss(notification.id()))
                .padding(spacing::XXS)
                .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha)),
            text(i18n.tr("notification-dismiss")).size(typography::CAPTION),
            tooltip::Position::Top,
        );

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha))
            .into()
    }

    /// Renders the overlay layer holding the current toast, if any.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        i18n: &'a I18n,
        now: Instant,
    ) -> Element<'a, Message> {
        let Some(notification) = manager.current() else {
            return Space::new().into();
        };

        Container::new(Self::view(notification, i18n, manager.opacity(now)))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(faded(bg_color, alpha))),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: faded(shadow::MD.color, alpha * opacity::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(faded(theme.palette().text, alpha)),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = faded(theme.extended_palette().background.base.text, alpha);
    let hover = |a: f32| {
        Some(iced::Background::Color(Color {
            a: a * alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
