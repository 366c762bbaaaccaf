// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Toolbar strip along the top of the window.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Grid area; outlined with the accent color while files hover the window.
pub fn drop_target(highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;
        container::Style {
            background: Some(Background::Color(base)),
            border: if highlighted {
                Border {
                    color: palette::PRIMARY_500,
                    width: border::WIDTH_MD,
                    radius: radius::MD.into(),
                }
            } else {
                Border::default()
            },
            ..Default::default()
        }
    }
}

/// Card holding a thumbnail and its caption.
pub fn tile(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Dimmed layer behind the viewer, at `fade` of its full strength.
pub fn backdrop(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP * fade,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Caption strip under the viewed image.
pub fn caption(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(Color {
            a: fade,
            ..palette::WHITE
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_target_outline_only_when_highlighted() {
        let idle = drop_target(false)(&Theme::Dark);
        let hovered = drop_target(true)(&Theme::Dark);
        assert_eq!(idle.border.width, 0.0);
        assert_eq!(hovered.border.color, palette::PRIMARY_500);
    }

    #[test]
    fn backdrop_scales_with_fade() {
        let style = backdrop(0.5)(&Theme::Dark);
        let Some(Background::Color(color)) = style.background else {
            panic!("backdrop should have a color background");
        };
        assert!((color.a - opacity::BACKDROP * 0.5).abs() < f32::EPSILON);
    }
}
