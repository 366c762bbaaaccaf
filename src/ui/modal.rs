// SPDX-License-Identifier: MPL-2.0
//! Full-window image viewer drawn over the gallery.
//!
//! The viewer is a dimmed backdrop with a centered card. Clicks on the card
//! stay in the card; a click anywhere else on the backdrop closes the viewer.

use crate::gallery::ImageRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, center, image, mouse_area, opaque, responsive, text, Column, Container, Row, Space,
};
use iced::{alignment, ContentFit, Element, Length, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
    BackdropClicked,
    Next,
    Previous,
    /// Delete the image currently painted.
    Delete,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Record painted in the viewer; `None` once it was deleted mid-fade.
    pub record: Option<&'a ImageRecord>,
    /// 1-based position and total, while the viewer is open.
    pub position: Option<(usize, usize)>,
    /// Backdrop fade, 0.0 to 1.0.
    pub backdrop: f32,
    /// Image fade, 0.0 to 1.0, combined with the backdrop fade.
    pub image: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let fade = ctx.backdrop;
    let image_alpha = ctx.image * fade;
    let record = ctx.record;

    let previous_label = ctx.i18n.tr("modal-previous");
    let next_label = ctx.i18n.tr("modal-next");
    let close_label = ctx.i18n.tr("modal-close");
    let delete_label = ctx.i18n.tr("modal-delete");
    let position_label = ctx.position.map(|(current, total)| {
        let current = current.to_string();
        let total = total.to_string();
        ctx.i18n.tr_with_args(
            "modal-position",
            &[("current", current.as_str()), ("total", total.as_str())],
        )
    });

    let card = responsive(move |size: Size| {
        let max_width = size.width * sizing::MODAL_IMAGE_FRACTION;
        let max_height = size.height * sizing::MODAL_IMAGE_FRACTION;

        let picture: Element<'_, Message> = match record {
            Some(record) => image(record.source().handle())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .opacity(image_alpha)
                .into(),
            None => Space::new().width(Length::Fill).height(Length::Fill).into(),
        };

        let stage = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(nav_button("◀", &previous_label, Message::Previous, fade))
            .push(picture)
            .push(nav_button("▶", &next_label, Message::Next, fade));

        let caption_text = record.map(ImageRecord::label).unwrap_or_default();
        let caption = Container::new(text(caption_text.to_owned()).size(typography::BODY))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .style(styles::container::caption(image_alpha));

        let mut controls = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);
        if let Some(label) = &position_label {
            controls = controls.push(
                Container::new(text(label.clone()).size(typography::CAPTION))
                    .style(styles::container::caption(fade)),
            );
        }
        controls = controls
            .push(Space::new().width(Length::Fill))
            .push(
                button(text(delete_label.clone()).size(typography::CAPTION))
                    .on_press(Message::Delete)
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::danger),
            )
            .push(
                button(text(format!("✕ {close_label}")).size(typography::CAPTION))
                    .on_press(Message::Close)
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::overlay(
                        palette::WHITE,
                        opacity::OVERLAY_MEDIUM,
                        opacity::OPAQUE,
                        fade,
                    )),
            );

        let content = Column::new()
            .spacing(spacing::SM)
            .push(controls)
            .push(stage)
            .push(caption);

        Container::new(opaque(content))
            .max_width(max_width)
            .max_height(max_height)
            .into()
    });

    opaque(
        mouse_area(center(card).style(styles::container::backdrop(fade)))
            .on_press(Message::BackdropClicked),
    )
}

fn nav_button<'a>(glyph: &'a str, label: &str, message: Message, fade: f32) -> Element<'a, Message> {
    iced::widget::tooltip(
        button(text(glyph).size(typography::TITLE_LG))
            .on_press(message)
            .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
            .padding(spacing::SM)
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_SUBTLE,
                opacity::OVERLAY_MEDIUM,
                fade,
            )),
        text(label.to_owned()).size(typography::CAPTION),
        iced::widget::tooltip::Position::Bottom,
    )
    .into()
}
