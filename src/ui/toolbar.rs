// SPDX-License-Identifier: MPL-2.0
//! Toolbar with the upload and clear actions.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Container, Row, Space};
use iced::{alignment::Vertical, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Upload,
    Clear,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = text(ctx.i18n.tr("toolbar-title")).size(typography::TITLE_MD);
    let hint = text(ctx.i18n.tr("toolbar-hint")).size(typography::CAPTION);

    let upload = button(text(ctx.i18n.tr("toolbar-upload")).size(typography::BODY))
        .on_press(Message::Upload)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let clear = button(text(ctx.i18n.tr("toolbar-clear")).size(typography::BODY))
        .on_press(Message::Clear)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::danger);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(hint)
        .push(upload)
        .push(clear);

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .style(styles::container::toolbar)
        .into()
}
