// SPDX-License-Identifier: MPL-2.0
//! The thumbnail grid.
//!
//! Tiles are laid out in rows of `columns`, in list order. Each tile opens
//! the viewer on click and carries its own delete button. Freshly uploaded
//! tiles fade in through their record's reveal state.

use crate::gallery::{ImageList, ImageRecord};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::scroll_lock;
use iced::widget::{button, image, text, tooltip, Column, Container, Row, Scrollable, Space};
use iced::{alignment, ContentFit, Element, Length};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Open the viewer on the tile at this index.
    Open(usize),
    /// Delete the tile at this index.
    Delete(usize),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageList,
    pub columns: u16,
    pub thumbnail_height: f32,
    pub drop_highlight: bool,
    /// Freezes scrolling while the viewer is on screen.
    pub scroll_locked: bool,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = if ctx.images.is_empty() {
        empty_state(ctx.i18n)
    } else {
        let columns = usize::from(ctx.columns.max(1));
        let tiles: Vec<Element<'_, Message>> = ctx
            .images
            .iter()
            .enumerate()
            .map(|(index, record)| tile(&ctx, index, record))
            .collect();

        let mut grid = Column::new().spacing(spacing::MD).padding(spacing::MD);
        let mut tiles = tiles.into_iter().peekable();
        while tiles.peek().is_some() {
            let mut row = Row::new().spacing(spacing::MD);
            for _ in 0..columns {
                row = match tiles.next() {
                    Some(tile) => row.push(tile),
                    // Pad the last row so tiles keep their width.
                    None => row.push(Space::new().width(Length::FillPortion(1))),
                };
            }
            grid = grid.push(row);
        }

        scroll_lock(Scrollable::new(grid).width(Length::Fill).height(Length::Fill))
            .locked(ctx.scroll_locked)
            .into()
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::drop_target(ctx.drop_highlight))
        .into()
}

fn tile<'a>(ctx: &ViewContext<'a>, index: usize, record: &'a ImageRecord) -> Element<'a, Message> {
    let alpha = record.opacity(ctx.now);

    let thumbnail = button(
        image(record.source().handle())
            .width(Length::Fill)
            .height(Length::Fixed(ctx.thumbnail_height))
            .content_fit(ContentFit::Cover)
            .opacity(alpha),
    )
    .padding(0)
    .width(Length::Fill)
    .on_press(Message::Open(index))
    .style(styles::button::tile);

    let delete = tooltip(
        button(text("✕").size(typography::CAPTION))
            .on_press(Message::Delete(index))
            .padding(spacing::XXS)
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OPAQUE,
                alpha,
            )),
        text(ctx.i18n.tr("tile-delete")).size(typography::CAPTION),
        tooltip::Position::Top,
    );

    let caption = Row::new()
        .align_y(alignment::Vertical::Center)
        .spacing(spacing::XS)
        .push(
            Container::new(text(record.label()).size(typography::CAPTION))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(delete);

    let body = Column::new()
        .spacing(spacing::XS)
        .push(thumbnail)
        .push(caption);

    Container::new(body)
        .width(Length::FillPortion(1))
        .padding(spacing::XS)
        .style(styles::container::tile)
        .into()
}

fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let message = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(text(i18n.tr("empty-gallery")).size(typography::TITLE_MD))
        .push(text(i18n.tr("drop-hint")).size(typography::BODY));

    Container::new(message)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
