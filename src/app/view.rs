// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: toolbar and grid, the viewer while it is on screen,
//! then the toast overlay.

use super::Message;
use crate::config::GalleryConfig;
use crate::gallery::GalleryController;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Toast};
use crate::ui::{gallery_grid, modal, toolbar};
use iced::widget::{Column, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryController,
    pub layout: &'a GalleryConfig,
    pub notifications: &'a notifications::Manager,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let modal_state = ctx.gallery.modal();

    let toolbar = toolbar::view(toolbar::ViewContext { i18n: ctx.i18n }).map(Message::Toolbar);
    let grid = gallery_grid::view(gallery_grid::ViewContext {
        i18n: ctx.i18n,
        images: ctx.gallery.images(),
        columns: ctx.layout.columns(),
        thumbnail_height: ctx.layout.thumbnail_height(),
        drop_highlight: ctx.gallery.drop_highlight(),
        scroll_locked: modal_state.scroll_locked(),
        now: ctx.now,
    })
    .map(Message::Grid);

    let base = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(toolbar)
        .push(grid);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if modal_state.is_visible() {
        let total = ctx.gallery.images().len();
        layers = layers.push(
            modal::view(modal::ViewContext {
                i18n: ctx.i18n,
                record: ctx.gallery.viewed_record(),
                position: ctx
                    .gallery
                    .viewed_index()
                    .filter(|_| modal_state.is_open())
                    .map(|index| (index + 1, total)),
                backdrop: modal_state.backdrop_opacity(ctx.now),
                image: modal_state.image_opacity(ctx.now),
            })
            .map(Message::Modal),
        );
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n, ctx.now).map(Message::Notification))
        .into()
}
