// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers forward input to the [`GalleryController`] and turn the effects
//! it returns into runtime tasks.

use super::{scheduler, Message};
use crate::gallery::{Effect, GalleryController};
use crate::i18n::fluent::I18n;
use crate::media::{self, extensions};
use crate::ui::notifications;
use crate::ui::{gallery_grid, modal, toolbar};
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

/// Mutable state handed to every handler.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a mut GalleryController,
    pub notifications: &'a mut notifications::Manager,
}

/// Carries out controller effects: timers and decodes become tasks, toasts
/// are shown right away.
pub fn apply_effects(
    ctx: &mut UpdateContext<'_>,
    effects: Vec<Effect>,
    now: Instant,
) -> Task<Message> {
    let tasks: Vec<Task<Message>> = effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::Schedule { delay, event } => Some(scheduler::schedule(delay, event)),
            Effect::Decode(request) => {
                let path = request.path.clone();
                Some(Task::perform(media::decode_file(path), move |result| {
                    Message::DecodeFinished { request, result }
                }))
            }
            Effect::Notify(notification) => {
                ctx.notifications.push(notification, now);
                None
            }
        })
        .collect();

    Task::batch(tasks)
}

pub fn handle_toolbar_message(
    ctx: &mut UpdateContext<'_>,
    message: toolbar::Message,
    now: Instant,
) -> Task<Message> {
    match message {
        toolbar::Message::Upload => handle_open_file_dialog(ctx.i18n.tr("file-dialog-filter")),
        toolbar::Message::Clear => {
            let effects = ctx.gallery.clear_to_samples(now);
            apply_effects(ctx, effects, now)
        }
    }
}

pub fn handle_grid_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_grid::Message,
    now: Instant,
) -> Task<Message> {
    let effects = match message {
        gallery_grid::Message::Open(index) => ctx.gallery.open_modal(index, now),
        gallery_grid::Message::Delete(index) => ctx.gallery.delete_at(index, now),
    };
    apply_effects(ctx, effects, now)
}

pub fn handle_modal_message(
    ctx: &mut UpdateContext<'_>,
    message: modal::Message,
    now: Instant,
) -> Task<Message> {
    let effects = match message {
        modal::Message::Close => ctx.gallery.close_modal(now),
        modal::Message::BackdropClicked => ctx.gallery.backdrop_clicked(now),
        modal::Message::Next => ctx.gallery.next_image(now),
        modal::Message::Previous => ctx.gallery.prev_image(now),
        modal::Message::Delete => ctx.gallery.delete_current(now),
    };
    apply_effects(ctx, effects, now)
}

/// Opens the multi-select upload dialog, filtered to image files.
pub fn handle_open_file_dialog(filter_name: String) -> Task<Message> {
    let image_extensions = extensions::image_extensions();
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, &image_extensions)
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
                .unwrap_or_default()
        },
        Message::FileDialogResult,
    )
}

/// Submits files picked in the dialog or dropped on the window.
pub fn handle_files_submitted(
    ctx: &mut UpdateContext<'_>,
    paths: Vec<PathBuf>,
    now: Instant,
) -> Task<Message> {
    if paths.is_empty() {
        return Task::none();
    }
    let effects = ctx.gallery.submit_files(paths);
    apply_effects(ctx, effects, now)
}

/// Handles a file dropped on the window. Each drop arrives as its own event.
pub fn handle_file_dropped(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    now: Instant,
) -> Task<Message> {
    ctx.gallery.set_drop_highlight(false);
    handle_files_submitted(ctx, vec![path], now)
}
