// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the gallery controller, localization and the toast
//! manager, and translates messages into controller calls. Everything the
//! controller asks for in return (timers, decodes, toasts) is carried out by
//! the handlers in [`update`].

mod message;
pub mod paths;
pub mod samples;
mod scheduler;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, GalleryConfig};
use crate::gallery::GalleryController;
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: GalleryController,
    layout: GalleryConfig,
    /// Resolved once at startup; `System` is not re-queried per frame.
    theme: Theme,
    notifications: notifications::Manager,
    /// Time of the latest update; fades are rendered against it.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.gallery.images().len())
            .field("modal", &self.gallery.modal().state())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 520;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config, seeds the gallery with its samples and shows any
    /// config warning.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        (Self::boot(&flags, config, config_warning), Task::none())
    }

    /// Builds the startup state from an already loaded config. A load
    /// warning is shown as an error toast.
    fn boot(flags: &Flags, config: config::Config, config_warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let now = Instant::now();

        let entries = samples::scan(&config.gallery, &flags.paths, flags.samples_dir.as_deref());
        let mut gallery = GalleryController::new(now);
        gallery.initialize(entries, config.gallery.sample_limit);

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(notifications::Notification::error(key), now);
        }

        App {
            i18n,
            gallery,
            theme: config.general.theme_mode.theme(),
            layout: config.gallery,
            notifications,
            now,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.gallery.is_animating(Instant::now()),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        self.now = now;

        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            gallery: &mut self.gallery,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Toolbar(toolbar_message) => {
                update::handle_toolbar_message(&mut ctx, toolbar_message, now)
            }
            Message::Grid(grid_message) => update::handle_grid_message(&mut ctx, grid_message, now),
            Message::Modal(modal_message) => {
                update::handle_modal_message(&mut ctx, modal_message, now)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::FileDialogResult(paths) => {
                update::handle_files_submitted(&mut ctx, paths, now)
            }
            Message::FilesHovered => {
                self.gallery.set_drop_highlight(true);
                Task::none()
            }
            Message::FilesHoveredLeft => {
                self.gallery.set_drop_highlight(false);
                Task::none()
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path, now),
            Message::Key(key) => {
                let effects = ctx.gallery.handle_key(key, now);
                update::apply_effects(&mut ctx, effects, now)
            }
            Message::DecodeFinished { request, result } => {
                let effects = ctx.gallery.finish_decode(request, result);
                update::apply_effects(&mut ctx, effects, now)
            }
            Message::Timer(event) => {
                self.gallery.on_timer(event, now);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.gallery.tick(now);
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            layout: &self.layout,
            notifications: &self.notifications,
            now: self.now,
        })
    }
}
