// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle: display, fade-out and dismissal.
//!
//! Only one toast is on screen at a time. Pushing a new notification replaces
//! the current one and restarts the timing.

use super::notification::{Notification, NotificationId};
use crate::config::{TOAST_DISPLAY, TOAST_FADE_OUT};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Visible,
    FadingOut,
    Expired,
}

#[derive(Debug, Clone)]
struct Active {
    notification: Notification,
    shown_at: Instant,
}

impl Active {
    fn phase(&self, now: Instant) -> Phase {
        let age = now.saturating_duration_since(self.shown_at);
        if age < TOAST_DISPLAY {
            Phase::Visible
        } else if age < TOAST_DISPLAY + TOAST_FADE_OUT {
            Phase::FadingOut
        } else {
            Phase::Expired
        }
    }

    fn opacity(&self, now: Instant) -> f32 {
        match self.phase(now) {
            Phase::Visible => 1.0,
            Phase::FadingOut => {
                let into_fade = now.saturating_duration_since(self.shown_at) - TOAST_DISPLAY;
                1.0 - into_fade.as_secs_f32() / TOAST_FADE_OUT.as_secs_f32()
            }
            Phase::Expired => 0.0,
        }
    }
}

#[derive(Debug, Default)]
pub struct Manager {
    current: Option<Active>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`, replacing whatever toast is on screen.
    pub fn push(&mut self, notification: Notification, now: Instant) {
        log::debug!("Showing notification {}", notification.message_key());
        self.current = Some(Active {
            notification,
            shown_at: now,
        });
    }

    /// Removes the toast if it is the one identified by `id`.
    ///
    /// Returns `true` if it was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match &self.current {
            Some(active) if active.notification.id() == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Drops the toast once its fade-out has completed.
    pub fn tick(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|active| active.phase(now) == Phase::Expired)
        {
            self.current = None;
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// The toast on screen, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|active| &active.notification)
    }

    /// Toast opacity at `now`; 0.0 when nothing is shown.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.current
            .as_ref()
            .map_or(0.0, |active| active.opacity(now))
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.current.is_some()
    }
}
