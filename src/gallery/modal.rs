// SPDX-License-Identifier: MPL-2.0
//! Full-window viewer state machine.
//!
//! ```text
//!            open(i)                    close()                 ModalHidden
//!  Closed ───────────▶ Open(i) ─────────────────▶ Closing(i) ───────────────▶ Closed
//!                      │  ▲                           │
//!          next / prev │  │ open(j) cancels the hide  │
//!                      ▼  │◀──────────────────────────┘
//!                    Open((i ± 1) mod N)
//! ```
//!
//! `Closing` is purely visual: the backdrop fades out while the modal is
//! still on screen and keeps blocking background scrolling, but navigation
//! and keyboard input are already refused.

use super::effect::TimerEvent;
use super::fade::Fade;
use super::record::RecordId;
use crate::config::{IMAGE_SWAP_DELAY, MODAL_FADE, MODAL_HIDE_DELAY, MODAL_SHOW_DELAY};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        cursor: usize,
    },
    Closing {
        cursor: usize,
    },
}

/// Navigation direction inside the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

impl Step {
    /// Index reached from `cursor` in a list of `len` records, wrapping at both ends.
    ///
    /// `len` must be non-zero.
    #[must_use]
    pub fn apply(self, cursor: usize, len: usize) -> usize {
        match self {
            Step::Next => (cursor + 1) % len,
            Step::Previous => (cursor + len - 1) % len,
        }
    }
}

/// What a record removal means for the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The viewer was not affected or has been adjusted in place.
    Kept,
    /// The viewer was showing the removed record and must close.
    MustClose,
}

type Scheduled = (Duration, TimerEvent);

#[derive(Debug, Clone)]
pub struct Modal {
    state: ModalState,
    /// Bumped on every open/close; stale show/hide timers carry an older value.
    generation: u64,
    /// Bumped on every image step; only the latest swap is applied.
    swap_token: u64,
    /// Record currently painted in the viewer (lags the cursor during a swap).
    shown: Option<RecordId>,
    backdrop: Fade,
    image: Fade,
}

impl Modal {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            state: ModalState::Closed,
            generation: 0,
            swap_token: 0,
            shown: None,
            backdrop: Fade::constant(0.0, now),
            image: Fade::constant(1.0, now),
        }
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Whether the viewer accepts navigation and keyboard input.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Whether the viewer is on screen (open or fading out).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self.state, ModalState::Closed)
    }

    /// Background scrolling is suspended for as long as the viewer is on screen.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.is_visible()
    }

    /// Cursor while open.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        match self.state {
            ModalState::Open { cursor } => Some(cursor),
            _ => None,
        }
    }

    #[must_use]
    pub fn shown(&self) -> Option<RecordId> {
        self.shown
    }

    /// Backdrop opacity at `now`, from 0.0 to 1.0.
    #[must_use]
    pub fn backdrop_opacity(&self, now: Instant) -> f32 {
        self.backdrop.value(now)
    }

    /// Opacity of the viewed image at `now`.
    #[must_use]
    pub fn image_opacity(&self, now: Instant) -> f32 {
        self.image.value(now)
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.backdrop.is_running(now) || self.image.is_running(now)
    }

    /// Opens the viewer on `index`, showing `record`.
    ///
    /// Opening while a close is fading out cancels the pending hide.
    pub fn open(&mut self, index: usize, record: RecordId, now: Instant) -> Scheduled {
        if !self.is_visible() {
            self.backdrop = Fade::constant(0.0, now);
        }
        self.state = ModalState::Open { cursor: index };
        self.generation += 1;
        self.swap_token += 1;
        self.shown = Some(record);
        self.image = Fade::constant(1.0, now);
        (
            MODAL_SHOW_DELAY,
            TimerEvent::ModalShown {
                generation: self.generation,
            },
        )
    }

    /// Starts the fade-out. The viewer stays on screen until the hide timer fires.
    pub fn close(&mut self, now: Instant) -> Option<Scheduled> {
        let ModalState::Open { cursor } = self.state else {
            return None;
        };
        self.state = ModalState::Closing { cursor };
        self.generation += 1;
        self.backdrop = self.backdrop.retarget(0.0, now, MODAL_FADE);
        Some((
            MODAL_HIDE_DELAY,
            TimerEvent::ModalHidden {
                generation: self.generation,
            },
        ))
    }

    /// Moves the cursor one step, wrapping around; `len` is the current list length.
    ///
    /// The displayed image fades out first and is swapped when the returned
    /// timer fires. Does nothing while not open or when the list is empty.
    pub fn step(&mut self, step: Step, len: usize, now: Instant) -> Option<Scheduled> {
        let ModalState::Open { cursor } = self.state else {
            return None;
        };
        if len == 0 {
            return None;
        }
        self.state = ModalState::Open {
            cursor: step.apply(cursor.min(len - 1), len),
        };
        self.swap_token += 1;
        self.image = self.image.retarget(0.0, now, IMAGE_SWAP_DELAY);
        Some((
            IMAGE_SWAP_DELAY,
            TimerEvent::SwapImage {
                token: self.swap_token,
            },
        ))
    }

    /// Applies the backdrop fade-in scheduled by [`open`](Self::open).
    pub fn on_shown(&mut self, generation: u64, now: Instant) -> bool {
        if generation != self.generation || !self.is_open() {
            return false;
        }
        self.backdrop = self.backdrop.retarget(1.0, now, MODAL_FADE);
        true
    }

    /// Completes a close scheduled by [`close`](Self::close).
    pub fn on_hidden(&mut self, generation: u64, now: Instant) -> bool {
        if generation != self.generation || !matches!(self.state, ModalState::Closing { .. }) {
            return false;
        }
        self.state = ModalState::Closed;
        self.shown = None;
        self.backdrop = Fade::constant(0.0, now);
        true
    }

    /// Completes a swap scheduled by [`step`](Self::step); `record` is the
    /// record now under the cursor.
    pub fn on_swap(&mut self, token: u64, record: Option<RecordId>, now: Instant) -> bool {
        if token != self.swap_token || !self.is_open() {
            return false;
        }
        if let Some(record) = record {
            self.shown = Some(record);
        }
        self.image = self.image.retarget(1.0, now, IMAGE_SWAP_DELAY);
        true
    }

    /// Keeps the cursor on the same logical record after the record at
    /// `index` was removed; `len` is the length after removal.
    pub fn on_removed(&mut self, index: usize, len: usize) -> Removal {
        let (cursor, open) = match self.state {
            ModalState::Open { cursor } => (cursor, true),
            ModalState::Closing { cursor } => (cursor, false),
            ModalState::Closed => return Removal::Kept,
        };

        if open && cursor == index {
            return Removal::MustClose;
        }

        let mut adjusted = if index < cursor { cursor - 1 } else { cursor };
        if len > 0 && adjusted > len - 1 {
            adjusted = len - 1;
        }

        self.state = if open {
            ModalState::Open { cursor: adjusted }
        } else {
            ModalState::Closing { cursor: adjusted }
        };
        Removal::Kept
    }

    /// Re-clamps the cursor after the list shrank to `len` records.
    pub fn clamp(&mut self, len: usize) {
        let last = len.saturating_sub(1);
        match &mut self.state {
            ModalState::Open { cursor } | ModalState::Closing { cursor } => {
                *cursor = (*cursor).min(last);
            }
            ModalState::Closed => {}
        }
    }
}
