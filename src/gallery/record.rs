// SPDX-License-Identifier: MPL-2.0
//! Image records and their tile fade-in state.

use crate::config::TILE_FADE_IN;
use crate::media::ImageData;
use iced::widget::image::Handle;
use std::path::PathBuf;
use std::time::Instant;

/// Stable identity of a record.
///
/// Positions shift on every deletion; ids never do, so views and timers
/// refer to records by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Where the pixels of a record come from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// An image on disk, loaded lazily by the renderer.
    File(PathBuf),
    /// An uploaded image already decoded into memory.
    Decoded(ImageData),
}

impl ImageSource {
    /// Image handle for the renderer.
    #[must_use]
    pub fn handle(&self) -> Handle {
        match self {
            ImageSource::File(path) => Handle::from_path(path.clone()),
            ImageSource::Decoded(data) => data.handle.clone(),
        }
    }
}

/// Fade-in state of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    /// Appended but not yet shown.
    Hidden,
    /// Fading in since the given instant.
    Revealing { since: Instant },
    /// Fully opaque.
    #[default]
    Visible,
}

impl Reveal {
    /// Tile opacity at `now`, from 0.0 to 1.0.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self {
            Reveal::Hidden => 0.0,
            Reveal::Revealing { since } => {
                let elapsed = now.saturating_duration_since(*since);
                (elapsed.as_secs_f32() / TILE_FADE_IN.as_secs_f32()).min(1.0)
            }
            Reveal::Visible => 1.0,
        }
    }

    /// Whether a redraw is needed to animate this tile.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self, Reveal::Revealing { .. })
    }
}

/// One managed image entry.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    id: RecordId,
    source: ImageSource,
    label: String,
    reveal: Reveal,
}

impl ImageRecord {
    #[must_use]
    pub fn new(id: RecordId, source: ImageSource, label: impl Into<String>) -> Self {
        Self {
            id,
            source,
            label: label.into(),
            reveal: Reveal::Visible,
        }
    }

    /// Builder for records that start invisible and fade in later.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.reveal = Reveal::Hidden;
        self
    }

    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    #[must_use]
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn reveal(&self) -> Reveal {
        self.reveal
    }

    pub(crate) fn set_reveal(&mut self, reveal: Reveal) {
        self.reveal = reveal;
    }

    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.reveal.opacity(now)
    }
}
