// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::{DecodeRequest, NavKey, TimerEvent};
use crate::media::ImageData;
use crate::ui::{gallery_grid, modal, notifications, toolbar};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(toolbar::Message),
    Grid(gallery_grid::Message),
    Modal(modal::Message),
    Notification(notifications::NotificationMessage),
    /// Files chosen in the upload dialog; empty when cancelled.
    FileDialogResult(Vec<PathBuf>),
    /// Files are being dragged over the window.
    FilesHovered,
    /// The drag left the window without dropping.
    FilesHoveredLeft,
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    Key(NavKey),
    DecodeFinished {
        request: DecodeRequest,
        result: Result<ImageData, Error>,
    },
    Timer(TimerEvent),
    /// Periodic redraw while a fade or a toast is live.
    Tick(Instant),
}

/// Runtime flags passed from the CLI to the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override, e.g. `fr`.
    pub lang: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
    /// Directory whose images are appended to the samples.
    pub samples_dir: Option<PathBuf>,
    /// Sample images given as positional arguments.
    pub paths: Vec<PathBuf>,
}
