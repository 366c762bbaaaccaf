// SPDX-License-Identifier: MPL-2.0
//! Side effects requested by the gallery controller.
//!
//! The controller never touches timers, the filesystem or the toast overlay
//! itself. It returns [`Effect`]s and the application shell carries them out.

use super::record::RecordId;
use crate::ui::notifications::Notification;
use std::path::PathBuf;
use std::time::Duration;

/// Deferred events scheduled by the controller.
///
/// Each one names what it targets (a record id or a modal generation) so a
/// timer that fires after its target is gone is recognized and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Start the fade-in of a freshly uploaded tile.
    RevealRecord(RecordId),
    /// Start the modal backdrop fade-in.
    ModalShown { generation: u64 },
    /// Hide a closing modal and restore background scrolling.
    ModalHidden { generation: u64 },
    /// Swap the modal image to the cursor's record.
    SwapImage { token: u64 },
}

/// An image file waiting to be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeRequest {
    pub path: PathBuf,
    /// Caption of the record created once decoding succeeds.
    pub label: String,
}

impl DecodeRequest {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, label }
    }
}

#[derive(Debug, Clone)]
pub enum Effect {
    /// Deliver `event` back to the controller after `delay`.
    Schedule { delay: Duration, event: TimerEvent },
    /// Decode a submitted file and report back with the result.
    Decode(DecodeRequest),
    /// Show a toast.
    Notify(Notification),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_request_labels_with_file_name() {
        let request = DecodeRequest::new(PathBuf::from("/tmp/uploads/sunset.jpg"));
        assert_eq!(request.label, "sunset.jpg");
    }

    #[test]
    fn decode_request_without_file_name_uses_path() {
        let request = DecodeRequest::new(PathBuf::from("/"));
        assert_eq!(request.label, "/");
    }
}
