// SPDX-License-Identifier: MPL-2.0
//! In-memory gallery state: the ordered image records, the full-window viewer
//! and the controller tying them together.
//!
//! Nothing in here touches the GUI runtime. The controller returns
//! [`Effect`]s (timers, decodes, toasts) that the application shell executes,
//! which keeps every transition testable with plain `Instant`s.

pub mod controller;
pub mod effect;
pub mod fade;
pub mod list;
pub mod modal;
pub mod record;

pub use controller::{GalleryController, NavKey};
pub use effect::{DecodeRequest, Effect, TimerEvent};
pub use list::ImageList;
pub use modal::{Modal, ModalState, Step};
pub use record::{ImageRecord, ImageSource, RecordId, Reveal};
