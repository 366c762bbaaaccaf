// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! A toast appears in the bottom-right corner after an upload, a deletion or
//! a clear, stays for three seconds and fades out. A newer toast replaces the
//! current one.
//!
//! # Components
//!
//! - [`notification`] - `Notification` data with its severity
//! - [`manager`] - `Manager` tracking the toast on screen and its timing
//! - [`toast`] - widget rendering the toast
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification, Toast};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-upload-success"), Instant::now());
//!
//! let overlay = Toast::view_overlay(&manager, &i18n, now).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
