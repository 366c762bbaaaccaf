// SPDX-License-Identifier: MPL-2.0
//! Turns delayed gallery events into runtime tasks.

use super::Message;
use crate::gallery::TimerEvent;
use iced::Task;
use std::time::Duration;

/// Delivers `event` back to `update` once `delay` has elapsed.
///
/// Pending timers are never cancelled; the gallery recognizes stale ones.
pub fn schedule(delay: Duration, event: TimerEvent) -> Task<Message> {
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |()| Message::Timer(event),
    )
}
