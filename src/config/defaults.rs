// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Sample prefix and grid layout
//! - **Transitions**: Fade and swap delays for tiles and the modal viewer
//! - **Notifications**: Toast lifetime

use std::time::Duration;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Number of startup records protected from "clear".
pub const DEFAULT_SAMPLE_LIMIT: usize = 6;

/// Default number of grid columns.
pub const DEFAULT_COLUMNS: u16 = 3;

/// Minimum grid columns.
pub const MIN_COLUMNS: u16 = 1;

/// Maximum grid columns.
pub const MAX_COLUMNS: u16 = 8;

/// Default tile height in logical pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: f32 = 200.0;

/// Minimum tile height.
pub const MIN_THUMBNAIL_HEIGHT: f32 = 80.0;

/// Maximum tile height.
pub const MAX_THUMBNAIL_HEIGHT: f32 = 480.0;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Delay between an upload being appended and its tile starting to fade in.
pub const TILE_REVEAL_DELAY: Duration = Duration::from_millis(100);

/// Duration of a tile fade-in.
pub const TILE_FADE_IN: Duration = Duration::from_millis(500);

/// Delay between the modal being shown and its backdrop starting to fade in.
pub const MODAL_SHOW_DELAY: Duration = Duration::from_millis(10);

/// Duration of the modal backdrop fade (both directions).
pub const MODAL_FADE: Duration = Duration::from_millis(300);

/// Delay before a closing modal is hidden and background scrolling restored.
pub const MODAL_HIDE_DELAY: Duration = Duration::from_millis(300);

/// Delay between the modal image fading out and the next image swapping in.
pub const IMAGE_SWAP_DELAY: Duration = Duration::from_millis(150);

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a toast stays fully visible.
pub const TOAST_DISPLAY: Duration = Duration::from_secs(3);

/// How long a toast takes to fade out once its display time is over.
pub const TOAST_FADE_OUT: Duration = Duration::from_millis(300);

/// Interval of the animation tick while something is fading.
pub const ANIMATION_TICK: Duration = Duration::from_millis(50);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_bounds_contain_default() {
        assert!((MIN_COLUMNS..=MAX_COLUMNS).contains(&DEFAULT_COLUMNS));
    }

    #[test]
    fn thumbnail_bounds_contain_default() {
        assert!(DEFAULT_THUMBNAIL_HEIGHT >= MIN_THUMBNAIL_HEIGHT);
        assert!(DEFAULT_THUMBNAIL_HEIGHT <= MAX_THUMBNAIL_HEIGHT);
    }

    #[test]
    fn swap_completes_before_modal_hide() {
        assert!(IMAGE_SWAP_DELAY < MODAL_HIDE_DELAY);
    }
}
