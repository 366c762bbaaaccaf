// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! takes a `ViewContext` borrowing the state it renders and emits its own
//! `Message` enum, which the application maps into its top-level message.
//!
//! # Components
//!
//! - [`toolbar`] - Upload and clear actions
//! - [`gallery_grid`] - Thumbnail grid with per-tile delete
//! - [`modal`] - Full-window viewer with navigation
//! - [`notifications`] - Toast notifications for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (scroll lock)
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod gallery_grid;
pub mod modal;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod toolbar;
pub mod widgets;
