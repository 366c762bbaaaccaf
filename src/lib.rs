// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an image gallery built with the Iced GUI framework.
//!
//! It shows a grid of sample images, accepts new images through a file
//! dialog or drag-and-drop, opens any image in a full-window viewer with
//! keyboard navigation, and can delete images or clear back to the samples.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
