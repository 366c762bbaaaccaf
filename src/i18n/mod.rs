// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded from `assets/i18n/` at
//! compile time. The active locale is chosen from the CLI, the config file
//! or the OS, falling back to `en-US`.

pub mod fluent;
