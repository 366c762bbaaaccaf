// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by the unit tests.

pub use approx::assert_abs_diff_eq;
