// SPDX-License-Identifier: MPL-2.0
//! Time-based opacity ramps.

use std::time::{Duration, Instant};

/// Linear opacity ramp from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    start: f32,
    end: f32,
    since: Instant,
    duration: Duration,
}

impl Fade {
    /// A fade that already sits at `value`.
    #[must_use]
    pub fn constant(value: f32, now: Instant) -> Self {
        Self {
            start: value,
            end: value,
            since: now,
            duration: Duration::ZERO,
        }
    }

    /// Starts a ramp from wherever this fade currently is towards `end`.
    #[must_use]
    pub fn retarget(&self, end: f32, now: Instant, duration: Duration) -> Self {
        Self {
            start: self.value(now),
            end,
            since: now,
            duration,
        }
    }

    /// Opacity at `now`, clamped to the ramp bounds.
    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.end;
        }
        let elapsed = now.saturating_duration_since(self.since);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.start + (self.end - self.start) * t
    }

    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.since) < self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const STEP: Duration = Duration::from_millis(100);

    #[test]
    fn constant_fade_never_runs() {
        let now = Instant::now();
        let fade = Fade::constant(0.4, now);
        assert_eq!(fade.value(now + STEP), 0.4);
        assert!(!fade.is_running(now));
    }

    #[test]
    fn retarget_ramps_from_current_value() {
        let now = Instant::now();
        let fade = Fade::constant(0.0, now).retarget(1.0, now, STEP);
        assert_abs_diff_eq!(fade.value(now + STEP / 2), 0.5, epsilon = 1e-3);
        assert!(fade.is_running(now + STEP / 2));

        // Reversing mid-way starts from the half-faded value.
        let midway = now + STEP / 2;
        let back = fade.retarget(0.0, midway, STEP);
        assert_abs_diff_eq!(back.value(midway), 0.5, epsilon = 1e-3);
        assert_eq!(back.value(midway + STEP), 0.0);
    }

    #[test]
    fn finished_fade_rests_at_target() {
        let now = Instant::now();
        let fade = Fade::constant(1.0, now).retarget(0.0, now, STEP);
        assert_eq!(fade.value(now + STEP * 3), 0.0);
        assert!(!fade.is_running(now + STEP * 3));
    }
}
