// SPDX-License-Identifier: MPL-2.0
//! Time-driven transitions for color, size and visibility changes.
//!
//! A [`Transition`] tracks progress between `0.0` (off) and `1.0` (on). Widgets
//! call [`Transition::retarget`] when their boolean state flips and
//! [`Transition::tick`] on every animation tick; the view reads
//! [`Transition::progress`] to interpolate whatever it animates.

use iced::Color;
use std::time::{Duration, Instant};

/// Eased progress between the off (`0.0`) and on (`1.0`) states.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    progress: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

impl Transition {
    /// Creates a transition resting at `on`.
    #[must_use]
    pub fn new(on: bool, duration: Duration) -> Self {
        let value = endpoint(on);
        Self {
            from: value,
            to: value,
            progress: value,
            started_at: None,
            duration,
        }
    }

    /// Starts moving towards `on`, continuing from the current progress.
    pub fn retarget(&mut self, on: bool, now: Instant) {
        let target = endpoint(on);
        self.from = self.progress;
        self.to = target;

        if self.duration.is_zero() || (self.from - target).abs() <= f32::EPSILON {
            self.settle();
        } else {
            self.started_at = Some(now);
        }
    }

    /// Advances the transition to `now`.
    pub fn tick(&mut self, now: Instant) {
        let Some(started_at) = self.started_at else {
            return;
        };

        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            self.settle();
            return;
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.progress = self.from + (self.to - self.from) * ease_in_out_cubic(t);
    }

    /// Current progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the transition still needs ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.started_at.is_some()
    }

    /// Whether the transition rests at the off state.
    #[must_use]
    pub fn is_fully_off(&self) -> bool {
        !self.is_animating() && self.progress <= f32::EPSILON
    }

    fn settle(&mut self) {
        self.progress = self.to;
        self.from = self.to;
        self.started_at = None;
    }
}

fn endpoint(on: bool) -> f32 {
    if on {
        1.0
    } else {
        0.0
    }
}

/// Cubic ease-in-out curve on `0.0..=1.0`.
#[must_use]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linear interpolation between two colors, channel by channel.
#[must_use]
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: lerp(from.r, to.r, t),
        g: lerp(from.g, to.g, t),
        b: lerp(from.b, to.b, t),
        a: lerp(from.a, to.a, t),
    }
}

/// Linear interpolation between two scalars, exact at both ends.
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from * (1.0 - t) + to * t
}
