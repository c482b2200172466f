// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single scale animation, advanced cooperatively by frame timestamps.

use core::time::Duration;

use kurbo::Vec2;

use crate::easing::Interpolator;

/// Identifies one animation session within a controller.
///
/// Ids increase with every session started, so a later session always has a
/// larger id than the one it superseded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(pub u64);

/// What a session produced for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameSample {
    /// Session that produced this sample.
    pub session: SessionId,
    /// Linear time fraction in `[0, 1]`.
    pub progress: f64,
    /// Scale written to the element (`x`, `y`).
    pub scale: Vec2,
}

/// An in-flight animation of both scale components toward one target.
#[derive(Clone, Debug)]
pub struct AnimationSession {
    id: SessionId,
    from: Vec2,
    target: f64,
    duration: Duration,
    interpolator: Interpolator,
    started_at: Option<Duration>,
    progress: f64,
}

impl AnimationSession {
    /// Creates a session animating from `from` (scale x, scale y) to `target`.
    ///
    /// The start time is fixed by the first call to [`Self::sample`].
    #[must_use]
    pub fn new(
        id: SessionId,
        from: Vec2,
        target: f64,
        duration: Duration,
        interpolator: Interpolator,
    ) -> Self {
        Self {
            id,
            from,
            target,
            duration,
            interpolator,
            started_at: None,
            progress: 0.0,
        }
    }

    /// The session id.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Target scale for both axes.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear time fraction reached by the last sample.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whether the last sample reached the end of the animation.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    /// Advances to `frame_time` and returns the scale to apply.
    ///
    /// Frame times earlier than the session start are treated as the start.
    pub fn sample(&mut self, frame_time: Duration) -> FrameSample {
        let started_at = *self.started_at.get_or_insert(frame_time);
        let elapsed = frame_time.saturating_sub(started_at);
        self.progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };
        let eased = self.interpolator.sample(self.progress);
        let target = Vec2::new(self.target, self.target);
        let scale = if self.progress >= 1.0 {
            target
        } else {
            self.from.lerp(target, eased)
        };
        FrameSample {
            session: self.id,
            progress: self.progress,
            scale,
        }
    }
}
