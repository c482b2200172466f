// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for press and release animations.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A monotonic easing curve mapping normalized time to normalized progress.
///
/// Every variant satisfies `sample(0.0) == 0.0` and `sample(1.0) == 1.0`.
#[derive(Copy, Clone, Debug, Default)]
pub enum Interpolator {
    /// Constant rate of change.
    Linear,
    /// Starts and ends slowly, fastest through the middle (cosine curve).
    #[default]
    AccelerateDecelerate,
    /// Starts slowly and speeds up (`t²`).
    Accelerate,
    /// Starts quickly and slows down (`1 − (1 − t)²`).
    Decelerate,
    /// A caller-supplied curve.
    ///
    /// The function should be monotonic on `[0, 1]`; its endpoints are pinned
    /// to `0` and `1` regardless of what it returns there.
    Custom(fn(f64) -> f64),
}

impl Interpolator {
    /// Maps `t` (clamped into `[0, 1]`) to eased progress.
    #[must_use]
    pub fn sample(self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            Self::Accelerate => t * t,
            Self::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Self::Custom(curve) => curve(t),
        }
    }
}

impl PartialEq for Interpolator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => core::ptr::fn_addr_eq(*a, *b),
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Interpolator; 4] = [
        Interpolator::Linear,
        Interpolator::AccelerateDecelerate,
        Interpolator::Accelerate,
        Interpolator::Decelerate,
    ];

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn endpoints_are_pinned() {
        for curve in ALL {
            assert_eq!(curve.sample(0.0), 0.0, "{curve:?} at 0");
            assert_eq!(curve.sample(1.0), 1.0, "{curve:?} at 1");
        }
        let wild = Interpolator::Custom(|t| t * 3.0 - 1.0);
        assert_eq!(wild.sample(0.0), 0.0);
        assert_eq!(wild.sample(1.0), 1.0);
    }

    #[test]
    fn input_is_clamped() {
        for curve in ALL {
            assert_eq!(curve.sample(-2.0), 0.0, "{curve:?} below range");
            assert_eq!(curve.sample(7.5), 1.0, "{curve:?} above range");
            assert_eq!(curve.sample(f64::NAN), 0.0, "{curve:?} NaN");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for curve in ALL {
            let mut previous = 0.0;
            for step in 1..=100 {
                let value = curve.sample(f64::from(step) / 100.0);
                assert!(value >= previous, "{curve:?} decreased at step {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn known_midpoints() {
        assert!(approx(Interpolator::Linear.sample(0.25), 0.25));
        assert!(approx(Interpolator::AccelerateDecelerate.sample(0.5), 0.5));
        assert!(approx(Interpolator::Accelerate.sample(0.5), 0.25));
        assert!(approx(Interpolator::Decelerate.sample(0.5), 0.75));
    }

    #[test]
    fn custom_curves_compare_by_function() {
        fn square(t: f64) -> f64 {
            t * t
        }
        assert_eq!(Interpolator::Custom(square), Interpolator::Custom(square));
        assert_ne!(Interpolator::Custom(square), Interpolator::Linear);
        assert_eq!(Interpolator::Linear, Interpolator::Linear);
        assert_ne!(Interpolator::Accelerate, Interpolator::Decelerate);
    }
}
