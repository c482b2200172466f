// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press-scale configuration: durations, easing, and how the push scale is expressed.
//!
//! Configuration is built from a plain [`ScaleOptions`] value and validated
//! once by [`ScaleConfig::new`]. The resulting [`ScaleConfig`] is immutable.

use core::fmt;
use core::time::Duration;

use crate::easing::Interpolator;

/// Default duration of the push (scale down) animation.
pub const DEFAULT_PUSH_DURATION: Duration = Duration::from_millis(50);
/// Default duration of the release (scale back) animation.
pub const DEFAULT_RELEASE_DURATION: Duration = Duration::from_millis(125);
/// Default push scale in [`ScaleMode::Ratio`].
pub const DEFAULT_PUSH_SCALE_RATIO: f64 = 0.9;
/// Default push inset in [`ScaleMode::AbsoluteSize`], in device-independent units.
pub const DEFAULT_PUSH_SCALE_SIZE: f64 = 10.0;

/// How [`ScaleConfig::push_scale`] is interpreted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleMode {
    /// The push scale is a direct multiplier in `[0.0, 1.0]`.
    #[default]
    Ratio,
    /// The push scale is an inset in device-independent units, applied to
    /// both edges of the element's dominant axis.
    AbsoluteSize,
}

impl ScaleMode {
    /// The push scale used when none is given explicitly.
    #[must_use]
    pub const fn default_push_scale(self) -> f64 {
        match self {
            Self::Ratio => DEFAULT_PUSH_SCALE_RATIO,
            Self::AbsoluteSize => DEFAULT_PUSH_SCALE_SIZE,
        }
    }
}

/// Error returned when a [`ScaleOptions`] value cannot form a valid [`ScaleConfig`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// [`ScaleMode::Ratio`] was requested with a push scale outside `[0.0, 1.0]`.
    PushScaleOutOfRange(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PushScaleOutOfRange(value) => write!(
                f,
                "push scale {value} is out of range; ratio mode requires a value between 0.0 and 1.0"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Unvalidated press-scale options.
///
/// Fill in the fields you care about and hand the value to [`ScaleConfig::new`]:
///
/// ```
/// use understory_press_scale::{ScaleConfig, ScaleMode, ScaleOptions};
///
/// let config = ScaleConfig::new(ScaleOptions {
///     push_scale_mode: ScaleMode::AbsoluteSize,
///     push_scale: Some(6.0),
///     ..ScaleOptions::default()
/// })
/// .unwrap();
/// assert_eq!(config.push_scale(), 6.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleOptions {
    /// Duration of the push animation.
    pub push_duration: Duration,
    /// Duration of the release animation.
    pub release_duration: Duration,
    /// Easing applied while pushing.
    pub push_interpolator: Interpolator,
    /// Easing applied while releasing.
    pub release_interpolator: Interpolator,
    /// How `push_scale` is interpreted.
    pub push_scale_mode: ScaleMode,
    /// Push scale; `None` selects [`ScaleMode::default_push_scale`].
    pub push_scale: Option<f64>,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            push_duration: DEFAULT_PUSH_DURATION,
            release_duration: DEFAULT_RELEASE_DURATION,
            push_interpolator: Interpolator::default(),
            release_interpolator: Interpolator::default(),
            push_scale_mode: ScaleMode::default(),
            push_scale: None,
        }
    }
}

/// Validated, immutable press-scale configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleConfig {
    push_duration: Duration,
    release_duration: Duration,
    push_interpolator: Interpolator,
    release_interpolator: Interpolator,
    push_scale_mode: ScaleMode,
    push_scale: f64,
}

impl ScaleConfig {
    /// Validates `options` and builds a configuration.
    ///
    /// Fails with [`ConfigError::PushScaleOutOfRange`] when the mode is
    /// [`ScaleMode::Ratio`] and the push scale is not within `[0.0, 1.0]`.
    /// Absolute sizes are not range checked; a non-positive size leaves the
    /// element at its baseline scale.
    pub fn new(options: ScaleOptions) -> Result<Self, ConfigError> {
        let push_scale = options
            .push_scale
            .unwrap_or(options.push_scale_mode.default_push_scale());
        if options.push_scale_mode == ScaleMode::Ratio && !(0.0..=1.0).contains(&push_scale) {
            tracing::debug!(push_scale, "rejecting ratio push scale");
            return Err(ConfigError::PushScaleOutOfRange(push_scale));
        }
        Ok(Self {
            push_duration: options.push_duration,
            release_duration: options.release_duration,
            push_interpolator: options.push_interpolator,
            release_interpolator: options.release_interpolator,
            push_scale_mode: options.push_scale_mode,
            push_scale,
        })
    }

    /// Default options in [`ScaleMode::Ratio`] with the given multiplier.
    pub fn ratio(push_scale: f64) -> Result<Self, ConfigError> {
        Self::new(ScaleOptions {
            push_scale_mode: ScaleMode::Ratio,
            push_scale: Some(push_scale),
            ..ScaleOptions::default()
        })
    }

    /// Default options in [`ScaleMode::AbsoluteSize`] with the given inset.
    pub fn absolute_size(size: f64) -> Result<Self, ConfigError> {
        Self::new(ScaleOptions {
            push_scale_mode: ScaleMode::AbsoluteSize,
            push_scale: Some(size),
            ..ScaleOptions::default()
        })
    }

    /// Duration of the push animation.
    #[must_use]
    pub fn push_duration(&self) -> Duration {
        self.push_duration
    }

    /// Duration of the release animation.
    #[must_use]
    pub fn release_duration(&self) -> Duration {
        self.release_duration
    }

    /// Easing applied while pushing.
    #[must_use]
    pub fn push_interpolator(&self) -> Interpolator {
        self.push_interpolator
    }

    /// Easing applied while releasing.
    #[must_use]
    pub fn release_interpolator(&self) -> Interpolator {
        self.release_interpolator
    }

    /// How [`Self::push_scale`] is interpreted.
    #[must_use]
    pub fn push_scale_mode(&self) -> ScaleMode {
        self.push_scale_mode
    }

    /// The push scale: a ratio or a size in device-independent units.
    #[must_use]
    pub fn push_scale(&self) -> f64 {
        self.push_scale
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            push_duration: DEFAULT_PUSH_DURATION,
            release_duration: DEFAULT_RELEASE_DURATION,
            push_interpolator: Interpolator::default(),
            release_interpolator: Interpolator::default(),
            push_scale_mode: ScaleMode::Ratio,
            push_scale: DEFAULT_PUSH_SCALE_RATIO,
        }
    }
}

impl TryFrom<ScaleOptions> for ScaleConfig {
    type Error = ConfigError;

    fn try_from(options: ScaleOptions) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_mode() {
        let ratio = ScaleConfig::new(ScaleOptions::default()).unwrap();
        assert_eq!(ratio, ScaleConfig::default());
        assert_eq!(ratio.push_scale(), DEFAULT_PUSH_SCALE_RATIO);
        assert_eq!(ratio.push_duration(), Duration::from_millis(50));
        assert_eq!(ratio.release_duration(), Duration::from_millis(125));

        let size = ScaleConfig::new(ScaleOptions {
            push_scale_mode: ScaleMode::AbsoluteSize,
            ..ScaleOptions::default()
        })
        .unwrap();
        assert_eq!(size.push_scale(), DEFAULT_PUSH_SCALE_SIZE);
    }

    #[test]
    fn ratio_bounds_are_inclusive() {
        assert!(ScaleConfig::ratio(0.0).is_ok());
        assert!(ScaleConfig::ratio(1.0).is_ok());
        assert!(ScaleConfig::ratio(0.75).is_ok());
    }

    #[test]
    fn ratio_out_of_range_is_rejected() {
        assert_eq!(
            ScaleConfig::ratio(1.5),
            Err(ConfigError::PushScaleOutOfRange(1.5))
        );
        assert_eq!(
            ScaleConfig::ratio(-0.1),
            Err(ConfigError::PushScaleOutOfRange(-0.1))
        );
        assert!(ScaleConfig::ratio(f64::NAN).is_err());
    }

    #[test]
    fn absolute_size_is_not_range_checked() {
        assert!(ScaleConfig::absolute_size(48.0).is_ok());
        assert!(ScaleConfig::absolute_size(0.0).is_ok());
        assert!(ScaleConfig::absolute_size(-3.0).is_ok());
    }

    #[test]
    fn try_from_validates() {
        let options = ScaleOptions {
            push_scale: Some(2.0),
            ..ScaleOptions::default()
        };
        assert!(ScaleConfig::try_from(options).is_err());
    }

    #[test]
    fn error_message_names_value() {
        use alloc::string::ToString;

        let message = ConfigError::PushScaleOutOfRange(1.5).to_string();
        assert!(message.contains("1.5"), "unexpected message: {message}");
    }
}
