// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Tuning knobs for an [`ImageTransform`](crate::ImageTransform).
///
/// The defaults match a conventional desktop viewer: zoom floor of 12.5%,
/// fit scale of `1.0`, `-0.002` scale per wheel delta unit (scrolling up
/// zooms in) and a 1 px tolerance for "the pointer has not moved".
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformConfig {
    /// Absolute lower bound on the scale.
    pub min_scale: f64,
    /// Scale of the fitted, unzoomed image.
    pub default_scale: f64,
    /// Scale change per unit of wheel delta.
    pub wheel_zoom_rate: f64,
    /// Pointer drift, in pixels, below which a focal zoom keeps its origin.
    pub focal_tolerance: f64,
    /// Whether wheel zoom may go below `default_scale` initially.
    pub shrinkable: bool,
}

impl TransformConfig {
    /// The default configuration.
    pub const DEFAULT: Self = Self {
        min_scale: 0.125,
        default_scale: 1.0,
        wheel_zoom_rate: -0.002,
        focal_tolerance: 1.0,
        shrinkable: false,
    };

    /// Sets [`min_scale`](Self::min_scale).
    #[must_use]
    pub fn with_min_scale(mut self, min_scale: f64) -> Self {
        self.min_scale = min_scale;
        self
    }

    /// Sets [`default_scale`](Self::default_scale).
    #[must_use]
    pub fn with_default_scale(mut self, default_scale: f64) -> Self {
        self.default_scale = default_scale;
        self
    }

    /// Sets [`wheel_zoom_rate`](Self::wheel_zoom_rate).
    #[must_use]
    pub fn with_wheel_zoom_rate(mut self, rate: f64) -> Self {
        self.wheel_zoom_rate = rate;
        self
    }

    /// Sets [`focal_tolerance`](Self::focal_tolerance).
    #[must_use]
    pub fn with_focal_tolerance(mut self, tolerance: f64) -> Self {
        self.focal_tolerance = tolerance;
        self
    }

    /// Sets [`shrinkable`](Self::shrinkable).
    #[must_use]
    pub fn with_shrinkable(mut self, shrinkable: bool) -> Self {
        self.shrinkable = shrinkable;
        self
    }

    /// Checks that the configuration describes a usable engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_scale.is_finite() || self.min_scale <= 0.0 {
            return Err(ConfigError::InvalidMinScale(self.min_scale));
        }
        if !self.default_scale.is_finite() || self.default_scale < self.min_scale {
            return Err(ConfigError::DefaultBelowMinimum {
                default_scale: self.default_scale,
                min_scale: self.min_scale,
            });
        }
        if !self.wheel_zoom_rate.is_finite() || self.wheel_zoom_rate == 0.0 {
            return Err(ConfigError::InvalidWheelRate(self.wheel_zoom_rate));
        }
        if !self.focal_tolerance.is_finite() || self.focal_tolerance < 0.0 {
            return Err(ConfigError::InvalidFocalTolerance(self.focal_tolerance));
        }
        Ok(())
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Why a [`TransformConfig`] was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The minimum scale is not a finite positive number.
    InvalidMinScale(f64),
    /// The default scale is below the minimum scale (or not finite).
    DefaultBelowMinimum {
        /// The rejected default scale.
        default_scale: f64,
        /// The configured minimum.
        min_scale: f64,
    },
    /// The wheel zoom rate is zero or not finite.
    InvalidWheelRate(f64),
    /// The focal tolerance is negative or not finite.
    InvalidFocalTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMinScale(v) => {
                write!(f, "minimum scale must be finite and positive, got {v}")
            }
            Self::DefaultBelowMinimum {
                default_scale,
                min_scale,
            } => write!(
                f,
                "default scale {default_scale} must be finite and at least the minimum scale {min_scale}"
            ),
            Self::InvalidWheelRate(v) => {
                write!(f, "wheel zoom rate must be finite and non-zero, got {v}")
            }
            Self::InvalidFocalTolerance(v) => {
                write!(f, "focal tolerance must be finite and non-negative, got {v}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
