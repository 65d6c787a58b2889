// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Size, Vec2};

/// One of the two screen axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis (left/right edges).
    Horizontal,
    /// The y axis (top/bottom edges).
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Returns the component of `v` along this axis.
    #[must_use]
    pub fn of(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Returns the extent of `size` along this axis.
    #[must_use]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Overwrites the component of `v` along this axis.
    pub fn set(self, v: &mut Vec2, value: f64) {
        match self {
            Self::Horizontal => v.x = value,
            Self::Vertical => v.y = value,
        }
    }

    /// Overwrites the coordinate of `p` along this axis.
    pub fn set_point(self, p: &mut Point, value: f64) {
        match self {
            Self::Horizontal => p.x = value,
            Self::Vertical => p.y = value,
        }
    }
}

/// How far a scaled image may extend past its container on each axis.
///
/// A bound of `0.0` means the image fits on that axis and cannot be panned
/// along it. Otherwise the image's on-screen offset relative to the container
/// must stay within `[-bound, 0]`: `0` is flush with the top/left edge and
/// `-bound` is flush with the bottom/right edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverflowBounds {
    /// Maximum horizontal overflow in pixels.
    pub horizontal: f64,
    /// Maximum vertical overflow in pixels.
    pub vertical: f64,
}

impl OverflowBounds {
    /// No overflow on either axis.
    pub const NONE: Self = Self {
        horizontal: 0.0,
        vertical: 0.0,
    };

    /// Computes the overflow of an image laid out at `image_size`, scaled by
    /// `scale`, inside a container of `container_size`.
    ///
    /// Scaled sizes are floored to whole pixels. Zero-sized images or
    /// containers produce no overflow on the affected axis.
    #[must_use]
    pub fn compute(image_size: Size, scale: f64, container_size: Size) -> Self {
        Self {
            horizontal: axis_overflow(image_size.width, scale, container_size.width),
            vertical: axis_overflow(image_size.height, scale, container_size.height),
        }
    }

    /// Returns the bound along `axis`.
    #[must_use]
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// Returns `true` if the image can be panned along `axis`.
    #[must_use]
    pub fn overflows(&self, axis: Axis) -> bool {
        self.get(axis) > 0.0
    }

    /// Returns `true` if moving an image at `position` by `delta` along `axis`
    /// keeps it within `[-bound, 0]`.
    ///
    /// A zero delta, or any delta on an axis without overflow, is rejected.
    #[must_use]
    pub fn allows(&self, axis: Axis, position: f64, delta: f64) -> bool {
        let bound = self.get(axis);
        if bound <= 0.0 {
            return false;
        }
        if delta < 0.0 {
            position + delta >= -bound
        } else if delta > 0.0 {
            position + delta <= 0.0
        } else {
            false
        }
    }
}

fn axis_overflow(size: f64, scale: f64, container: f64) -> f64 {
    if size <= 0.0 || container <= 0.0 {
        return 0.0;
    }
    let scaled = (size * scale).floor();
    (scaled - container).floor().max(0.0)
}
