// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::{Affine, Point, Vec2};

use crate::bounds::OverflowBounds;

/// The transform a host applies to its rendering surface.
///
/// The surface is scaled uniformly by `scale` about `origin` (in the
/// surface's own local pixel space, like a CSS `transform-origin`) and then
/// translated by `translation`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Extra pan applied after scaling.
    pub translation: Vec2,
    /// Fixed point of the scale, relative to the surface's top-left corner.
    pub origin: Point,
}

impl ViewTransform {
    /// Returns the equivalent affine transform for a surface laid out with
    /// its top-left corner at `layout_origin`.
    ///
    /// The result maps untransformed surface coordinates to on-screen
    /// coordinates.
    #[must_use]
    pub fn to_affine(&self, layout_origin: Point) -> Affine {
        let anchor = layout_origin.to_vec2() + self.origin.to_vec2();
        Affine::translate(anchor + self.translation)
            * Affine::scale(self.scale)
            * Affine::translate(-anchor)
    }

    /// Formats the transform as a CSS `matrix()` value.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "matrix({s},0,0,{s},{tx},{ty})",
            s = self.scale,
            tx = self.translation.x,
            ty = self.translation.y
        )
    }

    /// Formats the origin as a CSS `transform-origin` value.
    #[must_use]
    pub fn css_transform_origin(&self) -> String {
        format!("{}px {}px", self.origin.x, self.origin.y)
    }
}

/// Complete zoom/pan state of an [`ImageTransform`](crate::ImageTransform).
///
/// This is a plain value: the engine replaces it wholesale after each
/// operation, and the pure helpers in this crate ([`solve_focal_zoom`],
/// [`adjust`], [`pan_by`]) map one state to the next.
///
/// [`solve_focal_zoom`]: crate::solve_focal_zoom
/// [`adjust`]: crate::adjust
/// [`pan_by`]: crate::pan_by
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Current uniform scale.
    pub scale: f64,
    /// Scale before the most recent zoom or reset.
    pub previous_scale: f64,
    /// Pan applied on top of the scale-about-origin transform.
    pub translation: Vec2,
    /// Scale origin in surface-local pixels.
    pub origin: Point,
    /// On-screen offset of the image's top-left corner relative to the
    /// container, kept within `[-bound, 0]` on overflowing axes.
    pub position: Vec2,
    /// Offset that centers the unscaled image in the container.
    pub padding: Vec2,
    /// Overflow bounds for the current scale.
    pub bounds: OverflowBounds,
    /// Bumped every time a transform change is emitted.
    pub revision: u64,
}

impl TransformState {
    /// Identity state at `scale`, with no pan and no overflow.
    #[must_use]
    pub fn identity(scale: f64) -> Self {
        Self {
            scale,
            previous_scale: scale,
            translation: Vec2::ZERO,
            origin: Point::ZERO,
            position: Vec2::ZERO,
            padding: Vec2::ZERO,
            bounds: OverflowBounds::NONE,
            revision: 0,
        }
    }

    /// The transform a host should apply for this state.
    #[must_use]
    pub fn view_transform(&self) -> ViewTransform {
        ViewTransform {
            scale: self.scale,
            translation: self.translation,
            origin: self.origin,
        }
    }
}
