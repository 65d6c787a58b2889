// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focal zoom: keep the point under the pointer still while the scale changes.
//!
//! The solver works on a [`TransformState`] whose `scale` already holds the
//! new value and whose `previous_scale` holds the scale the surface is still
//! rendered at. Its result may leave the image outside the container; run
//! [`adjust`] afterwards to pin it back.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Size, Vec2};

use crate::bounds::Axis;
use crate::state::TransformState;

/// On-screen offset of the image's top-left corner relative to the container
/// under a scale-about-`origin` transform plus `translation`.
#[must_use]
pub fn position_for(padding: Vec2, origin: Point, scale: f64, translation: Vec2) -> Vec2 {
    let origin = origin.to_vec2();
    padding + (origin - origin * scale) + translation
}

/// Solves for the translation and origin that keep `mouse` visually fixed.
///
/// `mouse` is the pointer position relative to the top-left corner of the
/// surface as currently rendered (at `state.previous_scale`). When it has
/// drifted more than `tolerance` pixels from the previous origin on either
/// axis, the translation is re-anchored and the origin moves under the
/// pointer; otherwise the previous origin is kept.
///
/// Axes without overflow get no translation and an origin at the midpoint of
/// `layout_size`.
#[must_use]
pub fn solve_focal_zoom(
    state: &TransformState,
    mouse: Vec2,
    layout_size: Size,
    tolerance: f64,
) -> TransformState {
    let mut next = *state;
    let previous = state.previous_scale;
    let previous_origin = state.origin.to_vec2() * previous;
    let drift = mouse - previous_origin;

    if drift.x.abs() > tolerance || drift.y.abs() > tolerance {
        next.translation += drift * (1.0 - 1.0 / previous);
        next.origin = (mouse / previous).to_point();
    } else {
        next.origin = (previous_origin / previous).to_point();
    }

    for axis in Axis::ALL {
        if !state.bounds.overflows(axis) {
            axis.set(&mut next.translation, 0.0);
            axis.set_point(&mut next.origin, axis.extent(layout_size) / 2.0);
        }
    }

    next.position = position_for(next.padding, next.origin, next.scale, next.translation);
    next
}

/// Pins the image back inside the container.
///
/// On each overflowing axis, an image past the top/left edge is pulled back
/// flush with it and an image past the bottom/right edge is pushed back flush
/// with that one. Both `position` and `translation` move by the same amount.
/// Axes without overflow have their position forced to `0`.
#[must_use]
pub fn adjust(state: &TransformState) -> TransformState {
    let mut next = *state;
    for axis in Axis::ALL {
        let bound = state.bounds.get(axis);
        let position = axis.of(state.position);
        if bound <= 0.0 {
            axis.set(&mut next.position, 0.0);
            continue;
        }
        let correction = if position > 0.0 {
            -position
        } else if position < -bound {
            -bound - position
        } else {
            continue;
        };
        axis.set(&mut next.position, position + correction);
        axis.set(
            &mut next.translation,
            axis.of(state.translation) + correction,
        );
    }
    next
}
