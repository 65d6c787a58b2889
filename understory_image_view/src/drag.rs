// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan: track press/move/release and turn pointer deltas into pans.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] on pointer down with the pointer position.
//! 2) On each move with the primary button held, call [`DragState::update`]
//!    to get the delta since the last recorded position.
//! 3) Feed the delta to [`pan_by`], which only moves axes that stay inside
//!    the container.
//! 4) Call [`DragState::end`] on pointer up.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_image_view::DragState;
//!
//! let mut drag = DragState::default();
//!
//! drag.start(Point::new(10.0, 20.0));
//! assert!(drag.is_dragging());
//! assert!(!drag.has_moved);
//!
//! let delta = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(delta, Vec2::new(5.0, 5.0));
//! assert!(drag.has_moved);
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

use crate::bounds::Axis;
use crate::state::TransformState;

/// Tracks an in-progress drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Last recorded pointer position, `None` when idle.
    pub last_pos: Option<Point>,
    /// Whether the pointer moved since the drag started.
    pub has_moved: bool,
}

impl DragState {
    /// Starts a new drag at `pos`, discarding any previous one.
    pub fn start(&mut self, pos: Point) {
        self.last_pos = Some(pos);
        self.has_moved = false;
    }

    /// Records a move to `pos`, returning the delta since the last position.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last_pos = self.last_pos?;
        self.last_pos = Some(pos);
        self.has_moved = true;
        Some(pos - last_pos)
    }

    /// Ends the current drag and resets state.
    pub fn end(&mut self) {
        self.last_pos = None;
        self.has_moved = false;
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.last_pos.is_some()
    }
}

/// Pans `state` by `delta`, axis by axis.
///
/// Each component is applied to both `position` and `translation` only if
/// the resulting position stays within the overflow bounds; otherwise that
/// axis does not move at all. Axes without overflow never move.
#[must_use]
pub fn pan_by(state: &TransformState, delta: Vec2) -> TransformState {
    let mut next = *state;
    for axis in Axis::ALL {
        let d = axis.of(delta);
        let position = axis.of(state.position);
        if state.bounds.allows(axis, position, d) {
            axis.set(&mut next.position, position + d);
            axis.set(&mut next.translation, axis.of(state.translation) + d);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::OverflowBounds;

    fn zoomed() -> TransformState {
        TransformState {
            scale: 2.0,
            bounds: OverflowBounds {
                horizontal: 100.0,
                vertical: 50.0,
            },
            position: Vec2::new(-50.0, -25.0),
            ..TransformState::identity(1.0)
        }
    }

    #[test]
    fn new_drag_state_is_idle() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert!(!drag.has_moved);
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        drag.update(Point::new(10.0, 10.0));
        assert!(drag.has_moved);

        drag.start(Point::new(50.0, 60.0));
        assert_eq!(drag.last_pos, Some(Point::new(50.0, 60.0)));
        assert!(!drag.has_moved);
    }

    #[test]
    fn update_tracks_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(drag.update(Point::new(2.0, 1.0)), Some(Vec2::new(-6.0, -6.0)));
    }

    #[test]
    fn update_when_idle_does_nothing() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
        assert!(!drag.has_moved);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn zero_delta_still_counts_as_moved() {
        let mut drag = DragState::default();
        drag.start(Point::new(50.0, 50.0));
        assert_eq!(drag.update(Point::new(50.0, 50.0)), Some(Vec2::ZERO));
        assert!(drag.has_moved);
    }

    #[test]
    fn end_resets_state() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0));
        drag.update(Point::new(15.0, 25.0));
        drag.end();
        assert!(!drag.is_dragging());
        assert!(!drag.has_moved);
    }

    #[test]
    fn pan_moves_position_and_translation_together() {
        let state = zoomed();
        let next = pan_by(&state, Vec2::new(20.0, -10.0));
        assert_eq!(next.position, Vec2::new(-30.0, -35.0));
        assert_eq!(next.translation, Vec2::new(20.0, -10.0));
    }

    #[test]
    fn pan_rejects_axes_that_would_leave_bounds() {
        let state = zoomed();
        // x would reach +10, y would reach -55.
        let next = pan_by(&state, Vec2::new(60.0, -30.0));
        assert_eq!(next.position, state.position);
        assert_eq!(next.translation, state.translation);

        // Mixed: x is fine, y is not.
        let next = pan_by(&state, Vec2::new(-50.0, 26.0));
        assert_eq!(next.position, Vec2::new(-100.0, -25.0));
        assert_eq!(next.translation, Vec2::new(-50.0, 0.0));
    }

    #[test]
    fn pan_never_moves_axes_without_overflow() {
        let state = TransformState::identity(1.0);
        let next = pan_by(&state, Vec2::new(-5.0, 5.0));
        assert_eq!(next, state);
    }
}
