// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_image_view --heading-base-level=0

//! Understory Image View: a headless zoom/pan engine for one image in a container.
//!
//! This crate models the geometry behind a typical image viewer: an image is
//! laid out (shrunk to fit) inside a container, and the user zooms with the
//! mouse wheel around the pointer and drags to pan once the zoomed image
//! overflows the container. It focuses on:
//! - A uniform scale + translation transform with a movable scale origin.
//! - Focal zoom: the point under the pointer stays visually put.
//! - Overflow bounds: the image edges never detach from the container.
//! - Shrink-to-fit and "actual size" modes.
//!
//! It does **not** decode images or own a rendering surface. Callers are
//! expected to:
//! - Implement [`GeometryProvider`] for their surface (or use the in-memory
//!   [`SurfaceGeometry`]) so the engine can measure rectangles and apply the
//!   resulting [`ViewTransform`].
//! - Forward wheel, pointer and resize events into [`ImageTransform`].
//! - Subscribe to [`TransformEvent`]s to refresh ancillary UI such as a zoom
//!   percentage readout or a "panning" cursor.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_image_view::{ImageTransform, SurfaceGeometry};
//!
//! // An 800x600 container showing an image laid out at 800x600.
//! let surface = SurfaceGeometry::new(
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//! );
//! let mut view = ImageTransform::new(surface);
//!
//! // Bind the decoded image: 4000x3000 native pixels.
//! view.set_image(Size::new(4000.0, 3000.0));
//! assert_eq!(view.scale_for_actual_size(), 5.0);
//!
//! // Scroll "up" over the center to zoom in.
//! view.on_wheel(-100.0, Point::new(400.0, 300.0));
//! assert!((view.scale() - 1.2).abs() < 1e-9);
//!
//! // Drag to pan; the image stays clamped inside the container.
//! view.on_pointer_down(Point::new(400.0, 300.0));
//! view.on_pointer_move(Point::new(1000.0, 300.0), true);
//! view.on_pointer_up();
//! assert!(view.state().position.x <= 0.0);
//! ```
//!
//! ## Notifications
//!
//! Observers receive the event kind together with the state snapshot it
//! describes:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect, Size};
//! use understory_image_view::{ImageTransform, SurfaceGeometry, TransformEvent, TransformState};
//!
//! let rect = Rect::new(0.0, 0.0, 400.0, 300.0);
//! let mut view = ImageTransform::new(SurfaceGeometry::new(rect, rect));
//!
//! let changes = Rc::new(Cell::new(0));
//! let seen = Rc::clone(&changes);
//! view.subscribe(move |event: TransformEvent, _state: &TransformState| {
//!     if event == TransformEvent::TransformChange {
//!         seen.set(seen.get() + 1);
//!     }
//! });
//!
//! view.set_image(Size::new(800.0, 600.0));
//! view.on_wheel(-50.0, Point::new(200.0, 150.0));
//! assert_eq!(changes.get(), 2);
//! ```
//!
//! ## Design notes
//!
//! - The transform is uniform: one scale factor on both axes, no rotation.
//! - The origin is expressed in the surface's own local pixel space, the way
//!   a CSS `transform-origin` is.
//! - Every operation runs to completion on the caller's thread. There are no
//!   timers, queues or background work.
//! - Calling back into the engine from inside an observer is unsupported.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod bounds;
mod config;
mod drag;
mod engine;
mod focal;
mod geometry;
mod observer;
mod state;

pub use bounds::{Axis, OverflowBounds};
pub use config::{ConfigError, TransformConfig};
pub use drag::{DragState, pan_by};
pub use engine::{ImageTransform, ImageTransformDebugInfo};
pub use focal::{adjust, position_for, solve_focal_zoom};
pub use geometry::{GeometryProvider, SurfaceGeometry};
pub use observer::{ObserverId, TransformEvent, TransformObserver};
pub use state::{TransformState, ViewTransform};
