// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};

use crate::bounds::OverflowBounds;
use crate::config::{ConfigError, TransformConfig};
use crate::drag::{DragState, pan_by};
use crate::focal::{adjust, solve_focal_zoom};
use crate::geometry::GeometryProvider;
use crate::observer::{ObserverId, Observers, TransformEvent, TransformObserver};
use crate::state::{TransformState, ViewTransform};

/// Zoom/pan engine for one image shown inside a bounded container.
///
/// `ImageTransform` owns the transform state and turns host input (wheel,
/// pointer and resize events, plus "set image", "actual size" and shrink
/// policy commands) into a clamped [`ViewTransform`]. The transform is pushed
/// to the [`GeometryProvider`] and announced to observers.
///
/// Input received before [`set_image`](Self::set_image) is ignored.
#[derive(Debug)]
pub struct ImageTransform<G> {
    geometry: G,
    config: TransformConfig,
    state: TransformState,
    drag: DragState,
    native_size: Option<Size>,
    container_rect: Rect,
    layout_rect: Rect,
    scale_for_actual_size: f64,
    shrinkable: bool,
    observers: Observers,
}

impl<G: GeometryProvider> ImageTransform<G> {
    /// Creates an engine over `geometry` with the default configuration.
    #[must_use]
    pub fn new(geometry: G) -> Self {
        Self::build(geometry, TransformConfig::DEFAULT)
    }

    /// Creates an engine over `geometry` with a validated `config`.
    pub fn with_config(geometry: G, config: TransformConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(geometry, config))
    }

    fn build(geometry: G, config: TransformConfig) -> Self {
        Self {
            geometry,
            config,
            state: TransformState::identity(config.default_scale),
            drag: DragState::default(),
            native_size: None,
            container_rect: Rect::ZERO,
            layout_rect: Rect::ZERO,
            scale_for_actual_size: config.default_scale,
            shrinkable: config.shrinkable,
            observers: Observers::default(),
        }
    }

    /// The geometry provider.
    #[must_use]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Mutable access to the geometry provider, for example to update the
    /// layout before calling [`on_resize`](Self::on_resize).
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    /// The configuration this engine was created with.
    #[must_use]
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Registers an observer for [`TransformEvent`]s.
    pub fn subscribe(&mut self, observer: impl TransformObserver + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Removes a previously registered observer. Returns `false` if `id` is
    /// not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Binds a new image with the given native pixel size and resets to fit.
    ///
    /// The actual-size scale is derived from the layout rectangle measured
    /// during the reset.
    pub fn set_image(&mut self, native_size: Size) {
        log::debug!(
            "binding image {}x{}",
            native_size.width,
            native_size.height
        );
        self.native_size = Some(native_size);
        self.reset_to_fit();
    }

    /// Returns `true` once an image has been bound.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.native_size.is_some()
    }

    /// Current zoom relative to the image's native resolution.
    ///
    /// `1.0` means one rendered pixel per image pixel. Returns `None` without
    /// a bound image or when the native size is degenerate.
    #[must_use]
    pub fn image_ratio(&self) -> Option<f64> {
        let native = self.native_size?;
        if native.width <= 0.0 || native.height <= 0.0 {
            return None;
        }
        let scale = self.state.scale;
        Some(
            (self.layout_rect.width() * scale / native.width)
                .max(self.layout_rect.height() * scale / native.height),
        )
    }

    /// [`image_ratio`](Self::image_ratio) as a rounded percentage, the value a
    /// zoom readout displays.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "zoom percentages are far below u32::MAX"
    )]
    pub fn zoom_percent(&self) -> Option<u32> {
        self.image_ratio().map(|ratio| (ratio * 100.0).round() as u32)
    }

    /// The scale at which rendered pixels match native pixels.
    #[must_use]
    pub fn scale_for_actual_size(&self) -> f64 {
        self.scale_for_actual_size
    }

    /// Zooms to actual size, centered on the container.
    ///
    /// Does nothing if actual size is the default scale or is already shown.
    /// The scale never drops below the configured minimum, even when the
    /// layout enlarges the image past that factor.
    pub fn show_actual_size(&mut self) {
        if self.native_size.is_none() {
            return;
        }
        let target = self.scale_for_actual_size.max(self.config.min_scale);
        if target == self.config.default_scale || target == self.state.scale {
            return;
        }
        log::debug!("showing actual size at scale {target}");
        self.state.previous_scale = self.state.scale;
        self.state.scale = target;
        self.zoom_at(self.container_rect.center());
    }

    /// Current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Returns `true` when zoomed away from the default scale.
    #[must_use]
    pub fn is_resized(&self) -> bool {
        self.state.scale != self.config.default_scale
    }

    /// Returns `true` if the pointer moved during the current drag.
    #[must_use]
    pub fn is_image_moved(&self) -> bool {
        self.drag.has_moved
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` if wheel zoom may go below the default scale.
    #[must_use]
    pub fn is_shrinkable(&self) -> bool {
        self.shrinkable
    }

    /// Sets the shrink policy.
    ///
    /// Disabling it while zoomed below the default scale resets to fit.
    pub fn enable_shrink(&mut self, enable: bool) {
        log::debug!("shrink {}", if enable { "enabled" } else { "disabled" });
        self.shrinkable = enable;
        if !enable && self.state.scale < self.config.default_scale && self.has_image() {
            self.reset_to_fit();
        }
    }

    /// Re-measures the container and image after a resize and resets to fit.
    pub fn on_resize(&mut self) {
        if self.has_image() {
            self.reset_to_fit();
        }
    }

    /// Pointer pressed at `point`: starts a drag.
    pub fn on_pointer_down(&mut self, point: Point) {
        if !self.has_image() {
            log::trace!("pointer down ignored: no image");
            return;
        }
        self.drag.start(point);
        if self.is_resized() {
            self.emit(TransformEvent::DragStart);
        }
    }

    /// Pointer moved to `point`: pans while dragging with the primary button.
    pub fn on_pointer_move(&mut self, point: Point, primary_held: bool) {
        if !self.has_image() || !primary_held {
            return;
        }
        let Some(delta) = self.drag.update(point) else {
            return;
        };
        self.state = pan_by(&self.state, delta);
        log::trace!(
            "drag by ({}, {}) -> position ({}, {})",
            delta.x,
            delta.y,
            self.state.position.x,
            self.state.position.y
        );
        self.emit_transform_change();
    }

    /// Pointer released: ends the drag.
    pub fn on_pointer_up(&mut self) {
        if !self.has_image() {
            return;
        }
        self.emit(TransformEvent::DragEnd);
        self.drag.end();
    }

    /// Wheel scrolled by `delta_y` with the pointer at `pointer`.
    ///
    /// Negative deltas zoom in. The point under the pointer stays put, and a
    /// delta fully absorbed by the scale floor changes nothing.
    pub fn on_wheel(&mut self, delta_y: f64, pointer: Point) {
        if !self.has_image() {
            log::trace!("wheel ignored: no image");
            return;
        }
        let scale = self.wheel_scale(delta_y);
        if scale == self.state.scale {
            log::trace!("wheel absorbed at scale {scale}");
            return;
        }
        self.state.previous_scale = self.state.scale;
        self.state.scale = scale;
        self.zoom_at(pointer);
    }

    /// The current transform state.
    #[must_use]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// The transform a host should apply to its surface.
    #[must_use]
    pub fn view_transform(&self) -> ViewTransform {
        self.state.view_transform()
    }

    /// Snapshot of the engine for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ImageTransformDebugInfo {
        ImageTransformDebugInfo {
            container_rect: self.container_rect,
            layout_rect: self.layout_rect,
            native_size: self.native_size,
            state: self.state,
            scale_for_actual_size: self.scale_for_actual_size,
            shrinkable: self.shrinkable,
            drag: self.drag,
            observer_count: self.observers.len(),
            config: self.config,
        }
    }

    fn wheel_scale(&self, delta_y: f64) -> f64 {
        let scale = (self.state.scale + delta_y * self.config.wheel_zoom_rate)
            .max(self.config.min_scale);
        if delta_y < 0.0 || self.shrinkable {
            scale
        } else {
            scale.max(self.config.default_scale)
        }
    }

    fn zoom_at(&mut self, pointer: Point) {
        if self.state.scale == self.state.previous_scale {
            return;
        }
        self.state.bounds = OverflowBounds::compute(
            self.layout_rect.size(),
            self.state.scale,
            self.container_rect.size(),
        );
        let mouse = pointer - self.geometry.image_rect().origin();
        let solved = solve_focal_zoom(
            &self.state,
            mouse,
            self.layout_rect.size(),
            self.config.focal_tolerance,
        );
        self.state = adjust(&solved);
        log::trace!(
            "zoom {} -> {} at ({}, {}), origin ({}, {}), translation ({}, {})",
            self.state.previous_scale,
            self.state.scale,
            pointer.x,
            pointer.y,
            self.state.origin.x,
            self.state.origin.y,
            self.state.translation.x,
            self.state.translation.y
        );
        self.emit_transform_change();
    }

    fn reset_to_fit(&mut self) {
        self.state.previous_scale = self.state.scale;
        self.state.scale = self.config.default_scale;

        self.geometry.clear_transform();
        self.container_rect = self.geometry.container_rect();
        self.layout_rect = self.geometry.image_rect();

        let layout = self.layout_rect.size();
        let container = self.container_rect.size();
        self.state.translation = Vec2::ZERO;
        self.state.position = Vec2::ZERO;
        self.state.origin = Point::new(layout.width / 2.0, layout.height / 2.0);
        self.state.padding = Vec2::new(
            (container.width - layout.width) / 2.0,
            (container.height - layout.height) / 2.0,
        );
        self.state.bounds = OverflowBounds::compute(layout, self.state.scale, container);
        log::debug!(
            "reset to fit: container {}x{}, image {}x{}",
            container.width,
            container.height,
            layout.width,
            layout.height
        );

        self.emit_transform_change();
        self.scale_for_actual_size = self.actual_size_scale();
    }

    fn actual_size_scale(&self) -> f64 {
        let Some(native) = self.native_size else {
            return self.config.default_scale;
        };
        let layout = self.layout_rect.size();
        if layout.width <= 0.0 || layout.height <= 0.0 {
            return self.config.default_scale;
        }
        (native.width / layout.width).max(native.height / layout.height)
    }

    fn emit_transform_change(&mut self) {
        self.geometry.apply_transform(&self.state.view_transform());
        self.state.revision = self.state.revision.wrapping_add(1);
        self.emit(TransformEvent::TransformChange);
    }

    fn emit(&mut self, event: TransformEvent) {
        self.observers.notify(event, &self.state);
    }
}

/// Debug snapshot of an [`ImageTransform`].
#[derive(Clone, Copy, Debug)]
pub struct ImageTransformDebugInfo {
    /// Container rectangle measured at the last reset.
    pub container_rect: Rect,
    /// Untransformed image rectangle measured at the last reset.
    pub layout_rect: Rect,
    /// Native pixel size of the bound image, if any.
    pub native_size: Option<Size>,
    /// Current transform state.
    pub state: TransformState,
    /// Scale at which rendered pixels match native pixels.
    pub scale_for_actual_size: f64,
    /// Current shrink policy.
    pub shrinkable: bool,
    /// Current drag state.
    pub drag: DragState,
    /// Number of registered observers.
    pub observer_count: usize,
    /// Engine configuration.
    pub config: TransformConfig,
}
