// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::state::ViewTransform;

/// The rendering surface as seen by the engine.
///
/// All rectangles are in one shared viewport coordinate space. The engine
/// measures on demand and never assumes a rectangle is unchanged unless it
/// has just reset.
pub trait GeometryProvider {
    /// The bounded container the image is shown in.
    fn container_rect(&self) -> Rect;

    /// Bounding rectangle of the image surface as currently rendered,
    /// including any applied transform.
    fn image_rect(&self) -> Rect;

    /// Applies `transform` to the surface.
    ///
    /// Called before every [`TransformChange`](crate::TransformEvent::TransformChange)
    /// notification.
    fn apply_transform(&mut self, transform: &ViewTransform);

    /// Removes any applied transform so that [`image_rect`](Self::image_rect)
    /// reports the laid-out rectangle.
    fn clear_transform(&mut self);
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for &mut G {
    fn container_rect(&self) -> Rect {
        (**self).container_rect()
    }

    fn image_rect(&self) -> Rect {
        (**self).image_rect()
    }

    fn apply_transform(&mut self, transform: &ViewTransform) {
        (**self).apply_transform(transform);
    }

    fn clear_transform(&mut self) {
        (**self).clear_transform();
    }
}

/// An in-memory surface: a container, a laid-out image rectangle, and the
/// transform currently applied to it.
///
/// Useful for tests and for hosts that draw the image themselves from the
/// emitted [`ViewTransform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceGeometry {
    container: Rect,
    layout: Rect,
    transform: Option<ViewTransform>,
}

impl SurfaceGeometry {
    /// Creates a surface with an explicit layout rectangle for the image.
    #[must_use]
    pub fn new(container: Rect, layout: Rect) -> Self {
        Self {
            container,
            layout,
            transform: None,
        }
    }

    /// Creates a surface that lays `image_size` out centered in `container`,
    /// shrinking it to fit but never enlarging it.
    #[must_use]
    pub fn fitted(container: Rect, image_size: Size) -> Self {
        Self::new(container, fit_layout(container, image_size))
    }

    /// Replaces the container and image layout, for example after a resize.
    pub fn set_layout(&mut self, container: Rect, layout: Rect) {
        self.container = container;
        self.layout = layout;
    }

    /// The untransformed image rectangle.
    #[must_use]
    pub fn layout_rect(&self) -> Rect {
        self.layout
    }

    /// The transform currently applied, if any.
    #[must_use]
    pub fn applied_transform(&self) -> Option<ViewTransform> {
        self.transform
    }
}

impl GeometryProvider for SurfaceGeometry {
    fn container_rect(&self) -> Rect {
        self.container
    }

    fn image_rect(&self) -> Rect {
        match self.transform {
            Some(t) => t.to_affine(self.layout.origin()).transform_rect_bbox(self.layout),
            None => self.layout,
        }
    }

    fn apply_transform(&mut self, transform: &ViewTransform) {
        self.transform = Some(*transform);
    }

    fn clear_transform(&mut self) {
        self.transform = None;
    }
}

/// Lays out `image_size` centered in `container`, shrinking to fit.
fn fit_layout(container: Rect, image_size: Size) -> Rect {
    if image_size.width <= 0.0 || image_size.height <= 0.0 {
        return Rect::from_center_size(container.center(), Size::ZERO);
    }
    let fit = (container.width() / image_size.width)
        .min(container.height() / image_size.height)
        .min(1.0);
    Rect::from_center_size(container.center(), image_size * fit)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{GeometryProvider, SurfaceGeometry};
    use crate::state::ViewTransform;

    #[test]
    fn fitted_shrinks_and_centers() {
        let container = Rect::new(0.0, 0.0, 800.0, 600.0);
        let surface = SurfaceGeometry::fitted(container, Size::new(4000.0, 1000.0));
        assert_eq!(surface.layout_rect(), Rect::new(0.0, 200.0, 800.0, 400.0));
    }

    #[test]
    fn fitted_never_enlarges() {
        let container = Rect::new(0.0, 0.0, 800.0, 600.0);
        let surface = SurfaceGeometry::fitted(container, Size::new(200.0, 100.0));
        assert_eq!(surface.layout_rect(), Rect::new(300.0, 250.0, 500.0, 350.0));
    }

    #[test]
    fn image_rect_follows_applied_transform() {
        let rect = Rect::new(100.0, 100.0, 500.0, 400.0);
        let mut surface = SurfaceGeometry::new(rect, rect);
        surface.apply_transform(&ViewTransform {
            scale: 2.0,
            translation: Vec2::new(10.0, 0.0),
            origin: Point::new(200.0, 150.0),
        });
        assert_eq!(surface.image_rect(), Rect::new(-90.0, -50.0, 710.0, 550.0));

        surface.clear_transform();
        assert_eq!(surface.image_rect(), rect);
        assert_eq!(surface.applied_transform(), None);
    }

    #[test]
    fn borrowed_surface_is_a_provider() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut surface = SurfaceGeometry::new(rect, rect);
        let mut borrowed = &mut surface;
        GeometryProvider::apply_transform(
            &mut borrowed,
            &ViewTransform {
                scale: 1.0,
                translation: Vec2::new(1.0, 1.0),
                origin: Point::ZERO,
            },
        );
        assert_eq!(surface.image_rect(), Rect::new(1.0, 1.0, 11.0, 11.0));
    }
}
