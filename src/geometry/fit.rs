// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! Fitting reference geometry to a canvas.
//!
//! The letter data lives in a nominal 0-100 box; the canvas can be any size.
//! `fit` computes a uniform scale plus translation that centers the
//! geometry's bounds inside the canvas with a padding margin, and
//! `ScaledGeometry` holds the transformed copy for one canvas size.

use super::outline::ReferencePath;
use kurbo::{Affine, Rect, Size, Vec2};

/// Compute the transform that fits `bounds` into a `target` canvas.
///
/// The scale preserves aspect ratio and leaves `padding` (a fraction, e.g.
/// 0.2 uses 80% of the available space) around the constrained axis. The
/// result is centered on both axes.
///
/// Returns `None` when the bounds have no area, the target is empty, or the
/// computed scale is not a finite positive number. Callers treat that as
/// "no geometry".
pub fn fit(bounds: Rect, target: Size, padding: f64) -> Option<Affine> {
    let (width, height) = (bounds.width(), bounds.height());
    if !(width > 0.0 && height > 0.0) {
        tracing::warn!(
            "Cannot fit degenerate bounds {}x{} to canvas",
            width,
            height
        );
        return None;
    }
    // f64::min skips NaN, so a non-finite canvas has to be caught here
    if !target.is_finite() {
        tracing::warn!("Cannot fit to non-finite canvas {:?}", target);
        return None;
    }

    let scale_x = target.width / width;
    let scale_y = target.height / height;
    let scale = scale_x.min(scale_y) * (1.0 - padding);

    tracing::debug!(
        "Fit scale factor: {} (scale_x: {}, scale_y: {}, padding: {})",
        scale,
        scale_x,
        scale_y,
        padding
    );

    if !scale.is_finite() || scale <= 0.0 {
        tracing::warn!("Invalid scale factor {}, geometry treated as absent", scale);
        return None;
    }

    let scaled_width = width * scale;
    let scaled_height = height * scale;
    let offset = Vec2::new(
        (target.width - scaled_width) / 2.0 - bounds.x0 * scale,
        (target.height - scaled_height) / 2.0 - bounds.y0 * scale,
    );

    Some(Affine::translate(offset) * Affine::scale(scale))
}

/// Reference geometry fitted to one canvas size.
///
/// Valid only for `size`; rebuild it whenever the canvas is resized. An
/// absent geometry (degenerate source or failed fit) evaluates to 0%.
#[derive(Debug, Clone)]
pub struct ScaledGeometry<G> {
    geometry: Option<G>,
    transform: Affine,
    size: Size,
}

impl<G: ReferencePath> ScaledGeometry<G> {
    /// Fit `source` into a canvas of `size` with the given padding
    pub fn fit(source: &G, size: Size, padding: f64) -> Self {
        if source.is_empty() {
            tracing::debug!("Source path is empty, scaled geometry is absent");
            return Self::absent(size);
        }

        let Some(bounds) = source.bounds() else {
            return Self::absent(size);
        };

        match fit(bounds, size, padding) {
            Some(transform) => Self {
                geometry: Some(source.transformed(transform)),
                transform,
                size,
            },
            None => Self::absent(size),
        }
    }

    /// Use `geometry` as-is, already in canvas coordinates
    pub fn unscaled(geometry: G, size: Size) -> Self {
        let geometry = (!geometry.is_empty()).then_some(geometry);
        Self {
            geometry,
            transform: Affine::IDENTITY,
            size,
        }
    }

    /// Geometry that evaluates to nothing
    pub fn absent(size: Size) -> Self {
        Self {
            geometry: None,
            transform: Affine::IDENTITY,
            size,
        }
    }

    /// The fitted geometry, if any
    pub fn geometry(&self) -> Option<&G> {
        self.geometry.as_ref()
    }

    pub fn is_absent(&self) -> bool {
        self.geometry.is_none()
    }

    /// Transform that was applied to the source geometry
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Canvas size this geometry was fitted to
    pub fn size(&self) -> Size {
        self.size
    }

    /// Bounds of the fitted geometry in canvas coordinates
    pub fn bounds(&self) -> Option<Rect> {
        self.geometry.as_ref().and_then(ReferencePath::bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Outline, TracePath};
    use kurbo::{BezPath, Point};

    const EPS: f64 = 1e-6;

    fn triangle() -> Outline {
        let mut path = BezPath::new();
        path.move_to((50.0, 10.0));
        path.line_to((10.0, 90.0));
        path.line_to((90.0, 90.0));
        path.close_path();
        Outline::new(path)
    }

    #[test]
    fn test_fit_centers_on_both_axes() {
        let bounds = Rect::new(10.0, 10.0, 90.0, 90.0);
        let target = Size::new(400.0, 300.0);
        let affine = fit(bounds, target, 0.2).unwrap();
        let out = affine.transform_rect_bbox(bounds);

        // Height is the constrained axis: 300 / 80 * 0.8 = 3.0
        assert!((out.height() - 240.0).abs() < EPS);
        assert!((out.width() - 240.0).abs() < EPS);

        // Equal margins on each axis
        assert!((out.x0 - (target.width - out.x1)).abs() < EPS);
        assert!((out.y0 - (target.height - out.y1)).abs() < EPS);
        assert!((out.y0 - 30.0).abs() < EPS);
    }

    #[test]
    fn test_fit_contained_in_target() {
        let bounds = Rect::new(-20.0, 5.0, 130.0, 45.0);
        for (w, h, pad) in [(100.0, 100.0, 0.1), (37.0, 512.0, 0.2), (800.0, 10.0, 0.0)] {
            let target = Size::new(w, h);
            let out = fit(bounds, target, pad).unwrap().transform_rect_bbox(bounds);
            assert!(out.x0 >= -EPS && out.y0 >= -EPS);
            assert!(out.x1 <= w + EPS && out.y1 <= h + EPS);
            assert!(((out.x0 + out.x1) / 2.0 - w / 2.0).abs() < EPS);
            assert!(((out.y0 + out.y1) / 2.0 - h / 2.0).abs() < EPS);
        }
    }

    #[test]
    fn test_fit_rejects_degenerate_bounds() {
        let target = Size::new(100.0, 100.0);
        assert!(fit(Rect::new(0.0, 0.0, 100.0, 0.0), target, 0.1).is_none());
        assert!(fit(Rect::new(5.0, 5.0, 5.0, 5.0), target, 0.1).is_none());
    }

    #[test]
    fn test_fit_rejects_non_positive_scale() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(fit(bounds, Size::new(0.0, 100.0), 0.1).is_none());
        assert!(fit(bounds, Size::new(100.0, 100.0), 1.0).is_none());
        assert!(fit(bounds, Size::new(f64::NAN, 100.0), 0.1).is_none());
    }

    #[test]
    fn test_scaled_geometry_transforms_outline() {
        let outline = triangle();
        let scaled = ScaledGeometry::fit(&outline, Size::new(200.0, 200.0), 0.2);
        let geometry = scaled.geometry().unwrap();

        // Source bounds are 80x80 → scale 200 / 80 * 0.8 = 2.0, centered
        let bounds = scaled.bounds().unwrap();
        assert!((bounds.width() - 160.0).abs() < EPS);
        assert!((bounds.x0 - 20.0).abs() < EPS);
        assert!(geometry.contains(Point::new(100.0, 150.0)));
        assert_eq!(scaled.size(), Size::new(200.0, 200.0));
    }

    #[test]
    fn test_scaled_geometry_absent_for_empty_source() {
        let scaled = ScaledGeometry::fit(&TracePath::default(), Size::new(200.0, 200.0), 0.1);
        assert!(scaled.is_absent());
        assert!(scaled.bounds().is_none());

        let scaled = ScaledGeometry::unscaled(TracePath::default(), Size::new(10.0, 10.0));
        assert!(scaled.is_absent());
    }
}
