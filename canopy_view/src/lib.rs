// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy View: the zoom/pan mapping between model and screen space.
//!
//! A [`ViewTransform`] is scale-then-translate: a model point `p` maps to
//! the screen as `p · zoom + pan`, and back as `(p − pan) / zoom`. Zoom is
//! clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`]; panning is free (no clamping).
//!
//! Wheel-driven zoom multiplies or divides by [`WHEEL_ZOOM_STEP`] per
//! notch. [`ViewTransform::zoom_about`] additionally adjusts the pan so
//! the model point under a screen-space anchor (typically the cursor)
//! stays put, the behavior canvas hosts expect from scroll-to-zoom.
//!
//! ```rust
//! use canopy_view::ViewTransform;
//! use kurbo::{Point, Vec2};
//!
//! let mut view = ViewTransform::new();
//! view.set_zoom(2.0);
//! view.pan(Vec2::new(10.0, 0.0));
//!
//! let model = Point::new(5.0, 5.0);
//! let screen = view.to_screen(model);
//! assert_eq!(screen, Point::new(20.0, 10.0));
//! assert_eq!(view.to_model(screen), model);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Rect, Vec2};

/// Smallest permitted zoom factor.
pub const MIN_ZOOM: f64 = 0.1;
/// Largest permitted zoom factor.
pub const MAX_ZOOM: f64 = 3.0;
/// Per-notch multiplier for wheel-driven zoom.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Zoom/pan state mapping model coordinates to screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    zoom: f64,
    pan: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTransform {
    /// Identity view: zoom 1, no pan.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }

    /// Current zoom factor, always within [`MIN_ZOOM`]..=[`MAX_ZOOM`].
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current pan offset in screen pixels.
    pub fn pan_offset(&self) -> Vec2 {
        self.pan
    }

    /// Set the zoom factor, clamped to the permitted range.
    ///
    /// Non-finite input is ignored (debug builds assert).
    pub fn set_zoom(&mut self, zoom: f64) {
        debug_assert!(zoom.is_finite(), "zoom must be finite; got {zoom:?}");
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    /// Zoom in by one wheel notch.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * WHEEL_ZOOM_STEP);
    }

    /// Zoom out by one wheel notch.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / WHEEL_ZOOM_STEP);
    }

    /// Multiply the zoom by `factor` (then clamp), keeping the model point
    /// under `anchor_screen` at the same screen position.
    ///
    /// The pan adjustment follows from requiring
    /// `to_screen(to_model(anchor))` to be invariant across the zoom
    /// change: `pan' = anchor − model · zoom'`.
    pub fn zoom_about(&mut self, anchor_screen: Point, factor: f64) {
        let model = self.to_model(anchor_screen);
        self.set_zoom(self.zoom * factor);
        self.pan = anchor_screen - Point::new(model.x * self.zoom, model.y * self.zoom);
    }

    /// Add `delta` to the pan offset. Panning is unbounded.
    pub fn pan(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Replace the pan offset.
    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
    }

    /// Reset to the identity view.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Map a model-space point to screen pixels.
    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(p.x * self.zoom, p.y * self.zoom) + self.pan
    }

    /// Map a screen-pixel point back to model space.
    pub fn to_model(&self, p: Point) -> Point {
        let q = p - self.pan;
        Point::new(q.x / self.zoom, q.y / self.zoom)
    }

    /// Map a model-space rectangle to screen pixels.
    pub fn to_screen_rect(&self, r: Rect) -> Rect {
        let p0 = self.to_screen(Point::new(r.x0, r.y0));
        let p1 = self.to_screen(Point::new(r.x1, r.y1));
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_zoom_clamps_to_range() {
        let mut view = ViewTransform::new();
        view.set_zoom(10.0);
        assert_eq!(view.zoom(), MAX_ZOOM);
        view.set_zoom(0.001);
        assert_eq!(view.zoom(), MIN_ZOOM);
        view.set_zoom(1.5);
        assert_eq!(view.zoom(), 1.5);
    }

    #[test]
    fn wheel_steps_multiply_and_clamp() {
        let mut view = ViewTransform::new();
        view.zoom_in();
        assert_eq!(view.zoom(), WHEEL_ZOOM_STEP);
        view.zoom_out();
        assert!((view.zoom() - 1.0).abs() < 1e-12);
        // Many notches saturate at the bounds rather than diverging.
        for _ in 0..100 {
            view.zoom_in();
        }
        assert_eq!(view.zoom(), MAX_ZOOM);
        for _ in 0..100 {
            view.zoom_out();
        }
        assert_eq!(view.zoom(), MIN_ZOOM);
    }

    #[test]
    fn screen_model_round_trip() {
        let mut view = ViewTransform::new();
        view.set_zoom(2.5);
        view.pan(Vec2::new(-40.0, 17.0));
        let p = Point::new(123.0, -7.5);
        let back = view.to_model(view.to_screen(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn pan_is_unbounded_and_additive() {
        let mut view = ViewTransform::new();
        view.pan(Vec2::new(1e6, -1e6));
        view.pan(Vec2::new(1e6, -1e6));
        assert_eq!(view.pan_offset(), Vec2::new(2e6, -2e6));
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let mut view = ViewTransform::new();
        view.set_zoom(1.3);
        view.pan(Vec2::new(25.0, -60.0));
        let anchor = Point::new(200.0, 150.0);
        let model_before = view.to_model(anchor);

        view.zoom_about(anchor, WHEEL_ZOOM_STEP);
        let model_after = view.to_model(anchor);
        assert!((model_after.x - model_before.x).abs() < 1e-9);
        assert!((model_after.y - model_before.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_about_respects_clamping() {
        let mut view = ViewTransform::new();
        view.set_zoom(MAX_ZOOM);
        let anchor = Point::new(10.0, 10.0);
        let model_before = view.to_model(anchor);
        // The factor saturates; the anchor must still not drift.
        view.zoom_about(anchor, 100.0);
        assert_eq!(view.zoom(), MAX_ZOOM);
        let model_after = view.to_model(anchor);
        assert!((model_after.x - model_before.x).abs() < 1e-9);
        assert!((model_after.y - model_before.y).abs() < 1e-9);
    }

    #[test]
    fn rect_mapping_scales_both_corners() {
        let mut view = ViewTransform::new();
        view.set_zoom(2.0);
        view.set_pan(Vec2::new(5.0, 5.0));
        let r = view.to_screen_rect(Rect::new(0.0, 0.0, 10.0, 20.0));
        assert_eq!(r, Rect::new(5.0, 5.0, 25.0, 45.0));
    }
}
