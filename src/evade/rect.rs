//! Axis-aligned boxes and roam bounds in viewport space
//!
//! Positions are CSS pixels with y growing downward. Roam bounds constrain the
//! element *center*, so a clamped center always yields a fully visible box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (`left <= right`, `top <= bottom`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Build from a layout box (left, top, width, height)
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            right: left + width.max(0.0),
            bottom: top + height.max(0.0),
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.max(Vec2::ZERO) / 2.0;
        Self {
            left: center.x - half.x,
            top: center.y - half.y,
            right: center.x + half.x,
            bottom: center.y + half.y,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// True if the box encloses no area (zero width or height)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Positive-area intersection on both axes. Shared edges don't count, and
    /// an empty rect overlaps nothing.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        !(self.right <= other.left
            || self.left >= other.right
            || self.bottom <= other.top
            || self.top >= other.bottom)
    }
}

/// Allowed range for the element center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoamBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl RoamBounds {
    /// Intersect the viewport-safe range with a square region of
    /// `roam_radius` around `origin`.
    ///
    /// When an axis inverts (viewport smaller than the element, or the origin
    /// now lies off-screen) its minimum is capped to its maximum, collapsing
    /// that axis to a single point.
    pub fn compute(
        viewport: Vec2,
        size: Vec2,
        padding: f32,
        origin: Vec2,
        roam_radius: f32,
    ) -> Self {
        Self::uncapped(viewport, size, padding, origin, roam_radius).capped()
    }

    /// The raw intersection, possibly inverted. See [`RoamBounds::is_degenerate`].
    pub fn uncapped(
        viewport: Vec2,
        size: Vec2,
        padding: f32,
        origin: Vec2,
        roam_radius: f32,
    ) -> Self {
        let half = size / 2.0;
        let safe_min = Vec2::splat(padding) + half;
        let safe_max = viewport - Vec2::splat(padding) - half;

        Self {
            min_x: safe_min.x.max(origin.x - roam_radius),
            max_x: safe_max.x.min(origin.x + roam_radius),
            min_y: safe_min.y.max(origin.y - roam_radius),
            max_y: safe_max.y.min(origin.y + roam_radius),
        }
    }

    /// True if either axis has min > max
    pub fn is_degenerate(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Cap each inverted axis's minimum to its maximum
    pub fn capped(self) -> Self {
        Self {
            min_x: self.min_x.min(self.max_x),
            min_y: self.min_y.min(self.max_y),
            ..self
        }
    }

    /// Clamp a center into the bounds.
    ///
    /// Written as max/min rather than `clamp` so a collapsed axis can never panic.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.max(self.min_x).min(self.max_x),
            p.y.max(self.min_y).min(self.max_y),
        )
    }

    /// Inclusive containment test
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// The bounds as a rectangle (useful for tests and debugging overlays)
    pub fn as_rect(&self) -> Rect {
        Rect {
            left: self.min_x,
            top: self.min_y,
            right: self.max_x,
            bottom: self.max_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::from_ltwh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_ltwh(10.0, 0.0, 10.0, 10.0);
        let c = Rect::from_ltwh(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_partial_overlap() {
        let a = Rect::from_ltwh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_ltwh(9.0, 9.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_zero_area_rect_never_overlaps() {
        let element = Rect::from_ltwh(0.0, 0.0, 100.0, 40.0);
        let line = Rect::from_ltwh(50.0, -10.0, 0.0, 60.0);
        let flat = Rect::from_ltwh(-10.0, 20.0, 120.0, 0.0);
        assert!(!element.overlaps(&line));
        assert!(!line.overlaps(&element));
        assert!(!element.overlaps(&flat));
    }

    #[test]
    fn test_uncapped_reports_inversion() {
        let raw = RoamBounds::uncapped(
            Vec2::new(80.0, 30.0),
            Vec2::new(100.0, 40.0),
            16.0,
            Vec2::new(40.0, 15.0),
            240.0,
        );
        assert!(raw.is_degenerate());
        assert!(!raw.capped().is_degenerate());
    }

    #[test]
    fn test_center_size_roundtrip() {
        let r = Rect::from_center_size(Vec2::new(50.0, 40.0), Vec2::new(20.0, 10.0));
        assert_eq!(r.top_left(), Vec2::new(40.0, 35.0));
        assert_eq!(r.center(), Vec2::new(50.0, 40.0));
        assert_eq!(r.size(), Vec2::new(20.0, 10.0));
    }

    #[test]
    fn test_bounds_intersect_viewport_and_roam() {
        let b = RoamBounds::compute(
            Vec2::new(800.0, 600.0),
            Vec2::new(100.0, 40.0),
            16.0,
            Vec2::new(120.0, 300.0),
            240.0,
        );
        // Viewport limits the left side, roam radius the right
        assert_eq!(b.min_x, 66.0);
        assert_eq!(b.max_x, 360.0);
        assert_eq!(b.min_y, 60.0);
        assert_eq!(b.max_y, 540.0);
    }

    #[test]
    fn test_tiny_viewport_collapses_to_point() {
        let b = RoamBounds::compute(
            Vec2::new(80.0, 30.0),
            Vec2::new(100.0, 40.0),
            16.0,
            Vec2::new(40.0, 15.0),
            240.0,
        );
        assert!(!b.is_degenerate());
        assert_eq!(b.min_x, b.max_x);
        assert_eq!(b.min_y, b.max_y);
        let p = b.clamp(Vec2::new(500.0, -500.0));
        assert!(b.contains(p));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let b = RoamBounds {
            min_x: 10.0,
            max_x: 20.0,
            min_y: 5.0,
            max_y: 6.0,
        };
        let once = b.clamp(Vec2::new(100.0, 0.0));
        assert_eq!(once, Vec2::new(20.0, 5.0));
        assert_eq!(b.clamp(once), once);
    }
}
