//! Axis-aligned rectangle geometry for paddles and the ball
//!
//! Screen convention: origin at the top-left, y grows downward.
//! - pos: top-left corner
//! - size: width and height

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with continuous coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of `size` whose center sits exactly on `center`
    pub fn centered_at(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size * 0.5,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y * 0.5
    }

    /// Move horizontally so the left edge sits at `x`
    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    /// Move horizontally so the right edge sits at `x`
    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
    }

    /// Move vertically so the top edge sits at `y`
    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y;
    }

    /// Move vertically so the bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Strict overlap: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 14.0, 90.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 24.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 110.0);
        assert_eq!(r.center_y(), 65.0);
    }

    #[test]
    fn test_centered_at() {
        let r = Rect::centered_at(Vec2::new(400.0, 300.0), Vec2::splat(14.0));
        assert_eq!(r.pos, Vec2::new(393.0, 293.0));
        assert_eq!(r.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_edge_setters() {
        let mut r = Rect::new(0.0, 0.0, 14.0, 14.0);
        r.set_right(100.0);
        assert_eq!(r.right(), 100.0);
        r.set_left(44.0);
        assert_eq!(r.left(), 44.0);
        r.set_bottom(600.0);
        assert_eq!(r.bottom(), 600.0);
        r.set_top(0.0);
        assert_eq!(r.top(), 0.0);
    }

    #[test]
    fn test_overlap() {
        let paddle = Rect::new(30.0, 100.0, 14.0, 90.0);

        // Ball straddling the paddle's right edge
        assert!(Rect::new(40.0, 140.0, 14.0, 14.0).overlaps(&paddle));
        // Touching edges only
        assert!(!Rect::new(44.0, 140.0, 14.0, 14.0).overlaps(&paddle));
        assert!(!Rect::new(35.0, 190.0, 14.0, 14.0).overlaps(&paddle));
        // Well clear
        assert!(!Rect::new(300.0, 300.0, 14.0, 14.0).overlaps(&paddle));
        // Symmetric
        let ball = Rect::new(40.0, 95.0, 14.0, 14.0);
        assert_eq!(ball.overlaps(&paddle), paddle.overlaps(&ball));
    }
}
