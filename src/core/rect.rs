// Axis-aligned rectangle in screen space (y grows downward)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle described by its top-left corner and size
///
/// Edge setters move the rectangle without resizing it, which is how
/// contact resolution pushes the actor flush against an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub position: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    fn center_x(&self) -> f32 {
        self.position.x + self.size.x * 0.5
    }

    fn center_y(&self) -> f32 {
        self.position.y + self.size.y * 0.5
    }

    /// Move so the left edge sits at `x`
    pub fn set_left(&mut self, x: f32) {
        self.position.x = x;
    }

    /// Move so the right edge sits at `x`
    pub fn set_right(&mut self, x: f32) {
        self.position.x = x - self.size.x;
    }

    /// Move so the top edge sits at `y`
    pub fn set_top(&mut self, y: f32) {
        self.position.y = y;
    }

    /// Move so the bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.position.y = y - self.size.y;
    }

    // Sample points used by contact classification

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.top())
    }

    pub fn mid_top(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.top())
    }

    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.top())
    }

    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.bottom())
    }

    pub fn mid_bottom(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.bottom())
    }

    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    pub fn mid_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.center_y())
    }

    pub fn mid_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.center_y())
    }

    /// Inclusive point test: points on an edge count as inside
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 60.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 80.0);
    }

    #[test]
    fn test_edge_setters_keep_size() {
        let mut rect = Rect::new(0.0, 0.0, 30.0, 60.0);

        rect.set_right(100.0);
        assert_eq!(rect.left(), 70.0);
        rect.set_bottom(400.0);
        assert_eq!(rect.top(), 340.0);
        rect.set_left(5.0);
        rect.set_top(6.0);

        assert_eq!(rect.position, Vec2::new(5.0, 6.0));
        assert_eq!(rect.size, Vec2::new(30.0, 60.0));
    }

    #[test]
    fn test_sample_points() {
        let rect = Rect::new(0.0, 0.0, 30.0, 60.0);
        assert_eq!(rect.mid_top(), Vec2::new(15.0, 0.0));
        assert_eq!(rect.mid_bottom(), Vec2::new(15.0, 60.0));
        assert_eq!(rect.mid_left(), Vec2::new(0.0, 30.0));
        assert_eq!(rect.mid_right(), Vec2::new(30.0, 30.0));
        assert_eq!(rect.bottom_right(), Vec2::new(30.0, 60.0));
    }

    #[test]
    fn test_contains_point_is_inclusive() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_point(Vec2::new(0.0, 0.0)));
        assert!(rect.contains_point(Vec2::new(10.0, 10.0)));
        assert!(rect.contains_point(Vec2::new(5.0, 10.0)));
        assert!(!rect.contains_point(Vec2::new(10.01, 5.0)));
    }

    #[test]
    fn test_touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        let beside = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&beside));
    }

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }
}
