// Math utilities and helper functions

use glam::Vec2;

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle from its top-left corner and size
    pub fn from_origin(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Check horizontal overlap only (touching edges don't count)
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// Check AABB overlap (touching edges don't count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.overlaps_x(other) && self.top() < other.bottom() && self.bottom() > other.top()
    }

    /// Move the rectangle horizontally
    pub fn translate_x(&mut self, dx: f32) {
        self.x += dx;
    }
}
