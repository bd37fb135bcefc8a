//! Axis-aligned rectangles for walls, actors and the cherry
//!
//! A rectangle is defined in screen space (y grows downward) by:
//! - x, y: top-left corner
//! - w, h: extent to the right and downward

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with integer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` anchored at `pos`
    pub const fn square(pos: IVec2, size: i32) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    #[inline]
    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Exclusive right edge
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Exclusive bottom edge
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Center point, rounded toward the origin
    #[inline]
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Half-open containment: the left/top edges are inside, right/bottom are not
    pub fn contains(&self, point: IVec2) -> bool {
        !self.is_empty()
            && point.x >= self.x
            && point.x < self.right()
            && point.y >= self.y
            && point.y < self.bottom()
    }

    /// Strict overlap test. Shared edges and zero-area rectangles never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Same rectangle moved by `delta`
    pub fn translated(&self, delta: IVec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.w, self.h)
    }
}
