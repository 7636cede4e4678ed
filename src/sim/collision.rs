//! Axis-aligned bounding box overlap
//!
//! Every hit test in the game (projectile vs adversary, craft vs adversary)
//! goes through [`collide`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A box described by its center and full width/height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Square box of side `size`
    pub fn square(center: Vec2, size: f32) -> Self {
        Self::new(center, size, size)
    }

    /// Bottom-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - Vec2::new(self.width, self.height) / 2.0
    }

    /// Top-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + Vec2::new(self.width, self.height) / 2.0
    }

    /// Same box moved to a new center
    #[inline]
    pub fn at(&self, center: Vec2) -> Self {
        Self { center, ..*self }
    }
}

/// True iff the boxes overlap on both axes.
///
/// Touching edges do not count: boxes exactly one combined half-extent apart
/// are disjoint. Exact float comparison, no epsilon.
#[inline]
pub fn collide(a: &Aabb, b: &Aabb) -> bool {
    let d = (a.center - b.center).abs();
    d.x < (a.width + b.width) / 2.0 && d.y < (a.height + b.height) / 2.0
}
