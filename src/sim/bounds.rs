//! World rectangle and the two ways entities respect it
//!
//! The craft is clamped into the world; adversaries bounce off its edges.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle `[min.x, max.x] x [min.y, max.y]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Rectangle of the given size centered on the origin
    pub fn centered(width: f32, height: f32) -> Self {
        let half = Vec2::new(width / 2.0, height / 2.0);
        Self { min: -half, max: half }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Inclusive containment test
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Clamp a point into the rectangle per axis
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }

    /// Bounce a moving point off the rectangle edges.
    ///
    /// Each axis that left the rectangle is pinned to the crossed edge and its
    /// velocity component is negated, so the speed is unchanged.
    pub fn reflect(&self, pos: &mut Vec2, vel: &mut Vec2) {
        if pos.x < self.min.x {
            pos.x = self.min.x;
            vel.x = -vel.x;
        } else if pos.x > self.max.x {
            pos.x = self.max.x;
            vel.x = -vel.x;
        }

        if pos.y < self.min.y {
            pos.y = self.min.y;
            vel.y = -vel.y;
        } else if pos.y > self.max.y {
            pos.y = self.max.y;
            vel.y = -vel.y;
        }
    }

    /// Uniformly random point inside the rectangle
    pub fn random_point(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random_range(self.min.x..=self.max.x),
            rng.random_range(self.min.y..=self.max.y),
        )
    }
}
