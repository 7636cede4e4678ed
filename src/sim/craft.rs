//! The player's craft
//!
//! Steering is direct: while a direction is held the velocity on that axis is
//! exactly the held increment. Once every direction is released the craft
//! coasts and friction bleeds the velocity away.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::collision::Aabb;
use crate::settings::Tuning;

/// Discrete steering intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Axis index (0 = x, 1 = y) and sign of this direction
    #[inline]
    fn axis(self) -> (usize, f32) {
        match self {
            Direction::Left => (0, -1.0),
            Direction::Right => (0, 1.0),
            Direction::Up => (1, 1.0),
            Direction::Down => (1, -1.0),
        }
    }
}

/// Which way the craft (and its gun) points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// +1 for right, -1 for left
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCraft {
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing: Facing,
    /// Held direction per axis (last press wins)
    held: [Option<Direction>; 2],
    /// Speed increment requested per axis
    thrust: Vec2,
    width: f32,
    height: f32,
}

impl PlayerCraft {
    /// New craft at the world origin, facing right
    pub fn new(tuning: &Tuning) -> Self {
        let (width, height) = tuning.craft_extent();
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            facing: Facing::Right,
            held: [None, None],
            thrust: Vec2::ZERO,
            width,
            height,
        }
    }

    /// Start steering in `dir`, replacing whatever was held on that axis
    pub fn apply_intent(&mut self, dir: Direction, acceleration: f32) {
        let (axis, sign) = dir.axis();
        self.held[axis] = Some(dir);
        self.thrust[axis] = sign * acceleration;
        match dir {
            Direction::Left => self.facing = Facing::Left,
            Direction::Right => self.facing = Facing::Right,
            Direction::Up | Direction::Down => {}
        }
    }

    /// Stop steering in `dir`.
    ///
    /// Only clears the axis if `dir` is what that axis currently holds, so
    /// releasing a key that was already overridden does nothing. Residual
    /// velocity is kept.
    pub fn release_intent(&mut self, dir: Direction) {
        let (axis, _) = dir.axis();
        if self.held[axis] == Some(dir) {
            self.held[axis] = None;
            self.thrust[axis] = 0.0;
        }
    }

    /// Drop all held intents and momentum
    pub fn reset(&mut self) {
        self.pos = Vec2::ZERO;
        self.vel = Vec2::ZERO;
        self.held = [None, None];
        self.thrust = Vec2::ZERO;
    }

    #[inline]
    pub fn is_steering(&self) -> bool {
        self.held.iter().any(Option::is_some)
    }

    /// Advance one tick: steer or coast, move, then clamp into the world
    pub fn integrate(&mut self, world: &Bounds, friction: f32, snap: f32) {
        if self.is_steering() {
            for axis in 0..2 {
                if self.held[axis].is_some() {
                    self.vel[axis] = self.thrust[axis];
                }
            }
        } else {
            self.vel *= friction;
            if self.vel.x.abs() < snap {
                self.vel.x = 0.0;
            }
            if self.vel.y.abs() < snap {
                self.vel.y = 0.0;
            }
        }

        self.pos = world.clamp(self.pos + self.vel);
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::new(self.pos, self.width, self.height)
    }
}
