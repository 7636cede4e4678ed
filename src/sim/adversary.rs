//! Wandering adversaries
//!
//! Each adversary drifts in a straight line and occasionally picks a fresh
//! random heading. Its speed is fixed at spawn; only the heading changes.
//! World edges reflect it like an invisible wall.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::collision::{Aabb, collide};
use super::sweep::{Tombstone, compact};
use crate::heading;
use crate::settings::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adversary {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Speed magnitude, used whenever a new heading is picked
    pub speed: f32,
    #[serde(skip)]
    dead: bool,
}

impl Tombstone for Adversary {
    fn is_dead(&self) -> bool {
        self.dead
    }
    fn kill(&mut self) {
        self.dead = true;
    }
}

/// Owns every live adversary, in spawn order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdversarySet {
    adversaries: Vec<Adversary>,
    world: Bounds,
    width: f32,
    height: f32,
    speed_min: f32,
    speed_max: f32,
    turn_chance: f32,
}

impl AdversarySet {
    pub fn new(tuning: &Tuning) -> Self {
        let (width, height) = tuning.adversary_extent();
        Self {
            adversaries: Vec::new(),
            world: Bounds::centered(tuning.world_width, tuning.world_height),
            width,
            height,
            speed_min: tuning.adversary_speed_min,
            speed_max: tuning.adversary_speed_max,
            turn_chance: tuning.adversary_turn_chance,
        }
    }

    /// Spawn at a random point with a random speed, initially stationary
    pub fn spawn(&mut self, id: u32, rng: &mut impl Rng) -> Vec2 {
        let pos = self.world.random_point(rng);
        let speed = rng.random_range(self.speed_min..=self.speed_max);
        self.spawn_at(id, pos, speed);
        log::debug!("Adversary {} spawned at {} (speed {:.4})", id, pos, speed);
        pos
    }

    /// Spawn at a known point with a known speed
    pub fn spawn_at(&mut self, id: u32, pos: Vec2, speed: f32) {
        self.adversaries.push(Adversary {
            id,
            pos,
            vel: Vec2::ZERO,
            speed,
            dead: false,
        });
    }

    /// Wander one tick: maybe turn, move, bounce off the world edges
    pub fn step(&mut self, rng: &mut impl Rng) {
        for a in &mut self.adversaries {
            // One trial per adversary per tick, even when it does not turn
            let roll: f32 = rng.random();
            if roll < self.turn_chance {
                let angle = rng.random_range(0.0..std::f32::consts::TAU);
                a.vel = heading(angle, a.speed);
            }

            a.pos += a.vel;
            self.world.reflect(&mut a.pos, &mut a.vel);
        }
    }

    /// Index of the first live adversary overlapping `bb`
    pub fn first_hit(&self, bb: &Aabb) -> Option<usize> {
        self.adversaries
            .iter()
            .position(|a| !a.dead && collide(bb, &self.bounding_box_of(a)))
    }

    /// Indices of every live adversary overlapping `bb`, in spawn order
    pub fn all_hits(&self, bb: &Aabb) -> Vec<usize> {
        self.adversaries
            .iter()
            .enumerate()
            .filter(|(_, a)| !a.dead && collide(bb, &self.bounding_box_of(a)))
            .map(|(i, _)| i)
            .collect()
    }

    /// Tombstone the adversary at `index`, returning its id.
    /// It stays in place until [`AdversarySet::sweep`].
    pub fn destroy(&mut self, index: usize) -> u32 {
        let a = &mut self.adversaries[index];
        a.kill();
        a.id
    }

    /// Remove tombstoned adversaries
    pub fn sweep(&mut self) -> usize {
        compact(&mut self.adversaries)
    }

    fn bounding_box_of(&self, a: &Adversary) -> Aabb {
        Aabb::new(a.pos, self.width, self.height)
    }

    pub fn get(&self, index: usize) -> Option<&Adversary> {
        self.adversaries.get(index)
    }

    pub fn len(&self) -> usize {
        self.adversaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adversaries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Adversary> {
        self.adversaries.iter()
    }

    pub fn world(&self) -> &Bounds {
        &self.world
    }
}
