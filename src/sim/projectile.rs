//! Player projectiles
//!
//! Projectiles fly horizontally in the direction the craft faced when it fired.
//! There is no fire-rate limit or ammo cap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::adversary::AdversarySet;
use super::collision::Aabb;
use super::craft::Facing;
use super::effect::EffectSet;
use super::sweep::{Tombstone, compact};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    /// Signed horizontal speed per tick
    pub speed: f32,
    #[serde(skip)]
    dead: bool,
}

impl Tombstone for Projectile {
    fn is_dead(&self) -> bool {
        self.dead
    }
    fn kill(&mut self) {
        self.dead = true;
    }
}

/// A projectile that destroyed an adversary this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub projectile: u32,
    pub adversary: u32,
    /// Projectile position when the hit was resolved
    pub pos: Vec2,
}

/// Owns every live projectile, in spawn order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileSet {
    projectiles: Vec<Projectile>,
    speed: f32,
    size: f32,
    screen_boundary: f32,
}

impl ProjectileSet {
    pub fn new(speed: f32, size: f32, screen_boundary: f32) -> Self {
        Self {
            projectiles: Vec::new(),
            speed: speed.abs(),
            size,
            screen_boundary,
        }
    }

    /// Fire a projectile from `origin` toward `facing`
    pub fn spawn(&mut self, id: u32, origin: Vec2, facing: Facing) {
        self.projectiles.push(Projectile {
            id,
            pos: origin,
            speed: self.speed * facing.sign(),
            dead: false,
        });
    }

    /// Advance all projectiles, resolve hits against `adversaries`, cull the
    /// ones that left the screen.
    ///
    /// Hits are resolved projectile-by-projectile in spawn order; each
    /// projectile takes out at most the first adversary (in spawn order) it
    /// overlaps. Every hit spawns one effect at the projectile and is returned
    /// so the caller can award score.
    pub fn step(&mut self, adversaries: &mut AdversarySet, effects: &mut EffectSet) -> Vec<Hit> {
        for p in &mut self.projectiles {
            p.pos.x += p.speed;
        }

        let size = self.size;
        let mut hits = Vec::new();
        for p in &mut self.projectiles {
            let bb = Aabb::square(p.pos, size);
            if let Some(target) = adversaries.first_hit(&bb) {
                let adversary = adversaries.destroy(target);
                p.kill();
                effects.spawn(p.pos);
                log::debug!("Projectile {} destroyed adversary {} at {}", p.id, adversary, p.pos);
                hits.push(Hit {
                    projectile: p.id,
                    adversary,
                    pos: p.pos,
                });
            }
        }

        let boundary = self.screen_boundary;
        for p in &mut self.projectiles {
            if !p.dead && (p.pos.x > boundary || p.pos.x < -boundary) {
                p.kill();
            }
        }

        compact(&mut self.projectiles);
        adversaries.sweep();
        hits
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    /// Side length of the square hit box
    pub fn size(&self) -> f32 {
        self.size
    }
}
