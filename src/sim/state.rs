//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]. The renderer only
//! ever reads it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::adversary::AdversarySet;
use super::bounds::Bounds;
use super::craft::{Facing, PlayerCraft};
use super::effect::EffectSet;
use super::projectile::ProjectileSet;
use crate::settings::Tuning;

/// Something that happened during the last tick, for audio/visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ProjectileFired { id: u32, pos: Vec2, facing: Facing },
    AdversarySpawned { id: u32, pos: Vec2 },
    /// `projectile` is `None` when the craft rammed it
    AdversaryDestroyed {
        id: u32,
        pos: Vec2,
        projectile: Option<u32>,
    },
    CraftHit { lives_left: u8 },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub world: Bounds,
    /// Single random stream for all adversary behaviour
    pub(crate) rng: Pcg32,
    pub score: u64,
    pub lives: u8,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub craft: PlayerCraft,
    pub projectiles: ProjectileSet,
    pub adversaries: AdversarySet,
    pub effects: EffectSet,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            world: Bounds::centered(tuning.world_width, tuning.world_height),
            score: 0,
            lives: tuning.starting_lives,
            time_ticks: 0,
            craft: PlayerCraft::new(&tuning),
            projectiles: ProjectileSet::new(
                tuning.projectile_speed,
                tuning.projectile_size,
                tuning.screen_boundary,
            ),
            adversaries: AdversarySet::new(&tuning),
            effects: EffectSet::new(tuning.effect_frames),
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID. Wraps after `u32::MAX`.
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Fire a projectile from the craft's current position and facing
    pub fn fire(&mut self) -> u32 {
        let id = self.next_entity_id();
        let pos = self.craft.position();
        let facing = self.craft.facing();
        self.projectiles.spawn(id, pos, facing);
        self.events.push(GameEvent::ProjectileFired { id, pos, facing });
        id
    }

    /// Spawn an adversary at a random point with a random speed
    pub fn spawn_adversary(&mut self) -> u32 {
        let id = self.next_entity_id();
        let pos = self.adversaries.spawn(id, &mut self.rng);
        self.events.push(GameEvent::AdversarySpawned { id, pos });
        id
    }

    /// Spawn an adversary at a chosen point with a chosen speed
    pub fn spawn_adversary_at(&mut self, pos: Vec2, speed: f32) -> u32 {
        let id = self.next_entity_id();
        let pos = self.world.clamp(pos);
        self.adversaries.spawn_at(id, pos, speed);
        self.events.push(GameEvent::AdversarySpawned { id, pos });
        id
    }
}
