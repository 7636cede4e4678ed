//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod adversary;
pub mod bounds;
pub mod collision;
pub mod craft;
pub mod effect;
pub mod projectile;
pub mod state;
pub mod sweep;
pub mod tick;

pub use adversary::{Adversary, AdversarySet};
pub use bounds::Bounds;
pub use collision::{Aabb, collide};
pub use craft::{Direction, Facing, PlayerCraft};
pub use effect::{Effect, EffectSet};
pub use projectile::{Hit, Projectile, ProjectileSet};
pub use state::{GameEvent, GameState};
pub use tick::{InputEvent, TickInput, tick};
