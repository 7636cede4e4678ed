//! Nebula Strike - A 2D arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (craft, projectiles, adversaries, effects)
//! - `session`: Input buffering and fixed-timestep driver for the platform layer
//! - `settings`: Data-driven game tuning

pub mod session;
pub mod settings;
pub mod sim;

pub use session::{Session, Snapshot};
pub use settings::{ContactPolicy, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick interval in seconds (~60 Hz)
    pub const SIM_DT: f32 = 0.016;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions (world spans [-W/2, W/2] x [-H/2, H/2])
    pub const WORLD_WIDTH: f32 = 2.0;
    pub const WORLD_HEIGHT: f32 = 2.0;

    /// Player craft
    pub const CRAFT_SIZE: f32 = 0.1;
    /// Speed increment applied per held direction
    pub const CRAFT_ACCELERATION: f32 = 0.01;
    /// Per-tick velocity multiplier while no direction is held
    pub const CRAFT_FRICTION: f32 = 0.95;
    /// Residual velocity below this snaps to zero
    pub const CRAFT_VELOCITY_SNAP: f32 = 0.001;

    /// Projectiles
    pub const PROJECTILE_SPEED: f32 = 0.05;
    pub const PROJECTILE_SIZE: f32 = 0.025;
    /// Projectiles beyond |x| > this are culled
    pub const SCREEN_BOUNDARY: f32 = 1.0;

    /// Adversaries
    pub const ADVERSARY_SIZE: f32 = 0.13;
    pub const ADVERSARY_SPEED_MIN: f32 = 0.001;
    pub const ADVERSARY_SPEED_MAX: f32 = 0.005;
    /// Chance per tick that an adversary picks a new heading
    pub const ADVERSARY_TURN_CHANCE: f32 = 0.05;

    /// Explosion effect
    pub const EFFECT_FRAMES: u32 = 10;
    pub const EFFECT_SIZE: f32 = 0.1;

    /// Scoring and lives
    pub const SCORE_PER_HIT: u64 = 10;
    pub const STARTING_LIVES: u8 = 3;
}

/// Velocity of the given magnitude pointing along `angle` (radians)
#[inline]
pub fn heading(angle: f32, magnitude: f32) -> Vec2 {
    Vec2::new(magnitude * angle.cos(), magnitude * angle.sin())
}
