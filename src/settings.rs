//! Game tuning
//!
//! Every gameplay constant can be overridden from a JSON document. Missing keys
//! fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What happens when the player craft touches an adversary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContactPolicy {
    /// Craft and adversaries pass through each other
    #[default]
    Ignore,
    /// Adversary is destroyed, craft loses a life and returns to the origin
    LoseLife,
}

/// Runtime-tunable gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,

    // === Player craft ===
    pub craft_size: f32,
    /// Sprite width / height, supplied by the renderer
    pub craft_aspect: f32,
    pub acceleration: f32,
    pub friction: f32,
    pub velocity_snap: f32,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_size: f32,
    pub screen_boundary: f32,

    // === Adversaries ===
    pub adversary_size: f32,
    /// Sprite width / height, supplied by the renderer
    pub adversary_aspect: f32,
    pub adversary_speed_min: f32,
    pub adversary_speed_max: f32,
    pub adversary_turn_chance: f32,

    // === Effects ===
    pub effect_frames: u32,
    /// Drawn size of an effect, passed through to the renderer
    pub effect_size: f32,

    // === Rules ===
    pub score_per_hit: u64,
    pub starting_lives: u8,
    pub contact_policy: ContactPolicy,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            craft_size: CRAFT_SIZE,
            craft_aspect: 1.0,
            acceleration: CRAFT_ACCELERATION,
            friction: CRAFT_FRICTION,
            velocity_snap: CRAFT_VELOCITY_SNAP,

            projectile_speed: PROJECTILE_SPEED,
            projectile_size: PROJECTILE_SIZE,
            screen_boundary: SCREEN_BOUNDARY,

            adversary_size: ADVERSARY_SIZE,
            adversary_aspect: 1.0,
            adversary_speed_min: ADVERSARY_SPEED_MIN,
            adversary_speed_max: ADVERSARY_SPEED_MAX,
            adversary_turn_chance: ADVERSARY_TURN_CHANCE,

            effect_frames: EFFECT_FRAMES,
            effect_size: EFFECT_SIZE,

            score_per_hit: SCORE_PER_HIT,
            starting_lives: STARTING_LIVES,
            contact_policy: ContactPolicy::Ignore,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("Invalid tuning in {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Replace values that would break the simulation with usable ones
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        fn positive(name: &str, value: &mut f32, fallback: f32) {
            if !(value.is_finite() && *value > 0.0) {
                log::warn!("{} = {} is not positive, using {}", name, value, fallback);
                *value = fallback;
            }
        }

        fn non_negative(name: &str, value: &mut f32, fallback: f32) {
            if !(value.is_finite() && *value >= 0.0) {
                log::warn!("{} = {} is not a finite non-negative number, using {}", name, value, fallback);
                *value = fallback;
            }
        }

        positive("world_width", &mut self.world_width, defaults.world_width);
        positive("world_height", &mut self.world_height, defaults.world_height);
        positive("craft_size", &mut self.craft_size, defaults.craft_size);
        positive("craft_aspect", &mut self.craft_aspect, 1.0);
        positive("acceleration", &mut self.acceleration, defaults.acceleration);
        non_negative("velocity_snap", &mut self.velocity_snap, defaults.velocity_snap);
        positive("projectile_speed", &mut self.projectile_speed, defaults.projectile_speed);
        positive("projectile_size", &mut self.projectile_size, defaults.projectile_size);
        positive("screen_boundary", &mut self.screen_boundary, defaults.screen_boundary);
        positive("adversary_size", &mut self.adversary_size, defaults.adversary_size);
        positive("adversary_aspect", &mut self.adversary_aspect, 1.0);
        non_negative("adversary_speed_min", &mut self.adversary_speed_min, defaults.adversary_speed_min);
        non_negative("adversary_speed_max", &mut self.adversary_speed_max, defaults.adversary_speed_max);
        positive("effect_size", &mut self.effect_size, defaults.effect_size);

        if !(self.friction.is_finite() && (0.0..1.0).contains(&self.friction)) {
            log::warn!("friction = {} outside [0, 1), using {}", self.friction, defaults.friction);
            self.friction = defaults.friction;
        }

        if !(0.0..=1.0).contains(&self.adversary_turn_chance) {
            log::warn!(
                "adversary_turn_chance = {} outside [0, 1], clamping",
                self.adversary_turn_chance
            );
            self.adversary_turn_chance = if self.adversary_turn_chance.is_nan() {
                defaults.adversary_turn_chance
            } else {
                self.adversary_turn_chance.clamp(0.0, 1.0)
            };
        }

        if self.adversary_speed_min > self.adversary_speed_max {
            log::warn!(
                "adversary speed range [{}, {}] is inverted, swapping",
                self.adversary_speed_min,
                self.adversary_speed_max
            );
            std::mem::swap(&mut self.adversary_speed_min, &mut self.adversary_speed_max);
        }

        if self.effect_frames == 0 {
            log::warn!("effect_frames = 0, using {}", defaults.effect_frames);
            self.effect_frames = defaults.effect_frames;
        }

        self
    }

    /// Craft bounding box width and height
    pub fn craft_extent(&self) -> (f32, f32) {
        (self.craft_size, self.craft_size / self.craft_aspect)
    }

    /// Adversary bounding box width and height
    pub fn adversary_extent(&self) -> (f32, f32) {
        (self.adversary_size, self.adversary_size / self.adversary_aspect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "friction": 0.9, "starting_lives": 5 }"#).unwrap();
        assert_eq!(tuning.friction, 0.9);
        assert_eq!(tuning.starting_lives, 5);
        assert_eq!(tuning.world_width, WORLD_WIDTH);
        assert_eq!(tuning.contact_policy, ContactPolicy::Ignore);
    }

    #[test]
    fn test_contact_policy_from_json() {
        let tuning = Tuning::from_json(r#"{ "contact_policy": "lose_life" }"#).unwrap();
        assert_eq!(tuning.contact_policy, ContactPolicy::LoseLife);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Tuning::from_json("{ friction: ").is_err());
    }

    #[test]
    fn test_zero_aspect_defaults_to_one() {
        let tuning = Tuning {
            craft_aspect: 0.0,
            adversary_aspect: -2.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.craft_aspect, 1.0);
        assert_eq!(tuning.adversary_aspect, 1.0);
        assert_eq!(tuning.craft_extent(), (CRAFT_SIZE, CRAFT_SIZE));
    }

    #[test]
    fn test_inverted_speed_range_swapped() {
        let tuning = Tuning {
            adversary_speed_min: 0.01,
            adversary_speed_max: 0.002,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.adversary_speed_min, 0.002);
        assert_eq!(tuning.adversary_speed_max, 0.01);
    }

    #[test]
    fn test_aspect_adjusts_height() {
        let tuning = Tuning {
            adversary_aspect: 2.0,
            ..Default::default()
        };
        let (w, h) = tuning.adversary_extent();
        assert_eq!(w, ADVERSARY_SIZE);
        assert!((h - ADVERSARY_SIZE / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load("/definitely/not/here/tuning.json");
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_non_finite_speed_range_falls_back() {
        // 1e39 overflows f32 and parses as infinity
        let tuning = Tuning::from_json(r#"{ "adversary_speed_max": 1e39 }"#).unwrap();
        assert_eq!(tuning.adversary_speed_max, ADVERSARY_SPEED_MAX);

        let tuning = Tuning {
            adversary_speed_min: f32::NAN,
            adversary_speed_max: f32::NEG_INFINITY,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.adversary_speed_min, ADVERSARY_SPEED_MIN);
        assert_eq!(tuning.adversary_speed_max, ADVERSARY_SPEED_MAX);

        let tuning = Tuning {
            adversary_speed_min: -0.5,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.adversary_speed_min, ADVERSARY_SPEED_MIN);
    }

    #[test]
    fn test_bad_sizes_and_speed_fall_back() {
        let tuning = Tuning {
            projectile_speed: 0.0,
            projectile_size: -1.0,
            craft_size: f32::NAN,
            adversary_size: -0.13,
            acceleration: f32::INFINITY,
            velocity_snap: -1.0,
            effect_size: 0.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.projectile_speed, PROJECTILE_SPEED);
        assert_eq!(tuning.projectile_size, PROJECTILE_SIZE);
        assert_eq!(tuning.craft_size, CRAFT_SIZE);
        assert_eq!(tuning.adversary_size, ADVERSARY_SIZE);
        assert_eq!(tuning.acceleration, CRAFT_ACCELERATION);
        assert_eq!(tuning.velocity_snap, CRAFT_VELOCITY_SNAP);
        assert_eq!(tuning.effect_size, EFFECT_SIZE);
    }

    #[test]
    fn test_sanitized_keeps_good_values() {
        let tuning = Tuning {
            projectile_speed: 0.08,
            adversary_speed_min: 0.0,
            adversary_speed_max: 0.0,
            velocity_snap: 0.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.projectile_speed, 0.08);
        assert_eq!(tuning.adversary_speed_min, 0.0);
        assert_eq!(tuning.adversary_speed_max, 0.0);
        assert_eq!(tuning.velocity_snap, 0.0);
    }
}
