//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. The order of
//! the phases inside [`tick`] is part of the game rules: adversaries move
//! before projectiles test against them.

use serde::{Deserialize, Serialize};

use super::craft::Direction;
use super::state::{GameEvent, GameState};
use crate::settings::ContactPolicy;

/// A discrete player intent, already decoded from the input device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Pressed(Direction),
    Released(Direction),
    Fire,
    SpawnAdversary,
}

/// Input commands for a single tick, applied in arrival order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    for &event in &input.events {
        apply_input(state, event);
    }

    state.time_ticks += 1;

    // 1. Player craft
    state.craft.integrate(
        &state.world,
        state.tuning.friction,
        state.tuning.velocity_snap,
    );

    // 2. Adversaries wander
    state.adversaries.step(&mut state.rng);

    // 3. Projectiles fly and hit
    let hits = state
        .projectiles
        .step(&mut state.adversaries, &mut state.effects);
    for hit in hits {
        state.score += state.tuning.score_per_hit;
        state.events.push(GameEvent::AdversaryDestroyed {
            id: hit.adversary,
            pos: hit.pos,
            projectile: Some(hit.projectile),
        });
    }

    if state.tuning.contact_policy == ContactPolicy::LoseLife {
        resolve_craft_contact(state);
    }

    // 4. Effects
    state.effects.advance_all();
    state.effects.reap();

    log::trace!(
        "tick {}: craft={} projectiles={} adversaries={} effects={} score={}",
        state.time_ticks,
        state.craft.position(),
        state.projectiles.len(),
        state.adversaries.len(),
        state.effects.len(),
        state.score
    );
}

fn apply_input(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::Pressed(dir) => state.craft.apply_intent(dir, state.tuning.acceleration),
        InputEvent::Released(dir) => state.craft.release_intent(dir),
        InputEvent::Fire => {
            state.fire();
        }
        InputEvent::SpawnAdversary => {
            state.spawn_adversary();
        }
    }
}

/// Ram check: every adversary touching the craft is destroyed and the craft
/// loses one life (at most one per tick) and returns to the origin.
fn resolve_craft_contact(state: &mut GameState) {
    let bb = state.craft.bounding_box();
    let touching = state.adversaries.all_hits(&bb);
    if touching.is_empty() {
        return;
    }

    let pos = state.craft.position();
    for index in touching {
        let id = state.adversaries.destroy(index);
        state.effects.spawn(pos);
        state.events.push(GameEvent::AdversaryDestroyed {
            id,
            pos,
            projectile: None,
        });
    }
    state.adversaries.sweep();

    state.lives = state.lives.saturating_sub(1);
    state.craft.reset();
    state.events.push(GameEvent::CraftHit {
        lives_left: state.lives,
    });
    log::debug!("Craft hit at {}, {} lives left", pos, state.lives);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tuning;
    use crate::sim::craft::Facing;
    use glam::Vec2;

    fn input(events: &[InputEvent]) -> TickInput {
        TickInput {
            events: events.to_vec(),
        }
    }

    #[test]
    fn test_tick_counts() {
        let mut state = GameState::new(1, Tuning::default());
        tick(&mut state, &TickInput::default());
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 2);
    }

    #[test]
    fn test_fire_then_fly() {
        let mut state = GameState::new(1, Tuning::default());
        tick(&mut state, &input(&[InputEvent::Fire]));
        let p = state.projectiles.iter().next().unwrap();
        assert!((p.pos.x - state.tuning.projectile_speed).abs() < 1e-6);
        assert!(matches!(state.events[0], GameEvent::ProjectileFired { .. }));
    }

    #[test]
    fn test_events_cleared_each_tick() {
        let mut state = GameState::new(1, Tuning::default());
        tick(&mut state, &input(&[InputEvent::SpawnAdversary]));
        assert_eq!(state.events.len(), 1);
        tick(&mut state, &TickInput::default());
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_hit_awards_score_and_effect() {
        let mut state = GameState::new(1, Tuning::default());
        state.spawn_adversary_at(Vec2::new(0.1, 0.0), 0.0);
        tick(&mut state, &input(&[InputEvent::Fire]));

        assert_eq!(state.score, 10);
        assert!(state.adversaries.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.effects.len(), 1);
        // Spawned in phase 3, advanced once in phase 4
        assert_eq!(state.effects.iter().next().map(|e| e.frame), Some(1));
        assert!(state.events.iter().any(|e| matches!(
            e,
            GameEvent::AdversaryDestroyed {
                projectile: Some(_),
                ..
            }
        )));
    }

    #[test]
    fn test_hit_uses_advanced_projectile_position() {
        let mut state = GameState::new(5, Tuning::default());
        state.spawn_adversary_at(Vec2::new(0.15, 0.0), 0.0);
        tick(&mut state, &input(&[InputEvent::Fire]));
        // Projectile at 0.05, adversary at 0.15: gap 0.1 > (0.025 + 0.13) / 2
        assert_eq!(state.score, 0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_effect_lifecycle_in_ticks() {
        let mut state = GameState::new(1, Tuning::default());
        state.spawn_adversary_at(Vec2::new(0.05, 0.0), 0.0);
        tick(&mut state, &input(&[InputEvent::Fire]));
        assert_eq!(state.effects.len(), 1);

        // Frames 1..=9 are visible, the tick that reaches 10 drops it
        for _ in 0..8 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.effects.iter().next().map(|e| e.frame), Some(9));
        tick(&mut state, &TickInput::default());
        assert!(state.effects.is_empty());
    }

    #[test]
    fn test_steering_input() {
        let mut state = GameState::new(1, Tuning::default());
        tick(&mut state, &input(&[InputEvent::Pressed(Direction::Left)]));
        assert_eq!(state.craft.facing(), Facing::Left);
        assert!(state.craft.position().x < 0.0);

        tick(&mut state, &input(&[InputEvent::Released(Direction::Left)]));
        assert!(!state.craft.is_steering());
    }

    #[test]
    fn test_contact_ignored_by_default() {
        let mut state = GameState::new(1, Tuning::default());
        state.spawn_adversary_at(Vec2::ZERO, 0.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.lives, crate::consts::STARTING_LIVES);
        assert_eq!(state.adversaries.len(), 1);
    }

    #[test]
    fn test_contact_loses_life() {
        let tuning = Tuning {
            contact_policy: ContactPolicy::LoseLife,
            ..Default::default()
        };
        let mut state = GameState::new(1, tuning);
        state.craft.pos = Vec2::new(0.5, 0.5);
        state.spawn_adversary_at(Vec2::new(0.5, 0.5), 0.0);
        state.spawn_adversary_at(Vec2::new(0.52, 0.5), 0.0);
        state.spawn_adversary_at(Vec2::new(-0.5, -0.5), 0.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.lives, crate::consts::STARTING_LIVES - 1);
        assert_eq!(state.craft.position(), Vec2::ZERO);
        assert_eq!(state.adversaries.len(), 1);
        assert_eq!(state.effects.len(), 2);
        assert_eq!(state.score, 0);
        assert!(state
            .events
            .contains(&GameEvent::CraftHit { lives_left: crate::consts::STARTING_LIVES - 1 }));
    }

    #[test]
    fn test_lives_saturate_at_zero() {
        let tuning = Tuning {
            contact_policy: ContactPolicy::LoseLife,
            starting_lives: 1,
            ..Default::default()
        };
        let mut state = GameState::new(1, tuning);
        for _ in 0..3 {
            state.spawn_adversary_at(Vec2::ZERO, 0.0);
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, Tuning::default());
        let mut state2 = GameState::new(99999, Tuning::default());

        let inputs = [
            input(&[InputEvent::SpawnAdversary, InputEvent::SpawnAdversary]),
            input(&[InputEvent::Pressed(Direction::Up), InputEvent::Fire]),
            input(&[InputEvent::Released(Direction::Up)]),
            TickInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        let a: Vec<Vec2> = state1.adversaries.iter().map(|a| a.pos).collect();
        let b: Vec<Vec2> = state2.adversaries.iter().map(|a| a.pos).collect();
        assert_eq!(a, b);
        assert_eq!(state1.craft.position(), state2.craft.position());
    }
}
