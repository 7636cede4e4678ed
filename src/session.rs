//! Boundary between the simulation and the platform layer
//!
//! The window/input collaborator reports discrete intents as they happen and
//! calls [`Session::advance`] (or [`Session::step`]) on its own clock. The
//! renderer reads a [`Snapshot`] after each frame.

use glam::Vec2;
use serde::Serialize;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::settings::Tuning;
use crate::sim::{Aabb, Direction, Facing, GameEvent, GameState, InputEvent, TickInput, tick};

/// Player craft as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CraftView {
    pub pos: Vec2,
    pub facing: Facing,
    pub bounding_box: Aabb,
}

/// An effect and the animation frame it is on
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectView {
    pub pos: Vec2,
    pub frame: u32,
    pub size: f32,
}

/// Read-only view of everything the renderer draws
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub craft: CraftView,
    pub projectiles: Vec<Vec2>,
    pub adversaries: Vec<Vec2>,
    pub effects: Vec<EffectView>,
    pub score: u64,
    pub lives: u8,
}

/// Game instance holding all state
pub struct Session {
    state: GameState,
    input: TickInput,
    accumulator: f32,
    /// Events from every tick run by the last `step`/`advance` call
    events: Vec<GameEvent>,
}

impl Session {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        log::info!("Session starting (seed {:#x})", seed);
        Self {
            state: GameState::new(seed, tuning),
            input: TickInput::default(),
            accumulator: 0.0,
            events: Vec::new(),
        }
    }

    pub fn on_direction_pressed(&mut self, dir: Direction) {
        self.input.push(InputEvent::Pressed(dir));
    }

    pub fn on_direction_released(&mut self, dir: Direction) {
        self.input.push(InputEvent::Released(dir));
    }

    pub fn on_fire_triggered(&mut self) {
        self.input.push(InputEvent::Fire);
    }

    pub fn on_spawn_adversary_triggered(&mut self) {
        self.input.push(InputEvent::SpawnAdversary);
    }

    /// Run exactly one tick, consuming every intent buffered since the last one
    pub fn step(&mut self) {
        self.events.clear();
        self.run_tick();
    }

    fn run_tick(&mut self) {
        let input = std::mem::take(&mut self.input);
        tick(&mut self.state, &input);
        self.events.extend_from_slice(&self.state.events);
    }

    /// Run as many fixed ticks as `elapsed` seconds of real time cover.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        let dt = elapsed.clamp(0.0, 0.1);
        self.accumulator += dt;
        self.events.clear();

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.run_tick();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = &self.state;
        let effect_size = state.tuning.effect_size;
        Snapshot {
            tick: state.time_ticks,
            craft: CraftView {
                pos: state.craft.position(),
                facing: state.craft.facing(),
                bounding_box: state.craft.bounding_box(),
            },
            projectiles: state.projectiles.iter().map(|p| p.pos).collect(),
            adversaries: state.adversaries.iter().map(|a| a.pos).collect(),
            effects: state
                .effects
                .iter()
                .map(|e| EffectView {
                    pos: e.pos,
                    frame: e.frame,
                    size: effect_size,
                })
                .collect(),
            score: state.score,
            lives: state.lives,
        }
    }

    /// Events raised by every tick the last [`Session::step`] or
    /// [`Session::advance`] call ran, in tick order
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted setups (tests, demos)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
