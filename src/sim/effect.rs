//! Frame-indexed explosion effects
//!
//! An effect is purely visual: the core counts its frames and drops it once
//! the animation is done. Which texture to draw for a frame is the renderer's
//! business.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::sweep::{Tombstone, compact};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    pub pos: Vec2,
    /// Frames consumed so far, 0..=total_frames
    pub frame: u32,
    pub finished: bool,
}

impl Tombstone for Effect {
    fn is_dead(&self) -> bool {
        self.finished
    }
    fn kill(&mut self) {
        self.finished = true;
    }
}

/// Active effects, in spawn order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectSet {
    effects: Vec<Effect>,
    total_frames: u32,
}

impl EffectSet {
    pub fn new(total_frames: u32) -> Self {
        Self {
            effects: Vec::new(),
            total_frames: total_frames.max(1),
        }
    }

    pub fn spawn(&mut self, pos: Vec2) {
        self.effects.push(Effect {
            pos,
            frame: 0,
            finished: false,
        });
    }

    /// Consume one frame of every unfinished effect
    pub fn advance_all(&mut self) {
        for e in &mut self.effects {
            if e.finished {
                continue;
            }
            e.frame += 1;
            if e.frame >= self.total_frames {
                e.frame = self.total_frames;
                e.kill();
            }
        }
    }

    /// Drop finished effects, returning how many went
    pub fn reap(&mut self) -> usize {
        compact(&mut self.effects)
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }
}
