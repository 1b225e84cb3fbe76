//! Player module - position, heading and the per-frame update
//!
//! The update is a pure function of `(state, input, dt)`: it returns the next
//! state and never touches clocks or terminals. Each proposed step is checked
//! against the map and simply dropped when it would end inside a wall.

use std::f32::consts::TAU;

use crate::map::{cell_of, GridMap};
use crate::types::{MoveKey, DEFAULT_MOVE_SPEED, DEFAULT_TURN_SPEED};

/// Query for "is this key currently held" (a level, not an edge).
pub trait KeyState {
    fn is_held(&self, key: MoveKey) -> bool;
}

/// Held-key snapshot sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub forward: bool,
    pub backward: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

impl InputSnapshot {
    /// Sample all four movement keys from a key-state source.
    pub fn sample(keys: &impl KeyState) -> Self {
        Self {
            forward: keys.is_held(MoveKey::Forward),
            backward: keys.is_held(MoveKey::Backward),
            rotate_left: keys.is_held(MoveKey::RotateLeft),
            rotate_right: keys.is_held(MoveKey::RotateRight),
        }
    }

    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.rotate_left || self.rotate_right)
    }
}

impl KeyState for InputSnapshot {
    fn is_held(&self, key: MoveKey) -> bool {
        match key {
            MoveKey::Forward => self.forward,
            MoveKey::Backward => self.backward,
            MoveKey::RotateLeft => self.rotate_left,
            MoveKey::RotateRight => self.rotate_right,
        }
    }
}

/// Movement rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Map units per second.
    pub move_speed: f32,
    /// Radians per second.
    pub turn_speed: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            turn_speed: DEFAULT_TURN_SPEED,
        }
    }
}

/// Player position (map units) and heading (radians, unbounded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

impl PlayerState {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self { x, y, angle }
    }

    /// Integer cell the player stands in.
    pub fn cell(&self) -> (i32, i32) {
        cell_of(self.x, self.y)
    }

    /// Unit view direction `(sin(angle), cos(angle))`.
    pub fn direction(&self) -> (f32, f32) {
        (self.angle.sin(), self.angle.cos())
    }

    /// Heading wrapped into `[0, 2π)` for display.
    pub fn heading(&self) -> f32 {
        let h = self.angle.rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs.
        if h >= TAU {
            0.0
        } else {
            h
        }
    }

    /// Apply a translation unless it would end inside a wall (or off the map).
    ///
    /// Returns whether the step was taken.
    pub fn try_move(&mut self, map: &GridMap, dx: f32, dy: f32) -> bool {
        let nx = self.x + dx;
        let ny = self.y + dy;
        if map.blocks(nx, ny) {
            return false;
        }
        self.x = nx;
        self.y = ny;
        true
    }

    /// Advance one frame.
    ///
    /// Rotation is applied first, then forward and backward steps along the
    /// new heading, each checked independently.
    pub fn update(mut self, map: &GridMap, input: InputSnapshot, dt: f32, motion: Motion) -> Self {
        if input.rotate_left {
            self.angle -= motion.turn_speed * dt;
        }
        if input.rotate_right {
            self.angle += motion.turn_speed * dt;
        }

        let (sx, sy) = self.direction();
        let step = motion.move_speed * dt;
        if input.forward {
            self.try_move(map, sx * step, sy * step);
        }
        if input.backward {
            self.try_move(map, -sx * step, -sy * step);
        }
        self
    }
}
