//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (map logic, ray casting, terminal rendering).
//!
//! # Coordinate Convention
//!
//! Positions are continuous `(x, y)` pairs in map-cell units. A heading `angle`
//! (radians) points along `(sin(angle), cos(angle))`, so angle 0 looks towards
//! increasing `y` (down the map as drawn) and positive rotation turns towards
//! increasing `x`.
//!
//! # Rendering Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FOV` | π/4 | Angular width swept across the screen |
//! | `DEFAULT_MAX_DEPTH` | 16.0 | Longest ray, in map units |
//! | `DEFAULT_STEP_SIZE` | 0.1 | Ray march increment |
//! | `BOUNDARY_ANGLE` | 0.01 | Corner alignment threshold (radians) |
//!
//! # Movement Constants
//!
//! - `DEFAULT_MOVE_SPEED`: 5.0 map units per second
//! - `DEFAULT_TURN_SPEED`: 0.8 radians per second
//!
//! # Examples
//!
//! ```
//! use tui_raycaster_types::{TileKind, MoveKey, WALL_GLYPHS};
//!
//! assert_eq!(TileKind::from_char('#'), TileKind::Wall);
//! assert_eq!(TileKind::from_char('.'), TileKind::Empty);
//! assert_eq!(MoveKey::ALL.len(), 4);
//! assert_eq!(WALL_GLYPHS[0], '█');
//! ```

use std::f32::consts::PI;

/// Default field of view (45°).
pub const DEFAULT_FOV: f32 = PI / 4.0;

/// Default maximum render distance in map units.
pub const DEFAULT_MAX_DEPTH: f32 = 16.0;

/// Default ray march increment in map units.
pub const DEFAULT_STEP_SIZE: f32 = 0.1;

/// Smallest accepted march increment; bounds the steps a single ray can take.
pub const MIN_STEP_SIZE: f32 = 0.001;

/// A wall hit is a seam when the ray is within this many radians of a nearby corner.
pub const BOUNDARY_ANGLE: f32 = 0.01;

/// Number of nearest cell corners examined for seam detection.
pub const BOUNDARY_CORNERS: usize = 3;

/// Forward/backward speed in map units per second.
pub const DEFAULT_MOVE_SPEED: f32 = 5.0;

/// Rotation speed in radians per second.
pub const DEFAULT_TURN_SPEED: f32 = 0.8;

/// Frame pacing target.
pub const DEFAULT_TARGET_FPS: u32 = 60;

/// Synthetic release timeout for terminals that never report key releases.
pub const DEFAULT_KEY_RELEASE_MS: u64 = 120;

/// Wall shade glyphs, nearest (densest) first.
///
/// Selected by distance against `max_depth / 4`, `/ 3`, `/ 2` and `/ 1`.
pub const WALL_GLYPHS: [char; 4] = ['█', '▛', '▒', '░'];

/// Floor gradient glyphs, nearest (densest) first.
pub const FLOOR_GLYPHS: [char; 4] = ['#', 'x', '.', '-'];

/// Upper bounds on the normalized floor depth `b` for each of [`FLOOR_GLYPHS`].
pub const FLOOR_THRESHOLDS: [f32; 4] = [0.25, 0.5, 0.75, 0.9];

/// Blank cell used for sky, seams and anything out of range.
pub const BLANK: char = ' ';

/// Mini-map marker for the player's cell.
pub const PLAYER_MARKER: char = 'P';

/// A tile on the grid map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileKind {
    #[default]
    Empty,
    Wall,
}

impl TileKind {
    /// Parse a layout character: `#` is a wall, anything else is empty.
    pub fn from_char(ch: char) -> Self {
        if ch == '#' {
            TileKind::Wall
        } else {
            TileKind::Empty
        }
    }

    /// Character used when drawing the tile on the mini-map.
    pub fn as_char(&self) -> char {
        match self {
            TileKind::Empty => '.',
            TileKind::Wall => '#',
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, TileKind::Wall)
    }
}

/// What stopped a ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitKind {
    /// The ray entered a wall cell.
    Wall,
    /// The ray left the map or ran out of range without meeting a wall.
    OutOfBounds,
}

/// The four held-key inputs the simulation samples each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Forward,
    Backward,
    RotateLeft,
    RotateRight,
}

impl MoveKey {
    pub const ALL: [MoveKey; 4] = [
        MoveKey::Forward,
        MoveKey::Backward,
        MoveKey::RotateLeft,
        MoveKey::RotateRight,
    ];

    /// Stable slot index, used by fixed-size key tables.
    pub fn index(&self) -> usize {
        match self {
            MoveKey::Forward => 0,
            MoveKey::Backward => 1,
            MoveKey::RotateLeft => 2,
            MoveKey::RotateRight => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_tables_are_ordered_dense_to_sparse() {
        assert_eq!(WALL_GLYPHS, ['█', '▛', '▒', '░']);
        assert_eq!(FLOOR_GLYPHS, ['#', 'x', '.', '-']);
        assert!(FLOOR_THRESHOLDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn tile_chars_round_trip_through_layout_syntax() {
        assert_eq!(TileKind::from_char(TileKind::Wall.as_char()), TileKind::Wall);
        assert_eq!(TileKind::from_char(TileKind::Empty.as_char()), TileKind::Empty);
        assert_eq!(TileKind::from_char(' '), TileKind::Empty);
        assert_eq!(TileKind::from_char('P'), TileKind::Empty);
    }

    #[test]
    fn move_key_indices_are_unique() {
        for (i, key) in MoveKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn default_rendering_constants() {
        assert!((DEFAULT_FOV - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        assert_eq!(DEFAULT_MAX_DEPTH, 16.0);
        assert_eq!(DEFAULT_STEP_SIZE, 0.1);
        assert_eq!(BOUNDARY_ANGLE, 0.01);
        assert_eq!(BOUNDARY_CORNERS, 3);
    }
}
