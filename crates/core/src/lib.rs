//! Core world module - pure, deterministic, and testable
//!
//! This crate holds the world the renderer looks at: the static tile grid and
//! the player moving through it. It has **zero dependencies** on terminals,
//! clocks, or I/O, so every rule here can be unit tested directly.
//!
//! # Module Structure
//!
//! - [`map`]: immutable row-major tile grid with checked lookups
//! - [`player`]: position/heading and the collision-checked per-frame update
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::{GridMap, InputSnapshot, Motion, PlayerState};
//!
//! let map = GridMap::default_layout();
//! let player = PlayerState::new(8.0, 8.0, 0.0);
//!
//! let input = InputSnapshot { forward: true, ..InputSnapshot::default() };
//! let next = player.update(&map, input, 0.1, Motion::default());
//!
//! // Angle 0 faces +y, so walking forward increases y.
//! assert!(next.y > player.y);
//! assert_eq!(next.x, player.x);
//! ```

pub mod map;
pub mod player;

pub use tui_raycaster_types as types;

// Re-export commonly used types for convenience
pub use map::{GridMap, MapError, DEFAULT_LAYOUT};
pub use player::{InputSnapshot, KeyState, Motion, PlayerState};
