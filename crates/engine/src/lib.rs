//! Rendering engine - ray caster, shader and frame timing
//!
//! Pure, allocation-free per-frame computation over a [`core::GridMap`] and a
//! [`core::PlayerState`]. Nothing here touches the terminal.
//!
//! # Module Structure
//!
//! - [`raycast`]: per-column ray marching, wall hits and seam detection
//! - [`shade`]: distance shading, floor gradient and ceiling/floor split
//! - [`clock`]: elapsed-time clock, FPS and frame pacing
//! - [`config`]: `RAYCAST_*` environment configuration
//! - [`telemetry`]: optional JSONL frame log
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::{GridMap, PlayerState};
//! use tui_raycaster_engine::{cast_columns, shade_column, RayConfig};
//! use tui_raycaster_types::HitKind;
//!
//! let map = GridMap::default_layout();
//! let player = PlayerState::new(8.0, 8.0, 0.0);
//! let cfg = RayConfig::default();
//!
//! let hits = cast_columns(&map, &player, 80, &cfg);
//! assert_eq!(hits.len(), 80);
//! assert!(hits.iter().all(|h| h.kind == HitKind::Wall));
//!
//! let column = shade_column(&hits[0], cfg.max_depth, 24);
//! assert_eq!(column.glyph_at(0), ' ');
//! ```

pub mod clock;
pub mod config;
pub mod raycast;
pub mod shade;
pub mod telemetry;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use clock::{fps, FrameClock, FramePacer};
pub use config::Config;
pub use raycast::{cast_columns, cast_columns_into, cast_ray, ray_angle, RayConfig, RayHit};
pub use shade::{
    floor_glyph, floor_level, shade_column, wall_glyph, wall_level, Band, ColumnBands, ColumnShade,
};
pub use telemetry::{FrameLog, FrameRecord, HitSummary};
