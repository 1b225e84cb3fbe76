//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is then presented on a
//! [`Screen`]: the real terminal through crossterm, or an in-memory screen
//! for tests.
//!
//! Goals:
//! - Keep the world and the ray caster deterministic and testable
//! - Compose each frame without allocating
//! - Only re-emit the cells that changed since the previous frame

pub mod fb;
pub mod renderer;
pub mod screen;
pub mod view;

pub use tui_raycaster_core as core;
pub use tui_raycaster_engine as engine;
pub use tui_raycaster_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::{HeadlessScreen, Screen};
pub use view::{is_wall_glyph, Scene, SceneView};
