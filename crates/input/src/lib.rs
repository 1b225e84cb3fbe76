//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events onto the four movement keys and turns the stream of
//! press/repeat/release events into the level-style "is this key held" query
//! the simulation samples once per frame (including terminals that never send
//! key-release events).

pub mod handler;
pub mod map;
pub mod source;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use handler::HeldKeys;
pub use map::{key_for, should_quit};
pub use source::{CrosstermEvents, EventSource, ScriptedEvents};
