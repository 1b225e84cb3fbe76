//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a key stays held while press/repeat events keep arriving and is released
//! once none has been seen for `release_timeout_ms`. The first genuine release
//! event switches the timeout off for the rest of the session.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::core::KeyState;
use crate::map::key_for;
use crate::types::{MoveKey, DEFAULT_KEY_RELEASE_MS};

#[derive(Debug, Clone, Copy, Default)]
struct KeyTrack {
    held: bool,
    last_seen_ms: u64,
}

/// Tracks which movement keys are currently held.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    keys: [KeyTrack; 4],
    release_timeout_ms: Option<u64>,
    saw_release: bool,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::with_release_timeout(Some(DEFAULT_KEY_RELEASE_MS))
    }

    /// `None` trusts the terminal to report every release.
    pub fn with_release_timeout(release_timeout_ms: Option<u64>) -> Self {
        Self {
            keys: [KeyTrack::default(); 4],
            release_timeout_ms,
            saw_release: false,
        }
    }

    /// Active timeout, if releases are still being synthesized.
    pub fn release_timeout_ms(&self) -> Option<u64> {
        if self.saw_release {
            None
        } else {
            self.release_timeout_ms
        }
    }

    /// Press or auto-repeat of `key`.
    pub fn press(&mut self, key: MoveKey, now_ms: u64) {
        let track = &mut self.keys[key.index()];
        track.held = true;
        track.last_seen_ms = now_ms;
    }

    pub fn release(&mut self, key: MoveKey) {
        self.keys[key.index()].held = false;
    }

    pub fn release_all(&mut self) {
        for track in &mut self.keys {
            track.held = false;
        }
    }

    /// Feed one terminal key event. Returns whether it was a movement key.
    pub fn handle_event(&mut self, event: KeyEvent, now_ms: u64) -> bool {
        let Some(key) = key_for(event) else {
            return false;
        };
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(key, now_ms),
            KeyEventKind::Release => {
                self.saw_release = true;
                self.release(key);
            }
        }
        true
    }

    /// Expire keys whose last event is older than the release timeout.
    pub fn update(&mut self, now_ms: u64) {
        let Some(timeout) = self.release_timeout_ms() else {
            return;
        };
        for track in &mut self.keys {
            if track.held && now_ms.saturating_sub(track.last_seen_ms) > timeout {
                track.held = false;
            }
        }
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyState for HeldKeys {
    fn is_held(&self, key: MoveKey) -> bool {
        self.keys[key.index()].held
    }
}
