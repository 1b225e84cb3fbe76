//! Key event sources.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent};

/// Something that can be polled for key events.
pub trait EventSource {
    /// Wait up to `timeout` for the next key event.
    fn next_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;
}

/// Reads the real terminal through crossterm.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}

/// Replays a fixed list of events without waiting.
///
/// A gap ends the current wait with no event, which lets a script span
/// several frames.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<Option<KeyEvent>>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            queue: events.into_iter().map(Some).collect(),
        }
    }

    pub fn push(&mut self, event: KeyEvent) {
        self.queue.push_back(Some(event));
    }

    pub fn push_gap(&mut self) {
        self.queue.push_back(None);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl EventSource for ScriptedEvents {
    fn next_key(&mut self, _timeout: Duration) -> Result<Option<KeyEvent>> {
        Ok(self.queue.pop_front().flatten())
    }
}
