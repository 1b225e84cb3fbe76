//! Per-frame pipeline and the frame loop.
//!
//! `App` owns the world, the reusable ray buffer and the framebuffer. Each
//! frame it advances the player, casts every column, composes the frame and
//! hands it to a [`Screen`]. [`run_loop`] drives that against an event source
//! until a quit key arrives.

use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::KeyEventKind;

use crate::core::{GridMap, InputSnapshot, PlayerState};
use crate::engine::{
    cast_columns_into, fps, Config, FrameClock, FrameLog, FramePacer, FrameRecord, HitSummary,
    RayHit,
};
use crate::input::{should_quit, EventSource, HeldKeys};
use crate::term::{FrameBuffer, Scene, SceneView, Screen};

/// Where the player starts on the built-in map.
pub const START: PlayerState = PlayerState {
    x: 8.0,
    y: 8.0,
    angle: 0.0,
};

/// Frame counters for the exit summary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunSummary {
    pub frames: u64,
    /// Sum of frame times, in seconds.
    pub seconds: f64,
}

impl RunSummary {
    pub fn average_fps(&self) -> Option<f64> {
        if self.seconds > 0.0 {
            Some(self.frames as f64 / self.seconds)
        } else {
            None
        }
    }
}

pub struct App {
    map: GridMap,
    player: PlayerState,
    config: Config,
    view: SceneView,
    fb: FrameBuffer,
    hits: Vec<RayHit>,
    summary: RunSummary,
}

impl App {
    /// Framebuffer and ray buffer are sized once, for a `width x height` screen.
    pub fn new(map: GridMap, player: PlayerState, config: Config, width: u16, height: u16) -> Self {
        Self {
            map,
            player,
            config,
            view: SceneView::default(),
            fb: FrameBuffer::new(width, height),
            hits: Vec::with_capacity(width as usize),
            summary: RunSummary::default(),
        }
    }

    /// Built-in map, default start and the given configuration.
    pub fn with_config(config: Config, width: u16, height: u16) -> Self {
        Self::new(GridMap::default_layout(), START, config, width, height)
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Ray hits from the last frame, one per column.
    pub fn hits(&self) -> &[RayHit] {
        &self.hits
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Advance and compose one frame. Does not present it.
    pub fn step(&mut self, input: InputSnapshot, dt: f32) -> FrameRecord {
        self.player = self
            .player
            .update(&self.map, input, dt, self.config.motion);

        cast_columns_into(
            &self.map,
            &self.player,
            self.fb.width(),
            &self.config.ray,
            &mut self.hits,
        );

        let frame_fps = fps(dt);
        let scene = Scene {
            map: &self.map,
            player: &self.player,
            hits: &self.hits,
            max_depth: self.config.ray.max_depth,
            fps: frame_fps,
        };
        self.view.render_into(&scene, &mut self.fb);

        self.summary.frames += 1;
        self.summary.seconds += dt.max(0.0) as f64;

        FrameRecord {
            frame: self.summary.frames,
            dt_ms: dt * 1000.0,
            fps: frame_fps,
            x: self.player.x,
            y: self.player.y,
            angle: self.player.angle,
            hits: HitSummary::from_hits(&self.hits),
        }
    }

    /// Advance, compose and present one frame.
    pub fn frame(&mut self, input: InputSnapshot, dt: f32, screen: &mut impl Screen) -> Result<FrameRecord> {
        let record = self.step(input, dt);
        screen.present(&mut self.fb)?;
        Ok(record)
    }
}

/// Loop settings.
#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    pub pacer: FramePacer,
    /// Stop after this many frames.
    pub max_frames: Option<u64>,
}

impl LoopOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            pacer: FramePacer::new(config.target_fps),
            max_frames: None,
        }
    }
}

/// Run frames until a quit key (or `max_frames`).
///
/// After presenting each frame the loop waits on `events` for whatever is
/// left of the frame budget, feeding key events into `keys`.
pub fn run_loop<S, E, W>(
    app: &mut App,
    screen: &mut S,
    events: &mut E,
    keys: &mut HeldKeys,
    options: LoopOptions,
    mut log: Option<&mut FrameLog<W>>,
) -> Result<RunSummary>
where
    S: Screen,
    E: EventSource,
    W: Write,
{
    let started = Instant::now();
    let mut clock = FrameClock::starting_at(started);
    let since_start_ms = |t: Instant| t.saturating_duration_since(started).as_millis() as u64;

    loop {
        let frame_start = Instant::now();
        let dt = clock.tick_at(frame_start);

        keys.update(since_start_ms(frame_start));
        let input = InputSnapshot::sample(&*keys);
        let record = app.frame(input, dt, screen)?;
        if let Some(log) = log.as_deref_mut() {
            log.record(&record);
        }

        if options.max_frames.is_some_and(|max| record.frame >= max) {
            break;
        }

        let mut quit = false;
        loop {
            let timeout = options.pacer.remaining(frame_start, Instant::now());
            let Some(key) = events.next_key(timeout)? else {
                break;
            };
            if key.kind != KeyEventKind::Release && should_quit(key) {
                quit = true;
                break;
            }
            keys.handle_event(key, since_start_ms(Instant::now()));
        }
        if quit {
            break;
        }
    }

    if let Some(log) = log {
        log.flush()?;
    }
    Ok(app.summary())
}
