//! Terminal raycaster (default binary).
//!
//! Walk the built-in map with W/A/S/D or the arrow keys; Q, Esc or Ctrl-C
//! quits. Tunables come from `RAYCAST_*` environment variables.

use anyhow::Result;

use tui_raycaster::app::{run_loop, App, LoopOptions, RunSummary};
use tui_raycaster::engine::{Config, FrameLog};
use tui_raycaster::input::{CrosstermEvents, HeldKeys};
use tui_raycaster::term::{Screen, TerminalRenderer};

fn main() -> Result<()> {
    let config = Config::from_env();
    let mut log = match config.log_path.as_deref() {
        Some(path) => Some(FrameLog::open(path)?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config.clone(), log.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();

    eprintln!(
        "[Raycaster] fov={:.1}deg depth={} step={} target_fps={} log={}",
        config.ray.fov.to_degrees(),
        config.ray.max_depth,
        config.ray.step_size,
        config.target_fps,
        config.log_path.as_deref().unwrap_or("off"),
    );
    match &result {
        Ok(summary) => match summary.average_fps() {
            Some(avg) => eprintln!(
                "[Raycaster] {} frames in {:.2}s ({:.1} fps)",
                summary.frames, summary.seconds, avg
            ),
            None => eprintln!("[Raycaster] {} frames", summary.frames),
        },
        Err(err) => eprintln!("[Raycaster] error: {:#}", err),
    }
    result.map(|_| ())
}

fn run(term: &mut TerminalRenderer, config: Config, log: Option<&mut FrameLog>) -> Result<RunSummary> {
    let (w, h) = term.size().unwrap_or((80, 24));

    let release_timeout = if term.reports_key_release() {
        None
    } else {
        Some(config.key_release_ms)
    };
    let mut keys = HeldKeys::with_release_timeout(release_timeout);

    let options = LoopOptions::from_config(&config);
    let mut app = App::with_config(config, w, h);
    run_loop(&mut app, term, &mut CrosstermEvents, &mut keys, options, log)
}
