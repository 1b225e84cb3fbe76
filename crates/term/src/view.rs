//! SceneView: composes ray hits, the mini-map and the status line into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::{GridMap, PlayerState};
use crate::engine::{floor_level, shade_column, Band, RayHit};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PLAYER_MARKER, WALL_GLYPHS};

/// Everything one frame shows.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub map: &'a GridMap,
    pub player: &'a PlayerState,
    /// One hit per screen column, left to right.
    pub hits: &'a [RayHit],
    pub max_depth: f32,
    /// `None` is shown as `inf`.
    pub fps: Option<f32>,
}

/// Wall intensity per shade level, nearest first.
const WALL_GREYS: [u8; 4] = [245, 200, 150, 105];

/// Floor intensity per gradient level, nearest first.
const FLOOR_GREYS: [u8; 4] = [140, 115, 90, 70];

/// Status line capacity: four `{:.2}` floats (at most 43 chars each, for
/// `-f32::MAX`) plus the labels.
const STATUS_CAPACITY: usize = 200;

/// Frame compositor.
#[derive(Debug, Clone, Copy)]
pub struct SceneView {
    show_map: bool,
}

impl Default for SceneView {
    fn default() -> Self {
        Self { show_map: true }
    }
}

impl SceneView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the mini-map overlay (and its player marker).
    pub fn with_map(mut self, show_map: bool) -> Self {
        self.show_map = show_map;
        self
    }

    /// Compose a frame into an existing framebuffer.
    ///
    /// Every cell is overwritten. This is the allocation-free hot path.
    pub fn render_into(&self, scene: &Scene<'_>, fb: &mut FrameBuffer) {
        fb.clear(Cell::default());

        let height = fb.height();
        for (x, hit) in scene.hits.iter().take(fb.width() as usize).enumerate() {
            self.draw_column(fb, x as u16, hit, scene.max_depth, height);
        }

        if self.show_map {
            self.draw_map(fb, scene.map);
            self.draw_marker(fb, scene.player);
        }

        self.draw_status(fb, scene.player, scene.fps);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene<'_>, width: u16, height: u16) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, height);
        self.render_into(scene, &mut fb);
        fb
    }

    fn draw_column(&self, fb: &mut FrameBuffer, x: u16, hit: &RayHit, max_depth: f32, height: u16) {
        let shade = shade_column(hit, max_depth, height);
        let wall_style = CellStyle::fg(Rgb::grey(
            shade.wall_level.map(|i| WALL_GREYS[i]).unwrap_or(0),
        ));

        for y in 0..height {
            let cell = match shade.bands.band_at(y) {
                Band::Sky => Cell::default(),
                Band::Wall => wall_style.into_cell(shade.wall),
                Band::Floor => match floor_level(y, height) {
                    Some(i) => CellStyle {
                        dim: true,
                        ..CellStyle::fg(Rgb::new(FLOOR_GREYS[i], FLOOR_GREYS[i], FLOOR_GREYS[i] / 2))
                    }
                    .into_cell(shade.glyph_at(y)),
                    None => Cell::default(),
                },
            };
            fb.set(x, y, cell);
        }
    }

    /// Map rows start one row down, below the status line.
    fn draw_map(&self, fb: &mut FrameBuffer, map: &GridMap) {
        let wall = CellStyle::fg(Rgb::new(180, 180, 200));
        let empty = CellStyle {
            dim: true,
            ..CellStyle::fg(Rgb::new(110, 110, 120))
        };

        for (my, row) in map.rows().enumerate() {
            let Ok(y) = u16::try_from(my + 1) else {
                break;
            };
            if y >= fb.height() {
                break;
            }
            for (mx, tile) in row.iter().enumerate() {
                let Ok(x) = u16::try_from(mx) else {
                    break;
                };
                let style = if tile.is_wall() { wall } else { empty };
                fb.put_char(x, y, tile.as_char(), style);
            }
        }
    }

    fn draw_marker(&self, fb: &mut FrameBuffer, player: &PlayerState) {
        let (cx, cy) = player.cell();
        let (Ok(x), Ok(y)) = (u16::try_from(cx), u16::try_from(cy + 1)) else {
            return;
        };
        let style = CellStyle {
            bold: true,
            ..CellStyle::fg(Rgb::new(255, 210, 60))
        };
        fb.put_char(x, y, PLAYER_MARKER, style);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, player: &PlayerState, fps: Option<f32>) {
        let mut line = ArrayString::<STATUS_CAPACITY>::new();
        let _ = write!(
            line,
            "X={:.2}, Y={:.2}, A={:.2}, FPS=",
            player.x,
            player.y,
            player.heading()
        );
        let _ = match fps {
            Some(f) => write!(line, "{:.2}", f),
            None => line.write_str("inf"),
        };
        let style = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        fb.put_str(0, 0, &line, style);
    }
}

/// Whether a glyph belongs to the wall shade ramp.
pub fn is_wall_glyph(ch: char) -> bool {
    WALL_GLYPHS.contains(&ch)
}
