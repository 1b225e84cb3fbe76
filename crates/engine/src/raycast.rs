//! Ray caster: one ray per screen column, marched through the grid.
//!
//! Rays advance in fixed `step_size` increments from the player until they
//! leave the map, enter a wall cell, or reach `max_depth`. A wall hit is also
//! checked for a seam: if the ray runs nearly parallel to the line from the
//! player to any of the three nearest corners of the hit cell, the column is
//! flagged as a boundary and later drawn blank.

use arrayvec::ArrayVec;

use crate::core::{GridMap, PlayerState};
use crate::types::{
    HitKind, TileKind, BOUNDARY_ANGLE, BOUNDARY_CORNERS, DEFAULT_FOV, DEFAULT_MAX_DEPTH,
    DEFAULT_STEP_SIZE,
};

/// Ray casting parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayConfig {
    /// Field of view in radians.
    pub fov: f32,
    /// Rays stop (and report a miss) at this distance.
    pub max_depth: f32,
    /// March increment.
    pub step_size: f32,
    /// Seam threshold in radians.
    pub boundary_angle: f32,
}

impl Default for RayConfig {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV,
            max_depth: DEFAULT_MAX_DEPTH,
            step_size: DEFAULT_STEP_SIZE,
            boundary_angle: BOUNDARY_ANGLE,
        }
    }
}

impl RayConfig {
    /// Upper bound on march steps for a single ray.
    pub fn max_steps(&self) -> u32 {
        if !(self.step_size > 0.0) || !(self.max_depth > 0.0) {
            return 0;
        }
        (self.max_depth / self.step_size).ceil() as u32
    }
}

/// Result of casting one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance travelled, capped at `max_depth`.
    pub distance: f32,
    /// Whether the hit lies on a seam between wall faces.
    pub is_boundary: bool,
    pub kind: HitKind,
    /// March steps taken.
    pub steps: u32,
}

impl RayHit {
    fn miss(max_depth: f32, steps: u32) -> Self {
        Self {
            distance: max_depth,
            is_boundary: false,
            kind: HitKind::OutOfBounds,
            steps,
        }
    }

    pub fn is_wall(&self) -> bool {
        self.kind == HitKind::Wall
    }
}

/// Angle of the ray for screen column `column`.
///
/// Column 0 looks `fov / 2` to the left of the heading; the sweep is linear
/// in the column index.
#[inline]
pub fn ray_angle(player_angle: f32, column: u16, screen_width: u16, fov: f32) -> f32 {
    let t = if screen_width == 0 {
        0.0
    } else {
        column as f32 / screen_width as f32
    };
    player_angle - fov / 2.0 + t * fov
}

/// March a single ray from `(origin_x, origin_y)` along `angle`.
pub fn cast_ray(map: &GridMap, origin_x: f32, origin_y: f32, angle: f32, cfg: &RayConfig) -> RayHit {
    let eye_x = angle.sin();
    let eye_y = angle.cos();
    let max_steps = cfg.max_steps();

    for step in 1..=max_steps {
        let distance = (step as f32 * cfg.step_size).min(cfg.max_depth);
        let test_x = (origin_x + eye_x * distance).floor() as i32;
        let test_y = (origin_y + eye_y * distance).floor() as i32;

        if !map.contains(test_x, test_y) {
            return RayHit::miss(cfg.max_depth, step);
        }

        match map.tile_at(test_x, test_y) {
            Ok(TileKind::Wall) => {
                return RayHit {
                    distance,
                    is_boundary: is_seam(
                        origin_x,
                        origin_y,
                        eye_x,
                        eye_y,
                        test_x,
                        test_y,
                        cfg.boundary_angle,
                    ),
                    kind: HitKind::Wall,
                    steps: step,
                };
            }
            Ok(TileKind::Empty) => {}
            Err(err) => {
                debug_assert!(false, "lookup after bounds check failed: {}", err);
                return RayHit::miss(cfg.max_depth, step);
            }
        }
    }

    RayHit::miss(cfg.max_depth, max_steps)
}

/// Cast one ray per column for a screen `screen_width` columns wide.
///
/// `out` is cleared and refilled; reuse it across frames to avoid allocating.
pub fn cast_columns_into(
    map: &GridMap,
    player: &PlayerState,
    screen_width: u16,
    cfg: &RayConfig,
    out: &mut Vec<RayHit>,
) {
    out.clear();
    for column in 0..screen_width {
        let angle = ray_angle(player.angle, column, screen_width, cfg.fov);
        out.push(cast_ray(map, player.x, player.y, angle, cfg));
    }
}

/// Convenience helper that allocates the output.
pub fn cast_columns(
    map: &GridMap,
    player: &PlayerState,
    screen_width: u16,
    cfg: &RayConfig,
) -> Vec<RayHit> {
    let mut out = Vec::with_capacity(screen_width as usize);
    cast_columns_into(map, player, screen_width, cfg, &mut out);
    out
}

/// Seam test against the corners of cell `(cell_x, cell_y)`.
///
/// Only the three corners nearest the player are considered.
fn is_seam(
    px: f32,
    py: f32,
    eye_x: f32,
    eye_y: f32,
    cell_x: i32,
    cell_y: i32,
    threshold: f32,
) -> bool {
    let mut corners = ArrayVec::<(f32, f32), 4>::new();
    for tx in 0..2 {
        for ty in 0..2 {
            let vx = (cell_x + tx) as f32 - px;
            let vy = (cell_y + ty) as f32 - py;
            let d = (vx * vx + vy * vy).sqrt();
            // NaN when standing exactly on the corner; never counts as a seam.
            let dot = (eye_x * vx + eye_y * vy) / d;
            corners.push((d, dot));
        }
    }

    corners.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));
    corners
        .iter()
        .take(BOUNDARY_CORNERS)
        .any(|&(_, dot)| dot.clamp(-1.0, 1.0).acos() < threshold)
}
