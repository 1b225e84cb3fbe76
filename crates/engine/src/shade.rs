//! Shader: distance to glyph, and the ceiling/wall/floor split of a column.
//!
//! Everything here is a pure function of its arguments. The same hit always
//! shades to the same glyph and the same band rows.

use crate::raycast::RayHit;
use crate::types::{BLANK, FLOOR_GLYPHS, FLOOR_THRESHOLDS, WALL_GLYPHS};

/// Wall shade level: index into [`WALL_GLYPHS`] (0 = nearest), or `None` for blank.
pub fn wall_level(distance: f32, max_depth: f32) -> Option<usize> {
    if distance <= max_depth / 4.0 {
        Some(0)
    } else if distance < max_depth / 3.0 {
        Some(1)
    } else if distance < max_depth / 2.0 {
        Some(2)
    } else if distance < max_depth {
        Some(3)
    } else {
        None
    }
}

/// Glyph for a wall at `distance`. Seams always render blank.
pub fn wall_glyph(distance: f32, is_boundary: bool, max_depth: f32) -> char {
    if is_boundary {
        return BLANK;
    }
    wall_level(distance, max_depth)
        .map(|i| WALL_GLYPHS[i])
        .unwrap_or(BLANK)
}

/// Floor gradient level for screen `row`: index into [`FLOOR_GLYPHS`], or `None` for blank.
///
/// `b` is 1 at the horizon and falls to 0 at the bottom row.
pub fn floor_level(row: u16, screen_height: u16) -> Option<usize> {
    let half = screen_height as f32 / 2.0;
    if half <= 0.0 {
        return None;
    }
    let b = 1.0 - (row as f32 - half) / half;
    FLOOR_THRESHOLDS.iter().position(|&t| b < t)
}

pub fn floor_glyph(row: u16, screen_height: u16) -> char {
    floor_level(row, screen_height)
        .map(|i| FLOOR_GLYPHS[i])
        .unwrap_or(BLANK)
}

/// Which part of a column a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Sky,
    Wall,
    Floor,
}

/// Row limits of a column's wall slice.
///
/// Rows `<= ceiling` are sky, rows in `(ceiling, floor]` are wall, the rest floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnBands {
    pub ceiling: i32,
    pub floor: i32,
}

impl ColumnBands {
    /// Split for a wall at `distance` on a screen `screen_height` rows tall.
    ///
    /// Misses arrive here with `distance == max_depth`, which yields a thin
    /// band around the horizon rather than an empty column.
    pub fn for_distance(distance: f32, screen_height: u16) -> Self {
        let h = screen_height as f32;
        let ceiling = (h / 2.0 - h / distance.max(f32::EPSILON)) as i32;
        Self {
            ceiling,
            floor: screen_height as i32 - ceiling,
        }
    }

    pub fn band_at(&self, row: u16) -> Band {
        let row = row as i32;
        if row <= self.ceiling {
            Band::Sky
        } else if row <= self.floor {
            Band::Wall
        } else {
            Band::Floor
        }
    }
}

/// Fully shaded column: band limits plus the wall glyph and its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnShade {
    pub bands: ColumnBands,
    pub wall: char,
    pub wall_level: Option<usize>,
    screen_height: u16,
}

impl ColumnShade {
    /// Glyph at `row` of this column.
    pub fn glyph_at(&self, row: u16) -> char {
        match self.bands.band_at(row) {
            Band::Sky => BLANK,
            Band::Wall => self.wall,
            Band::Floor => floor_glyph(row, self.screen_height),
        }
    }
}

/// Shade one ray hit for a screen `screen_height` rows tall.
pub fn shade_column(hit: &RayHit, max_depth: f32, screen_height: u16) -> ColumnShade {
    let wall_level = if hit.is_wall() && !hit.is_boundary {
        wall_level(hit.distance, max_depth)
    } else {
        None
    };
    ColumnShade {
        bands: ColumnBands::for_distance(hit.distance, screen_height),
        wall: wall_level.map(|i| WALL_GLYPHS[i]).unwrap_or(BLANK),
        wall_level,
        screen_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HitKind;

    fn hit(distance: f32, is_boundary: bool, kind: HitKind) -> RayHit {
        RayHit {
            distance,
            is_boundary,
            kind,
            steps: 1,
        }
    }

    #[test]
    fn wall_levels_follow_depth_fractions() {
        assert_eq!(wall_level(4.0, 16.0), Some(0));
        assert_eq!(wall_level(4.01, 16.0), Some(1));
        assert_eq!(wall_level(5.4, 16.0), Some(2));
        assert_eq!(wall_level(8.0, 16.0), Some(3));
        assert_eq!(wall_level(15.9, 16.0), Some(3));
        assert_eq!(wall_level(16.0, 16.0), None);
    }

    #[test]
    fn boundary_overrides_any_distance() {
        assert_eq!(wall_glyph(0.5, true, 16.0), BLANK);
        assert_eq!(wall_glyph(0.5, false, 16.0), '█');
    }

    #[test]
    fn floor_gradient_thins_towards_horizon() {
        // 24 rows: horizon at row 12.
        assert_eq!(floor_glyph(23, 24), '#');
        assert_eq!(floor_glyph(20, 24), 'x');
        assert_eq!(floor_glyph(16, 24), '.');
        assert_eq!(floor_glyph(14, 24), '-');
        assert_eq!(floor_glyph(13, 24), BLANK);
        assert_eq!(floor_glyph(12, 24), BLANK);
        assert_eq!(floor_glyph(3, 24), BLANK);
        assert_eq!(floor_glyph(0, 0), BLANK);
    }

    #[test]
    fn bands_for_near_and_far_walls() {
        let near = ColumnBands::for_distance(2.0, 24);
        assert_eq!(near, ColumnBands { ceiling: 0, floor: 24 });
        assert_eq!(near.band_at(0), Band::Sky);
        assert_eq!(near.band_at(1), Band::Wall);
        assert_eq!(near.band_at(23), Band::Wall);

        let far = ColumnBands::for_distance(16.0, 24);
        assert_eq!(far, ColumnBands { ceiling: 10, floor: 14 });
        assert_eq!(far.band_at(10), Band::Sky);
        assert_eq!(far.band_at(11), Band::Wall);
        assert_eq!(far.band_at(14), Band::Wall);
        assert_eq!(far.band_at(15), Band::Floor);
    }

    #[test]
    fn miss_keeps_horizon_band_but_draws_no_wall() {
        let shade = shade_column(&hit(16.0, false, HitKind::OutOfBounds), 16.0, 24);
        assert_eq!(shade.bands, ColumnBands::for_distance(16.0, 24));
        assert_eq!(shade.wall_level, None);
        assert_eq!(shade.glyph_at(12), BLANK);
        assert_eq!(shade.glyph_at(23), '#');
    }

    #[test]
    fn zero_distance_does_not_divide_by_zero() {
        let bands = ColumnBands::for_distance(0.0, 24);
        assert!(bands.ceiling < 0);
        assert!(bands.floor > 24);
    }
}
