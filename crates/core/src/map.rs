//! Map module - the static tile grid
//!
//! The map is a `width x height` grid where each cell is either empty or a wall.
//! Uses a flat vector in row-major order (`y * width + x`) and never changes after
//! construction.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use std::fmt;

use crate::types::TileKind;

/// Built-in level: a 16x16 hollow box.
pub const DEFAULT_LAYOUT: [&str; 16] = [
    "################",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "################",
];

/// Errors raised while building or querying a [`GridMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// Lookup outside `[0, width) x [0, height)`.
    OutOfRange { x: i32, y: i32 },
    /// Layout had no rows, or its rows had no columns.
    Empty,
    /// Layout row `row` has `found` columns where `expected` were required.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::OutOfRange { x, y } => write!(f, "tile ({}, {}) is outside the map", x, y),
            MapError::Empty => write!(f, "map layout is empty"),
            MapError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "map row {} has {} columns, expected {}",
                row, found, expected
            ),
        }
    }
}

impl std::error::Error for MapError {}

/// The world grid - row-major flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<TileKind>,
}

impl GridMap {
    /// Build a map from a literal layout where `#` is a wall.
    ///
    /// Every row must have the same number of characters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(line.as_ref().chars().map(TileKind::from_char));
            let found = cells.len() - before;
            if found != width {
                return Err(MapError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// The compiled-in level.
    ///
    /// Falls back to a hollow box of the same size if the literal is malformed.
    pub fn default_layout() -> Self {
        Self::from_rows(&DEFAULT_LAYOUT)
            .unwrap_or_else(|_| Self::hollow_box(DEFAULT_LAYOUT[0].len(), DEFAULT_LAYOUT.len()))
    }

    /// A box whose outer ring is wall and whose interior is empty.
    ///
    /// Dimensions are clamped to at least 1x1.
    pub fn hollow_box(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut cells = vec![TileKind::Empty; width * height];
        for y in 0..height {
            for x in 0..width {
                if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    cells[y * width + x] = TileKind::Wall;
                }
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Calculate flat index from integer cell coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Whether integer cell `(x, y)` lies inside the grid.
    #[inline(always)]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Tile at integer cell `(x, y)`.
    pub fn tile_at(&self, x: i32, y: i32) -> Result<TileKind, MapError> {
        self.index(x, y)
            .map(|i| self.cells[i])
            .ok_or(MapError::OutOfRange { x, y })
    }

    /// Tile containing the continuous point `(x, y)` (coordinates are floored).
    pub fn tile_at_point(&self, x: f32, y: f32) -> Result<TileKind, MapError> {
        let (cx, cy) = cell_of(x, y);
        self.tile_at(cx, cy)
    }

    /// Whether a body standing at `(x, y)` would be inside a wall.
    ///
    /// Points outside the grid count as blocked.
    pub fn blocks(&self, x: f32, y: f32) -> bool {
        self.tile_at_point(x, y).map(|t| t.is_wall()).unwrap_or(true)
    }

    /// Row `y` of the grid, left to right.
    pub fn row(&self, y: usize) -> Option<&[TileKind]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[TileKind]> {
        self.cells.chunks(self.width)
    }

    /// Whether every cell on the outer ring is a wall.
    pub fn is_enclosed(&self) -> bool {
        let last_x = self.width - 1;
        let last_y = self.height - 1;
        (0..self.width).all(|x| self.cells[x].is_wall() && self.cells[last_y * self.width + x].is_wall())
            && (0..self.height)
                .all(|y| self.cells[y * self.width].is_wall() && self.cells[y * self.width + last_x].is_wall())
    }
}

/// Integer cell containing a continuous point.
#[inline(always)]
pub fn cell_of(x: f32, y: f32) -> (i32, i32) {
    (x.floor() as i32, y.floor() as i32)
}
