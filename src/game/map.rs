//! World Map
//!
//! Read-only view over a generated maze for movement and raycasting.

use serde::{Deserialize, Serialize};

use crate::maze::{Cell, MazeGrid};

/// Wall and cell queries over a generated maze.
///
/// Both queries are total over all of `i32 x i32`: anything outside the
/// grid counts as solid wall, so movement and ray traversal never need
/// their own bounds checks. The grid is fixed once wrapped; mutation
/// ends when generation ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldMap {
    grid: MazeGrid,
}

impl WorldMap {
    /// Wrap a generated grid.
    pub fn new(grid: MazeGrid) -> Self {
        Self { grid }
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The wrapped grid.
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Whether (x, y) blocks movement. Out-of-range coordinates and
    /// every non-floor cell, portals included, are solid.
    #[inline]
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.cell_at(x, y).map_or(true, Cell::blocks)
    }

    /// Raw cell code at (x, y); out-of-range reports the plain wall code.
    #[inline]
    pub fn wall_type(&self, x: i32, y: i32) -> u8 {
        self.cell_at(x, y).map_or(Cell::Wall.code(), Cell::code)
    }

    #[inline]
    fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.grid.get(x as usize, y as usize)
    }
}

// =============================================================================
// TESTS
// =============================================================================
