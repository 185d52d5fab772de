//! Maze Grid
//!
//! Cell codes and the flat row-major buffer both generators carve into.
//! Coordinates are (x, y) with x indexing columns and y indexing rows;
//! (0, 0) is the top-left corner of an ASCII rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::core::hash::{Digest32, DomainHasher};

/// Domain tag for grid digests.
const GRID_DOMAIN: &[u8] = b"MAZECAST_GRID_V1";

/// Errors from rebuilding a grid out of raw cell codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// The code buffer does not hold exactly `width * height` cells.
    #[error("code buffer holds {actual} cells, expected {expected}")]
    LengthMismatch {
        /// Cell count implied by the dimensions.
        expected: usize,
        /// Cell count actually supplied.
        actual: usize,
    },
    /// A byte was none of the known cell codes.
    #[error("unknown cell code {0}")]
    UnknownCode(u8),
}

/// A single grid cell.
///
/// The numeric codes are the flat export encoding: 0 passage, 1 wall,
/// 2 portal. A portal marks the entry or exit opening in the border;
/// it renders like an opening but blocks movement exactly like a wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    /// Walkable floor.
    Passage = 0,
    /// Solid wall.
    Wall = 1,
    /// Entry/exit marker in the border wall.
    Portal = 2,
}

impl Cell {
    /// Numeric code used by [`MazeGrid::codes`] and wall-type reporting.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`code`](Self::code).
    pub fn from_code(code: u8) -> Result<Self, GridError> {
        match code {
            0 => Ok(Cell::Passage),
            1 => Ok(Cell::Wall),
            2 => Ok(Cell::Portal),
            other => Err(GridError::UnknownCode(other)),
        }
    }

    /// Whether the cell stops movement and rays. Everything except open
    /// floor blocks, portals included.
    #[inline]
    pub const fn blocks(self) -> bool {
        !matches!(self, Cell::Passage)
    }
}

/// Rectangular maze stored as a flat row-major cell buffer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl MazeGrid {
    /// Create a grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Width in cells (columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells (rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at (x, y), or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Write a cell. Writes outside the grid are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = y * self.width + x;
            self.cells[idx] = cell;
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major numeric codes (the flat export format).
    pub fn codes(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.code()).collect()
    }

    /// Rebuild a grid from dimensions plus row-major codes.
    ///
    /// # Errors
    ///
    /// [`GridError::LengthMismatch`] if the buffer does not hold exactly
    /// `width * height` bytes, [`GridError::UnknownCode`] on any byte
    /// that is not a cell code.
    pub fn from_codes(width: usize, height: usize, codes: &[u8]) -> Result<Self, GridError> {
        let expected = width * height;
        if codes.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: codes.len(),
            });
        }
        let cells = codes
            .iter()
            .map(|&code| Cell::from_code(code))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// SHA-256 digest of the layout.
    ///
    /// Covers a domain tag, both dimensions as little-endian u32, and the
    /// row-major codes, so grids that differ only in shape (2x3 vs 3x2)
    /// do not collide.
    pub fn digest(&self) -> Digest32 {
        let mut hasher = DomainHasher::new(GRID_DOMAIN);
        hasher.update_u32(self.width as u32);
        hasher.update_u32(self.height as u32);
        hasher.update_bytes(&self.codes());
        hasher.finalize()
    }
}

impl fmt::Display for MazeGrid {
    /// ASCII rendering: `#` for walls, blank for everything else, so
    /// portal openings show up as gaps in the border.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let ch = match self.cells[y * self.width + x] {
                    Cell::Wall => '#',
                    _ => ' ',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
