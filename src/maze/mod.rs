//! Maze generation.
//!
//! Two carving strategies over the same flat [`MazeGrid`]: depth-first
//! backtracking digs long winding corridors, recursive division builds
//! rooms-and-walls layouts. Both draw every decision from a
//! [`RandomStream`](crate::core::rng::RandomStream), so a seed plus the
//! dimensions fully describes a layout.

pub mod depth_first;
pub mod division;
pub mod grid;

pub use depth_first::DepthFirstGenerator;
pub use division::RecursiveDivisionGenerator;
pub use grid::{Cell, GridError, MazeGrid};

use thiserror::Error;

/// Smallest usable maze: a border ring around a single interior cell.
pub const MIN_DIMENSION: usize = 3;

/// Errors from maze generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Requested dimensions cannot hold a bordered maze.
    #[error("maze dimensions {width}x{height} are below the 3x3 minimum")]
    TooSmall {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
}

/// Both generators refuse anything smaller than a border around one cell.
pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<(), MazeError> {
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(MazeError::TooSmall { width, height });
    }
    Ok(())
}

/// Mark the entry and exit openings in the border wall.
///
/// Entry is on the west border next to the carve origin, exit on the east
/// border next to the opposite corner. Runs last, so it overwrites
/// whatever the carve left in those two border cells.
pub(crate) fn place_portals(grid: &mut grid::MazeGrid) {
    let width = grid.width();
    let height = grid.height();
    grid.set(0, 1, grid::Cell::Portal);
    grid.set(width - 1, height - 2, grid::Cell::Portal);
}

// =============================================================================
// TESTS
// =============================================================================
