//! Start tile resolution.
//!
//! The start tile hides the pipe underneath it. Its shape is the one pipe
//! whose two legs point at neighbours that reach back towards the start.

use log::debug;
use smallvec::SmallVec;

use crate::error::{MazeError, Result};
use crate::grid::{Cell, Grid};
use crate::tile::{Direction, Directions, Symbol};

/// Directions from `cell` whose neighbour has a leg pointing back at `cell`.
///
/// Off-grid neighbours, ground and the unresolved start never reach back.
pub fn reaching_back(grid: &Grid, cell: Cell) -> SmallVec<[Direction; 4]> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| {
            grid.neighbor(cell, dir)
                .and_then(|n| grid.get(n))
                .is_some_and(|symbol| symbol.connects(dir.opposite()))
        })
        .collect()
}

/// Infer the shape of the start tile from its neighbours.
///
/// Does not modify the grid; see [`resolve_start`].
pub fn infer_start_shape(grid: &Grid, start: Cell) -> Result<Symbol> {
    let dirs = reaching_back(grid, start);
    if dirs.len() != 2 {
        return Err(MazeError::AmbiguousStart { found: dirs.len() });
    }

    let set: Directions = dirs.iter().copied().collect();
    Symbol::from_connections(set).ok_or(MazeError::UnknownStartShape)
}

/// Find the start tile, infer its shape and record it on the grid.
///
/// After this returns, [`Grid::shape`] reports the start as an ordinary pipe.
pub fn resolve_start(grid: &mut Grid) -> Result<(Cell, Symbol)> {
    let start = grid.find_start()?;
    let shape = infer_start_shape(grid, start)?;
    debug!(
        "start at ({}, {}) resolved to '{}'",
        start.row,
        start.col,
        shape.to_char()
    );
    grid.record_start_shape(start, shape);
    Ok((start, shape))
}
