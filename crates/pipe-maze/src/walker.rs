//! Loop discovery.
//!
//! Once the start shape is known every loop tile has exactly two legs, so
//! the walk never branches: leave each tile through the leg you did not
//! enter by, until the start comes round again.

use log::debug;

use crate::error::{MazeError, Result};
use crate::grid::{Cell, Grid};
use crate::tile::Direction;

/// Minimum number of tiles in a closed loop
pub const MIN_LOOP_LEN: usize = 4;

/// The closed cycle of pipe tiles through the start, in walk order.
///
/// `cells[0]` is the start; the closing step back to it is implied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loop {
    cells: Vec<Cell>,
    members: Vec<bool>,
    width: usize,
}

impl Loop {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether a cell lies on the loop
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.width
            && self
                .members
                .get(cell.row * self.width + cell.col)
                .copied()
                .unwrap_or(false)
    }

    /// Farthest hop distance from the start along the loop
    pub fn farthest_distance(&self) -> usize {
        farthest_distance(self.len())
    }
}

/// Greatest number of steps from the start to any tile of a loop of
/// `len` tiles, walking whichever way round is shorter.
pub fn farthest_distance(len: usize) -> usize {
    len.div_ceil(2)
}

/// Walk the loop through the resolved start tile.
///
/// `max_steps` bounds the walk; `None` uses the number of grid cells.
pub fn walk_loop(grid: &Grid, max_steps: Option<usize>) -> Result<Loop> {
    let (start, shape) = grid
        .resolved_start()
        .ok_or_else(|| MazeError::broken("start tile has not been resolved"))?;
    let (_, width) = grid.dimensions();
    let limit = max_steps.unwrap_or_else(|| grid.len());

    let mut members = vec![false; grid.len()];
    members[grid.index(start)] = true;
    let mut cells = vec![start];

    let mut heading = shape
        .connections()
        .iter()
        .next()
        .ok_or(MazeError::UnknownStartShape)?;
    let mut current = start;

    for _ in 0..limit {
        let next = step(grid, current, heading)?;

        if next == start {
            if cells.len() < MIN_LOOP_LEN {
                return Err(MazeError::broken(format!(
                    "loop closed after only {} tiles",
                    cells.len()
                )));
            }
            debug!("loop closed after {} tiles", cells.len());
            return Ok(Loop {
                cells,
                members,
                width,
            });
        }

        let index = grid.index(next);
        if members[index] {
            return Err(MazeError::broken(format!(
                "revisited ({}, {}) before returning to the start",
                next.row, next.col
            )));
        }
        members[index] = true;
        cells.push(next);

        let arrived_from = heading.opposite();
        heading = exit_leg(grid, next, arrived_from)?;
        current = next;
    }

    Err(MazeError::broken(format!(
        "loop did not close within {limit} steps"
    )))
}

/// Move one tile in `heading`, requiring the destination to reach back.
fn step(grid: &Grid, from: Cell, heading: Direction) -> Result<Cell> {
    let next = grid.neighbor(from, heading).ok_or_else(|| {
        MazeError::broken(format!(
            "pipe at ({}, {}) leads off the grid",
            from.row, from.col
        ))
    })?;

    let reaches_back = grid
        .shape(next)
        .is_some_and(|symbol| symbol.connects(heading.opposite()));
    if !reaches_back {
        return Err(MazeError::broken(format!(
            "pipe at ({}, {}) leads into ({}, {}) which does not connect back",
            from.row, from.col, next.row, next.col
        )));
    }
    Ok(next)
}

/// The leg of `cell` other than the one we entered through.
fn exit_leg(grid: &Grid, cell: Cell, arrived_from: Direction) -> Result<Direction> {
    grid.shape(cell)
        .and_then(|symbol| symbol.connections().iter().find(|&d| d != arrived_from))
        .ok_or_else(|| {
            MazeError::broken(format!("dead end at ({}, {})", cell.row, cell.col))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::start::resolve_start;

    fn walk(text: &str) -> Result<Loop> {
        let mut grid: Grid = text.parse().unwrap();
        resolve_start(&mut grid)?;
        walk_loop(&grid, None)
    }

    #[test]
    fn test_square_loop() {
        let path = walk("-L|F7\n7S-7|\nL|7||\n-L-J|\nL|-JF").unwrap();
        assert_eq!(path.len(), 8);
        assert_eq!(path.start(), Cell::new(1, 1));
        // Start is an F: south is tried before east.
        assert_eq!(path.cells()[1], Cell::new(2, 1));
        assert_eq!(path.farthest_distance(), 4);
    }

    #[test]
    fn test_complex_loop() {
        let path = walk("7-F7-\n.FJ|7\nSJLL7\n|F--J\nLJ.LJ").unwrap();
        assert_eq!(path.len(), 16);
        assert_eq!(path.farthest_distance(), 8);
    }

    #[test]
    fn test_consecutive_cells_are_connected() {
        let text = "7-F7-\n.FJ|7\nSJLL7\n|F--J\nLJ.LJ";
        let mut grid: Grid = text.parse().unwrap();
        resolve_start(&mut grid).unwrap();
        let path = walk_loop(&grid, None).unwrap();

        let cells = path.cells();
        for (i, &a) in cells.iter().enumerate() {
            let b = cells[(i + 1) % cells.len()];
            let dir = Direction::ALL
                .into_iter()
                .find(|&d| grid.neighbor(a, d) == Some(b))
                .expect("consecutive cells are adjacent");
            assert!(grid.shape(a).unwrap().connects(dir));
            assert!(grid.shape(b).unwrap().connects(dir.opposite()));
        }
    }

    #[test]
    fn test_membership() {
        let path = walk(".....\n.S-7.\n.|.|.\n.L-J.\n.....").unwrap();
        assert!(path.contains(Cell::new(1, 1)));
        assert!(path.contains(Cell::new(3, 3)));
        assert!(!path.contains(Cell::new(2, 2)));
        assert!(!path.contains(Cell::new(0, 0)));
        assert!(!path.contains(Cell::new(9, 0)));
    }

    #[test]
    fn test_broken_loop() {
        // The bottom-right corner is missing.
        let err = walk(".....\n.S-7.\n.|.|.\n.L-..\n.....").unwrap_err();
        assert!(matches!(err, MazeError::BrokenLoop { .. }), "{err:?}");
    }

    #[test]
    fn test_step_limit() {
        let mut grid: Grid = ".....\n.S-7.\n.|.|.\n.L-J.\n.....".parse().unwrap();
        resolve_start(&mut grid).unwrap();
        assert!(walk_loop(&grid, Some(8)).is_ok());
        assert!(matches!(
            walk_loop(&grid, Some(7)),
            Err(MazeError::BrokenLoop { .. })
        ));
    }

    #[test]
    fn test_unresolved_start() {
        let grid: Grid = "S7\nLJ".parse().unwrap();
        assert!(matches!(
            walk_loop(&grid, None),
            Err(MazeError::BrokenLoop { .. })
        ));
    }

    #[test]
    fn test_smallest_loop() {
        let path = walk("S7\nLJ").unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.farthest_distance(), 2);
    }

    #[test]
    fn test_farthest_distance_rounds_up() {
        assert_eq!(farthest_distance(8), 4);
        assert_eq!(farthest_distance(9), 5);
        assert_eq!(farthest_distance(16), 8);
    }
}
