//! Interior/exterior classification.
//!
//! Each row is swept left to right with an even-odd crossing count. Only
//! loop tiles with a southward leg count as crossings: a scanline running
//! just below the middle of the row crosses those tiles and no others, so
//! horizontal runs between two bends are never counted twice.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Grid};
use crate::tile::Direction;
use crate::walker::Loop;

/// Classification of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Part of the main loop
    Loop,
    /// Enclosed by the loop
    Inside,
    /// Reachable from the grid border without crossing the loop
    Outside,
}

/// Every tile of the grid classified against the loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    width: usize,
    regions: Vec<Region>,
    inside: usize,
    outside: usize,
}

impl Enclosure {
    pub fn region(&self, cell: Cell) -> Option<Region> {
        if cell.col >= self.width {
            return None;
        }
        self.regions.get(cell.row * self.width + cell.col).copied()
    }

    /// Regions in row-major order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Number of enclosed tiles
    pub fn inside(&self) -> usize {
        self.inside
    }

    pub fn outside(&self) -> usize {
        self.outside
    }

    pub fn on_loop(&self) -> usize {
        self.regions.len() - self.inside - self.outside
    }
}

/// Classify every tile of the grid as loop, inside or outside.
pub fn scan(grid: &Grid, path: &Loop) -> Enclosure {
    let (height, width) = grid.dimensions();
    let mut regions = Vec::with_capacity(grid.len());
    let mut inside_total = 0;
    let mut outside_total = 0;

    for row in 0..height {
        let mut inside = false;
        for col in 0..width {
            let cell = Cell::new(row, col);
            let region = if path.contains(cell) {
                if crosses_scanline(grid, cell) {
                    inside = !inside;
                }
                Region::Loop
            } else if inside {
                inside_total += 1;
                Region::Inside
            } else {
                outside_total += 1;
                Region::Outside
            };
            regions.push(region);
        }
        trace!("row {row}: {inside_total} enclosed so far");
    }

    Enclosure {
        width,
        regions,
        inside: inside_total,
        outside: outside_total,
    }
}

/// Count tiles enclosed by the loop.
pub fn count_enclosed(grid: &Grid, path: &Loop) -> usize {
    scan(grid, path).inside()
}

fn crosses_scanline(grid: &Grid, cell: Cell) -> bool {
    grid.shape(cell)
        .is_some_and(|symbol| symbol.connects(Direction::South))
}
