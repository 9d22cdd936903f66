//! The maze grid.
//!
//! A [`Grid`] is parsed once from text and is read-only afterwards, except
//! for the resolved shape of the start tile, which is recorded alongside the
//! raw symbols rather than overwriting them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};
use crate::tile::{Direction, Symbol};

/// Position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rectangular grid of maze symbols, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    tiles: Vec<Symbol>,
    resolved_start: Option<(Cell, Symbol)>,
}

impl Grid {
    /// Build a grid from text rows.
    ///
    /// Every row must have the same length and contain only maze characters.
    pub fn from_rows<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tiles = Vec::new();
        let mut height = 0;
        let mut width = 0;

        for (row, line) in rows.into_iter().enumerate() {
            let line = line.as_ref();
            let start_len = tiles.len();
            for (col, ch) in line.chars().enumerate() {
                let symbol =
                    Symbol::from_char(ch).ok_or(MazeError::InvalidSymbol { ch, row, col })?;
                tiles.push(symbol);
            }
            let len = tiles.len() - start_len;
            if row == 0 {
                width = len;
            } else if len != width {
                return Err(MazeError::RaggedGrid {
                    row,
                    expected: width,
                    actual: len,
                });
            }
            height += 1;
        }

        Ok(Self {
            height,
            width,
            tiles,
            resolved_start: None,
        })
    }

    /// (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Row-major index of an in-bounds cell
    pub(crate) fn index(&self, cell: Cell) -> usize {
        cell.row * self.width + cell.col
    }

    /// Raw symbol at a position (bounds-checked)
    pub fn symbol_at(&self, row: usize, col: usize) -> Result<Symbol> {
        self.get(Cell::new(row, col)).ok_or(MazeError::OutOfBounds {
            row,
            col,
            height: self.height,
            width: self.width,
        })
    }

    /// Raw symbol at a cell, or `None` outside the grid
    pub fn get(&self, cell: Cell) -> Option<Symbol> {
        if !self.contains(cell) {
            return None;
        }
        Some(self.tiles[self.index(cell)])
    }

    /// Symbol at a cell with the start tile replaced by its resolved shape.
    ///
    /// An unresolved start still reads as [`Symbol::Start`].
    pub fn shape(&self, cell: Cell) -> Option<Symbol> {
        match self.resolved_start {
            Some((start, shape)) if start == cell => Some(shape),
            _ => self.get(cell),
        }
    }

    /// The neighbouring cell one step away, if it lies on the grid
    pub fn neighbor(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.delta();
        let row = cell.row.checked_add_signed(dr)?;
        let col = cell.col.checked_add_signed(dc)?;
        let next = Cell::new(row, col);
        self.contains(next).then_some(next)
    }

    /// Locate the single start tile
    pub fn find_start(&self) -> Result<Cell> {
        let mut starts = self
            .cells()
            .filter(|&cell| self.get(cell) == Some(Symbol::Start));

        let first = starts.next().ok_or(MazeError::NoStart)?;
        let extra = starts.count();
        if extra > 0 {
            return Err(MazeError::MultipleStarts { count: extra + 1 });
        }
        Ok(first)
    }

    /// The recorded start position and shape, once resolved
    pub fn resolved_start(&self) -> Option<(Cell, Symbol)> {
        self.resolved_start
    }

    pub(crate) fn record_start_shape(&mut self, cell: Cell, shape: Symbol) {
        self.resolved_start = Some((cell, shape));
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(row, col)))
    }
}

impl FromStr for Grid {
    type Err = MazeError;

    /// Parse a maze, ignoring trailing whitespace and blank lines
    fn from_str(s: &str) -> Result<Self> {
        Grid::from_rows(s.lines().map(str::trim_end).filter(|line| !line.is_empty()))
    }
}
