//! Text rendering of a classified maze.

use crate::enclosure::{Enclosure, Region};
use crate::grid::{Cell, Grid};
use crate::tile::Symbol;

/// Box-drawing glyph for a loop tile
fn glyph(symbol: Symbol) -> char {
    match symbol {
        Symbol::Vertical => '│',
        Symbol::Horizontal => '─',
        Symbol::BendNE => '└',
        Symbol::BendNW => '┘',
        Symbol::BendSW => '┐',
        Symbol::BendSE => '┌',
        Symbol::Ground => '.',
        Symbol::Start => 'S',
    }
}

/// Draw the maze one string per row: loop tiles as box glyphs (the start as
/// `S`), enclosed tiles as `I` and everything else as `O`.
pub fn render(grid: &Grid, enclosure: &Enclosure) -> Vec<String> {
    let (height, width) = grid.dimensions();
    (0..height)
        .map(|row| {
            (0..width)
                .map(|col| {
                    let cell = Cell::new(row, col);
                    match enclosure.region(cell) {
                        Some(Region::Loop) => grid.get(cell).map_or('?', glyph),
                        Some(Region::Inside) => 'I',
                        Some(Region::Outside) | None => 'O',
                    }
                })
                .collect()
        })
        .collect()
}
