//! End-to-end maze analysis.
//!
//! Runs start resolution, the loop walk and the enclosure scan in order and
//! collects both answers into an [`AnalysisReport`]. Any failure aborts the
//! whole analysis; there are no partial reports.

use log::info;
use serde::{Deserialize, Serialize};

use crate::enclosure::scan;
use crate::error::Result;
use crate::grid::{Cell, Grid};
use crate::render::render;
use crate::start::resolve_start;
use crate::tile::Symbol;
use crate::walker::walk_loop;

/// Configuration for an analysis run
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    /// Upper bound on loop walk steps (default: number of grid cells)
    pub max_steps: Option<usize>,
    /// Include the rendered classification map in the report
    pub render: bool,
}

/// Result of analysing a maze
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub start: Cell,
    pub start_shape: Symbol,
    pub loop_length: usize,
    /// Steps from the start to the farthest loop tile
    pub farthest_distance: usize,
    /// Tiles enclosed by the loop
    pub enclosed: usize,
    pub outside: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<Vec<String>>,
}

/// Parse and analyse a maze given as text
pub fn analyze_str(input: &str, config: &AnalysisConfig) -> Result<AnalysisReport> {
    let mut grid: Grid = input.parse()?;
    analyze(&mut grid, config)
}

/// Analyse a parsed maze. Records the resolved start shape on `grid`.
pub fn analyze(grid: &mut Grid, config: &AnalysisConfig) -> Result<AnalysisReport> {
    let (start, start_shape) = resolve_start(grid)?;
    let path = walk_loop(grid, config.max_steps)?;
    let enclosure = scan(grid, &path);

    let report = AnalysisReport {
        start,
        start_shape,
        loop_length: path.len(),
        farthest_distance: path.farthest_distance(),
        enclosed: enclosure.inside(),
        outside: enclosure.outside(),
        map: config.render.then(|| render(grid, &enclosure)),
    };

    let (height, width) = grid.dimensions();
    info!(
        "analysed {}x{} maze: loop of {} tiles, farthest {}, enclosed {}",
        height, width, report.loop_length, report.farthest_distance, report.enclosed
    );
    Ok(report)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::walker::farthest_distance;
    use proptest::prelude::*;

    /// A ground-filled grid with one rectangular loop whose interior is
    /// filled with arbitrary junk pipe.
    fn rectangle_maze() -> impl Strategy<Value = (String, usize, usize)> {
        (3usize..12, 3usize..12)
            .prop_flat_map(|(h, w)| (Just(h), Just(w), 0..h - 1, 0..w - 1))
            .prop_flat_map(|(h, w, top, left)| {
                (
                    Just(h),
                    Just(w),
                    Just(top),
                    Just(left),
                    top + 1..h,
                    left + 1..w,
                    prop::collection::vec(prop::sample::select(b"|-LJ7F.".to_vec()), h * w),
                )
            })
            .prop_map(|(h, w, top, left, bottom, right, junk)| {
                let mut rows = Vec::with_capacity(h);
                for r in 0..h {
                    let row: String = (0..w)
                        .map(|c| {
                            let on_rows = r == top || r == bottom;
                            let on_cols = c == left || c == right;
                            let within = (top..=bottom).contains(&r) && (left..=right).contains(&c);
                            match (r, c) {
                                _ if !within => '.',
                                (r, c) if r == top && c == left => 'S',
                                (r, c) if r == top && c == right => '7',
                                (r, c) if r == bottom && c == left => 'L',
                                (r, c) if r == bottom && c == right => 'J',
                                _ if on_rows => '-',
                                _ if on_cols => '|',
                                _ => junk[r * w + c] as char,
                            }
                        })
                        .collect();
                    rows.push(row);
                }
                let loop_len = 2 * ((bottom - top) + (right - left));
                let enclosed = (bottom - top - 1) * (right - left - 1);
                (rows.join("\n"), loop_len, enclosed)
            })
    }

    proptest! {
        #[test]
        fn test_rectangle_loops((maze, loop_len, enclosed) in rectangle_maze()) {
            let report = analyze_str(&maze, &AnalysisConfig::default()).unwrap();
            prop_assert_eq!(report.start_shape, Symbol::BendSE);
            prop_assert_eq!(report.loop_length, loop_len);
            prop_assert_eq!(report.farthest_distance, loop_len / 2);
            prop_assert_eq!(report.enclosed, enclosed);
        }

        #[test]
        fn test_farthest_distance_rounding(len in 0usize..10_000) {
            let even = len * 2;
            prop_assert_eq!(farthest_distance(even), farthest_distance(even + 1) - 1);
            prop_assert_eq!(farthest_distance(even + 1), farthest_distance(even + 2));
            prop_assert_eq!(farthest_distance(even), even / 2);
        }
    }
}
