//! Pipe maze analysis.
//!
//! Parses a grid of pipe tiles, works out the shape of the hidden start
//! tile, walks the loop running through it and classifies every other tile
//! as enclosed by the loop or not.

pub mod analysis;
pub mod enclosure;
pub mod error;
pub mod grid;
pub mod render;
pub mod start;
pub mod tile;
pub mod walker;

// Re-export main types
pub use analysis::{analyze, analyze_str, AnalysisConfig, AnalysisReport};
pub use enclosure::{count_enclosed, scan, Enclosure, Region};
pub use error::{MazeError, Result};
pub use grid::{Cell, Grid};
pub use render::render;
pub use start::{infer_start_shape, resolve_start};
pub use tile::{Direction, Directions, Symbol};
pub use walker::{farthest_distance, walk_loop, Loop};
