//! Maze analysis error types

use thiserror::Error;

/// Errors that can occur while parsing or analysing a maze
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("row {row} has length {actual}, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid maze character {ch:?} at ({row}, {col})")]
    InvalidSymbol { ch: char, row: usize, col: usize },

    #[error("unknown maze character {0:?}")]
    UnknownCharacter(char),

    #[error("maze has no start tile")]
    NoStart,

    #[error("maze has {count} start tiles, expected one")]
    MultipleStarts { count: usize },

    #[error("start tile has {found} connecting neighbours, expected 2")]
    AmbiguousStart { found: usize },

    #[error("no pipe connects the start tile's neighbours")]
    UnknownStartShape,

    #[error("loop through the start tile is broken: {reason}")]
    BrokenLoop { reason: String },
}

impl MazeError {
    /// Check if this error describes malformed maze input, as opposed to a
    /// caller indexing outside the grid
    pub fn is_input_error(&self) -> bool {
        !matches!(self, MazeError::OutOfBounds { .. })
    }

    pub(crate) fn broken(reason: impl Into<String>) -> Self {
        MazeError::BrokenLoop {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_input_error() {
        assert!(MazeError::NoStart.is_input_error());
        assert!(MazeError::AmbiguousStart { found: 1 }.is_input_error());
        assert!(!MazeError::OutOfBounds {
            row: 9,
            col: 0,
            height: 2,
            width: 2
        }
        .is_input_error());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            MazeError::RaggedGrid {
                row: 2,
                expected: 5,
                actual: 4
            }
            .to_string(),
            "row 2 has length 4, expected 5"
        );
        assert_eq!(
            MazeError::broken("dead end at (0, 1)").to_string(),
            "loop through the start tile is broken: dead end at (0, 1)"
        );
    }
}
