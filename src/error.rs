//! Error types for board construction and piece movement.

use crate::pieces::{Direction, Label, Shape};

/// Reasons a board is rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedBoard {
    #[error("board has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("piece '{label}' does not fill a solid rectangle")]
    NotRectangular { label: Label },

    #[error("piece '{label}' is {width}x{height}, only 1x1, 2x1, 1x2 and 2x2 are supported")]
    UnsupportedShape {
        label: Label,
        width: usize,
        height: usize,
    },

    #[error("pieces '{first}' and '{second}' are both 2x2")]
    MultipleGoalPieces { first: Label, second: Label },

    #[error("{count} pieces of shape {shape} exceed its budget of {budget}")]
    ClassOverflow {
        shape: Shape,
        count: usize,
        budget: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("malformed board: {0}")]
    MalformedBoard(#[from] MalformedBoard),

    #[error("piece '{label}' cannot move {direction}")]
    InvalidMove { label: Label, direction: Direction },
}
