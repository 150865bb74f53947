//! Sliding-block puzzle solver library.
//!
//! Finds shortest solutions to Klotski-style ("Huarong Path") puzzles: pieces
//! of shape 2x2, 1x2, 2x1 and 1x1 slide one cell at a time until the single
//! 2x2 piece covers the bottom-center goal region. Same-shaped pieces are
//! interchangeable, so the search deduplicates boards by a shape-normalized
//! signature rather than by their concrete labels.

pub mod canonical;
pub mod error;
pub mod grid;
pub mod moves;
pub mod pieces;
pub mod solver;

pub use canonical::{canonical_signature, Signature};
pub use error::{Error, MalformedBoard};
pub use grid::{format_solution, split_rows, Board, OverflowPolicy};
pub use moves::{all_moves, Move};
pub use pieces::{Direction, Label, Piece, Pos, Shape};
pub use solver::{solve, LogProgress, NoProgress, Progress, SearchResult, SearchStats, Solver, Step};

/// Builds a board from text rows and solves it with the default solver.
pub fn solve_rows<S: AsRef<str>>(rows: &[S]) -> Result<SearchResult, Error> {
    let board = Board::from_rows(rows)?;
    Ok(solve(&board))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_rows_already_solved() {
        let solved = solve_rows(&["ADCC", "ADEE", "IKFF", ".BB.", ".BB."]).unwrap();
        assert_eq!(solved.path, Some(Vec::new()));
    }

    #[test]
    fn test_solve_rows_from_text() {
        let rows = split_rows("AA.\nAA.\n...");
        let result = solve_rows(&rows).unwrap();
        assert_eq!(result.move_count(), Some(2));
    }

    #[test]
    fn test_solve_rows_rejects_malformed_input() {
        assert!(matches!(
            solve_rows(&["AB", "A"]),
            Err(Error::MalformedBoard(MalformedBoard::RaggedRows { .. }))
        ));
    }
}
