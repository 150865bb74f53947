//! Board representation and single-piece moves.
//!
//! A board is a flat row-major array of cells, each holding a piece label or
//! nothing. Boards are immutable values: moving a piece produces a new board.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, MalformedBoard};
use crate::pieces::{Direction, Label, Piece, Pos, Shape, EMPTY};
use crate::solver::Step;

/// Columns of the goal region. Its rows are the bottom two of the board.
const GOAL_COLS: [usize; 2] = [1, 2];

/// What construction does when more pieces share a shape than that shape has
/// canonical labels.
///
/// The 2x2 shape is always limited to one piece, whatever the policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Extra pieces share the last canonical label of their shape.
    #[default]
    Share,
    /// Construction fails with [`MalformedBoard::ClassOverflow`].
    Reject,
}

/// An immutable, validated puzzle board of labeled pieces and empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<Label>>,
}

impl Board {
    /// Builds a board from equal-length rows, `.` marking empty cells.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, Error> {
        Self::from_rows_with(rows, OverflowPolicy::default())
    }

    /// Builds a board, applying `policy` to shapes with too many pieces.
    pub fn from_rows_with<S: AsRef<str>>(
        rows: &[S],
        policy: OverflowPolicy,
    ) -> Result<Self, Error> {
        let first = rows.first().ok_or(MalformedBoard::Empty)?;
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(MalformedBoard::Empty.into());
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, text) in rows.iter().enumerate() {
            let found = text.as_ref().chars().count();
            if found != width {
                return Err(MalformedBoard::RaggedRows {
                    row,
                    expected: width,
                    found,
                }
                .into());
            }
            cells.extend(text.as_ref().chars().map(|ch| (ch != EMPTY).then_some(ch)));
        }

        let board = Self {
            width,
            height: rows.len(),
            cells,
        };
        board.validate(policy)?;
        Ok(board)
    }

    fn validate(&self, policy: OverflowPolicy) -> Result<(), MalformedBoard> {
        let mut shape_counts: BTreeMap<Shape, usize> = BTreeMap::new();
        let mut square: Option<Label> = None;

        for piece in self.pieces() {
            if !piece.is_solid() {
                return Err(MalformedBoard::NotRectangular { label: piece.label });
            }
            let shape = piece.shape();
            if !shape.is_supported() {
                return Err(MalformedBoard::UnsupportedShape {
                    label: piece.label,
                    width: shape.width,
                    height: shape.height,
                });
            }
            if shape == Shape::SQUARE {
                if let Some(first) = square {
                    return Err(MalformedBoard::MultipleGoalPieces {
                        first,
                        second: piece.label,
                    });
                }
                square = Some(piece.label);
            }
            *shape_counts.entry(shape).or_default() += 1;
        }

        if policy == OverflowPolicy::Reject {
            if let Some((&shape, &count)) = shape_counts
                .iter()
                .find(|(shape, count)| **count > shape.budget())
            {
                return Err(MalformedBoard::ClassOverflow {
                    shape,
                    count,
                    budget: shape.budget(),
                });
            }
        }

        Ok(())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, (row, col): Pos) -> usize {
        row * self.width + col
    }

    #[inline]
    fn pos(&self, index: usize) -> Pos {
        (index / self.width, index % self.width)
    }

    /// Returns the label at `pos`, or `None` for an empty or out-of-range cell.
    pub fn get(&self, pos: Pos) -> Option<Label> {
        if pos.0 >= self.height || pos.1 >= self.width {
            return None;
        }
        self.cells[self.index(pos)]
    }

    /// Returns the board as text rows.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|cell| cell.unwrap_or(EMPTY)).collect())
            .collect()
    }

    /// Groups occupied cells by label, labels in ascending order and each
    /// piece's cells in row-major order.
    pub fn piece_info(&self) -> BTreeMap<Label, Vec<Pos>> {
        let mut pieces: BTreeMap<Label, Vec<Pos>> = BTreeMap::new();
        for (index, cell) in self.cells.iter().enumerate() {
            if let Some(label) = *cell {
                pieces.entry(label).or_default().push(self.pos(index));
            }
        }
        pieces
    }

    /// All pieces on the board, ordered by label.
    pub fn pieces(&self) -> Vec<Piece> {
        self.piece_info()
            .into_iter()
            .map(|(label, cells)| Piece { label, cells })
            .collect()
    }

    /// Cells carrying `label`, in row-major order.
    pub fn cells_of(&self, label: Label) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Some(label))
            .map(|(index, _)| self.pos(index))
            .collect()
    }

    /// True if every cell of `label` can shift one step in `direction`
    /// onto in-bounds cells that are empty or already part of `label`.
    ///
    /// A label not on the board cannot move.
    pub fn can_move(&self, label: Label, direction: Direction) -> bool {
        let cells = self.cells_of(label);
        !cells.is_empty() && self.shift_targets(label, &cells, direction).is_some()
    }

    /// Returns a new board with `label` shifted one step in `direction`.
    pub fn apply_move(&self, label: Label, direction: Direction) -> Result<Board, Error> {
        let cells = self.cells_of(label);
        if cells.is_empty() {
            return Err(Error::InvalidMove { label, direction });
        }
        self.shift_targets(label, &cells, direction)
            .map(|targets| self.with_piece_moved(label, &cells, &targets))
            .ok_or(Error::InvalidMove { label, direction })
    }

    /// Computes where `cells` land after one step, or `None` if the step is
    /// blocked by the edge or another piece.
    pub(crate) fn shift_targets(
        &self,
        label: Label,
        cells: &[Pos],
        direction: Direction,
    ) -> Option<Vec<Pos>> {
        cells
            .iter()
            .map(|&pos| {
                let target = direction.step(pos, self.width, self.height)?;
                match self.cells[self.index(target)] {
                    None => Some(target),
                    Some(other) if other == label => Some(target),
                    Some(_) => None,
                }
            })
            .collect()
    }

    /// Clears `from`, then paints `label` onto `to`.
    pub(crate) fn with_piece_moved(&self, label: Label, from: &[Pos], to: &[Pos]) -> Board {
        let mut cells = self.cells.clone();
        for &pos in from {
            cells[self.index(pos)] = None;
        }
        for &pos in to {
            cells[self.index(pos)] = Some(label);
        }
        Board {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// True if the piece with exactly four cells covers the bottom two rows
    /// of the goal columns.
    ///
    /// Boards without such a piece, or too small to hold the goal region,
    /// are never goals.
    pub fn is_goal(&self) -> bool {
        if self.height < 2 || self.width <= GOAL_COLS[1] {
            return false;
        }
        let Some(label) = self.get((self.height - 1, GOAL_COLS[0])) else {
            return false;
        };

        let covers_region = (self.height - 2..self.height)
            .all(|row| GOAL_COLS.iter().all(|&col| self.get((row, col)) == Some(label)));

        covers_region && self.cells.iter().filter(|&&cell| cell == Some(label)).count() == 4
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows().join("\n"))
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Board::from_rows(&split_rows(text))
    }
}

/// Splits board text into rows.
///
/// Text containing a newline is split into lines, anything else on commas.
/// Rows are trimmed and blank rows dropped.
pub fn split_rows(text: &str) -> Vec<String> {
    let rows: Vec<&str> = if text.contains('\n') {
        text.lines().collect()
    } else {
        text.split(',').collect()
    };

    rows.into_iter()
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(String::from)
        .collect()
}

/// Formats a solution as numbered steps, each followed by the board it
/// produces.
pub fn format_solution(initial: &Board, steps: &[Step]) -> String {
    let mut output = String::new();
    output.push_str("Step 0: Initial Position\n");
    output.push_str(&format!("{initial}\n\n"));

    for (i, step) in steps.iter().enumerate() {
        output.push_str(&format!(
            "Step {}: Move piece '{}' {}\n",
            i + 1,
            step.label,
            step.direction
        ));
        output.push_str(&format!("{}\n\n", step.board));
    }

    output
}
