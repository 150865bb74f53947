//! Shape-normalized board signatures.
//!
//! Pieces of the same shape are interchangeable, so two boards that differ
//! only by which label sits on which same-shaped footprint are one search
//! node. The signature relabels every piece from a fixed per-shape alphabet,
//! ordering pieces within a shape by their cells, so that any such pair of
//! boards paints the same grid.

use std::collections::BTreeMap;
use std::fmt;

use crate::grid::Board;
use crate::pieces::{Piece, Shape, EMPTY};

/// Canonical form of a board, used as the visited-set key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    width: usize,
    height: usize,
    /// Row-major canonical labels as ASCII, `.` for empty.
    cells: Box<[u8]>,
}

impl Signature {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &cell in row {
                write!(f, "{}", cell as char)?;
            }
        }
        Ok(())
    }
}

/// Computes the canonical signature of a board.
///
/// Pieces are grouped by shape and, within a shape, ordered by their
/// row-major cell lists. The n-th piece of a shape gets the n-th label of
/// that shape's alphabet; pieces past the end of the alphabet reuse its last
/// label.
pub fn canonical_signature(board: &Board) -> Signature {
    let width = board.width();
    let mut shape_groups: BTreeMap<Shape, Vec<Piece>> = BTreeMap::new();
    for piece in board.pieces() {
        shape_groups.entry(piece.shape()).or_default().push(piece);
    }

    let mut cells = vec![EMPTY as u8; width * board.height()].into_boxed_slice();

    for (shape, mut pieces) in shape_groups {
        pieces.sort_by(|a, b| a.cells.cmp(&b.cells));

        let labels = shape.canonical_labels();
        for (i, piece) in pieces.iter().enumerate() {
            let label = labels[i.min(labels.len() - 1)] as u8;
            for &(row, col) in &piece.cells {
                cells[row * width + col] = label;
            }
        }
    }

    Signature {
        width,
        height: board.height(),
        cells,
    }
}

impl Board {
    /// Computes this board's canonical signature.
    pub fn signature(&self) -> Signature {
        canonical_signature(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{Direction, PRESET_1, PRESET_3};

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_canonical_form_of_classic_opening() {
        let signature = board(PRESET_1).signature();

        assert_eq!(signature.width(), 4);
        assert_eq!(signature.height(), 5);
        insta::assert_snapshot!(signature.to_string(), @r"
        BAAC
        BAAC
        DFFE
        DGHE
        I..J
        ");
    }

    #[test]
    fn test_overflowing_shape_reuses_last_label() {
        insta::assert_snapshot!(board(PRESET_3).signature().to_string(), @r"
        AAFF
        AAFF
        GFFH
        IFFJ
        .FF.
        ");
    }

    #[test]
    fn test_relabeling_within_shapes_keeps_signature() {
        let original = board(PRESET_1);
        // swap verticals A and C, and singles Y and K
        let swapped = board(&["CBBA", "CBBA", "DEEX", "DKZX", "Y..I"]);
        // rename every label
        let renamed = board(&["pqqr", "pqqr", "s11t", "s34t", "5..6"]);

        assert_ne!(original, swapped);
        assert_eq!(original.signature(), swapped.signature());
        assert_eq!(original.signature(), renamed.signature());
    }

    #[test]
    fn test_different_layouts_have_different_signatures() {
        let start = board(PRESET_1);
        let moved = start.apply_move('I', Direction::Left).unwrap();
        assert_ne!(start.signature(), moved.signature());
    }

    #[test]
    fn test_signature_depends_on_dimensions() {
        // same cells row-major, different shape of grid
        let wide = board(&["G.H."]);
        let tall = board(&["G.", "H."]);
        assert_ne!(wide.signature(), tall.signature());
    }

    #[test]
    fn test_shared_labels_keep_footprints_apart() {
        // both horizontals paint F, yet the layouts stay distinct
        let pair = board(&["XXYY", "...."]);
        let single = board(&["XX..", "..YY"]);
        assert_ne!(pair.signature(), single.signature());
        assert_eq!(pair.signature().to_string(), "FFFF\n....");
    }
}
