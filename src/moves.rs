//! Legal single-step moves from a board.

use crate::grid::Board;
use crate::pieces::{Direction, Label};

/// One legal move and the board it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub label: Label,
    pub direction: Direction,
    pub board: Board,
}

/// Enumerates every legal move from `board`.
///
/// Labels are visited in ascending order and, for each label, directions in
/// [`Direction::ALL`] order. The search relies on this order to break ties
/// between equally short solutions.
pub fn all_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();

    for (label, cells) in board.piece_info() {
        for direction in Direction::ALL {
            if let Some(targets) = board.shift_targets(label, &cells, direction) {
                moves.push(Move {
                    label,
                    direction,
                    board: board.with_piece_moved(label, &cells, &targets),
                });
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{PRESET_1, PRESET_2, PRESET_3};

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_opening_moves_in_order() {
        let moves = all_moves(&board(PRESET_1));
        let summary: Vec<(Label, Direction)> =
            moves.iter().map(|m| (m.label, m.direction)).collect();

        assert_eq!(
            summary,
            vec![
                ('I', Direction::Left),
                ('K', Direction::Right),
                ('Y', Direction::Down),
                ('Z', Direction::Down),
            ]
        );
        assert_eq!(moves[0].board.rows()[4], "K.I.");
    }

    #[test]
    fn test_moves_agree_with_apply_move() {
        for rows in [PRESET_1, PRESET_2, PRESET_3] {
            let start = board(rows);
            for m in all_moves(&start) {
                assert!(start.can_move(m.label, m.direction));
                assert_eq!(start.apply_move(m.label, m.direction).unwrap(), m.board);
            }
        }
    }

    #[test]
    fn test_every_feasible_move_is_generated() {
        let start = board(PRESET_2);
        let moves = all_moves(&start);
        for label in start.piece_info().into_keys() {
            for direction in Direction::ALL {
                let generated = moves
                    .iter()
                    .any(|m| m.label == label && m.direction == direction);
                assert_eq!(generated, start.can_move(label, direction), "{label} {direction}");
            }
        }
    }

    #[test]
    fn test_moves_are_reversible() {
        // walk a couple of layers out from each preset
        for rows in [PRESET_1, PRESET_2, PRESET_3] {
            let mut layer = vec![board(rows)];
            for _ in 0..3 {
                let mut next = Vec::new();
                for current in &layer {
                    for m in all_moves(current) {
                        let back = m.direction.opposite();
                        assert!(m.board.can_move(m.label, back));
                        let undone = m.board.apply_move(m.label, back).unwrap();
                        assert_eq!(undone.signature(), current.signature());
                        assert_eq!(&undone, current);
                        next.push(m.board);
                    }
                }
                layer = next;
            }
        }
    }

    #[test]
    fn test_no_moves_on_full_board() {
        assert!(all_moves(&board(&["AB", "CD"])).is_empty());
    }
}
