use crate::engine::move_list::MoveList;
use crate::engine::Move;
use crate::logic::board::{Board, Color};
use crate::logic::rules::is_legal_move;

/// Enumerates legal moves for one side. Enumeration is row-major
/// (y ascending, then x), which fixes the tie-break order downstream.
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveGenerator;

impl MoveGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn legal_moves(&self, board: &Board, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for y in 0..board.size() {
            for x in 0..board.size() {
                let mv = Move::new(x as u8, y as u8);
                if is_legal_move(board, mv, color) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Early-exit variant for pass and game-over detection.
    #[must_use]
    pub fn has_legal_moves(&self, board: &Board, color: Color) -> bool {
        for y in 0..board.size() {
            for x in 0..board.size() {
                if is_legal_move(board, Move::new(x as u8, y as u8), color) {
                    return true;
                }
            }
        }
        false
    }
}
