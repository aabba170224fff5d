use crate::engine::Move;
use crate::logic::board::{Board, Color};
use crate::logic::generator::MoveGenerator;
use crate::logic::rules::{self, MoveError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    /// Neither side can move; `Some` is the winner on stone count,
    /// `None` a draw.
    Finished(Option<Color>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mv: Move,
    pub color: Color,
    pub flipped: usize,
}

/// Turn management around the core: tracks whose move it is, applies moves
/// through the checked rules entry point, passes automatically when the side
/// to move has no legal move and detects the end of the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub status: GameStatus,
    pub last_move: Option<Move>,
    pub history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(6)
    }
}

impl GameState {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            turn: Color::Black,
            status: GameStatus::Playing,
            last_move: None,
            history: Vec::new(),
        }
    }

    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.status != GameStatus::Playing {
            return Err(MoveError::GameOver);
        }

        let mover = self.turn;
        let before = self.board.count(mover);
        let next = rules::apply_move(&self.board, mv, mover)?;
        // Everything gained beyond the placed stone was flipped.
        let flipped = next.count(mover) - before - 1;

        self.board = next;
        self.history.push(MoveRecord {
            mv,
            color: mover,
            flipped,
        });
        self.last_move = Some(mv);
        self.advance_turn();
        Ok(())
    }

    /// Hand the turn to the opponent; pass back if they cannot answer, and
    /// finish the game once neither side can move.
    fn advance_turn(&mut self) {
        let generator = MoveGenerator::new();
        let opponent = self.turn.opposite();

        if generator.has_legal_moves(&self.board, opponent) {
            self.turn = opponent;
        } else if !generator.has_legal_moves(&self.board, self.turn) {
            self.status = GameStatus::Finished(self.winner());
        }
        // Otherwise the opponent passes and the mover plays again.
    }

    fn winner(&self) -> Option<Color> {
        let black = self.board.count(Color::Black);
        let white = self.board.count(Color::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}
