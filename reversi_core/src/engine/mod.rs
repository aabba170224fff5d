use crate::logic::board::{Board, Color};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod config;
pub mod eval;
pub mod move_list;
pub mod random;
pub mod search;

/// A stone placement. `score` carries the move-ordering key while a move
/// sits in a candidate list; it is not part of the move's identity on the
/// board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Move {
    pub x: u8,
    pub y: u8,
    pub score: i32,
}

impl Move {
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y, score: 0 }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u32,
    pub time_ms: u64,
}

/// Out-of-contract conditions a searcher reports instead of guessing.
/// Having no legal move is *not* one of them; that is the `Ok(None)` pass
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    WeightTableMismatch { weights: usize, board: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightTableMismatch { weights, board } => write!(
                f,
                "weight table is {weights}x{weights} but the board is {board}x{board}"
            ),
        }
    }
}

impl std::error::Error for SearchError {}

/// Static, colour-relative position score: positive is good for `color`.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, color: Color) -> i32;
}

pub trait Searcher {
    /// Pick a move for `turn` on `board`. `Ok(None)` means `turn` has no
    /// legal move (a pass, not a failure).
    fn select_move(
        &mut self,
        board: &Board,
        turn: Color,
    ) -> Result<Option<(Move, SearchStats)>, SearchError>;
}
