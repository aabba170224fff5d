use crate::engine::Move;
use crate::logic::board::{Board, Color, DIRECTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    CellOccupied,
    NoCapture,
    GameOver,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "move is outside the board"),
            Self::CellOccupied => write!(f, "target cell is occupied"),
            Self::NoCapture => write!(f, "move captures no opponent stone"),
            Self::GameOver => write!(f, "the game is already over"),
        }
    }
}

/// Checks legality without allocating: the target must be empty and at least
/// one direction must hold a run of opponent stones closed by an own stone.
pub fn is_legal_move(board: &Board, mv: Move, color: Color) -> bool {
    let (x, y) = (i32::from(mv.x), i32::from(mv.y));
    if !board.in_bounds(x, y) || board.get(x as usize, y as usize).is_some() {
        return false;
    }

    let opponent = color.opposite();
    for (dx, dy) in DIRECTIONS {
        let mut nx = x + dx;
        let mut ny = y + dy;
        let mut seen_opponent = false;

        while board.in_bounds(nx, ny) {
            match board.get(nx as usize, ny as usize) {
                Some(c) if c == opponent => seen_opponent = true,
                Some(_) if seen_opponent => return true,
                _ => break,
            }
            nx += dx;
            ny += dy;
        }
    }

    false
}

/// All coordinates flipped by playing `mv`, across every qualifying
/// direction. Empty for an illegal move.
pub fn captured_stones(board: &Board, mv: Move, color: Color) -> Vec<(usize, usize)> {
    let (x, y) = (i32::from(mv.x), i32::from(mv.y));
    let mut captured = Vec::new();
    if !board.in_bounds(x, y) || board.get(x as usize, y as usize).is_some() {
        return captured;
    }

    let opponent = color.opposite();
    for (dx, dy) in DIRECTIONS {
        let mut nx = x + dx;
        let mut ny = y + dy;
        let mut run = Vec::new();

        while board.in_bounds(nx, ny) && board.get(nx as usize, ny as usize) == Some(opponent) {
            run.push((nx as usize, ny as usize));
            nx += dx;
            ny += dy;
        }

        if !run.is_empty()
            && board.in_bounds(nx, ny)
            && board.get(nx as usize, ny as usize) == Some(color)
        {
            captured.extend(run);
        }
    }

    captured
}

pub fn validate_move(board: &Board, mv: Move, color: Color) -> Result<(), MoveError> {
    let (x, y) = (i32::from(mv.x), i32::from(mv.y));
    if !board.in_bounds(x, y) {
        return Err(MoveError::OutOfBounds);
    }
    if board.get(x as usize, y as usize).is_some() {
        return Err(MoveError::CellOccupied);
    }
    if !is_legal_move(board, mv, color) {
        return Err(MoveError::NoCapture);
    }
    Ok(())
}

/// Checked transition: validates `mv` for `color` and returns the resulting
/// board. The input board is never mutated.
pub fn apply_move(board: &Board, mv: Move, color: Color) -> Result<Board, MoveError> {
    validate_move(board, mv, color)?;
    let mut next = board.clone();
    next.apply_move(mv, color);
    Ok(next)
}
