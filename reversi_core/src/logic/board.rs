use crate::engine::Move;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Black => 0,
            Self::White => 1,
        }
    }
}

/// The 8 compass directions a capture line can run along.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A square playing board. Cells are stored row-major (`y * size + x`);
/// `None` is an empty cell. Cloning yields an independent board, so every
/// search node can own its position without aliasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(6)
    }
}

impl Board {
    /// Create a board with the standard four-stone opening in the centre.
    /// `size` must be even and at least 4.
    #[must_use]
    pub fn new(size: usize) -> Self {
        debug_assert!(size >= 4 && size % 2 == 0, "opening needs an even size");
        let mut board = Self::empty(size);
        let c = size / 2;
        board.set(c - 1, c - 1, Some(Color::White));
        board.set(c, c, Some(Color::White));
        board.set(c, c - 1, Some(Color::Black));
        board.set(c - 1, c, Some(Color::Black));
        board
    }

    /// Create a board with no stones on it.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.cells.get(y * self.size + x).copied().flatten()
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Option<Color>) {
        if let Some(slot) = self.cells.get_mut(y * self.size + x) {
            *slot = cell;
        }
    }

    /// Number of stones of `color` on the board.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == Some(color)).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Place a stone of `color` on `mv` and flip every opponent run that is
    /// terminated by an own stone. The move is assumed legal; the checked
    /// entry point is `rules::apply_move`.
    pub fn apply_move(&mut self, mv: Move, color: Color) {
        let (x, y) = (mv.x as usize, mv.y as usize);
        self.set(x, y, Some(color));

        let opponent = color.opposite();
        for (dx, dy) in DIRECTIONS {
            let mut nx = x as i32 + dx;
            let mut ny = y as i32 + dy;
            let mut run = Vec::new();

            while self.in_bounds(nx, ny) && self.get(nx as usize, ny as usize) == Some(opponent) {
                run.push((nx as usize, ny as usize));
                nx += dx;
                ny += dy;
            }

            if !run.is_empty()
                && self.in_bounds(nx, ny)
                && self.get(nx as usize, ny as usize) == Some(color)
            {
                for (fx, fy) in run {
                    self.set(fx, fy, Some(color));
                }
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..self.size {
            write!(f, " {}", x % 10)?;
        }
        writeln!(f)?;
        for y in 0..self.size {
            write!(f, "{:>2}", y % 10)?;
            for x in 0..self.size {
                let glyph = match self.get(x, y) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
