use serde::{Deserialize, Serialize};
use std::fmt;

/// Default depth of the move-selection search.
pub const DEFAULT_SEARCH_DEPTH: u8 = 6;

/// Default coefficient of the material term: holding many stones mid-game is
/// usually a liability, so the evaluator charges for the stone-count lead.
pub const DEFAULT_MATERIAL_PENALTY: i32 = 5;

/// Reference 6x6 positional table: corners dominate, the cells next to them
/// are poison, edges are mildly good.
#[rustfmt::skip]
pub const WEIGHTS_6X6: [[i32; 6]; 6] = [
    [120, -40,  20,  20, -40, 120],
    [-40, -60,   1,   1, -60, -40],
    [ 20,   1,   5,   5,   1,  20],
    [ 20,   1,   5,   5,   1,  20],
    [-40, -60,   1,   1, -60, -40],
    [120, -40,  20,  20, -40, 120],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightTableError {
    Empty,
    NotSquare { rows: usize, row: usize, len: usize },
}

impl fmt::Display for WeightTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "weight table has no rows"),
            Self::NotSquare { rows, row, len } => {
                write!(f, "weight table is not square: {rows} rows but row {row} has {len} cells")
            }
        }
    }
}

/// An N x N table of positional weights, fixed at construction and shared
/// read-only by every evaluation. Serialised as nested rows so hand-written
/// JSON configs stay readable; deserialisation re-checks squareness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")]
pub struct WeightTable {
    size: usize,
    values: Vec<i32>,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::classic(6)
    }
}

impl WeightTable {
    /// Build the classic corner/edge/interior weighting for any even board
    /// size: corners 120, edge cells flanking a corner -40, the diagonal
    /// neighbour of a corner -60, remaining edge 20, the rest of the ring
    /// one step inside the edge 1, interior 5. For size 6 this reproduces
    /// `WEIGHTS_6X6` exactly.
    #[must_use]
    pub fn classic(size: usize) -> Self {
        let mut values = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                let dx = x.min(size - 1 - x);
                let dy = y.min(size - 1 - y);
                let w = match (dx, dy) {
                    (0, 0) => 120,
                    (0, 1) | (1, 0) => -40,
                    (1, 1) => -60,
                    (0, _) | (_, 0) => 20,
                    (1, _) | (_, 1) => 1,
                    _ => 5,
                };
                values.push(w);
            }
        }
        Self { size, values }
    }

    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, WeightTableError> {
        if rows.is_empty() {
            return Err(WeightTableError::Empty);
        }
        let size = rows.len();
        let mut values = Vec::with_capacity(size * size);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(WeightTableError::NotSquare {
                    rows: size,
                    row: y,
                    len: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Ok(Self { size, values })
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Weight of cell (x, y); out-of-range coordinates weigh nothing.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        if x >= self.size {
            return 0;
        }
        self.values.get(y * self.size + x).copied().unwrap_or(0)
    }
}

impl TryFrom<Vec<Vec<i32>>> for WeightTable {
    type Error = WeightTableError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<WeightTable> for Vec<Vec<i32>> {
    fn from(table: WeightTable) -> Self {
        table
            .values
            .chunks(table.size)
            .map(|row| row.to_vec())
            .collect()
    }
}
