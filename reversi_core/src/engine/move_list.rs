use crate::engine::Move;

// A board of size N has at most N*N - 4 playable cells; 256 covers every
// supported size.
const MAX_MOVES: usize = 256;

/// Fixed-capacity candidate-move buffer, filled once per node and sorted in
/// place, so move generation never allocates.
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    count: usize,
}

impl Default for MoveList {
    fn default() -> Self {
        Self {
            moves: [Move::default(); MAX_MOVES],
            count: 0,
        }
    }
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: Move) {
        if self.count < self.moves.len() {
            if let Some(slot) = self.moves.get_mut(self.count) {
                *slot = mv;
                self.count += 1;
            }
        } else {
            debug_assert!(false, "MoveList overflow! Max moves: {}", MAX_MOVES);
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.get(0..self.count).unwrap_or(&[]).iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Move> {
        self.moves
            .get_mut(0..self.count)
            .unwrap_or(&mut [])
            .iter_mut()
    }

    /// Stable in-place sort, so equal keys keep their generation order.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Move, &Move) -> std::cmp::Ordering,
    {
        if let Some(slice) = self.moves.get_mut(0..self.count) {
            slice.sort_by(|a, b| compare(a, b));
        }
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iterate() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        list.push(Move::new(1, 0));
        list.push(Move::new(0, 1));
        assert_eq!(list.len(), 2);
        let coords: Vec<(u8, u8)> = list.iter().map(|m| (m.x, m.y)).collect();
        assert_eq!(coords, vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let mut list = MoveList::new();
        for (x, score) in [(0, 10), (1, 30), (2, 10), (3, 30)] {
            list.push(Move {
                x,
                y: 0,
                score,
            });
        }
        list.sort_by(|a, b| b.score.cmp(&a.score));
        let order: Vec<u8> = list.iter().map(|m| m.x).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }
}
