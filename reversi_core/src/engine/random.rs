use crate::engine::{Move, SearchError, SearchStats, Searcher};
use crate::logic::board::{Board, Color};
use crate::logic::generator::MoveGenerator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Baseline opponent: a uniformly random legal move. Seeded, so a fixed
/// seed replays the same game.
pub struct RandomEngine {
    generator: MoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            generator: MoveGenerator::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Searcher for RandomEngine {
    fn select_move(
        &mut self,
        board: &Board,
        turn: Color,
    ) -> Result<Option<(Move, SearchStats)>, SearchError> {
        let moves = self.generator.legal_moves(board, turn);
        if moves.is_empty() {
            return Ok(None);
        }
        let pick = self.rng.gen_range(0..moves.len());
        let mv = moves.iter().nth(pick).copied();
        Ok(mv.map(|mv| (mv, SearchStats::default())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules;

    #[test]
    fn test_random_move_is_legal() {
        let board = Board::new(6);
        let mut engine = RandomEngine::new(1);
        for _ in 0..20 {
            let (mv, _) = engine.select_move(&board, Color::Black).unwrap().unwrap();
            assert!(rules::is_legal_move(&board, mv, Color::Black));
        }
    }

    #[test]
    fn test_same_seed_replays_choices() {
        let board = Board::new(6);
        let mut a = RandomEngine::new(99);
        let mut b = RandomEngine::new(99);
        for _ in 0..10 {
            let (mv_a, _) = a.select_move(&board, Color::Black).unwrap().unwrap();
            let (mv_b, _) = b.select_move(&board, Color::Black).unwrap().unwrap();
            assert_eq!((mv_a.x, mv_a.y), (mv_b.x, mv_b.y));
        }
    }

    #[test]
    fn test_no_moves_passes() {
        let mut engine = RandomEngine::new(0);
        assert!(engine
            .select_move(&Board::empty(6), Color::White)
            .unwrap()
            .is_none());
    }
}
