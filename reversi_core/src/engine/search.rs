use crate::engine::config::EngineConfig;
use crate::engine::eval::PositionalEvaluator;
use crate::engine::move_list::MoveList;
use crate::engine::{Evaluator, Move, SearchError, SearchStats, Searcher};
use crate::logic::board::{Board, Color};
use crate::logic::generator::MoveGenerator;
use crate::logic::rules;
use std::sync::Arc;
use std::time::Instant;

/// Safely negatable "infinity" for the alpha-beta window.
const SCORE_INF: i32 = 1_000_000;

/// Depth-bounded negamax with alpha-beta pruning. Every node owns its board
/// (copy on transition), so the search is a pure function of board, colour
/// and configuration: identical inputs yield the identical move.
pub struct NegamaxEngine {
    config: Arc<EngineConfig>,
    evaluator: PositionalEvaluator,
    generator: MoveGenerator,
    nodes_searched: u32,
}

impl NegamaxEngine {
    #[must_use]
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            evaluator: PositionalEvaluator::new(config.clone()),
            config,
            generator: MoveGenerator::new(),
            nodes_searched: 0,
        }
    }

    fn negamax(&mut self, board: &Board, turn: Color, depth: u8, mut alpha: i32, beta: i32) -> i32 {
        self.nodes_searched += 1;

        let moves = self.generator.legal_moves(board, turn);
        if depth == 0 || moves.is_empty() {
            return self.evaluator.evaluate(board, turn);
        }

        let mut best = -SCORE_INF;
        for mv in &moves {
            let Ok(next) = rules::apply_move(board, *mv, turn) else {
                continue;
            };
            let score = -self.negamax(&next, turn.opposite(), depth - 1, -beta, -alpha);
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                // The remaining siblings cannot improve the parent's outcome.
                break;
            }
        }
        best
    }

    /// Root candidates scored by a one-ply static evaluation and sorted
    /// best-first. The sort is stable, so equally scored moves keep their
    /// row-major generation order. Ordering only helps the cutoffs; the
    /// chosen move's value does not depend on it.
    fn ordered_root_moves(&mut self, board: &Board, turn: Color) -> MoveList {
        let mut moves = self.generator.legal_moves(board, turn);
        for mv in moves.iter_mut() {
            if let Ok(next) = rules::apply_move(board, *mv, turn) {
                mv.score = self.evaluator.evaluate(&next, turn);
            }
        }
        moves.sort_by(|a, b| b.score.cmp(&a.score));
        moves
    }
}

impl Searcher for NegamaxEngine {
    fn select_move(
        &mut self,
        board: &Board,
        turn: Color,
    ) -> Result<Option<(Move, SearchStats)>, SearchError> {
        self.config.validate_for(board)?;

        let start = Instant::now();
        self.nodes_searched = 0;
        let depth = self.config.search_depth.max(1);

        let moves = self.ordered_root_moves(board, turn);
        if moves.is_empty() {
            return Ok(None);
        }

        let mut best_move = None;
        let mut best_score = -SCORE_INF;

        for mv in &moves {
            let Ok(next) = rules::apply_move(board, *mv, turn) else {
                continue;
            };
            // Each root candidate gets a fresh full window; the strict
            // comparison keeps the first best seen on ties.
            let score = -self.negamax(&next, turn.opposite(), depth - 1, -SCORE_INF, SCORE_INF);
            if score > best_score {
                best_score = score;
                best_move = Some(*mv);
            }
        }

        #[allow(clippy::cast_possible_truncation)]
        let stats = SearchStats {
            depth,
            nodes: self.nodes_searched,
            time_ms: start.elapsed().as_millis() as u64,
        };
        if let Some(mv) = best_move {
            log::debug!(
                "selected {} score {} depth {} nodes {} in {}ms",
                mv,
                best_score,
                stats.depth,
                stats.nodes,
                stats.time_ms
            );
        }
        Ok(best_move.map(|mv| (mv, stats)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::weights::WeightTable;

    fn engine_for(config: EngineConfig) -> NegamaxEngine {
        NegamaxEngine::new(Arc::new(config))
    }

    /// Exhaustive negamax without the alpha-beta cutoffs, as a reference.
    fn minimax_plain(
        board: &Board,
        turn: Color,
        depth: u8,
        evaluator: &PositionalEvaluator,
        generator: &MoveGenerator,
    ) -> i32 {
        let moves = generator.legal_moves(board, turn);
        if depth == 0 || moves.is_empty() {
            return evaluator.evaluate(board, turn);
        }
        let mut best = -SCORE_INF;
        for mv in &moves {
            let next = rules::apply_move(board, *mv, turn).unwrap();
            let score = -minimax_plain(&next, turn.opposite(), depth - 1, evaluator, generator);
            best = best.max(score);
        }
        best
    }

    #[test]
    fn test_depth_zero_equals_static_evaluation() {
        let config = Arc::new(EngineConfig::default());
        let mut engine = NegamaxEngine::new(config.clone());
        let evaluator = PositionalEvaluator::new(config);

        let board = Board::new(6);
        for turn in [Color::Black, Color::White] {
            assert_eq!(
                engine.negamax(&board, turn, 0, -SCORE_INF, SCORE_INF),
                evaluator.evaluate(&board, turn)
            );
        }
    }

    #[test]
    fn test_pruning_matches_exhaustive_search() {
        let config = Arc::new(EngineConfig::for_board_size(4));
        let mut engine = NegamaxEngine::new(config.clone());
        let evaluator = PositionalEvaluator::new(config);
        let generator = MoveGenerator::new();

        let mut boards = vec![Board::new(4)];
        // A second, asymmetric position one ply in.
        let mut game = crate::logic::game::GameState::new(4);
        let first = *generator
            .legal_moves(&game.board, game.turn)
            .iter()
            .next()
            .unwrap();
        game.make_move(first).unwrap();
        boards.push(game.board.clone());

        for board in &boards {
            for turn in [Color::Black, Color::White] {
                for depth in 1..=3 {
                    let pruned = engine.negamax(board, turn, depth, -SCORE_INF, SCORE_INF);
                    let exhaustive = minimax_plain(board, turn, depth, &evaluator, &generator);
                    assert_eq!(pruned, exhaustive, "depth {depth} diverged for {turn:?}");
                }
            }
        }
    }

    #[test]
    fn test_no_legal_move_returns_pass_sentinel() {
        let mut engine = engine_for(EngineConfig::default());
        let board = Board::empty(6);
        let result = engine.select_move(&board, Color::Black).unwrap();
        assert!(result.is_none());
        assert_eq!(board, Board::empty(6));
    }

    #[test]
    fn test_weight_table_mismatch_is_reported() {
        let mut engine = engine_for(EngineConfig::default());
        let err = engine.select_move(&Board::new(4), Color::Black).unwrap_err();
        assert_eq!(
            err,
            SearchError::WeightTableMismatch {
                weights: 6,
                board: 4
            }
        );
    }

    #[test]
    fn test_select_move_is_deterministic() {
        let board = Board::new(6);
        let mut first = engine_for(EngineConfig::default());
        let mut second = engine_for(EngineConfig::default());

        let (mv_a, _) = first.select_move(&board, Color::Black).unwrap().unwrap();
        let (mv_b, _) = second.select_move(&board, Color::Black).unwrap().unwrap();
        assert_eq!((mv_a.x, mv_a.y), (mv_b.x, mv_b.y));

        // Repeated calls on the same engine agree too.
        let (mv_c, _) = first.select_move(&board, Color::Black).unwrap().unwrap();
        assert_eq!((mv_a.x, mv_a.y), (mv_c.x, mv_c.y));
    }

    #[test]
    fn test_selected_move_is_legal() {
        let mut engine = engine_for(EngineConfig::default());
        let board = Board::new(6);
        let (mv, stats) = engine.select_move(&board, Color::Black).unwrap().unwrap();
        assert!(rules::is_legal_move(&board, mv, Color::Black));
        assert_eq!(stats.depth, 6);
        assert!(stats.nodes > 0);
    }

    #[test]
    fn test_root_ordering_puts_better_move_first() {
        // Two independent one-stone captures for Black. The weight table
        // makes the (2, 2) capture worth more at one ply than the (2, 0)
        // capture, so ordering must override the row-major generation order.
        let weights = WeightTable::from_rows(vec![
            vec![0, 10, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 30, 0, 0],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        let config = EngineConfig {
            weights,
            material_penalty: 0,
            ..EngineConfig::default()
        };

        let mut board = Board::empty(4);
        board.set(0, 0, Some(Color::Black));
        board.set(1, 0, Some(Color::White));
        board.set(0, 2, Some(Color::Black));
        board.set(1, 2, Some(Color::White));

        let mut engine = engine_for(config);
        let ordered: Vec<(u8, u8, i32)> = engine
            .ordered_root_moves(&board, Color::Black)
            .iter()
            .map(|m| (m.x, m.y, m.score))
            .collect();
        assert_eq!(ordered, vec![(2, 2, 20), (2, 0, -20)]);
    }

    #[test]
    fn test_root_ordering_keeps_row_major_order_on_ties() {
        // The opening position is fully symmetric: all four candidates
        // evaluate equal, so the stable sort must not disturb them.
        let mut engine = engine_for(EngineConfig::default());
        let ordered: Vec<(u8, u8)> = engine
            .ordered_root_moves(&Board::new(6), Color::Black)
            .iter()
            .map(|m| (m.x, m.y))
            .collect();
        assert_eq!(ordered, vec![(2, 1), (1, 2), (4, 3), (3, 4)]);
    }
}
