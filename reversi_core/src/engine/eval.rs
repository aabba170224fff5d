use crate::engine::config::EngineConfig;
use crate::engine::Evaluator;
use crate::logic::board::{Board, Color};
use std::sync::Arc;

/// Weight-table evaluation with a material correction:
///
/// `score = sum(weights of own stones) - sum(weights of opponent stones)
///        - material_penalty * (own count - opponent count)`
///
/// Both terms negate exactly under a colour swap, so
/// `evaluate(b, c) == -evaluate(b, c.opposite())` holds for every board.
pub struct PositionalEvaluator {
    config: Arc<EngineConfig>,
}

impl PositionalEvaluator {
    #[must_use]
    pub const fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }
}

impl Evaluator for PositionalEvaluator {
    fn evaluate(&self, board: &Board, color: Color) -> i32 {
        let weights = &self.config.weights;
        let mut score = 0;
        let mut own = 0i32;
        let mut theirs = 0i32;

        for y in 0..board.size() {
            for x in 0..board.size() {
                match board.get(x, y) {
                    Some(c) if c == color => {
                        score += weights.get(x, y);
                        own += 1;
                    }
                    Some(_) => {
                        score -= weights.get(x, y);
                        theirs += 1;
                    }
                    None => {}
                }
            }
        }

        score - self.config.material_penalty * (own - theirs)
    }
}
