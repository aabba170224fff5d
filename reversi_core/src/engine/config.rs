use crate::engine::SearchError;
use crate::logic::board::Board;
use crate::logic::weights::{WeightTable, DEFAULT_MATERIAL_PENALTY, DEFAULT_SEARCH_DEPTH};
use serde::{Deserialize, Serialize};

/// Injected, immutable engine configuration. Shared behind an `Arc` by the
/// evaluator and the searcher; nothing in the engine mutates it after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Positional weight table; its dimensions decide which board sizes the
    /// engine accepts.
    pub weights: WeightTable,
    /// Fixed search depth in plies.
    pub search_depth: u8,
    /// Coefficient of the stone-count term in the static evaluation.
    pub material_penalty: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: WeightTable::default(),
            search_depth: DEFAULT_SEARCH_DEPTH,
            material_penalty: DEFAULT_MATERIAL_PENALTY,
        }
    }
}

impl EngineConfig {
    /// Build a default-tuned configuration for a given board size.
    #[must_use]
    pub fn for_board_size(size: usize) -> Self {
        Self {
            weights: WeightTable::classic(size),
            ..Self::default()
        }
    }

    /// Load a configuration from JSON. Absent fields keep their defaults,
    /// so partial overrides like `{"search_depth": 4}` are enough.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// The weight table must match the board; anything else is an
    /// out-of-contract call the engine refuses up front.
    pub fn validate_for(&self, board: &Board) -> Result<(), SearchError> {
        if self.weights.size() == board.size() {
            Ok(())
        } else {
            Err(SearchError::WeightTableMismatch {
                weights: self.weights.size(),
                board: board.size(),
            })
        }
    }
}
