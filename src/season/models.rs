use serde::{Deserialize, Serialize};

/// A competition season grouping events, predictions and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonModel {
    pub id: String,
    pub name: String,
    /// When set, a secondary ranking metric is computed from each user's N
    /// highest-scoring predictions. When None, ranking falls back to total
    /// points and no best-results metric is stored.
    pub best_results_count: Option<u32>,
}

impl SeasonModel {
    pub fn new(id: String, name: String, best_results_count: Option<u32>) -> Self {
        Self {
            id,
            name,
            best_results_count,
        }
    }
}
