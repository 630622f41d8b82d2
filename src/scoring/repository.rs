use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument};

use super::models::ScoringRules;
use crate::shared::AppError;

/// Trait for scoring rule storage. A season with no stored rules falls back
/// to the documented defaults; absence is never an error.
#[async_trait]
pub trait ScoringRuleRepository {
    async fn get_rules_for_season(&self, season_id: &str)
        -> Result<Option<ScoringRules>, AppError>;
    async fn upsert_rules(&self, rules: &ScoringRules) -> Result<(), AppError>;
}

/// In-memory implementation of ScoringRuleRepository for development and testing
pub struct InMemoryScoringRuleRepository {
    rules: Mutex<HashMap<String, ScoringRules>>,
}

impl Default for InMemoryScoringRuleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryScoringRuleRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            rules: Mutex::new(HashMap::new()),
        }
    }

    /// Creates an in-memory repository with pre-populated rules
    pub fn with_rules(rules: Vec<ScoringRules>) -> Self {
        let mut rule_map = HashMap::new();
        for entry in rules {
            rule_map.insert(entry.season_id.clone(), entry);
        }

        Self {
            rules: Mutex::new(rule_map),
        }
    }
}

#[async_trait]
impl ScoringRuleRepository for InMemoryScoringRuleRepository {
    #[instrument(skip(self))]
    async fn get_rules_for_season(
        &self,
        season_id: &str,
    ) -> Result<Option<ScoringRules>, AppError> {
        let rules = self.rules.lock().unwrap();
        let entry = rules.get(season_id).cloned();

        match &entry {
            Some(_) => debug!(season_id = %season_id, "Scoring rules found in memory"),
            None => debug!(season_id = %season_id, "No scoring rules configured, defaults apply"),
        }

        Ok(entry)
    }

    #[instrument(skip(self, rules))]
    async fn upsert_rules(&self, rules: &ScoringRules) -> Result<(), AppError> {
        debug!(season_id = %rules.season_id, "Upserting scoring rules in memory");

        let mut entries = self.rules.lock().unwrap();
        entries.insert(rules.season_id.clone(), rules.clone());

        Ok(())
    }
}
