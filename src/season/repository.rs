use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument};

use super::models::SeasonModel;
use crate::shared::AppError;

/// Trait for season lookups. The statistics engine consults the season only
/// for its optional best-N configuration.
#[async_trait]
pub trait SeasonRepository {
    async fn get_season(&self, season_id: &str) -> Result<Option<SeasonModel>, AppError>;
}

/// In-memory implementation of SeasonRepository for development and testing
pub struct InMemorySeasonRepository {
    seasons: Mutex<HashMap<String, SeasonModel>>,
}

impl Default for InMemorySeasonRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySeasonRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            seasons: Mutex::new(HashMap::new()),
        }
    }

    /// Creates an in-memory repository with pre-populated seasons
    pub fn with_seasons(seasons: Vec<SeasonModel>) -> Self {
        let mut season_map = HashMap::new();
        for season in seasons {
            season_map.insert(season.id.clone(), season);
        }

        Self {
            seasons: Mutex::new(season_map),
        }
    }
}

#[async_trait]
impl SeasonRepository for InMemorySeasonRepository {
    #[instrument(skip(self))]
    async fn get_season(&self, season_id: &str) -> Result<Option<SeasonModel>, AppError> {
        let seasons = self.seasons.lock().unwrap();
        let season = seasons.get(season_id).cloned();

        match &season {
            Some(s) => debug!(season_id = %season_id, name = %s.name, "Season found in memory"),
            None => debug!(season_id = %season_id, "Season not found in memory"),
        }

        Ok(season)
    }
}
