use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::PredictionModel;
use crate::shared::AppError;

/// Trait for prediction storage. Every write is an independent upsert keyed
/// by (event_id, user_id); there are no multi-row transactions.
#[async_trait]
pub trait PredictionRepository {
    async fn get_prediction(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> Result<Option<PredictionModel>, AppError>;
    async fn list_predictions_by_event(
        &self,
        event_id: &str,
    ) -> Result<Vec<PredictionModel>, AppError>;

    /// Lists every already-scored prediction (non-null points) across the
    /// given season's events. Unscored predictions are excluded; they
    /// contribute nothing to statistics.
    async fn list_scored_predictions_for_season(
        &self,
        season_id: &str,
        event_ids: &[String],
    ) -> Result<Vec<PredictionModel>, AppError>;

    async fn upsert_prediction(&self, prediction: &PredictionModel) -> Result<(), AppError>;
}

/// In-memory implementation of PredictionRepository for development and testing
pub struct InMemoryPredictionRepository {
    predictions: Mutex<HashMap<(String, String), PredictionModel>>,
}

impl Default for InMemoryPredictionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPredictionRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            predictions: Mutex::new(HashMap::new()),
        }
    }

    /// Creates an in-memory repository with pre-populated predictions
    pub fn with_predictions(predictions: Vec<PredictionModel>) -> Self {
        let mut prediction_map = HashMap::new();
        for prediction in predictions {
            prediction_map.insert(
                (prediction.event_id.clone(), prediction.user_id.clone()),
                prediction,
            );
        }

        Self {
            predictions: Mutex::new(prediction_map),
        }
    }

    /// Returns the current number of stored predictions
    pub fn prediction_count(&self) -> usize {
        self.predictions.lock().unwrap().len()
    }
}

#[async_trait]
impl PredictionRepository for InMemoryPredictionRepository {
    #[instrument(skip(self))]
    async fn get_prediction(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> Result<Option<PredictionModel>, AppError> {
        let predictions = self.predictions.lock().unwrap();
        Ok(predictions
            .get(&(event_id.to_string(), user_id.to_string()))
            .cloned())
    }

    #[instrument(skip(self))]
    async fn list_predictions_by_event(
        &self,
        event_id: &str,
    ) -> Result<Vec<PredictionModel>, AppError> {
        let predictions = self.predictions.lock().unwrap();
        let event_predictions: Vec<PredictionModel> = predictions
            .values()
            .filter(|prediction| prediction.event_id == event_id)
            .cloned()
            .collect();

        debug!(event_id = %event_id, count = event_predictions.len(), "Listed event predictions");
        Ok(event_predictions)
    }

    #[instrument(skip(self, event_ids))]
    async fn list_scored_predictions_for_season(
        &self,
        season_id: &str,
        event_ids: &[String],
    ) -> Result<Vec<PredictionModel>, AppError> {
        let predictions = self.predictions.lock().unwrap();
        let scored: Vec<PredictionModel> = predictions
            .values()
            .filter(|prediction| {
                prediction.is_scored() && event_ids.contains(&prediction.event_id)
            })
            .cloned()
            .collect();

        debug!(
            season_id = %season_id,
            count = scored.len(),
            "Listed scored predictions for season"
        );
        Ok(scored)
    }

    #[instrument(skip(self, prediction))]
    async fn upsert_prediction(&self, prediction: &PredictionModel) -> Result<(), AppError> {
        debug!(
            event_id = %prediction.event_id,
            user_id = %prediction.user_id,
            points_earned = ?prediction.points_earned,
            "Upserting prediction in memory"
        );

        let mut predictions = self.predictions.lock().unwrap();
        predictions.insert(
            (prediction.event_id.clone(), prediction.user_id.clone()),
            prediction.clone(),
        );

        Ok(())
    }
}

/// PostgreSQL implementation of prediction repository
pub struct PostgresPredictionRepository {
    pool: PgPool,
}

impl PostgresPredictionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_prediction(row: &sqlx::postgres::PgRow) -> PredictionModel {
        PredictionModel {
            event_id: row.get("event_id"),
            user_id: row.get("user_id"),
            first_place_id: row.get("first_place_id"),
            first_place_name: row.get("first_place_name"),
            second_place_id: row.get("second_place_id"),
            second_place_name: row.get("second_place_name"),
            third_place_id: row.get("third_place_id"),
            third_place_name: row.get("third_place_name"),
            points_earned: row.get("points_earned"),
            submitted_at: row.get::<DateTime<Utc>, _>("submitted_at"),
            updated_at: row.get::<DateTime<Utc>, _>("updated_at"),
        }
    }
}

#[async_trait]
impl PredictionRepository for PostgresPredictionRepository {
    #[instrument(skip(self))]
    async fn get_prediction(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> Result<Option<PredictionModel>, AppError> {
        let row = sqlx::query(
            "SELECT event_id, user_id, first_place_id, first_place_name, second_place_id, second_place_name, third_place_id, third_place_name, points_earned, submitted_at, updated_at FROM predictions WHERE event_id = $1 AND user_id = $2"
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, event_id = %event_id, user_id = %user_id, "Failed to fetch prediction from database");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(row.as_ref().map(Self::row_to_prediction))
    }

    #[instrument(skip(self))]
    async fn list_predictions_by_event(
        &self,
        event_id: &str,
    ) -> Result<Vec<PredictionModel>, AppError> {
        let rows = sqlx::query(
            "SELECT event_id, user_id, first_place_id, first_place_name, second_place_id, second_place_name, third_place_id, third_place_name, points_earned, submitted_at, updated_at FROM predictions WHERE event_id = $1"
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, event_id = %event_id, "Failed to list event predictions from database");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(rows.iter().map(Self::row_to_prediction).collect())
    }

    #[instrument(skip(self, event_ids))]
    async fn list_scored_predictions_for_season(
        &self,
        season_id: &str,
        event_ids: &[String],
    ) -> Result<Vec<PredictionModel>, AppError> {
        let rows = sqlx::query(
            "SELECT event_id, user_id, first_place_id, first_place_name, second_place_id, second_place_name, third_place_id, third_place_name, points_earned, submitted_at, updated_at FROM predictions WHERE event_id = ANY($1) AND points_earned IS NOT NULL"
        )
        .bind(event_ids.to_vec())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, season_id = %season_id, "Failed to list scored predictions from database");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(rows.iter().map(Self::row_to_prediction).collect())
    }

    #[instrument(skip(self, prediction))]
    async fn upsert_prediction(&self, prediction: &PredictionModel) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO predictions (event_id, user_id, first_place_id, first_place_name, second_place_id, second_place_name, third_place_id, third_place_name, points_earned, submitted_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             ON CONFLICT (event_id, user_id) DO UPDATE SET \
             first_place_id = $3, first_place_name = $4, second_place_id = $5, second_place_name = $6, third_place_id = $7, third_place_name = $8, points_earned = $9, updated_at = $11"
        )
        .bind(&prediction.event_id)
        .bind(&prediction.user_id)
        .bind(&prediction.first_place_id)
        .bind(&prediction.first_place_name)
        .bind(&prediction.second_place_id)
        .bind(&prediction.second_place_name)
        .bind(&prediction.third_place_id)
        .bind(&prediction.third_place_name)
        .bind(prediction.points_earned)
        .bind(prediction.submitted_at)
        .bind(prediction.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, event_id = %prediction.event_id, user_id = %prediction.user_id, "Failed to upsert prediction in database");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}
