use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{calculator::calculate_points, models::ScoringRules, repository::ScoringRuleRepository};
use crate::event::repository::EventRepository;
use crate::prediction::repository::PredictionRepository;
use crate::shared::AppError;

/// Outcome of an event-level rescoring pass.
///
/// Requesting a rescore before any result exists is not an error, just
/// nothing to do yet; callers and tests can tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRecalculationOutcome {
    /// The event has no recorded result; no prediction was touched
    NoResultRecorded,
    /// Every prediction for the event was rescored and persisted
    Recalculated { predictions_updated: usize },
}

/// Service that rescores an event's predictions against its recorded result.
///
/// Runs synchronously inside the request that recorded or corrected the
/// result. Writes are independent upserts; a failure mid-pass leaves the
/// predictions written so far updated (there is no rollback).
pub struct ScoringService {
    event_repository: Arc<dyn EventRepository + Send + Sync>,
    prediction_repository: Arc<dyn PredictionRepository + Send + Sync>,
    rules_repository: Arc<dyn ScoringRuleRepository + Send + Sync>,
}

impl ScoringService {
    pub fn new(
        event_repository: Arc<dyn EventRepository + Send + Sync>,
        prediction_repository: Arc<dyn PredictionRepository + Send + Sync>,
        rules_repository: Arc<dyn ScoringRuleRepository + Send + Sync>,
    ) -> Self {
        Self {
            event_repository,
            prediction_repository,
            rules_repository,
        }
    }

    /// Resolves the season's scoring rules, falling back to the documented
    /// defaults (25/18/15) when none are configured
    pub async fn rules_for_season(&self, season_id: &str) -> Result<ScoringRules, AppError> {
        let rules = self.rules_repository.get_rules_for_season(season_id).await?;
        Ok(rules.unwrap_or_else(|| ScoringRules::defaults_for(season_id)))
    }

    /// Recomputes and persists the point value of every prediction for one
    /// event. Overwrites `points_earned` unconditionally; rescoring the same
    /// unchanged inputs twice yields identical values.
    #[instrument(skip(self))]
    pub async fn recalculate_event_predictions(
        &self,
        event_id: &str,
        season_id: &str,
    ) -> Result<EventRecalculationOutcome, AppError> {
        let Some(result) = self.event_repository.get_event_result(event_id).await? else {
            debug!(event_id = %event_id, "No result recorded yet, nothing to score");
            return Ok(EventRecalculationOutcome::NoResultRecorded);
        };

        let rules = self.rules_for_season(season_id).await?;
        let predictions = self
            .prediction_repository
            .list_predictions_by_event(event_id)
            .await?;

        let mut predictions_updated = 0;
        for mut prediction in predictions {
            let points =
                calculate_points(prediction.predicted_names(), result.podium_names(), &rules);
            prediction.points_earned = Some(points);
            prediction.updated_at = Utc::now();
            self.prediction_repository
                .upsert_prediction(&prediction)
                .await?;
            predictions_updated += 1;
        }

        info!(
            event_id = %event_id,
            season_id = %season_id,
            predictions_updated = predictions_updated,
            "Event predictions rescored"
        );

        Ok(EventRecalculationOutcome::Recalculated {
            predictions_updated,
        })
    }
}
