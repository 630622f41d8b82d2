use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::PredictionModel, repository::PredictionRepository, types::PredictionRequest};
use crate::shared::AppError;

/// Service for the prediction submission path. Rescoring is the only other
/// writer of prediction rows (see the scoring module).
pub struct PredictionService {
    repository: Arc<dyn PredictionRepository + Send + Sync>,
}

impl PredictionService {
    pub fn new(repository: Arc<dyn PredictionRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Submits or replaces a user's podium prediction for an event.
    ///
    /// A resubmission keeps the original submission timestamp and clears any
    /// previously earned points; the next rescoring pass re-awards them.
    #[instrument(skip(self, request))]
    pub async fn submit_prediction(
        &self,
        event_id: &str,
        request: PredictionRequest,
    ) -> Result<PredictionModel, AppError> {
        let now = Utc::now();
        let existing = self
            .repository
            .get_prediction(event_id, &request.user_id)
            .await?;
        let submitted_at = existing.map(|p| p.submitted_at).unwrap_or(now);

        let prediction = PredictionModel {
            event_id: event_id.to_string(),
            user_id: request.user_id,
            first_place_id: request.first_place_id,
            first_place_name: request.first_place_name,
            second_place_id: request.second_place_id,
            second_place_name: request.second_place_name,
            third_place_id: request.third_place_id,
            third_place_name: request.third_place_name,
            points_earned: None,
            submitted_at,
            updated_at: now,
        };

        self.repository.upsert_prediction(&prediction).await?;

        info!(
            event_id = %prediction.event_id,
            user_id = %prediction.user_id,
            "Prediction stored"
        );

        Ok(prediction)
    }
}
