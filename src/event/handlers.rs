use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument};

use super::models::EventResultModel;
use super::repository::EventRepository;
use super::types::{EventResultRequest, EventResultResponse};
use crate::scoring::{EventRecalculationOutcome, ScoringService};
use crate::shared::{AppError, AppState};

/// HTTP handler for recording (or correcting) an event's actual podium.
///
/// POST /events/{event_id}/result
///
/// Persists the result, then synchronously rescores every prediction for
/// the event before responding. Season-wide statistics are NOT updated here;
/// that is the recalculation job's responsibility.
#[instrument(name = "record_event_result", skip(state, request))]
pub async fn record_event_result(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(request): Json<EventResultRequest>,
) -> Result<Json<EventResultResponse>, AppError> {
    let result = EventResultModel {
        event_id: event_id.clone(),
        first_place_id: request.first_place_id,
        first_place_name: request.first_place_name,
        second_place_id: request.second_place_id,
        second_place_name: request.second_place_name,
        third_place_id: request.third_place_id,
        third_place_name: request.third_place_name,
        updated_at: Utc::now(),
    };
    state.event_repository.upsert_event_result(&result).await?;

    let scoring_service = ScoringService::new(
        Arc::clone(&state.event_repository),
        Arc::clone(&state.prediction_repository),
        Arc::clone(&state.scoring_rule_repository),
    );
    let outcome = scoring_service
        .recalculate_event_predictions(&event_id, &request.season_id)
        .await?;

    let predictions_updated = match outcome {
        EventRecalculationOutcome::Recalculated {
            predictions_updated,
        } => predictions_updated,
        // The result was just written, so this arm is unreachable in practice
        EventRecalculationOutcome::NoResultRecorded => 0,
    };

    info!(
        event_id = %event_id,
        predictions_updated = predictions_updated,
        "Event result recorded and predictions rescored"
    );

    Ok(Json(EventResultResponse {
        event_id,
        predictions_updated,
    }))
}
