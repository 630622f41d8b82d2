use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::service::PredictionService;
use super::types::{PredictionRequest, PredictionResponse};
use crate::shared::{AppError, AppState};

/// HTTP handler for submitting a podium prediction
///
/// POST /events/{event_id}/predictions
#[instrument(name = "submit_prediction", skip(state, request))]
pub async fn submit_prediction(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>, AppError> {
    let service = PredictionService::new(Arc::clone(&state.prediction_repository));
    let prediction = service.submit_prediction(&event_id, request).await?;

    info!(
        event_id = %prediction.event_id,
        user_id = %prediction.user_id,
        "Prediction submitted"
    );

    Ok(Json(prediction.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::AppStateBuilder;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use tower::ServiceExt; // for `oneshot`

    #[tokio::test]
    async fn test_submit_prediction_handler() {
        let app_state = AppStateBuilder::new().build();

        let app = Router::new()
            .route(
                "/events/:event_id/predictions",
                axum::routing::post(submit_prediction),
            )
            .with_state(app_state);

        let payload = serde_json::json!({
            "user_id": "user-1",
            "first_place_id": "d1",
            "first_place_name": "Verstappen",
            "second_place_id": "d2",
            "second_place_name": "Norris",
            "third_place_id": "d3",
            "third_place_name": "Leclerc",
        });

        let request = Request::builder()
            .method("POST")
            .uri("/events/gp-1/predictions")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let prediction: PredictionResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(prediction.event_id, "gp-1");
        assert_eq!(prediction.user_id, "user-1");
        assert_eq!(prediction.points_earned, None);
    }
}
