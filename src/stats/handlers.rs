use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::models::{RecalculationJob, UserStatistics};
use super::repository::UserStatisticsRepository;
use super::service::StatsService;
use super::types::RecalculationStartedResponse;
use crate::shared::{AppError, AppState};

fn stats_service(state: &AppState) -> StatsService {
    StatsService::new(
        Arc::clone(&state.season_repository),
        Arc::clone(&state.event_repository),
        Arc::clone(&state.prediction_repository),
        Arc::clone(&state.user_repository),
        Arc::clone(&state.statistics_repository),
        Arc::clone(&state.job_repository),
    )
}

/// HTTP handler for triggering a season-wide statistics recalculation
///
/// POST /seasons/{season_id}/recalculation
/// Fire-and-forget: responds 202 with the job id as soon as the job record
/// is persisted; the aggregation itself runs in the background.
#[instrument(name = "start_season_recalculation", skip(state))]
pub async fn start_season_recalculation(
    State(state): State<AppState>,
    Path(season_id): Path<String>,
) -> Result<(StatusCode, Json<RecalculationStartedResponse>), AppError> {
    let service = stats_service(&state);
    let job_id = service.start_season_recalculation(&season_id).await?;

    info!(job_id = %job_id, season_id = %season_id, "Recalculation job accepted");

    Ok((
        StatusCode::ACCEPTED,
        Json(RecalculationStartedResponse { job_id, season_id }),
    ))
}

/// HTTP handler for polling a recalculation job's status
///
/// GET /recalculation-jobs/{job_id}
#[instrument(name = "get_job_status", skip(state))]
pub async fn get_job_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<RecalculationJob>, AppError> {
    let service = stats_service(&state);
    let job = service
        .get_job(&job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", job_id)))?;

    Ok(Json(job))
}

/// HTTP handler for the season leaderboard
///
/// GET /seasons/{season_id}/statistics
/// Rows are ranked by best-N points when the season defines them, falling
/// back to total points.
#[instrument(name = "get_season_statistics", skip(state))]
pub async fn get_season_statistics(
    State(state): State<AppState>,
    Path(season_id): Path<String>,
) -> Result<Json<Vec<UserStatistics>>, AppError> {
    let mut rows = state
        .statistics_repository
        .list_statistics_for_season(&season_id)
        .await?;

    rows.sort_by(|a, b| {
        b.ranking_points()
            .cmp(&a.ranking_points())
            .then_with(|| b.total_points.cmp(&a.total_points))
            .then_with(|| a.username.cmp(&b.username))
    });

    Ok(Json(rows))
}
