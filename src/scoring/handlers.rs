use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use super::models::ScoringRules;
use super::repository::ScoringRuleRepository;
use super::types::{ScoringRulesRequest, ScoringRulesResponse};
use crate::shared::{AppError, AppState};

/// HTTP handler for configuring a season's scoring rules
///
/// PUT /seasons/{season_id}/scoring-rules
#[instrument(name = "put_scoring_rules", skip(state, request))]
pub async fn put_scoring_rules(
    State(state): State<AppState>,
    Path(season_id): Path<String>,
    Json(request): Json<ScoringRulesRequest>,
) -> Result<Json<ScoringRulesResponse>, AppError> {
    let rules = ScoringRules {
        season_id,
        exact_match_points: request.exact_match_points,
        one_off_points: request.one_off_points,
        two_off_points: request.two_off_points,
    };
    rules.validate()?;

    state.scoring_rule_repository.upsert_rules(&rules).await?;

    info!(
        season_id = %rules.season_id,
        exact_match_points = rules.exact_match_points,
        one_off_points = rules.one_off_points,
        two_off_points = rules.two_off_points,
        "Season scoring rules updated"
    );

    Ok(Json(rules.into()))
}
