use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request payload for submitting or replacing a podium prediction
#[derive(Debug, Deserialize)]
pub struct PredictionRequest {
    pub user_id: String,
    pub first_place_id: String,
    pub first_place_name: String,
    pub second_place_id: String,
    pub second_place_name: String,
    pub third_place_id: String,
    pub third_place_name: String,
}

/// Response for a stored prediction
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub event_id: String,
    pub user_id: String,
    pub first_place_name: String,
    pub second_place_name: String,
    pub third_place_name: String,
    pub points_earned: Option<i32>,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::prediction::models::PredictionModel> for PredictionResponse {
    fn from(model: crate::prediction::models::PredictionModel) -> Self {
        Self {
            event_id: model.event_id,
            user_id: model.user_id,
            first_place_name: model.first_place_name,
            second_place_name: model.second_place_name,
            third_place_name: model.third_place_name,
            points_earned: model.points_earned,
            submitted_at: model.submitted_at,
            updated_at: model.updated_at,
        }
    }
}
