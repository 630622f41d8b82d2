use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database model for the predictions table.
///
/// A prediction is keyed by (event_id, user_id): one podium guess per user
/// per event. `points_earned` stays None until the event's result is
/// recorded; rescoring always overwrites it, never accumulates.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PredictionModel {
    pub event_id: String,
    pub user_id: String,
    pub first_place_id: String,
    pub first_place_name: String,
    pub second_place_id: String,
    pub second_place_name: String,
    pub third_place_id: String,
    pub third_place_name: String,
    pub points_earned: Option<i32>,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PredictionModel {
    /// The predicted podium names in predicted finishing order
    pub fn predicted_names(&self) -> [&str; 3] {
        [
            &self.first_place_name,
            &self.second_place_name,
            &self.third_place_name,
        ]
    }

    /// Whether the prediction has been scored against a recorded result
    pub fn is_scored(&self) -> bool {
        self.points_earned.is_some()
    }
}
