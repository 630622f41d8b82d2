use chrono::Utc;

use podium::event::models::{EventModel, EventResultModel};
use podium::prediction::models::PredictionModel;

/// Creates an event in the given season
pub fn event(event_id: &str, season_id: &str) -> EventModel {
    EventModel::new(
        event_id.to_string(),
        season_id.to_string(),
        format!("Grand Prix {}", event_id),
        Utc::now(),
    )
}

/// Creates an actual result with the given podium names
pub fn event_result(event_id: &str, podium: [&str; 3]) -> EventResultModel {
    EventResultModel {
        event_id: event_id.to_string(),
        first_place_id: podium[0].to_lowercase(),
        first_place_name: podium[0].to_string(),
        second_place_id: podium[1].to_lowercase(),
        second_place_name: podium[1].to_string(),
        third_place_id: podium[2].to_lowercase(),
        third_place_name: podium[2].to_string(),
        updated_at: Utc::now(),
    }
}

/// Creates a prediction that has not yet been scored
pub fn unscored_prediction(event_id: &str, user_id: &str, podium: [&str; 3]) -> PredictionModel {
    PredictionModel {
        event_id: event_id.to_string(),
        user_id: user_id.to_string(),
        first_place_id: podium[0].to_lowercase(),
        first_place_name: podium[0].to_string(),
        second_place_id: podium[1].to_lowercase(),
        second_place_name: podium[1].to_string(),
        third_place_id: podium[2].to_lowercase(),
        third_place_name: podium[2].to_string(),
        points_earned: None,
        submitted_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Creates a prediction that already carries a point value
pub fn scored_prediction(
    event_id: &str,
    user_id: &str,
    podium: [&str; 3],
    points: i32,
) -> PredictionModel {
    let mut prediction = unscored_prediction(event_id, user_id, podium);
    prediction.points_earned = Some(points);
    prediction
}
