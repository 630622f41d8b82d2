use serde::{Deserialize, Serialize};

/// Request payload for recording or correcting an event's actual podium
#[derive(Debug, Deserialize)]
pub struct EventResultRequest {
    pub season_id: String,
    pub first_place_id: String,
    pub first_place_name: String,
    pub second_place_id: String,
    pub second_place_name: String,
    pub third_place_id: String,
    pub third_place_name: String,
}

/// Response for a recorded result, including how many predictions the
/// synchronous rescoring pass updated
#[derive(Debug, Serialize, Deserialize)]
pub struct EventResultResponse {
    pub event_id: String,
    pub predictions_updated: usize,
}
