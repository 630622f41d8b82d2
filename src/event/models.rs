use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A competitive event within a season (one race, one round)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventModel {
    pub id: String,
    pub season_id: String,
    pub name: String,
    pub starts_at: DateTime<Utc>,
}

impl EventModel {
    pub fn new(id: String, season_id: String, name: String, starts_at: DateTime<Utc>) -> Self {
        Self {
            id,
            season_id,
            name,
            starts_at,
        }
    }
}

/// The recorded actual podium for one event. At most one result per event;
/// written by an administrator and corrected in place via upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResultModel {
    pub event_id: String,
    pub first_place_id: String,
    pub first_place_name: String,
    pub second_place_id: String,
    pub second_place_name: String,
    pub third_place_id: String,
    pub third_place_name: String,
    pub updated_at: DateTime<Utc>,
}

impl EventResultModel {
    /// The actual podium names in finishing order
    pub fn podium_names(&self) -> [&str; 3] {
        [
            &self.first_place_name,
            &self.second_place_name,
            &self.third_place_name,
        ]
    }
}
