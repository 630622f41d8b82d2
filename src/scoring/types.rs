use serde::{Deserialize, Serialize};

/// Request payload for configuring a season's scoring rules
#[derive(Debug, Deserialize)]
pub struct ScoringRulesRequest {
    pub exact_match_points: i32,
    pub one_off_points: i32,
    pub two_off_points: i32,
}

/// Response for stored scoring rules
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoringRulesResponse {
    pub season_id: String,
    pub exact_match_points: i32,
    pub one_off_points: i32,
    pub two_off_points: i32,
}

impl From<crate::scoring::models::ScoringRules> for ScoringRulesResponse {
    fn from(rules: crate::scoring::models::ScoringRules) -> Self {
        Self {
            season_id: rules.season_id,
            exact_match_points: rules.exact_match_points,
            one_off_points: rules.one_off_points,
            two_off_points: rules.two_off_points,
        }
    }
}
