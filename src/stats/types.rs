use serde::{Deserialize, Serialize};

/// Response for a started season recalculation; the job id is the handle for
/// subsequent status polling
#[derive(Debug, Serialize, Deserialize)]
pub struct RecalculationStartedResponse {
    pub job_id: String,
    pub season_id: String,
}
