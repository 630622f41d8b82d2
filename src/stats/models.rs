use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// Aggregated per-user, per-season statistics for leaderboard display.
///
/// Every recalculation run fully replaces the row for its (season_id,
/// user_id) key; nothing is merged incrementally. Re-running the job on
/// unchanged inputs therefore yields identical rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatistics {
    pub season_id: String,
    pub user_id: String,
    pub username: String,
    pub total_points: i32,
    /// Sum of the user's N highest-scoring predictions; present only when
    /// the season configures a best-N count
    pub best_results_points: Option<i32>,
    pub predictions_count: u32,
    pub exact_matches: u32,
    pub one_off_matches: u32,
    pub two_off_matches: u32,
    pub last_updated: DateTime<Utc>,
}

impl UserStatistics {
    /// The value leaderboards rank by: best-N points when the season defines
    /// them, otherwise total points
    pub fn ranking_points(&self) -> i32 {
        self.best_results_points.unwrap_or(self.total_points)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

/// Persisted record of one season-wide statistics recalculation attempt.
///
/// The worker communicates with pollers only through writes to this record;
/// there is no shared in-memory state with the request that started the job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecalculationJob {
    pub id: String,
    pub season_id: String,
    pub status: JobStatus,
    pub total_users: u32,
    pub processed_users: u32,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub error_message: Option<String>,
}

impl RecalculationJob {
    /// Creates a new pending job with a generated id
    pub fn new(season_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            season_id,
            status: JobStatus::Pending,
            total_users: 0,
            processed_users: 0,
            started_at: Utc::now(),
            completed_at: None,
            error_message: None,
        }
    }

    pub fn mark_running(&mut self) {
        self.status = JobStatus::Running;
    }

    pub fn mark_completed(&mut self) {
        self.status = JobStatus::Completed;
        self.completed_at = Some(Utc::now());
    }

    pub fn mark_failed(&mut self, message: String) {
        self.status = JobStatus::Failed;
        self.completed_at = Some(Utc::now());
        self.error_message = Some(message);
    }

    /// Whether the job has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, JobStatus::Completed | JobStatus::Failed)
    }
}
