use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument};

use super::errors::StatsError;
use super::models::{RecalculationJob, UserStatistics};

/// Trait for user statistics storage. Rows are keyed by (season_id, user_id)
/// and every write replaces the whole row.
#[async_trait]
pub trait UserStatisticsRepository {
    async fn upsert_user_statistics(&self, stats: &UserStatistics) -> Result<(), StatsError>;
    async fn get_user_statistics(
        &self,
        season_id: &str,
        user_id: &str,
    ) -> Result<Option<UserStatistics>, StatsError>;
    async fn list_statistics_for_season(
        &self,
        season_id: &str,
    ) -> Result<Vec<UserStatistics>, StatsError>;
}

/// Trait for recalculation job storage. Progress updates are independent
/// persisted writes so that progress is visible to any poller.
#[async_trait]
pub trait JobRepository {
    async fn save_job(&self, job: &RecalculationJob) -> Result<(), StatsError>;
    async fn update_job(&self, job: &RecalculationJob) -> Result<(), StatsError>;
    async fn get_job(&self, job_id: &str) -> Result<Option<RecalculationJob>, StatsError>;
}

/// In-memory implementation of UserStatisticsRepository for development and testing
#[derive(Default)]
pub struct InMemoryUserStatisticsRepository {
    statistics: Mutex<HashMap<(String, String), UserStatistics>>,
}

impl InMemoryUserStatisticsRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            statistics: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UserStatisticsRepository for InMemoryUserStatisticsRepository {
    #[instrument(skip(self, stats))]
    async fn upsert_user_statistics(&self, stats: &UserStatistics) -> Result<(), StatsError> {
        debug!(
            season_id = %stats.season_id,
            user_id = %stats.user_id,
            total_points = stats.total_points,
            "Upserting user statistics in memory"
        );

        let mut statistics = self.statistics.lock().unwrap();
        statistics.insert(
            (stats.season_id.clone(), stats.user_id.clone()),
            stats.clone(),
        );

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_user_statistics(
        &self,
        season_id: &str,
        user_id: &str,
    ) -> Result<Option<UserStatistics>, StatsError> {
        let statistics = self.statistics.lock().unwrap();
        Ok(statistics
            .get(&(season_id.to_string(), user_id.to_string()))
            .cloned())
    }

    #[instrument(skip(self))]
    async fn list_statistics_for_season(
        &self,
        season_id: &str,
    ) -> Result<Vec<UserStatistics>, StatsError> {
        let statistics = self.statistics.lock().unwrap();
        let rows: Vec<UserStatistics> = statistics
            .values()
            .filter(|stats| stats.season_id == season_id)
            .cloned()
            .collect();

        debug!(season_id = %season_id, count = rows.len(), "Listed season statistics");
        Ok(rows)
    }
}

/// In-memory implementation of JobRepository for development and testing
#[derive(Default)]
pub struct InMemoryJobRepository {
    jobs: Mutex<HashMap<String, RecalculationJob>>,
}

impl InMemoryJobRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            jobs: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    #[instrument(skip(self, job))]
    async fn save_job(&self, job: &RecalculationJob) -> Result<(), StatsError> {
        debug!(job_id = %job.id, season_id = %job.season_id, "Saving recalculation job in memory");

        let mut jobs = self.jobs.lock().unwrap();
        jobs.insert(job.id.clone(), job.clone());

        Ok(())
    }

    #[instrument(skip(self, job))]
    async fn update_job(&self, job: &RecalculationJob) -> Result<(), StatsError> {
        let mut jobs = self.jobs.lock().unwrap();
        if !jobs.contains_key(&job.id) {
            return Err(StatsError::Repository(format!(
                "Job {} not found for update",
                job.id
            )));
        }
        jobs.insert(job.id.clone(), job.clone());

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_job(&self, job_id: &str) -> Result<Option<RecalculationJob>, StatsError> {
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs.get(job_id).cloned())
    }
}
