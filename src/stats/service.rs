use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use super::errors::StatsError;
use super::models::{RecalculationJob, UserStatistics};
use super::repository::{JobRepository, UserStatisticsRepository};
use crate::event::models::EventResultModel;
use crate::event::repository::EventRepository;
use crate::prediction::models::PredictionModel;
use crate::prediction::repository::PredictionRepository;
use crate::scoring::{classify_matches, MatchBreakdown};
use crate::season::repository::SeasonRepository;
use crate::user::repository::UserRepository;

/// Service that recomputes a season's per-user statistics from scratch.
///
/// A recalculation runs as a detached background task; the request that
/// started it only ever learns about progress by polling the persisted job
/// record. Statistics rows are written one user at a time, each as a full
/// replacement, so a re-run over unchanged data produces identical rows and
/// a failed run leaves the rows written so far valid.
#[derive(Clone)]
pub struct StatsService {
    season_repository: Arc<dyn SeasonRepository + Send + Sync>,
    event_repository: Arc<dyn EventRepository + Send + Sync>,
    prediction_repository: Arc<dyn PredictionRepository + Send + Sync>,
    user_repository: Arc<dyn UserRepository + Send + Sync>,
    statistics_repository: Arc<dyn UserStatisticsRepository + Send + Sync>,
    job_repository: Arc<dyn JobRepository + Send + Sync>,
}

impl StatsService {
    pub fn new(
        season_repository: Arc<dyn SeasonRepository + Send + Sync>,
        event_repository: Arc<dyn EventRepository + Send + Sync>,
        prediction_repository: Arc<dyn PredictionRepository + Send + Sync>,
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        statistics_repository: Arc<dyn UserStatisticsRepository + Send + Sync>,
        job_repository: Arc<dyn JobRepository + Send + Sync>,
    ) -> Self {
        Self {
            season_repository,
            event_repository,
            prediction_repository,
            user_repository,
            statistics_repository,
            job_repository,
        }
    }

    /// Starts a season-wide recalculation and returns its job id.
    ///
    /// The job record is persisted as Running before any work begins, then
    /// the aggregation runs as a detached task the caller does not await.
    /// Concurrent jobs for one season are not mutually exclusive; the last
    /// write for a given user wins.
    #[instrument(skip(self))]
    pub async fn start_season_recalculation(&self, season_id: &str) -> Result<String, StatsError> {
        let mut job = RecalculationJob::new(season_id.to_string());
        job.mark_running();
        self.job_repository.save_job(&job).await?;

        info!(
            job_id = %job.id,
            season_id = %season_id,
            "Season statistics recalculation job started"
        );

        let worker = self.clone();
        let job_id = job.id.clone();
        tokio::spawn(async move {
            worker.run_recalculation(job).await;
        });

        Ok(job_id)
    }

    /// Polls a job's current state, reflecting whatever the store holds
    pub async fn get_job(&self, job_id: &str) -> Result<Option<RecalculationJob>, StatsError> {
        self.job_repository.get_job(job_id).await
    }

    /// Drives one job to a terminal state. Any error fails the job with its
    /// message captured; statistics rows already written are kept.
    pub async fn run_recalculation(&self, mut job: RecalculationJob) {
        match self.recalculate_season(&mut job).await {
            Ok(()) => {
                job.mark_completed();
                info!(
                    job_id = %job.id,
                    season_id = %job.season_id,
                    processed_users = job.processed_users,
                    "Season recalculation completed"
                );
            }
            Err(err) => {
                error!(
                    job_id = %job.id,
                    season_id = %job.season_id,
                    error = %err,
                    "Season recalculation failed"
                );
                job.mark_failed(err.to_string());
            }
        }

        if let Err(err) = self.job_repository.update_job(&job).await {
            error!(job_id = %job.id, error = %err, "Failed to persist terminal job state");
        }
    }

    async fn recalculate_season(&self, job: &mut RecalculationJob) -> Result<(), StatsError> {
        let season_id = job.season_id.clone();

        // Best-N is optional season configuration; a missing season row just
        // means no best-N metric is computed.
        let best_results_count = self
            .season_repository
            .get_season(&season_id)
            .await?
            .and_then(|season| season.best_results_count);

        let events = self.event_repository.list_events_by_season(&season_id).await?;
        let event_ids: Vec<String> = events.iter().map(|event| event.id.clone()).collect();

        let mut results: HashMap<String, EventResultModel> = HashMap::new();
        for event_id in &event_ids {
            if let Some(result) = self.event_repository.get_event_result(event_id).await? {
                results.insert(event_id.clone(), result);
            }
        }

        let predictions = self
            .prediction_repository
            .list_scored_predictions_for_season(&season_id, &event_ids)
            .await?;

        let mut predictions_by_user: HashMap<String, Vec<PredictionModel>> = HashMap::new();
        for prediction in predictions {
            predictions_by_user
                .entry(prediction.user_id.clone())
                .or_default()
                .push(prediction);
        }

        job.total_users = predictions_by_user.len() as u32;
        self.job_repository.update_job(job).await?;

        debug!(
            job_id = %job.id,
            season_id = %season_id,
            total_users = job.total_users,
            events = event_ids.len(),
            "Grouped scored predictions by user"
        );

        for (user_id, user_predictions) in predictions_by_user {
            let stats = self
                .aggregate_user(
                    &season_id,
                    &user_id,
                    &user_predictions,
                    &results,
                    best_results_count,
                )
                .await?;
            self.statistics_repository
                .upsert_user_statistics(&stats)
                .await?;

            job.processed_users += 1;
            self.job_repository.update_job(job).await?;
        }

        Ok(())
    }

    /// Builds the full replacement statistics row for one user
    async fn aggregate_user(
        &self,
        season_id: &str,
        user_id: &str,
        predictions: &[PredictionModel],
        results: &HashMap<String, EventResultModel>,
        best_results_count: Option<u32>,
    ) -> Result<UserStatistics, StatsError> {
        let username = self
            .user_repository
            .get_user(user_id)
            .await?
            .map(|user| user.username)
            .unwrap_or_else(|| user_id.to_string());

        let mut total_points = 0;
        let mut breakdown = MatchBreakdown::default();
        let mut point_values = Vec::with_capacity(predictions.len());

        for prediction in predictions {
            let points = prediction.points_earned.unwrap_or(0);
            total_points += points;
            point_values.push(points);

            // The breakdown only counts predictions whose event has a
            // recorded result; the point sum does not depend on it.
            if let Some(result) = results.get(&prediction.event_id) {
                breakdown.accumulate(classify_matches(
                    prediction.predicted_names(),
                    result.podium_names(),
                ));
            }
        }

        let best_results_points = best_results_count.map(|count| {
            let mut sorted = point_values.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            sorted.into_iter().take(count as usize).sum()
        });

        Ok(UserStatistics {
            season_id: season_id.to_string(),
            user_id: user_id.to_string(),
            username,
            total_points,
            best_results_points,
            predictions_count: predictions.len() as u32,
            exact_matches: breakdown.exact_matches,
            one_off_matches: breakdown.one_off_matches,
            two_off_matches: breakdown.two_off_matches,
            last_updated: Utc::now(),
        })
    }
}
