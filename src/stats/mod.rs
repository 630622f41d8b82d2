pub mod service;

mod errors;
mod handlers;
pub mod models;
pub mod repository;
pub mod types;

pub use errors::StatsError;
pub use handlers::{get_job_status, get_season_statistics, start_season_recalculation};
pub use models::{JobStatus, RecalculationJob, UserStatistics};
pub use repository::{
    InMemoryJobRepository, InMemoryUserStatisticsRepository, JobRepository,
    UserStatisticsRepository,
};
pub use service::StatsService;
