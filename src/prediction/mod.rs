// Public API - what other modules can use
pub use handlers::submit_prediction;
pub use models::PredictionModel;
pub use repository::{InMemoryPredictionRepository, PredictionRepository};
pub use service::PredictionService;

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
