pub mod models;
pub mod repository;

pub use models::SeasonModel;
pub use repository::{InMemorySeasonRepository, SeasonRepository};
