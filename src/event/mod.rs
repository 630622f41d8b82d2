// Public API - what other modules can use
pub use handlers::record_event_result;
pub use models::{EventModel, EventResultModel};
pub use repository::{EventRepository, InMemoryEventRepository};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod types;
