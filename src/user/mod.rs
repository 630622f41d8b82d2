pub mod models;
pub mod repository;

pub use models::UserModel;
pub use repository::{InMemoryUserRepository, UserRepository};
