use serde::{Deserialize, Serialize};

/// A registered player. Only the fields the statistics engine needs are
/// carried here; account management lives outside this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserModel {
    pub id: String,
    pub username: String,
}

impl UserModel {
    pub fn new(id: String, username: String) -> Self {
        Self { id, username }
    }
}
