use sea_orm::DatabaseConnection;

/// Shared across handlers; the connection is a pool and cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
