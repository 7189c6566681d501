use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Creates a pooled database connection
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging_level(log::LevelFilter::Debug);

    Database::connect(options).await
}
