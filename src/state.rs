use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// SeaORM database connection
    pub db: DatabaseConnection,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState by connecting to the database and running migrations
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        let mut opt = ConnectOptions::new(&config.database_url);
        opt.max_connections(config.database_max_connections)
            .min_connections(1)
            .sqlx_logging(true);

        let db = Database::connect(opt)
            .await
            .map_err(|e| AppStateError::Database(e.to_string()))?;

        // Migrations run on the same pool so in-memory databases see the schema
        sqlx::migrate!("./migrations")
            .run(db.get_sqlite_connection_pool())
            .await
            .map_err(|e| AppStateError::Migration(e.to_string()))?;

        Ok(Self { db, config })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("SQLite connection error: {0}")]
    Database(String),

    #[error("Migration error: {0}")]
    Migration(String),
}
