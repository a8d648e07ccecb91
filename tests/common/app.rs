use axum_test::TestServer;
use polish_tracker::build_router;
use polish_tracker::config::{Config, LogFormat};
use polish_tracker::state::AppState;

/// Test configuration
pub fn test_config() -> Config {
    Config {
        // One connection keeps every query on the same in-memory database
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        media_url: "/media/".to_string(),
        site_header: "Nail Polish Tracker Admin".to_string(),
        site_title: "Nail Polish Tracker Admin Portal".to_string(),
        index_title: "Welcome to the Nail Polish Tracker Portal".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        log_format: LogFormat::Text,
    }
}

/// Test application wrapper
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application backed by a fresh database
    pub async fn new() -> Self {
        let state = AppState::new(test_config())
            .await
            .expect("Failed to create test app state");

        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, state }
    }
}
