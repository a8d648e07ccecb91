use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    // Database
    pub database_url: String,
    pub database_max_connections: u32,

    // Media store
    pub media_url: String,

    // Admin site titles
    pub site_header: String,
    pub site_title: String,
    pub index_title: String,

    // Server
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if exists

        Ok(Self {
            // Database
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://polish_tracker.db?mode=rwc".to_string()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("DATABASE_MAX_CONNECTIONS"))?,

            // Media store
            media_url: env::var("MEDIA_URL").unwrap_or_else(|_| "/media/".to_string()),

            // Admin site titles
            site_header: env::var("ADMIN_SITE_HEADER")
                .unwrap_or_else(|_| "Nail Polish Tracker Admin".to_string()),
            site_title: env::var("ADMIN_SITE_TITLE")
                .unwrap_or_else(|_| "Nail Polish Tracker Admin Portal".to_string()),
            index_title: env::var("ADMIN_INDEX_TITLE")
                .unwrap_or_else(|_| "Welcome to the Nail Polish Tracker Portal".to_string()),

            // Server
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "text".to_string())
                .to_ascii_lowercase()
                .as_str()
            {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => return Err(ConfigError::Invalid("LOG_FORMAT")),
            },
        })
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment variable: {0}")]
    Invalid(&'static str),
}
