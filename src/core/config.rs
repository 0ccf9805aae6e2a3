use dotenv::dotenv;
use std::env;
use tracing::{info, warn};

const DEFAULT_JWT_SECRET: &str = "pilot-dashboard-development-secret";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub connection_lifetime_secs: u64,
    pub app_env: String,
}

impl Config {
    /// Loads the configuration from environment variables.
    /// Calls dotenv() first so a local `.env` file is honoured.
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set in .env file".to_string())?;

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, using default (not secure for production!)");
            DEFAULT_JWT_SECRET.to_string()
        });

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = env::var("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|_| "20".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let connection_lifetime_secs = env::var("DB_CONNECTION_LIFETIME_SECS")
            .unwrap_or_else(|_| "1800".to_string())
            .parse::<u64>()
            .map_err(|_| {
                "Invalid DB_CONNECTION_LIFETIME_SECS: must be a positive number".to_string()
            })?;

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            database_url,
            jwt_secret,
            server_host,
            server_port,
            max_connections,
            connection_lifetime_secs,
            app_env,
        })
    }

    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }

    /// Logs the configuration with secrets hidden
    pub fn print_info(&self) {
        info!(
            environment = %self.app_env,
            address = %format!("{}:{}", self.server_host, self.server_port),
            database = %Self::mask_url(&self.database_url),
            max_connections = self.max_connections,
            connection_lifetime_secs = self.connection_lifetime_secs,
            "server configuration loaded"
        );
        if self.jwt_secret == DEFAULT_JWT_SECRET {
            warn!("JWT secret: USING DEFAULT (INSECURE!)");
        }
    }

    /// Masks the credentials part of the database URL
    fn mask_url(url: &str) -> String {
        if let (Some(at_pos), Some(scheme_end)) = (url.rfind('@'), url.find("://")) {
            if at_pos > scheme_end {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        "***".to_string()
    }
}
