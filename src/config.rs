use std::net::IpAddr;

use axum::http::HeaderValue;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub cors_origin: HeaderValue,
    pub max_body_size: usize,
    pub environment: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_or("DATABASE_URL", "sqlite://stockroom.db?mode=rwc");

        // Fixed development secret matches the one the frontend tooling expects;
        // override in any real deployment.
        let jwt_secret = env_or("JWT_SECRET", "b4you_secret_key_2024");

        let host: IpAddr = env_or("STOCKROOM_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid STOCKROOM_HOST: {e}"))?;

        let port: u16 = env_or("STOCKROOM_PORT", "3001")
            .parse()
            .map_err(|e| format!("Invalid STOCKROOM_PORT: {e}"))?;

        let cors_origin: HeaderValue = env_or("STOCKROOM_CORS_ORIGIN", "http://localhost:3000")
            .parse()
            .map_err(|e| format!("Invalid STOCKROOM_CORS_ORIGIN: {e}"))?;

        let max_body_size: usize = env_or("STOCKROOM_MAX_BODY_SIZE", "10485760")
            .parse()
            .map_err(|e| format!("Invalid STOCKROOM_MAX_BODY_SIZE: {e}"))?;

        let environment = env_or("STOCKROOM_ENV", "development");
        let log_level = env_or("STOCKROOM_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            jwt_secret,
            host,
            port,
            cors_origin,
            max_body_size,
            environment,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
