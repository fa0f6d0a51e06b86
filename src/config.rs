use crate::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

pub struct Config {
    pub database_url: String,

    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
        })
    }
}
