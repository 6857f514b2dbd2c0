use std::env;
use std::net::SocketAddr;

use crate::shared::errors::{AppError, AppResult};

const DATABASE_URL_ENV: &str = "DATABASE_URL";
const BIND_ADDR_ENV: &str = "PUBAPI_BIND_ADDR";
const RUN_MIGRATIONS_ENV: &str = "PUBAPI_RUN_MIGRATIONS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime settings, read from the process environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_ENV).ok_or_else(|| {
            AppError::ConfigurationError(format!(
                "{} environment variable not found",
                DATABASE_URL_ENV
            ))
        })?;
        validate_database_url(&database_url)?;

        let bind_addr = lookup(BIND_ADDR_ENV)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| {
                AppError::ConfigurationError(format!("Invalid {}: {}", BIND_ADDR_ENV, e))
            })?;

        let run_migrations = match lookup(RUN_MIGRATIONS_ENV) {
            Some(value) => parse_flag(&value).ok_or_else(|| {
                AppError::ConfigurationError(format!(
                    "Invalid {}: expected true or false, got '{}'",
                    RUN_MIGRATIONS_ENV, value
                ))
            })?,
            None => true,
        };

        Ok(Self {
            database_url,
            bind_addr,
            run_migrations,
        })
    }

    /// Host part of the database URL, safe to log.
    pub fn database_host(&self) -> &str {
        self.database_url
            .rsplit('@')
            .next()
            .unwrap_or("unknown_host")
    }
}

fn validate_database_url(database_url: &str) -> AppResult<()> {
    if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://") {
        return Err(AppError::ConfigurationError(
            "Invalid database URL format. Must start with postgres:// or postgresql://"
                .to_string(),
        ));
    }

    let rest = database_url.split("://").nth(1).unwrap_or_default();
    if rest.is_empty() || rest.starts_with('/') {
        return Err(AppError::ConfigurationError(
            "Database URL is missing a host".to_string(),
        ));
    }

    Ok(())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
