use std::env;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_DATABASE_NAME: &str = "devevents";
const DEFAULT_POOL_SIZE: u32 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
}

impl AppConfig {
    /// Load `.env` (if present) and read the process environment.
    ///
    /// A missing `DATABASE_URL` is fatal here so the process never starts
    /// serving without a database to talk to.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            database: DatabaseSettings::from_env()?,
        })
    }
}

/// Connection parameters for the single logical database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: String,
    pub database_name: String,
    pub max_pool_size: u32,
    pub connect_timeout: Duration,
}

impl DatabaseSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            max_pool_size: DEFAULT_POOL_SIZE,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> AppResult<Self> {
        let url = env::var("DATABASE_URL").map_err(|_| {
            AppError::ConnectionUnavailable(
                "DATABASE_URL environment variable not found".to_string(),
            )
        })?;

        let mut settings = Self::new(url);
        if let Ok(name) = env::var("DATABASE_NAME") {
            if !name.trim().is_empty() {
                settings.database_name = name.trim().to_string();
            }
        }
        if let Some(size) = parse_var::<u32>("DATABASE_POOL_SIZE")? {
            settings.max_pool_size = size.max(1);
        }
        if let Some(secs) = parse_var::<u64>("DATABASE_CONNECT_TIMEOUT_SECS")? {
            settings.connect_timeout = Duration::from_secs(secs);
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Reject connection strings that cannot point at Postgres.
    pub fn validate(&self) -> AppResult<()> {
        if !self.url.starts_with("postgres://") && !self.url.starts_with("postgresql://") {
            return Err(AppError::ConnectionUnavailable(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// The configured URL with its database path replaced by `database_name`.
    pub fn connection_url(&self) -> String {
        let (base, query) = match self.url.split_once('?') {
            Some((base, query)) => (base, Some(query)),
            None => (self.url.as_str(), None),
        };

        let authority_start = base.find("://").map(|idx| idx + 3).unwrap_or(0);
        let host_part = match base[authority_start..].find('/') {
            Some(slash) => &base[..authority_start + slash],
            None => base,
        };

        match query {
            Some(query) => format!("{}/{}?{}", host_part, self.database_name, query),
            None => format!("{}/{}", host_part, self.database_name),
        }
    }

    /// Host portion of the URL, safe to log.
    pub fn redacted_host(&self) -> &str {
        let rest = self
            .url
            .split_once("://")
            .map_or(self.url.as_str(), |(_, rest)| rest);
        let authority = rest.split(['/', '?']).next().unwrap_or_default();
        let host = authority.rsplit('@').next().unwrap_or_default();

        if host.is_empty() {
            "unknown_host"
        } else {
            host
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> AppResult<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::ValidationError(format!("{} must be a number", name))),
        Err(_) => Ok(None),
    }
}
