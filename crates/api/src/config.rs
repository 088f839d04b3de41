use axum::http::HeaderValue;
use feedback_core::feedback::SortDirection;

/// Failure to build a [`ServerConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value '{value}' for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Which [`FeedbackStore`](feedback_db::store::FeedbackStore) backs the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// PostgreSQL via a connection pool.
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    /// Process-local map; contents are lost on restart.
    Memory,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins. A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Ordering of `GET /feedbacks` by creation time (default: `desc`).
    pub sort: SortDirection,
    /// Storage backend.
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default    |
    /// |----------------------------|------------|
    /// | `HOST`                     | `0.0.0.0`  |
    /// | `PORT`                     | `5000`     |
    /// | `CORS_ORIGINS`             | `*`        |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`       |
    /// | `FEEDBACK_SORT`            | `desc`     |
    /// | `FEEDBACK_STORE`           | `postgres` |
    /// | `DATABASE_URL`             | required for `postgres` |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_var(&lookup, "PORT", 5000)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in cors_origins.iter().filter(|o| o.as_str() != "*") {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                value: origin.clone(),
                reason: e.to_string(),
            })?;
        }

        let request_timeout_secs: u64 = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;
        let sort: SortDirection = parse_var(&lookup, "FEEDBACK_SORT", SortDirection::default())?;

        let store = match lookup("FEEDBACK_STORE").as_deref().map(str::trim) {
            None | Some("postgres") => StoreConfig::Postgres {
                database_url: lookup("DATABASE_URL")
                    .filter(|s| !s.is_empty())
                    .ok_or(ConfigError::Missing("DATABASE_URL"))?,
                max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            },
            Some("memory") => StoreConfig::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "FEEDBACK_STORE",
                    value: other.to_string(),
                    reason: "must be one of: postgres, memory".into(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            sort,
            store,
        })
    }

    /// True when any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value,
            reason: e.to_string(),
        }),
    }
}
