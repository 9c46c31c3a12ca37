use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("config invalid: {0}")]
    Invalid(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDialect {
    Sqlite,
    Postgres,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl ServerConfig {
    /// Reads configuration from the process environment. `DATABASE_URL` is
    /// the only required value; the service refuses to start without it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let host = std::env::var("QUOTES_HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("QUOTES_HTTP_PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::Invalid(format!("invalid QUOTES_HTTP_PORT: {e}")))?,
            Err(_) => 8080,
        };

        let level = std::env::var("QUOTES_LOG_LEVEL").ok();

        Ok(Self {
            database_url,
            http: HttpConfig { host, port },
            logging: LoggingConfig { level },
        })
    }

    /// Picks the SQL dialect from the connection URL scheme.
    pub fn dialect(&self) -> Result<SqlDialect, ConfigError> {
        let url = self.database_url.trim();
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(SqlDialect::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(SqlDialect::Sqlite)
        } else {
            Err(ConfigError::Invalid(format!(
                "unsupported DATABASE_URL scheme in '{url}'"
            )))
        }
    }
}
