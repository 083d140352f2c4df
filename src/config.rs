use crate::error::config::ConfigError;

static DEFAULT_PORT: u16 = 4002;
static DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
static DEFAULT_JWT_EXPIRES_HOURS: i64 = 8;

/// Process-wide immutable configuration, loaded once at startup and injected
/// into [`crate::model::app::AppState`].
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub frontend_url: String,
    pub jwt_secret: String,
    pub jwt_expires_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            port: parse_var("PORT", DEFAULT_PORT)?,
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            jwt_secret: require_var("JWT_SECRET")?,
            jwt_expires_hours: parse_var("JWT_EXPIRES_HOURS", DEFAULT_JWT_EXPIRES_HOURS)?,
        })
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: name.to_string(),
            reason: format!("failed to parse {value:?}"),
        }),
        Err(_) => Ok(default),
    }
}
