use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Development,
    Test,
    Production,
}

impl RuntimeEnv {
    pub fn from_env() -> Self {
        match env::var("RUST_ENV").as_deref() {
            Ok("production") => RuntimeEnv::Production,
            Ok("test") => RuntimeEnv::Test,
            _ => RuntimeEnv::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeEnv::Development => "development",
            RuntimeEnv::Test => "test",
            RuntimeEnv::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, RuntimeEnv::Production)
    }
}

/// Loads `.env.{RUST_ENV}` and falls back to `.env`.
pub fn load_dotenv(runtime: RuntimeEnv) {
    let env_file = format!(".env.{}", runtime.as_str());
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

pub fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

pub fn optional(key: &'static str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub fn parse_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Public base URL, used for OAuth redirects and reset links
    pub app_url: String,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub server: String,
    pub username: String,
    pub password: String,
    pub from_email: String,
}

impl SmtpConfig {
    /// `None` when no SMTP relay is configured.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(server) = optional("SMTP_SERVER") else {
            return Ok(None);
        };

        Ok(Some(Self {
            server,
            username: required("SMTP_USERNAME")?,
            password: required("SMTP_PASSWORD")?,
            from_email: required("EMAIL_FROM")?,
        }))
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub runtime: RuntimeEnv,
    pub database_url: String,
    pub server: ServerConfig,
    pub smtp: Option<SmtpConfig>,
    pub player_lookup_delay_ms: u64,
}

impl AppConfig {
    pub fn from_env(runtime: RuntimeEnv) -> Result<Self, ConfigError> {
        let server = ServerConfig {
            host: optional("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", 3000u16)?,
            app_url: optional("APP_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string())
                .trim_end_matches('/')
                .to_string(),
        };

        Ok(Self {
            runtime,
            database_url: required("DATABASE_URL")?,
            server,
            smtp: SmtpConfig::from_env()?,
            player_lookup_delay_ms: parse_or("PLAYER_LOOKUP_DELAY_MS", 1000u64)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
