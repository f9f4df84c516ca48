use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Cookie the auth provider stores its session token under.
    pub session_cookie_name: String,
    pub journal_cache_ttl_secs: u64,
}

pub const DEFAULT_SESSION_COOKIE: &str = "better-auth.session_token";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: require_env("REDIS_URL")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            session_cookie_name: std::env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| DEFAULT_SESSION_COOKIE.to_string()),
            journal_cache_ttl_secs: std::env::var("JOURNAL_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse::<u64>()
                .context("JOURNAL_CACHE_TTL_SECS must be a whole number of seconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
