//! # Configuration Management
//!
//! Configuration comes from the environment, with an optional `.env` file
//! loaded first for local development.
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8080)
//! - `DATABASE_URL`: SQLite database holding the session table
//! - `STATIC_DIR`: Directory served for everything the router doesn't handle
//! - `SESSION_INACTIVITY_HOURS`: Idle time before a session expires (default: 24)
//! - `SESSION_CLEANUP_SECS`: Interval of the expired-session sweep (default: 600)
//! - `SESSION_SECURE`: Mark the session cookie `Secure` (default: false)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number
    pub port: u16,

    /// SQLite connection URL for the session store
    /// The "mode=rwc" suffix means: read, write, create if not exists
    pub database_url: String,

    /// Directory of static pages and assets
    pub static_dir: String,

    /// Hours of inactivity after which a session expires
    pub session_inactivity_hours: i64,

    /// Seconds between sweeps of expired sessions
    pub session_cleanup_secs: u64,

    /// Whether the session cookie carries the `Secure` attribute.
    /// Must be true when served over HTTPS.
    pub session_secure: bool,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing variables fall back to defaults. A variable that is present
    /// but doesn't parse (e.g. `PORT=http`) is an error.
    ///
    /// ## Example .env file
    /// ```text
    /// HOST=127.0.0.1
    /// PORT=8080
    /// DATABASE_URL=sqlite:sessions.db?mode=rwc
    /// STATIC_DIR=static
    /// SESSION_SECURE=false
    /// ```
    pub fn from_env() -> Result<Self> {
        // Doesn't error if the file is missing
        dotenvy::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 8080)?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:sessions.db?mode=rwc".to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
            session_inactivity_hours: parse_var("SESSION_INACTIVITY_HOURS", 24)?,
            session_cleanup_secs: parse_var("SESSION_CLEANUP_SECS", 600)?,
            session_secure: parse_var("SESSION_SECURE", false)?,
        })
    }

    /// Socket address for `tokio::net::TcpListener::bind()`, e.g. "127.0.0.1:8080"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {name}: {raw:?}")),
        Err(_) => Ok(default),
    }
}
