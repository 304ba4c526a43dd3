//! Application configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Defaults match the site's historical
//! deployment: port 3001, a local SQLite file, and Gmail SMTP relay.

use std::net::SocketAddr;

/// Top-level application configuration.
///
/// Loaded once at startup via [`AppConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3001`).
    pub listen_addr: SocketAddr,

    /// SQLite connection string (e.g. `sqlite://bookings.db`).
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Outbound SMTP relay host.
    pub smtp_host: String,

    /// Outbound SMTP relay port.
    pub smtp_port: u16,

    /// SMTP authentication username. Empty disables email sending.
    pub smtp_user: String,

    /// SMTP authentication password.
    pub smtp_pass: String,

    /// Sender address for confirmation emails. Defaults to `SMTP_USER`.
    pub smtp_from: String,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3001".to_string())
            .parse()?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://bookings.db".to_string());

        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 5);

        let smtp_host =
            std::env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string());
        let smtp_port = parse_env("SMTP_PORT", 587);
        let smtp_user = std::env::var("SMTP_USER").unwrap_or_default();
        let smtp_pass = std::env::var("SMTP_PASS").unwrap_or_default();
        let smtp_from = std::env::var("SMTP_FROM").unwrap_or_else(|_| smtp_user.clone());

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections,
            smtp_host,
            smtp_port,
            smtp_user,
            smtp_pass,
            smtp_from,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
