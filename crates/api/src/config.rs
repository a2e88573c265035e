//! Application configuration loaded from environment variables.

use common::EmailAddress;
use notifications::{DEFAULT_FROM, DEFAULT_RESEND_API_URL, ResendConfig};

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `DATABASE_URL` — PostgreSQL connection string (required by the server)
/// - `DATABASE_MAX_CONNECTIONS` — pool size (default: `5`)
/// - `ADMIN_EMAIL` — where admin notifications go; unset disables them
/// - `RESEND_API_KEY` — email provider credential; checked on first send
/// - `EMAIL_FROM` — sender identity (default: `"AIODEV <onboarding@resend.dev>"`)
/// - `RESEND_API_URL` — provider base URL (default: `"https://api.resend.com"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub admin_email: Option<String>,
    pub resend_api_key: Option<String>,
    pub email_from: String,
    pub resend_api_url: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, treating empty values as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: get("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: get("RUST_LOG").unwrap_or(defaults.log_level),
            database_url: get("DATABASE_URL"),
            database_max_connections: get("DATABASE_MAX_CONNECTIONS")
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.database_max_connections),
            admin_email: get("ADMIN_EMAIL"),
            resend_api_key: get("RESEND_API_KEY"),
            email_from: get("EMAIL_FROM").unwrap_or(defaults.email_from),
            resend_api_url: get("RESEND_API_URL").unwrap_or(defaults.resend_api_url),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The admin notification address, if one is configured and valid.
    ///
    /// An unparseable address is logged and treated as unset.
    pub fn admin_address(&self) -> Option<EmailAddress> {
        let raw = self.admin_email.as_deref()?;
        match EmailAddress::parse(raw.trim()) {
            Ok(addr) => Some(addr),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring ADMIN_EMAIL");
                None
            }
        }
    }

    /// Settings for the Resend mailer.
    pub fn resend(&self) -> ResendConfig {
        ResendConfig {
            api_key: self.resend_api_key.clone(),
            from: self.email_from.clone(),
            base_url: self.resend_api_url.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            database_url: None,
            database_max_connections: 5,
            admin_email: None,
            resend_api_key: None,
            email_from: DEFAULT_FROM.to_string(),
            resend_api_url: DEFAULT_RESEND_API_URL.to_string(),
        }
    }
}
