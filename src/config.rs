use anyhow::Context;
use std::env;
use std::time::Duration;

use crate::middleware::timing::TimingConfig;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:./jobboard.sqlite?mode=rwc";

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub listen_addr: String,
    /// `APP_ENV=development` turns on per-request logging
    pub development: bool,
    pub slow_request_ms: u64,
    /// Requests per client per minute, also the size of the initial burst;
    /// 0 disables rate limiting
    pub rate_limit_burst: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            listen_addr: "127.0.0.1:3000".to_string(),
            development: false,
            slow_request_ms: 1000,
            rate_limit_burst: 10,
        }
    }
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        let defaults = Settings::default();

        let slow_request_ms = match env::var("SLOW_REQUEST_MS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("SLOW_REQUEST_MS must be an integer, got {:?}", raw))?,
            Err(_) => defaults.slow_request_ms,
        };
        let rate_limit_burst = match env::var("RATE_LIMIT_BURST") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("RATE_LIMIT_BURST must be an integer, got {:?}", raw))?,
            Err(_) => defaults.rate_limit_burst,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            listen_addr: env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            development: env::var("APP_ENV")
                .map(|v| is_development(&v))
                .unwrap_or(false),
            slow_request_ms,
            rate_limit_burst,
        })
    }

    pub fn timing(&self) -> TimingConfig {
        TimingConfig {
            slow_threshold: Duration::from_millis(self.slow_request_ms),
            verbose: self.development,
        }
    }

    /// Interval at which one request is replenished, so that a client that
    /// used up its burst is back to `rate_limit_burst` per minute.
    pub fn rate_limit_period(&self) -> Option<Duration> {
        if self.rate_limit_burst == 0 {
            None
        } else {
            Some(Duration::from_secs(60) / self.rate_limit_burst)
        }
    }
}

fn is_development(app_env: &str) -> bool {
    app_env.trim().eq_ignore_ascii_case("development")
}
