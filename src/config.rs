use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::TimeframeFilter;

/// Immutable once loaded, so plain `Arc` sharing is enough.
pub type SharedConfig = Arc<Config>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Journal
    pub journal_path: String,
    pub user_id: String,

    // Reporting
    pub display_timezone: Tz,
    pub default_timeframe: TimeframeFilter,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            journal_path: env("JOURNAL_PATH", "journal.json"),
            // Stand-in for the identity provider; the hosted auth flow is
            // outside this crate.
            user_id: env("JOURNAL_USER", "local"),
            display_timezone: env("JOURNAL_TZ", "UTC").parse().unwrap_or(chrono_tz::UTC),
            default_timeframe: TimeframeFilter::from_str_loose(&env("JOURNAL_TIMEFRAME", "all_time"))
                .unwrap_or(TimeframeFilter::AllTime),
            log_level: env("LOG_LEVEL", "INFO"),
        }
    }

    pub fn shared(self) -> SharedConfig {
        Arc::new(self)
    }
}
