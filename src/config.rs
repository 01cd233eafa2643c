//! App Configuration
//!
//! Values baked in at build time through environment variables.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "https://notehub-public.goit.study/api";

/// Notes per page
pub const PER_PAGE: u32 = 12;

/// Delay between the last keystroke and the search being applied
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Sent as a bearer token when present
    pub api_token: Option<String>,
    pub log_level: LevelFilter,
    pub per_page: u32,
    pub search_debounce_ms: u32,
}

impl AppConfig {
    /// Read `NOTEHUB_API_URL`, `NOTEHUB_TOKEN` and `NOTEHUB_LOG` as set at compile time
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("NOTEHUB_API_URL"),
            option_env!("NOTEHUB_TOKEN"),
            option_env!("NOTEHUB_LOG"),
        )
    }

    fn from_values(api_url: Option<&str>, token: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api_base_url: non_empty(api_url)
                .unwrap_or(DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            api_token: non_empty(token).map(str::to_string),
            log_level: non_empty(log_level)
                .and_then(|level| level.parse().ok())
                .unwrap_or(LevelFilter::Info),
            per_page: PER_PAGE,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}
