use chrono::{DateTime, Utc};
use log::LevelFilter;
use nfl_api::calendar::default_season_start;
use nfl_api::client::{DEFAULT_SCHEDULE_URL, NflApi};
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_SCHEDULE_URL: &str = "NFLPICKS_SCHEDULE_URL";
pub const ENV_SCHEDULE_JSON: &str = "NFLPICKS_SCHEDULE_JSON";
pub const ENV_SEASON_START: &str = "NFLPICKS_SEASON_START";
pub const ENV_TIMEOUT_SECS: &str = "NFLPICKS_TIMEOUT_SECS";
pub const ENV_LOG: &str = "NFLPICKS_LOG";

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    pub schedule_url: String,
    pub snapshot: Option<PathBuf>,
    pub season_start: DateTime<Utc>,
    /// `None` waits on the fetch indefinitely.
    pub timeout: Option<Duration>,
    /// Problems found while loading, logged once the logger is configured.
    pub warnings: Vec<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            full_screen: false,
            log_level: None,
            schedule_url: DEFAULT_SCHEDULE_URL.to_string(),
            snapshot: None,
            season_start: default_season_start(),
            timeout: None,
            warnings: Vec::new(),
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key/value source. Blank values count as unset;
    /// invalid ones keep the default and record a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut settings = Self::default();

        if let Some(url) = get(ENV_SCHEDULE_URL) {
            settings.schedule_url = url;
        }
        settings.snapshot = get(ENV_SCHEDULE_JSON).map(PathBuf::from);

        if let Some(raw) = get(ENV_SEASON_START) {
            match DateTime::parse_from_rfc3339(&raw) {
                Ok(dt) => settings.season_start = dt.with_timezone(&Utc),
                Err(e) => settings
                    .warnings
                    .push(format!("ignoring {ENV_SEASON_START}={raw}: {e}")),
            }
        }

        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(0) => {}
                Ok(secs) => settings.timeout = Some(Duration::from_secs(secs)),
                Err(e) => settings
                    .warnings
                    .push(format!("ignoring {ENV_TIMEOUT_SECS}={raw}: {e}")),
            }
        }

        if let Some(raw) = get(ENV_LOG) {
            match raw.parse::<LevelFilter>() {
                Ok(level) => settings.log_level = Some(level),
                Err(_) => settings.warnings.push(format!("ignoring {ENV_LOG}={raw}: unknown level")),
            }
        }

        settings
    }

    pub fn api_client(&self) -> NflApi {
        NflApi::new()
            .with_url(self.schedule_url.clone())
            .with_timeout(self.timeout)
            .with_snapshot(self.snapshot.clone())
    }
}
