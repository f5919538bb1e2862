use crate::espn::{EspnCompetitor, EspnEvent, ScheduleResponse};
use crate::{Competitor, ScheduleEvent, Venue};
use chrono::{DateTime, NaiveDateTime, Utc};
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

pub const DEFAULT_SCHEDULE_URL: &str =
    "https://us-central1-footballdata-2024.cloudfunctions.net/getNflSchedule";

/// Schedule client. One GET per call, no retries, and no timeout unless one is
/// configured.
#[derive(Debug, Clone)]
pub struct NflApi {
    client: Client,
    url: String,
    timeout: Option<Duration>,
    snapshot: Option<PathBuf>,
}

impl Default for NflApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("nflpicks/0.1 (terminal picks board)")
                .build()
                .unwrap_or_default(),
            url: DEFAULT_SCHEDULE_URL.to_string(),
            timeout: None,
            snapshot: None,
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    /// Body is not JSON at all.
    Decode(String, String),
    /// JSON, but not shaped like a schedule.
    Parsing(String, String),
    Malformed(String, String),
    Io(std::io::Error, String),
}

/// The two ways a schedule load can fail, as far as the UI cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    /// Transport error, non-OK response, or a body that is not JSON.
    FetchFailure,
    /// JSON of the wrong shape: missing or mistyped `events`, or an event
    /// without a competition.
    MalformedPayload,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Decode(e, src) => write!(f, "Invalid JSON from {src}: {e}"),
            ApiError::Parsing(e, src) => write!(f, "Parse error for {src}: {e}"),
            ApiError::Malformed(msg, src) => write!(f, "Malformed schedule from {src}: {msg}"),
            ApiError::Io(e, path) => write!(f, "Could not read {path}: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn failure(&self) -> LoadFailure {
        match self {
            ApiError::Network(..) | ApiError::Api(..) | ApiError::Decode(..) | ApiError::Io(..) => {
                LoadFailure::FetchFailure
            }
            ApiError::Parsing(..) | ApiError::Malformed(..) => LoadFailure::MalformedPayload,
        }
    }
}

impl NflApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the schedule from a local JSON file instead of the network.
    pub fn with_snapshot(mut self, path: Option<PathBuf>) -> Self {
        self.snapshot = path;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and map the whole season. The payload is accepted or rejected
    /// as a unit; a single bad event rejects all of it.
    pub async fn fetch_schedule(&self) -> ApiResult<Vec<ScheduleEvent>> {
        if let Some(path) = &self.snapshot {
            let source = path.display().to_string();
            debug!("loading schedule snapshot from {source}");
            let content = std::fs::read_to_string(path).map_err(|e| ApiError::Io(e, source.clone()))?;
            let body: Value = serde_json::from_str(&content)
                .map_err(|e| ApiError::Decode(e.to_string(), source.clone()))?;
            return map_schedule(decode_schedule(body, &source)?, &source);
        }

        debug!("fetching schedule from {}", self.url);
        let body = self.get(&self.url).await?;
        map_schedule(decode_schedule(body, &self.url)?, &self.url)
    }

    async fn get(&self, url: &str) -> ApiResult<Value> {
        let mut request = self.client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<Value>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string(), url.to_owned())),
            Err(e) => Err(ApiError::Api(e, url.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping: wire types → clean domain types
// ---------------------------------------------------------------------------

fn decode_schedule(body: Value, source: &str) -> ApiResult<ScheduleResponse> {
    serde_json::from_value(body).map_err(|e| ApiError::Parsing(e.to_string(), source.to_owned()))
}

fn map_schedule(raw: ScheduleResponse, source: &str) -> ApiResult<Vec<ScheduleEvent>> {
    let Some(events) = raw.events else {
        return Err(ApiError::Malformed("payload has no events array".into(), source.to_owned()));
    };
    let mapped = events
        .iter()
        .enumerate()
        .map(|(idx, event)| {
            map_event(event).ok_or_else(|| {
                ApiError::Malformed(
                    format!(
                        "event #{idx} ({}) has no competition",
                        event.name.as_deref().unwrap_or("unnamed")
                    ),
                    source.to_owned(),
                )
            })
        })
        .collect::<ApiResult<Vec<_>>>()?;
    debug!("mapped {} schedule events from {source}", mapped.len());
    Ok(mapped)
}

/// `None` when the event carries no competition to read teams and venue from.
fn map_event(event: &EspnEvent) -> Option<ScheduleEvent> {
    let competition = event.competitions.as_deref()?.first()?;

    let venue = competition
        .venue
        .as_ref()
        .map(|v| Venue {
            name: v.full_name.clone().unwrap_or_default(),
            city: v.address.as_ref().and_then(|a| a.city.clone()),
            state: v.address.as_ref().and_then(|a| a.state.clone()),
        })
        .unwrap_or_default();

    let competitors = competition.competitors.as_deref().unwrap_or_default();
    let first = competitors.first().map(map_competitor).unwrap_or_default();
    let second = competitors.get(1).map(map_competitor).unwrap_or_default();

    let date = event
        .date
        .as_deref()
        .or(competition.date.as_deref())
        .and_then(parse_event_date);

    let name = event
        .name
        .clone()
        .or_else(|| event.short_name.clone())
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| format!("{} vs {}", first.display_name, second.display_name));

    Some(ScheduleEvent {
        id: event.id.clone().unwrap_or_default(),
        name,
        date,
        venue,
        competitors: [first, second],
    })
}

fn map_competitor(c: &EspnCompetitor) -> Competitor {
    let display_name = c
        .team
        .as_ref()
        .and_then(|t| t.display_name.clone().or_else(|| t.short_display_name.clone()))
        .filter(|n| !n.trim().is_empty());
    Competitor {
        display_name: display_name.unwrap_or_else(|| crate::TBD.to_string()),
        score: c.score.as_ref().and_then(|s| s.points()),
    }
}

/// ESPN omits seconds ("2024-09-06T00:20Z"), which RFC 3339 parsing rejects.
pub fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%MZ")
        .ok()
        .map(|naive| naive.and_utc())
}
