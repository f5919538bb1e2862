/// ESPN-shaped raw wire types for the schedule feed.
/// These map to our clean domain types via the mapping functions in client.rs.
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string or a number. Anything else (objects, arrays, booleans)
/// reads as absent instead of failing the whole payload.
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Only strings are dates; a number or anything else reads as absent, so the
/// event lands in no week.
fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

// ---------------------------------------------------------------------------
// Schedule  (scoreboard-style payload)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleResponse {
    /// Absent on a malformed payload; an empty array is a valid empty season.
    pub events: Option<Vec<EspnEvent>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEvent {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "shortName")]
    pub short_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<String>, // ISO 8601, seconds optional: "2024-09-06T00:20Z"
    pub competitions: Option<Vec<EspnCompetition>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetition {
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<String>,
    pub venue: Option<EspnVenue>,
    pub competitors: Option<Vec<EspnCompetitor>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnCompetitor {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub team: Option<EspnTeam>,
    pub score: Option<EspnScore>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnTeam {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "shortDisplayName")]
    pub short_display_name: Option<String>,
    pub abbreviation: Option<String>,
}

/// The scoreboard sends `"24"`, the schedule endpoint sends
/// `{ "value": 24.0, "displayValue": "24" }`, and proxies sometimes send `24`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum EspnScore {
    Number(f64),
    Text(String),
    Detailed {
        value: Option<f64>,
        #[serde(rename = "displayValue")]
        display_value: Option<String>,
    },
}

impl EspnScore {
    pub fn points(&self) -> Option<u16> {
        let from_f64 = |v: f64| (v.is_finite() && v >= 0.0 && v <= f64::from(u16::MAX)).then_some(v as u16);
        match self {
            EspnScore::Number(v) => from_f64(*v),
            EspnScore::Text(s) => s.trim().parse::<u16>().ok(),
            EspnScore::Detailed { value, display_value } => value
                .and_then(from_f64)
                .or_else(|| display_value.as_deref().and_then(|s| s.trim().parse().ok())),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnVenue {
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub address: Option<EspnAddress>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnAddress {
    pub city: Option<String>,
    pub state: Option<String>,
}
