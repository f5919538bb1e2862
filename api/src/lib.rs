pub mod calendar;
pub mod client;
pub mod espn;
pub mod matchups;
pub mod roster;
pub mod session;

use chrono::{DateTime, Utc};

pub use calendar::{SEASON_WEEKS, SeasonCalendar, WeekBuckets, group_by_week, week_start_dates};
pub use matchups::{Matchup, NO_OPPONENT, opponent_for};
pub use roster::{DIVISIONS, Division, FEATURED_GAME};
pub use session::{ScheduleSession, ScheduleView};

// ---------------------------------------------------------------------------
// Domain types, independent of the wire format
// ---------------------------------------------------------------------------

/// Display name used when the feed leaves a competitor slot empty.
pub const TBD: &str = "TBD";

/// One scheduled game, as fetched. Never mutated after mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleEvent {
    pub id: String,
    pub name: String, // "Baltimore Ravens at Kansas City Chiefs"
    /// `None` when the feed date is missing or unparseable. Such events never
    /// land in a week bucket.
    pub date: Option<DateTime<Utc>>,
    pub venue: Venue,
    /// Ordered as listed by the feed (ESPN lists home first).
    pub competitors: [Competitor; 2],
}

impl ScheduleEvent {
    /// True when either competitor names `team`.
    pub fn involves(&self, team: &str) -> bool {
        self.competitors.iter().any(|c| c.is(team))
    }

    /// The competitor on the other side of `team`, if `team` plays in this game.
    pub fn opponent_of(&self, team: &str) -> Option<&Competitor> {
        let [first, second] = &self.competitors;
        if first.is(team) {
            Some(second)
        } else if second.is(team) {
            Some(first)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Venue {
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl Venue {
    /// "Arrowhead Stadium, Kansas City, MO", skipping missing parts.
    pub fn label(&self) -> String {
        [Some(self.name.as_str()), self.city.as_deref(), self.state.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competitor {
    pub display_name: String, // "Buffalo Bills"
    pub score: Option<u16>,
}

impl Default for Competitor {
    fn default() -> Self {
        Self { display_name: TBD.to_string(), score: None }
    }
}

impl Competitor {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self { display_name: display_name.into(), score: None }
    }

    pub fn with_score(mut self, score: u16) -> Self {
        self.score = Some(score);
        self
    }

    /// Matches on the full display name or on the trailing nickname, so the
    /// roster's "Bills" finds the feed's "Buffalo Bills".
    pub fn is(&self, team: &str) -> bool {
        if team.is_empty() {
            return false;
        }
        let name = self.display_name.as_str();
        name == team
            || name
                .strip_suffix(team)
                .is_some_and(|prefix| prefix.ends_with(' '))
    }
}
