use crate::ScheduleEvent;
use std::fmt;

/// Text form of an unresolved opponent.
pub const NO_OPPONENT: &str = "no opponent";

/// Opponent of `team` in the first event it plays in, scanning in order.
/// `None` means the team has no game in `events`.
///
/// A team listed in more than one event (a bad feed, or an unfiltered season)
/// still resolves to its first match.
pub fn opponent_for<'a, I>(team: &str, events: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a ScheduleEvent>,
{
    events
        .into_iter()
        .find_map(|event| event.opponent_of(team))
        .map(|c| c.display_name.as_str())
}

/// How many of `events` list `team` as a competitor.
pub fn appearances<'a, I>(team: &str, events: I) -> usize
where
    I: IntoIterator<Item = &'a ScheduleEvent>,
{
    events.into_iter().filter(|event| event.involves(team)).count()
}

/// One choice in a team selector: the team plus whoever it faces in the
/// active event set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matchup {
    pub team: String,
    pub opponent: Option<String>,
}

impl Matchup {
    pub fn bare(team: impl Into<String>) -> Self {
        Self { team: team.into(), opponent: None }
    }

    pub fn resolve<'a, I>(team: &str, events: I) -> Self
    where
        I: IntoIterator<Item = &'a ScheduleEvent>,
    {
        Self {
            team: team.to_string(),
            opponent: opponent_for(team, events).map(str::to_string),
        }
    }

    pub fn opponent_label(&self) -> &str {
        self.opponent.as_deref().unwrap_or(NO_OPPONENT)
    }
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.opponent {
            Some(opponent) => write!(f, "{} vs {opponent}", self.team),
            None => f.write_str(&self.team),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Competitor;

    fn game(first: &str, second: &str) -> ScheduleEvent {
        ScheduleEvent {
            name: format!("{second} at {first}"),
            competitors: [Competitor::new(first), Competitor::new(second)],
            ..Default::default()
        }
    }

    #[test]
    fn resolves_opponent_from_either_side() {
        let events = vec![game("Bills", "Cardinals"), game("Chiefs", "Ravens")];
        assert_eq!(opponent_for("Bills", &events), Some("Cardinals"));
        assert_eq!(opponent_for("Cardinals", &events), Some("Bills"));
        assert_eq!(opponent_for("Ravens", &events), Some("Chiefs"));
    }

    #[test]
    fn absent_team_has_no_opponent() {
        let events = vec![game("Bills", "Cardinals")];
        assert_eq!(opponent_for("Jets", &events), None);
        assert_eq!(opponent_for("Jets", &Vec::<ScheduleEvent>::new()), None);
        assert_eq!(Matchup::resolve("Jets", &events).opponent_label(), NO_OPPONENT);
    }

    #[test]
    fn first_match_wins_on_duplicates() {
        let events = vec![
            game("Dolphins", "Bills"),
            game("Bills", "Jets"),
        ];
        assert_eq!(opponent_for("Bills", &events), Some("Dolphins"));
        assert_eq!(appearances("Bills", &events), 2);
        assert_eq!(appearances("Jets", &events), 1);
    }

    #[test]
    fn nickname_resolves_against_full_display_names() {
        let events = vec![game("Buffalo Bills", "Arizona Cardinals")];
        assert_eq!(opponent_for("Bills", &events), Some("Arizona Cardinals"));
        assert_eq!(opponent_for("Cardinals", &events), Some("Buffalo Bills"));
    }

    #[test]
    fn matchup_display_forms() {
        let events = vec![game("Bills", "Cardinals")];
        assert_eq!(Matchup::resolve("Bills", &events).to_string(), "Bills vs Cardinals");
        assert_eq!(Matchup::bare("Jets").to_string(), "Jets");
    }

    #[test]
    fn matchup_keeps_team_and_opponent_apart() {
        // A name containing the separator must not confuse the structured form.
        let events = vec![game("Team vs Team", "Other")];
        let m = Matchup::resolve("Other", &events);
        assert_eq!(m.team, "Other");
        assert_eq!(m.opponent.as_deref(), Some("Team vs Team"));
    }
}
