use crate::calendar::{SEASON_WEEKS, SeasonCalendar, WeekBuckets, group_by_week};
use crate::matchups::{Matchup, appearances};
use crate::ScheduleEvent;
use log::warn;

/// Everything one successful fetch produced. Filter and render operations take
/// the session explicitly; a new fetch replaces it wholesale.
#[derive(Debug, Clone, Default)]
pub struct ScheduleSession {
    calendar: SeasonCalendar,
    events: Vec<ScheduleEvent>,
}

impl ScheduleSession {
    pub fn new(calendar: SeasonCalendar, events: Vec<ScheduleEvent>) -> Self {
        Self { calendar, events }
    }

    pub fn calendar(&self) -> &SeasonCalendar {
        &self.calendar
    }

    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    /// Bucket the season, optionally narrowed to one week. Weeks outside
    /// 1..=18 select nothing.
    pub fn view(&self, week: Option<u8>) -> ScheduleView<'_> {
        let buckets = group_by_week(&self.events, &self.calendar);
        match week {
            None => ScheduleView {
                week: None,
                active: self.events.iter().collect(),
                buckets,
            },
            Some(week) => {
                let buckets = buckets.retain_week(week);
                let active = if (1..=SEASON_WEEKS).contains(&week) {
                    buckets.get(week).to_vec()
                } else {
                    Vec::new()
                };
                ScheduleView { week: Some(week), active, buckets }
            }
        }
    }
}

/// The schedule as seen through the current week filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleView<'a> {
    pub week: Option<u8>,
    /// Events grouped for display: every week, or only the selected one.
    pub buckets: WeekBuckets<'a>,
    /// Events opponents are resolved against: the whole feed when unfiltered,
    /// the selected week's bucket otherwise.
    pub active: Vec<&'a ScheduleEvent>,
}

impl ScheduleView<'_> {
    pub fn matchup(&self, team: &str) -> Matchup {
        if self.week.is_some() && appearances(team, self.active.iter().copied()) > 1 {
            warn!("{team} appears more than once in week {:?}; using first game", self.week);
        }
        Matchup::resolve(team, self.active.iter().copied())
    }

    /// True when a specific week is selected and nothing is scheduled in it.
    pub fn is_empty_week(&self) -> bool {
        self.week.is_some() && self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Competitor;
    use chrono::{TimeZone, Utc};

    fn session() -> ScheduleSession {
        let cal = SeasonCalendar::new(Utc.with_ymd_and_hms(2024, 9, 5, 0, 0, 0).unwrap());
        let game = |home: &str, away: &str, week: u8| ScheduleEvent {
            id: format!("{away}@{home}"),
            name: format!("{away} at {home}"),
            date: cal.start_of(week).map(|d| d + chrono::TimeDelta::hours(20)),
            competitors: [Competitor::new(home), Competitor::new(away)],
            ..Default::default()
        };
        ScheduleSession::new(
            cal,
            vec![
                game("Chiefs", "Ravens", 1),
                game("Eagles", "Packers", 1),
                game("Bills", "Dolphins", 2),
                game("Chiefs", "Bengals", 2),
            ],
        )
    }

    #[test]
    fn unfiltered_view_groups_everything_and_resolves_first_game() {
        let s = session();
        let view = s.view(None);
        assert_eq!(view.buckets.iter().count(), 2);
        assert_eq!(view.active.len(), 4);
        assert_eq!(view.matchup("Chiefs").to_string(), "Chiefs vs Ravens");
        assert!(!view.is_empty_week());
    }

    #[test]
    fn filtered_view_narrows_buckets_and_labels() {
        let s = session();
        let view = s.view(Some(2));
        assert_eq!(view.buckets.iter().map(|(w, _)| w).collect::<Vec<_>>(), [2]);
        assert_eq!(view.matchup("Chiefs").to_string(), "Chiefs vs Bengals");
        assert_eq!(view.matchup("Ravens").to_string(), "Ravens");
    }

    #[test]
    fn empty_week_has_no_opponents() {
        let s = session();
        let view = s.view(Some(5));
        assert!(view.is_empty_week());
        assert!(view.active.is_empty());
        for team in crate::roster::all_teams() {
            assert_eq!(view.matchup(team).opponent, None);
        }
    }

    #[test]
    fn out_of_range_week_selects_nothing() {
        let s = session();
        assert!(s.view(Some(0)).is_empty_week());
        assert!(s.view(Some(19)).active.is_empty());
    }

    #[test]
    fn same_filter_twice_gives_same_view() {
        let s = session();
        assert_eq!(s.view(Some(1)), s.view(Some(1)));
    }
}
