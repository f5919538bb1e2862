use crate::ScheduleEvent;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::BTreeMap;

/// Regular-season length. Week 18 also absorbs everything after it.
pub const SEASON_WEEKS: u8 = 18;

/// Kickoff of the 2024 season, 2024-09-05T00:00:00Z.
const DEFAULT_SEASON_START_SECS: i64 = 1_725_494_400;

pub fn default_season_start() -> DateTime<Utc> {
    DateTime::from_timestamp(DEFAULT_SEASON_START_SECS, 0).unwrap_or_default()
}

/// Week start instants: element i is `season_start + i * 7 days`.
pub fn week_start_dates(season_start: DateTime<Utc>) -> [DateTime<Utc>; SEASON_WEEKS as usize] {
    std::array::from_fn(|i| season_start + TimeDelta::weeks(i as i64))
}

/// Fixed 18-week calendar anchored at one season start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonCalendar {
    weeks: [DateTime<Utc>; SEASON_WEEKS as usize],
}

impl Default for SeasonCalendar {
    fn default() -> Self {
        Self::new(default_season_start())
    }
}

impl SeasonCalendar {
    pub fn new(season_start: DateTime<Utc>) -> Self {
        Self { weeks: week_start_dates(season_start) }
    }

    /// Start instant of a 1-based week number.
    pub fn start_of(&self, week: u8) -> Option<DateTime<Utc>> {
        let idx = usize::from(week).checked_sub(1)?;
        self.weeks.get(idx).copied()
    }

    /// The greatest week whose start is at or before `date`. Week 18 has no
    /// upper bound; anything before week 1 has no week.
    pub fn week_of(&self, date: DateTime<Utc>) -> Option<u8> {
        let idx = self.weeks.iter().rposition(|start| date >= *start)?;
        Some(idx as u8 + 1)
    }
}

/// Events grouped under their 1-based week number. Only weeks that received at
/// least one event have an entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekBuckets<'a> {
    buckets: BTreeMap<u8, Vec<&'a ScheduleEvent>>,
    dropped: usize,
}

impl<'a> WeekBuckets<'a> {
    pub fn get(&self, week: u8) -> &[&'a ScheduleEvent] {
        self.buckets.get(&week).map(Vec::as_slice).unwrap_or_default()
    }

    /// Weeks in ascending order with their events in source order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[&'a ScheduleEvent])> {
        self.buckets.iter().map(|(week, events)| (*week, events.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of events that fell before week 1 or had no usable date.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Keep only `week`, discarding every other bucket.
    pub fn retain_week(mut self, week: u8) -> Self {
        self.buckets.retain(|w, _| *w == week);
        self
    }
}

/// Assign each event to exactly one week, preserving source order inside a
/// week. Undated events and events before week 1 are dropped.
pub fn group_by_week<'a, I>(events: I, calendar: &SeasonCalendar) -> WeekBuckets<'a>
where
    I: IntoIterator<Item = &'a ScheduleEvent>,
{
    let mut grouped = WeekBuckets::default();
    for event in events {
        match event.date.and_then(|d| calendar.week_of(d)) {
            Some(week) => grouped.buckets.entry(week).or_default().push(event),
            None => grouped.dropped += 1,
        }
    }
    if grouped.dropped > 0 {
        log::debug!("{} event(s) fell outside the season calendar", grouped.dropped);
    }
    grouped
}
