use crate::state::app_state::ScheduleState;
use nfl_api::client::LoadFailure;
use nfl_api::{ScheduleEvent, ScheduleSession};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};

pub const LOADING: &str = "Loading schedule...";
pub const FETCH_FAILED: &str = "Error loading schedule.";
pub const NO_EVENTS: &str = "No events available.";
pub const EMPTY_WEEK: &str = "No games scheduled for this week";

/// One row of the schedule pane, before styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleLine {
    Heading(String),
    Title(String),
    Detail(String),
    Placeholder(&'static str),
    Blank,
}

impl ScheduleLine {
    pub fn text(&self) -> &str {
        match self {
            ScheduleLine::Heading(s) | ScheduleLine::Title(s) | ScheduleLine::Detail(s) => s,
            ScheduleLine::Placeholder(s) => s,
            ScheduleLine::Blank => "",
        }
    }

    pub fn styled(&self) -> Line<'static> {
        let style = match self {
            ScheduleLine::Heading(_) => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ScheduleLine::Title(_) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ScheduleLine::Detail(_) => Style::default().fg(Color::Gray),
            ScheduleLine::Placeholder(_) => Style::default().fg(Color::DarkGray),
            ScheduleLine::Blank => Style::default(),
        };
        let indent = if matches!(self, ScheduleLine::Detail(_)) { "  " } else { "" };
        Line::from(Span::styled(format!("{indent}{}", self.text()), style))
    }
}

/// Everything the schedule pane shows for the given state and week filter.
pub fn schedule_lines(state: &ScheduleState, week: Option<u8>) -> Vec<ScheduleLine> {
    match state {
        ScheduleState::Loading => vec![ScheduleLine::Placeholder(LOADING)],
        ScheduleState::Failed(LoadFailure::FetchFailure) => vec![ScheduleLine::Placeholder(FETCH_FAILED)],
        ScheduleState::Failed(LoadFailure::MalformedPayload) => vec![ScheduleLine::Placeholder(NO_EVENTS)],
        ScheduleState::Loaded(session) => session_lines(session, week),
    }
}

fn session_lines(session: &ScheduleSession, week: Option<u8>) -> Vec<ScheduleLine> {
    let view = session.view(week);
    if view.is_empty_week() {
        return vec![ScheduleLine::Placeholder(EMPTY_WEEK)];
    }
    if view.buckets.is_empty() {
        return vec![ScheduleLine::Placeholder(NO_EVENTS)];
    }

    let mut lines = Vec::new();
    for (week, events) in view.buckets.iter() {
        lines.push(ScheduleLine::Heading(format!("Week {week}")));
        for event in events {
            push_event(&mut lines, event);
        }
    }
    lines
}

fn push_event(lines: &mut Vec<ScheduleLine>, event: &ScheduleEvent) {
    let [first, second] = &event.competitors;
    let date = event
        .date
        .map(|d| d.format("%a %b %-d, %Y %-I:%M %p UTC").to_string())
        .unwrap_or_else(|| "TBD".to_string());
    let score = |s: Option<u16>| s.map_or("-".to_string(), |s| s.to_string());

    lines.push(ScheduleLine::Title(event.name.clone()));
    lines.push(ScheduleLine::Detail(format!("Date: {date}")));
    lines.push(ScheduleLine::Detail(format!("Venue: {}", event.venue.label())));
    lines.push(ScheduleLine::Detail(format!(
        "Teams: {} vs {}",
        first.display_name, second.display_name
    )));
    lines.push(ScheduleLine::Detail(format!(
        "Score: {} - {}",
        score(first.score),
        score(second.score)
    )));
    lines.push(ScheduleLine::Blank);
}
