use crate::app::MenuItem;
use crate::state::picks::PicksState;
use nfl_api::client::LoadFailure;
use nfl_api::{SEASON_WEEKS, ScheduleSession};

// ---------------------------------------------------------------------------
// Schedule lifecycle
// ---------------------------------------------------------------------------

/// Loading -> Loaded | Failed. A failure is final until the user reloads.
#[derive(Debug, Default)]
pub enum ScheduleState {
    #[default]
    Loading,
    Loaded(ScheduleSession),
    Failed(LoadFailure),
}

impl ScheduleState {
    pub fn session(&self) -> Option<&ScheduleSession> {
        match self {
            ScheduleState::Loaded(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ScheduleState::Loading)
    }
}

// ---------------------------------------------------------------------------
// Week filter
// ---------------------------------------------------------------------------

/// `None` shows the whole season.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WeekFilter(Option<u8>);

impl WeekFilter {
    /// Out-of-range weeks are treated as "all weeks".
    pub fn new(week: Option<u8>) -> Self {
        Self(week.filter(|w| (1..=SEASON_WEEKS).contains(w)))
    }

    pub fn get(self) -> Option<u8> {
        self.0
    }

    /// All -> 1 -> .. -> 18 -> All.
    pub fn next(self) -> Self {
        match self.0 {
            None => Self(Some(1)),
            Some(w) if w >= SEASON_WEEKS => Self(None),
            Some(w) => Self(Some(w + 1)),
        }
    }

    pub fn prev(self) -> Self {
        match self.0 {
            None => Self(Some(SEASON_WEEKS)),
            Some(w) if w <= 1 => Self(None),
            Some(w) => Self(Some(w - 1)),
        }
    }

    pub fn label(self) -> String {
        match self.0 {
            Some(w) => format!("Week {w}"),
            None => "All weeks".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    pub last_error: Option<String>,
    pub schedule: ScheduleState,
    pub week: WeekFilter,
    pub picks: PicksState,
    pub schedule_scroll: u16,
}

impl AppState {
    pub fn new(week: Option<u8>) -> Self {
        Self {
            week: WeekFilter::new(week),
            ..Self::default()
        }
    }

    /// Full recomputation of every selector label against the active filter.
    pub fn refresh_labels(&mut self) {
        let view = self.schedule.session().map(|s| s.view(self.week.get()));
        self.picks.refresh(view.as_ref());
    }
}
