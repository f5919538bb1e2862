use crate::state::app_settings::AppSettings;
use crate::state::app_state::{AppState, ScheduleState, WeekFilter};
use log::{error, info};
use nfl_api::client::LoadFailure;
use nfl_api::{ScheduleEvent, ScheduleSession, SeasonCalendar};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Picks,
    Schedule,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings, initial_week: Option<u8>) -> Self {
        let app = Self {
            state: AppState::new(initial_week),
            settings,
        };

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }
        // Logged at error so they show up under the default level.
        for warning in &app.settings.warnings {
            error!("{warning}");
        }

        app
    }

    pub fn calendar(&self) -> SeasonCalendar {
        SeasonCalendar::new(self.settings.season_start)
    }

    // -----------------------------------------------------------------------
    // Network response handlers
    // -----------------------------------------------------------------------

    pub fn on_schedule_loaded(&mut self, events: Vec<ScheduleEvent>) {
        let session = ScheduleSession::new(self.calendar(), events);
        if let Some(opener) = session.calendar().start_of(1) {
            info!(
                "schedule loaded with {} events, week 1 starts {}",
                session.events().len(),
                opener.format("%Y-%m-%d")
            );
        }
        self.state.last_error = None;
        self.state.schedule = ScheduleState::Loaded(session);
        self.state.refresh_labels();
    }

    pub fn on_schedule_failed(&mut self, failure: LoadFailure, message: String) {
        self.state.last_error = Some(message);
        self.state.schedule = ScheduleState::Failed(failure);
        self.state.refresh_labels();
    }

    /// Puts the schedule back into Loading. Returns false if a load is
    /// already in flight, in which case nothing should be requested.
    pub fn begin_reload(&mut self) -> bool {
        if self.state.schedule.is_loading() {
            return false;
        }
        self.state.schedule = ScheduleState::Loading;
        self.state.schedule_scroll = 0;
        self.state.refresh_labels();
        true
    }

    // -----------------------------------------------------------------------
    // Week filter
    // -----------------------------------------------------------------------

    pub fn next_week(&mut self) {
        let week = self.state.week.next();
        self.set_week(week.get());
    }

    pub fn prev_week(&mut self) {
        let week = self.state.week.prev();
        self.set_week(week.get());
    }

    pub fn clear_week(&mut self) {
        self.set_week(None);
    }

    pub fn set_week(&mut self, week: Option<u8>) {
        self.state.week = WeekFilter::new(week);
        self.state.schedule_scroll = 0;
        self.state.refresh_labels();
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    // -----------------------------------------------------------------------
    // Picks, delegated to PicksState
    // -----------------------------------------------------------------------

    pub fn focus_next_selector(&mut self) {
        self.state.picks.focus_next();
    }

    pub fn focus_prev_selector(&mut self) {
        self.state.picks.focus_prev();
    }

    pub fn choose_next_option(&mut self) {
        self.state.picks.choose_next();
    }

    pub fn choose_prev_option(&mut self) {
        self.state.picks.choose_prev();
    }

    pub fn clear_pick(&mut self) {
        self.state.picks.clear_focused();
    }

    // -----------------------------------------------------------------------
    // Schedule scrolling
    // -----------------------------------------------------------------------

    pub fn schedule_scroll_down(&mut self) {
        self.state.schedule_scroll = self.state.schedule_scroll.saturating_add(1);
    }

    pub fn schedule_scroll_up(&mut self) {
        self.state.schedule_scroll = self.state.schedule_scroll.saturating_sub(1);
    }

    pub fn schedule_scroll_top(&mut self) {
        self.state.schedule_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone, Utc};
    use nfl_api::Competitor;

    fn app(week: Option<u8>) -> App {
        let settings = AppSettings::from_lookup(|key| match key {
            "NFLPICKS_SEASON_START" => Some("2024-09-05T00:00:00Z".to_string()),
            _ => None,
        });
        App::new(settings, week)
    }

    fn events() -> Vec<ScheduleEvent> {
        let start = Utc.with_ymd_and_hms(2024, 9, 5, 0, 0, 0).unwrap();
        vec![
            ScheduleEvent {
                name: "Arizona Cardinals at Buffalo Bills".into(),
                date: Some(start + TimeDelta::days(3)),
                competitors: [Competitor::new("Buffalo Bills"), Competitor::new("Arizona Cardinals")],
                ..Default::default()
            },
            ScheduleEvent {
                name: "Buffalo Bills at Miami Dolphins".into(),
                date: Some(start + TimeDelta::days(10)),
                competitors: [Competitor::new("Miami Dolphins"), Competitor::new("Buffalo Bills")],
                ..Default::default()
            },
        ]
    }

    fn first_label(app: &App) -> String {
        app.state.picks.selectors[0].options[0].to_string()
    }

    #[test]
    fn loaded_schedule_relabels_selectors() {
        let mut app = app(Some(1));
        assert_eq!(first_label(&app), "Bills");
        app.on_schedule_loaded(events());
        assert_eq!(first_label(&app), "Bills vs Arizona Cardinals");

        app.next_week();
        assert_eq!(app.state.week.get(), Some(2));
        assert_eq!(first_label(&app), "Bills vs Miami Dolphins");

        app.set_week(Some(9));
        assert_eq!(first_label(&app), "Bills");
    }

    #[test]
    fn unfiltered_uses_first_appearance() {
        let mut app = app(None);
        app.on_schedule_loaded(events());
        assert_eq!(first_label(&app), "Bills vs Arizona Cardinals");
        let session = app.state.schedule.session().unwrap();
        assert_eq!(session.events().len(), 2);
        assert_eq!(*session.calendar(), app.calendar());
    }

    #[test]
    fn failure_keeps_bare_labels_and_records_error() {
        let mut app = app(Some(1));
        app.on_schedule_failed(LoadFailure::FetchFailure, "boom".to_string());
        assert!(matches!(app.state.schedule, ScheduleState::Failed(LoadFailure::FetchFailure)));
        assert_eq!(app.state.last_error.as_deref(), Some("boom"));
        assert_eq!(first_label(&app), "Bills");
    }

    #[test]
    fn reload_is_ignored_while_loading() {
        let mut app = app(None);
        assert!(!app.begin_reload());
        app.on_schedule_loaded(events());
        app.choose_next_option();
        assert!(app.begin_reload());
        assert!(app.state.schedule.is_loading());
        assert_eq!(first_label(&app), "Bills");
        assert_eq!(app.state.picks.selectors[0].chosen, Some("Bills"));
    }

    #[test]
    fn week_change_resets_scroll() {
        let mut app = app(None);
        app.schedule_scroll_down();
        app.schedule_scroll_down();
        assert_eq!(app.state.schedule_scroll, 2);
        app.prev_week();
        assert_eq!(app.state.week.get(), Some(18));
        assert_eq!(app.state.schedule_scroll, 0);
        app.clear_week();
        assert_eq!(app.state.week.get(), None);
    }

    struct CaptureLogger;

    static CAPTURED: std::sync::Mutex<Vec<(log::Level, String)>> = std::sync::Mutex::new(Vec::new());

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            CAPTURED.lock().unwrap().push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    #[test]
    fn settings_problems_survive_the_default_level() {
        let _ = log::set_logger(&CaptureLogger);
        log::set_max_level(log::LevelFilter::Error);

        let settings = AppSettings::from_lookup(|key| match key {
            "NFLPICKS_TIMEOUT_SECS" => Some("soon".to_string()),
            _ => None,
        });
        assert_eq!(settings.warnings.len(), 1);
        let _app = App::new(settings, None);

        let captured = CAPTURED.lock().unwrap();
        assert!(
            captured
                .iter()
                .any(|(level, msg)| *level == log::Level::Error && msg.contains("NFLPICKS_TIMEOUT_SECS")),
            "got: {captured:?}"
        );
    }

    #[test]
    fn help_returns_to_previous_tab() {
        let mut app = app(None);
        app.update_tab(MenuItem::Schedule);
        app.update_tab(MenuItem::Help);
        app.exit_help();
        assert_eq!(app.state.active_tab, MenuItem::Schedule);
    }
}
