use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use nfl_api::ScheduleEvent;
use nfl_api::client::LoadFailure;

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    LoadSchedule,
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    ScheduleLoaded { events: Vec<ScheduleEvent> },
    ScheduleFailed { failure: LoadFailure, message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
}
