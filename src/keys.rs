use crate::app::{App, MenuItem};
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    match (guard.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Tab switching
        (_, Char('1'), _) => guard.update_tab(MenuItem::Picks),
        (_, Char('2'), _) => guard.update_tab(MenuItem::Schedule),
        (_, Char('?'), _) => guard.update_tab(MenuItem::Help),
        (MenuItem::Help, KeyCode::Esc, _) => guard.exit_help(),

        // Week filter, any tab
        (_, Char(']') | Char('n'), _) => guard.next_week(),
        (_, Char('[') | Char('p'), _) => guard.prev_week(),
        (_, Char('0') | Char('a'), _) => guard.clear_week(),

        // Picks
        (MenuItem::Picks, Char('j') | KeyCode::Down, _) => guard.focus_next_selector(),
        (MenuItem::Picks, Char('k') | KeyCode::Up, _) => guard.focus_prev_selector(),
        (MenuItem::Picks, Char('l') | KeyCode::Right | KeyCode::Enter, _) => {
            guard.choose_next_option()
        }
        (MenuItem::Picks, Char('h') | KeyCode::Left, _) => guard.choose_prev_option(),
        (MenuItem::Picks, Char('x') | KeyCode::Backspace | KeyCode::Delete, _) => {
            guard.clear_pick()
        }

        // Schedule
        (MenuItem::Schedule, Char('j') | KeyCode::Down, _) => guard.schedule_scroll_down(),
        (MenuItem::Schedule, Char('k') | KeyCode::Up, _) => guard.schedule_scroll_up(),
        (MenuItem::Schedule, Char('g') | KeyCode::Home, _) => guard.schedule_scroll_top(),

        // Global
        (_, Char('R'), _) => {
            if guard.begin_reload() {
                drop(guard);
                let _ = network_requests.send(NetworkRequest::LoadSchedule).await;
                return;
            }
        }
        (_, Char('f'), _) => guard.toggle_full_screen(),
        (_, Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }
}
