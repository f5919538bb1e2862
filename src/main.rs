mod app;
mod components;
mod draw;
mod keys;
mod state;
mod ui;

use crate::app::App;
use crate::state::app_settings::AppSettings;
use crate::state::messages::{NetworkRequest, NetworkResponse, UiEvent};
use crate::state::network::{LoadingState, NetworkWorker};
use crossterm::event::{self as crossterm_event, Event};
use crossterm::{cursor, execute, terminal};
use log::{error, info};
use nfl_api::SEASON_WEEKS;
use std::io::Stdout;
use std::sync::Arc;
use std::{io, panic};
use tokio::sync::{Mutex, mpsc};
use tui::{Terminal, backend::CrosstermBackend};

#[derive(Debug, PartialEq, Eq)]
enum CliAction {
    Run { week: Option<u8> },
    Help,
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let week = match parse_cli_args(std::env::args().skip(1)) {
        Ok(CliAction::Run { week }) => week,
        Ok(CliAction::Help) => {
            println!("{}", usage_text());
            return Ok(());
        }
        Ok(CliAction::Version) => {
            println!("nflpicks {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Err(message) => {
            eprintln!("{message}\n\n{}", usage_text());
            std::process::exit(2);
        }
    };

    better_panic::install();

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    setup_panic_hook();
    setup_terminal()?;

    tui_logger::init_logger(log::LevelFilter::Error)?;
    tui_logger::set_default_level(log::LevelFilter::Error);

    let settings = AppSettings::load();
    let client = settings.api_client();
    match &settings.snapshot {
        Some(path) => info!("loading schedule snapshot from {}", path.display()),
        None => info!("loading schedule from {}", client.url()),
    }
    let app = Arc::new(Mutex::new(App::new(settings, week)));

    let (ui_event_tx, ui_event_rx) = mpsc::channel::<UiEvent>(100);
    let (network_req_tx, network_req_rx) = mpsc::channel::<NetworkRequest>(100);
    let (network_resp_tx, network_resp_rx) = mpsc::channel::<NetworkResponse>(100);

    // Input handler thread
    let input_handler = tokio::spawn(input_handler_task(ui_event_tx.clone()));

    // Network thread
    let network_worker = NetworkWorker::new(client, network_req_rx, network_resp_tx);
    let network_task = tokio::spawn(network_worker.run());

    // Trigger the schedule load on startup
    let _ = ui_event_tx.send(UiEvent::AppStarted).await;

    main_ui_loop(terminal, app, ui_event_rx, network_req_tx, network_resp_rx).await;

    input_handler.abort();
    network_task.abort();

    Ok(())
}

fn parse_cli_args(args: impl IntoIterator<Item = String>) -> Result<CliAction, String> {
    let mut week = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliAction::Help),
            "-V" | "--version" => return Ok(CliAction::Version),
            "-w" | "--week" => {
                let value = args.next().ok_or("--week needs a value")?;
                week = Some(parse_week(&value)?);
            }
            other => match other.strip_prefix("--week=") {
                Some(value) => week = Some(parse_week(value)?),
                None => return Err(format!("Unknown argument: {other}")),
            },
        }
    }

    Ok(CliAction::Run { week })
}

fn parse_week(value: &str) -> Result<u8, String> {
    match value.parse::<u8>() {
        Ok(w) if (1..=SEASON_WEEKS).contains(&w) => Ok(w),
        _ => Err(format!("Invalid week: {value} (expected 1-{SEASON_WEEKS})")),
    }
}

fn usage_text() -> &'static str {
    "nflpicks - NFL weekly picks terminal UI

Usage:
  nflpicks [--week N]
  nflpicks --help
  nflpicks --version

Options:
  -w, --week N   Start filtered to week N (1-18)

Environment:
  NFLPICKS_SCHEDULE_URL    Schedule feed URL
  NFLPICKS_SCHEDULE_JSON   Path to a local schedule JSON snapshot
  NFLPICKS_SEASON_START    RFC 3339 start of week 1 (default 2024-09-05T00:00:00Z)
  NFLPICKS_TIMEOUT_SECS    Fetch timeout in seconds (default none)
  NFLPICKS_LOG             Log level: error, warn, info, debug, trace"
}

async fn main_ui_loop(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    app: Arc<Mutex<App>>,
    mut ui_events: mpsc::Receiver<UiEvent>,
    network_requests: mpsc::Sender<NetworkRequest>,
    mut network_responses: mpsc::Receiver<NetworkResponse>,
) {
    let mut loading = LoadingState::default();

    loop {
        tokio::select! {
            Some(ui_event) = ui_events.recv() => {
                let should_redraw = handle_ui_event(ui_event, &app, &network_requests).await;
                if should_redraw {
                    let mut app_guard = app.lock().await;
                    draw::draw(&mut terminal, &mut app_guard, loading);
                }
            }

            Some(response) = network_responses.recv() => {
                handle_network_response(response, &app, &mut loading).await;
                let mut app_guard = app.lock().await;
                draw::draw(&mut terminal, &mut app_guard, loading);
            }
        }
    }
}

async fn handle_ui_event(
    ui_event: UiEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) -> bool {
    match ui_event {
        UiEvent::AppStarted => {
            let _ = network_requests.send(NetworkRequest::LoadSchedule).await;
            true
        }
        UiEvent::KeyPressed(key_event) => {
            keys::handle_key_bindings(key_event, app, network_requests).await;
            true
        }
        UiEvent::Resize => true,
    }
}

async fn handle_network_response(
    response: NetworkResponse,
    app: &Arc<Mutex<App>>,
    loading: &mut LoadingState,
) {
    match response {
        NetworkResponse::LoadingStateChanged { loading_state } => {
            *loading = loading_state;
        }
        NetworkResponse::ScheduleLoaded { events } => {
            let mut guard = app.lock().await;
            guard.on_schedule_loaded(events);
        }
        NetworkResponse::ScheduleFailed { failure, message } => {
            error!("Schedule unavailable: {message}");
            let mut guard = app.lock().await;
            guard.on_schedule_failed(failure, message);
        }
    }
}

async fn input_handler_task(ui_events: mpsc::Sender<UiEvent>) {
    loop {
        if let Ok(event) = crossterm_event::read() {
            let ui_event = match event {
                Event::Key(key_event) => Some(UiEvent::KeyPressed(key_event)),
                Event::Resize(_, _) => Some(UiEvent::Resize),
                _ => None,
            };

            if let Some(ui_event) = ui_event
                && ui_events.send(ui_event).await.is_err()
            {
                break;
            }
        }
    }
}

fn setup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;
    execute!(stdout, terminal::EnterAlternateScreen)?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    terminal::enable_raw_mode()
}

pub fn cleanup_terminal() {
    let mut stdout = io::stdout();
    // Also runs from the panic hook, so keep going past failures.
    let _ = execute!(stdout, cursor::MoveTo(0, 0));
    let _ = execute!(stdout, terminal::Clear(terminal::ClearType::All));
    let _ = execute!(stdout, terminal::LeaveAlternateScreen);
    let _ = execute!(stdout, cursor::Show);
    let _ = terminal::disable_raw_mode();
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliAction, String> {
        parse_cli_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_runs_unfiltered() {
        assert_eq!(parse(&[]), Ok(CliAction::Run { week: None }));
    }

    #[test]
    fn week_flag_forms() {
        assert_eq!(parse(&["--week", "3"]), Ok(CliAction::Run { week: Some(3) }));
        assert_eq!(parse(&["-w", "18"]), Ok(CliAction::Run { week: Some(18) }));
        assert_eq!(parse(&["--week=1"]), Ok(CliAction::Run { week: Some(1) }));
    }

    #[test]
    fn bad_week_is_rejected() {
        assert!(parse(&["--week", "0"]).is_err());
        assert!(parse(&["--week", "19"]).is_err());
        assert!(parse(&["--week", "three"]).is_err());
        assert!(parse(&["--week"]).is_err());
    }

    #[test]
    fn help_and_version_win() {
        assert_eq!(parse(&["--week", "2", "--help"]), Ok(CliAction::Help));
        assert_eq!(parse(&["-V"]), Ok(CliAction::Version));
        assert!(parse(&["--bogus"]).is_err());
    }
}
