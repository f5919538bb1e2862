use crate::state::messages::{NetworkRequest, NetworkResponse};
use log::{debug, error};
use nfl_api::client::NflApi;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

/// Serves schedule loads one at a time, in request order.
pub struct NetworkWorker {
    client: NflApi,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    is_loading: Arc<AtomicBool>,
}

impl NetworkWorker {
    pub fn new(
        client: NflApi,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client,
            requests,
            responses,
            is_loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            self.start_loading_animation().await;

            let response = match request {
                NetworkRequest::LoadSchedule => self.handle_load_schedule().await,
            };

            debug!("network request complete");
            let is_ok = matches!(response, NetworkResponse::ScheduleLoaded { .. });
            self.stop_loading_animation(is_ok).await;

            if let Err(e) = self.responses.send(response).await {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    async fn handle_load_schedule(&self) -> NetworkResponse {
        debug!("loading season schedule");
        match self.client.fetch_schedule().await {
            Ok(events) => NetworkResponse::ScheduleLoaded { events },
            Err(err) => {
                error!("Error fetching the schedule: {err}");
                NetworkResponse::ScheduleFailed {
                    failure: err.failure(),
                    message: err.to_string(),
                }
            }
        }
    }

    async fn start_loading_animation(&self) {
        self.is_loading.store(true, Ordering::Relaxed);

        let mut loading_state =
            LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state })
            .await;

        let responses = self.responses.clone();
        let is_loading = self.is_loading.clone();

        tokio::spawn(async move {
            let mut spinner_index = 1;
            let mut interval = tokio::time::interval(Duration::from_millis(80));
            loop {
                interval.tick().await;
                if !is_loading.load(Ordering::Relaxed) {
                    break;
                }
                loading_state.spinner_char = SPINNER_CHARS[spinner_index];
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
                let _ = responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await;
            }
        });
    }

    async fn stop_loading_animation(&self, is_ok: bool) {
        self.is_loading.store(false, Ordering::Relaxed);
        tokio::time::sleep(Duration::from_millis(15)).await;

        let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged {
                loading_state: LoadingState { is_loading: false, spinner_char },
            })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nfl_api::client::LoadFailure;
    use std::path::PathBuf;

    async fn run_once(client: NflApi) -> Vec<NetworkResponse> {
        let (req_tx, req_rx) = mpsc::channel(4);
        let (resp_tx, mut resp_rx) = mpsc::channel(64);
        let worker = tokio::spawn(NetworkWorker::new(client, req_rx, resp_tx).run());

        req_tx.send(NetworkRequest::LoadSchedule).await.unwrap();
        drop(req_tx);

        let mut out = Vec::new();
        while let Some(resp) = resp_rx.recv().await {
            out.push(resp);
        }
        worker.await.unwrap();
        out
    }

    #[tokio::test]
    async fn failed_load_reports_failure_and_error_spinner() {
        let client = NflApi::new().with_snapshot(Some(PathBuf::from("/nonexistent/schedule.json")));
        let responses = run_once(client).await;

        assert!(responses.iter().any(|r| matches!(
            r,
            NetworkResponse::ScheduleFailed { failure: LoadFailure::FetchFailure, .. }
        )));
        assert!(responses.iter().any(|r| matches!(
            r,
            NetworkResponse::LoadingStateChanged { loading_state }
                if !loading_state.is_loading && loading_state.spinner_char == ERROR_CHAR
        )));
    }

    #[tokio::test]
    async fn snapshot_load_yields_events() {
        let path = std::env::temp_dir().join(format!("nflpicks-worker-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"events": [{"name": "Jets at 49ers", "date": "2024-09-10T00:15Z",
                "competitions": [{"competitors": [
                    {"team": {"displayName": "San Francisco 49ers"}},
                    {"team": {"displayName": "New York Jets"}}
                ]}]}]}"#,
        )
        .unwrap();

        let responses = run_once(NflApi::new().with_snapshot(Some(path.clone()))).await;
        std::fs::remove_file(&path).ok();

        let events = responses.into_iter().find_map(|r| match r {
            NetworkResponse::ScheduleLoaded { events } => Some(events),
            _ => None,
        });
        assert_eq!(events.map(|e| e.len()), Some(1));
    }
}
