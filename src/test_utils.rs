#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Sender};
    use std::time::{Duration, Instant};

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::config::{Config, TabConfig};
    use crate::lookup::{LookupRequest, LookupResponse};
    use crate::suggest::Suggestion;

    pub const DEBOUNCE_MS: u64 = 300;

    pub fn test_config() -> Config {
        let mut config = Config::default();
        config.search.base_url = "http://shop.local".to_string();
        config.tabs = vec![
            TabConfig {
                category: "1".to_string(),
                label: "Sofas".to_string(),
            },
            TabConfig {
                category: "2".to_string(),
                label: "Rugs".to_string(),
            },
        ];
        config
    }

    pub fn test_app() -> App {
        App::new(&test_config()).unwrap()
    }

    /// Worker side of an app's lookup channels
    pub struct FakeWorker {
        pub requests: UnboundedReceiver<LookupRequest>,
        pub responses: Sender<LookupResponse>,
    }

    impl FakeWorker {
        pub fn sent(&mut self) -> Vec<LookupRequest> {
            let mut sent = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                sent.push(request);
            }
            sent
        }

        pub fn answer(&self, request_id: u64, suggestions: Vec<Suggestion>) {
            self.responses
                .send(LookupResponse {
                    request_id,
                    result: Ok(suggestions),
                })
                .unwrap();
        }
    }

    /// App wired to channels the test drives directly
    pub fn connected_app() -> (App, FakeWorker) {
        let mut app = test_app();
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        app.connect(request_tx, response_rx);
        (
            app,
            FakeWorker {
                requests: request_rx,
                responses: response_tx,
            },
        )
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn after(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    pub fn furniture() -> Vec<Suggestion> {
        vec![
            Suggestion::new("abc", "tag"),
            Suggestion::new("Диван", "товар"),
            Suggestion::new("Лофт", "стиль"),
        ]
    }
}
