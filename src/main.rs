//! Terminal front end for NutriSearch.
//!
//! A line-oriented REPL over the library: every line read from stdin is turned
//! into one or more [`Event`]s, handled against the shared screen, and the
//! resulting [`Action`]s are run as background tasks. A renderer task redraws
//! the screen whenever its state changes. When stdin ends, requests still in
//! flight are awaited so piped input gets its results; `:quit` leaves at once.
//!
//! ```text
//! stdin ─▶ Command ─▶ handle_event ─▶ Action ─▶ JoinSet::spawn(flow)
//!                          │                          │
//!                          ▼                          ▼
//!                    ScreenHandle ◀── ticketed completion
//!                          │
//!                     subscribe() ─▶ renderer task ─▶ stdout
//! ```
//!
//! # Commands
//!
//! - any text: search foods by name
//! - `:barcode <code>`: look up a packaged product
//! - `:photo <path>`: recognize the food in a photo
//! - `:open <n>`: expand card `n` (0 = primary, 1.. alternatives)
//! - `:close`: close the detail view or history panel
//! - `:dismiss`: hide the current notice
//! - `:history`: list stored predictions
//! - `:prediction <id>`: show one stored prediction
//! - `:forget <id>`: delete a stored prediction
//! - `:quit`: leave
//!
//! # Configuration
//!
//! `--config <file.toml>` if given, else `$XDG_CONFIG_HOME/nutrisearch/config.toml`
//! if it exists, else `NUTRISEARCH_*` environment variables (with `.env`).

#![allow(clippy::multiple_crate_versions)]

use std::sync::Arc;

use nutrisearch::app::flows;
use nutrisearch::domain::ImageHandle;
use nutrisearch::infrastructure::{default_config_file, expand_tilde};
use nutrisearch::transport::{HttpTransport, NutritionService};
use nutrisearch::{handle_event, Action, CardRef, Config, Event, NutriError, ScreenHandle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

/// Width used when `COLUMNS` is unset or invalid.
const DEFAULT_COLUMNS: usize = 80;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Search(String),
    Barcode(String),
    Photo(String),
    Open(usize),
    Close,
    Dismiss,
    History,
    Inspect(String),
    Forget(String),
    Quit,
    Invalid(String),
    Nothing,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        return if line.is_empty() {
            Command::Nothing
        } else {
            Command::Search(line.to_string())
        };
    };

    let (name, arg) = rest
        .split_once(char::is_whitespace)
        .map_or((rest, ""), |(name, arg)| (name, arg.trim()));

    match (name, arg) {
        ("barcode" | "b", code) if !code.is_empty() => Command::Barcode(code.to_string()),
        ("photo" | "p", path) if !path.is_empty() => Command::Photo(path.to_string()),
        ("open" | "o", n) => n
            .parse()
            .map_or_else(|_| Command::Invalid(format!("not a card number: '{n}'")), Command::Open),
        ("close" | "c", "") => Command::Close,
        ("dismiss" | "d", "") => Command::Dismiss,
        ("history" | "h", "") => Command::History,
        ("prediction" | "i", id) if !id.is_empty() => Command::Inspect(id.to_string()),
        ("forget" | "f", id) if !id.is_empty() => Command::Forget(id.to_string()),
        ("quit" | "q", "") => Command::Quit,
        _ => Command::Invalid(format!("unknown command ':{rest}'")),
    }
}

/// Turns a command into the events it stands for.
fn events_for(command: Command) -> Result<Vec<Event>, String> {
    Ok(match command {
        Command::Search(query) => {
            let mut events = vec![Event::ClearQuery];
            events.extend(query.chars().map(Event::Char));
            events.push(Event::Submit);
            events
        }
        Command::Barcode(code) => vec![Event::SubmitBarcode(code)],
        Command::Photo(path) => {
            let image = ImageHandle::from_path(expand_tilde(&path)).map_err(|e| e.to_string())?;
            vec![Event::ImageCaptured(image)]
        }
        Command::Open(n) => vec![Event::OpenDetail(CardRef::from_number(n))],
        Command::Close => vec![Event::CloseDetail],
        Command::Dismiss => vec![Event::DismissNotice],
        Command::History => vec![Event::ShowHistory],
        Command::Inspect(id) => vec![Event::InspectPrediction(id)],
        Command::Forget(id) => vec![Event::ForgetPrediction(id)],
        Command::Quit => vec![Event::Quit],
        Command::Invalid(message) => return Err(message),
        Command::Nothing => vec![],
    })
}

fn load_config() -> Result<Config, NutriError> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args
                .next()
                .ok_or_else(|| NutriError::Config("--config needs a file path".to_string()))?;
            return Config::from_toml_file(expand_tilde(&path));
        }
    }

    match default_config_file().filter(|path| path.is_file()) {
        Some(path) => Config::from_toml_file(path),
        None => Ok(Config::from_env()),
    }
}

fn columns() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.trim().parse().ok())
        .filter(|&c| c > 0)
        .unwrap_or(DEFAULT_COLUMNS)
}

/// Runtime wrapper owning the screen, the service, and the flows in flight.
struct Client {
    screen: ScreenHandle,
    service: Arc<dyn NutritionService>,
    user_id: String,
    flows: JoinSet<()>,
}

impl Client {
    fn new(screen: ScreenHandle, service: Arc<dyn NutritionService>, user_id: String) -> Self {
        Self {
            screen,
            service,
            user_id,
            flows: JoinSet::new(),
        }
    }

    /// Handles one input line. Returns `false` once the client should exit.
    fn handle_line(&mut self, line: &str) -> bool {
        while let Some(joined) = self.flows.try_join_next() {
            log_join(joined);
        }

        let command = parse_command(line);
        tracing::debug!(command = ?command, "input parsed");

        let events = match events_for(command) {
            Ok(events) => events,
            Err(message) => {
                eprintln!("{message}");
                return true;
            }
        };

        let handled = self.screen.update(|state| {
            let mut actions = vec![];
            for event in &events {
                match handle_event(state, event) {
                    Ok((_, mut emitted)) => actions.append(&mut emitted),
                    Err(e) => tracing::debug!(error = %e, "error handling event"),
                }
            }
            actions
        });

        let Some(actions) = handled else {
            return false;
        };
        actions.into_iter().all(|action| self.execute_action(action))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: Action) -> bool {
        let service = Arc::clone(&self.service);
        let screen = self.screen.clone();
        let user_id = self.user_id.clone();

        match action {
            Action::Search { query } => {
                self.flows.spawn(async move {
                    flows::run_search(service.as_ref(), &screen, &query).await;
                });
            }
            Action::SearchBarcode { code } => {
                self.flows.spawn(async move {
                    flows::run_barcode_search(service.as_ref(), &screen, &code).await;
                });
            }
            Action::Recognize { image } => {
                self.flows.spawn(async move {
                    flows::run_recognition(service.as_ref(), &screen, &image, &user_id).await;
                });
            }
            Action::LoadHistory => {
                self.flows.spawn(async move {
                    flows::load_history(service.as_ref(), &screen, &user_id).await;
                });
            }
            Action::ShowPrediction { id } => {
                self.flows.spawn(async move {
                    flows::show_prediction(service.as_ref(), &screen, &user_id, &id).await;
                });
            }
            Action::DeletePrediction { id } => {
                self.flows.spawn(async move {
                    flows::delete_history_entry(service.as_ref(), &screen, &user_id, &id).await;
                });
            }
            Action::Quit => {
                tracing::debug!(in_flight = self.flows.len(), "quitting");
                self.flows.abort_all();
                self.screen.dispose();
                return false;
            }
        }
        true
    }

    /// Waits for every flow still in flight, then disposes the screen.
    async fn finish(&mut self) {
        tracing::debug!(in_flight = self.flows.len(), "input closed, draining flows");
        while let Some(joined) = self.flows.join_next().await {
            log_join(joined);
        }
        self.screen.dispose();
    }
}

fn log_join(joined: Result<(), tokio::task::JoinError>) {
    if let Err(e) = joined {
        if !e.is_cancelled() {
            tracing::warn!(error = %e, "flow task failed");
        }
    }
}

/// Prints a frame on every state revision, skipping frames identical to the
/// last one printed, until the screen is disposed.
async fn render_loop(screen: ScreenHandle) {
    let mut revisions = screen.subscribe();
    let mut last = String::new();
    loop {
        let frame = screen.read(|state| nutrisearch::ui::render(state, columns()));
        if frame != last {
            println!("{frame}");
            last = frame;
        }
        if screen.is_disposed() || revisions.changed().await.is_err() {
            break;
        }
    }
}

#[tokio::main]
async fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("nutrisearch: {e}");
            std::process::exit(2);
        }
    };
    nutrisearch::observability::init_tracing(&config);
    tracing::debug!(api_url = %config.api_base_url, "configuration loaded");

    let transport = match HttpTransport::new(&config.api_base_url) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("nutrisearch: {e}");
            std::process::exit(2);
        }
    };

    let mut client = Client::new(
        ScreenHandle::new(nutrisearch::initialize(&config)),
        Arc::new(transport),
        config.user_id.clone(),
    );
    let renderer = tokio::spawn(render_loop(client.screen.clone()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if !client.handle_line(&line) {
                    break;
                }
            }
            Ok(None) => {
                client.finish().await;
                break;
            }
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed");
                client.finish().await;
                break;
            }
        }
    }

    let _ = renderer.await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_search() {
        assert_eq!(parse_command("  greek yogurt "), Command::Search("greek yogurt".to_string()));
        assert_eq!(parse_command("   "), Command::Nothing);
    }

    #[test]
    fn commands_take_arguments() {
        assert_eq!(parse_command(":barcode 737628064502"), Command::Barcode("737628064502".to_string()));
        assert_eq!(parse_command(":photo ~/lunch.jpg"), Command::Photo("~/lunch.jpg".to_string()));
        assert_eq!(parse_command(":open 2"), Command::Open(2));
        assert_eq!(parse_command(":forget  p-42 "), Command::Forget("p-42".to_string()));
        assert_eq!(parse_command(":q"), Command::Quit);
    }

    #[test]
    fn malformed_commands_are_reported() {
        assert!(matches!(parse_command(":open two"), Command::Invalid(_)));
        assert!(matches!(parse_command(":barcode"), Command::Invalid(_)));
        assert!(matches!(parse_command(":close now"), Command::Invalid(_)));
        assert!(matches!(parse_command(":eat"), Command::Invalid(_)));
    }

    #[test]
    fn search_replaces_the_query() {
        let events = events_for(Command::Search("kiwi".to_string())).unwrap();
        assert_eq!(events.first(), Some(&Event::ClearQuery));
        assert_eq!(events.last(), Some(&Event::Submit));
        assert_eq!(events.len(), 6);
    }

    #[test]
    fn missing_photo_is_an_error() {
        assert!(events_for(Command::Photo("/definitely/not/here.jpg".to_string())).is_err());
    }

    #[test]
    fn prediction_command_inspects_one_entry() {
        assert_eq!(parse_command(":prediction p-9"), Command::Inspect("p-9".to_string()));
        assert!(matches!(parse_command(":prediction"), Command::Invalid(_)));
        assert_eq!(
            events_for(Command::Inspect("p-9".to_string())).unwrap(),
            vec![Event::InspectPrediction("p-9".to_string())]
        );
    }

    mod client {
        use super::*;
        use async_trait::async_trait;
        use nutrisearch::domain::{
            ErrorEnvelope, NutritionInfo, NutritionResponse, PredictionDetailResponse,
            PredictionListResponse, RecognitionResponse, ResponseStatus, Result, StatusEnvelope,
        };
        use nutrisearch::{AppState, Phase, Theme};
        use std::time::Duration;

        /// Answers searches after a network-like delay.
        struct SlowService;

        #[async_trait]
        impl NutritionService for SlowService {
            async fn search(&self, query: &str) -> Result<NutritionResponse> {
                tokio::time::sleep(Duration::from_millis(300)).await;
                Ok(NutritionResponse {
                    status: ResponseStatus::Success,
                    message: None,
                    data: Some(NutritionInfo::named(format!("Slow {query}"))),
                    alternatives: vec![],
                })
            }

            async fn search_by_barcode(&self, code: &str) -> Result<NutritionResponse> {
                self.search(code).await
            }

            async fn recognize_image(&self, _: &ImageHandle) -> Result<RecognitionResponse> {
                Ok(RecognitionResponse::from_failure_message("offline".to_string()))
            }

            async fn recognize_and_save_image(
                &self,
                _: &ImageHandle,
                _: &str,
            ) -> Result<RecognitionResponse> {
                Ok(RecognitionResponse::from_failure_message("offline".to_string()))
            }

            async fn user_predictions(&self, _: &str) -> Result<PredictionListResponse> {
                Ok(PredictionListResponse::success(vec![]))
            }

            async fn prediction_details(&self, _: &str, _: &str) -> Result<PredictionDetailResponse> {
                Ok(PredictionDetailResponse::from_failure_message("offline".to_string()))
            }

            async fn delete_prediction(&self, _: &str, _: &str) -> Result<StatusEnvelope> {
                Ok(StatusEnvelope::from_failure_message("offline".to_string()))
            }
        }

        fn client() -> Client {
            let screen = ScreenHandle::new(AppState::new(Theme::default()));
            Client::new(screen, Arc::new(SlowService), "user-1".to_string())
        }

        #[tokio::test(start_paused = true)]
        async fn end_of_input_waits_for_searches_in_flight() {
            let mut client = client();
            let screen = client.screen.clone();
            let renderer = tokio::spawn(render_loop(screen.clone()));

            assert!(client.handle_line("banana"));
            client.finish().await;

            assert!(screen.is_disposed());
            let state = screen.snapshot();
            assert_eq!(state.phase(), Phase::Success);
            assert!(nutrisearch::ui::render(&state, 80).contains("Slow banana"));

            tokio::time::timeout(Duration::from_secs(1), renderer)
                .await
                .unwrap()
                .unwrap();
        }

        #[tokio::test(start_paused = true)]
        async fn quit_leaves_without_waiting() {
            let mut client = client();
            let screen = client.screen.clone();

            assert!(client.handle_line("banana"));
            assert!(!client.handle_line(":quit"));
            assert!(screen.is_disposed());

            tokio::time::sleep(Duration::from_secs(1)).await;
            assert!(screen.snapshot().primary_result.is_none());
        }
    }
}
