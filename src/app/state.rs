//! Search screen state and view model computation.
//!
//! [`AppState`] is the single source of truth for one screen instance. Flow
//! controllers mutate it through a [`ScreenHandle`](super::ScreenHandle); the
//! event handler mutates it directly for local edits such as typing.
//!
//! # State Components
//!
//! - **Query**: text being typed into the search bar
//! - **Request state**: `loading`, `primary_result`, `alternatives`, `error`
//! - **Notice**: non-blocking informational message (detected label)
//! - **Detail**: which card, if any, is expanded
//! - **History**: stored predictions panel, loaded on demand
//!
//! # Example
//!
//! ```rust
//! use nutrisearch::app::{AppState, Phase};
//! use nutrisearch::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! assert_eq!(state.phase(), Phase::Idle);
//! state.begin_request();
//! assert_eq!(state.phase(), Phase::Loading);
//! ```

use super::modes::{CardRef, Phase};
use crate::domain::{
    Nutrient, NutritionInfo, NutritionResponse, Prediction, PredictionDetailResponse,
    PredictionListResponse, Result,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, CardView, DetailView, EmptyState, FooterInfo, HeaderInfo, HistoryRow, HistoryView,
    ScreenViewModel, SearchBarInfo,
};

/// Fallback shown when a search fails without a message.
pub const SEARCH_FALLBACK_MESSAGE: &str = "Error searching for food";

/// Screen title.
pub const APP_TITLE: &str = "NutriSearch";

/// Prediction history panel contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryPanel {
    pub entries: Vec<Prediction>,
    /// Message from the last history call, set when it failed.
    pub message: Option<String>,
}

/// State of one search screen.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current search bar text.
    pub query: String,

    /// Whether a request chain is in flight.
    pub loading: bool,

    /// Primary match of the last completed request.
    pub primary_result: Option<NutritionInfo>,

    /// Secondary matches of the last completed request, primary excluded.
    pub alternatives: Vec<NutritionInfo>,

    /// Error message of the last completed request.
    pub error: Option<String>,

    /// Informational notice, such as the label detected in a photo.
    pub notice: Option<String>,

    /// Card currently expanded in the detail view.
    pub detail: Option<CardRef>,

    /// Stored predictions panel, when shown.
    pub history: Option<HistoryPanel>,

    /// Whether any request has been started on this screen.
    pub has_run: bool,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            query: String::new(),
            loading: false,
            primary_result: None,
            alternatives: vec![],
            error: None,
            notice: None,
            detail: None,
            history: None,
            has_run: false,
            theme,
        }
    }

    /// Derives the screen phase from the request state.
    ///
    /// Loading wins over everything; an error wins over stale data.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.primary_result.is_some() {
            Phase::Success
        } else if self.has_run {
            Phase::Empty
        } else {
            Phase::Idle
        }
    }

    /// Unconditional reset performed when a search or recognition starts.
    ///
    /// Clears every trace of the previous request so no stale result can be
    /// shown while the new one is in flight.
    pub fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
        self.primary_result = None;
        self.alternatives.clear();
        self.notice = None;
        self.detail = None;
        self.has_run = true;
    }

    /// Clears the loading flag. Every flow path ends here.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Records an error message, leaving results empty.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.primary_result = None;
        self.alternatives.clear();
        self.error = Some(message.into());
    }

    /// Applies the outcome of a search call.
    ///
    /// An error envelope sets the error message (or the generic fallback) and
    /// never populates results, whatever payload it carries. A local fault is
    /// mapped to the same error state.
    pub fn apply_search_outcome(&mut self, outcome: Result<NutritionResponse>) {
        match outcome {
            Ok(response) if response.status.is_error() => {
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| SEARCH_FALLBACK_MESSAGE.to_string());
                self.fail(message);
            }
            Ok(response) => {
                self.alternatives = response.alternatives_excluding_primary();
                self.primary_result = response.data;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "search failed locally");
                self.fail(e.to_string());
            }
        }
    }

    /// Returns the nutrition record behind a card, if it exists.
    #[must_use]
    pub fn card(&self, card: CardRef) -> Option<&NutritionInfo> {
        match card {
            CardRef::Primary => self.primary_result.as_ref(),
            CardRef::Alternative(index) => self.alternatives.get(index),
        }
    }

    /// Expands a card into the detail view.
    ///
    /// Returns `false` (and changes nothing) for a missing card or while a
    /// request is in flight.
    pub fn open_detail(&mut self, card: CardRef) -> bool {
        if self.loading || !self.phase().shows_results() || self.card(card).is_none() {
            return false;
        }
        self.detail = Some(card);
        true
    }

    /// Closes the detail view, then the history panel. Returns whether
    /// anything was closed.
    pub fn close_detail(&mut self) -> bool {
        self.detail.take().is_some() || self.history.take().is_some()
    }

    /// Replaces the history panel with a list envelope.
    pub fn apply_history(&mut self, response: PredictionListResponse) {
        let panel = if response.status.is_error() {
            HistoryPanel {
                entries: vec![],
                message: response.message,
            }
        } else {
            HistoryPanel {
                entries: response.predictions,
                message: None,
            }
        };
        self.history = Some(panel);
    }

    /// Summarizes one stored prediction in the notice.
    pub fn apply_prediction_detail(&mut self, prediction_id: &str, response: PredictionDetailResponse) {
        let notice = match response.prediction {
            Some(p) if !response.status.is_error() => format!(
                "Prediction {}: {} ({}) at {}",
                p.id,
                p.food_class,
                format_confidence(p.confidence),
                p.timestamp
            ),
            _ => response
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("Could not load prediction {prediction_id}")),
        };
        self.notice = Some(notice);
    }

    /// Computes a renderable view model for a terminal `cols` wide.
    #[must_use]
    pub fn compute_viewmodel(&self, cols: usize) -> ScreenViewModel {
        let phase = self.phase();
        let title_width = cols.saturating_sub(8).max(12);

        let body = match phase {
            Phase::Idle => BodyView::Idle(EmptyState {
                message: "Search for a food to see its nutrition facts".to_string(),
                subtitle: "Type a name, scan a barcode with :barcode, or send a photo with :photo"
                    .to_string(),
            }),
            Phase::Loading => BodyView::Loading {
                message: "Searching for nutrition info...".to_string(),
            },
            Phase::Error => BodyView::Error {
                message: self.error.clone().unwrap_or_default(),
            },
            Phase::Success | Phase::Empty => {
                let primary = self
                    .primary_result
                    .as_ref()
                    .map(|item| Self::compute_card(CardRef::Primary, item, title_width));
                let alternatives: Vec<CardView> = self
                    .alternatives
                    .iter()
                    .enumerate()
                    .map(|(i, item)| Self::compute_card(CardRef::Alternative(i), item, title_width))
                    .collect();

                if primary.is_none() && alternatives.is_empty() {
                    BodyView::Empty(EmptyState {
                        message: "No results found".to_string(),
                        subtitle: "Try a different name or a clearer photo".to_string(),
                    })
                } else {
                    BodyView::Results {
                        primary,
                        alternatives,
                    }
                }
            }
        };

        let detail = if phase.shows_results() {
            self.detail
                .and_then(|card| self.card(card))
                .map(Self::compute_detail)
        } else {
            None
        };

        let history = if phase == Phase::Loading {
            None
        } else {
            self.history.as_ref().map(Self::compute_history)
        };

        ScreenViewModel {
            header: HeaderInfo {
                title: format!(" {APP_TITLE} "),
            },
            search_bar: SearchBarInfo {
                query: self.query.clone(),
                placeholder: "Search for food...".to_string(),
            },
            body,
            notice: if phase == Phase::Loading { None } else { self.notice.clone() },
            detail,
            history,
            footer: self.compute_footer(phase),
        }
    }

    fn compute_card(card: CardRef, item: &NutritionInfo, title_width: usize) -> CardView {
        CardView {
            number: card.number(),
            title: truncate(&item.food_name, title_width),
            serving_size: item.serving_size.clone().filter(|s| !s.is_empty()),
            calories: item.card_value(Nutrient::Calories, ""),
            proteins: item.card_value(Nutrient::Proteins, "g"),
            carbohydrates: item.card_value(Nutrient::Carbohydrates, "g"),
        }
    }

    fn compute_detail(item: &NutritionInfo) -> DetailView {
        let rows = |rows: Vec<(&'static str, String)>| {
            rows.into_iter()
                .map(|(label, value)| (label.to_string(), value))
                .collect()
        };
        DetailView {
            title: item.food_name.clone(),
            general: rows(item.detail_rows()),
            nutrients: rows(item.nutrient_rows()),
        }
    }

    fn compute_history(panel: &HistoryPanel) -> HistoryView {
        HistoryView {
            entries: panel
                .entries
                .iter()
                .map(|p| HistoryRow {
                    id: p.id.clone(),
                    food_class: p.food_class.clone(),
                    confidence: format_confidence(p.confidence),
                    timestamp: p.timestamp.clone(),
                })
                .collect(),
            message: panel.message.clone(),
        }
    }

    fn compute_footer(&self, phase: Phase) -> FooterInfo {
        let keybindings = if self.detail.is_some() && phase.shows_results() {
            ":close back  :quit exit"
        } else if phase.shows_results() {
            ":open <n> details  :barcode <code>  :photo <path>  :history  :quit"
        } else {
            "type to search  :barcode <code>  :photo <path>  :history  :quit"
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Formats a confidence score; values in `0..=1` are shown as percentages.
fn format_confidence(confidence: f64) -> String {
    if (0.0..=1.0).contains(&confidence) {
        format!("{:.0}%", confidence * 100.0)
    } else {
        format!("{confidence:.2}")
    }
}

/// Truncates to `max` characters, marking the cut with "...".
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
