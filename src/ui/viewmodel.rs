//! View model types representing renderable screen state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) via
//! `compute_viewmodel()` and consumed by the renderer. They contain no business
//! logic, only display-ready strings.
//!
//! # Example
//!
//! ```rust
//! use nutrisearch::ui::viewmodel::{BodyView, CardView};
//!
//! let body = BodyView::Results {
//!     primary: Some(CardView {
//!         number: 0,
//!         title: "Banana".to_string(),
//!         serving_size: None,
//!         calories: "89".to_string(),
//!         proteins: "1.1g".to_string(),
//!         carbohydrates: "22.8g".to_string(),
//!     }),
//!     alternatives: vec![],
//! };
//! assert!(matches!(body, BodyView::Results { .. }));
//! ```

/// Complete view model for one frame of the search screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Query input line.
    pub search_bar: SearchBarInfo,

    /// Main content area, driven by the screen phase.
    pub body: BodyView,

    /// Transient notice such as the detected food label.
    pub notice: Option<String>,

    /// Open detail view; drawn in place of the body.
    pub detail: Option<DetailView>,

    /// Prediction history panel, when requested.
    pub history: Option<HistoryView>,

    /// Help text.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command help text (e.g., ":open <n>  :quit").
    pub keybindings: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,

    /// Placeholder shown while the query is empty.
    pub placeholder: String,
}

/// Message shown when there is nothing to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No results found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Main content area.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyView {
    /// Nothing searched yet.
    Idle(EmptyState),

    /// A request chain is in flight; nothing else is shown.
    Loading { message: String },

    /// The last request failed.
    Error { message: String },

    /// Result cards; the primary card may be missing when only
    /// alternatives matched.
    Results {
        primary: Option<CardView>,
        alternatives: Vec<CardView>,
    },

    /// The last request finished without error and without any card.
    Empty(EmptyState),
}

/// Summary card for one nutrition record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// On-screen card number used by `:open`.
    pub number: usize,
    pub title: String,
    pub serving_size: Option<String>,
    pub calories: String,
    pub proteins: String,
    pub carbohydrates: String,
}

/// Full detail view for one nutrition record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,

    /// General information rows, already filtered to present values.
    pub general: Vec<(String, String)>,

    /// Nutrient rows, already filtered to present values.
    pub nutrients: Vec<(String, String)>,
}

/// Stored prediction history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryView {
    pub entries: Vec<HistoryRow>,

    /// Error or status message from the last history call.
    pub message: Option<String>,
}

/// One stored prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: String,
    pub food_class: String,
    /// Confidence formatted as a percentage.
    pub confidence: String,
    pub timestamp: String,
}
