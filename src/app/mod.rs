//! Application layer coordinating state, events, flows, and actions.
//!
//! Sits between the runtime (main.rs) and the domain/transport layers.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions
//!                                                           ↓
//!          ScreenHandle ◀── ticketed completion ◀── Flow Controllers ── NutritionService
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`flows`]: Search, barcode, recognition, and prediction history flow controllers
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Screen phase and card addressing
//! - [`screen`]: Shared screen handle with request sequencing
//! - [`state`]: Screen state and view model computation
//!
//! # Example
//!
//! ```rust
//! use nutrisearch::app::{handle_event, AppState, Event};
//! use nutrisearch::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Char('a'))?;
//! assert!(render && actions.is_empty());
//! # Ok::<(), nutrisearch::NutriError>(())
//! ```

pub mod actions;
pub mod flows;
pub mod handler;
pub mod modes;
pub mod screen;
pub mod state;

pub use actions::Action;
pub use flows::{
    delete_history_entry, load_history, run_barcode_search, run_recognition, run_search,
    show_prediction, RECOGNITION_FALLBACK_MESSAGE,
};
pub use handler::{handle_event, Event};
pub use modes::{CardRef, Phase};
pub use screen::{ScreenHandle, Ticket};
pub use state::{AppState, HistoryPanel, SEARCH_FALLBACK_MESSAGE};
