//! Text user interface.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → ScreenViewModel → render → ANSI String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Component renderers
//! - [`helpers`]: Frame buffer and text utilities
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    BodyView, CardView, DetailView, EmptyState, FooterInfo, HeaderInfo, HistoryRow, HistoryView,
    ScreenViewModel, SearchBarInfo,
};
