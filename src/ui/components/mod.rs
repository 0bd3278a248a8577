//! Composable UI component renderers.
//!
//! Each component draws one part of the screen into a
//! [`Frame`](crate::ui::helpers::Frame).
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`search`]: Search input box
//! - [`status`]: Idle hint, progress, error, empty state, notice
//! - [`cards`]: Result and alternatives sections
//! - [`detail`]: Full record view
//! - [`history`]: Stored predictions
//! - [`footer`]: Command hints

pub mod cards;
pub mod detail;
pub mod footer;
pub mod header;
pub mod history;
pub mod search;
pub mod status;

pub use cards::{render_results, ALTERNATIVES_SECTION, RESULT_SECTION};
pub use detail::render_detail;
pub use footer::render_footer;
pub use header::render_header;
pub use history::render_history;
pub use search::render_search_bar;
pub use status::{render_empty_state, render_error, render_loading, render_notice};
