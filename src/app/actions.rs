//! Side effects requested by the event handler.
//!
//! The handler never talks to the network. It returns [`Action`]s and the
//! runtime (the binary) executes each one by spawning the matching flow from
//! [`flows`](super::flows).
//!
//! # Example
//!
//! ```rust
//! use nutrisearch::app::Action;
//!
//! let actions = vec![Action::Search { query: "banana".to_string() }];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::domain::ImageHandle;

/// Commands executed by the runtime after an event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Runs a text search. The query is trimmed and non-empty.
    Search { query: String },

    /// Runs a barcode lookup. The code is trimmed and non-empty.
    SearchBarcode { code: String },

    /// Recognizes a captured photo and searches for the detected label.
    Recognize { image: ImageHandle },

    /// Loads the user's stored predictions.
    LoadHistory,

    /// Fetches one stored prediction and shows it as a notice.
    ShowPrediction { id: String },

    /// Deletes one stored prediction, then reloads the history.
    DeletePrediction { id: String },

    /// Disposes the screen and exits.
    Quit,
}
