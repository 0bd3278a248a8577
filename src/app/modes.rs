//! Screen phase and card addressing types.
//!
//! # State Machine
//!
//! ```text
//!          submit / capture
//!   Idle ─────────────────▶ Loading ──▶ Success | Empty | Error
//!                              ▲                    │
//!                              └── submit / capture ┘
//! ```
//!
//! The phase is never stored; it is derived from [`AppState`](super::AppState)
//! so it cannot drift from the data it describes.

/// Phase of the search screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No search or recognition has been started on this screen.
    Idle,
    /// A request chain is in flight.
    Loading,
    /// A primary result is available.
    Success,
    /// The last request finished without error and without a primary result.
    Empty,
    /// The last request finished with an error message.
    Error,
}

impl Phase {
    /// Whether result cards may be shown in this phase.
    #[must_use]
    pub const fn shows_results(self) -> bool {
        matches!(self, Self::Success | Self::Empty)
    }
}

/// Address of a result card on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRef {
    /// The primary match.
    Primary,
    /// An alternative, zero-based.
    Alternative(usize),
}

impl CardRef {
    /// Parses the on-screen card number: `0` is the primary card and `n`
    /// addresses the n-th alternative.
    #[must_use]
    pub const fn from_number(number: usize) -> Self {
        if number == 0 {
            Self::Primary
        } else {
            Self::Alternative(number - 1)
        }
    }

    /// The on-screen card number.
    #[must_use]
    pub const fn number(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Alternative(index) => index + 1,
        }
    }
}
