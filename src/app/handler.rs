//! Event handling and state transition logic.
//!
//! [`handle_event`] applies local edits (typing, opening a card) directly to
//! [`AppState`] and turns everything that needs the network into an
//! [`Action`]. It never performs I/O.
//!
//! # Event Types
//!
//! - **Input**: `Char`, `Backspace`, `ClearQuery`
//! - **Requests**: `Submit`, `SubmitBarcode`, `ImageCaptured`
//! - **Views**: `OpenDetail`, `CloseDetail`, `DismissNotice`, `ShowHistory`
//! - **History**: `InspectPrediction`, `ForgetPrediction`
//! - **System**: `Quit`
//!
//! # Example
//!
//! ```rust
//! use nutrisearch::app::{handle_event, Action, AppState, Event};
//! use nutrisearch::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! for c in "kiwi".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert_eq!(actions, vec![Action::Search { query: "kiwi".to_string() }]);
//! # Ok::<(), nutrisearch::NutriError>(())
//! ```

use super::modes::CardRef;
use crate::app::{Action, AppState};
use crate::domain::{ImageHandle, Result};

/// User input delivered to the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Empties the query.
    ClearQuery,
    /// Searches for the current query.
    Submit,
    /// Looks up a barcode, typically delivered by a scanner.
    SubmitBarcode(String),
    /// A photo was captured and is ready for recognition.
    ImageCaptured(ImageHandle),
    /// Expands a result card.
    OpenDetail(CardRef),
    /// Closes the detail view, or the history panel if no detail is open.
    CloseDetail,
    /// Hides the informational notice.
    DismissNotice,
    /// Shows the stored prediction history.
    ShowHistory,
    /// Shows one stored prediction by id.
    InspectPrediction(String),
    /// Deletes a stored prediction by id.
    ForgetPrediction(String),
    /// Leaves the screen.
    Quit,
}

/// Processes an event, mutates state, and returns the actions to execute.
///
/// # Returns
///
/// `(render, actions)`: whether the state changed in a way that needs a
/// redraw, and the side effects to run in order. Request actions do not ask
/// for a redraw because starting the request publishes its own.
///
/// # Errors
///
/// None of the current events fail; the `Result` keeps the signature stable
/// for handlers that validate input.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            state.query.push(*c);
            tracing::trace!(query = %state.query, char = %c, "query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => Ok((state.query.pop().is_some(), vec![])),
        Event::ClearQuery => {
            let changed = !state.query.is_empty();
            state.query.clear();
            Ok((changed, vec![]))
        }
        Event::Submit => {
            let query = state.query.trim();
            if query.is_empty() {
                tracing::debug!("blank query not submitted");
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::Search { query: query.to_string() }]))
        }
        Event::SubmitBarcode(code) => {
            let code = code.trim();
            if code.is_empty() {
                tracing::debug!("blank barcode not submitted");
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::SearchBarcode { code: code.to_string() }]))
        }
        Event::ImageCaptured(image) => {
            tracing::debug!(image = ?image, "photo captured");
            Ok((false, vec![Action::Recognize { image: image.clone() }]))
        }
        Event::OpenDetail(card) => {
            let opened = state.open_detail(*card);
            if !opened {
                tracing::debug!(card = ?card, phase = ?state.phase(), "detail unavailable");
            }
            Ok((opened, vec![]))
        }
        Event::CloseDetail => Ok((state.close_detail(), vec![])),
        Event::DismissNotice => Ok((state.notice.take().is_some(), vec![])),
        Event::ShowHistory => Ok((false, vec![Action::LoadHistory])),
        Event::InspectPrediction(id) => {
            let id = id.trim();
            if id.is_empty() {
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::ShowPrediction { id: id.to_string() }]))
        }
        Event::ForgetPrediction(id) => {
            let id = id.trim();
            if id.is_empty() {
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::DeletePrediction { id: id.to_string() }]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NutritionInfo;
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(Theme::default())
    }

    fn handle(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn typing_edits_the_query() {
        let mut s = state();
        for c in "pea".chars() {
            assert_eq!(handle(&mut s, Event::Char(c)), (true, vec![]));
        }
        assert_eq!(handle(&mut s, Event::Backspace), (true, vec![]));
        assert_eq!(s.query, "pe");

        assert_eq!(handle(&mut s, Event::ClearQuery), (true, vec![]));
        assert_eq!(handle(&mut s, Event::Backspace), (false, vec![]));
        assert_eq!(handle(&mut s, Event::ClearQuery), (false, vec![]));
    }

    #[test]
    fn submit_trims_and_skips_blank_queries() {
        let mut s = state();
        s.query = "   ".to_string();
        assert_eq!(handle(&mut s, Event::Submit), (false, vec![]));

        s.query = "  green apple ".to_string();
        assert_eq!(
            handle(&mut s, Event::Submit).1,
            vec![Action::Search { query: "green apple".to_string() }]
        );
        assert_eq!(s.query, "  green apple ");
    }

    #[test]
    fn barcode_and_photo_become_actions() {
        let mut s = state();
        assert_eq!(handle(&mut s, Event::SubmitBarcode(" ".to_string())).1, vec![]);
        assert_eq!(
            handle(&mut s, Event::SubmitBarcode(" 123 ".to_string())).1,
            vec![Action::SearchBarcode { code: "123".to_string() }]
        );

        let image = ImageHandle::with_file_name(vec![1, 2, 3], "photo.jpg").unwrap();
        assert_eq!(
            handle(&mut s, Event::ImageCaptured(image.clone())).1,
            vec![Action::Recognize { image }]
        );
    }

    #[test]
    fn detail_opens_only_for_existing_cards() {
        let mut s = state();
        assert_eq!(handle(&mut s, Event::OpenDetail(CardRef::Primary)), (false, vec![]));

        s.has_run = true;
        s.primary_result = Some(NutritionInfo::named("Banana"));
        assert_eq!(handle(&mut s, Event::OpenDetail(CardRef::Alternative(0))), (false, vec![]));
        assert_eq!(handle(&mut s, Event::OpenDetail(CardRef::Primary)), (true, vec![]));
        assert_eq!(handle(&mut s, Event::CloseDetail), (true, vec![]));
        assert_eq!(handle(&mut s, Event::CloseDetail), (false, vec![]));
    }

    #[test]
    fn detail_is_unavailable_while_loading() {
        let mut s = state();
        s.primary_result = Some(NutritionInfo::named("Banana"));
        s.begin_request();
        assert_eq!(handle(&mut s, Event::OpenDetail(CardRef::Primary)), (false, vec![]));
        assert!(s.detail.is_none());
    }

    #[test]
    fn notice_history_and_quit() {
        let mut s = state();
        s.notice = Some("Detected: apple".to_string());
        assert_eq!(handle(&mut s, Event::DismissNotice), (true, vec![]));
        assert_eq!(handle(&mut s, Event::DismissNotice), (false, vec![]));

        assert_eq!(handle(&mut s, Event::ShowHistory).1, vec![Action::LoadHistory]);
        assert_eq!(
            handle(&mut s, Event::ForgetPrediction(" p-1 ".to_string())).1,
            vec![Action::DeletePrediction { id: "p-1".to_string() }]
        );
        assert_eq!(handle(&mut s, Event::ForgetPrediction(String::new())).1, vec![]);
        assert_eq!(
            handle(&mut s, Event::InspectPrediction("p-7 ".to_string())).1,
            vec![Action::ShowPrediction { id: "p-7".to_string() }]
        );
        assert_eq!(handle(&mut s, Event::InspectPrediction(" ".to_string())).1, vec![]);
        assert_eq!(handle(&mut s, Event::Quit).1, vec![Action::Quit]);
    }
}
