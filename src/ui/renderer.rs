//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the view model from [`AppState`], then let
//! the components draw it into a [`Frame`]. The result is a plain `String`;
//! the caller decides where it goes.
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Notice]
//! [Body | Detail]
//! [History]
//! [Border]
//! [Footer]
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, ScreenViewModel};

/// Renders the screen for a terminal `cols` wide.
///
/// # Example
///
/// ```rust
/// use nutrisearch::app::AppState;
/// use nutrisearch::ui::{render, Theme};
///
/// let state = AppState::new(Theme::default());
/// let screen = render(&state, 80);
/// assert!(screen.contains("NutriSearch"));
/// ```
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(cols);
    render_viewmodel(&viewmodel, &state.theme, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &ScreenViewModel, theme: &Theme, cols: usize) -> String {
    let mut frame = Frame::new();

    components::render_header(&mut frame, &vm.header, theme, cols);
    frame.border(&theme.colors.border, cols);
    components::render_search_bar(&mut frame, &vm.search_bar, theme, cols);

    if let Some(notice) = &vm.notice {
        components::render_notice(&mut frame, notice, theme);
    }

    if let Some(detail) = &vm.detail {
        frame.newline();
        components::render_detail(&mut frame, detail, theme, cols);
    } else {
        render_body(&mut frame, &vm.body, theme, cols);
    }

    if let Some(history) = &vm.history {
        components::render_history(&mut frame, history, theme);
    }

    frame.newline();
    frame.border(&theme.colors.border, cols);
    components::render_footer(&mut frame, &vm.footer, theme, cols);

    frame.into_string()
}

fn render_body(frame: &mut Frame, body: &BodyView, theme: &Theme, cols: usize) {
    match body {
        BodyView::Idle(hint) | BodyView::Empty(hint) => {
            components::render_empty_state(frame, hint, theme, cols);
        }
        BodyView::Loading { message } => components::render_loading(frame, message, theme, cols),
        BodyView::Error { message } => components::render_error(frame, message, theme, cols),
        BodyView::Results {
            primary,
            alternatives,
        } => {
            frame.newline();
            components::render_results(frame, primary.as_ref(), alternatives, theme);
        }
    }
}
