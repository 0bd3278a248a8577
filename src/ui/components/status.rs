//! Status renderers: idle hint, progress, error, empty state, and notice.

use crate::ui::helpers::{wrap, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered message with a dimmed subtitle.
pub fn render_empty_state(frame: &mut Frame, empty: &EmptyState, theme: &Theme, cols: usize) {
    frame.newline();
    frame.centered(&theme.colors.empty_state_fg, &empty.message, cols);
    frame.centered(&theme.colors.text_dim, &empty.subtitle, cols);
    frame.newline();
}

/// Renders the progress indicator.
pub fn render_loading(frame: &mut Frame, message: &str, theme: &Theme, cols: usize) {
    frame.newline();
    frame.centered(&theme.colors.notice_fg, &format!("⟳ {message}"), cols);
    frame.newline();
}

/// Renders an inline error message, wrapped to the screen width.
pub fn render_error(frame: &mut Frame, message: &str, theme: &Theme, cols: usize) {
    frame.newline();
    for line in wrap(message, cols.saturating_sub(4)) {
        frame.push("  ");
        frame.paint(&theme.colors.error_fg, &line);
        frame.newline();
    }
    frame.newline();
}

/// Renders the informational notice line.
pub fn render_notice(frame: &mut Frame, notice: &str, theme: &Theme) {
    frame.push("  ");
    frame.paint(&theme.colors.notice_fg, &format!("ℹ {notice}"));
    frame.newline();
}
