//! Prediction history renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HistoryView;

/// Renders stored predictions, newest as delivered by the service.
pub fn render_history(frame: &mut Frame, history: &HistoryView, theme: &Theme) {
    frame.newline();
    frame.push("  ");
    frame.paint_bold(&theme.colors.accent, "History");
    frame.newline();

    if let Some(message) = &history.message {
        frame.push("    ");
        frame.paint(&theme.colors.error_fg, message);
        frame.newline();
        return;
    }

    if history.entries.is_empty() {
        frame.push("    ");
        frame.paint(&theme.colors.text_dim, "No stored predictions");
        frame.newline();
        return;
    }

    for row in &history.entries {
        frame.push("    ");
        frame.paint(&theme.colors.text_normal, &format!("{:<20}", row.food_class));
        frame.paint(&theme.colors.text_dim, &format!("{:>5}  {}  ", row.confidence, row.timestamp));
        frame.paint(&theme.colors.text_dim, &row.id);
        frame.newline();
    }
}
