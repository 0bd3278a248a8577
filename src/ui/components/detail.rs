//! Detail view renderer.

use crate::ui::helpers::{wrap, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Width reserved for row labels.
const LABEL_WIDTH: usize = 14;

/// Renders every known field of one record, general information first and
/// nutrients second. Sections without rows are skipped.
pub fn render_detail(frame: &mut Frame, detail: &DetailView, theme: &Theme, cols: usize) {
    frame.push("  ");
    frame.paint_bold(&theme.colors.accent, &detail.title);
    frame.newline();

    render_rows(frame, "General Information", &detail.general, theme, cols);
    render_rows(frame, "Nutrition Facts", &detail.nutrients, theme, cols);
}

fn render_rows(frame: &mut Frame, title: &str, rows: &[(String, String)], theme: &Theme, cols: usize) {
    if rows.is_empty() {
        return;
    }
    frame.newline();
    frame.push("  ");
    frame.paint_bold(&theme.colors.text_normal, title);
    frame.newline();

    let value_width = cols.saturating_sub(LABEL_WIDTH + 6);
    for (label, value) in rows {
        for (i, line) in wrap(value, value_width).iter().enumerate() {
            let label = if i == 0 { label.as_str() } else { "" };
            frame.push("    ");
            frame.paint(&theme.colors.text_dim, &format!("{label:<width$}", width = LABEL_WIDTH));
            frame.paint(&theme.colors.text_normal, line);
            frame.newline();
        }
    }
}
