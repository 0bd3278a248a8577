//! Search bar component renderer.

use crate::ui::helpers::{width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the search input box.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Search: banana   │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// The placeholder is drawn dimmed while the query is empty.
pub fn render_search_bar(frame: &mut Frame, search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = &theme.colors.search_bar_border;

    frame.push(&margin);
    frame.paint(border, &format!("┌{}┐", "─".repeat(inner_width)));
    frame.newline();

    let (text, color) = if search.query.is_empty() {
        (format!(" {}", search.placeholder), &theme.colors.text_dim)
    } else {
        (format!(" Search: {}", search.query), &theme.colors.text_normal)
    };
    let padding = inner_width.saturating_sub(width(&text));

    frame.push(&margin);
    frame.paint(border, "│");
    frame.paint(color, &text);
    frame.push(&" ".repeat(padding));
    frame.paint(border, "│");
    frame.newline();

    frame.push(&margin);
    frame.paint(border, &format!("└{}┘", "─".repeat(inner_width)));
    frame.newline();
}
