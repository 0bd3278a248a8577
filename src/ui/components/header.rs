//! Header component renderer.

use crate::ui::helpers::{width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar, centered and padded to the full width.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding]
/// ```
///
/// If the width cannot be split evenly, the right padding is larger.
pub fn render_header(frame: &mut Frame, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let title_len = width(&header.title);
    let padding = cols.saturating_sub(title_len) / 2;

    frame.push(Theme::bold());
    if let Some(bg) = &theme.colors.header_bg {
        frame.push(&Theme::bg(bg));
    }
    frame.paint(
        &theme.colors.header_fg,
        &format!(
            "{}{}{}",
            " ".repeat(padding),
            header.title,
            " ".repeat(cols.saturating_sub(padding + title_len))
        ),
    );
    frame.newline();
}
