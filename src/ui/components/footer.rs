//! Footer component renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the command hints, centered and dimmed.
pub fn render_footer(frame: &mut Frame, footer: &FooterInfo, theme: &Theme, cols: usize) {
    frame.push(Theme::dim());
    frame.centered(&theme.colors.text_dim, &footer.keybindings, cols);
}
