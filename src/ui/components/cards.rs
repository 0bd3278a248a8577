//! Result card renderers.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardView;

/// Title of the primary result section.
pub const RESULT_SECTION: &str = "Result";

/// Title of the alternatives section.
pub const ALTERNATIVES_SECTION: &str = "Alternatives";

/// Renders the primary card and, when there are any, the alternatives.
///
/// # Layout
///
/// ```text
///   Result
///   [0] Banana                      100 g
///       Calories: 89  Proteins: 1.1g  Carbs: 22.8g
///
///   Alternatives
///   [1] Plantain
///       Calories: N/A  Proteins: N/A  Carbs: N/A
/// ```
pub fn render_results(
    frame: &mut Frame,
    primary: Option<&CardView>,
    alternatives: &[CardView],
    theme: &Theme,
) {
    if let Some(card) = primary {
        render_section_title(frame, RESULT_SECTION, theme);
        render_card(frame, card, theme);
    }

    if !alternatives.is_empty() {
        if primary.is_some() {
            frame.newline();
        }
        render_section_title(frame, ALTERNATIVES_SECTION, theme);
        for card in alternatives {
            render_card(frame, card, theme);
        }
    }
}

fn render_section_title(frame: &mut Frame, title: &str, theme: &Theme) {
    frame.push("  ");
    frame.paint_bold(&theme.colors.accent, title);
    frame.newline();
}

fn render_card(frame: &mut Frame, card: &CardView, theme: &Theme) {
    frame.push("  ");
    frame.paint(&theme.colors.text_dim, &format!("[{}] ", card.number));
    frame.paint_bold(&theme.colors.text_normal, &card.title);
    if let Some(serving) = &card.serving_size {
        frame.push("  ");
        frame.paint(&theme.colors.text_dim, serving);
    }
    frame.newline();

    frame.push("      ");
    for (label, value) in [
        ("Calories", &card.calories),
        ("Proteins", &card.proteins),
        ("Carbs", &card.carbohydrates),
    ] {
        frame.paint(&theme.colors.text_dim, &format!("{label}: "));
        frame.paint(&theme.colors.text_normal, value);
        frame.push("  ");
    }
    frame.newline();
}
