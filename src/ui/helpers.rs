//! Shared rendering utilities.
//!
//! Components draw into a [`Frame`], an in-memory buffer of ANSI-styled lines,
//! so a whole screen can be produced, inspected in tests, and printed in one
//! write.
//!
//! # Example
//!
//! ```rust
//! use nutrisearch::ui::helpers::Frame;
//!
//! let mut frame = Frame::new();
//! frame.paint("#2f855a", "Result");
//! frame.newline();
//! assert!(frame.as_str().contains("Result"));
//! ```

use crate::ui::theme::Theme;

/// Buffer a screen is drawn into.
#[derive(Debug, Default)]
pub struct Frame {
    buf: String,
}

impl Frame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unstyled text.
    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Appends text in a foreground color, then resets styling.
    pub fn paint(&mut self, color: &str, text: &str) {
        self.buf.push_str(&Theme::fg(color));
        self.buf.push_str(text);
        self.buf.push_str(Theme::reset());
    }

    /// Appends bold text in a foreground color.
    pub fn paint_bold(&mut self, color: &str, text: &str) {
        self.buf.push_str(Theme::bold());
        self.paint(color, text);
    }

    pub fn newline(&mut self) {
        self.buf.push('\n');
    }

    /// Draws a full-width horizontal rule.
    pub fn border(&mut self, color: &str, cols: usize) {
        self.paint(color, &"─".repeat(cols));
        self.newline();
    }

    /// Draws one line of text centered in `cols`.
    pub fn centered(&mut self, color: &str, text: &str, cols: usize) {
        let padding = cols.saturating_sub(width(text)) / 2;
        self.push(&" ".repeat(padding));
        self.paint(color, text);
        self.newline();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Display width of `text`, counted in characters.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Greedy word wrap to lines of at most `max` characters.
///
/// Words longer than `max` are split. Always returns at least one line.
#[must_use]
pub fn wrap(text: &str, max: usize) -> Vec<String> {
    let max = max.max(1);
    let mut lines: Vec<String> = vec![];
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current.is_empty() { word.len() } else { width(&current) + 1 + word.len() };
        if needed > max && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap("sugar, cocoa butter, milk powder", 14),
            ["sugar, cocoa", "butter, milk", "powder"]
        );
        assert_eq!(wrap("", 10), [""]);
    }

    #[test]
    fn splits_overlong_words() {
        assert_eq!(wrap("abcdefghij xy", 4), ["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn centered_lines_are_padded() {
        let mut frame = Frame::new();
        frame.centered("#000000", "hi", 10);
        assert!(frame.as_str().starts_with("    \u{1b}[38;2;0;0;0mhi"));
        assert!(frame.as_str().ends_with('\n'));
    }
}
