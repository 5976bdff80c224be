//! Input Field Component
//!
//! Label, bordered input box, and an optional red error line underneath.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_FOCUS, COLOR_INPUT_BG};

const MASK_CHAR: char = '\u{2022}';
const CURSOR_CHAR: char = '\u{2588}';

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    /// Mask the value (for passwords)
    pub is_password: bool,
    /// Message shown below the input
    pub error: Option<&'a str>,
    /// Shown dimmed while the value is empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_password: false,
            error: None,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Text shown inside the box, before the cursor is added.
    pub fn display_value(&self) -> String {
        if self.is_password {
            std::iter::repeat(MASK_CHAR)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.to_string()
        }
    }
}

/// Rows needed: label (1) + input box (3) + error (1, if present).
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    if config.error.is_some() {
        5
    } else {
        4
    }
}

/// Keep the end of `text` that fits in `width` columns, so the cursor stays visible.
fn tail_fitting(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut kept: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.push(c);
    }
    kept.into_iter().rev().collect()
}

/// Render the field at the top of `area`. Returns the rows consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let inner_x = area.x + 2;
    let inner_width = area.width.saturating_sub(4);
    let mut y_offset = 0;

    let label_style = if config.focused {
        Style::default().fg(COLOR_FOCUS)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label_area = Rect::new(inner_x, area.y + y_offset, inner_width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );
    y_offset += 1;

    let input_area = Rect::new(inner_x, area.y + y_offset, inner_width, 3);
    let border_color = if config.focused {
        COLOR_FOCUS
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let placeholder = config.placeholder.filter(|_| config.value.is_empty());
    let (mut content, text_style) = match placeholder {
        Some(text) => (text.to_string(), Style::default().fg(COLOR_DIM)),
        None if config.focused => (config.display_value(), Style::default().fg(COLOR_FOCUS)),
        None => (config.display_value(), Style::default().fg(COLOR_DIM)),
    };
    if config.focused {
        if placeholder.is_some() {
            content.clear();
        }
        content.push(CURSOR_CHAR);
    }
    let content = tail_fitting(&content, inner_width.saturating_sub(2) as usize);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(content, text_style))).block(block),
        input_area,
    );
    y_offset += 3;

    if let Some(error) = config.error {
        let error_area = Rect::new(inner_x, area.y + y_offset, inner_width, 1);
        let error_style = Style::default().fg(COLOR_ERROR);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("\u{2717} ", error_style),
                Span::styled(error, error_style),
            ])),
            error_area,
        );
        y_offset += 1;
    }

    y_offset
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_field_config_builder() {
        let config = InputFieldConfig::new("Password", "secret")
            .focused(true)
            .password(true)
            .error(Some("Invalid"))
            .placeholder("Enter password");

        assert!(config.focused);
        assert!(config.is_password);
        assert_eq!(config.error, Some("Invalid"));
        assert_eq!(config.placeholder, Some("Enter password"));
    }

    #[test]
    fn test_password_mask_counts_characters() {
        let config = InputFieldConfig::new("Password", "pässw").password(true);
        assert_eq!(config.display_value(), "\u{2022}".repeat(5));
    }

    #[test]
    fn test_calculate_height() {
        let config = InputFieldConfig::new("Label", "Value");
        assert_eq!(calculate_input_field_height(&config), 4);
        let config = config.error(Some("Error message"));
        assert_eq!(calculate_input_field_height(&config), 5);
    }

    #[test]
    fn test_tail_fitting_keeps_end() {
        assert_eq!(tail_fitting("abcdef", 3), "def");
        assert_eq!(tail_fitting("abc", 10), "abc");
        assert_eq!(tail_fitting("abc", 0), "");
    }
}
