//! Reusable form widget for text input screens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown in the field border.
    pub label: String,
    /// Current text value.
    pub value: String,
    /// Dimmed text shown while the value is empty.
    pub hint: String,
    /// Validation error message, if any.
    pub error: Option<String>,
}

impl FormField {
    /// Creates a new empty field.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            hint: String::new(),
            error: None,
        }
    }

    /// Sets the hint shown while the field is empty.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }
}

/// A multi-field text form with focus management.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a new form with the given fields. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Returns the index of the currently focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to `index`; out-of-range indices are ignored.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
        }
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Appends a character to the focused field.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(ch);
        }
    }

    /// Deletes the last character from the focused field.
    pub fn delete_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    /// Replaces the value of the field at `index`.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    /// Returns the value of the field at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Sets an error message on a field by index.
    pub fn set_error(&mut self, index: usize, error: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = Some(error);
        }
    }

    /// Clears all field errors.
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Height of one bordered field row.
const ROW_HEIGHT: u16 = 3;

/// Returns the height needed to draw `form`.
pub fn form_height(form: &Form) -> u16 {
    ROW_HEIGHT * form.fields.len() as u16
}

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let constraints = form.fields.iter().map(|_| Constraint::Length(ROW_HEIGHT));
    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = i == form.focus;

        let border_color = match (&field.error, is_focused) {
            (Some(_), _) => Color::Red,
            (None, true) => Color::Yellow,
            (None, false) => Color::DarkGray,
        };

        let mut block = Block::default()
            .title(field.label.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        if let Some(err) = &field.error {
            block = block.title_bottom(Line::styled(
                err.as_str(),
                Style::default().fg(Color::Red),
            ));
        }

        let mut spans = if field.value.is_empty() && !field.hint.is_empty() {
            vec![Span::styled(
                field.hint.as_str(),
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            vec![Span::raw(field.value.as_str())]
        };
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), rows[i]);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn make_form() -> Form {
        Form::new(vec![
            FormField::new("City name"),
            FormField::new("Date").with_hint("dd/mm/yyyy"),
            FormField::new("Notes"),
        ])
    }

    // --- Focus management ---

    #[test]
    fn focus_starts_at_zero() {
        assert_eq!(make_form().focus(), 0);
    }

    #[test]
    fn focus_next_wraps() {
        let mut form = make_form();
        form.focus_next();
        assert_eq!(form.focus(), 1);
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn focus_prev_wraps() {
        let mut form = make_form();
        form.focus_prev();
        assert_eq!(form.focus(), 2);
    }

    #[test]
    fn focus_moves_are_noops_on_empty_form() {
        let mut form = Form::new(vec![]);
        form.focus_next();
        form.focus_prev();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn set_focus_ignores_out_of_range() {
        let mut form = make_form();
        form.set_focus(2);
        assert_eq!(form.focus(), 2);
        form.set_focus(7);
        assert_eq!(form.focus(), 2);
    }

    // --- Editing ---

    #[test]
    fn insert_char_appends_to_focused() {
        let mut form = make_form();
        form.focus_next();
        form.insert_char('1');
        form.insert_char('6');
        assert_eq!(form.value(0), "");
        assert_eq!(form.value(1), "16");
    }

    #[test]
    fn delete_char_handles_multibyte() {
        let mut form = make_form();
        form.set_value(0, "Malmö");
        form.delete_char();
        assert_eq!(form.value(0), "Malm");
    }

    #[test]
    fn delete_char_on_empty_is_noop() {
        let mut form = make_form();
        form.delete_char();
        assert_eq!(form.value(0), "");
    }

    #[test]
    fn set_value_out_of_bounds_is_noop() {
        let mut form = make_form();
        form.set_value(9, "x");
        assert_eq!(form.value(9), "");
    }

    // --- Errors ---

    #[test]
    fn set_and_clear_errors() {
        let mut form = make_form();
        assert!(!form.has_errors());
        form.set_error(1, "bad date".into());
        assert!(form.has_errors());
        assert_eq!(form.fields()[1].error.as_deref(), Some("bad date"));
        form.clear_errors();
        assert!(!form.has_errors());
    }

    #[test]
    fn set_error_out_of_bounds_is_noop() {
        let mut form = make_form();
        form.set_error(99, "nope".into());
        assert!(!form.has_errors());
    }

    // --- Rendering ---

    #[test]
    fn draws_labels_hint_and_error() {
        let mut form = make_form();
        form.set_value(0, "Lisbon");
        form.set_error(2, "too long".into());

        let mut terminal = Terminal::new(TestBackend::new(30, form_height(&form))).unwrap();
        terminal
            .draw(|frame| draw_form(&form, frame, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height)
            .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
            .map(|(x, y)| buffer[(x, y)].symbol().to_string())
            .collect();

        assert!(text.contains("City name"));
        assert!(text.contains("Lisbon"));
        assert!(text.contains("dd/mm/yyyy"));
        assert!(text.contains("too long"));
    }
}
