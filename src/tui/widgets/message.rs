//! Centered one-line messages: guidance, errors, and the loading spinner.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Renders a waving-hand message centered in `area`.
#[mutants::skip]
pub fn draw_message(message: &str, frame: &mut Frame, area: Rect) {
    draw_centered(
        Line::from(format!("👋 {message}")),
        Style::default().fg(Color::White),
        frame,
        area,
    );
}

/// Renders a loading indicator; `tick` advances the animation.
#[mutants::skip]
pub fn draw_spinner(tick: usize, frame: &mut Frame, area: Rect) {
    let glyph = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
    draw_centered(
        Line::from(format!("{glyph} Loading...")),
        Style::default().fg(Color::Cyan),
        frame,
        area,
    );
}

fn draw_centered(line: Line, style: Style, frame: &mut Frame, area: Rect) {
    let [row] = Layout::vertical([Constraint::Length(2)])
        .flex(Flex::Center)
        .areas(area);
    let paragraph = Paragraph::new(line)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, row);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::render;

    #[test]
    fn message_is_rendered() {
        let output = render(60, 5, |frame| {
            draw_message("Start by clicking somewhere on the map", frame, frame.area());
        });
        assert!(output.contains("Start by clicking somewhere on the map"));
    }

    #[test]
    fn spinner_shows_loading() {
        let output = render(30, 3, |frame| draw_spinner(1, frame, frame.area()));
        assert!(output.contains("/ Loading..."));
    }
}
