//! User panel widget: who is logged in and how far they have travelled.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Data shown in the user panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPanelContext {
    /// Display name from configuration.
    pub user_name: String,
    /// Number of saved trips.
    pub trip_count: usize,
    /// Number of distinct countries among saved trips.
    pub country_count: usize,
}

/// Renders the user panel, clearing whatever is drawn beneath it.
///
/// Display format: `Welcome, Ada` on the first line and
/// `3 cities · 2 countries` on the second.
#[mutants::skip]
pub fn draw_user_panel(ctx: &UserPanelContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let grey = Style::default().fg(Color::DarkGray);

    let cities = match ctx.trip_count {
        1 => "1 city".to_string(),
        n => format!("{n} cities"),
    };
    let countries = match ctx.country_count {
        1 => "1 country".to_string(),
        n => format!("{n} countries"),
    };

    let lines = vec![
        Line::from(Span::styled(format!("Welcome, {}", ctx.user_name), cyan)),
        Line::from(Span::styled(format!("{cities} · {countries}"), grey)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
