//! City detail screen for a single saved trip.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::model::{Trip, emoji_to_country_code};
use crate::route::Route;
use crate::tui::action::Action;
use crate::tui::widgets::draw_message;

/// Handles a key event on the detail screen.
pub fn handle_city_detail_key(key: KeyEvent, trip: Option<&Trip>) -> Action {
    match key.code {
        KeyCode::Esc => Action::Navigate(Route::Cities),
        KeyCode::Char('d') => trip.map_or(Action::None, |t| Action::DeleteCity(t.id.clone())),
        _ => Action::None,
    }
}

/// Renders the trip, or a notice when the ID no longer exists.
#[mutants::skip]
pub fn draw_city_detail(trip: Option<&Trip>, frame: &mut Frame, area: Rect) {
    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let footer = Paragraph::new("Esc: back  d: delete").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    let Some(trip) = trip else {
        draw_message("This city is no longer in your list", frame, body_area);
        return;
    };

    let label = Style::default().fg(Color::DarkGray);
    let code = emoji_to_country_code(&trip.emoji)
        .map(|c| format!(" [{c}]"))
        .unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled("City name", label)),
        Line::from(vec![
            Span::raw(format!("{} ", trip.emoji)),
            Span::styled(
                trip.city_name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{code}, {}", trip.country)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("You went to {} on", trip.city_name),
            label,
        )),
        Line::from(trip.date.format("%A, %B %-d, %Y").to_string()),
        Line::from(""),
        Line::from(Span::styled("Your notes", label)),
        Line::from(if trip.notes.is_empty() {
            "-".to_string()
        } else {
            trip.notes.clone()
        }),
        Line::from(""),
        Line::from(Span::styled("Position", label)),
        Line::from(trip.position.to_string()),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        body_area,
    );
}
