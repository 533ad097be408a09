//! City list screen: every saved trip, oldest first.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Paragraph, Row, Table};

use crate::model::Trip;
use crate::route::Route;
use crate::tui::action::Action;
use crate::tui::widgets::draw_message;

/// Shown in place of a list when nothing has been saved yet.
pub const EMPTY_MESSAGE: &str = "Add your first city by clicking on a city on the map";

/// State for the city list screen.
#[derive(Debug, Clone, Default)]
pub struct CityListState {
    /// Index of the highlighted row (0-based).
    selected: usize,
}

impl CityListState {
    /// Creates a new state with the cursor at the first row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a key event against the current trips.
    pub fn handle_key(&mut self, key: KeyEvent, trips: &[Trip]) -> Action {
        self.clamp(trips.len());
        match key.code {
            KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Char('j') => {
                if !trips.is_empty() {
                    self.selected = (self.selected + 1).min(trips.len() - 1);
                }
                Action::None
            }
            KeyCode::Enter => trips
                .get(self.selected)
                .map_or(Action::None, |t| Action::Navigate(Route::City(t.id.clone()))),
            KeyCode::Char('d') => trips
                .get(self.selected)
                .map_or(Action::None, |t| Action::DeleteCity(t.id.clone())),
            _ => Action::None,
        }
    }

    /// Returns the highlighted row index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Highlights the trip with `id`, if present.
    pub fn select_id(&mut self, id: &str, trips: &[Trip]) {
        if let Some(idx) = trips.iter().position(|t| t.id == id) {
            self.selected = idx;
        }
    }

    /// Keeps the cursor on a row after the list shrinks.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// Renders the city list screen.
#[mutants::skip]
pub fn draw_city_list(state: &CityListState, trips: &[Trip], frame: &mut Frame, area: Rect) {
    let [table_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    if trips.is_empty() {
        draw_message(EMPTY_MESSAGE, frame, table_area);
        return;
    }

    let rows: Vec<Row> = trips
        .iter()
        .enumerate()
        .map(|(i, trip)| {
            let style = if i == state.selected() {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(vec![
                trip.emoji.clone(),
                trip.city_name.clone(),
                format!("({})", trip.date.format("%B %-d, %Y")),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(22),
    ];
    let table = Table::new(rows, widths).header(
        Row::new(vec!["", "City", "Visited"]).style(Style::default().add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(table, table_area);

    let footer = Paragraph::new("j/k: select  Enter: open  d: delete")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
