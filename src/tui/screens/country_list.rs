//! Country list screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Row, Table};

use super::city_list::EMPTY_MESSAGE;
use crate::model::{Trip, summarize_countries};
use crate::tui::widgets::draw_message;

/// Renders one row per visited country with its trip count.
#[mutants::skip]
pub fn draw_country_list(trips: &[Trip], frame: &mut Frame, area: Rect) {
    let summaries = summarize_countries(trips);
    if summaries.is_empty() {
        draw_message(EMPTY_MESSAGE, frame, area);
        return;
    }

    let rows: Vec<Row> = summaries
        .iter()
        .map(|s| {
            let visits = match s.trips {
                1 => "1 trip".to_string(),
                n => format!("{n} trips"),
            };
            Row::new(vec![s.emoji.clone(), s.country.clone(), visits])
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(9),
    ];
    let table = Table::new(rows, widths).header(
        Row::new(vec!["", "Country", "Trips"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(table, area);
}
