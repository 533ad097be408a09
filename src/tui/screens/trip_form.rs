//! Trip entry form: turns a picked map position into a saved trip.
//!
//! The form is a small state machine over [`GeocodeStatus`]. Every new
//! position bumps a generation counter and yields a [`LookupRequest`]; lookup
//! results carry the generation they were issued for, and results from an
//! older generation are dropped.

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, warn};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::geocode::{GeocodeError, Place};
use crate::model::{
    Position, Trip, emoji_to_country_code, format_trip_date, parse_trip_date, validate_city_name,
};
use crate::route::{CITIES_PATH, Navigator, Route};
use crate::storage::{CityStore, StorageError};
use crate::tui::action::Action;
use crate::tui::widgets::{Form, FormField, draw_form, draw_message, draw_spinner, form_height};

/// Field index for the city name.
const CITY_NAME: usize = 0;
/// Field index for the visit date.
const DATE: usize = 1;
/// Field index for free-text notes.
const NOTES: usize = 2;

/// Guidance shown until a position has been picked.
pub const NO_POSITION_MESSAGE: &str = "Start by clicking somewhere on the map";

/// Where the form is in the pick → lookup → edit flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodeStatus {
    /// No position picked yet.
    NoPosition,
    /// A lookup for the current position is in flight.
    Loading,
    /// The lookup found a country; the form is editable.
    Ready,
    /// The lookup failed or found no country.
    Error(String),
}

/// A lookup the app should run on the form's behalf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookupRequest {
    pub generation: u64,
    pub position: Position,
}

/// State for the trip entry form.
#[derive(Debug, Clone)]
pub struct TripFormState {
    form: Form,
    position: Option<Position>,
    generation: u64,
    status: GeocodeStatus,
    country: String,
    emoji: String,
    today: NaiveDate,
    submit_error: Option<String>,
}

impl Default for TripFormState {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl TripFormState {
    /// Creates an empty form whose date defaults to `today`.
    pub fn new(today: NaiveDate) -> Self {
        let mut form = Form::new(vec![
            FormField::new("City name"),
            FormField::new("When did you go?").with_hint("dd/mm/yyyy"),
            FormField::new("Notes about your trip"),
        ]);
        form.set_value(DATE, format_trip_date(today));

        Self {
            form,
            position: None,
            generation: 0,
            status: GeocodeStatus::NoPosition,
            country: String::new(),
            emoji: String::new(),
            today,
            submit_error: None,
        }
    }

    /// Points the form at a new position.
    ///
    /// Returns the lookup to run when the position changed to `Some`. The same
    /// position again is a no-op; `None` returns the form to
    /// [`GeocodeStatus::NoPosition`].
    pub fn set_position(&mut self, position: Option<Position>) -> Option<LookupRequest> {
        if position == self.position {
            return None;
        }
        self.position = position;
        self.generation += 1;
        self.submit_error = None;
        self.form.clear_errors();

        match position {
            None => {
                self.status = GeocodeStatus::NoPosition;
                None
            }
            Some(position) => {
                self.status = GeocodeStatus::Loading;
                Some(LookupRequest {
                    generation: self.generation,
                    position,
                })
            }
        }
    }

    /// Applies a finished lookup.
    ///
    /// Returns `false` (and changes nothing) when the result belongs to an
    /// older position.
    pub fn apply_lookup(&mut self, generation: u64, result: Result<Place, GeocodeError>) -> bool {
        if generation != self.generation || self.status != GeocodeStatus::Loading {
            debug!(
                "Discarding lookup for generation {generation}; current is {}",
                self.generation
            );
            return false;
        }

        match result {
            Ok(place) => {
                self.emoji = place.emoji();
                self.form.set_value(CITY_NAME, place.city_name);
                self.country = place.country;
                self.form.set_focus(CITY_NAME);
                self.status = GeocodeStatus::Ready;
            }
            Err(e) => {
                warn!("Reverse geocoding failed: {e}");
                self.status = GeocodeStatus::Error(e.to_string());
            }
        }
        true
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    ///
    /// Only Esc is accepted until the lookup has succeeded.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Esc {
            return Action::Navigate(Route::Cities);
        }
        if self.status != GeocodeStatus::Ready {
            return Action::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.insert_char(ch);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Records a failed save so the user can retry.
    pub fn set_submit_error(&mut self, msg: String) {
        if self.status == GeocodeStatus::Ready {
            self.submit_error = Some(msg);
        }
    }

    /// Discards the draft. The next position, even a repeated one, starts a
    /// fresh lookup.
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self::new(self.today);
        self.generation = generation;
    }

    /// Returns the lookup status.
    pub fn status(&self) -> &GeocodeStatus {
        &self.status
    }

    /// Returns the position the form is editing a trip for.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Returns the current generation counter.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the country from the last successful lookup.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns the flag for the country from the last successful lookup.
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the last save error, if any.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Validates the draft and builds a trip.
    ///
    /// Invalid fields get an error message and no action is returned.
    fn submit(&mut self) -> Action {
        self.form.clear_errors();
        self.submit_error = None;

        let Some(position) = self.position else {
            return Action::None;
        };

        let city_name = self.form.value(CITY_NAME).to_string();
        if let Err(e) = validate_city_name(&city_name) {
            self.form.set_error(CITY_NAME, e.to_string());
        }
        let date = parse_trip_date(self.form.value(DATE));
        if let Err(ref e) = date {
            self.form.set_error(DATE, e.to_string());
        }

        let Ok(date) = date else {
            return Action::None;
        };
        if self.form.has_errors() {
            return Action::None;
        }

        match Trip::new(
            city_name,
            self.country.clone(),
            self.emoji.clone(),
            date,
            self.form.value(NOTES).to_string(),
            position,
        ) {
            Ok(trip) => Action::AddCity(trip),
            Err(e) => {
                self.form.set_error(CITY_NAME, e.to_string());
                Action::None
            }
        }
    }
}

/// Saves `trip` and, once the store has accepted it, returns to the trip list.
///
/// On failure nothing is navigated and the store error is returned.
pub async fn submit_trip(
    trip: Trip,
    store: &dyn CityStore,
    navigator: &dyn Navigator,
) -> Result<(), StorageError> {
    store.add_city(trip).await?;
    navigator.go_to(CITIES_PATH);
    Ok(())
}

/// Renders the trip entry form for its current status.
///
/// `busy` dims the form while a save is in flight.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_trip_form(
    state: &TripFormState,
    busy: bool,
    tick: usize,
    frame: &mut Frame,
    area: Rect,
) {
    let (title, border) = if busy {
        (" New trip (saving…) ", Color::DarkGray)
    } else {
        (" New trip ", Color::Cyan)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match state.status() {
        GeocodeStatus::NoPosition => draw_message(NO_POSITION_MESSAGE, frame, inner),
        GeocodeStatus::Loading => draw_spinner(tick, frame, inner),
        GeocodeStatus::Error(msg) => draw_message(msg, frame, inner),
        GeocodeStatus::Ready => {
            let [header_area, form_area, error_area, footer_area] = Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(form_height(state.form())),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .areas(inner);

            let code = emoji_to_country_code(state.emoji())
                .map(|c| format!("[{c}] "))
                .unwrap_or_default();
            let city = state.form().value(CITY_NAME);
            let header = vec![
                Line::from(vec![
                    Span::raw(format!("{} ", state.emoji())),
                    Span::styled(
                        format!("{code}{}", state.country()),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    if city.is_empty() {
                        "Where exactly were you?".to_string()
                    } else {
                        format!("Your trip to {city}")
                    },
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            frame.render_widget(Paragraph::new(header), header_area);

            draw_form(state.form(), frame, form_area);

            if let Some(err) = state.submit_error() {
                frame.render_widget(
                    Paragraph::new(Span::styled(err, Style::default().fg(Color::Red))),
                    error_area,
                );
            }

            let footer = Paragraph::new(Line::from("Tab: next  Enter: add  Esc: back"))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(footer, footer_area);
        }
    }
}
