use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info, warn};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{Frame, Terminal};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::geocode::{Place, ReverseGeocoder};
use crate::model::{Trip, summarize_countries};
use crate::route::{Route, form_path};
use crate::storage::CityStore;

use super::action::{Action, AppEvent, ChannelNavigator};
use super::error::AppError;
use super::layout::app_layout;
use super::screens::{
    CityListState, LookupRequest, TripFormState, draw_city_detail, draw_city_list,
    draw_country_list, draw_trip_form, handle_city_detail_key, submit_trip,
};
use super::widgets::{Direction, MapState, UserPanelContext, draw_map, draw_user_panel};

/// How long to wait for a terminal event before redrawing.
const TICK: Duration = Duration::from_millis(100);

/// Top-level application state.
///
/// Holds the current route and the per-screen state, and owns the channel
/// background tasks use to report back.
pub struct App {
    route: Route,
    store: Arc<dyn CityStore>,
    geocoder: Arc<dyn ReverseGeocoder>,
    runtime: Handle,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    trip_form: TripFormState,
    city_list: CityListState,
    map: MapState,
    user_name: String,
    /// One-line message shown above the sidebar footer.
    notice: Option<String>,
    /// Form generation of the save in flight, if any.
    pending_save: Option<u64>,
    tick: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on the city list.
    ///
    /// Background work is spawned on `runtime`.
    pub fn new(
        store: Arc<dyn CityStore>,
        geocoder: Arc<dyn ReverseGeocoder>,
        runtime: Handle,
        user_name: impl Into<String>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            route: Route::Cities,
            store,
            geocoder,
            runtime,
            events_tx,
            events_rx,
            trip_form: TripFormState::default(),
            city_list: CityListState::new(),
            map: MapState::default(),
            user_name: user_name.into(),
            notice: None,
            pending_save: None,
            tick: 0,
            should_quit: false,
        }
    }

    /// Main event loop: draw → poll event → dispatch → drain background events.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
            self.tick = self.tick.wrapping_add(1);
            self.drain_events();
        }
        Ok(())
    }

    /// Handles a key event: global keys first, then the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let large = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('p') if ctrl => {
                let path = form_path(self.map.cursor());
                self.go_to(&path);
                return;
            }
            KeyCode::Up => return self.map.move_cursor(Direction::Up, large),
            KeyCode::Down => return self.map.move_cursor(Direction::Down, large),
            KeyCode::Left => return self.map.move_cursor(Direction::Left, large),
            KeyCode::Right => return self.map.move_cursor(Direction::Right, large),
            _ => {}
        }

        if !matches!(self.route, Route::Form(_)) {
            match key.code {
                KeyCode::Char('q') if matches!(self.route, Route::Cities | Route::Countries) => {
                    return self.apply_action(Action::Quit);
                }
                KeyCode::Char('c') => return self.navigate(Route::Cities),
                KeyCode::Char('o') => return self.navigate(Route::Countries),
                _ => {}
            }
        }

        let trips = self.store.cities();
        let action = match &self.route {
            Route::Cities => self.city_list.handle_key(key, &trips),
            Route::City(id) => handle_city_detail_key(key, trips.iter().find(|t| &t.id == id)),
            Route::Countries => Action::None,
            Route::Form(_) if self.pending_save.is_some() && key.code == KeyCode::Enter => {
                debug!("Save already in flight; ignoring submit");
                Action::None
            }
            Route::Form(_) => self.trip_form.handle_key(key),
        };
        self.apply_action(action);
    }

    /// Resolves `path` and shows that screen. Unknown paths are logged and ignored.
    pub fn go_to(&mut self, path: &str) {
        match Route::parse(path) {
            Ok(route) => self.navigate(route),
            Err(e) => warn!("Ignoring navigation: {e}"),
        }
    }

    /// Shows `route`, feeding its parameters to the screen that needs them.
    pub fn navigate(&mut self, route: Route) {
        debug!("Navigating to {}", route.path());
        if matches!(self.route, Route::Form(_)) && !matches!(route, Route::Form(_)) {
            self.trip_form.reset();
        }
        self.notice = None;

        match &route {
            Route::Form(position) => {
                if let Some(request) = self.trip_form.set_position(*position) {
                    self.spawn_lookup(request);
                }
            }
            Route::City(id) => {
                let trips = self.store.cities();
                if let Some(trip) = trips.iter().find(|t| &t.id == id) {
                    self.map.fly_to(trip.position);
                }
                self.city_list.select_id(id, &trips);
            }
            Route::Cities | Route::Countries => {}
        }
        self.route = route;
    }

    /// Applies an action returned by a screen handler.
    fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(route) => self.navigate(route),
            Action::AddCity(trip) => self.spawn_add(trip),
            Action::DeleteCity(id) => self.spawn_delete(id),
            Action::Quit => self.should_quit = true,
        }
    }

    fn spawn_lookup(&self, request: LookupRequest) {
        let geocoder = Arc::clone(&self.geocoder);
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = geocoder
                .reverse_geocode(request.position)
                .await
                .and_then(Place::from_response);
            // The UI loop may already be gone.
            let _ = tx.send(AppEvent::Geocoded {
                generation: request.generation,
                result,
            });
        });
    }

    fn spawn_add(&mut self, trip: Trip) {
        if self.pending_save.is_some() {
            debug!("Save already in flight; ignoring submit");
            return;
        }
        let generation = self.trip_form.generation();
        info!("Saving trip {} to {}", trip.id, trip.city_name);
        self.pending_save = Some(generation);

        let store = Arc::clone(&self.store);
        let tx = self.events_tx.clone();
        let navigator = ChannelNavigator::new(tx.clone(), generation);
        self.runtime.spawn(async move {
            if let Err(e) = submit_trip(trip, store.as_ref(), &navigator).await {
                warn!("Saving trip failed: {e}");
                let _ = tx.send(AppEvent::SubmitFailed {
                    generation,
                    message: e.to_string(),
                });
            }
        });
    }

    fn spawn_delete(&self, id: String) {
        let store = Arc::clone(&self.store);
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let event = match store.delete_city(&id).await {
                Ok(()) => AppEvent::CityDeleted(id),
                Err(e) => {
                    warn!("Deleting trip {id} failed: {e}");
                    AppEvent::DeleteFailed(e.to_string())
                }
            };
            let _ = tx.send(event);
        });
    }

    /// Applies one event from a background task.
    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Geocoded { generation, result } => {
                self.trip_form.apply_lookup(generation, result);
            }
            AppEvent::Navigate { generation, path } => {
                if self.finish_save(generation) {
                    self.go_to(&path);
                }
            }
            AppEvent::SubmitFailed {
                generation,
                message,
            } => {
                if self.finish_save(generation) {
                    self.trip_form
                        .set_submit_error(format!("Could not save trip: {message}"));
                }
            }
            AppEvent::CityDeleted(id) => {
                info!("Deleted trip {id}");
                self.city_list.clamp(self.store.cities().len());
                if self.route == Route::City(id) {
                    self.navigate(Route::Cities);
                }
            }
            AppEvent::DeleteFailed(msg) => {
                self.notice = Some(format!("Could not delete city: {msg}"));
            }
        }
    }

    /// Marks the save for `generation` as finished.
    ///
    /// Returns `true` when the saved draft is still the one on screen, so its
    /// outcome should be shown.
    fn finish_save(&mut self, generation: u64) -> bool {
        if self.pending_save == Some(generation) {
            self.pending_save = None;
        }
        let current = matches!(self.route, Route::Form(_))
            && self.trip_form.generation() == generation;
        if !current {
            debug!("Dropping outcome of save for generation {generation}; draft has changed");
        }
        current
    }

    /// Applies every event that is already waiting, without blocking.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Waits for the next background event and applies it.
    pub async fn next_event(&mut self) {
        if let Some(event) = self.events_rx.recv().await {
            self.handle_event(event);
        }
    }

    /// Renders sidebar, map, and user panel.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let areas = app_layout(frame.area());
        let trips = self.store.cities();

        let sidebar = Block::default()
            .title(" triplog ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = sidebar.inner(areas.sidebar);
        frame.render_widget(sidebar, areas.sidebar);

        let [tabs_area, body_area, notice_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        let tab = |label: &'static str, active: bool| {
            if active {
                Span::styled(
                    label,
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(label, Style::default().fg(Color::DarkGray))
            }
        };
        let tabs = Paragraph::new(Line::from(vec![
            tab(" Cities (c) ", matches!(self.route, Route::Cities | Route::City(_))),
            Span::raw("  "),
            tab(" Countries (o) ", self.route == Route::Countries),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(tabs, tabs_area);

        match &self.route {
            Route::Cities => draw_city_list(&self.city_list, &trips, frame, body_area),
            Route::City(id) => {
                draw_city_detail(trips.iter().find(|t| &t.id == id), frame, body_area);
            }
            Route::Countries => draw_country_list(&trips, frame, body_area),
            Route::Form(_) => {
                let busy = self.pending_save.is_some() || self.store.is_loading();
                draw_trip_form(&self.trip_form, busy, self.tick, frame, body_area);
            }
        }

        let status = match &self.notice {
            Some(msg) => Paragraph::new(msg.as_str()).style(Style::default().fg(Color::Red)),
            None => Paragraph::new("Ctrl+P: pin map  q: quit")
                .style(Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(status, notice_area);

        draw_map(&self.map, &trips, frame, areas.map);

        let ctx = UserPanelContext {
            user_name: self.user_name.clone(),
            trip_count: trips.len(),
            country_count: summarize_countries(&trips).len(),
        };
        draw_user_panel(&ctx, frame, areas.user);
    }

    /// Returns the current route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the trip form state.
    pub fn trip_form(&self) -> &TripFormState {
        &self.trip_form
    }

    /// Returns the map state.
    pub fn map(&self) -> &MapState {
        &self.map
    }

    /// Returns the sidebar notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}
