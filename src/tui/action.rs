//! Actions returned by screen key handlers, and events delivered to the app
//! by background tasks.

use log::debug;
use tokio::sync::mpsc::UnboundedSender;

use crate::geocode::{GeocodeError, Place};
use crate::model::Trip;
use crate::route::{Navigator, Route};

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to start background work and move between
/// screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Show the given screen.
    Navigate(Route),
    /// Persist a new trip, then return to the trip list.
    AddCity(Trip),
    /// Delete the trip with the given ID.
    DeleteCity(String),
    /// Quit the application.
    Quit,
}

/// Completion of background work, sent back to the UI loop.
#[derive(Debug)]
pub enum AppEvent {
    /// A reverse-geocoding lookup finished.
    Geocoded {
        /// Generation of the form position the lookup was issued for.
        generation: u64,
        result: Result<Place, GeocodeError>,
    },
    /// A save finished and asked to move to another path.
    Navigate {
        /// Form generation of the draft that was saved.
        generation: u64,
        path: String,
    },
    /// Saving a trip failed.
    SubmitFailed { generation: u64, message: String },
    /// A trip was deleted.
    CityDeleted(String),
    /// Deleting a trip failed.
    DeleteFailed(String),
}

/// [`Navigator`] that forwards navigation requests to the UI loop.
///
/// Requests are tagged with the form generation of the draft being saved so
/// the app can drop them once the user has moved on to another draft.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    events: UnboundedSender<AppEvent>,
    generation: u64,
}

impl ChannelNavigator {
    pub fn new(events: UnboundedSender<AppEvent>, generation: u64) -> Self {
        Self { events, generation }
    }
}

impl Navigator for ChannelNavigator {
    fn go_to(&self, path: &str) {
        let event = AppEvent::Navigate {
            generation: self.generation,
            path: path.to_string(),
        };
        if self.events.send(event).is_err() {
            debug!("UI loop gone; dropping navigation to {path}");
        }
    }
}
