//! In-app routes and the navigation port.
//!
//! Screens are addressed by URL-style paths. The map hands a picked position
//! to the trip form through the query string of the form path, e.g.
//! `/app/form?lat=38.72&lng=-9.14`.

use std::sync::LazyLock;

use url::Url;

use crate::model::Position;

/// Trip list; also where the form returns after a successful submit.
pub const CITIES_PATH: &str = "/app/cities";
/// Country list.
pub const COUNTRIES_PATH: &str = "/app/countries";
/// Trip entry form.
pub const FORM_PATH: &str = "/app/form";

static BASE_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://triplog.local/").expect("valid hardcoded url"));

/// Errors produced while resolving a path.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The path is not a valid relative URL.
    #[error("invalid path: {0}")]
    Url(#[from] url::ParseError),

    /// The path does not name any screen.
    #[error("no screen at {0}")]
    UnknownPath(String),
}

/// A screen the sidebar can show.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// All saved trips.
    Cities,
    /// A single saved trip, by ID.
    City(String),
    /// Visited countries.
    Countries,
    /// The trip entry form, with the position read from the query string.
    Form(Option<Position>),
}

impl Route {
    /// Resolves a path such as `/app/cities/trip-1` into a route.
    ///
    /// `/app` on its own redirects to the trip list.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let url = BASE_URL.join(path)?;
        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            ["app"] | ["app", "cities"] => Ok(Self::Cities),
            ["app", "cities", id] => Ok(Self::City((*id).to_string())),
            ["app", "countries"] => Ok(Self::Countries),
            ["app", "form"] => Ok(Self::Form(position_from_query(&url))),
            _ => Err(RouteError::UnknownPath(path.to_string())),
        }
    }

    /// Returns the canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Cities => CITIES_PATH.to_string(),
            Self::City(id) => format!("{CITIES_PATH}/{id}"),
            Self::Countries => COUNTRIES_PATH.to_string(),
            Self::Form(None) => FORM_PATH.to_string(),
            Self::Form(Some(position)) => form_path(*position),
        }
    }
}

/// Returns the form path carrying `position` in its query string.
pub fn form_path(position: Position) -> String {
    format!("{FORM_PATH}?lat={}&lng={}", position.lat, position.lng)
}

/// Reads `lat` and `lng` from a URL's query string.
///
/// Returns `None` unless both are present, numeric, and in range.
pub fn position_from_query(url: &Url) -> Option<Position> {
    let mut lat = None;
    let mut lng = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "lat" => lat = value.parse::<f64>().ok(),
            "lng" => lng = value.parse::<f64>().ok(),
            _ => {}
        }
    }
    Position::new(lat?, lng?).ok()
}

/// Something that can move the app to another screen.
pub trait Navigator: Send + Sync {
    /// Navigates to `path`. Unknown paths are ignored by the implementation.
    fn go_to(&self, path: &str);
}
