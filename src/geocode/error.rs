/// Shown when the lookup succeeds but the point is not inside any country.
pub const NOT_A_CITY_MESSAGE: &str = "This doesn't seem to be city, click somewhere else😃";

/// Errors that can occur while reverse-geocoding a position.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The request failed: transport error, non-success status, or undecodable body.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The service answered but returned no country code.
    #[error("{}", NOT_A_CITY_MESSAGE)]
    NotACity,

    /// The service returned a country code that is not two letters.
    #[error("geocoding returned an invalid country code: {0}")]
    InvalidCountryCode(String),
}
