use serde::Deserialize;

use super::error::GeocodeError;
use crate::model::CountryCode;

/// The subset of the reverse-geocoding response the app reads.
///
/// The service sends empty strings for unknown fields; those are treated the
/// same as missing ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResponse {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// A resolved place, ready to prefill the trip form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub city_name: String,
    pub country: String,
    pub country_code: CountryCode,
}

impl Place {
    /// Derives a place from a geocoding response.
    ///
    /// The city name is `city`, else `locality`, else empty. A missing or
    /// empty country code means the point is not a city.
    pub fn from_response(response: GeocodeResponse) -> Result<Self, GeocodeError> {
        let code = non_empty(response.country_code).ok_or(GeocodeError::NotACity)?;
        let country_code =
            CountryCode::parse(&code).map_err(|_| GeocodeError::InvalidCountryCode(code))?;
        let city_name = non_empty(response.city)
            .or_else(|| non_empty(response.locality))
            .unwrap_or_default();
        Ok(Self {
            city_name,
            country: response.country_name.unwrap_or_default(),
            country_code,
        })
    }

    /// Returns the flag emoji for this place's country.
    pub fn emoji(&self) -> String {
        self.country_code.flag_emoji()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
