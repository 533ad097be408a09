//! Reverse geocoding: turning a picked [`Position`](crate::model::Position)
//! into a city and country.
//!
//! The [`ReverseGeocoder`] trait is the seam the trip form depends on;
//! [`BigDataCloudClient`] is the HTTP implementation used by the binary.

mod client;
mod error;
mod place;

pub use client::{BigDataCloudClient, DEFAULT_GEOCODE_URL, ReverseGeocoder};
pub use error::{GeocodeError, NOT_A_CITY_MESSAGE};
pub use place::{GeocodeResponse, Place};
