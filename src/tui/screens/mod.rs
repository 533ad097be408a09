//! TUI screen implementations.

pub mod city_detail;
pub mod city_list;
pub mod country_list;
pub mod trip_form;

pub use city_detail::{draw_city_detail, handle_city_detail_key};
pub use city_list::{CityListState, draw_city_list};
pub use country_list::draw_country_list;
pub use trip_form::{GeocodeStatus, LookupRequest, TripFormState, draw_trip_form, submit_trip};
