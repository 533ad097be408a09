mod country;
mod flag;
mod position;
mod trip;
mod validation;

pub use country::{CountrySummary, summarize_countries};
pub use flag::{CountryCode, country_code_to_emoji, emoji_to_country_code};
pub use position::Position;
pub use trip::Trip;
pub use validation::{
    DATE_FORMAT, ValidationError, format_trip_date, parse_trip_date, validate_city_name,
};
