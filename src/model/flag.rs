use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::validation::ValidationError;

/// Distance between an uppercase ASCII letter and its regional-indicator symbol.
const REGIONAL_INDICATOR_OFFSET: u32 = 127397;

static COUNTRY_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}$").expect("valid hardcoded regex"));

/// A two-letter ISO 3166-1 alpha-2 country code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// Parses a two-letter code, case-insensitively.
    pub fn parse(code: &str) -> Result<Self, ValidationError> {
        if COUNTRY_CODE_RE.is_match(code) {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(ValidationError::InvalidCountryCode(code.to_string()))
        }
    }

    /// Returns the uppercase code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the flag made of the two regional-indicator symbols for this code.
    pub fn flag_emoji(&self) -> String {
        self.0
            .chars()
            .filter_map(|c| char::from_u32(c as u32 + REGIONAL_INDICATOR_OFFSET))
            .collect()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Converts a two-letter country code into its flag emoji (`"pt"` → 🇵🇹).
pub fn country_code_to_emoji(code: &str) -> Result<String, ValidationError> {
    CountryCode::parse(code).map(|c| c.flag_emoji())
}

/// Recovers the country code from a flag emoji, or `None` if `emoji` is not
/// exactly two regional-indicator symbols.
///
/// Used to print a textual `[PT]` next to flags for terminals that cannot
/// render flag glyphs.
pub fn emoji_to_country_code(emoji: &str) -> Option<String> {
    let letters: Option<String> = emoji
        .chars()
        .map(|c| {
            (c as u32)
                .checked_sub(REGIONAL_INDICATOR_OFFSET)
                .and_then(char::from_u32)
                .filter(char::is_ascii_uppercase)
        })
        .collect();
    letters.filter(|code| code.len() == 2)
}
