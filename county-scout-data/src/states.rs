//! U.S. state resolution.
//!
//! Maps between two-digit FIPS codes, two-letter abbreviations, and full
//! names for the 50 states and the District of Columbia.

use serde::Serialize;

/// One U.S. state or the District of Columbia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UsState {
    /// Two-digit FIPS code, e.g. `"06"`.
    pub fips: &'static str,
    /// Two-letter postal abbreviation, e.g. `"CA"`.
    pub abbreviation: &'static str,
    /// Full name, e.g. `"California"`.
    pub name: &'static str,
}

impl UsState {
    const fn new(fips: &'static str, abbreviation: &'static str, name: &'static str) -> Self {
        Self {
            fips,
            abbreviation,
            name,
        }
    }

    /// Every state plus DC, ordered by FIPS code.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        STATES
    }
}

impl std::fmt::Display for UsState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

const STATES: &[UsState] = &[
    UsState::new("01", "AL", "Alabama"),
    UsState::new("02", "AK", "Alaska"),
    UsState::new("04", "AZ", "Arizona"),
    UsState::new("05", "AR", "Arkansas"),
    UsState::new("06", "CA", "California"),
    UsState::new("08", "CO", "Colorado"),
    UsState::new("09", "CT", "Connecticut"),
    UsState::new("10", "DE", "Delaware"),
    UsState::new("11", "DC", "District of Columbia"),
    UsState::new("12", "FL", "Florida"),
    UsState::new("13", "GA", "Georgia"),
    UsState::new("15", "HI", "Hawaii"),
    UsState::new("16", "ID", "Idaho"),
    UsState::new("17", "IL", "Illinois"),
    UsState::new("18", "IN", "Indiana"),
    UsState::new("19", "IA", "Iowa"),
    UsState::new("20", "KS", "Kansas"),
    UsState::new("21", "KY", "Kentucky"),
    UsState::new("22", "LA", "Louisiana"),
    UsState::new("23", "ME", "Maine"),
    UsState::new("24", "MD", "Maryland"),
    UsState::new("25", "MA", "Massachusetts"),
    UsState::new("26", "MI", "Michigan"),
    UsState::new("27", "MN", "Minnesota"),
    UsState::new("28", "MS", "Mississippi"),
    UsState::new("29", "MO", "Missouri"),
    UsState::new("30", "MT", "Montana"),
    UsState::new("31", "NE", "Nebraska"),
    UsState::new("32", "NV", "Nevada"),
    UsState::new("33", "NH", "New Hampshire"),
    UsState::new("34", "NJ", "New Jersey"),
    UsState::new("35", "NM", "New Mexico"),
    UsState::new("36", "NY", "New York"),
    UsState::new("37", "NC", "North Carolina"),
    UsState::new("38", "ND", "North Dakota"),
    UsState::new("39", "OH", "Ohio"),
    UsState::new("40", "OK", "Oklahoma"),
    UsState::new("41", "OR", "Oregon"),
    UsState::new("42", "PA", "Pennsylvania"),
    UsState::new("44", "RI", "Rhode Island"),
    UsState::new("45", "SC", "South Carolina"),
    UsState::new("46", "SD", "South Dakota"),
    UsState::new("47", "TN", "Tennessee"),
    UsState::new("48", "TX", "Texas"),
    UsState::new("49", "UT", "Utah"),
    UsState::new("50", "VT", "Vermont"),
    UsState::new("51", "VA", "Virginia"),
    UsState::new("53", "WA", "Washington"),
    UsState::new("54", "WV", "West Virginia"),
    UsState::new("55", "WI", "Wisconsin"),
    UsState::new("56", "WY", "Wyoming"),
];

/// Resolve a state from a FIPS code, abbreviation, or name.
///
/// Matching ignores case and surrounding whitespace. Single-digit FIPS codes
/// are accepted without their leading zero.
///
/// # Examples
///
/// ```
/// use county_scout_data::resolve_state;
///
/// assert_eq!(resolve_state("tx").map(|state| state.fips), Some("48"));
/// assert_eq!(resolve_state("6").map(|state| state.name), Some("California"));
/// assert_eq!(resolve_state(" new york ").map(|state| state.abbreviation), Some("NY"));
/// assert!(resolve_state("Atlantis").is_none());
/// ```
#[must_use]
pub fn resolve_state(query: &str) -> Option<&'static UsState> {
    let needle = query.trim();
    if needle.is_empty() {
        return None;
    }
    if needle.chars().all(|c| c.is_ascii_digit()) {
        let fips = format!("{needle:0>2}");
        return STATES.iter().find(|state| state.fips == fips);
    }
    STATES.iter().find(|state| {
        state.abbreviation.eq_ignore_ascii_case(needle) || state.name.eq_ignore_ascii_case(needle)
    })
}
