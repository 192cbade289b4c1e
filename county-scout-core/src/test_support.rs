//! Test-only fixtures: a fluent county builder and an in-memory
//! `CountySource` used by unit, behaviour, and property tests.

use std::collections::HashMap;

use crate::{CountyRecord, CountySource, CountySourceError};

/// Fluent builder for internally consistent [`CountyRecord`] values.
///
/// Household and education counts default to fixed shares of the
/// population (40% households, 65% owner-occupied, 30% with children, 65%
/// adults aged 25+, 30% degree rate) unless set explicitly.
#[derive(Debug, Clone)]
pub struct CountyBuilder {
    name: String,
    population: u64,
    income: u64,
    home_value: u64,
    households: Option<(u64, u64)>,
    children: Option<u64>,
    education: Option<(u64, u64)>,
    degree_rate: Option<u64>,
    safety: Option<f64>,
}

impl CountyBuilder {
    /// Start a builder with plausible mid-size county defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            population: 100_000,
            income: 60_000,
            home_value: 240_000,
            households: None,
            children: None,
            education: None,
            degree_rate: None,
            safety: None,
        }
    }

    /// Set the population.
    #[must_use]
    pub fn population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    /// Set the median household income.
    #[must_use]
    pub fn income(mut self, income: u64) -> Self {
        self.income = income;
        self
    }

    /// Set the median home value.
    #[must_use]
    pub fn home_value(mut self, home_value: u64) -> Self {
        self.home_value = home_value;
        self
    }

    /// Set occupied and owner-occupied household counts.
    #[must_use]
    pub fn households(mut self, occupied: u64, owner_occupied: u64) -> Self {
        self.households = Some((occupied, owner_occupied));
        self
    }

    /// Set the number of households with children.
    #[must_use]
    pub fn households_with_children(mut self, children: u64) -> Self {
        self.children = Some(children);
        self
    }

    /// Set adults aged 25+ and degree holders explicitly.
    #[must_use]
    pub fn education(mut self, adults: u64, bachelor_plus: u64) -> Self {
        self.education = Some((adults, bachelor_plus));
        self
    }

    /// Set the college-degree rate as a whole percentage of adults.
    #[must_use]
    pub fn degree_rate(mut self, percent: u64) -> Self {
        self.degree_rate = Some(percent);
        self
    }

    /// Attach a safety reading.
    #[must_use]
    pub fn safety(mut self, safety: f64) -> Self {
        self.safety = Some(safety);
        self
    }

    /// Build the record.
    #[must_use]
    pub fn build(self) -> CountyRecord {
        let (occupied, owners) = self.households.unwrap_or_else(|| {
            let occupied = self.population * 40 / 100;
            (occupied, occupied * 65 / 100)
        });
        let children = self.children.unwrap_or(occupied * 30 / 100);
        let (adults, bachelor_plus) = self.education.unwrap_or_else(|| {
            let adults = self.population * 65 / 100;
            (adults, adults * self.degree_rate.unwrap_or(30) / 100)
        });
        CountyRecord {
            name: self.name,
            population: self.population,
            median_household_income: self.income,
            median_home_value: self.home_value,
            total_occupied_households: occupied,
            owner_occupied_households: owners,
            households_with_children: children,
            adults_25_plus: adults,
            bachelor_plus_count: bachelor_plus,
            safety_score: self.safety,
        }
    }
}

/// In-memory `CountySource` keyed by case-insensitive state name.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    states: HashMap<String, Vec<CountyRecord>>,
}

impl MemorySource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the counties for `state` while returning `self`.
    #[must_use]
    pub fn with_state(mut self, state: &str, counties: Vec<CountyRecord>) -> Self {
        self.states.insert(state.to_lowercase(), counties);
        self
    }
}

impl CountySource for MemorySource {
    fn fetch_counties(&self, state: &str) -> Result<Vec<CountyRecord>, CountySourceError> {
        self.states
            .get(&state.to_lowercase())
            .cloned()
            .ok_or_else(|| CountySourceError::UnknownState {
                state: state.to_owned(),
            })
    }
}
