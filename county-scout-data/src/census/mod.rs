//! Census American Community Survey tables.
//!
//! The census API returns a JSON array of arrays: a header row of variable
//! codes followed by one row per county. [`decode_census_table`] turns such a
//! table into [`CountyRecord`] values, and [`HttpCensusSource`] fetches one
//! for a state.

mod error;
mod provider;
mod table;

pub use error::{CensusSourceBuildError, TableError};
pub use provider::{
    DEFAULT_CENSUS_BASE_URL, DEFAULT_DATASET_YEAR, DEFAULT_USER_AGENT, HttpCensusSource,
    HttpCensusSourceConfig,
};
pub use table::decode_census_table;

/// Census variable for the county name, formatted `"X County, State"`.
pub const NAME: &str = "NAME";
/// Total population.
pub const POPULATION: &str = "B01003_001E";
/// Median household income.
pub const MEDIAN_HOUSEHOLD_INCOME: &str = "B19013_001E";
/// Median home value.
pub const MEDIAN_HOME_VALUE: &str = "B25077_001E";
/// Occupied housing units.
pub const OCCUPIED_HOUSING_UNITS: &str = "B25003_001E";
/// Owner-occupied housing units.
pub const OWNER_OCCUPIED_UNITS: &str = "B25003_002E";
/// Households with one or more people under 18.
pub const HOUSEHOLDS_WITH_CHILDREN: &str = "B11005_002E";
/// Population aged 25 and over.
pub const ADULTS_25_PLUS: &str = "B15003_001E";
/// Bachelor's degree holders.
pub const BACHELORS: &str = "B15003_022E";
/// Master's degree holders.
pub const MASTERS: &str = "B15003_023E";
/// Professional degree holders.
pub const PROFESSIONAL: &str = "B15003_024E";
/// Doctorate holders.
pub const DOCTORATE: &str = "B15003_025E";

/// Degree variables summed into the bachelor's-or-higher count.
pub const DEGREE_VARIABLES: [&str; 4] = [BACHELORS, MASTERS, PROFESSIONAL, DOCTORATE];

/// Every numeric variable requested from the census API, in request order.
pub const COUNTY_VARIABLES: [&str; 11] = [
    POPULATION,
    MEDIAN_HOUSEHOLD_INCOME,
    MEDIAN_HOME_VALUE,
    OCCUPIED_HOUSING_UNITS,
    OWNER_OCCUPIED_UNITS,
    HOUSEHOLDS_WITH_CHILDREN,
    ADULTS_25_PLUS,
    BACHELORS,
    MASTERS,
    PROFESSIONAL,
    DOCTORATE,
];
