//! Census table decoding.

use std::collections::HashMap;

use county_scout_core::CountyRecord;
use log::{debug, warn};
use serde_json::Value;

use super::{
    ADULTS_25_PLUS, DEGREE_VARIABLES, HOUSEHOLDS_WITH_CHILDREN, MEDIAN_HOME_VALUE,
    MEDIAN_HOUSEHOLD_INCOME, NAME, OCCUPIED_HOUSING_UNITS, OWNER_OCCUPIED_UNITS, POPULATION,
    TableError,
};

/// Decode a census table into county records.
///
/// The first row is the header; every later row is matched against it by
/// position. Numeric cells may be JSON numbers or strings. Null, negative
/// (census suppression sentinels), and unparseable cells decode to `0`, as do
/// columns absent from the header. Counties reporting no population are
/// skipped. Records are returned largest population first.
///
/// # Errors
/// Returns [`TableError::Empty`] when there is no header row and
/// [`TableError::MissingColumn`] when the header lacks `NAME`.
///
/// # Examples
///
/// ```
/// use county_scout_data::decode_census_table;
/// use serde_json::json;
///
/// let table = json!([
///     ["NAME", "B01003_001E", "B19013_001E", "B15003_022E", "B15003_023E"],
///     ["Travis County, Texas", "1290188", "85043", "300000", "120000"],
///     ["Loving County, Texas", "64", "-666666666", null, null]
/// ]);
/// let rows: Vec<Vec<serde_json::Value>> = serde_json::from_value(table).expect("valid table");
/// let counties = decode_census_table(&rows).expect("decodable");
/// assert_eq!(counties[0].name, "Travis County");
/// assert_eq!(counties[0].bachelor_plus_count, 420_000);
/// assert_eq!(counties[1].median_household_income, 0);
/// ```
pub fn decode_census_table(rows: &[Vec<Value>]) -> Result<Vec<CountyRecord>, TableError> {
    let (header, body) = rows.split_first().ok_or(TableError::Empty)?;
    let columns: HashMap<&str, usize> = header
        .iter()
        .enumerate()
        .filter_map(|(index, cell)| cell.as_str().map(|code| (code, index)))
        .collect();
    let name_column = *columns.get(NAME).ok_or_else(|| TableError::MissingColumn {
        column: NAME.to_owned(),
    })?;

    let mut counties: Vec<CountyRecord> = body
        .iter()
        .filter_map(|row| {
            let cell = |code: &str| columns.get(code).and_then(|index| row.get(*index));
            let count = |code: &str| cell(code).map_or(0, count_value);
            let record = CountyRecord {
                name: county_name(row.get(name_column)),
                population: count(POPULATION),
                median_household_income: count(MEDIAN_HOUSEHOLD_INCOME),
                median_home_value: count(MEDIAN_HOME_VALUE),
                total_occupied_households: count(OCCUPIED_HOUSING_UNITS),
                owner_occupied_households: count(OWNER_OCCUPIED_UNITS),
                households_with_children: count(HOUSEHOLDS_WITH_CHILDREN),
                adults_25_plus: count(ADULTS_25_PLUS),
                bachelor_plus_count: DEGREE_VARIABLES
                    .into_iter()
                    .map(count)
                    .fold(0_u64, u64::saturating_add),
                safety_score: None,
            };
            if record.population == 0 {
                warn!("skipping {} without population data", record.name);
                return None;
            }
            Some(record)
        })
        .collect();

    counties.sort_by(|left, right| right.population.cmp(&left.population));
    debug!(
        "decoded {} counties from {} census rows",
        counties.len(),
        body.len()
    );
    Ok(counties)
}

/// County name up to the first comma, e.g. `"Travis County"`.
fn county_name(cell: Option<&Value>) -> String {
    let full = match cell {
        Some(Value::String(text)) => text.as_str(),
        _ => "",
    };
    full.split(',').next().unwrap_or_default().trim().to_owned()
}

/// Decode a numeric cell, mapping anything unusable to `0`.
fn count_value(cell: &Value) -> u64 {
    match cell {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().and_then(whole))
            .unwrap_or(0),
        Value::String(text) => {
            let trimmed = text.trim();
            trimmed
                .parse::<u64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(whole))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// Round a non-negative finite estimate to a whole count.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is checked to be finite, non-negative, and in range"
)]
fn whole(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value < 1.8e19).then(|| value.round() as u64)
}
