//! Typed JSON county rows for offline input files.

use county_scout_core::CountyRecord;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reading substituted for a safety value that is present but not numeric.
///
/// It lies outside `1.0..=100.0`, so scoring treats it as the neutral reading.
pub const UNUSABLE_SAFETY_READING: f64 = -1.0;

/// One county as stored in an offline JSON file.
///
/// Every count defaults to `0` when omitted. `safety_score` accepts any JSON
/// value: numbers and numeric strings pass through, `null` or an absent field
/// mean "no reading", and anything else becomes
/// [`UNUSABLE_SAFETY_READING`].
///
/// # Examples
///
/// ```
/// use county_scout_core::CountyRecord;
/// use county_scout_data::CountyRow;
///
/// let row: CountyRow = serde_json::from_str(
///     r#"{"name": "Dane County", "population": 561504, "median_income": 84297,
///         "safety_score": "n/a"}"#,
/// )
/// .expect("valid row");
/// let record = CountyRecord::from(row);
/// assert_eq!(record.median_household_income, 84_297);
/// assert_eq!(record.safety_score, Some(-1.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountyRow {
    /// County name without the state suffix.
    pub name: String,
    /// Total population.
    pub population: u64,
    /// Median household income in USD.
    #[serde(alias = "median_income")]
    pub median_household_income: u64,
    /// Median home value in USD.
    pub median_home_value: u64,
    /// Occupied housing units.
    #[serde(alias = "total_households")]
    pub total_occupied_households: u64,
    /// Owner-occupied housing units.
    pub owner_occupied_households: u64,
    /// Households with children under 18.
    pub households_with_children: u64,
    /// Adults aged 25 and over.
    pub adults_25_plus: u64,
    /// Adults with a bachelor's degree or higher.
    pub bachelor_plus_count: u64,
    /// Raw safety reading of any JSON type.
    #[serde(alias = "overall_safety_score", skip_serializing_if = "Option::is_none")]
    pub safety_score: Option<Value>,
}

impl From<CountyRow> for CountyRecord {
    fn from(row: CountyRow) -> Self {
        let safety_score = row
            .safety_score
            .as_ref()
            .and_then(|value| safety_reading(&row.name, value));
        Self {
            name: row.name,
            population: row.population,
            median_household_income: row.median_household_income,
            median_home_value: row.median_home_value,
            total_occupied_households: row.total_occupied_households,
            owner_occupied_households: row.owner_occupied_households,
            households_with_children: row.households_with_children,
            adults_25_plus: row.adults_25_plus,
            bachelor_plus_count: row.bachelor_plus_count,
            safety_score,
        }
    }
}

fn safety_reading(county: &str, value: &Value) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::Number(number) => number.as_f64(),
        Value::String(text) => Some(text.trim().parse::<f64>().unwrap_or_else(|_| {
            warn!("{county}: safety reading {text:?} is not numeric");
            UNUSABLE_SAFETY_READING
        })),
        other => {
            warn!("{county}: safety reading {other} is not numeric");
            Some(UNUSABLE_SAFETY_READING)
        }
    }
}
