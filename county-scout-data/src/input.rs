//! Offline county input files.

use county_scout_core::CountyRecord;
use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::{CountyRow, TableError, decode_census_table};

/// Errors raised while reading an offline county file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The text was not valid JSON or did not match a county row.
    #[error("invalid county JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The text was a census table that could not be decoded.
    #[error(transparent)]
    Table(#[from] TableError),
    /// The JSON was neither a census table nor an array of county rows.
    #[error("expected a census table or an array of county objects")]
    UnrecognisedShape,
}

/// Parse county records from JSON text.
///
/// Two shapes are accepted: a census table (an array of arrays whose first
/// row is a header) and an array of [`CountyRow`] objects. An empty array
/// yields no counties.
///
/// # Errors
/// Returns [`InputError`] when the text is not JSON, has another shape, or
/// holds an undecodable table or row.
///
/// # Examples
///
/// ```
/// use county_scout_data::parse_counties;
///
/// let rows = parse_counties(r#"[{"name": "Ada County", "population": 500000}]"#)
///     .expect("county rows");
/// let table = parse_counties(r#"[["NAME", "B01003_001E"], ["Ada County, Idaho", "500000"]]"#)
///     .expect("census table");
/// assert_eq!(rows, table);
/// ```
pub fn parse_counties(text: &str) -> Result<Vec<CountyRecord>, InputError> {
    let Value::Array(items) = serde_json::from_str::<Value>(text)? else {
        return Err(InputError::UnrecognisedShape);
    };
    let records = match items.first() {
        None => Vec::new(),
        Some(Value::Array(_)) => {
            let rows = items
                .into_iter()
                .map(|item| match item {
                    Value::Array(cells) => Ok(cells),
                    _ => Err(InputError::UnrecognisedShape),
                })
                .collect::<Result<Vec<_>, _>>()?;
            decode_census_table(&rows)?
        }
        Some(Value::Object(_)) => items
            .into_iter()
            .map(|item| serde_json::from_value::<CountyRow>(item).map(CountyRecord::from))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(InputError::UnrecognisedShape),
    };
    debug!("parsed {} counties", records.len());
    Ok(records)
}
