//! Ingestion boundary for the county ranking engine.
//!
//! Responsibilities:
//! - Translate census-variable tables into strongly typed
//!   [`CountyRecord`](county_scout_core::CountyRecord) values.
//! - Read offline county files, either census tables or typed JSON rows.
//! - Resolve U.S. states by FIPS code, abbreviation, or name.
//! - Fetch live county statistics over HTTP.
//!
//! Boundaries:
//! - Do not encode ranking rules (live in `county-scout-ranker`).
//! - Keep blocking I/O off async executors; the HTTP source owns its runtime.
//!
//! Invariants:
//! - Census sentinel values and malformed cells never reach the core as
//!   negative or garbage counts; they decode to `0`.
//! - No global mutable state.

pub mod census;
mod input;
mod rows;
mod states;

pub use census::{
    CensusSourceBuildError, DEFAULT_CENSUS_BASE_URL, DEFAULT_DATASET_YEAR, HttpCensusSource,
    HttpCensusSourceConfig, TableError, decode_census_table,
};
pub use input::{InputError, parse_counties};
pub use rows::{CountyRow, UNUSABLE_SAFETY_READING};
pub use states::{UsState, resolve_state};
