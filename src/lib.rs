//! Facade crate for the county-scout ranking engine.
//!
//! This crate re-exports the core domain types and the ranking pipeline, and
//! exposes census ingestion behind the `census` feature.
//!
//! ```
//! use county_scout::{RankingService, UserPriorityProfile};
//!
//! let service = RankingService::new(450_000.0, UserPriorityProfile::parse("quiet rural"))
//!     .expect("positive budget");
//! let report = service.rank("Vermont", Vec::new());
//! assert!(report.is_empty());
//! ```

#![forbid(unsafe_code)]

pub use county_scout_core::{
    BudgetTier, CommunityType, County, CountyRecord, CountySource, CountySourceError,
    DataQualityIssue, DerivedMetrics, Dimension, ScoreSet, StateMedians, UserPriorityProfile,
};

pub use county_scout_ranker::{
    CountyTags, CuratedShortlist, DimensionWeights, EligibilityFilter, RankedCounty,
    RankingConfig, RankingError, RankingReport, RankingService, StateComparison, Thresholds,
};

#[cfg(feature = "census")]
pub use county_scout_data::{
    HttpCensusSource, HttpCensusSourceConfig, InputError, decode_census_table, parse_counties,
    resolve_state,
};
