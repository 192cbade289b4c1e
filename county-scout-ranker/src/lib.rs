//! Filtering, scoring, weighting, and ranking of counties within a state.
//!
//! A ranking pass is a pure function of its inputs:
//! 1. [`StateMedians`](county_scout_core::StateMedians) are computed over every
//!    county in the state.
//! 2. The [`EligibilityFilter`] removes counties that do not suit the budget
//!    tier and community preference, relaxing once if too few survive.
//! 3. The [`CountyScorer`] produces a [`ScoreSet`](county_scout_core::ScoreSet)
//!    for each survivor, and [`DimensionWeights`] blend it into one composite.
//! 4. [`RankingService`] orders the survivors, keeps the top entries, and
//!    attaches descriptive [`CountyTags`].
//!
//! # Examples
//!
//! ```
//! use county_scout_core::{CountyRecord, UserPriorityProfile};
//! use county_scout_ranker::RankingService;
//!
//! let counties = vec![CountyRecord {
//!     name: "Example County".into(),
//!     population: 120_000,
//!     median_household_income: 62_000,
//!     median_home_value: 210_000,
//!     adults_25_plus: 80_000,
//!     bachelor_plus_count: 24_000,
//!     ..CountyRecord::default()
//! }];
//! let service = RankingService::new(300_000.0, UserPriorityProfile::default())
//!     .expect("valid budget");
//! let report = service.rank("Example", counties);
//! assert_eq!(report.counties.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod eligibility;
mod error;
mod numeric;
mod ranking;
mod scoring;
mod shortlist;
mod tags;
mod weights;

pub use eligibility::{EligibilityFilter, EligibilityOutcome, Thresholds};
pub use error::RankingError;
pub use ranking::{RankedCounty, RankingConfig, RankingReport, RankingService, StateComparison};
pub use scoring::CountyScorer;
pub use shortlist::CuratedShortlist;
pub use tags::{CountyTags, TAG_THRESHOLD};
pub use weights::{DimensionWeights, MIN_WEIGHT};
