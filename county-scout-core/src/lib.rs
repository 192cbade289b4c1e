//! Core domain types for the county ranking engine.
//!
//! The crate holds the leaf components every ranking pass relies on:
//! - [`CountyRecord`] and the [`DerivedMetrics`] computed from it,
//! - [`StateMedians`], the per-state comparison baseline,
//! - [`UserPriorityProfile`], parsed from free-text preferences,
//! - [`BudgetTier`], a pure function of the household budget,
//! - [`ScoreSet`], the per-county sub-scores keyed by [`Dimension`],
//! - the [`CountySource`] trait implemented by statistics collaborators.
//!
//! Everything here is synchronous and free of I/O.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod county;
mod medians;
mod metrics;
mod priority;
mod score;
pub mod source;
mod tier;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use county::{CountyRecord, DataQualityIssue};
pub use medians::StateMedians;
pub use metrics::{County, DerivedMetrics, college_degree_rate, homeownership_rate};
pub use priority::{CommunityType, UserPriorityProfile};
pub use score::{Dimension, ScoreSet};
pub use source::{CountySource, CountySourceError};
pub use tier::{BudgetTier, LUXURY_THRESHOLD, MOVE_UP_THRESHOLD, ULTRA_LUXURY_THRESHOLD};
