//! Curated county shortlists for upper budget tiers.

use std::collections::BTreeMap;

use county_scout_core::{BudgetTier, County};
use log::debug;
use serde::{Deserialize, Serialize};

/// Hand-picked counties per state, preferred for `move_up` and above.
///
/// Entries may be full names (`"Shelby County, Alabama"`) or bare county
/// names (`"Shelby County"`). State names match case-insensitively.
///
/// # Examples
///
/// ```
/// use county_scout_ranker::CuratedShortlist;
///
/// let shortlist: CuratedShortlist =
///     serde_json::from_str(r#"{"Alabama": ["Shelby County, Alabama"]}"#)
///         .expect("valid shortlist");
/// assert!(shortlist.contains("alabama", "Shelby County"));
/// assert!(!shortlist.contains("Alabama", "Jefferson County"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuratedShortlist {
    states: BTreeMap<String, Vec<String>>,
}

impl CuratedShortlist {
    /// Create an empty shortlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `counties` for `state` while returning `self`.
    #[must_use]
    pub fn with_state<I, S>(mut self, state: &str, counties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states
            .entry(state.to_owned())
            .or_default()
            .extend(counties.into_iter().map(Into::into));
        self
    }

    fn entries(&self, state: &str) -> Option<&[String]> {
        self.states
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(state))
            .map(|(_, counties)| counties.as_slice())
    }

    /// Whether `county` is shortlisted for `state`.
    #[must_use]
    pub fn contains(&self, state: &str, county: &str) -> bool {
        self.entries(state).is_some_and(|entries| {
            let full_name = format!("{county}, {}", state.trim());
            entries.iter().any(|entry| {
                entry.eq_ignore_ascii_case(county) || entry.eq_ignore_ascii_case(&full_name)
            })
        })
    }

    /// Narrow `counties` to shortlisted ones when the tier calls for it.
    ///
    /// The input is returned unchanged for the affordable tier, for states
    /// without an entry, and when no county matches.
    #[must_use]
    pub fn narrow(&self, state: &str, tier: BudgetTier, counties: Vec<County>) -> Vec<County> {
        if tier == BudgetTier::Affordable || self.entries(state).is_none() {
            return counties;
        }
        let (matched, rest): (Vec<County>, Vec<County>) = counties
            .into_iter()
            .partition(|county| self.contains(state, &county.record.name));
        if matched.is_empty() {
            debug!("no shortlisted counties for {state} passed eligibility");
            return rest;
        }
        debug!(
            "narrowed {state} to {} shortlisted counties",
            matched.len()
        );
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use county_scout_core::CountyRecord;
    use rstest::{fixture, rstest};

    fn county(name: &str) -> County {
        County::from_record(CountyRecord {
            name: name.to_owned(),
            population: 50_000,
            ..CountyRecord::default()
        })
    }

    fn names(counties: &[County]) -> Vec<&str> {
        counties
            .iter()
            .map(|county| county.record.name.as_str())
            .collect()
    }

    #[fixture]
    fn shortlist() -> CuratedShortlist {
        CuratedShortlist::new().with_state("Texas", ["Collin County, Texas", "Travis County"])
    }

    #[fixture]
    fn counties() -> Vec<County> {
        vec![
            county("Harris County"),
            county("Collin County"),
            county("Travis County"),
        ]
    }

    #[rstest]
    fn narrows_upper_tiers(shortlist: CuratedShortlist, counties: Vec<County>) {
        let narrowed = shortlist.narrow("Texas", BudgetTier::Luxury, counties);
        assert_eq!(names(&narrowed), ["Collin County", "Travis County"]);
    }

    #[rstest]
    fn leaves_affordable_tier_untouched(shortlist: CuratedShortlist, counties: Vec<County>) {
        let narrowed = shortlist.narrow("Texas", BudgetTier::Affordable, counties);
        assert_eq!(narrowed.len(), 3);
    }

    #[rstest]
    fn leaves_other_states_untouched(shortlist: CuratedShortlist, counties: Vec<County>) {
        let narrowed = shortlist.narrow("Ohio", BudgetTier::MoveUp, counties);
        assert_eq!(narrowed.len(), 3);
    }

    #[rstest]
    fn keeps_everything_when_nothing_matches(shortlist: CuratedShortlist) {
        let narrowed =
            shortlist.narrow("Texas", BudgetTier::UltraLuxury, vec![county("Bexar County")]);
        assert_eq!(names(&narrowed), ["Bexar County"]);
    }
}
