//! Per-county dimension weights.
//!
//! Weights start from a fixed base, shift towards the buyer's stated
//! priorities and budget tier, and are finally floored at [`MIN_WEIGHT`] and
//! renormalised. Only dimensions the county actually carries take part, so the
//! weights of a county without a safety reading still sum to one.
#![expect(
    clippy::float_arithmetic,
    reason = "weights are blended and renormalised fractions"
)]

use std::collections::BTreeMap;

use county_scout_core::{BudgetTier, Dimension, ScoreSet, UserPriorityProfile};
use serde::{Deserialize, Serialize};

/// Smallest weight any present dimension can carry.
pub const MIN_WEIGHT: f64 = 0.05;

const BASE_WEIGHTS: [(Dimension, f64); 6] = [
    (Dimension::Affordability, 0.18),
    (Dimension::FamilyFriendly, 0.18),
    (Dimension::EconomicVitality, 0.16),
    (Dimension::HousingStability, 0.13),
    (Dimension::BudgetCompatibility, 0.15),
    (Dimension::Safety, 0.20),
];

const FAMILY_BOOST: f64 = 0.10;
const FAMILY_SAFETY_BOOST: f64 = 0.10;
const FAMILY_FALLBACK_BOOST: f64 = 0.05;
const GROWTH_BOOST: f64 = 0.15;

/// Normalised weights over the dimensions present for one county.
///
/// # Examples
///
/// ```
/// use county_scout_core::{BudgetTier, Dimension, ScoreSet, UserPriorityProfile};
/// use county_scout_ranker::DimensionWeights;
///
/// let scores = ScoreSet {
///     affordability: 80.0,
///     family_friendly: 80.0,
///     economic_vitality: 80.0,
///     housing_stability: 80.0,
///     budget_compatibility: 80.0,
///     safety: None,
/// };
/// let weights =
///     DimensionWeights::for_scores(&scores, &UserPriorityProfile::default(), BudgetTier::MoveUp);
/// assert!((weights.total() - 1.0).abs() < 1e-9);
/// assert_eq!(weights.get(Dimension::Safety), None);
/// assert!((weights.composite(&scores) - 80.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionWeights {
    weights: BTreeMap<Dimension, f64>,
}

impl DimensionWeights {
    /// Derive weights for a county carrying `scores`.
    #[must_use]
    pub fn for_scores(scores: &ScoreSet, profile: &UserPriorityProfile, tier: BudgetTier) -> Self {
        Self::derive(scores.has(Dimension::Safety), profile, tier)
    }

    /// Derive weights with or without the safety dimension.
    #[must_use]
    pub fn derive(has_safety: bool, profile: &UserPriorityProfile, tier: BudgetTier) -> Self {
        let mut weights = Self::base(has_safety);
        if profile.family_focus {
            weights.apply_family_focus();
        }
        if profile.growth_focus {
            weights.boost(Dimension::EconomicVitality, GROWTH_BOOST);
            weights.reduce_others(&[Dimension::EconomicVitality], GROWTH_BOOST);
        }
        match tier {
            BudgetTier::Luxury | BudgetTier::UltraLuxury => {
                weights.boost(Dimension::BudgetCompatibility, 0.08);
                weights.boost(Dimension::Safety, 0.07);
                weights.lower(Dimension::Affordability, 0.15);
            }
            BudgetTier::Affordable => {
                weights.boost(Dimension::Affordability, 0.15);
                weights.lower(Dimension::BudgetCompatibility, 0.08);
                weights.lower(Dimension::EconomicVitality, 0.07);
            }
            BudgetTier::MoveUp => {}
        }
        weights.floor_and_normalise();
        weights
    }

    /// Base weights, renormalised when safety is absent.
    fn base(has_safety: bool) -> Self {
        let weights = BASE_WEIGHTS
            .into_iter()
            .filter(|(dimension, _)| has_safety || *dimension != Dimension::Safety)
            .collect();
        let mut base = Self { weights };
        base.normalise();
        base
    }

    fn apply_family_focus(&mut self) {
        self.boost(Dimension::FamilyFriendly, FAMILY_BOOST);
        if self.weights.contains_key(&Dimension::Safety) {
            self.boost(Dimension::Safety, FAMILY_SAFETY_BOOST);
            self.reduce_others(
                &[Dimension::FamilyFriendly, Dimension::Safety],
                FAMILY_BOOST + FAMILY_SAFETY_BOOST,
            );
        } else {
            self.boost(Dimension::Affordability, FAMILY_FALLBACK_BOOST);
            self.boost(Dimension::HousingStability, FAMILY_FALLBACK_BOOST);
            self.reduce_others(
                &[
                    Dimension::FamilyFriendly,
                    Dimension::Affordability,
                    Dimension::HousingStability,
                ],
                FAMILY_BOOST + 2.0 * FAMILY_FALLBACK_BOOST,
            );
        }
    }

    /// Add `amount` to a present dimension.
    fn boost(&mut self, dimension: Dimension, amount: f64) {
        if let Some(weight) = self.weights.get_mut(&dimension) {
            *weight += amount;
        }
    }

    /// Subtract `amount` from a present dimension, keeping [`MIN_WEIGHT`].
    fn lower(&mut self, dimension: Dimension, amount: f64) {
        if let Some(weight) = self.weights.get_mut(&dimension) {
            *weight = (*weight - amount).max(MIN_WEIGHT);
        }
    }

    /// Take `total` from every dimension outside `boosted`, in proportion to
    /// their current weights.
    fn reduce_others(&mut self, boosted: &[Dimension], total: f64) {
        let pool: f64 = self
            .weights
            .iter()
            .filter(|(dimension, _)| !boosted.contains(dimension))
            .map(|(_, weight)| *weight)
            .sum();
        if pool <= 0.0 {
            return;
        }
        for (dimension, weight) in &mut self.weights {
            if !boosted.contains(dimension) {
                *weight = (*weight - total * *weight / pool).max(MIN_WEIGHT);
            }
        }
    }

    fn floor_and_normalise(&mut self) {
        for weight in self.weights.values_mut() {
            *weight = weight.max(MIN_WEIGHT);
        }
        self.normalise();
    }

    fn normalise(&mut self) {
        let total = self.total();
        if total <= 0.0 {
            return;
        }
        for weight in self.weights.values_mut() {
            *weight /= total;
        }
    }

    /// Weight of `dimension`, or `None` if it does not take part.
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        self.weights.get(&dimension).copied()
    }

    /// Sum of every weight; one after derivation.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Iterate over dimensions and their weights.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        self.weights
            .iter()
            .map(|(dimension, weight)| (*dimension, *weight))
    }

    /// Weighted sum of the scores present in both `scores` and `self`.
    #[must_use]
    pub fn composite(&self, scores: &ScoreSet) -> f64 {
        scores
            .present()
            .filter_map(|(dimension, score)| self.get(dimension).map(|weight| weight * score))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use county_scout_core::CommunityType;
    use rstest::rstest;

    const EPSILON: f64 = 1e-9;

    fn profile(family_focus: bool, growth_focus: bool) -> UserPriorityProfile {
        UserPriorityProfile {
            family_focus,
            growth_focus,
            community_type: CommunityType::Unset,
            budget_focus: true,
        }
    }

    fn weight(weights: &DimensionWeights, dimension: Dimension) -> f64 {
        weights.get(dimension).unwrap_or_default()
    }

    #[rstest]
    fn base_weights_without_adjustments() {
        let weights = DimensionWeights::derive(true, &profile(false, false), BudgetTier::MoveUp);
        assert!((weight(&weights, Dimension::Safety) - 0.20).abs() < EPSILON);
        assert!((weight(&weights, Dimension::HousingStability) - 0.13).abs() < EPSILON);
    }

    #[rstest]
    fn missing_safety_redistributes_its_share() {
        let weights = DimensionWeights::derive(false, &profile(false, false), BudgetTier::MoveUp);
        assert_eq!(weights.get(Dimension::Safety), None);
        assert!((weight(&weights, Dimension::Affordability) - 0.225).abs() < EPSILON);
        assert!((weights.total() - 1.0).abs() < EPSILON);
    }

    #[rstest]
    #[case(true, true, BudgetTier::Affordable)]
    #[case(true, false, BudgetTier::UltraLuxury)]
    #[case(false, true, BudgetTier::Luxury)]
    #[case(false, false, BudgetTier::Affordable)]
    fn weights_sum_to_one_and_respect_floor(
        #[case] has_safety: bool,
        #[case] family: bool,
        #[case] tier: BudgetTier,
    ) {
        for growth in [false, true] {
            let weights = DimensionWeights::derive(has_safety, &profile(family, growth), tier);
            assert!((weights.total() - 1.0).abs() < EPSILON);
            for (dimension, value) in weights.iter() {
                assert!(value > 0.0, "{dimension} weight collapsed");
            }
        }
    }

    #[rstest]
    fn family_focus_raises_family_and_safety() {
        let plain = DimensionWeights::derive(true, &profile(false, false), BudgetTier::MoveUp);
        let family = DimensionWeights::derive(true, &profile(true, false), BudgetTier::MoveUp);
        assert!(
            weight(&family, Dimension::FamilyFriendly) > weight(&plain, Dimension::FamilyFriendly)
        );
        assert!(weight(&family, Dimension::Safety) > weight(&plain, Dimension::Safety));
        assert!(
            weight(&family, Dimension::EconomicVitality)
                < weight(&plain, Dimension::EconomicVitality)
        );
    }

    #[rstest]
    fn family_focus_without_safety_boosts_housing() {
        let plain = DimensionWeights::derive(false, &profile(false, false), BudgetTier::MoveUp);
        let family = DimensionWeights::derive(false, &profile(true, false), BudgetTier::MoveUp);
        assert!(
            weight(&family, Dimension::HousingStability)
                > weight(&plain, Dimension::HousingStability)
        );
    }

    #[rstest]
    fn growth_focus_raises_economic_vitality() {
        let plain = DimensionWeights::derive(true, &profile(false, false), BudgetTier::MoveUp);
        let growth = DimensionWeights::derive(true, &profile(false, true), BudgetTier::MoveUp);
        assert!(
            weight(&growth, Dimension::EconomicVitality)
                > weight(&plain, Dimension::EconomicVitality)
        );
    }

    #[rstest]
    fn premium_tiers_shift_weight_from_affordability() {
        let move_up = DimensionWeights::derive(true, &profile(false, false), BudgetTier::MoveUp);
        let luxury = DimensionWeights::derive(true, &profile(false, false), BudgetTier::Luxury);
        assert!(
            weight(&luxury, Dimension::Affordability) < weight(&move_up, Dimension::Affordability)
        );
        assert!(
            weight(&luxury, Dimension::BudgetCompatibility)
                > weight(&move_up, Dimension::BudgetCompatibility)
        );
    }

    #[rstest]
    fn affordable_tier_emphasises_affordability() {
        let move_up = DimensionWeights::derive(true, &profile(false, false), BudgetTier::MoveUp);
        let affordable =
            DimensionWeights::derive(true, &profile(false, false), BudgetTier::Affordable);
        assert!(
            weight(&affordable, Dimension::Affordability)
                > weight(&move_up, Dimension::Affordability)
        );
    }

    #[rstest]
    fn composite_is_a_weighted_mean() {
        let scores = ScoreSet {
            affordability: 100.0,
            family_friendly: 0.0,
            economic_vitality: 0.0,
            housing_stability: 0.0,
            budget_compatibility: 0.0,
            safety: Some(100.0),
        };
        let weights =
            DimensionWeights::for_scores(&scores, &profile(false, false), BudgetTier::MoveUp);
        assert!((weights.composite(&scores) - 38.0).abs() < EPSILON);
    }
}
