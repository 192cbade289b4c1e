//! Sub-score dimensions and per-county score sets.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One independent quality dimension scored on `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Dimension {
    /// Home-price-to-income affordability.
    Affordability,
    /// Households with children, income level, and county size.
    FamilyFriendly,
    /// Income versus the state, education, and economic scale.
    EconomicVitality,
    /// Homeownership and home value versus the state.
    HousingStability,
    /// Fit between the county and the buyer's budget tier.
    BudgetCompatibility,
    /// Optional safety reading.
    Safety,
}

impl Dimension {
    /// Every dimension in tagging priority order, safety first.
    pub const ALL: [Self; 6] = [
        Self::Safety,
        Self::Affordability,
        Self::FamilyFriendly,
        Self::EconomicVitality,
        Self::HousingStability,
        Self::BudgetCompatibility,
    ];

    /// Return the dimension as a snake-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Affordability => "affordability",
            Self::FamilyFriendly => "family_friendly",
            Self::EconomicVitality => "economic_vitality",
            Self::HousingStability => "housing_stability",
            Self::BudgetCompatibility => "budget_compatibility",
            Self::Safety => "safety",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-scores for one county.
///
/// The five core dimensions are always present. `safety` is `None` when the
/// county carries no safety reading; the dimension is then excluded from
/// weighting rather than scored as zero.
///
/// # Examples
///
/// ```
/// use county_scout_core::{Dimension, ScoreSet};
///
/// let scores = ScoreSet {
///     affordability: 80.0,
///     family_friendly: 65.0,
///     economic_vitality: 70.0,
///     housing_stability: 90.0,
///     budget_compatibility: 100.0,
///     safety: None,
/// };
/// assert_eq!(scores.get(Dimension::Affordability), Some(80.0));
/// assert_eq!(scores.get(Dimension::Safety), None);
/// assert_eq!(scores.present().count(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreSet {
    /// Affordability score.
    pub affordability: f64,
    /// Family-friendliness score.
    pub family_friendly: f64,
    /// Economic vitality score.
    pub economic_vitality: f64,
    /// Housing stability score.
    pub housing_stability: f64,
    /// Budget compatibility score.
    pub budget_compatibility: f64,
    /// Safety score, absent without a safety reading.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub safety: Option<f64>,
}

impl ScoreSet {
    /// Return the score for `dimension`, or `None` if it is not present.
    #[must_use]
    pub const fn get(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Affordability => Some(self.affordability),
            Dimension::FamilyFriendly => Some(self.family_friendly),
            Dimension::EconomicVitality => Some(self.economic_vitality),
            Dimension::HousingStability => Some(self.housing_stability),
            Dimension::BudgetCompatibility => Some(self.budget_compatibility),
            Dimension::Safety => self.safety,
        }
    }

    /// Whether `dimension` carries a score.
    #[must_use]
    pub const fn has(&self, dimension: Dimension) -> bool {
        self.get(dimension).is_some()
    }

    /// Iterate over present dimensions and their scores.
    pub fn present(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL
            .into_iter()
            .filter_map(|dimension| self.get(dimension).map(|score| (dimension, score)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn safety_is_reported_when_present() {
        let scores = ScoreSet {
            safety: Some(55.0),
            ..ScoreSet::default()
        };
        assert!(scores.has(Dimension::Safety));
        assert_eq!(scores.present().count(), 6);
        assert_eq!(scores.present().next(), Some((Dimension::Safety, 55.0)));
    }

    #[rstest]
    fn dimension_names_are_snake_case() {
        assert_eq!(Dimension::FamilyFriendly.to_string(), "family_friendly");
        assert_eq!(Dimension::BudgetCompatibility.as_str(), "budget_compatibility");
    }
}
