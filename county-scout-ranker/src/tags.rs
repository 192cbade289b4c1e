//! Presentation tags derived from a county's scores.
//!
//! Tags never feed back into scoring; they only describe a result.

use county_scout_core::{County, Dimension, ScoreSet};
use serde::{Deserialize, Serialize};

/// Score at or above which a boolean tag is set.
pub const TAG_THRESHOLD: f64 = 70.0;

const FALLBACK_FEATURE: &str = "Balanced community";

/// Descending score cut-offs paired with the feature text they unlock.
type Feature = (f64, &'static str);

const fn notable_features(dimension: Dimension) -> &'static [Feature] {
    match dimension {
        Dimension::Safety => &[
            (90.0, "Exceptionally safe community"),
            (75.0, "Very safe neighborhood"),
        ],
        Dimension::Affordability => &[
            (90.0, "Exceptional home value"),
            (80.0, "Great affordability"),
        ],
        Dimension::FamilyFriendly => &[
            (85.0, "Excellent for families"),
            (70.0, "Family-friendly community"),
        ],
        Dimension::EconomicVitality => &[
            (85.0, "Strong local economy"),
            (70.0, "Good job market"),
        ],
        Dimension::HousingStability => &[(80.0, "Stable housing market")],
        Dimension::BudgetCompatibility => &[
            (85.0, "Perfect budget match"),
            (70.0, "Good budget fit"),
        ],
    }
}

const LIFESTYLE_PHRASES: [(Dimension, Feature, Feature); 4] = [
    (
        Dimension::Affordability,
        (80.0, "excellent affordability"),
        (60.0, "good value"),
    ),
    (
        Dimension::FamilyFriendly,
        (80.0, "family-oriented community"),
        (60.0, "family-friendly"),
    ),
    (
        Dimension::EconomicVitality,
        (80.0, "strong local economy"),
        (60.0, "stable employment opportunities"),
    ),
    (
        Dimension::Safety,
        (75.0, "very safe community"),
        (60.0, "safe neighborhood"),
    ),
];

/// Convenience flags and descriptions for one ranked county.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountyTags {
    /// Affordability reached [`TAG_THRESHOLD`].
    pub budget_friendly: bool,
    /// Family friendliness reached [`TAG_THRESHOLD`].
    pub family_oriented: bool,
    /// Economic vitality reached [`TAG_THRESHOLD`].
    pub economic_growth: bool,
    /// Housing stability reached [`TAG_THRESHOLD`].
    pub stable_housing: bool,
    /// Budget compatibility reached [`TAG_THRESHOLD`].
    pub tier_match: bool,
    /// Safety reached [`TAG_THRESHOLD`]; absent without a safety reading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_community: Option<bool>,
    /// Homeownership rate, when it could be computed.
    pub homeownership_rate: Option<f64>,
    /// The single most notable strength.
    pub notable_feature: String,
    /// Short lifestyle description, empty when nothing stands out.
    pub lifestyle: String,
}

impl CountyTags {
    /// Tag `county` from its `scores`.
    ///
    /// # Examples
    ///
    /// ```
    /// use county_scout_core::{County, CountyRecord, ScoreSet};
    /// use county_scout_ranker::CountyTags;
    ///
    /// let county = County::from_record(CountyRecord::default());
    /// let scores = ScoreSet {
    ///     affordability: 92.0,
    ///     safety: Some(60.0),
    ///     ..ScoreSet::default()
    /// };
    /// let tags = CountyTags::derive(&county, &scores);
    /// assert!(tags.budget_friendly);
    /// assert_eq!(tags.safe_community, Some(false));
    /// assert_eq!(tags.notable_feature, "Exceptional home value");
    /// assert_eq!(tags.lifestyle, "excellent affordability; safe neighborhood");
    /// ```
    #[must_use]
    pub fn derive(county: &County, scores: &ScoreSet) -> Self {
        Self {
            budget_friendly: scores.affordability >= TAG_THRESHOLD,
            family_oriented: scores.family_friendly >= TAG_THRESHOLD,
            economic_growth: scores.economic_vitality >= TAG_THRESHOLD,
            stable_housing: scores.housing_stability >= TAG_THRESHOLD,
            tier_match: scores.budget_compatibility >= TAG_THRESHOLD,
            safe_community: scores.safety.map(|safety| safety >= TAG_THRESHOLD),
            homeownership_rate: county.metrics.homeownership_rate,
            notable_feature: notable_feature(scores).to_owned(),
            lifestyle: lifestyle(scores),
        }
    }
}

/// First qualifying feature, checking dimensions in [`Dimension::ALL`] order.
fn notable_feature(scores: &ScoreSet) -> &'static str {
    scores
        .present()
        .find_map(|(dimension, score)| {
            notable_features(dimension)
                .iter()
                .find(|(cut_off, _)| score >= *cut_off)
                .map(|(_, text)| *text)
        })
        .unwrap_or(FALLBACK_FEATURE)
}

fn lifestyle(scores: &ScoreSet) -> String {
    LIFESTYLE_PHRASES
        .iter()
        .filter_map(|(dimension, (high, strong), (low, mild))| {
            let score = scores.get(*dimension)?;
            if score >= *high {
                Some(*strong)
            } else if score >= *low {
                Some(*mild)
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
