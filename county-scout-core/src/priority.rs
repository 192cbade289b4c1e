//! User priority profiles parsed from free-text preferences.
//!
//! Parsing is purely lexical. Each keyword matches at the start of a word, so
//! `"safe"` matches `"safety"` and `"job"` matches `"jobs"`, while `"urban"`
//! does not match inside `"suburban"`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const FAMILY_TERMS: &[&str] = &[
    "family", "families", "children", "kids", "school", "schools", "safety", "safe", "child",
];
const URBAN_TERMS: &[&str] = &["urban", "city", "downtown", "metropolitan"];
const SUBURBAN_TERMS: &[&str] = &["suburban", "suburb", "neighborhood", "good schools", "family"];
const RURAL_TERMS: &[&str] = &["rural", "small town", "country", "quiet"];
const GROWTH_TERMS: &[&str] = &[
    "growth",
    "investment",
    "job",
    "economic",
    "opportunity",
    "tech",
    "development",
    "appreciation",
    "job market",
    "economy",
];

/// Preferred kind of community.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CommunityType {
    /// Dense cities and metropolitan cores.
    Urban,
    /// Suburbs and family neighbourhoods.
    Suburban,
    /// Small towns and the countryside.
    Rural,
    /// No stated preference.
    #[default]
    Unset,
}

impl CommunityType {
    /// Return the community type as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Urban => "urban",
            Self::Suburban => "suburban",
            Self::Rural => "rural",
            Self::Unset => "unset",
        }
    }
}

impl std::fmt::Display for CommunityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured priorities extracted from a buyer's stated preferences.
///
/// Derived once per query and shared read-only across every county.
///
/// # Examples
///
/// ```
/// use county_scout_core::{CommunityType, UserPriorityProfile};
///
/// let profile = UserPriorityProfile::parse("Safe suburb with good schools for our kids");
/// assert!(profile.family_focus);
/// assert!(!profile.growth_focus);
/// assert_eq!(profile.community_type, CommunityType::Suburban);
/// assert!(profile.budget_focus);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserPriorityProfile {
    /// Family, school, or safety priorities were mentioned.
    pub family_focus: bool,
    /// Growth, jobs, or investment priorities were mentioned.
    pub growth_focus: bool,
    /// Preferred community type.
    pub community_type: CommunityType,
    /// Every buyer is treated as cost-sensitive; always `true`.
    pub budget_focus: bool,
}

impl Default for UserPriorityProfile {
    fn default() -> Self {
        Self {
            family_focus: false,
            growth_focus: false,
            community_type: CommunityType::Unset,
            budget_focus: true,
        }
    }
}

impl UserPriorityProfile {
    /// Parse a free-text preference string.
    ///
    /// Empty or whitespace-only text yields the default profile.
    #[must_use]
    pub fn parse(preferences: &str) -> Self {
        let text = Normalised::new(preferences);
        if text.is_empty() {
            return Self::default();
        }
        let community_type = if text.mentions_any(URBAN_TERMS) {
            CommunityType::Urban
        } else if text.mentions_any(SUBURBAN_TERMS) {
            CommunityType::Suburban
        } else if text.mentions_any(RURAL_TERMS) {
            CommunityType::Rural
        } else {
            CommunityType::Unset
        };
        Self {
            family_focus: text.mentions_any(FAMILY_TERMS),
            growth_focus: text.mentions_any(GROWTH_TERMS),
            community_type,
            budget_focus: true,
        }
    }

    /// Parse optional preferences, treating `None` as empty text.
    #[must_use]
    pub fn parse_optional(preferences: Option<&str>) -> Self {
        preferences.map_or_else(Self::default, Self::parse)
    }
}

/// Lowercased text with punctuation collapsed to single spaces.
///
/// A leading space lets every term be matched as `" " + term`, anchoring it
/// to a word start.
struct Normalised(String);

impl Normalised {
    fn new(raw: &str) -> Self {
        let mut text = String::with_capacity(raw.len() + 1);
        for word in raw
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
        {
            text.push(' ');
            text.push_str(&word.to_lowercase());
        }
        Self(text)
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn mentions(&self, term: &str) -> bool {
        self.0.contains(&format!(" {term}"))
    }

    fn mentions_any(&self, terms: &[&str]) -> bool {
        terms.iter().any(|term| self.mentions(term))
    }
}
