//! Budget tiers.
//!
//! A tier is a pure function of the numeric budget. Every component that
//! needs one recomputes it with [`BudgetTier::from_budget`], so two calls with
//! the same budget always agree.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lower bound of the `move_up` tier in USD.
pub const MOVE_UP_THRESHOLD: f64 = 500_000.0;
/// Lower bound of the `luxury` tier in USD.
pub const LUXURY_THRESHOLD: f64 = 1_000_000.0;
/// Lower bound of the `ultra_luxury` tier in USD.
pub const ULTRA_LUXURY_THRESHOLD: f64 = 5_000_000.0;

/// Ordered budget brackets.
///
/// # Examples
///
/// ```
/// use county_scout_core::BudgetTier;
///
/// assert_eq!(BudgetTier::from_budget(150_000.0), BudgetTier::Affordable);
/// assert_eq!(BudgetTier::from_budget(500_000.0), BudgetTier::MoveUp);
/// assert_eq!(BudgetTier::from_budget(6_000_000.0), BudgetTier::UltraLuxury);
/// assert!(BudgetTier::Luxury > BudgetTier::MoveUp);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BudgetTier {
    /// Below $500,000.
    Affordable,
    /// $500,000 up to $1,000,000.
    MoveUp,
    /// $1,000,000 up to $5,000,000.
    Luxury,
    /// $5,000,000 and above.
    UltraLuxury,
}

impl BudgetTier {
    /// Every tier in ascending order.
    pub const ALL: [Self; 4] = [Self::Affordable, Self::MoveUp, Self::Luxury, Self::UltraLuxury];

    /// Classify a budget in USD.
    ///
    /// Non-finite or negative budgets fall into [`BudgetTier::Affordable`];
    /// callers that need to reject them validate before classifying.
    #[must_use]
    pub fn from_budget(budget: f64) -> Self {
        if budget >= ULTRA_LUXURY_THRESHOLD {
            Self::UltraLuxury
        } else if budget >= LUXURY_THRESHOLD {
            Self::Luxury
        } else if budget >= MOVE_UP_THRESHOLD {
            Self::MoveUp
        } else {
            Self::Affordable
        }
    }

    /// Whether the tier is `luxury` or `ultra_luxury`.
    #[must_use]
    pub const fn is_premium(self) -> bool {
        matches!(self, Self::Luxury | Self::UltraLuxury)
    }

    /// Return the tier as a snake-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Affordable => "affordable",
            Self::MoveUp => "move_up",
            Self::Luxury => "luxury",
            Self::UltraLuxury => "ultra_luxury",
        }
    }

    /// Human-readable market description.
    #[must_use]
    pub const fn market_label(self) -> &'static str {
        match self {
            Self::Affordable => "affordable starter-home market",
            Self::MoveUp => "move-up family market",
            Self::Luxury => "luxury market",
            Self::UltraLuxury => "ultra-luxury estate market",
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "affordable" => Ok(Self::Affordable),
            "move_up" => Ok(Self::MoveUp),
            "luxury" => Ok(Self::Luxury),
            "ultra_luxury" => Ok(Self::UltraLuxury),
            _ => Err(format!("unknown budget tier '{s}'")),
        }
    }
}
