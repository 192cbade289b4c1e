//! Property-based tests for the core leaf components.
//!
//! # Invariants tested
//!
//! - **Rates stay in range:** derived percentages never leave `0..=100`.
//! - **Tier ordering:** a larger budget never lands in a lower tier.
//! - **Median bounds:** every state median lies between the smallest and
//!   largest positive county value.
//! - **Parsing is total:** any text parses, and `budget_focus` is always set.

use county_scout_core::{BudgetTier, County, CountyRecord, StateMedians, UserPriorityProfile};
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = CountyRecord> {
    (
        0_u64..5_000_000,
        0_u64..300_000,
        0_u64..4_000_000,
        0_u64..1_000_000,
        0_u64..1_000_000,
        0_u64..1_000_000,
        0_u64..1_000_000,
    )
        .prop_map(
            |(population, income, home_value, occupied, owners, adults, degrees)| CountyRecord {
                name: format!("County {population}"),
                population,
                median_household_income: income,
                median_home_value: home_value,
                total_occupied_households: occupied,
                owner_occupied_households: owners,
                adults_25_plus: adults,
                bachelor_plus_count: degrees.min(adults),
                ..CountyRecord::default()
            },
        )
}

fn tier_rank(tier: BudgetTier) -> usize {
    BudgetTier::ALL
        .iter()
        .position(|candidate| *candidate == tier)
        .expect("every tier is listed")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: derived rates are percentages or undefined.
    #[test]
    fn rates_stay_in_range(record in record_strategy()) {
        let county = County::from_record(record);
        prop_assert!((0.0..=100.0).contains(&county.metrics.college_degree_rate));
        if let Some(rate) = county.metrics.homeownership_rate {
            prop_assert!((0.0..=100.0).contains(&rate));
        }
    }

    /// Property: tiers are monotonic in the budget.
    #[test]
    fn tiers_are_monotonic(budget in 1.0_f64..10_000_000.0, raise in 0.0_f64..5_000_000.0) {
        let lower = BudgetTier::from_budget(budget);
        let higher = BudgetTier::from_budget(budget + raise);
        prop_assert!(tier_rank(higher) >= tier_rank(lower));
    }

    /// Property: medians lie within the positive values they summarise.
    #[test]
    fn medians_are_bounded(records in prop::collection::vec(record_strategy(), 0..40)) {
        let counties: Vec<County> = records.into_iter().map(County::from_record).collect();
        let medians = StateMedians::compute(&counties);
        let incomes: Vec<f64> = counties
            .iter()
            .map(|county| county.record.median_household_income as f64)
            .filter(|income| *income > 0.0)
            .collect();
        if incomes.is_empty() {
            prop_assert_eq!(medians.income, 0.0);
        } else {
            let low = incomes.iter().copied().fold(f64::INFINITY, f64::min);
            let high = incomes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(medians.income >= low && medians.income <= high);
        }
    }

    /// Property: parsing never fails and always marks the buyer cost-sensitive.
    #[test]
    fn parsing_is_total(text in ".{0,80}") {
        let profile = UserPriorityProfile::parse(&text);
        prop_assert!(profile.budget_focus);
    }
}
