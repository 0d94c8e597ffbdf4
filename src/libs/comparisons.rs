//! Cost levels and everyday-item comparisons for a meeting's cost.

use std::fmt;

/// Cost thresholds in cents: below $500 is low, below $2,000 medium.
pub const LOW_COST_LIMIT: u64 = 50_000;
pub const MEDIUM_COST_LIMIT: u64 = 200_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostLevel {
    Low,
    Medium,
    High,
}

impl CostLevel {
    pub fn for_cost(cost_cents: u64) -> Self {
        if cost_cents < LOW_COST_LIMIT {
            CostLevel::Low
        } else if cost_cents < MEDIUM_COST_LIMIT {
            CostLevel::Medium
        } else {
            CostLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CostLevel::Low => "low",
            CostLevel::Medium => "medium",
            CostLevel::High => "high",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CostLevel::Low => "💰",
            CostLevel::Medium => "🔥",
            CostLevel::High => "🔥🔥",
        }
    }
}

impl fmt::Display for CostLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CostComparison {
    pub unit_cost_cents: u64,
    pub singular: &'static str,
    pub plural: &'static str,
    pub emoji: &'static str,
}

pub const COST_COMPARISONS: [CostComparison; 5] = [
    CostComparison { unit_cost_cents: 500, singular: "cup of coffee", plural: "cups of coffee", emoji: "☕" },
    CostComparison { unit_cost_cents: 1500, singular: "pizza", plural: "pizzas", emoji: "🍕" },
    CostComparison { unit_cost_cents: 1000, singular: "Spotify subscription", plural: "Spotify subscriptions", emoji: "🎵" },
    CostComparison { unit_cost_cents: 2500, singular: "support ticket", plural: "support tickets", emoji: "🎫" },
    CostComparison { unit_cost_cents: 5000, singular: "hour of dev time", plural: "hours of dev time", emoji: "⌨️" },
];

impl CostComparison {
    fn describe(&self, count: u64) -> String {
        let label = if count == 1 { self.singular } else { self.plural };
        format!("{} {} {}", count, label, self.emoji)
    }
}

/// Picks the most expensive item that fits between 1 and 1000 times into the cost.
///
/// Falls back to coffee when no item lands in that range.
pub fn cost_comparison(cost_cents: u64) -> String {
    let mut by_price = COST_COMPARISONS;
    by_price.sort_by(|a, b| b.unit_cost_cents.cmp(&a.unit_cost_cents));

    for comparison in &by_price {
        let count = cost_cents / comparison.unit_cost_cents;
        if (1..=1000).contains(&count) {
            return comparison.describe(count);
        }
    }

    let coffee = &COST_COMPARISONS[0];
    format!("{} {} {}", cost_cents / coffee.unit_cost_cents, coffee.plural, coffee.emoji)
}

/// Every comparison that fits at least once, in declaration order.
pub fn all_comparisons(cost_cents: u64) -> Vec<(String, u64)> {
    COST_COMPARISONS
        .iter()
        .map(|c| (c, cost_cents / c.unit_cost_cents))
        .filter(|(_, count)| *count > 0)
        .map(|(c, count)| (c.describe(count), count))
        .collect()
}
