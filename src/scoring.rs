// 🏅 Scoring Rules - Points as a pure function of the receipt
// Every rule is evaluated on its own and the contributions are added up

use crate::receipt::{is_receipt_whitespace, Money, Receipt};
use serde::Serialize;

// ============================================================================
// RULE DEFINITION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    /// One point per alphanumeric character in the retailer name
    RetailerName,

    /// 50 points when the total has no cents
    RoundTotal,

    /// 25 points when the total is a multiple of 0.25
    QuarterTotal,

    /// 5 points for every two items
    ItemPairs,

    /// ceil(price * 0.2) for each item whose trimmed description length is a multiple of 3
    DescriptionLength,

    /// 6 points when the purchase day is odd
    OddPurchaseDay,

    /// 10 points when purchased from 14:00 up to (not including) 16:00
    AfternoonPurchase,
}

impl ScoringRule {
    /// All rules in evaluation order
    pub const ALL: [ScoringRule; 7] = [
        ScoringRule::RetailerName,
        ScoringRule::RoundTotal,
        ScoringRule::QuarterTotal,
        ScoringRule::ItemPairs,
        ScoringRule::DescriptionLength,
        ScoringRule::OddPurchaseDay,
        ScoringRule::AfternoonPurchase,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScoringRule::RetailerName => "Retailer name",
            ScoringRule::RoundTotal => "Round total",
            ScoringRule::QuarterTotal => "Quarter total",
            ScoringRule::ItemPairs => "Item pairs",
            ScoringRule::DescriptionLength => "Description length",
            ScoringRule::OddPurchaseDay => "Odd purchase day",
            ScoringRule::AfternoonPurchase => "Afternoon purchase",
        }
    }

    /// Points this rule awards for `receipt`
    pub fn points(&self, receipt: &Receipt) -> u64 {
        self.evaluate(receipt).points
    }

    /// Points plus a short note on what the rule saw
    pub fn evaluate(&self, receipt: &Receipt) -> RuleContribution {
        let (points, detail) = match self {
            ScoringRule::RetailerName => {
                let count = receipt
                    .retailer
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .count();
                (count as u64, format!("{} alphanumeric characters", count))
            }

            ScoringRule::RoundTotal => match Money::parse(&receipt.total) {
                Some(total) if total.is_whole() => {
                    (50, format!("total {} has no cents", receipt.total))
                }
                _ => (0, format!("total {} has cents", receipt.total)),
            },

            ScoringRule::QuarterTotal => match Money::parse(&receipt.total) {
                Some(total) if total.is_quarter_multiple() => {
                    (25, format!("total {} is a multiple of 0.25", receipt.total))
                }
                _ => (0, format!("total {} is not a multiple of 0.25", receipt.total)),
            },

            ScoringRule::ItemPairs => {
                let pairs = receipt.items.len() / 2;
                (
                    pairs as u64 * 5,
                    format!("{} pairs from {} items", pairs, receipt.items.len()),
                )
            }

            ScoringRule::DescriptionLength => {
                let matching: Vec<_> = receipt
                    .items
                    .iter()
                    .filter(|item| trimmed_len(&item.short_description) % 3 == 0)
                    .collect();
                let points = matching
                    .iter()
                    .filter_map(|item| Money::parse(&item.price))
                    .fold(0u64, |acc, price| acc.saturating_add(price.fifth_rounded_up()));
                (
                    points,
                    format!(
                        "{} of {} descriptions have a length divisible by 3",
                        matching.len(),
                        receipt.items.len()
                    ),
                )
            }

            ScoringRule::OddPurchaseDay => {
                let digits = receipt.purchase_date.get(8..10).unwrap_or_default();
                match receipt.purchase_day() {
                    Some(day) if day % 2 == 1 => (6, format!("day {} is odd", digits)),
                    _ => (0, format!("day {} is even", digits)),
                }
            }

            ScoringRule::AfternoonPurchase => {
                let digits = receipt.purchase_time.get(0..2).unwrap_or_default();
                match receipt.purchase_hour() {
                    Some(hour) if (14..16).contains(&hour) => {
                        (10, format!("hour {} in 14:00-16:00", digits))
                    }
                    _ => (0, format!("hour {} outside 14:00-16:00", digits)),
                }
            }
        };

        RuleContribution {
            rule: *self,
            points,
            detail,
        }
    }
}

/// Character count after trimming the same whitespace the validator allows
fn trimmed_len(description: &str) -> usize {
    description.trim_matches(is_receipt_whitespace).chars().count()
}

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RuleContribution {
    pub rule: ScoringRule,
    pub points: u64,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub points: u64,
    pub rules: Vec<RuleContribution>,
}

impl ScoreBreakdown {
    /// Rules that awarded something
    pub fn awarded(&self) -> impl Iterator<Item = &RuleContribution> {
        self.rules.iter().filter(|c| c.points > 0)
    }
}

// ============================================================================
// SCORER
// ============================================================================

/// Score a receipt, keeping each rule's contribution.
///
/// Callers must validate first; fields that do not parse simply award nothing.
pub fn score_breakdown(receipt: &Receipt) -> ScoreBreakdown {
    let rules: Vec<RuleContribution> = ScoringRule::ALL
        .iter()
        .map(|rule| rule.evaluate(receipt))
        .collect();

    let points = rules
        .iter()
        .fold(0u64, |acc, c| acc.saturating_add(c.points));

    ScoreBreakdown { points, rules }
}

/// Total points for a validated receipt
pub fn score(receipt: &Receipt) -> u64 {
    score_breakdown(receipt).points
}

// ============================================================================
// TESTS
// ============================================================================
