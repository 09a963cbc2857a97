// 🧾 Receipt Model - Accepted receipts and their scores
// A Receipt only exists once the validator has accepted it

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// RECEIPT
// ============================================================================

/// A receipt that passed validation.
///
/// Every field keeps the exact text that was submitted. Numbers stay strings
/// so the scorer reads the same digits the validator checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

impl Receipt {
    /// Day of month taken from the literal `DD` digits of `purchase_date`
    pub fn purchase_day(&self) -> Option<u32> {
        self.purchase_date.get(8..10)?.parse().ok()
    }

    /// Hour taken from the literal `HH` digits of `purchase_time`
    pub fn purchase_hour(&self) -> Option<u32> {
        self.purchase_time.get(0..2)?.parse().ok()
    }
}

// ============================================================================
// WHITESPACE
// ============================================================================

/// Whitespace as receipts define it: Unicode space separators plus tab,
/// line breaks and the byte order mark. NEL (U+0085) is not included.
pub const RECEIPT_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

pub fn is_receipt_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

// ============================================================================
// MONEY
// ============================================================================

/// Amount parsed from a `digits.dd` string, held as integer cents.
///
/// Whole parts too large for `u128` saturate; the fractional cents are always
/// exact since they come straight from the two trailing digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money {
    cents: u128,
    fraction: u8,
}

impl Money {
    /// Parse `digits.dd`. Returns None for anything else.
    pub fn parse(text: &str) -> Option<Money> {
        let (whole, fraction) = text.split_once('.')?;
        if whole.is_empty()
            || fraction.len() != 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let fraction: u8 = fraction.parse().ok()?;
        let whole = whole.bytes().fold(0u128, |acc, b| {
            acc.saturating_mul(10).saturating_add(u128::from(b - b'0'))
        });

        Some(Money {
            cents: whole.saturating_mul(100).saturating_add(u128::from(fraction)),
            fraction,
        })
    }

    pub fn cents(&self) -> u128 {
        self.cents
    }

    /// The two digits after the decimal point, 0..=99
    pub fn fraction_cents(&self) -> u8 {
        self.fraction
    }

    pub fn is_whole(&self) -> bool {
        self.fraction == 0
    }

    /// True when the amount is a multiple of 0.25
    pub fn is_quarter_multiple(&self) -> bool {
        self.fraction % 25 == 0
    }

    /// `ceil(amount * 0.2)` in whole points: cents / 500 rounded up
    pub fn fifth_rounded_up(&self) -> u64 {
        let points = self.cents / 500 + u128::from(self.cents % 500 != 0);
        u64::try_from(points).unwrap_or(u64::MAX)
    }
}

// ============================================================================
// SCORED RECEIPT
// ============================================================================

/// Receipt stored together with its id and points.
///
/// Built only by a store's `put`, so the three parts always appear together.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredReceipt {
    pub id: String,
    pub receipt: Receipt,
    pub points: u64,
    pub processed_at: DateTime<Utc>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt_with(date: &str, time: &str) -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items: vec![Item {
                short_description: "Pepsi - 12-oz".to_string(),
                price: "1.25".to_string(),
            }],
            total: "1.25".to_string(),
        }
    }

    #[test]
    fn test_purchase_day_reads_literal_digits() {
        assert_eq!(receipt_with("2022-01-01", "13:01").purchase_day(), Some(1));
        assert_eq!(receipt_with("2022-03-20", "13:01").purchase_day(), Some(20));
        // Pattern-valid but not a calendar date
        assert_eq!(receipt_with("2023-13-99", "13:01").purchase_day(), Some(99));
    }

    #[test]
    fn test_purchase_hour() {
        assert_eq!(receipt_with("2022-01-01", "14:33").purchase_hour(), Some(14));
        assert_eq!(receipt_with("2022-01-01", "09:00").purchase_hour(), Some(9));
    }

    #[test]
    fn test_money_parse() {
        let money = Money::parse("6.49").unwrap();
        assert_eq!(money.cents(), 649);
        assert_eq!(money.fraction_cents(), 49);
        assert!(!money.is_whole());

        assert!(Money::parse("10.5").is_none());
        assert!(Money::parse(".50").is_none());
        assert!(Money::parse("1,00").is_none());
        assert!(Money::parse("-1.00").is_none());
    }

    #[test]
    fn test_money_round_and_quarter() {
        assert!(Money::parse("9.00").unwrap().is_whole());
        assert!(Money::parse("9.00").unwrap().is_quarter_multiple());
        assert!(Money::parse("9.75").unwrap().is_quarter_multiple());
        assert!(!Money::parse("9.75").unwrap().is_whole());
        assert!(!Money::parse("6.49").unwrap().is_quarter_multiple());
    }

    #[test]
    fn test_fifth_rounded_up() {
        // 12.25 * 0.2 = 2.45 -> 3
        assert_eq!(Money::parse("12.25").unwrap().fifth_rounded_up(), 3);
        // 12.00 * 0.2 = 2.4 -> 3
        assert_eq!(Money::parse("12.00").unwrap().fifth_rounded_up(), 3);
        // 35.00 * 0.2 = 7 exactly
        assert_eq!(Money::parse("35.00").unwrap().fifth_rounded_up(), 7);
        assert_eq!(Money::parse("0.00").unwrap().fifth_rounded_up(), 0);
        assert_eq!(Money::parse("0.01").unwrap().fifth_rounded_up(), 1);
    }

    #[test]
    fn test_huge_amount_saturates() {
        let digits = "9".repeat(60);
        let money = Money::parse(&format!("{}.50", digits)).unwrap();
        assert_eq!(money.fraction_cents(), 50);
        assert_eq!(money.fifth_rounded_up(), u64::MAX);
    }
}
