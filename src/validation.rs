// 📐 Shape Layer - Receipt Validation
// Checks a raw JSON value against the receipt grammar, first failure wins

use crate::receipt::{Item, Receipt, RECEIPT_WHITESPACE};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Why a receipt was rejected. `Display` is the reason returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid retailer")]
    Retailer,

    #[error("Invalid purchase date")]
    PurchaseDate,

    #[error("Invalid purchase time")]
    PurchaseTime,

    #[error("Invalid items")]
    Items,

    #[error("Invalid item description")]
    ItemDescription,

    #[error("Invalid item price")]
    ItemPrice,

    #[error("Invalid total")]
    Total,
}

pub type ValidationResult = Result<Receipt, ValidationError>;

// ============================================================================
// FIELD GRAMMAR (compiled once)
// ============================================================================

// Digit, word and whitespace classes are spelled out; regex's \d, \w and \s
// are broader Unicode classes.

/// First and last characters non-whitespace, no line breaks in between
static RETAILER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^[^{ws}](?:[^\n\r\x{{2028}}\x{{2029}}]*[^{ws}])?$",
        ws = RECEIPT_WHITESPACE
    ))
    .expect("Invalid retailer regex")
});

static PURCHASE_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid date regex"));

static PURCHASE_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("Invalid time regex"));

static SHORT_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[A-Za-z0-9_{ws}\-]+$", ws = RECEIPT_WHITESPACE))
        .expect("Invalid description regex")
});

/// Shared by item prices and the receipt total
static AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("Invalid amount regex"));

/// Fetch `key` as a string that matches `pattern`.
///
/// Missing keys, non-string values and non-object parents all fail.
fn matching<'a>(value: &'a Value, key: &str, pattern: &Regex) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty() && pattern.is_match(text))
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validate a raw receipt value.
///
/// Checks run in a fixed order (retailer, purchase date, purchase time, items,
/// each item's description then price, total) and the first failure is
/// returned. On success the checked fields are copied into a [`Receipt`].
pub fn validate(raw: &Value) -> ValidationResult {
    let retailer = matching(raw, "retailer", &RETAILER).ok_or(ValidationError::Retailer)?;

    let purchase_date =
        matching(raw, "purchaseDate", &PURCHASE_DATE).ok_or(ValidationError::PurchaseDate)?;

    let purchase_time =
        matching(raw, "purchaseTime", &PURCHASE_TIME).ok_or(ValidationError::PurchaseTime)?;

    let raw_items = raw
        .get("items")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(ValidationError::Items)?;

    let items = raw_items
        .iter()
        .map(validate_item)
        .collect::<Result<Vec<_>, _>>()?;

    let total = matching(raw, "total", &AMOUNT).ok_or(ValidationError::Total)?;

    Ok(Receipt {
        retailer: retailer.to_string(),
        purchase_date: purchase_date.to_string(),
        purchase_time: purchase_time.to_string(),
        items,
        total: total.to_string(),
    })
}

fn validate_item(raw: &Value) -> Result<Item, ValidationError> {
    let short_description = matching(raw, "shortDescription", &SHORT_DESCRIPTION)
        .ok_or(ValidationError::ItemDescription)?;
    let price = matching(raw, "price", &AMOUNT).ok_or(ValidationError::ItemPrice)?;

    Ok(Item {
        short_description: short_description.to_string(),
        price: price.to_string(),
    })
}

// ============================================================================
// TESTS
// ============================================================================
