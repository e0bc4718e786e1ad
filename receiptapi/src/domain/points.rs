//! Points scoring for receipts.
//!
//! A receipt earns points from a fixed set of rules. Each rule is exposed as
//! its own function so a single contribution can be inspected, and [`score`]
//! sums all of them. Any input that fails to parse aborts the whole score.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;
use tracing::debug;

use super::receipts::{Item, Receipt};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Errors raised while scoring a receipt.
///
/// Each variant carries the offending input verbatim.
///
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("{field} {value} is not a valid dollar amount")]
    InvalidAmount { field: &'static str, value: String },

    #[error("purchase date {0} is not a valid date")]
    InvalidDate(String),

    #[error("purchase time {0} is not a valid 24 hour time")]
    InvalidTime(String),
}

/// Computes the total points for a receipt.
///
/// Rules are evaluated in field order and the first parse failure is
/// returned without evaluating the rest.
///
pub fn score(receipt: &Receipt) -> Result<u64, ScoringError> {
    let retailer = retailer_points(&receipt.retailer);

    let total = parse_amount("receipt total", &receipt.total)?;
    let round_dollar = round_dollar_points(&receipt.total);
    let quarter_multiple = quarter_multiple_points(total);

    let item_pairs = item_pair_points(receipt.items.len());

    let mut descriptions: u64 = 0;
    for item in &receipt.items {
        descriptions = descriptions.saturating_add(description_points(item)?);
    }

    let odd_day = odd_day_points(&receipt.purchase_date)?;
    let afternoon = afternoon_points(&receipt.purchase_time)?;

    debug!(
        retailer,
        round_dollar,
        quarter_multiple,
        item_pairs,
        descriptions,
        odd_day,
        afternoon,
        "scored receipt"
    );

    Ok([
        retailer,
        round_dollar,
        quarter_multiple,
        item_pairs,
        descriptions,
        odd_day,
        afternoon,
    ]
    .into_iter()
    .fold(0u64, u64::saturating_add))
}

/// One point for every ASCII letter or digit in the retailer name.
///
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// 50 points if the total text ends in `00`.
///
/// This inspects the literal text, so `"500"` qualifies as well as `"5.00"`.
///
pub fn round_dollar_points(total: &str) -> u64 {
    if total.ends_with("00") {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// 25 points if the total, in cents rounded up, is a multiple of 25.
///
pub fn quarter_multiple_points(total: f64) -> u64 {
    let cents = (total * 100.0).ceil() as u64;
    if cents % 25 == 0 {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// 5 points for every complete pair of items.
///
pub fn item_pair_points(item_count: usize) -> u64 {
    ITEM_PAIR_POINTS * (item_count / 2) as u64
}

/// `ceil(price * 0.2)` points if the trimmed description length is a
/// multiple of 3.
///
/// Only spaces are trimmed and the length is counted in bytes. An empty
/// description has length 0 and therefore qualifies. The price is only
/// parsed for qualifying items.
///
pub fn description_points(item: &Item) -> Result<u64, ScoringError> {
    if item.short_description.trim_matches(' ').len() % 3 != 0 {
        return Ok(0);
    }

    let price = parse_amount("item price", &item.price)?;
    Ok((price * DESCRIPTION_PRICE_MULTIPLIER).ceil() as u64)
}

/// 6 points if the day of the `YYYY-MM-DD` purchase date is odd.
///
pub fn odd_day_points(purchase_date: &str) -> Result<u64, ScoringError> {
    let date = parse_date(purchase_date)?;
    Ok(if date.day() % 2 == 1 { ODD_DAY_POINTS } else { 0 })
}

/// 10 points if the purchase time is after 14:00 and before 16:00.
///
/// The hour is read from the first two characters and the minute from the
/// last two. `14:00` itself does not qualify.
///
pub fn afternoon_points(purchase_time: &str) -> Result<u64, ScoringError> {
    let (hour, minute) = parse_time(purchase_time)?;
    let qualifies = (hour == 14 && minute > 0) || (hour > 14 && hour < 16);
    Ok(if qualifies { AFTERNOON_POINTS } else { 0 })
}

/// Parses a decimal dollar amount made of ASCII digits and at most one `.`.
///
/// The value is read at single precision and widened, which is what the
/// rounding rules are calibrated against.
///
pub fn parse_amount(field: &'static str, value: &str) -> Result<f64, ScoringError> {
    let invalid = || ScoringError::InvalidAmount {
        field,
        value: value.to_string(),
    };

    let well_formed = value.bytes().any(|b| b.is_ascii_digit())
        && value.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && value.bytes().filter(|&b| b == b'.').count() <= 1;
    if !well_formed {
        return Err(invalid());
    }

    let amount = value.parse::<f32>().map_err(|_| invalid())?;
    if !amount.is_finite() {
        return Err(invalid());
    }

    Ok(f64::from(amount))
}

fn parse_date(value: &str) -> Result<NaiveDate, ScoringError> {
    let invalid = || ScoringError::InvalidDate(value.to_string());

    // chrono accepts variable-width fields, so pin the shape first
    let shaped = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())
}

fn parse_time(value: &str) -> Result<(u32, u32), ScoringError> {
    let invalid = || ScoringError::InvalidTime(value.to_string());

    let hour = value.get(..2).and_then(two_digits).ok_or_else(invalid)?;
    let minute = value
        .len()
        .checked_sub(2)
        .and_then(|start| value.get(start..))
        .and_then(two_digits)
        .ok_or_else(invalid)?;

    Ok((hour, minute))
}

fn two_digits(s: &str) -> Option<u32> {
    if s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}
