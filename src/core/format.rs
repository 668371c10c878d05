//! Printed forms of amounts and dates.

use chrono::{Days, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::TemplateError;

/// Number of decimal places every amount, rate and quantity is printed with.
pub const AMOUNT_DECIMALS: u32 = 2;

/// Format a value with exactly two decimal places.
///
/// Midpoints round away from zero (`2.345` → `"2.35"`, `-2.345` → `"-2.35"`).
/// Values too large to carry two decimals inside a [`Decimal`] mantissa are
/// rejected rather than printed with a truncated fraction.
pub fn format_amount(value: Decimal) -> Result<String, TemplateError> {
    let mut rounded =
        value.round_dp_with_strategy(AMOUNT_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(AMOUNT_DECIMALS);
    if rounded.scale() != AMOUNT_DECIMALS {
        return Err(TemplateError::formatting(
            "amount",
            format!("{value} cannot be represented with {AMOUNT_DECIMALS} decimal places"),
        ));
    }
    Ok(rounded.to_string())
}

/// Format a date as `DD.MM.YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// The date `days` calendar days after `date`.
pub fn due_date_from(date: NaiveDate, days: u64) -> Result<NaiveDate, TemplateError> {
    date.checked_add_days(Days::new(days)).ok_or_else(|| {
        TemplateError::formatting("date", format!("{date} + {days} days is out of range"))
    })
}
