use rust_decimal::Decimal;
use rusty_money::{iso, Money};
use tracing::debug;

/// Formats a decimal amount with the symbol and digit grouping of the given
/// ISO 4217 currency. Formatting is a presentation concern only; the engine
/// itself always returns the numeric decimal value.
///
/// Unknown currency codes fall back to the bare decimal with the code
/// appended, so a bad code can never fail a report.
pub fn format_amount(amount: Decimal, currency_code: &str) -> String {
    match iso::find(currency_code) {
        Some(currency) => Money::from_decimal(amount, currency).to_string(),
        None => {
            debug!("Unknown currency code {}, using plain formatting", currency_code);
            format!("{amount} {currency_code}")
        }
    }
}
