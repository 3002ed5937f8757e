use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_amount;

/// The current value of one asset or liability, for display alongside the
/// raw record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemValueDto {
    pub id: i32,
    pub name: String,
    pub value: Decimal,
}

/// A net-worth figure with its breakdown, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetWorthReport {
    pub reference_date: NaiveDate,
    pub currency_code: String,
    pub accounts: Vec<ItemValueDto>,
    pub properties: Vec<ItemValueDto>,
    pub mortgages: Vec<ItemValueDto>,
    pub assets: Decimal,
    pub liabilities: Decimal,
    pub net: Decimal,
}

impl NetWorthReport {
    /// The net-worth figure formatted with the report's currency symbol.
    pub fn formatted_net(&self) -> String {
        format_amount(self.net, &self.currency_code)
    }
}

/// One line of a booking draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingLineDto {
    pub line_number: i32,
    pub ledger_account_id: i32,
    pub debit: Decimal,
    pub credit: Decimal,
    pub currency_code: String,
    pub description: String,
}

/// A generated booking as presented to the user for review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingDraft {
    pub source_line_id: Option<i32>,
    pub date: NaiveDate,
    pub reference: String,
    pub rule_id: Option<i32>,
    pub requires_review: bool,
    /// False when the debit and credit sums differ; such drafts are shown
    /// highlighted until the user completes the pending line.
    pub balanced: bool,
    pub lines: Vec<BookingLineDto>,
}
