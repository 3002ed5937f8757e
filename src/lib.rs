//! finbook ties the engine crates together: it defines the JSON snapshot
//! format the CLI consumes and converts engine results into the transport
//! DTOs from `common`.

pub mod cli;

use chrono::{NaiveDate, NaiveDateTime};
use common::{BookingDraft, BookingLineDto, ItemValueDto, NetWorthReport};
use model::entities::{
    account, booking_rule, ledger_account, mortgage, property, property_valuation,
    transaction_line,
};
use serde::{Deserialize, Serialize};

/// A full in-memory snapshot of the user's records, as loaded from a JSON
/// file. This is the plain-data contract through which the engine consumes
/// its collaborators' state; how the records got there (imports, forms,
/// persistence) is not this crate's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// The ledger account imported lines post their own-account side to.
    pub own_ledger_account_id: i32,
    #[serde(default)]
    pub ledger_accounts: Vec<ledger_account::Model>,
    #[serde(default)]
    pub accounts: Vec<account::Model>,
    #[serde(default)]
    pub properties: Vec<property::Model>,
    #[serde(default)]
    pub valuations: Vec<property_valuation::Model>,
    #[serde(default)]
    pub mortgages: Vec<mortgage::Model>,
    #[serde(default)]
    pub rules: Vec<booking_rule::Model>,
    #[serde(default)]
    pub lines: Vec<transaction_line::Model>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Runs every imported line in the snapshot through the rule engine and
/// returns the generated booking drafts. Unmatched lines yield a draft
/// with no contra lines so the user can complete them by hand.
pub fn classify_snapshot(snapshot: &Snapshot, created_at: NaiveDateTime) -> Vec<BookingDraft> {
    snapshot
        .lines
        .iter()
        .map(|line| {
            let matched = compute::booking::matcher::find_match(line, &snapshot.rules);
            let (booking, lines) = compute::booking::builder::build_booking(
                line,
                matched,
                snapshot.own_ledger_account_id,
                created_at,
            );
            BookingDraft {
                source_line_id: booking.source_line_id,
                date: booking.date,
                reference: booking.reference,
                rule_id: matched.map(|r| r.id),
                requires_review: booking.requires_review,
                balanced: compute::booking::builder::is_balanced(&lines),
                lines: lines
                    .into_iter()
                    .map(|l| BookingLineDto {
                        line_number: l.line_number,
                        ledger_account_id: l.ledger_account_id,
                        debit: l.debit,
                        credit: l.credit,
                        currency_code: l.currency_code,
                        description: l.description,
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Computes the snapshot's net worth at `today` and wraps it in the
/// transport report, including the currency used for formatting.
pub fn net_worth_report(
    snapshot: &Snapshot,
    today: NaiveDate,
    currency_code: &str,
) -> compute::error::Result<NetWorthReport> {
    let computed = compute::net_worth::compute_net_worth(
        &snapshot.accounts,
        &snapshot.properties,
        &snapshot.valuations,
        &snapshot.mortgages,
        today,
    )?;

    let to_dto = |items: Vec<compute::net_worth::ItemValue>| {
        items
            .into_iter()
            .map(|i| ItemValueDto {
                id: i.id,
                name: i.name,
                value: i.value,
            })
            .collect()
    };

    Ok(NetWorthReport {
        reference_date: computed.reference_date,
        currency_code: currency_code.to_string(),
        accounts: to_dto(computed.accounts),
        properties: to_dto(computed.properties),
        mortgages: to_dto(computed.mortgages),
        assets: computed.assets,
        liabilities: computed.liabilities,
        net: computed.net,
    })
}
