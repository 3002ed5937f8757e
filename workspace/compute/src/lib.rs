pub mod booking;
pub mod error;
pub mod mortgage;
pub mod net_worth;
pub mod valuation;

use chrono::NaiveDateTime;
use model::entities::booking_rule;
use model::entities::{booking as booking_entity, booking_line, transaction_line};

use booking::{builder, matcher};

/// The outcome of running one transaction line through the rule engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub line_id: i32,
    /// The rule that matched, if any.
    pub rule_id: Option<i32>,
    /// The generated booking draft with its lines. `None` when no rule
    /// matched: the line stays unbooked and is surfaced to the user as a
    /// manual-action item by the calling layer.
    pub booking: Option<(booking_entity::Model, Vec<booking_line::Model>)>,
}

/// Runs a batch of imported lines through the rule engine and builds a
/// booking draft for every line that matched a rule.
///
/// Classification is a pure per-line computation; lines never influence
/// each other and the whole batch always completes with a best-effort
/// result.
pub fn classify_and_book(
    lines: &[transaction_line::Model],
    rules: &[booking_rule::Model],
    own_ledger_account_id: i32,
    created_at: NaiveDateTime,
) -> Vec<Classification> {
    matcher::classify_lines(lines, rules)
        .into_iter()
        .map(|(line, matched)| Classification {
            line_id: line.id,
            rule_id: matched.map(|r| r.id),
            booking: matched
                .map(|rule| builder::build_booking(line, Some(rule), own_ledger_account_id, created_at)),
        })
        .collect()
}
