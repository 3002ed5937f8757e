use chrono::NaiveDateTime;
use model::entities::booking_rule::{self, AmountPolicy};
use model::entities::{booking, booking_line, transaction_line};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Constructs a booking draft from an imported transaction line.
///
/// Line 1 is always the own-account side and is derived directly from the
/// line's signed amount: a positive amount credits the own-account ledger
/// side, a negative amount debits it by the absolute value. The contra
/// lines come from the matched rule's line-item specs, in order:
/// `OppositeOfFirstLine` mirrors line 1's amount on the opposite column,
/// `Zero` emits a 0/0 line pending manual entry.
///
/// When no rule matched, only line 1 is generated and the booking always
/// requires review; with a rule, the review flag is taken from the rule.
///
/// The returned models are unsaved drafts: `id` and `booking_id` are 0
/// until the persistence layer assigns them. An out-of-balance result is
/// returned as-is, never rejected; see [`imbalance`].
///
/// `own_ledger_account_id` is the ledger account the calling layer mapped
/// the line's own bank account to; that mapping is not governed by rules.
#[instrument(skip(line, matched), fields(line_id = line.id, rule_id = matched.map(|r| r.id)))]
pub fn build_booking(
    line: &transaction_line::Model,
    matched: Option<&booking_rule::Model>,
    own_ledger_account_id: i32,
    created_at: NaiveDateTime,
) -> (booking::Model, Vec<booking_line::Model>) {
    let description = line.description.clone().unwrap_or_default();
    let reference = line
        .contra_account_name
        .clone()
        .unwrap_or_else(|| line.contra_account.clone());

    // Line 1: the own-account side, fixed by the sign convention.
    let (debit1, credit1) = if line.amount >= Decimal::ZERO {
        (Decimal::ZERO, line.amount)
    } else {
        (-line.amount, Decimal::ZERO)
    };

    let mut lines = vec![booking_line::Model {
        id: 0,
        booking_id: 0,
        line_number: 1,
        ledger_account_id: own_ledger_account_id,
        debit: debit1,
        credit: credit1,
        currency_code: line.currency_code.clone(),
        description: description.clone(),
    }];

    if let Some(rule) = matched {
        for spec in rule.line_item_specs() {
            let (debit, credit) = match spec.amount {
                // Mirror line 1 on the opposite column.
                AmountPolicy::OppositeOfFirstLine => (credit1, debit1),
                AmountPolicy::Zero => (Decimal::ZERO, Decimal::ZERO),
            };
            lines.push(booking_line::Model {
                id: 0,
                booking_id: 0,
                line_number: lines.len() as i32 + 1,
                ledger_account_id: spec.ledger_account_id,
                debit,
                credit,
                currency_code: line.currency_code.clone(),
                description: description.clone(),
            });
        }
    }

    let booking = booking::Model {
        id: 0,
        date: line.date,
        reference,
        source_line_id: Some(line.id),
        created_at,
        requires_review: matched.map(|r| r.requires_review).unwrap_or(true),
        reviewed_at: None,
    };

    debug!(
        "Built booking for line {} with {} lines, imbalance {}",
        line.id,
        lines.len(),
        imbalance(&lines)
    );

    (booking, lines)
}

/// Debit sum minus credit sum over a booking's lines. Zero means balanced.
pub fn imbalance(lines: &[booking_line::Model]) -> Decimal {
    let debit: Decimal = lines.iter().map(|l| l.debit).sum();
    let credit: Decimal = lines.iter().map(|l| l.credit).sum();
    debit - credit
}

/// Whether the booking's debit and credit sums are equal. A false result
/// is a valid, flagged state for bookings with a pending zero-amount line.
pub fn is_balanced(lines: &[booking_line::Model]) -> bool {
    imbalance(lines).is_zero()
}
