use model::entities::booking_rule::{self, Criterion, MatchField, MatchOperator};
use model::entities::transaction_line;
use tracing::{debug, instrument, trace};

/// Resolves the transaction-line attribute a criterion field refers to.
/// Optional attributes resolve to the empty string when absent.
fn field_text(line: &transaction_line::Model, field: MatchField) -> &str {
    match field {
        MatchField::OwnAccount => &line.own_account,
        MatchField::ContraAccountName => line.contra_account_name.as_deref().unwrap_or(""),
        MatchField::ContraAccount => &line.contra_account,
        MatchField::Description => line.description.as_deref().unwrap_or(""),
    }
}

/// Evaluates a single criterion against a transaction line.
///
/// Comparison is case-insensitive. An empty match value matches trivially
/// under `Contains` and `StartsWith`; under `Equals` it matches only an
/// empty field value.
pub fn criterion_matches(criterion: &Criterion, line: &transaction_line::Model) -> bool {
    let haystack = field_text(line, criterion.field).to_lowercase();
    let needle = criterion.value.to_lowercase();

    match criterion.operator {
        MatchOperator::Contains => haystack.contains(&needle),
        MatchOperator::Equals => haystack == needle,
        MatchOperator::StartsWith => haystack.starts_with(&needle),
    }
}

/// Finds the first active rule whose criteria all match the given line.
///
/// Rules are evaluated in ascending `sort_order`; the first full match wins
/// and later rules are never consulted. Returns `None` when no rule matches,
/// which leaves the line unbooked and is not an error.
#[instrument(skip(line, rules), fields(line_id = line.id, num_rules = rules.len()))]
pub fn find_match<'a>(
    line: &transaction_line::Model,
    rules: &'a [booking_rule::Model],
) -> Option<&'a booking_rule::Model> {
    let mut active: Vec<&booking_rule::Model> = rules.iter().filter(|r| r.active).collect();
    active.sort_by_key(|r| r.sort_order);

    for rule in active {
        trace!("Evaluating rule {} ({}) against line {}", rule.id, rule.name, line.id);
        if rule.criteria().iter().all(|c| criterion_matches(c, line)) {
            debug!("Line {} matched rule {} ({})", line.id, rule.id, rule.name);
            return Some(rule);
        }
    }

    debug!("Line {} matched no rule", line.id);
    None
}

/// Evaluates a batch of lines against the rule set.
///
/// Each line is evaluated independently, so the result does not depend on
/// the order of the lines, only on the rule ordering.
pub fn classify_lines<'a>(
    lines: &'a [transaction_line::Model],
    rules: &'a [booking_rule::Model],
) -> Vec<(&'a transaction_line::Model, Option<&'a booking_rule::Model>)> {
    lines
        .iter()
        .map(|line| (line, find_match(line, rules)))
        .collect()
}
