use model::entities::booking_rule;
use std::collections::HashMap;
use tracing::debug;

/// A normalized criterion claimed by more than one active rule. Such rules
/// can shadow each other depending on sort order, which is usually a
/// configuration mistake worth surfacing to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionConflict {
    /// The normalized criterion key (see `Criterion::key`).
    pub key: String,
    /// The rules claiming this criterion, ascending by id.
    pub rule_ids: Vec<i32>,
}

/// Offline scan for duplicate criteria across the active rules.
///
/// This is deliberately not part of match evaluation: matching stays a pure
/// first-match-wins fold, and conflicts are only reported for the rule
/// management layer to display.
pub fn duplicate_criteria(rules: &[booking_rule::Model]) -> Vec<CriterionConflict> {
    let mut by_key: HashMap<String, Vec<i32>> = HashMap::new();

    for rule in rules.iter().filter(|r| r.active) {
        for criterion in rule.criteria() {
            let ids = by_key.entry(criterion.key()).or_default();
            if !ids.contains(&rule.id) {
                ids.push(rule.id);
            }
        }
    }

    let mut conflicts: Vec<CriterionConflict> = by_key
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|(key, mut rule_ids)| {
            rule_ids.sort_unstable();
            CriterionConflict { key, rule_ids }
        })
        .collect();
    conflicts.sort_by(|a, b| a.key.cmp(&b.key));

    debug!("Found {} duplicate criterion keys", conflicts.len());
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::entities::booking_rule::{MatchField, MatchOperator};

    fn rule(id: i32, value: &str, active: bool) -> booking_rule::Model {
        booking_rule::Model {
            id,
            name: format!("rule-{id}"),
            match_field: Some(MatchField::ContraAccountName),
            match_operator: Some(MatchOperator::Contains),
            match_value: Some(value.to_string()),
            criteria: None,
            line_items: None,
            ledger_account_id: 7,
            second_ledger_account_id: None,
            sort_order: id,
            active,
            requires_review: true,
        }
    }

    #[test]
    fn test_duplicate_criteria_are_reported_once_per_key() {
        let rules = vec![rule(1, "Albert", true), rule(2, "  albert ", true), rule(3, "shell", true)];
        let conflicts = duplicate_criteria(&rules);

        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].key, "contraaccountname|contains|albert");
        assert_eq!(conflicts[0].rule_ids, vec![1, 2]);
    }

    #[test]
    fn test_inactive_rules_do_not_conflict() {
        let rules = vec![rule(1, "albert", true), rule(2, "albert", false)];
        assert!(duplicate_criteria(&rules).is_empty());
    }
}
