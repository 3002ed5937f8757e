use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::ledger_account;

/// The transaction-line attribute a criterion is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum MatchField {
    #[sea_orm(string_value = "OwnAccount")]
    OwnAccount,
    #[sea_orm(string_value = "ContraAccountName")]
    ContraAccountName,
    #[sea_orm(string_value = "ContraAccount")]
    ContraAccount,
    #[sea_orm(string_value = "Description")]
    Description,
}

impl MatchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchField::OwnAccount => "OwnAccount",
            MatchField::ContraAccountName => "ContraAccountName",
            MatchField::ContraAccount => "ContraAccount",
            MatchField::Description => "Description",
        }
    }
}

/// How a criterion's match value is compared against the field value.
/// All comparisons are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum MatchOperator {
    #[sea_orm(string_value = "Contains")]
    Contains,
    #[sea_orm(string_value = "Equals")]
    Equals,
    #[sea_orm(string_value = "StartsWith")]
    StartsWith,
}

impl MatchOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOperator::Contains => "Contains",
            MatchOperator::Equals => "Equals",
            MatchOperator::StartsWith => "StartsWith",
        }
    }
}

/// A single matching condition. A rule owns an ordered list of these and
/// fires only when every one of them matches (logical AND).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub field: MatchField,
    pub operator: MatchOperator,
    pub value: String,
}

impl Criterion {
    /// Normalized key for equality comparison between criteria, used by the
    /// offline duplicate/conflict scan. Not used during match evaluation.
    pub fn key(&self) -> String {
        format!(
            "{}|{}|{}",
            self.field.as_str().trim().to_lowercase(),
            self.operator.as_str().trim().to_lowercase(),
            self.value.trim().to_lowercase()
        )
    }
}

/// How the amount of a generated contra line is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountPolicy {
    /// Mirror the first (own account) line's amount on the opposite column.
    OppositeOfFirstLine,
    /// Emit a 0/0 line pending manual entry.
    Zero,
}

/// Specification of one contra booking line to generate for a matched rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemSpec {
    pub ledger_account_id: i32,
    pub amount: AmountPolicy,
}

/// A classification rule that turns an imported transaction line into a
/// double-entry booking. Rules are evaluated in ascending `sort_order`;
/// the first rule whose criteria all match wins.
///
/// Older rules carry a single criterion in the flat `match_*` columns;
/// newer ones store an ordered criteria list in the `criteria` JSON column.
/// The same split exists for the generated contra lines (`line_items` JSON
/// versus the flat ledger-account columns).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking_rules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Legacy single-criterion field. Ignored when `criteria` is present and valid.
    pub match_field: Option<MatchField>,
    /// Legacy single-criterion operator.
    pub match_operator: Option<MatchOperator>,
    /// Legacy single-criterion value.
    pub match_value: Option<String>,
    /// Structured ordered criteria list as JSON (`Vec<Criterion>`).
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub criteria: Option<Json>,
    /// Structured ordered line-item list as JSON (`Vec<LineItemSpec>`).
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub line_items: Option<Json>,
    /// The ledger account the primary contra line posts to.
    pub ledger_account_id: i32,
    /// Optional second ledger account; expands to a zero-amount line.
    pub second_ledger_account_id: Option<i32>,
    /// Evaluation order; lower values are tried first.
    pub sort_order: i32,
    /// Inactive rules are excluded from matching entirely.
    #[sea_orm(default_value = "true")]
    pub active: bool,
    /// Whether bookings generated by this rule must be reviewed by the user.
    #[sea_orm(default_value = "true")]
    pub requires_review: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "ledger_account::Entity",
        from = "Column::LedgerAccountId",
        to = "ledger_account::Column::Id"
    )]
    LedgerAccount,
    #[sea_orm(
        belongs_to = "ledger_account::Entity",
        from = "Column::SecondLedgerAccountId",
        to = "ledger_account::Column::Id"
    )]
    SecondLedgerAccount,
}

impl Model {
    /// Resolves this rule's matching conditions into a uniform ordered list.
    ///
    /// Prefers the structured `criteria` payload; an absent, malformed or
    /// empty payload falls back to a one-element list synthesized from the
    /// legacy `match_*` columns. Deserialization failures never propagate
    /// out of this method, so a bad payload cannot break classification.
    #[instrument(skip(self), fields(rule_id = self.id))]
    pub fn criteria(&self) -> Vec<Criterion> {
        trace!("Resolving criteria for rule {}", self.id);

        if let Some(payload) = &self.criteria {
            match serde_json::from_value::<Vec<Criterion>>(payload.clone()) {
                Ok(list) if !list.is_empty() => {
                    debug!("Rule {} uses {} structured criteria", self.id, list.len());
                    return list;
                }
                Ok(_) => {
                    debug!("Rule {} has an empty criteria payload, using legacy fields", self.id);
                }
                Err(err) => {
                    debug!(
                        "Rule {} has a malformed criteria payload ({}), using legacy fields",
                        self.id, err
                    );
                }
            }
        }

        vec![Criterion {
            field: self.match_field.unwrap_or(MatchField::ContraAccountName),
            operator: self.match_operator.unwrap_or(MatchOperator::Contains),
            value: self.match_value.clone().unwrap_or_default(),
        }]
    }

    /// Resolves the contra booking lines this rule generates.
    ///
    /// Prefers the structured `line_items` payload; the fallback is one
    /// mirroring line on the primary ledger account, plus a zero-amount line
    /// on the second ledger account when one is configured.
    #[instrument(skip(self), fields(rule_id = self.id))]
    pub fn line_item_specs(&self) -> Vec<LineItemSpec> {
        trace!("Resolving line items for rule {}", self.id);

        if let Some(payload) = &self.line_items {
            match serde_json::from_value::<Vec<LineItemSpec>>(payload.clone()) {
                Ok(list) if !list.is_empty() => {
                    debug!("Rule {} uses {} structured line items", self.id, list.len());
                    return list;
                }
                Ok(_) => {
                    debug!("Rule {} has an empty line-items payload, using legacy fields", self.id);
                }
                Err(err) => {
                    debug!(
                        "Rule {} has a malformed line-items payload ({}), using legacy fields",
                        self.id, err
                    );
                }
            }
        }

        let mut specs = vec![LineItemSpec {
            ledger_account_id: self.ledger_account_id,
            amount: AmountPolicy::OppositeOfFirstLine,
        }];
        if let Some(second) = self.second_ledger_account_id {
            if second > 0 {
                specs.push(LineItemSpec {
                    ledger_account_id: second,
                    amount: AmountPolicy::Zero,
                });
            }
        }
        specs
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn legacy_rule() -> Model {
        Model {
            id: 1,
            name: "Groceries".to_string(),
            match_field: Some(MatchField::Description),
            match_operator: Some(MatchOperator::StartsWith),
            match_value: Some("ALBERT".to_string()),
            criteria: None,
            line_items: None,
            ledger_account_id: 7,
            second_ledger_account_id: None,
            sort_order: 10,
            active: true,
            requires_review: true,
        }
    }

    #[test]
    fn test_legacy_rule_yields_single_criterion() {
        let rule = legacy_rule();
        let criteria = rule.criteria();
        assert_eq!(
            criteria,
            vec![Criterion {
                field: MatchField::Description,
                operator: MatchOperator::StartsWith,
                value: "ALBERT".to_string(),
            }]
        );
    }

    #[test]
    fn test_unset_legacy_fields_default_to_contra_name_contains() {
        let rule = Model {
            match_field: None,
            match_operator: None,
            match_value: None,
            ..legacy_rule()
        };
        let criteria = rule.criteria();
        assert_eq!(criteria.len(), 1);
        assert_eq!(criteria[0].field, MatchField::ContraAccountName);
        assert_eq!(criteria[0].operator, MatchOperator::Contains);
        assert_eq!(criteria[0].value, "");
    }

    #[test]
    fn test_structured_criteria_win_over_legacy_fields() {
        let rule = Model {
            criteria: Some(json!([
                {"field": "ContraAccount", "operator": "Equals", "value": "NL01BANK0123456789"},
                {"field": "Description", "operator": "Contains", "value": "rent"}
            ])),
            ..legacy_rule()
        };
        let criteria = rule.criteria();
        assert_eq!(criteria.len(), 2);
        assert_eq!(criteria[0].field, MatchField::ContraAccount);
        assert_eq!(criteria[1].value, "rent");
    }

    #[test]
    fn test_malformed_criteria_payload_falls_back_to_legacy() {
        let rule = Model {
            criteria: Some(json!({"not": "a list"})),
            ..legacy_rule()
        };
        let criteria = rule.criteria();
        assert_eq!(criteria.len(), 1);
        assert_eq!(criteria[0].value, "ALBERT");
    }

    #[test]
    fn test_empty_criteria_payload_falls_back_to_legacy() {
        let rule = Model {
            criteria: Some(json!([])),
            ..legacy_rule()
        };
        let criteria = rule.criteria();
        assert_eq!(criteria.len(), 1);
        assert_eq!(criteria[0].value, "ALBERT");
    }

    #[test]
    fn test_criterion_key_normalizes_case_and_whitespace() {
        let a = Criterion {
            field: MatchField::Description,
            operator: MatchOperator::Contains,
            value: "  Rent ".to_string(),
        };
        let b = Criterion {
            field: MatchField::Description,
            operator: MatchOperator::Contains,
            value: "rent".to_string(),
        };
        assert_eq!(a.key(), b.key());
        assert_eq!(a.key(), "description|contains|rent");
    }

    #[test]
    fn test_line_items_fallback_single_account() {
        let rule = legacy_rule();
        assert_eq!(
            rule.line_item_specs(),
            vec![LineItemSpec {
                ledger_account_id: 7,
                amount: AmountPolicy::OppositeOfFirstLine,
            }]
        );
    }

    #[test]
    fn test_line_items_fallback_with_second_account() {
        let rule = Model {
            second_ledger_account_id: Some(9),
            ..legacy_rule()
        };
        assert_eq!(
            rule.line_item_specs(),
            vec![
                LineItemSpec {
                    ledger_account_id: 7,
                    amount: AmountPolicy::OppositeOfFirstLine,
                },
                LineItemSpec {
                    ledger_account_id: 9,
                    amount: AmountPolicy::Zero,
                },
            ]
        );
    }

    #[test]
    fn test_second_account_zero_is_treated_as_unset() {
        let rule = Model {
            second_ledger_account_id: Some(0),
            ..legacy_rule()
        };
        assert_eq!(rule.line_item_specs().len(), 1);
    }

    #[test]
    fn test_structured_line_items_win_over_legacy_fields() {
        let rule = Model {
            line_items: Some(json!([
                {"ledger_account_id": 3, "amount": "OppositeOfFirstLine"},
                {"ledger_account_id": 4, "amount": "Zero"}
            ])),
            ..legacy_rule()
        };
        let specs = rule.line_item_specs();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].ledger_account_id, 3);
        assert_eq!(specs[1].amount, AmountPolicy::Zero);
    }
}
