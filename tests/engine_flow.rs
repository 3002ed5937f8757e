//! End-to-end flow over a JSON snapshot: load, classify imported lines into
//! booking drafts, and compute a net-worth report from the same snapshot.

use chrono::NaiveDate;
use finbook::{classify_snapshot, net_worth_report, Snapshot};
use rust_decimal::Decimal;

fn snapshot() -> Snapshot {
    let json = r#"{
        "own_ledger_account_id": 1,
        "accounts": [
            {
                "id": 1,
                "name": "Checking",
                "description": null,
                "kind": "BalanceSheet",
                "current_balance": "12500.00",
                "currency_code": "EUR",
                "include_in_net_worth": true
            },
            {
                "id": 2,
                "name": "Corrections",
                "description": "error-correction bucket",
                "kind": "BalanceSheet",
                "current_balance": "99999.00",
                "currency_code": "EUR",
                "include_in_net_worth": false
            }
        ],
        "properties": [
            {
                "id": 1,
                "name": "Home",
                "purchase_date": "2020-06-01",
                "purchase_value": "300000.00",
                "currency_code": "EUR"
            }
        ],
        "valuations": [
            {
                "id": 1,
                "property_id": 1,
                "valuation_date": "2024-06-01",
                "value": "410000.00"
            }
        ],
        "mortgages": [
            {
                "id": 1,
                "name": "Home mortgage",
                "start_value": "300000.00",
                "interest_start_date": "2020-06-01",
                "term_years": 30,
                "current_interest_rate": "3.6",
                "fixed_rate_period_years": 10,
                "amortization_type": "Annuity",
                "is_paid_off": false,
                "current_value": "250000.00",
                "extra_paid_off": "0",
                "property_id": 1
            }
        ],
        "rules": [
            {
                "id": 1,
                "name": "Groceries",
                "match_field": "Description",
                "match_operator": "Contains",
                "match_value": "albert",
                "criteria": null,
                "line_items": null,
                "ledger_account_id": 7,
                "second_ledger_account_id": null,
                "sort_order": 10,
                "active": true,
                "requires_review": false
            },
            {
                "id": 2,
                "name": "Rent",
                "match_field": null,
                "match_operator": null,
                "match_value": null,
                "criteria": [
                    {"field": "ContraAccount", "operator": "Equals", "value": "NL01BANK0123456789"}
                ],
                "line_items": null,
                "ledger_account_id": 8,
                "second_ledger_account_id": null,
                "sort_order": 20,
                "active": true,
                "requires_review": true
            }
        ],
        "lines": [
            {
                "id": 11,
                "date": "2025-03-10",
                "own_account": "NL91OWNB0000000001",
                "contra_account": "NL55AHLN0000000042",
                "contra_account_name": "Albert Heijn 1404",
                "description": "ALBERT HEIJN 1404 AMSTERDAM",
                "amount": "-54.30",
                "currency_code": "EUR",
                "import_hash": "hash-11",
                "booking_id": null
            },
            {
                "id": 12,
                "date": "2025-03-01",
                "own_account": "NL91OWNB0000000001",
                "contra_account": "NL01BANK0123456789",
                "contra_account_name": null,
                "description": "rent march",
                "amount": "-875.00",
                "currency_code": "EUR",
                "import_hash": "hash-12",
                "booking_id": null
            },
            {
                "id": 13,
                "date": "2025-03-05",
                "own_account": "NL91OWNB0000000001",
                "contra_account": "",
                "contra_account_name": "ATM",
                "description": "cash withdrawal",
                "amount": "-100.00",
                "currency_code": "EUR",
                "import_hash": "hash-13",
                "booking_id": null
            }
        ]
    }"#;
    Snapshot::from_json(json).unwrap()
}

fn created_at() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap().and_hms_opt(9, 30, 0).unwrap()
}

#[test]
fn test_classification_produces_a_draft_per_line() {
    let snapshot = snapshot();
    let drafts = classify_snapshot(&snapshot, created_at());

    assert_eq!(drafts.len(), 3);

    // Groceries: matched by the legacy description rule, auto-approved.
    let groceries = &drafts[0];
    assert_eq!(groceries.source_line_id, Some(11));
    assert_eq!(groceries.rule_id, Some(1));
    assert_eq!(groceries.reference, "Albert Heijn 1404");
    assert!(!groceries.requires_review);
    assert!(groceries.balanced);
    assert_eq!(groceries.lines.len(), 2);
    assert_eq!(groceries.lines[0].ledger_account_id, 1);
    assert_eq!(groceries.lines[0].debit, Decimal::new(5430, 2));
    assert_eq!(groceries.lines[0].credit, Decimal::ZERO);
    assert_eq!(groceries.lines[1].ledger_account_id, 7);
    assert_eq!(groceries.lines[1].credit, Decimal::new(5430, 2));

    // Rent: matched by the structured exact-IBAN rule; no counterparty
    // name, so the raw contra account is used as the reference.
    let rent = &drafts[1];
    assert_eq!(rent.rule_id, Some(2));
    assert_eq!(rent.reference, "NL01BANK0123456789");
    assert!(rent.requires_review);
    assert!(rent.balanced);

    // No rule matches the cash withdrawal: a one-line manual draft is
    // still produced and flagged.
    let manual = &drafts[2];
    assert_eq!(manual.rule_id, None);
    assert!(manual.requires_review);
    assert!(!manual.balanced);
    assert_eq!(manual.lines.len(), 1);
}

#[test]
fn test_net_worth_report_over_the_same_snapshot() {
    let snapshot = snapshot();
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    let report = net_worth_report(&snapshot, today, "EUR").unwrap();

    assert_eq!(report.reference_date, today);
    assert_eq!(report.currency_code, "EUR");

    // The corrections account is excluded from the sums entirely.
    assert_eq!(report.accounts.len(), 1);
    assert_eq!(report.accounts[0].value, Decimal::new(1250000, 2));

    // A single valuation is used regardless of the reference date.
    assert_eq!(report.properties[0].value, Decimal::new(41000000, 2));

    // The manual outstanding value overrides the amortization schedule.
    assert_eq!(report.mortgages[0].value, Decimal::new(25000000, 2));

    assert_eq!(report.assets, Decimal::from(422_500));
    assert_eq!(report.liabilities, Decimal::from(250_000));
    assert_eq!(report.net, Decimal::from(172_500));
    assert!(report.formatted_net().starts_with('€'));
}

#[test]
fn test_snapshot_sections_default_to_empty() {
    let snapshot = Snapshot::from_json(r#"{"own_ledger_account_id": 1}"#).unwrap();
    assert!(snapshot.lines.is_empty());
    assert!(snapshot.rules.is_empty());

    let drafts = classify_snapshot(&snapshot, created_at());
    assert!(drafts.is_empty());

    let report =
        net_worth_report(&snapshot, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(), "EUR").unwrap();
    assert_eq!(report.net, Decimal::ZERO);
}
