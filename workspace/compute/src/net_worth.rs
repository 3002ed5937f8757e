//! Net-worth aggregation.
//!
//! Fans out over accounts, properties and mortgages, computes the current
//! value of each, and sums: assets (account balances plus estimated
//! property values) minus liabilities (amortized mortgage balances).
//! Everything is recomputed from the current inputs on every call; nothing
//! is cached.

use chrono::NaiveDate;
use model::entities::{account, mortgage, property, property_valuation};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::{mortgage as mortgage_calc, valuation};

/// The current value of a single asset or liability, for display alongside
/// the raw record.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemValue {
    pub id: i32,
    pub name: String,
    pub value: Decimal,
}

/// A computed net-worth figure with its per-item breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct NetWorthSnapshot {
    /// The "as of" date the computation was run for.
    pub reference_date: NaiveDate,
    pub accounts: Vec<ItemValue>,
    pub properties: Vec<ItemValue>,
    pub mortgages: Vec<ItemValue>,
    pub assets: Decimal,
    pub liabilities: Decimal,
    pub net: Decimal,
}

/// Computes net worth at `today` from the current state of all records.
///
/// Accounts excluded from net worth are skipped entirely; paid-off
/// mortgages contribute nothing to the liabilities. The per-property
/// valuation series is taken from `valuations` by property id, and the
/// summation order carries no meaning.
#[instrument(skip_all, fields(
    num_accounts = accounts.len(),
    num_properties = properties.len(),
    num_mortgages = mortgages.len(),
    today = %today,
))]
pub fn compute_net_worth(
    accounts: &[account::Model],
    properties: &[property::Model],
    valuations: &[property_valuation::Model],
    mortgages: &[mortgage::Model],
    today: NaiveDate,
) -> Result<NetWorthSnapshot> {
    let account_values: Vec<ItemValue> = accounts
        .iter()
        .filter(|a| a.include_in_net_worth)
        .map(|a| ItemValue {
            id: a.id,
            name: a.name.clone(),
            value: a.current_balance,
        })
        .collect();

    let property_values: Vec<ItemValue> = properties
        .iter()
        .map(|p| {
            let series: Vec<property_valuation::Model> = valuations
                .iter()
                .filter(|v| v.property_id == p.id)
                .cloned()
                .collect();
            ItemValue {
                id: p.id,
                name: p.name.clone(),
                value: valuation::property_value(p, &series, today),
            }
        })
        .collect();

    let mut mortgage_values = Vec::new();
    for m in mortgages.iter().filter(|m| !m.is_paid_off) {
        mortgage_values.push(ItemValue {
            id: m.id,
            name: m.name.clone(),
            value: mortgage_calc::current_value(m, today)?,
        });
    }

    let assets: Decimal = account_values.iter().map(|v| v.value).sum::<Decimal>()
        + property_values.iter().map(|v| v.value).sum::<Decimal>();
    let liabilities: Decimal = mortgage_values.iter().map(|v| v.value).sum();
    let net = assets - liabilities;

    debug!("Net worth {} (assets {}, liabilities {})", net, assets, liabilities);

    Ok(NetWorthSnapshot {
        reference_date: today,
        accounts: account_values,
        properties: property_values,
        mortgages: mortgage_values,
        assets,
        liabilities,
        net,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::entities::account::AccountKind;
    use model::entities::mortgage::AmortizationType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn account(id: i32, kind: AccountKind, balance: i64, included: bool) -> account::Model {
        account::Model {
            id,
            name: format!("account-{id}"),
            description: None,
            kind,
            current_balance: Decimal::from(balance),
            currency_code: "EUR".to_string(),
            include_in_net_worth: included,
        }
    }

    fn property(id: i32, purchase_value: i64) -> property::Model {
        property::Model {
            id,
            name: format!("property-{id}"),
            purchase_date: date(2020, 6, 1),
            purchase_value: Decimal::from(purchase_value),
            currency_code: "EUR".to_string(),
        }
    }

    fn mortgage(id: i32, manual_value: Option<i64>, paid_off: bool) -> mortgage::Model {
        mortgage::Model {
            id,
            name: format!("mortgage-{id}"),
            start_value: Decimal::from(300_000),
            interest_start_date: date(2020, 6, 1),
            term_years: 30,
            current_interest_rate: Decimal::new(36, 1),
            fixed_rate_period_years: 10,
            amortization_type: AmortizationType::Annuity,
            is_paid_off: paid_off,
            current_value: manual_value.map(Decimal::from),
            extra_paid_off: Decimal::ZERO,
            property_id: Some(id),
        }
    }

    #[test]
    fn test_net_worth_sums_assets_minus_liabilities() {
        let accounts = [
            account(1, AccountKind::BalanceSheet, 12_000, true),
            account(2, AccountKind::Investment, 48_000, true),
        ];
        let properties = [property(1, 350_000)];
        let mortgages = [mortgage(1, Some(250_000), false)];

        let snapshot =
            compute_net_worth(&accounts, &properties, &[], &mortgages, date(2025, 6, 15)).unwrap();

        // No valuations recorded, so the property falls back to its
        // purchase value.
        assert_eq!(snapshot.assets, Decimal::from(410_000));
        assert_eq!(snapshot.liabilities, Decimal::from(250_000));
        assert_eq!(snapshot.net, Decimal::from(160_000));
    }

    #[test]
    fn test_excluded_accounts_and_paid_off_mortgages_are_skipped() {
        let accounts = [
            account(1, AccountKind::BalanceSheet, 10_000, true),
            account(2, AccountKind::BalanceSheet, 99_000, false),
        ];
        let mortgages = [mortgage(1, Some(250_000), true)];

        let snapshot = compute_net_worth(&accounts, &[], &[], &mortgages, date(2025, 6, 15)).unwrap();

        assert_eq!(snapshot.accounts.len(), 1);
        assert!(snapshot.mortgages.is_empty());
        assert_eq!(snapshot.net, Decimal::from(10_000));
    }

    #[test]
    fn test_property_values_use_their_own_valuation_series() {
        let properties = [property(1, 100_000), property(2, 200_000)];
        let valuations = [
            property_valuation::Model {
                id: 1,
                property_id: 1,
                valuation_date: date(2024, 1, 1),
                value: Decimal::from(150_000),
            },
        ];

        let snapshot =
            compute_net_worth(&[], &properties, &valuations, &[], date(2025, 6, 15)).unwrap();

        assert_eq!(snapshot.properties[0].value, Decimal::from(150_000));
        assert_eq!(snapshot.properties[1].value, Decimal::from(200_000));
        assert_eq!(snapshot.assets, Decimal::from(350_000));
    }
}
