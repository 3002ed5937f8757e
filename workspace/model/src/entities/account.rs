use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The kind of account
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum AccountKind {
    #[sea_orm(string_value = "BalanceSheet")]
    BalanceSheet,
    #[sea_orm(string_value = "Investment")]
    Investment,
}

/// Represents a balance-sheet or investment account, like a bank account
/// or a brokerage portfolio. The current balance is user-maintained and
/// enters the net-worth sum as-is.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// The kind of account
    pub kind: AccountKind,
    /// The current balance of the account.
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub current_balance: Decimal,
    /// ISO 4217 currency code, e.g., "USD", "EUR".
    pub currency_code: String,
    /// If false, this account is ignored in the net-worth computation.
    /// Useful for error-correction or temporary accounts.
    #[sea_orm(default_value = "true")]
    pub include_in_net_worth: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
