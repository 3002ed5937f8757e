use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The side of the balance sheet / income statement a ledger account lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum LedgerAccountKind {
    #[sea_orm(string_value = "Asset")]
    Asset,
    #[sea_orm(string_value = "Liability")]
    Liability,
    #[sea_orm(string_value = "Income")]
    Income,
    #[sea_orm(string_value = "Expense")]
    Expense,
    #[sea_orm(string_value = "Equity")]
    Equity,
}

/// A node in the chart of accounts. Booking lines post their debit/credit
/// amounts against these accounts.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ledger_accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub kind: LedgerAccountKind,
    /// Optional parent for a hierarchical chart of accounts.
    pub parent_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Self-referencing relation for the account hierarchy.
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id"
    )]
    Parent,
    #[sea_orm(has_many = "super::booking_line::Entity")]
    BookingLine,
}

impl Related<super::booking_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
