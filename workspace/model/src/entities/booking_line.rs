use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{booking, ledger_account};

/// One debit/credit posting inside a booking. Exactly one of `debit` and
/// `credit` carries the amount for a normal line; a pending line generated
/// under the zero-amount policy has both at 0 until the user fills it in.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The booking this line belongs to. The booking owns its lines;
    /// this back-reference is a lookup link only.
    pub booking_id: i32,
    /// Position within the booking, starting at 1. Line 1 is always the
    /// own-account side derived from the imported amount.
    pub line_number: i32,
    /// The ledger account this line posts to.
    pub ledger_account_id: i32,
    /// Debit amount, always >= 0.
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub debit: Decimal,
    /// Credit amount, always >= 0.
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub credit: Decimal,
    /// ISO 4217 currency code of the amounts.
    pub currency_code: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "booking::Entity",
        from = "Column::BookingId",
        to = "booking::Column::Id",
        on_delete = "Cascade"
    )]
    Booking,
    #[sea_orm(
        belongs_to = "ledger_account::Entity",
        from = "Column::LedgerAccountId",
        to = "ledger_account::Column::Id"
    )]
    LedgerAccount,
}

impl Related<booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl Related<ledger_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LedgerAccount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
