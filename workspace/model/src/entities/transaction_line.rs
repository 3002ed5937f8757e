use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::booking;

/// Represents a single movement imported from a bank file (e.g., CSV, MT940).
/// This stores the raw data before it is classified into a booking; the
/// matching engine treats it as read-only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transaction_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The date of the movement as stated in the import file.
    pub date: NaiveDate,
    /// The user's own account identifier (IBAN) the movement was imported for.
    pub own_account: String,
    /// The counterparty account identifier.
    pub contra_account: String,
    /// The counterparty name, if the bank supplied one.
    pub contra_account_name: Option<String>,
    /// Free-text description from the import file.
    pub description: Option<String>,
    /// The signed transaction amount. Positive for money in, negative for money out.
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub amount: Decimal,
    /// ISO 4217 currency code of the amount.
    pub currency_code: String,
    /// A unique hash of the raw imported row to prevent duplicate imports.
    #[sea_orm(unique)]
    pub import_hash: String,
    /// The booking this line was classified into, once one exists.
    /// Nullable because a line may not match any rule and stays unbooked.
    pub booking_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "booking::Entity",
        from = "Column::BookingId",
        to = "booking::Column::Id",
        on_delete = "SetNull"
    )]
    Booking,
}

impl Related<booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl Model {
    /// Whether this line has been classified into a booking yet.
    pub fn is_booked(&self) -> bool {
        self.booking_id.is_some()
    }
}

impl ActiveModelBehavior for ActiveModel {}
