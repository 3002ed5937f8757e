use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::booking_line;

/// A double-entry journal entry. A booking exclusively owns its lines;
/// deleting a booking cascades to them.
///
/// A booking's debit and credit sums should be equal, but this is not
/// enforced at creation time: rules with a zero-amount contra line
/// intentionally produce an out-of-balance booking pending manual
/// completion. That state is detectable, not an error.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: NaiveDate,
    /// Short human-readable reference, usually the counterparty name.
    pub reference: String,
    /// The imported transaction line this booking was generated from,
    /// if it was rule-generated rather than entered by hand.
    pub source_line_id: Option<i32>,
    pub created_at: NaiveDateTime,
    /// Whether the user still has to review this booking. Defaults to true;
    /// rule-generated bookings take the flag from the matched rule.
    #[sea_orm(default_value = "true")]
    pub requires_review: bool,
    /// Set once the user has reviewed the booking.
    pub reviewed_at: Option<NaiveDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "booking_line::Entity")]
    BookingLine,
}

impl Related<booking_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingLine.def()
    }
}

impl Model {
    /// Marks this booking as reviewed at the given time.
    pub fn mark_reviewed(&mut self, at: NaiveDateTime) {
        self.requires_review = false;
        self.reviewed_at = Some(at);
    }
}

impl ActiveModelBehavior for ActiveModel {}
