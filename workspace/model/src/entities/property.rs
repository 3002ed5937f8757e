use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::property_valuation;

/// A real-estate asset. Its current value is estimated from the owned
/// valuation series; when no valuations exist the purchase value is used.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub purchase_date: NaiveDate,
    /// The price paid at purchase; fallback value when no valuations exist.
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub purchase_value: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "property_valuation::Entity")]
    PropertyValuation,
}

impl Related<property_valuation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PropertyValuation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
