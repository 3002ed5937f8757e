use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::property;

/// A point-in-time valuation of a property, e.g. an appraisal or a tax
/// assessment. One row per date; unordered at rest, the valuation engine
/// sorts them by date ascending before interpolating.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "property_valuations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The property this valuation belongs to.
    pub property_id: i32,
    /// The date the value was assessed for.
    pub valuation_date: NaiveDate,
    /// The assessed value on that date.
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub value: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "property::Entity",
        from = "Column::PropertyId",
        to = "property::Column::Id",
        on_delete = "Cascade"
    )]
    Property,
}

impl Related<property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
