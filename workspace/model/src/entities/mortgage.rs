use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::property;

/// Enum for the amortization schedule of a mortgage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum AmortizationType {
    /// Constant principal repayment per period.
    #[sea_orm(string_value = "Linear")]
    Linear,
    /// Constant total payment with a shifting interest/principal split.
    #[sea_orm(string_value = "Annuity")]
    Annuity,
}

/// A mortgage liability. The outstanding balance is computed from the
/// schedule on every net-worth computation; `current_value` is a manual
/// override that skips the computation entirely.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mortgages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// The original principal.
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub start_value: Decimal,
    /// The date interest started accruing; amortization is measured from here.
    pub interest_start_date: NaiveDate,
    /// Full term of the mortgage in years.
    pub term_years: i32,
    /// Current annual interest rate in percent, e.g. 3.6 for 3.6%.
    #[sea_orm(column_type = "Decimal(Some((7, 4)))")]
    pub current_interest_rate: Decimal,
    /// Years the current rate is fixed for.
    pub fixed_rate_period_years: i32,
    pub amortization_type: AmortizationType,
    /// A paid-off mortgage always has an outstanding value of 0.
    #[sea_orm(default_value = "false")]
    pub is_paid_off: bool,
    /// Manually entered outstanding value; overrides the computed schedule.
    #[sea_orm(column_type = "Decimal(Some((19, 4)))", nullable)]
    pub current_value: Option<Decimal>,
    /// Cumulative extra principal paid beyond the scheduled amortization.
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub extra_paid_off: Decimal,
    /// The property this mortgage finances, if tracked.
    pub property_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "property::Entity",
        from = "Column::PropertyId",
        to = "property::Column::Id",
        on_delete = "SetNull"
    )]
    Property,
}

impl Related<property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
