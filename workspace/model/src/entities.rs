//! This file serves as the root for all SeaORM entity modules.
//! We define the data models for the bookkeeping and net-worth engine here:
//! the chart of accounts, imported bank lines, matching rules, the bookings
//! they produce, and the asset/liability records (properties, mortgages)
//! used for net-worth valuation.

pub mod account;
pub mod booking;
pub mod booking_line;
pub mod booking_rule;
pub mod ledger_account;
pub mod mortgage;
pub mod property;
pub mod property_valuation;
pub mod transaction_line;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::account::Entity as Account;
    pub use super::booking::Entity as Booking;
    pub use super::booking_line::Entity as BookingLine;
    pub use super::booking_rule::Entity as BookingRule;
    pub use super::ledger_account::Entity as LedgerAccount;
    pub use super::mortgage::Entity as Mortgage;
    pub use super::property::Entity as Property;
    pub use super::property_valuation::Entity as PropertyValuation;
    pub use super::transaction_line::Entity as TransactionLine;
}
