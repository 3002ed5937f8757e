//! Common transport-layer types shared between the engine and its callers.
//! These structs mirror what the presentation layer renders, so callers can
//! serialize engine results without duplicating shapes.

mod format;
mod report;

pub use format::format_amount;
pub use report::{BookingDraft, BookingLineDto, ItemValueDto, NetWorthReport};
