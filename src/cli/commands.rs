pub mod classify;
pub mod net_worth;
pub mod rule_conflicts;

pub use classify::classify;
pub use net_worth::net_worth;
pub use rule_conflicts::rule_conflicts;
