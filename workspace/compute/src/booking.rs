pub mod builder;
pub mod conflicts;
pub mod matcher;
