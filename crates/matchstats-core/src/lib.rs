// Library root: record types, the aggregation engine, and the optional
// default-selection helpers used by report drivers.

pub mod defaults;
pub mod model;
pub mod stats;

pub use model::{Match, PlayerRecord};
