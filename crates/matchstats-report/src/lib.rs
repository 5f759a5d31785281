// Library root: re-exports all modules so integration tests and the
// `matchstats` binary share one public API.

pub mod config;
pub mod import;
pub mod render;
pub mod report;
