//! Command implementations

pub mod analyze;
pub mod schema;

pub use analyze::{print_results, resolve_config, run_analyze};
pub use schema::run_schema;
