//! # deptsat
//!
//! Finds the departments in which more than half of the employees report both
//! a satisfaction rating above 4 and a "High" engagement level.
//!
//! ## Usage
//!
//! ```bash
//! deptsat analyze [--input PATH] [--output PATH] [--config PATH] [--dry-run]
//! ```
//!
//! ## Modules
//!
//! - `analysis` - Employee table types, the analyzer and table rendering
//! - `cli` - Argument parsing and command routing
//! - `config` - Layered configuration (defaults, TOML file, environment, flags)
//! - `context` - Scoped context owning the load and write steps of a run
//! - `dataset` - Typed CSV input and atomic CSV output
//! - `error` - The unified error type and error codes
//! - `pipeline` - One end-to-end run
pub mod analysis;
pub mod cli;
pub mod config;
pub mod context;
pub mod dataset;
pub mod error;
pub mod pipeline;


pub use analysis::{
    DepartmentPercentage, DepartmentSatisfactionAnalyzer, DepartmentSummary, EmployeeRecord,
    EmployeeTable,
};
pub use context::AnalysisContext;
pub use error::AnalysisError;
