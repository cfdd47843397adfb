//! CSV input and output for the analyzer
//!
//! - `schema` - the fixed employee schema and output header
//! - `reader` - typed loading of the employee table
//! - `writer` - atomic CSV output of the qualifying departments

pub mod reader;
pub mod schema;
pub mod writer;

pub use reader::{read_employees, read_employees_from};
pub use schema::{check_header, Column, ColumnType, EMPLOYEE_SCHEMA, OUTPUT_HEADER};
pub use writer::{write_csv, write_results};
