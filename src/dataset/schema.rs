//! The fixed employee input schema and the output header

use std::fmt;
use tracing::warn;

use crate::error::{common, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    String,
    Boolean,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "INT"),
            ColumnType::String => write!(f, "STRING"),
            ColumnType::Boolean => write!(f, "BOOLEAN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub column_type: ColumnType,
}

const fn column(name: &'static str, column_type: ColumnType) -> Column {
    Column { name, column_type }
}

/// Input columns, bound by position.
pub const EMPLOYEE_SCHEMA: [Column; 7] = [
    column("EmployeeID", ColumnType::Integer),
    column("Department", ColumnType::String),
    column("JobTitle", ColumnType::String),
    column("SatisfactionRating", ColumnType::Integer),
    column("EngagementLevel", ColumnType::String),
    column("ReportsConcerns", ColumnType::Boolean),
    column("ProvidedSuggestions", ColumnType::Boolean),
];

pub const OUTPUT_HEADER: [&str; 2] = ["Department", "Percentage"];

pub fn column_name(index: usize) -> Option<&'static str> {
    EMPLOYEE_SCHEMA.get(index).map(|c| c.name)
}

/// `EmployeeID INT, Department STRING, ...`
pub fn describe() -> String {
    EMPLOYEE_SCHEMA
        .iter()
        .map(|c| format!("{} {}", c.name, c.column_type))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check a header row against the schema.
///
/// The column count must match. Differing names are only warned about since
/// columns are bound by position.
pub fn check_header(header: &csv::StringRecord) -> Result<()> {
    if header.len() != EMPLOYEE_SCHEMA.len() {
        return Err(common::column_count_mismatch(
            EMPLOYEE_SCHEMA.len(),
            header.len(),
        ));
    }

    for (expected, found) in EMPLOYEE_SCHEMA.iter().zip(header.iter()) {
        if expected.name != found.trim() {
            warn!(
                "Header column '{}' does not match expected '{}', binding by position",
                found, expected.name
            );
        }
    }

    Ok(())
}
