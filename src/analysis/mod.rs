//! Department satisfaction analysis module
//!
//! Holds the typed employee table, the analyzer that derives per-department
//! cohort percentages, and text rendering of the intermediate tables.

pub mod engine;
pub mod models;
pub mod report;

pub use engine::{
    count_by_department, join_counts, percentage, round_half_up, AnalysisSettings,
    CohortCriteria, DepartmentCounts, DepartmentSatisfactionAnalyzer, JoinPolicy,
    PERCENTAGE_DIGITS,
};
pub use models::{DepartmentPercentage, DepartmentSummary, EmployeeRecord, EmployeeTable};
pub use report::TextTable;
