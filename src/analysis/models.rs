//! Row types for the employee table and the derived department tables

use serde::{Deserialize, Serialize};

/// One row of the employee input table.
///
/// Every column is nullable: an empty CSV cell loads as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRecord {
    #[serde(rename = "EmployeeID")]
    pub employee_id: Option<i32>,
    #[serde(rename = "Department")]
    pub department: Option<String>,
    #[serde(rename = "JobTitle")]
    pub job_title: Option<String>,
    #[serde(rename = "SatisfactionRating")]
    pub satisfaction_rating: Option<i32>,
    #[serde(rename = "EngagementLevel")]
    pub engagement_level: Option<String>,
    #[serde(rename = "ReportsConcerns")]
    pub reports_concerns: Option<bool>,
    #[serde(rename = "ProvidedSuggestions")]
    pub provided_suggestions: Option<bool>,
}

impl EmployeeRecord {
    /// Build a fully populated record; mostly useful for tests and fixtures.
    pub fn new(
        employee_id: i32,
        department: &str,
        satisfaction_rating: i32,
        engagement_level: &str,
    ) -> Self {
        Self {
            employee_id: Some(employee_id),
            department: Some(department.to_string()),
            job_title: Some("Staff".to_string()),
            satisfaction_rating: Some(satisfaction_rating),
            engagement_level: Some(engagement_level.to_string()),
            reports_concerns: Some(false),
            provided_suggestions: Some(false),
        }
    }
}

/// The loaded employee table. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeTable {
    records: Vec<EmployeeRecord>,
}

impl EmployeeTable {
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmployeeRecord> {
        self.records.iter()
    }
}

impl FromIterator<EmployeeRecord> for EmployeeTable {
    fn from_iter<I: IntoIterator<Item = EmployeeRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Per-department counts joined with the derived percentage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentSummary {
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "TotalEmployees")]
    pub total_employees: u64,
    #[serde(rename = "HighSatEngagedEmployees")]
    pub high_sat_engaged_employees: u64,
    #[serde(rename = "Percentage")]
    pub percentage: f64,
}

/// A qualifying department as written to the output CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentPercentage {
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Percentage")]
    pub percentage: f64,
}

impl From<&DepartmentSummary> for DepartmentPercentage {
    fn from(summary: &DepartmentSummary) -> Self {
        Self {
            department: summary.department.clone(),
            percentage: summary.percentage,
        }
    }
}
