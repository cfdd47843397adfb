//! Department satisfaction analysis
//!
//! Computes, per department, the share of employees in the
//! "high satisfaction and high engagement" cohort and keeps the departments
//! where that share exceeds a threshold. The pass is:
//! cohort filter, two grouped counts, equi-join on the department key,
//! derived percentage, threshold filter, projection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, trace, Level};

use super::models::{DepartmentPercentage, DepartmentSummary, EmployeeRecord, EmployeeTable};
use super::report;

/// Number of fraction digits kept in the derived percentage
pub const PERCENTAGE_DIGITS: u32 = 2;

/// Grouped row counts keyed by department. `None` is the null-department group.
pub type DepartmentCounts = BTreeMap<Option<String>, u64>;

/// How the total and cohort counts are joined.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum JoinPolicy {
    /// Departments without cohort members are dropped
    #[default]
    Inner,
    /// Departments without cohort members are kept with a zero cohort count
    LeftZeroFill,
}

impl fmt::Display for JoinPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinPolicy::Inner => write!(f, "inner"),
            JoinPolicy::LeftZeroFill => write!(f, "left-zero-fill"),
        }
    }
}

impl FromStr for JoinPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inner" => Ok(JoinPolicy::Inner),
            "left-zero-fill" | "left_zero_fill" | "left" => Ok(JoinPolicy::LeftZeroFill),
            other => Err(format!(
                "unknown join policy '{}', expected inner or left-zero-fill",
                other
            )),
        }
    }
}

/// The cohort predicate: rating strictly above a bound and an exact
/// (case-sensitive) engagement level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CohortCriteria {
    pub rating_above: i32,
    pub engagement_level: String,
}

impl Default for CohortCriteria {
    fn default() -> Self {
        Self {
            rating_above: 4,
            engagement_level: "High".to_string(),
        }
    }
}

impl CohortCriteria {
    /// Null rating or null engagement never matches.
    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        let rating_ok = record
            .satisfaction_rating
            .is_some_and(|rating| rating > self.rating_above);
        let engagement_ok = record
            .engagement_level
            .as_deref()
            .is_some_and(|level| level == self.engagement_level);
        rating_ok && engagement_ok
    }
}

/// Tunables for one analysis pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub cohort: CohortCriteria,
    /// Departments must exceed (not reach) this percentage
    pub threshold_percent: f64,
    pub join: JoinPolicy,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            cohort: CohortCriteria::default(),
            threshold_percent: 50.0,
            join: JoinPolicy::Inner,
        }
    }
}

/// Count rows per department, counting only rows with a non-null employee id.
///
/// Every department seen gets an entry, even if all its ids are null.
pub fn count_by_department<'a, I>(rows: I) -> DepartmentCounts
where
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    let mut counts = DepartmentCounts::new();
    for row in rows {
        let entry = counts.entry(row.department.clone()).or_insert(0);
        if row.employee_id.is_some() {
            *entry += 1;
        }
    }
    counts
}

/// Round half away from zero to `digits` fraction digits.
///
/// Rounding acts on the binary `f64` value, not its decimal text, so a tie
/// such as 2013/4000 (50.325) can land one hundredth away from a
/// decimal HALF_UP rounding.
pub fn round_half_up(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Percentage of `part` in `whole`, rounded. `None` when `whole` is zero.
pub fn percentage(part: u64, whole: u64) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    let ratio = part as f64 / whole as f64;
    Some(round_half_up(ratio * 100.0, PERCENTAGE_DIGITS))
}

/// Join the two grouped counts on department.
///
/// Null department keys never match. Rows whose total is zero have no
/// defined percentage and are dropped.
pub fn join_counts(
    totals: &DepartmentCounts,
    cohort: &DepartmentCounts,
    policy: JoinPolicy,
) -> Vec<DepartmentSummary> {
    let mut joined = Vec::with_capacity(totals.len());

    for (key, &total) in totals {
        let Some(department) = key else {
            trace!("Skipping null department group ({} employees)", total);
            continue;
        };

        let matched = match (cohort.get(key), policy) {
            (Some(&count), _) => count,
            (None, JoinPolicy::LeftZeroFill) => 0,
            (None, JoinPolicy::Inner) => {
                trace!("Department '{}' has no cohort members, dropped", department);
                continue;
            }
        };

        match percentage(matched, total) {
            Some(pct) => joined.push(DepartmentSummary {
                department: department.clone(),
                total_employees: total,
                high_sat_engaged_employees: matched,
                percentage: pct,
            }),
            None => debug!(
                "Department '{}' has no countable employees, dropped",
                department
            ),
        }
    }

    joined
}

/// Finds departments where the cohort share exceeds the threshold
#[derive(Debug, Clone, Default)]
pub struct DepartmentSatisfactionAnalyzer {
    settings: AnalysisSettings,
}

impl DepartmentSatisfactionAnalyzer {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Rows satisfying the cohort predicate
    pub fn cohort<'a>(&self, table: &'a EmployeeTable) -> Vec<&'a EmployeeRecord> {
        table
            .iter()
            .filter(|record| self.settings.cohort.matches(record))
            .collect()
    }

    /// Joined per-department counts and percentages, before the threshold filter.
    pub fn summarize(&self, table: &EmployeeTable) -> Vec<DepartmentSummary> {
        let cohort = self.cohort(table);
        let totals = count_by_department(table.iter());
        let cohort_counts = count_by_department(cohort.iter().copied());

        debug!(
            "Cohort has {} of {} employees across {} departments",
            cohort.len(),
            table.len(),
            totals.len()
        );

        if tracing::enabled!(Level::TRACE) {
            trace!(
                "High satisfaction employees per department\n{}",
                report::counts_table("HighSatEngagedEmployees", &cohort_counts)
            );
            trace!(
                "Total employees per department\n{}",
                report::counts_table("TotalEmployees", &totals)
            );
        }

        let summaries = join_counts(&totals, &cohort_counts, self.settings.join);

        if tracing::enabled!(Level::TRACE) {
            trace!(
                "Department satisfaction percentage before filter\n{}",
                report::summary_table(&summaries)
            );
        }

        summaries
    }

    /// Departments whose cohort percentage is strictly above the threshold,
    /// sorted by department.
    pub fn analyze(&self, table: &EmployeeTable) -> Vec<DepartmentPercentage> {
        let threshold = self.settings.threshold_percent;
        let results: Vec<DepartmentPercentage> = self
            .summarize(table)
            .iter()
            .filter(|summary| summary.percentage > threshold)
            .map(DepartmentPercentage::from)
            .collect();

        if tracing::enabled!(Level::TRACE) {
            trace!(
                "Departments meeting {}% threshold\n{}",
                threshold,
                report::percentage_table(&results)
            );
        }

        info!(
            "{} department(s) exceed {}% (join: {})",
            results.len(),
            threshold,
            self.settings.join
        );

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dept(name: &str, matching: usize, others: usize, start_id: i32) -> Vec<EmployeeRecord> {
        let mut rows = Vec::new();
        let mut id = start_id;
        for _ in 0..matching {
            rows.push(EmployeeRecord::new(id, name, 5, "High"));
            id += 1;
        }
        for _ in 0..others {
            rows.push(EmployeeRecord::new(id, name, 3, "Low"));
            id += 1;
        }
        rows
    }

    fn table(parts: Vec<Vec<EmployeeRecord>>) -> EmployeeTable {
        parts.into_iter().flatten().collect()
    }

    #[test]
    fn test_cohort_predicate() {
        let criteria = CohortCriteria::default();
        assert!(criteria.matches(&EmployeeRecord::new(1, "A", 5, "High")));
        assert!(!criteria.matches(&EmployeeRecord::new(2, "A", 4, "High")));
        assert!(!criteria.matches(&EmployeeRecord::new(3, "A", 5, "high")));
        assert!(!criteria.matches(&EmployeeRecord::new(4, "A", 5, "High ")));

        let mut no_rating = EmployeeRecord::new(5, "A", 5, "High");
        no_rating.satisfaction_rating = None;
        assert!(!criteria.matches(&no_rating));
    }

    #[test]
    fn test_majority_department_kept_and_zero_cohort_dropped() {
        let analyzer = DepartmentSatisfactionAnalyzer::default();
        let results = analyzer.analyze(&table(vec![dept("A", 3, 1, 1), dept("B", 0, 2, 100)]));

        assert_eq!(
            results,
            vec![DepartmentPercentage {
                department: "A".to_string(),
                percentage: 75.0,
            }]
        );
    }

    #[test]
    fn test_exactly_half_is_not_enough() {
        let analyzer = DepartmentSatisfactionAnalyzer::default();
        let results = analyzer.analyze(&table(vec![dept("D", 5, 5, 1)]));
        assert!(results.is_empty());
    }

    #[test]
    fn test_full_department() {
        let analyzer = DepartmentSatisfactionAnalyzer::default();
        let results = analyzer.analyze(&table(vec![dept("C", 2, 0, 1)]));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].percentage, 100.0);
    }

    #[test]
    fn test_percentage_rounds_to_two_digits() {
        let analyzer = DepartmentSatisfactionAnalyzer::default();
        let summaries = analyzer.summarize(&table(vec![dept("E", 2, 1, 1)]));
        assert_eq!(summaries[0].percentage, 66.67);
    }

    #[test]
    fn test_inner_join_drops_zero_cohort_from_summary() {
        let analyzer = DepartmentSatisfactionAnalyzer::default();
        let summaries = analyzer.summarize(&table(vec![dept("A", 1, 1, 1), dept("B", 0, 3, 10)]));
        let names: Vec<_> = summaries.iter().map(|s| s.department.as_str()).collect();
        assert_eq!(names, vec!["A"]);
    }

    #[test]
    fn test_left_zero_fill_reports_zero_percent() {
        let analyzer = DepartmentSatisfactionAnalyzer::new(AnalysisSettings {
            join: JoinPolicy::LeftZeroFill,
            ..AnalysisSettings::default()
        });
        let summaries = analyzer.summarize(&table(vec![dept("A", 1, 1, 1), dept("B", 0, 3, 10)]));

        let b = summaries.iter().find(|s| s.department == "B").unwrap();
        assert_eq!(b.high_sat_engaged_employees, 0);
        assert_eq!(b.total_employees, 3);
        assert_eq!(b.percentage, 0.0);

        // The threshold still removes it from the final result
        assert!(analyzer
            .analyze(&table(vec![dept("B", 0, 3, 10)]))
            .is_empty());
    }

    #[test]
    fn test_null_department_never_reported() {
        let mut rows = dept("A", 2, 0, 1);
        let mut orphan = EmployeeRecord::new(50, "ignored", 5, "High");
        orphan.department = None;
        rows.push(orphan);

        let analyzer = DepartmentSatisfactionAnalyzer::default();
        let results = analyzer.analyze(&EmployeeTable::new(rows));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].department, "A");
    }

    #[test]
    fn test_null_employee_ids_are_not_counted() {
        let mut rows = dept("A", 1, 1, 1);
        let mut anonymous = EmployeeRecord::new(0, "A", 3, "Low");
        anonymous.employee_id = None;
        rows.push(anonymous);

        let counts = count_by_department(rows.iter());
        assert_eq!(counts.get(&Some("A".to_string())), Some(&2));
    }

    #[test]
    fn test_department_with_only_null_ids_is_dropped() {
        let mut ghost = EmployeeRecord::new(0, "Ghost", 5, "High");
        ghost.employee_id = None;

        let analyzer = DepartmentSatisfactionAnalyzer::default();
        assert!(analyzer.summarize(&EmployeeTable::new(vec![ghost])).is_empty());
    }

    #[test]
    fn test_custom_threshold() {
        let analyzer = DepartmentSatisfactionAnalyzer::new(AnalysisSettings {
            threshold_percent: 40.0,
            ..AnalysisSettings::default()
        });
        let results = analyzer.analyze(&table(vec![dept("D", 5, 5, 1)]));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].percentage, 50.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(3.125, 2), 3.13);
        assert_eq!(round_half_up(66.666_666, 2), 66.67);
        assert_eq!(round_half_up(75.0, 2), 75.0);
        assert_eq!(percentage(2013, 4000), Some(50.33));
    }

    #[test]
    fn test_percentage_of_zero_total() {
        assert_eq!(percentage(0, 0), None);
        assert_eq!(percentage(1, 3), Some(33.33));
    }

    #[test]
    fn test_join_policy_parsing() {
        assert_eq!("inner".parse::<JoinPolicy>(), Ok(JoinPolicy::Inner));
        assert_eq!(
            "Left-Zero-Fill".parse::<JoinPolicy>(),
            Ok(JoinPolicy::LeftZeroFill)
        );
        assert!("outer".parse::<JoinPolicy>().is_err());
        assert_eq!(JoinPolicy::LeftZeroFill.to_string(), "left-zero-fill");
    }
}
