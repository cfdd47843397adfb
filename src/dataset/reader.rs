//! Typed CSV loading of the employee table

use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use super::schema;
use crate::analysis::{EmployeeRecord, EmployeeTable};
use crate::error::{AnalysisError, ErrorCode, ErrorExt, Result};

/// Load the employee table from a CSV file with a header row.
pub fn read_employees(path: &Path) -> Result<EmployeeTable> {
    let file = match File::open(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AnalysisError::not_found(path).with_source(e));
        }
        opened => opened.to_analysis(
            ErrorCode::INPUT_UNREADABLE,
            format!("Cannot open {}", path.display()),
        )?,
    };

    debug!("Reading employee table from {}", path.display());
    let table = read_employees_from(BufReader::new(file))?;
    info!(
        "Loaded {} employee record(s) from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Load the employee table from any CSV source.
pub fn read_employees_from<R: Read>(source: R) -> Result<EmployeeTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(source);

    let header = reader.headers()?.clone();
    if header.is_empty() {
        warn!("Input has no header row, treating it as an empty table");
        return Ok(EmployeeTable::default());
    }
    schema::check_header(&header)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(locate)?;
        let raw: RawEmployeeRow = row.deserialize(None).map_err(locate)?;
        records.push(raw.into_record(row.position().map(|pos| pos.line()))?);
    }

    let duplicates = count_duplicate_ids(&records);
    if duplicates > 0 {
        warn!("{} row(s) repeat an EmployeeID already seen", duplicates);
    }

    Ok(EmployeeTable::new(records))
}

const REPORTS_CONCERNS: usize = 5;
const PROVIDED_SUGGESTIONS: usize = 6;

/// A row as bound by position, before boolean columns are interpreted.
#[derive(Debug, Deserialize)]
struct RawEmployeeRow {
    employee_id: Option<i32>,
    department: Option<String>,
    job_title: Option<String>,
    satisfaction_rating: Option<i32>,
    engagement_level: Option<String>,
    reports_concerns: Option<String>,
    provided_suggestions: Option<String>,
}

impl RawEmployeeRow {
    fn into_record(self, line: Option<u64>) -> Result<EmployeeRecord> {
        Ok(EmployeeRecord {
            employee_id: self.employee_id,
            department: self.department,
            job_title: self.job_title,
            satisfaction_rating: self.satisfaction_rating,
            engagement_level: self.engagement_level,
            reports_concerns: parse_flag(self.reports_concerns, REPORTS_CONCERNS, line)?,
            provided_suggestions: parse_flag(
                self.provided_suggestions,
                PROVIDED_SUGGESTIONS,
                line,
            )?,
        })
    }
}

/// Booleans accept `true`/`false` in any letter case.
fn parse_flag(value: Option<String>, column: usize, line: Option<u64>) -> Result<Option<bool>> {
    match value.as_deref() {
        None => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(v) if v.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(v) => Err(AnalysisError::schema_with_code(
            ErrorCode::SCHEMA_TYPE_MISMATCH,
            format!("invalid boolean '{}', expected true or false", v),
            line,
            schema::column_name(column).map(str::to_string),
        )),
    }
}

/// Map a CSV error to a schema error that names the offending column.
fn locate(err: csv::Error) -> AnalysisError {
    let column = match err.kind() {
        csv::ErrorKind::Deserialize { err: de, .. } => de
            .field()
            .and_then(|index| schema::column_name(index as usize))
            .map(str::to_string),
        _ => None,
    };

    let mut mapped = AnalysisError::from(err);
    if let AnalysisError::Schema { column: slot, .. } = &mut mapped {
        *slot = column;
    }
    mapped
}

fn count_duplicate_ids(records: &[EmployeeRecord]) -> usize {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .filter_map(|r| r.employee_id)
        .filter(|id| !seen.insert(*id))
        .count()
}
