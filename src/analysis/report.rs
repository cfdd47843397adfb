//! Plain-text table rendering for intermediate and final tables

use super::engine::DepartmentCounts;
use super::models::{DepartmentPercentage, DepartmentSummary};

const NULL: &str = "null";

/// A bordered text table with right-aligned cells.
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        let border = widths.iter().fold(String::from("+"), |mut acc, w| {
            acc.push_str(&"-".repeat(*w));
            acc.push('+');
            acc
        });

        let format_row = |cells: &[String]| {
            let mut line = String::from("|");
            for (i, width) in widths.iter().enumerate() {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                line.push_str(&format!("{:>width$}|", cell, width = width));
            }
            line
        };

        let mut out = Vec::with_capacity(self.rows.len() + 4);
        out.push(border.clone());
        out.push(format_row(&self.headers));
        out.push(border.clone());
        for row in &self.rows {
            out.push(format_row(row));
        }
        out.push(border);
        out.join("\n")
    }
}

/// Render a percentage the way it is written to the output CSV.
pub fn format_percentage(value: f64) -> String {
    format!("{:?}", value)
}

pub fn counts_table(count_column: &str, counts: &DepartmentCounts) -> String {
    let mut table = TextTable::new(["Department", count_column]);
    for (department, count) in counts {
        table.push_row([
            department.clone().unwrap_or_else(|| NULL.to_string()),
            count.to_string(),
        ]);
    }
    table.render()
}

pub fn summary_table(summaries: &[DepartmentSummary]) -> String {
    let mut table = TextTable::new([
        "Department",
        "HighSatEngagedEmployees",
        "TotalEmployees",
        "Percentage",
    ]);
    for s in summaries {
        table.push_row([
            s.department.clone(),
            s.high_sat_engaged_employees.to_string(),
            s.total_employees.to_string(),
            format_percentage(s.percentage),
        ]);
    }
    table.render()
}

pub fn percentage_table(results: &[DepartmentPercentage]) -> String {
    let mut table = TextTable::new(["Department", "Percentage"]);
    for r in results {
        table.push_row([r.department.clone(), format_percentage(r.percentage)]);
    }
    table.render()
}
