//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str = "EmployeeID,Department,JobTitle,SatisfactionRating,EngagementLevel,ReportsConcerns,ProvidedSuggestions";

/// Builds an employee CSV row by row
#[derive(Default)]
pub struct EmployeeCsvBuilder {
    rows: Vec<String>,
    next_id: u32,
}

impl EmployeeCsvBuilder {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Add `count` employees to `department` with the given rating and engagement
    pub fn employees(mut self, department: &str, count: usize, rating: i32, level: &str) -> Self {
        for _ in 0..count {
            self.rows.push(format!(
                "{},{},Analyst,{},{},false,true",
                self.next_id, department, rating, level
            ));
            self.next_id += 1;
        }
        self
    }

    /// Add a raw data line
    pub fn raw(mut self, line: &str) -> Self {
        self.rows.push(line.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut csv = String::from(HEADER);
        csv.push('\n');
        for row in &self.rows {
            csv.push_str(row);
            csv.push('\n');
        }
        csv
    }
}

/// Test context that manages temporary directories and cleanup
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Get the path to the test directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file in the test directory
    pub fn create_file(&self, path: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let full_path = self.temp_dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, content)?;
        Ok(full_path)
    }

    /// Read a file from the test directory
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let full_path = self.temp_dir.path().join(path);
        Ok(fs::read_to_string(full_path)?)
    }

    /// Check if a file exists
    pub fn file_exists(&self, path: impl AsRef<Path>) -> bool {
        self.temp_dir.path().join(path).exists()
    }
}

/// Parse an output CSV into (department, percentage) pairs sorted by department
pub fn parse_output(content: &str) -> Result<Vec<(String, f64)>> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push((record[0].to_string(), record[1].parse()?));
    }
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(rows)
}
