//! CSV output of the qualifying departments

use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use super::schema::OUTPUT_HEADER;
use crate::analysis::DepartmentPercentage;
use crate::error::{AnalysisError, ErrorCode, ErrorExt, Result};

/// Write the results to `path`, replacing any existing file.
///
/// Rows are staged in a temporary file in the target directory and renamed
/// into place once complete, so a failed run leaves no partial output.
pub fn write_results(rows: &[DepartmentPercentage], path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir).to_write_error(ErrorCode::WRITE_DIRECTORY, path)?;

    let mut staged =
        tempfile::NamedTempFile::new_in(dir).to_write_error(ErrorCode::WRITE_GENERIC, path)?;
    debug!("Staging output in {}", staged.path().display());

    write_csv(rows, staged.as_file_mut()).map_err(|e| e.with_path(path))?;

    staged
        .persist(path)
        .to_write_error(ErrorCode::WRITE_PERSIST, path)?;

    info!("Wrote {} row(s) to {}", rows.len(), path.display());
    Ok(())
}

/// Serialize the header and rows to any writer.
pub fn write_csv<W: Write>(rows: &[DepartmentPercentage], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);

    writer.write_record(OUTPUT_HEADER).map_err(serialization)?;
    for row in rows {
        writer.serialize(row).map_err(serialization)?;
    }
    writer.flush().map_err(|e| {
        AnalysisError::write_with_code(ErrorCode::WRITE_GENERIC, "Flush failed", None)
            .with_source(e)
    })?;
    Ok(())
}

fn serialization(err: csv::Error) -> AnalysisError {
    AnalysisError::write_with_code(
        ErrorCode::WRITE_SERIALIZATION,
        "Result row could not be serialized",
        None,
    )
    .with_source(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(department: &str, percentage: f64) -> DepartmentPercentage {
        DepartmentPercentage {
            department: department.to_string(),
            percentage,
        }
    }

    fn render(rows: &[DepartmentPercentage]) -> String {
        let mut buffer = Vec::new();
        write_csv(rows, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_empty_result_writes_header_only() {
        assert_eq!(render(&[]), "Department,Percentage\n");
    }

    #[test]
    fn test_percentages_keep_a_fraction_digit() {
        assert_eq!(
            render(&[row("A", 75.0), row("B", 66.67), row("C", 100.0)]),
            "Department,Percentage\nA,75.0\nB,66.67\nC,100.0\n"
        );
    }

    #[test]
    fn test_department_with_comma_is_quoted() {
        assert_eq!(
            render(&[row("R&D, West", 80.0)]),
            "Department,Percentage\n\"R&D, West\",80.0\n"
        );
    }

    #[test]
    fn test_write_results_creates_dirs_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("outputs").join("result.csv");

        write_results(&[row("A", 75.0)], &path).unwrap();
        write_results(&[], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Department,Percentage\n");

        let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn test_write_into_a_file_path_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_results(&[row("A", 75.0)], &blocker.join("result.csv")).unwrap_err();
        assert!(matches!(err, AnalysisError::Write { .. }));
        assert_eq!(err.exit_code(), 5);
    }
}
