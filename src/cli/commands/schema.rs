//! The `schema` command

use anyhow::Result;

use crate::analysis::TextTable;
use crate::dataset::{schema, EMPLOYEE_SCHEMA, OUTPUT_HEADER};

pub fn render_schema() -> String {
    let mut table = TextTable::new(["Position", "Column", "Type"]);
    for (i, column) in EMPLOYEE_SCHEMA.iter().enumerate() {
        table.push_row([
            (i + 1).to_string(),
            column.name.to_string(),
            column.column_type.to_string(),
        ]);
    }

    format!(
        "Input columns (bound by position, header row required):\n{}\n\n{}\n\nOutput header: {}",
        table.render(),
        schema::describe(),
        OUTPUT_HEADER.join(",")
    )
}

pub fn run_schema() -> Result<()> {
    println!("{}", render_schema());
    Ok(())
}
