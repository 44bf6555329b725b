//! Interactive, line-based metadata collection.
//!
//! Questions are asked in field order. Answers are trimmed; mandatory fields
//! are always stored, optional fields only when the answer is non-empty.
//! End of input counts as an empty answer.

use super::record::{MetadataField, MetadataRecord};
use crate::error::{Result, SqlPromptError};
use std::io::{BufRead, Write};

const INSTRUCTIONS: &str = "\
Enter metadata in the following order:
1. Columns (e.g., column1, column2, ...)
2. Table (e.g., table_name)
3. Condition (optional, e.g., column1 > 100)
4. Case When (optional, e.g., country_name to numbers)
5. Window Function (optional, e.g., ROW_NUMBER() OVER(PARTITION BY column1 ORDER BY column2))
6. Subquery (optional, e.g., SELECT * FROM table2 WHERE column2 > 50)
7. Aggregation (optional, e.g., SUM(sales), COUNT(column1))
8. Join Type (optional, e.g., INNER JOIN, LEFT JOIN, RIGHT JOIN, FULL JOIN)
9. Advanced options: Join, GroupBy, Having, OrderBy
Leave optional fields blank to skip them.";

/// Ask for every field and build a record from the answers.
///
/// # Errors
///
/// * `UserError` if `Columns` or `Table` is left empty, or if the terminal
///   cannot be read from or written to.
pub fn collect_interactive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<MetadataRecord> {
    writeln!(output, "\n{}", INSTRUCTIONS).map_err(terminal_error)?;

    let mut record = MetadataRecord::new();
    for field in MetadataField::ALL {
        let answer = ask(input, output, &question(field))?;
        if field.is_mandatory() || !answer.is_empty() {
            record.set(field, answer);
        }
    }

    let missing = record.missing_mandatory();
    if !missing.is_empty() {
        tracing::debug!(?missing, "mandatory metadata left empty");
        return Err(SqlPromptError::UserError(
            "Columns and Table are required.".to_string(),
        ));
    }

    Ok(record)
}

fn question(field: MetadataField) -> String {
    if field.is_mandatory() {
        format!("{}: ", field.label())
    } else {
        format!("{} (optional): ", field.label())
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question).map_err(terminal_error)?;
    output.flush().map_err(terminal_error)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(terminal_error)?;
    Ok(line.trim().to_string())
}

fn terminal_error(e: std::io::Error) -> SqlPromptError {
    SqlPromptError::UserError(format!("failed to read metadata from the terminal: {}", e))
}
