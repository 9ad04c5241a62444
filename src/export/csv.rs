//! Delimited text artifact: one header line, then one comma-separated line
//! per record with every field but the id wrapped in quotes.

use super::{row, COLUMNS};
use crate::error::Result;
use crate::model::Student;
use std::io::Write;

pub fn write_csv<W: Write>(writer: &mut W, students: &[Student]) -> Result<()> {
    writeln!(writer, "{}", COLUMNS.join(","))?;

    for student in students {
        let cells = row(student);
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            if i == 0 {
                // The numeric id goes out bare.
                line.push_str(cell);
            } else {
                line.push_str(&quote(cell));
            }
        }
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
