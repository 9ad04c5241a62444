//! Paginated tabular text report: a title block, fixed-size table pages
//! each carrying its own header row and page footer, and a trailing summary
//! page with the aggregate counts.

use super::{row, COLUMNS};
use crate::error::Result;
use crate::model::Student;
use crate::stats::Stats;
use chrono::Utc;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// Records per table page.
pub const ROWS_PER_PAGE: usize = 25;

pub fn write_report<W: Write>(writer: &mut W, students: &[Student], title: &str) -> Result<()> {
    let generated = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    writeln!(writer, "{}", title)?;
    writeln!(writer, "{}", "=".repeat(title.width().max(40)))?;
    writeln!(writer, "Generated: {}", generated)?;
    writeln!(writer, "Total records: {}", students.len())?;

    let rows: Vec<[String; 7]> = students.iter().map(row).collect();
    let widths = column_widths(&rows);
    let page_count = students.len().div_ceil(ROWS_PER_PAGE).max(1);

    // An empty snapshot still renders one empty table page.
    let pages: Vec<&[[String; 7]]> = if rows.is_empty() {
        vec![&rows[..]]
    } else {
        rows.chunks(ROWS_PER_PAGE).collect()
    };

    for (page_idx, chunk) in pages.into_iter().enumerate() {
        writeln!(writer)?;
        writeln!(writer, "{}", format_line(&COLUMNS.map(String::from), &widths))?;
        writeln!(writer, "{}", rule(&widths))?;
        for cells in chunk {
            writeln!(writer, "{}", format_line(cells, &widths))?;
        }
        writeln!(writer)?;
        writeln!(writer, "Page {}/{}", page_idx + 1, page_count)?;
    }

    write_summary(writer, students)?;
    Ok(())
}

/// The trailing summary page: total, per-gender counts and the
/// distinct-language count.
fn write_summary<W: Write>(writer: &mut W, students: &[Student]) -> Result<()> {
    let stats = Stats::collect(students);

    writeln!(writer)?;
    writeln!(writer, "Summary")?;
    writeln!(writer, "{}", "-".repeat(40))?;
    writeln!(writer, "Total records:   {}", stats.total)?;
    writeln!(writer, "Male:            {}", stats.male)?;
    writeln!(writer, "Female:          {}", stats.female)?;
    writeln!(writer, "Others:          {}", stats.other)?;
    writeln!(writer, "Languages:       {}", stats.languages)?;
    Ok(())
}

fn column_widths(rows: &[[String; 7]]) -> [usize; 7] {
    let mut widths = [0usize; 7];
    for (i, header) in COLUMNS.iter().enumerate() {
        widths[i] = header.width();
    }
    for cells in rows {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    widths
}

fn format_line(cells: &[String; 7], widths: &[usize; 7]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        line.push_str(&" ".repeat(widths[i].saturating_sub(cell.width())));
    }
    line.trim_end().to_string()
}

fn rule(widths: &[usize; 7]) -> String {
    let total: usize = widths.iter().sum::<usize>() + (widths.len() - 1) * 2;
    "-".repeat(total)
}
