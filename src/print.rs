use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel, PageView};
use roster::model::Student;
use roster::stats::Stats;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 28;
const HEADERS: [&str; 7] = [
    "ID",
    "Name",
    "Email",
    "Phone",
    "Language",
    "Gender",
    "Date of Birth",
];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_page(view: &PageView) {
    if view.students.is_empty() {
        println!("No students found");
        return;
    }

    let rows: Vec<[String; 7]> = view.students.iter().map(cells).collect();
    let widths = column_widths(&rows);

    let header = HEADERS
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header.bold());

    for cells in &rows {
        let line = cells
            .iter()
            .enumerate()
            .map(|(i, c)| pad(c, widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }

    println!();
    println!(
        "{}",
        format!(
            "Showing {} to {} of {} students (page {}/{})",
            view.showing_from,
            view.showing_to,
            view.total_matched,
            view.page,
            view.total_pages.max(1)
        )
        .dimmed()
    );
}

pub(super) fn print_stats(stats: &Stats, recent: &[Student]) {
    println!("{}", "Registry".bold());
    println!("  Total students:  {}", stats.total);
    println!("  Male:            {}", stats.male);
    println!("  Female:          {}", stats.female);
    println!("  Others:          {}", stats.other);

    println!();
    println!("{}", "Language distribution".bold());
    for (language, count) in &stats.language_counts {
        println!("  {:<16} {}", language, count);
    }
    if stats.language_counts.is_empty() {
        println!("  {}", "none".dimmed());
    }

    println!();
    println!("{}", "Recent students".bold());
    if recent.is_empty() {
        println!("  {}", "No students added yet.".dimmed());
    }
    for student in recent {
        println!(
            "  {} {} {}",
            student.fields.name,
            student.fields.email.dimmed(),
            student.fields.gender.blue()
        );
    }
}

fn cells(student: &Student) -> [String; 7] {
    let f = &student.fields;
    [
        student.id.to_string(),
        truncate_to_width(&f.name, MAX_CELL_WIDTH),
        truncate_to_width(&f.email, MAX_CELL_WIDTH),
        truncate_to_width(&f.phone, MAX_CELL_WIDTH),
        truncate_to_width(&f.language, MAX_CELL_WIDTH),
        truncate_to_width(&f.gender, MAX_CELL_WIDTH),
        truncate_to_width(&f.dob, MAX_CELL_WIDTH),
    ]
}

fn column_widths(rows: &[[String; 7]]) -> [usize; 7] {
    let mut widths = [0usize; 7];
    for (i, h) in HEADERS.iter().enumerate() {
        widths[i] = h.width();
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    widths
}

fn pad(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let cut = truncate_to_width("a very long value indeed", 10);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 10);
    }

    #[test]
    fn padding_fills_to_width() {
        assert_eq!(pad("ab", 5), "ab   ");
        // Never shrinks.
        assert_eq!(pad("abcdef", 3), "abcdef");
    }
}
