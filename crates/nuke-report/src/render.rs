//! Terminal rendering helpers

use crate::entry::Entry;
use colored::Colorize;
use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL};

pub const IDENTIFIER_HEADER: &str = "Identifier";
pub const RESOURCE_TYPE_HEADER: &str = "Resource Type";
pub const STATUS_HEADER: &str = "Deleted Successfully";
pub const ERROR_HEADER: &str = "Error";

/// Section header: the title padded by a blank line on each side
pub fn render_section(title: &str, color: bool) -> String {
    let title = if color {
        title.bright_cyan().to_string()
    } else {
        title.to_string()
    };
    format!("\n{}\n", title)
}

/// Boxed table with a separator line between every row
///
/// Cells are never wrapped, so the layout does not depend on the terminal width.
pub fn render_table_with_header(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(headers.iter().map(|h| Cell::new(h)).collect::<Vec<_>>());

    for row in rows {
        table.add_row(row.into_iter().map(Cell::new).collect::<Vec<_>>());
    }

    table
}

/// Outcome table for the given entries, in the given order
pub fn outcome_table(entries: &[Entry], show_errors: bool) -> Table {
    let mut headers = vec![IDENTIFIER_HEADER, RESOURCE_TYPE_HEADER, STATUS_HEADER];
    if show_errors {
        headers.push(ERROR_HEADER);
    }

    let rows = entries
        .iter()
        .map(|entry| {
            let mut row = vec![
                entry.identifier.clone(),
                entry.resource_type.clone(),
                entry.status().glyph().to_string(),
            ];
            if show_errors {
                row.push(entry.error_message().unwrap_or_default());
            }
            row
        })
        .collect();

    render_table_with_header(&headers, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_section_plain() {
        assert_eq!(
            render_section("Nuking complete:", false),
            "\nNuking complete:\n"
        );
    }

    #[test]
    fn test_section_colored_keeps_title() {
        colored::control::set_override(true);
        let section = render_section("Nuking complete:", true);
        colored::control::unset_override();

        assert!(section.contains("Nuking complete:"));
        assert!(section.contains("\u{1b}[96m"));
        assert!(!section.contains("\u{1b}[1"));
    }

    #[test]
    fn test_outcome_table_rows() {
        let entries = vec![
            Entry::deleted("arn:1", "s3"),
            Entry::failed("arn:2", "s3", anyhow!("denied")),
        ];
        let table = outcome_table(&entries, false);
        assert_eq!(table.row_count(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("Identifier"));
        assert!(rendered.contains("Resource Type"));
        assert!(rendered.contains("Deleted Successfully"));
        assert!(!rendered.contains("denied"));
        assert!(rendered.contains('┌'));
    }

    #[test]
    fn test_outcome_table_error_column() {
        let entries = vec![Entry::failed("arn:2", "s3", anyhow!("denied"))];
        let rendered = outcome_table(&entries, true).to_string();
        assert!(rendered.contains("Error"));
        assert!(rendered.contains("denied"));
    }

    #[test]
    fn test_long_identifier_stays_on_one_line() {
        let arn = format!("arn:aws:s3:::{}", "x".repeat(150));
        let entries = vec![Entry::deleted(arn.clone(), "s3-bucket")];
        let rendered = outcome_table(&entries, false).to_string();

        let row = rendered
            .lines()
            .find(|line| line.contains('✅'))
            .unwrap();
        assert!(row.contains(&arn));
        assert!(row.contains("s3-bucket"));
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let table = outcome_table(&[], false);
        assert_eq!(table.row_count(), 0);
        assert!(table.to_string().contains("Identifier"));
    }
}
