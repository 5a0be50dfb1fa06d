//! Grid-style table rendering for the terminal
//!
//! Purely presentational: the final record sequence is printed as a grid
//! table with a header row. Nothing downstream consumes the output.

use crate::crawler::JournalRecord;
use std::io::{self, Write};

const HEADERS: [&str; 4] = ["Name", "Affiliation", "Accreditation", "Link"];

/// Prints the record table to stdout
pub fn print_table(records: &[JournalRecord]) {
    let mut stdout = io::stdout();
    // A closed stdout is not worth failing the run over.
    let _ = render_table(&mut stdout, records);
}

/// Renders the record table to any writer
///
/// An empty dataset prints an explicit indicator instead of a bare header.
pub fn render_table(out: &mut impl Write, records: &[JournalRecord]) -> io::Result<()> {
    if records.is_empty() {
        writeln!(out, "(no records)")?;
        return Ok(());
    }

    let rows: Vec<[&str; 4]> = records
        .iter()
        .map(|r| {
            [
                r.name.as_str(),
                r.affiliation.as_str(),
                r.accreditation.as_str(),
                r.link.as_str(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    write_separator(out, &widths, '-')?;
    write_row(out, &widths, &HEADERS)?;
    write_separator(out, &widths, '=')?;
    for row in &rows {
        write_row(out, &widths, row)?;
        write_separator(out, &widths, '-')?;
    }

    Ok(())
}

fn write_separator(out: &mut impl Write, widths: &[usize], fill: char) -> io::Result<()> {
    for width in widths {
        write!(out, "+{}", fill.to_string().repeat(width + 2))?;
    }
    writeln!(out, "+")
}

fn write_row(out: &mut impl Write, widths: &[usize], cells: &[&str]) -> io::Result<()> {
    for (cell, width) in cells.iter().zip(widths) {
        let width = *width;
        write!(out, "| {:<width$} ", cell)?;
    }
    writeln!(out, "|")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> JournalRecord {
        JournalRecord {
            name: name.to_string(),
            affiliation: "Univ A".to_string(),
            accreditation: "S2".to_string(),
            link: "https://example.com".to_string(),
        }
    }

    fn rendered(records: &[JournalRecord]) -> String {
        let mut buffer = Vec::new();
        render_table(&mut buffer, records).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_empty_dataset_prints_indicator() {
        assert_eq!(rendered(&[]), "(no records)\n");
    }

    #[test]
    fn test_table_contains_headers_and_cells() {
        let output = rendered(&[record("Jurnal Teknologi")]);

        assert!(output.contains("| Name"));
        assert!(output.contains("| Affiliation"));
        assert!(output.contains("Jurnal Teknologi"));
        assert!(output.contains("https://example.com"));
    }

    #[test]
    fn test_table_shape() {
        let output = rendered(&[record("A"), record("B")]);
        let lines: Vec<&str> = output.lines().collect();

        // separator, header, header separator, then (row, separator) per record
        assert_eq!(lines.len(), 3 + 2 * 2);
        assert!(lines[0].starts_with('+'));
        assert!(lines[2].contains('='));

        // All lines are equally wide.
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
    }
}
