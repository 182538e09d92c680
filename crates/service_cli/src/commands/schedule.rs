//! Schedule command implementation
//!
//! Expands stored obligation records into the occurrences due inside a window.

use std::io::Write;
use std::path::Path;

use obligation_core::types::Date;
use obligation_schedule::{ObligationDescriptor, ScheduleOccurrence, ScheduleWindow};
use tracing::{info, warn};

use super::load_records;
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Run the schedule command
///
/// A missing `start` defaults to `today`, a missing `end` to `today` plus the
/// configured window length. Non-recurring obligations are skipped. Returns
/// the number of occurrences written.
pub fn run<W: Write>(
    obligations: &Path,
    start: Option<&str>,
    end: Option<&str>,
    today: Date,
    config: &CliConfig,
    out: &mut W,
) -> Result<usize> {
    let records = load_records(obligations)?;

    let mut descriptors: Vec<ObligationDescriptor> = Vec::with_capacity(records.len());
    for record in &records {
        let descriptor = record.to_descriptor()?;
        if !descriptor.frequency().is_recurring() {
            info!(
                obligation = descriptor.id(),
                frequency = %descriptor.frequency(),
                "skipping non-recurring obligation"
            );
            continue;
        }
        descriptors.push(descriptor);
    }

    let start = start.map(Date::parse).transpose()?;
    let end = end.map(Date::parse).transpose()?;
    let window = ScheduleWindow::resolve(start, end, today, config.default_window_days)?;
    if window.is_empty() {
        warn!(start = %window.start(), end = %window.end(), "window start is after its end");
    }

    info!(
        obligations = descriptors.len(),
        start = %window.start(),
        end = %window.end(),
        "generating schedule"
    );
    let occurrences = window.generate_all(&descriptors)?;

    match config.output_format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &occurrences)?;
            writeln!(out)?;
        }
        OutputFormat::Table => write_table(out, &occurrences)?,
    }

    info!(count = occurrences.len(), "schedule complete");
    Ok(occurrences.len())
}

fn write_table<W: Write>(out: &mut W, occurrences: &[ScheduleOccurrence]) -> std::io::Result<()> {
    const HEADERS: [&str; 4] = ["Obligation", "Period", "Due Date", "Status"];

    let rows: Vec<[String; 4]> = occurrences
        .iter()
        .map(|o| {
            [
                o.org_obligation_id().to_string(),
                o.period().to_string(),
                o.due_date().to_string(),
                o.status().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| format!(" {:<w$} ", cell, w = *w))
            .collect();
        format!("│{}│", padded.join("│"))
    };

    writeln!(out, "{}", rule("┌", "┬", "┐"))?;
    writeln!(out, "{}", line(HEADERS.map(String::from).as_slice()))?;
    writeln!(out, "{}", rule("├", "┼", "┤"))?;
    if rows.is_empty() {
        let empty = ["(none)".to_string(), String::new(), String::new(), String::new()];
        writeln!(out, "{}", line(empty.as_slice()))?;
    }
    for row in &rows {
        writeln!(out, "{}", line(row.as_slice()))?;
    }
    writeln!(out, "{}", rule("└", "┴", "┘"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_layout() {
        let occurrences = vec![ScheduleOccurrence::due(
            "org-1/vat",
            "2024-Q1".to_string(),
            Date::from_ymd(2024, 3, 31).unwrap(),
        )];

        let mut buffer: Vec<u8> = Vec::new();
        write_table(&mut buffer, &occurrences).unwrap();
        let table = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("Obligation"));
        assert!(lines[3].contains("org-1/vat"));
        assert!(lines[3].contains("2024-03-31"));
        assert!(lines[3].contains("DUE"));
        // Every row is padded to the same display width.
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_empty_table() {
        let mut buffer: Vec<u8> = Vec::new();
        write_table(&mut buffer, &[]).unwrap();
        assert!(String::from_utf8(buffer).unwrap().contains("(none)"));
    }
}
