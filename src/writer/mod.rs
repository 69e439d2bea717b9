//! Report rendering: aligned text tables (the default) or JSON

use crate::error::PreviewResult;
use crate::types::{SheetPreview, WorkbookPreview};
use colored::Colorize;
use std::fmt::Write as _;
use std::io::Write;

/// Output format of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text tables, one block per sheet
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Emit ANSI colors on sheet headers
    pub color: bool,
}

/// Separator between table columns
const COLUMN_GAP: &str = "  ";

/// Render the report as a string
pub fn render(report: &WorkbookPreview, options: RenderOptions) -> PreviewResult<String> {
    match options.format {
        OutputFormat::Text => Ok(render_text(report, options.color)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Render the report and write it to `out` in one go
pub fn write_report<W: Write>(
    out: &mut W,
    report: &WorkbookPreview,
    options: RenderOptions,
) -> PreviewResult<()> {
    let rendered = render(report, options)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn render_text(report: &WorkbookPreview, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Sheet names: {:?}", report.sheet_names);

    for sheet in &report.sheets {
        out.push('\n');
        let title = format!("--- Sheet: {} ---", sheet.name);
        if color {
            let _ = writeln!(out, "{}", title.bold().cyan());
        } else {
            let _ = writeln!(out, "{}", title);
        }
        out.push_str(&render_table(sheet));
        let _ = writeln!(out, "\nColumns: {:?}", sheet.columns);
    }

    out
}

/// Row window as an aligned table with a leading row-index column
///
/// The index column is left-aligned, value columns are right-aligned to
/// the widest of header and cells.
pub fn render_table(sheet: &SheetPreview) -> String {
    if sheet.is_empty() {
        return "Empty sheet\n".to_string();
    }

    let cells: Vec<Vec<String>> = sheet
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let index_width = sheet
        .rows
        .len()
        .saturating_sub(1)
        .to_string()
        .chars()
        .count();

    let widths: Vec<usize> = sheet
        .columns
        .iter()
        .enumerate()
        .map(|(col, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(col))
                .map(|value| value.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();

    let mut line = " ".repeat(index_width);
    for (header, width) in sheet.columns.iter().zip(&widths) {
        let _ = write!(line, "{COLUMN_GAP}{:>width$}", header, width = *width);
    }
    let _ = writeln!(out, "{}", line.trim_end());

    for (idx, row) in cells.iter().enumerate() {
        let mut line = format!("{:<width$}", idx, width = index_width);
        for (value, width) in row.iter().zip(&widths) {
            let _ = write!(line, "{COLUMN_GAP}{:>width$}", value, width = *width);
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    if sheet.is_truncated() {
        let _ = writeln!(
            out,
            "(showing {} of {} rows)",
            sheet.rows.len(),
            sheet.total_rows
        );
    }

    out
}
