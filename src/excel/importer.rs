//! Calamine-backed workbook reader

use crate::error::{PreviewError, PreviewResult};
use crate::excel::{WorkbookBackend, WorkbookSource};
use crate::types::{CellValue, SheetData, SpreadsheetFormat};
use calamine::{open_workbook_auto, Data, DataType, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reader backend for every format calamine understands
#[derive(Debug, Default, Clone, Copy)]
pub struct CalamineImporter;

impl CalamineImporter {
    pub fn new() -> Self {
        Self
    }
}

impl WorkbookBackend for CalamineImporter {
    fn name(&self) -> &'static str {
        "calamine"
    }

    fn supports(&self, format: SpreadsheetFormat) -> bool {
        matches!(
            format,
            SpreadsheetFormat::Xlsx
                | SpreadsheetFormat::Xlsm
                | SpreadsheetFormat::Xlsb
                | SpreadsheetFormat::Xls
                | SpreadsheetFormat::Ods
        )
    }

    fn open(&self, path: &Path) -> PreviewResult<Box<dyn WorkbookSource>> {
        let workbook =
            open_workbook_auto(path).map_err(|e| PreviewError::document_read(path, e))?;
        debug!("Opened {} with calamine", path.display());

        Ok(Box::new(CalamineWorkbook {
            path: path.to_path_buf(),
            workbook,
        }))
    }
}

/// Workbook opened through calamine
struct CalamineWorkbook {
    path: PathBuf,
    workbook: Sheets<BufReader<File>>,
}

impl WorkbookSource for CalamineWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    fn read_sheet(&mut self, name: &str) -> PreviewResult<SheetData> {
        let range = self
            .workbook
            .worksheet_range(name)
            .map_err(|e| PreviewError::document_read(&self.path, e))?;

        Ok(SheetData::with_rows(name, range_to_rows(&range)))
    }
}

/// Convert a used range into rows of cells anchored at column A
///
/// calamine trims leading blank columns from the used range; they are
/// restored as `Empty` cells so column positions match the sheet.
fn range_to_rows(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    if range.is_empty() {
        return Vec::new();
    }

    let first_column = range.start().map_or(0, |(_, col)| col as usize);

    range
        .rows()
        .map(|row| {
            std::iter::repeat(CellValue::Empty)
                .take(first_column)
                .chain(row.iter().map(convert_cell))
                .collect()
        })
        .collect()
}

/// Convert a calamine cell to a `CellValue`
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::DateTime(dt) if dt.is_duration() => CellValue::Text(cell.to_string()),
        Data::DateTime(_) | Data::DateTimeIso(_) => match cell.as_datetime() {
            Some(dt) => CellValue::DateTime(dt),
            None => CellValue::Text(cell.to_string()),
        },
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
