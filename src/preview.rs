//! Workbook preview: sheet names, bounded row windows and column headers

use crate::error::{PreviewError, PreviewResult};
use crate::excel::{default_backends, WorkbookBackend};
use crate::types::{CellValue, SheetData, SheetPreview, SpreadsheetFormat, WorkbookPreview};
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::{debug, info};

/// Rows shown per sheet when no limit is given
pub const DEFAULT_ROW_LIMIT: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(n) => n,
    None => unreachable!(),
};

/// Builds [`WorkbookPreview`] reports using the registered reader backends
pub struct Previewer {
    backends: Vec<Box<dyn WorkbookBackend>>,
}

impl Default for Previewer {
    fn default() -> Self {
        Self::new()
    }
}

impl Previewer {
    /// Previewer using every backend compiled into this build
    pub fn new() -> Self {
        Self::with_backends(default_backends())
    }

    pub fn with_backends(backends: Vec<Box<dyn WorkbookBackend>>) -> Self {
        Self { backends }
    }

    /// Fail with `MissingDependency` when no reader backend is compiled in
    pub fn ensure_reader(&self) -> PreviewResult<()> {
        if self.backends.is_empty() {
            return Err(PreviewError::missing(
                "spreadsheet reader",
                "this build has no reader backend; rebuild with the `calamine` feature",
            ));
        }
        Ok(())
    }

    /// Check that some backend can read `format`, without touching the file
    pub fn probe(&self, format: SpreadsheetFormat) -> PreviewResult<&dyn WorkbookBackend> {
        self.ensure_reader()?;

        self.backends
            .iter()
            .find(|backend| backend.supports(format))
            .map(|backend| backend.as_ref())
            .ok_or_else(|| {
                PreviewError::missing(
                    format!("{} reader", format),
                    format!("no compiled-in backend reads .{} workbooks", format),
                )
            })
    }

    /// Open the workbook at `path` and preview up to `row_limit` rows of every sheet
    ///
    /// The whole report is built before returning, so a failure on any
    /// sheet yields an error and no partial report.
    pub fn preview(&self, path: &Path, row_limit: NonZeroUsize) -> PreviewResult<WorkbookPreview> {
        self.ensure_reader()?;

        let format =
            SpreadsheetFormat::from_path(path).map_err(|e| PreviewError::document_read(path, e))?;
        let backend = self.probe(format)?;
        debug!("Using {} backend for {}", backend.name(), path.display());

        let mut workbook = backend.open(path)?;
        let sheet_names = workbook.sheet_names();
        info!("Found {} sheets in {}", sheet_names.len(), path.display());

        let mut sheets = Vec::with_capacity(sheet_names.len());
        for name in &sheet_names {
            let data = workbook.read_sheet(name)?;
            let sheet = preview_sheet(data, row_limit);
            debug!(
                "Sheet '{}': {} columns, {} of {} rows",
                sheet.name,
                sheet.columns.len(),
                sheet.rows.len(),
                sheet.total_rows
            );
            sheets.push(sheet);
        }

        Ok(WorkbookPreview {
            path: path.to_path_buf(),
            format,
            sheet_names,
            sheets,
        })
    }
}

/// Cut a sheet down to its header row and the first `row_limit` data rows
pub fn preview_sheet(sheet: SheetData, row_limit: NonZeroUsize) -> SheetPreview {
    let mut rows = sheet.rows.into_iter();

    let Some(header_row) = rows.next() else {
        return SheetPreview {
            name: sheet.name,
            columns: Vec::new(),
            rows: Vec::new(),
            total_rows: 0,
        };
    };

    let columns = column_headers(&header_row);
    let width = columns.len();

    let mut window = Vec::new();
    let mut total_rows = 0;
    for mut row in rows {
        total_rows += 1;
        if window.len() < row_limit.get() {
            row.resize(width, CellValue::Empty);
            window.push(row);
        }
    }

    SheetPreview {
        name: sheet.name,
        columns,
        rows: window,
        total_rows,
    }
}

/// Column headers from the header row; blank cells become `Unnamed: <index>`
pub fn column_headers(header_row: &[CellValue]) -> Vec<String> {
    header_row
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            if cell.is_empty() {
                format!("Unnamed: {}", idx)
            } else {
                cell.to_string()
            }
        })
        .collect()
}
