//! Spreadsheet reader backends
//!
//! A backend is a compiled-in reader for one or more container formats.
//! The previewer probes the registered backends before touching the file
//! system, so a build without a reader fails fast with
//! `PreviewError::MissingDependency` instead of degrading silently.
//!
//! The default build registers [`CalamineImporter`] (cargo feature
//! `calamine`), which reads xlsx, xlsm, xlsb, xls and ods workbooks.

#[cfg(feature = "calamine")]
mod importer;

#[cfg(feature = "calamine")]
pub use importer::CalamineImporter;

use crate::error::PreviewResult;
use crate::types::{SheetData, SpreadsheetFormat};
use std::path::Path;

/// A reader capable of opening workbooks of some formats
pub trait WorkbookBackend {
    /// Short name used in logs and diagnostics
    fn name(&self) -> &'static str;

    fn supports(&self, format: SpreadsheetFormat) -> bool;

    /// Open the workbook at `path`
    ///
    /// Failures are reported as `PreviewError::DocumentRead`.
    fn open(&self, path: &Path) -> PreviewResult<Box<dyn WorkbookSource>>;
}

/// An opened workbook
pub trait WorkbookSource {
    /// Sheet names in the order stored in the file
    fn sheet_names(&self) -> Vec<String>;

    /// Read the used range of a sheet
    fn read_sheet(&mut self, name: &str) -> PreviewResult<SheetData>;
}

/// Backends compiled into this build, in lookup order
pub fn default_backends() -> Vec<Box<dyn WorkbookBackend>> {
    #[allow(unused_mut)]
    let mut backends: Vec<Box<dyn WorkbookBackend>> = Vec::new();

    #[cfg(feature = "calamine")]
    backends.push(Box::new(CalamineImporter::new()));

    backends
}
