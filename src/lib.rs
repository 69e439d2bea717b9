//! sheet-preview - quick look inside spreadsheet files
//!
//! Opens a workbook and reports its sheet names plus, for every sheet, the
//! column headers and a bounded window of its first rows.
//!
//! # Features
//!
//! - xlsx, xlsm, xlsb, xls and ods workbooks (cargo feature `calamine`, on by default)
//! - Aligned text report or JSON
//! - Fails fast with `MissingDependency` when no reader backend is compiled in
//!
//! # Example
//!
//! ```no_run
//! use sheet_preview::preview::{Previewer, DEFAULT_ROW_LIMIT};
//! use sheet_preview::writer::{render, RenderOptions};
//! use std::path::Path;
//!
//! let previewer = Previewer::new();
//! let report = previewer.preview(Path::new("budget.xlsx"), DEFAULT_ROW_LIMIT)?;
//!
//! println!("Sheets: {}", report.sheet_names.len());
//! print!("{}", render(&report, RenderOptions::default())?);
//! # Ok::<(), sheet_preview::error::PreviewError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod preview;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{PreviewError, PreviewResult};
pub use preview::Previewer;
pub use types::{CellValue, SheetPreview, SpreadsheetFormat, WorkbookPreview};
pub use writer::{render, OutputFormat, RenderOptions};
