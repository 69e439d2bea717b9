use crate::error::UnknownFormat;
use chrono::{NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

//==============================================================================
// Spreadsheet Format Detection
//==============================================================================

/// Container format of a workbook, detected from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpreadsheetFormat {
    /// Office Open XML workbook
    Xlsx,
    /// Office Open XML workbook with macros
    Xlsm,
    /// Excel binary workbook
    Xlsb,
    /// Legacy Excel 97-2003 workbook
    Xls,
    /// OpenDocument spreadsheet
    Ods,
}

impl SpreadsheetFormat {
    pub const ALL: [SpreadsheetFormat; 5] = [
        SpreadsheetFormat::Xlsx,
        SpreadsheetFormat::Xlsm,
        SpreadsheetFormat::Xlsb,
        SpreadsheetFormat::Xls,
        SpreadsheetFormat::Ods,
    ];

    /// Detect format from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, UnknownFormat> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();

        match extension.as_str() {
            "xlsx" => Ok(SpreadsheetFormat::Xlsx),
            "xlsm" => Ok(SpreadsheetFormat::Xlsm),
            "xlsb" => Ok(SpreadsheetFormat::Xlsb),
            "xls" => Ok(SpreadsheetFormat::Xls),
            "ods" => Ok(SpreadsheetFormat::Ods),
            _ => Err(UnknownFormat { extension }),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SpreadsheetFormat::Xlsx => "xlsx",
            SpreadsheetFormat::Xlsm => "xlsm",
            SpreadsheetFormat::Xlsb => "xlsb",
            SpreadsheetFormat::Xls => "xls",
            SpreadsheetFormat::Ods => "ods",
        }
    }
}

impl fmt::Display for SpreadsheetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

//==============================================================================
// Cell Values
//==============================================================================

/// A single cell as handed over by a reader backend
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// Cell error such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

/// Format a number for display, removing unnecessary decimal places
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // Round to 6 decimal places for display
    let rounded = (n * 1e6).round() / 1e6;
    let text = format!("{:.6}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string();
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => f.write_str("NaN"),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(n) => f.write_str(&format_number(*n)),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
            CellValue::DateTime(dt) => {
                if dt.num_seconds_from_midnight() == 0 && dt.nanosecond() == 0 {
                    write!(f, "{}", dt.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S"))
                }
            }
            CellValue::Error(e) => f.write_str(e),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_none(),
            CellValue::Int(i) => serializer.serialize_i64(*i),
            CellValue::Float(n) if n.is_finite() => serializer.serialize_f64(*n),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

//==============================================================================
// Sheets
//==============================================================================

/// Used range of one sheet, as read from the workbook
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetData {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn with_rows(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

/// Preview block for one sheet: headers plus a bounded row window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetPreview {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    /// Number of data rows in the sheet (header excluded)
    pub total_rows: usize,
}

impl SheetPreview {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    /// True when the row window hides some of the sheet's rows
    pub fn is_truncated(&self) -> bool {
        self.total_rows > self.rows.len()
    }
}

/// Full report for one workbook, sheets in file order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkbookPreview {
    pub path: PathBuf,
    pub format: SpreadsheetFormat,
    pub sheet_names: Vec<String>,
    pub sheets: Vec<SheetPreview>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SpreadsheetFormat::from_path(Path::new("plan.xlsx")).unwrap(),
            SpreadsheetFormat::Xlsx
        );
        assert_eq!(
            SpreadsheetFormat::from_path(Path::new("dir/Budget.XLS")).unwrap(),
            SpreadsheetFormat::Xls
        );
        assert_eq!(
            SpreadsheetFormat::from_path(Path::new("sheet.ods")).unwrap(),
            SpreadsheetFormat::Ods
        );
        assert_eq!(
            SpreadsheetFormat::from_path(Path::new("macro.xlsm")).unwrap(),
            SpreadsheetFormat::Xlsm
        );
    }

    #[test]
    fn test_format_from_path_unknown() {
        let err = SpreadsheetFormat::from_path(Path::new("data.csv")).unwrap_err();
        assert_eq!(err.extension, "csv");

        let err = SpreadsheetFormat::from_path(Path::new("no_extension")).unwrap_err();
        assert_eq!(err.extension, "");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1.0 / 3.0), "0.333333");
        assert_eq!(format_number(-2.25), "-2.25");
        assert_eq!(format_number(-0.0000001), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Empty.to_string(), "NaN");
        assert_eq!(CellValue::Int(42).to_string(), "42");
        assert_eq!(CellValue::Float(1500.0).to_string(), "1500");
        assert_eq!(CellValue::Text("적립식".to_string()).to_string(), "적립식");
        assert_eq!(CellValue::Bool(true).to_string(), "True");
        assert_eq!(CellValue::Bool(false).to_string(), "False");
        assert_eq!(CellValue::Error("#DIV/0!".to_string()).to_string(), "#DIV/0!");
    }

    #[test]
    fn test_cell_value_display_datetime() {
        let midnight = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(CellValue::DateTime(midnight).to_string(), "2024-03-01");

        let afternoon = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap();
        assert_eq!(
            CellValue::DateTime(afternoon).to_string(),
            "2024-03-01 14:30:05"
        );
    }

    #[test]
    fn test_cell_value_is_empty() {
        assert!(CellValue::Empty.is_empty());
        assert!(CellValue::Text(String::new()).is_empty());
        assert!(!CellValue::Int(0).is_empty());
    }

    #[test]
    fn test_sheet_preview_truncation() {
        let preview = SheetPreview {
            name: "A".to_string(),
            columns: vec!["x".to_string()],
            rows: vec![vec![CellValue::Int(1)]],
            total_rows: 3,
        };
        assert!(preview.is_truncated());
        assert!(!preview.is_empty());
    }
}
