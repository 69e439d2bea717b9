use std::path::{Path, PathBuf};
use thiserror::Error;

pub type PreviewResult<T> = Result<T, PreviewError>;

/// Boxed cause carried by [`PreviewError::DocumentRead`]
pub type ReadCause = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("{capability} not available: {hint}")]
    MissingDependency { capability: String, hint: String },

    #[error("Error reading spreadsheet {}: {source}", .path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: ReadCause,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PreviewError {
    /// Build a `MissingDependency` error
    pub fn missing(capability: impl Into<String>, hint: impl Into<String>) -> Self {
        PreviewError::MissingDependency {
            capability: capability.into(),
            hint: hint.into(),
        }
    }

    /// Wrap a backend failure for the document at `path`
    pub fn document_read(path: &Path, source: impl Into<ReadCause>) -> Self {
        PreviewError::DocumentRead {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

/// Raised when a path does not carry a recognized spreadsheet extension
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized spreadsheet extension '{extension}' (expected xlsx, xlsm, xlsb, xls or ods)")]
pub struct UnknownFormat {
    pub extension: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_missing_dependency_display() {
        let err = PreviewError::missing("xlsx reader", "rebuild with the `calamine` feature");
        assert_eq!(
            err.to_string(),
            "xlsx reader not available: rebuild with the `calamine` feature"
        );
    }

    #[test]
    fn test_document_read_keeps_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
        let err = PreviewError::document_read(Path::new("plan.xlsx"), cause);

        assert!(err.to_string().contains("plan.xlsx"));
        assert!(err.to_string().contains("No such file"));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "No such file");
    }

    #[test]
    fn test_document_read_from_string_cause() {
        let err = PreviewError::document_read(Path::new("a.ods"), "sheet 'X' is corrupt");
        assert_eq!(
            err.to_string(),
            "Error reading spreadsheet a.ods: sheet 'X' is corrupt"
        );
    }

    #[test]
    fn test_unknown_format_display() {
        let err = UnknownFormat {
            extension: "csv".to_string(),
        };
        assert!(err.to_string().starts_with("unrecognized spreadsheet extension 'csv'"));
    }
}
