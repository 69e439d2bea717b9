use crate::error::{PreviewError, PreviewResult};
use crate::preview::{Previewer, DEFAULT_ROW_LIMIT};
use crate::writer::{write_report, OutputFormat, RenderOptions};
use colored::Colorize;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options of the preview command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    pub row_limit: NonZeroUsize,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            row_limit: DEFAULT_ROW_LIMIT,
            format: OutputFormat::Text,
            color: false,
        }
    }
}

impl PreviewOptions {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: self.format,
            color: self.color,
        }
    }
}

/// Execute the preview command, writing the report to stdout
pub fn preview(file: PathBuf, options: PreviewOptions) -> PreviewResult<()> {
    let previewer = Previewer::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    preview_to(&previewer, &file, options, &mut out)
}

/// Build the report for `file` and write it to `out`
///
/// Nothing is written unless the whole workbook was read successfully.
pub fn preview_to<W: Write>(
    previewer: &Previewer,
    file: &Path,
    options: PreviewOptions,
    out: &mut W,
) -> PreviewResult<()> {
    info!(
        "Previewing {} ({} rows per sheet)",
        file.display(),
        options.row_limit
    );

    let report = previewer.preview(file, options.row_limit)?;
    write_report(out, &report, options.render_options())
}

/// Diagnostic line for a terminal error
pub fn diagnostic(err: &PreviewError, color: bool) -> String {
    let label = match err {
        PreviewError::MissingDependency { .. } => "Missing dependency:",
        PreviewError::DocumentRead { .. } => "Error reading spreadsheet:",
        PreviewError::Io(_) | PreviewError::Serialize(_) => "Error:",
    };
    let message = match err {
        PreviewError::DocumentRead { path, source } => format!("{}: {}", path.display(), source),
        other => other.to_string(),
    };

    if color {
        format!("{} {} {}", "❌".red(), label.bold().red(), message)
    } else {
        format!("❌ {} {}", label, message)
    }
}

/// Print a terminal error's diagnostic to `out`
///
/// The diagnostic is the user-facing report; the log line only shows up
/// with `--verbose` or a debug `RUST_LOG`.
pub fn report_error<W: Write>(out: &mut W, err: &PreviewError, color: bool) {
    debug!("Preview failed: {:?}", err);
    // stdout may be gone already; nothing left to report to
    let _ = writeln!(out, "{}", diagnostic(err, color));
}
