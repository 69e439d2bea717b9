use clap::Parser;
use sheet_preview::cli::{self, commands::report_error, PreviewOptions};
use sheet_preview::writer::OutputFormat;
use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "preview")]
#[command(about = "Print sheet names, row previews and column headers of a spreadsheet")]
#[command(long_about = "Preview - quick look inside a spreadsheet file

Prints the workbook's sheet names, then for every sheet (in file order)
the first rows as an aligned table followed by its column headers.
The first row of each sheet is taken as the header row.

FORMATS:
  .xlsx .xlsm .xlsb .xls .ods

EXAMPLES:
  preview budget.xlsx                 # First 20 rows of every sheet
  preview budget.xlsx --rows 5        # First 5 rows
  preview budget.xlsx --format json   # Machine-readable report

EXIT STATUS:
  0  report printed
  1  no reader for the format, or the file could not be read")]
#[command(version)]
struct Cli {
    /// Path to the spreadsheet file
    path: PathBuf,

    /// Number of rows to show per sheet
    #[arg(short = 'n', long = "rows", default_value = "20", env = "PREVIEW_ROWS")]
    rows: NonZeroUsize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "PREVIEW_FORMAT")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show debug logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "sheet_preview=debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }
    let color = !args.no_color;

    let options = PreviewOptions {
        row_limit: args.rows,
        format: args.format,
        color,
    };

    match cli::preview(args.path, options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&mut io::stdout(), &err, color);
            ExitCode::FAILURE
        }
    }
}
