use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tools ingest, transform, or emit data.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON serialization of a merge report fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Errors bubbled up from the PDF renderer implementation.
    #[error("PDF error: {0}")]
    Pdf(#[from] genpdf::error::Error),

    /// Raised when one of the menu extraction patterns fails to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Raised when a workbook does not follow the expected structure.
    #[error("invalid workbook structure: {0}")]
    InvalidWorkbook(String),

    /// Raised when the merge command is invoked without input files.
    #[error("no input files were provided")]
    NoInputs,

    /// Raised when a workbook's header differs from the first workbook's.
    #[error(
        "header of {} does not match the first workbook (expected {expected:?}, found {found:?})",
        .path.display()
    )]
    HeaderMismatch {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// Raised when every input workbook was empty and nothing can be merged.
    #[error("none of the input workbooks contained any data rows")]
    NoUsableData,

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
