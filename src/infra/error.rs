// ============================================================
// Layer 6 — Reference Table Errors
// ============================================================
// Everything that can stop a reference dataset from loading.
// Any of these puts the system into the degraded
// "reference table unavailable" mode: lookups find nothing,
// processing still succeeds.
//
// The other two error kinds of the system are deliberately not
// here: an unknown label code is shown verbatim, and blank input
// is reported through InputStatus::EmptyInput.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("cannot read reference table '{}': {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed delimited data in '{}': {source}", .path.display())]
    Csv {
        path:   PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed JSON in '{}': {source}", .path.display())]
    Json {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("reference table '{}' has no '{column}' column", .path.display())]
    MissingColumn {
        path:   PathBuf,
        column: &'static str,
    },

    #[error("unsupported reference table format '{extension}' for '{}' (expected csv, tsv or json)", .path.display())]
    UnsupportedFormat {
        path:      PathBuf,
        extension: String,
    },
}
