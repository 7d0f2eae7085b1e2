// ============================================================
// Layer 4 — Reference Dataset Loader
// ============================================================
// Reads the compound-word reference dataset from disk.
//
// Column contract (header names are exact, order is free):
//   Word, sangna1, Middle, sangna2, Label
//
// Supported formats, chosen by file extension:
//   .csv   comma-separated, first row is the header
//   .tsv   tab-separated, first row is the header
//   .json  an array of objects keyed by the column names
//
// Spreadsheets (.xlsx) are not read directly; export the sheet
// to CSV first.
//
// Cell values are kept verbatim — no trimming — because lookups
// are exact string matches and the table must agree with what
// the user typed. The only thing stripped is a UTF-8 byte order
// mark in front of the first header, which spreadsheet exports
// like to add.
//
// Rows with an empty Word can never match a token, so they are
// skipped with a warning instead of failing the whole load.
//
// Reference: Rust Book §9 (Error Handling)
//            csv crate documentation (ReaderBuilder, StringRecord)

use anyhow::Result;
use std::{fs, path::{Path, PathBuf}};

use crate::domain::entry::CompoundWordEntry;
use crate::domain::traits::EntrySource;
use crate::infra::error::TableError;

/// Header names every reference dataset must carry
pub const REQUIRED_COLUMNS: [&str; 5] = ["Word", "sangna1", "Middle", "sangna2", "Label"];

const BOM: char = '\u{FEFF}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Tsv,
    Json,
}

impl TableFormat {
    /// Pick the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> std::result::Result<Self, TableError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match extension.as_str() {
            "csv"  => Ok(TableFormat::Csv),
            "tsv"  => Ok(TableFormat::Tsv),
            "json" => Ok(TableFormat::Json),
            _ => Err(TableError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Loads reference rows from a single dataset file.
/// Implements the EntrySource trait from Layer 3.
pub struct TableLoader {
    path: PathBuf,
}

impl TableLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load every usable row, in file order, with a typed error on failure.
    pub fn load(&self) -> std::result::Result<Vec<CompoundWordEntry>, TableError> {
        let format = TableFormat::from_path(&self.path)?;

        let bytes = fs::read(&self.path).map_err(|source| TableError::Io {
            path: self.path.clone(),
            source,
        })?;

        let entries = match format {
            TableFormat::Csv  => self.parse_delimited(&bytes, b',')?,
            TableFormat::Tsv  => self.parse_delimited(&bytes, b'\t')?,
            TableFormat::Json => self.parse_json(&bytes)?,
        };

        tracing::info!(
            "Loaded {} compound-word rows from '{}'",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }

    fn parse_delimited(
        &self,
        bytes:     &[u8],
        delimiter: u8,
    ) -> std::result::Result<Vec<CompoundWordEntry>, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(bytes);

        let headers = reader.headers().map_err(|e| self.csv_error(e))?.clone();
        let columns = ColumnIndex::from_headers(&headers).map_err(|column| {
            TableError::MissingColumn { path: self.path.clone(), column }
        })?;

        let mut entries = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let row   = result.map_err(|e| self.csv_error(e))?;
            let entry = columns.entry(&row);

            // +2: one for the header row, one for 1-based line numbers
            if entry.word.is_empty() {
                tracing::warn!("Skipping line {}: empty Word cell", idx + 2);
                continue;
            }
            entries.push(entry);
        }

        Ok(entries)
    }

    fn parse_json(&self, bytes: &[u8]) -> std::result::Result<Vec<CompoundWordEntry>, TableError> {
        let rows: Vec<CompoundWordEntry> = serde_json::from_slice(bytes)
            .map_err(|source| TableError::Json { path: self.path.clone(), source })?;

        let mut entries = Vec::with_capacity(rows.len());
        for (idx, entry) in rows.into_iter().enumerate() {
            if entry.word.is_empty() {
                tracing::warn!("Skipping JSON row {}: empty Word", idx);
                continue;
            }
            entries.push(entry);
        }
        Ok(entries)
    }

    fn csv_error(&self, source: csv::Error) -> TableError {
        TableError::Csv { path: self.path.clone(), source }
    }
}

/// Lets the application layer load rows without knowing the file format
impl EntrySource for TableLoader {
    fn load_all(&self) -> Result<Vec<CompoundWordEntry>> {
        Ok(self.load()?)
    }
}

// ─── Column positions ─────────────────────────────────────────────────────────
// Where each required column sits in the header row.
struct ColumnIndex {
    word:   usize,
    part1:  usize,
    middle: usize,
    part2:  usize,
    label:  usize,
}

impl ColumnIndex {
    /// Returns the name of the first required column that is missing
    fn from_headers(headers: &csv::StringRecord) -> std::result::Result<Self, &'static str> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches(BOM) == name)
                .ok_or(name)
        };

        Ok(Self {
            word:   find(REQUIRED_COLUMNS[0])?,
            part1:  find(REQUIRED_COLUMNS[1])?,
            middle: find(REQUIRED_COLUMNS[2])?,
            part2:  find(REQUIRED_COLUMNS[3])?,
            label:  find(REQUIRED_COLUMNS[4])?,
        })
    }

    /// Short rows read missing cells as empty strings
    fn entry(&self, row: &csv::StringRecord) -> CompoundWordEntry {
        let cell = |i: usize| row.get(i).unwrap_or("");
        CompoundWordEntry::new(
            cell(self.word),
            cell(self.part1),
            cell(self.middle),
            cell(self.part2),
            cell(self.label),
        )
    }
}
