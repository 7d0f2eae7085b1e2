// ============================================================
// Layer 6 — Result Rendering
// ============================================================
// Turns results into printable strings. Kept out of the CLI so
// the exact output layout can be unit tested.
//
// Text layout for a processed input:
//
//   Modified Text:
//   આ રાજા નો પુત્ર છે
//
//   Identified Compound Words and Their Types:
//   રાજપુત્ર: તત્પુરૂષ સમાસ
//
// JSON layout is the serde form of ProcessResult.

use anyhow::{Context, Result};

use crate::domain::entry::CompoundWordEntry;
use crate::domain::result::ProcessResult;
use crate::domain::samas_type::{display_name_for, SamasType};

pub const NO_COMPOUNDS: &str = "No compound words found.";

pub fn render_text(result: &ProcessResult) -> String {
    let report = if result.has_compounds() {
        result.report.as_str()
    } else {
        NO_COMPOUNDS
    };

    format!(
        "Modified Text:\n{}\n\nIdentified Compound Words and Their Types:\n{}",
        result.expanded_text, report
    )
}

pub fn render_json(result: &ProcessResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Cannot serialise processing result")
}

/// "<word> → <expansion> (<type name>)"
pub fn render_entry(entry: &CompoundWordEntry) -> String {
    format!(
        "{} → {} ({})",
        entry.word,
        entry.expansion(),
        display_name_for(&entry.label)
    )
}

/// One "<code>\t<name>" line per known samas type
pub fn render_types() -> String {
    SamasType::ALL
        .iter()
        .map(|t| format!("{}\t{}", t.code(), t.display_name()))
        .collect::<Vec<_>>()
        .join("\n")
}
