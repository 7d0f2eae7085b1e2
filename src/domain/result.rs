// ============================================================
// Layer 3 — Processing Result Types
// ============================================================
// What one `process(text)` call hands back to the presentation
// layer: the substituted text, the found words (duplicates kept,
// original order), the (word, type name) pairs, and the joined
// report string.
//
// Blank input is not a failure. It comes back with
// status = EmptyInput so the caller can decide how to prompt.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputStatus {
    /// The text had at least one non-whitespace character
    Processed,
    /// The text was empty or whitespace-only
    EmptyInput,
}

/// A found compound word paired with its full type name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedWord {
    pub word:      String,
    pub type_name: String,
}

impl TypedWord {
    pub fn new(word: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self { word: word.into(), type_name: type_name.into() }
    }

    /// One report line: "<word>: <full type name>"
    pub fn report_line(&self) -> String {
        format!("{}: {}", self.word, self.type_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub status:        InputStatus,
    pub expanded_text: String,
    pub found_words:   Vec<String>,
    pub typed_words:   Vec<TypedWord>,
    pub report:        String,
}

impl ProcessResult {
    /// The no-op result for blank input: text unchanged, nothing found
    pub fn empty_input(text: &str) -> Self {
        Self {
            status:        InputStatus::EmptyInput,
            expanded_text: text.to_string(),
            found_words:   Vec::new(),
            typed_words:   Vec::new(),
            report:        String::new(),
        }
    }

    pub fn has_compounds(&self) -> bool {
        !self.found_words.is_empty()
    }
}
