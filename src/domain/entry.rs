// ============================================================
// Layer 3 — CompoundWordEntry Domain Type
// ============================================================
// One row of the reference table: a known compound word (samas)
// decomposed into its two meaning parts, the connector that sits
// between them, and a grammatical label code.
//
// Example row:
//   word:    "રાજપુત્ર"
//   part 1:  "રાજા"
//   middle:  "નો"
//   part 2:  "પુત્ર"
//   label:   "T"   → તત્પુરૂષ સમાસ
//
// The serde renames pin the dataset column contract:
//   Word, sangna1, Middle, sangna2, Label
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// A single known compound word with its decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundWordEntry {
    /// The compound word itself — the lookup key
    #[serde(rename = "Word")]
    pub word: String,

    /// First semantic constituent
    #[serde(rename = "sangna1")]
    pub meaning_part1: String,

    /// Connector placed between the two parts when expanding.
    /// May be empty in the dataset.
    #[serde(rename = "Middle", default)]
    pub connector: String,

    /// Second semantic constituent
    #[serde(rename = "sangna2")]
    pub meaning_part2: String,

    /// Grammatical label code (D, T, M, U, K, B, DV, or anything else)
    #[serde(rename = "Label")]
    pub label: String,
}

impl CompoundWordEntry {
    pub fn new(
        word:          impl Into<String>,
        meaning_part1: impl Into<String>,
        connector:     impl Into<String>,
        meaning_part2: impl Into<String>,
        label:         impl Into<String>,
    ) -> Self {
        Self {
            word:          word.into(),
            meaning_part1: meaning_part1.into(),
            connector:     connector.into(),
            meaning_part2: meaning_part2.into(),
            label:         label.into(),
        }
    }

    /// The text substituted for the word: `part1 + " " + connector + " " + part2`.
    ///
    /// An empty connector still contributes its two separating spaces,
    /// so the output is exactly the three fields joined by single spaces.
    pub fn expansion(&self) -> String {
        format!("{} {} {}", self.meaning_part1, self.connector, self.meaning_part2)
    }
}
