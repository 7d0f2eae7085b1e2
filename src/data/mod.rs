// ============================================================
// Layer 4 — Data Layer
// ============================================================
// Everything between raw input and the processor:
//
//   dataset file (.csv / .tsv / .json)
//       │
//       ▼
//   TableLoader     → reads rows honouring the column contract
//       │
//       ▼
//   ReferenceTable  → indexes rows by word, read-only
//
//   input text
//       │
//       ▼
//   Tokenizer       → whitespace tokens (and segments)
//
// Reference: Rust Book §8 (Collections), §13 (Iterators)

/// Loads the reference dataset from disk
pub mod loader;

/// The indexed, immutable table of known compound words
pub mod reference_table;

/// Whitespace tokenization of input text
pub mod tokenizer;
