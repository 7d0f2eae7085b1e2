// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums, and traits describing what a
// compound word is and what processing produces.
//
// Rules for this layer:
//   - NO file I/O
//   - NO CLI types
//   - Only plain data and the traits other layers implement

// One reference-table row
pub mod entry;

// Label code → full samas type name
pub mod samas_type;

// Output of a processing call
pub mod result;

// Seams implemented by the data layer
pub mod traits;
