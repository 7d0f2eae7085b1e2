// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting pieces used by more than one layer:
//
//   error.rs   — typed failures of reference-table loading
//                (thiserror), wrapped in anyhow at the edges
//
//   render.rs  — turns a ProcessResult into the text or JSON
//                the CLI prints

/// Reference-table loading errors
pub mod error;

/// Text / JSON rendering of processing results
pub mod render;
