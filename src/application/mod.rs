// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestration only: the processor applies the table to text,
// the use case loads the table and hands out processors.
//
// Rules for this layer:
//   - No printing (that's Layer 1)
//   - No file parsing (that's Layer 4)

// Tokenize → lookup → substitute → report
pub mod processor;

// Dataset loading + processing workflow for the CLI
pub mod process_use_case;
