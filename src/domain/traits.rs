// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams the rest of the system is written against:
//
//   EntrySource     — anything that can produce reference rows
//                     (TableLoader reads CSV/TSV/JSON files)
//   CompoundLookup  — exact-match lookup of a compound word
//                     (ReferenceTable is the implementation)
//
// The processor only sees CompoundLookup, so tests can hand it
// a table built in memory without touching the filesystem.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::entry::CompoundWordEntry;

// ─── EntrySource ──────────────────────────────────────────────────────────────
/// Any component that can load compound-word rows, in table order.
pub trait EntrySource {
    fn load_all(&self) -> Result<Vec<CompoundWordEntry>>;
}

// ─── CompoundLookup ───────────────────────────────────────────────────────────
/// Exact string lookup of compound words. No normalisation of any kind.
pub trait CompoundLookup {
    /// Return the entry for `word`, or None if it is not a known compound
    fn lookup(&self, word: &str) -> Option<&CompoundWordEntry>;

    /// Convenience predicate, same as `lookup(word).is_some()`
    fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }
}
