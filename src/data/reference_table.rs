// ============================================================
// Layer 4 — Reference Table
// ============================================================
// The in-memory table of known compound words.
//
// Built once at startup, read-only afterwards. Rows are kept
// in table order and a HashMap indexes them by `word`, so a
// lookup is one hash probe rather than a scan of every row.
//
// Duplicate words:
//   The dataset is supposed to have one row per word. When it
//   doesn't, the FIRST row in table order wins; later rows for
//   the same word stay in `entries()` but are never returned by
//   `lookup`. They are counted and logged.
//
// Degraded mode:
//   If the dataset cannot be loaded the table is "unavailable".
//   It behaves exactly like an empty table — every lookup misses
//   — so processing reports "no compound words found" instead of
//   failing the request.
//
// The table holds only owned data and is never mutated, so it is
// Send + Sync and can be shared by reference across threads.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;

use crate::data::loader::TableLoader;
use crate::domain::entry::CompoundWordEntry;
use crate::domain::traits::{CompoundLookup, EntrySource};

#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    /// Every loaded row, in table order
    entries: Vec<CompoundWordEntry>,

    /// word → position of its first row in `entries`
    index: HashMap<String, usize>,

    /// False when the dataset could not be loaded
    available: bool,

    /// Rows ignored by lookup because an earlier row had the same word
    duplicate_count: usize,
}

impl ReferenceTable {
    /// Build the table from rows in table order.
    pub fn from_entries(entries: Vec<CompoundWordEntry>) -> Self {
        let mut index           = HashMap::with_capacity(entries.len());
        let mut duplicate_count = 0usize;

        for (pos, entry) in entries.iter().enumerate() {
            if index.contains_key(&entry.word) {
                duplicate_count += 1;
                tracing::warn!(
                    "Duplicate compound word '{}' at row {} — keeping the first row",
                    entry.word,
                    pos
                );
                continue;
            }
            index.insert(entry.word.clone(), pos);
        }

        Self { entries, index, available: true, duplicate_count }
    }

    /// The degraded table used when the dataset failed to load
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Build the table from any row source
    pub fn from_source(source: &impl EntrySource) -> Result<Self> {
        let table = Self::from_entries(source.load_all()?);
        tracing::info!(
            "Reference table ready: {} words ({} duplicate rows ignored)",
            table.len(),
            table.duplicate_count
        );
        Ok(table)
    }

    /// Load the dataset at `path`, falling back to the degraded table
    /// (and logging why) if anything goes wrong.
    pub fn load_or_degrade(path: impl AsRef<Path>) -> Self {
        match Self::from_source(&TableLoader::new(path.as_ref())) {
            Ok(table) => table,
            Err(e) => {
                tracing::error!("Reference table unavailable: {e:#}");
                Self::unavailable()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Number of distinct lookup keys
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn duplicate_count(&self) -> usize {
        self.duplicate_count
    }

    /// All rows in table order, duplicates included
    pub fn entries(&self) -> impl Iterator<Item = &CompoundWordEntry> {
        self.entries.iter()
    }
}

impl CompoundLookup for ReferenceTable {
    fn lookup(&self, word: &str) -> Option<&CompoundWordEntry> {
        self.index.get(word).map(|&pos| &self.entries[pos])
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReferenceTable {
        ReferenceTable::from_entries(vec![
            CompoundWordEntry::new("રાજપુત્ર", "રાજા", "નો", "પુત્ર", "T"),
            CompoundWordEntry::new("માતાપિતા", "માતા", "અને", "પિતા", "D"),
        ])
    }

    #[test]
    fn test_exact_lookup() {
        let t = sample();
        assert_eq!(t.lookup("રાજપુત્ર").map(|e| e.label.as_str()), Some("T"));
        assert!(t.contains("માતાપિતા"));
        assert!(!t.contains("પુત્ર"));
    }

    #[test]
    fn test_no_normalisation() {
        let t = sample();
        assert!(!t.contains(" રાજપુત્ર"));
        assert!(!t.contains("રાજપુત્ર."));
    }

    #[test]
    fn test_first_duplicate_wins() {
        let t = ReferenceTable::from_entries(vec![
            CompoundWordEntry::new("W", "a", "-", "b", "T"),
            CompoundWordEntry::new("W", "c", "-", "d", "K"),
        ]);
        assert_eq!(t.lookup("W").map(|e| e.meaning_part1.as_str()), Some("a"));
        assert_eq!(t.len(), 1);
        assert_eq!(t.duplicate_count(), 1);
        assert_eq!(t.entries().count(), 2);
    }

    #[test]
    fn test_unavailable_table_finds_nothing() {
        let t = ReferenceTable::unavailable();
        assert!(!t.is_available());
        assert!(t.is_empty());
        assert!(t.lookup("રાજપુત્ર").is_none());
    }

    #[test]
    fn test_load_or_degrade_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let t   = ReferenceTable::load_or_degrade(dir.path().join("missing.csv"));
        assert!(!t.is_available());
        assert!(!t.contains("રાજપુત્ર"));
    }

    #[test]
    fn test_load_or_degrade_reads_dataset() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("samas.csv");
        std::fs::write(&path, "Word,sangna1,Middle,sangna2,Label\nરાજપુત્ર,રાજા,નો,પુત્ર,T\n").unwrap();

        let t = ReferenceTable::load_or_degrade(&path);
        assert!(t.is_available());
        assert!(t.contains("રાજપુત્ર"));
    }

    #[test]
    fn test_from_source_reads_any_entry_source() {
        struct Fixed;
        impl EntrySource for Fixed {
            fn load_all(&self) -> Result<Vec<CompoundWordEntry>> {
                Ok(vec![CompoundWordEntry::new("ત્રિકોણ", "ત્રણ", "ખૂણાનો", "સમૂહ", "DV")])
            }
        }

        let t = ReferenceTable::from_source(&Fixed).unwrap();
        assert!(t.is_available());
        assert!(t.contains("ત્રિકોણ"));
    }

    #[test]
    fn test_table_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReferenceTable>();
    }
}
