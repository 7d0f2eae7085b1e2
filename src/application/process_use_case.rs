// ============================================================
// Layer 2 — ProcessUseCase
// ============================================================
// Wires the pipeline together for the CLI:
//
//   Step 1: Load the reference dataset   (Layer 4 - data)
//           → degraded table if it fails
//   Step 2: Build a processor over it    (Layer 2)
//   Step 3: Process text / look up words (Layer 2)
//
// The table is loaded exactly once, when the use case is built,
// and then only borrowed. The CLI owns printing.

use serde::{Deserialize, Serialize};

use crate::application::processor::{CompoundWordProcessor, ReplaceMode};
use crate::data::reference_table::ReferenceTable;
use crate::domain::entry::CompoundWordEntry;
use crate::domain::result::ProcessResult;
use crate::domain::traits::CompoundLookup;

// ─── Processing Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessConfig {
    pub dataset_path: String,
    pub replace_mode: ReplaceMode,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            dataset_path: "data/samas_dataset.csv".to_string(),
            replace_mode: ReplaceMode::Substring,
        }
    }
}

// ─── ProcessUseCase ───────────────────────────────────────────────────────────
pub struct ProcessUseCase {
    config: ProcessConfig,
    table:  ReferenceTable,
}

impl ProcessUseCase {
    /// Load the dataset named in `config`. Never fails: an unreadable
    /// dataset leaves the use case running on the degraded table.
    pub fn new(config: ProcessConfig) -> Self {
        tracing::info!("Loading reference dataset: {}", config.dataset_path);
        let table = ReferenceTable::load_or_degrade(&config.dataset_path);
        Self { config, table }
    }

    /// Use an already-built table
    pub fn with_table(config: ProcessConfig, table: ReferenceTable) -> Self {
        Self { config, table }
    }

    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    pub fn processor(&self) -> CompoundWordProcessor<'_, ReferenceTable> {
        CompoundWordProcessor::new(&self.table).with_mode(self.config.replace_mode)
    }

    pub fn process(&self, text: &str) -> ProcessResult {
        self.processor().process(text)
    }

    pub fn lookup(&self, word: &str) -> Option<&CompoundWordEntry> {
        self.table.lookup(word)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::result::InputStatus;

    fn use_case(mode: ReplaceMode) -> ProcessUseCase {
        let table = ReferenceTable::from_entries(vec![
            CompoundWordEntry::new("રાજ", "રાજ", "-", "ગાદી", "K"),
            CompoundWordEntry::new("રાજપુત્ર", "રાજા", "નો", "પુત્ર", "T"),
        ]);
        let config = ProcessConfig { replace_mode: mode, ..ProcessConfig::default() };
        ProcessUseCase::with_table(config, table)
    }

    #[test]
    fn test_config_mode_reaches_processor() {
        let uc = use_case(ReplaceMode::WholeToken);
        assert_eq!(uc.processor().mode(), ReplaceMode::WholeToken);

        let r = uc.process("રાજ રાજપુત્ર");
        assert_eq!(r.expanded_text, "રાજ - ગાદી રાજા નો પુત્ર");
    }

    #[test]
    fn test_substring_mode_over_matches_prefix_words() {
        let uc = use_case(ReplaceMode::Substring);
        let r  = uc.process("રાજ રાજપુત્ર");
        // "રાજ" is replaced first, including inside "રાજપુત્ર"
        assert_eq!(r.expanded_text, "રાજ - ગાદી રાજ - ગાદીપુત્ર");
        assert_eq!(r.found_words, vec!["રાજ", "રાજપુત્ર"]);
    }

    #[test]
    fn test_missing_dataset_degrades() {
        let dir    = tempfile::tempdir().unwrap();
        let config = ProcessConfig {
            dataset_path: dir.path().join("none.csv").to_string_lossy().into_owned(),
            replace_mode: ReplaceMode::Substring,
        };
        let uc = ProcessUseCase::new(config);
        assert!(!uc.table().is_available());

        let r = uc.process("આ રાજપુત્ર છે");
        assert_eq!(r.status, InputStatus::Processed);
        assert_eq!(r.expanded_text, "આ રાજપુત્ર છે");
        assert_eq!(r.report, "");
    }

    #[test]
    fn test_lookup_delegates_to_table() {
        let uc = use_case(ReplaceMode::Substring);
        assert_eq!(uc.lookup("રાજપુત્ર").map(|e| e.expansion()), Some("રાજા નો પુત્ર".to_string()));
        assert!(uc.lookup("પુત્ર").is_none());
    }
}
