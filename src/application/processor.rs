// ============================================================
// Layer 2 — Compound Word Processor
// ============================================================
// The lookup-and-substitution engine. Given the reference table
// it turns raw text into:
//
//   tokenize()            → whitespace tokens
//   find_compound_words() → tokens present in the table
//                           (original order, duplicates kept)
//   expand()              → text with every compound replaced by
//                           "part1 connector part2", plus the found words
//   describe_types()      → "<word>: <full type name>" lines
//   process()             → all of the above in one ProcessResult
//
// Every method is a pure function of its input and the borrowed,
// immutable table. The processor itself holds no state between
// calls, so one table can back any number of processors.
//
// Replacement modes:
//   Substring  — every occurrence of the word anywhere in the text
//                is replaced, even inside a longer token. A word
//                "રાજ" in the table will also rewrite the start of
//                "રાજપુત્ર". This is the default.
//   WholeToken — only whitespace-delimited tokens equal to the
//                word are replaced; whitespace is kept byte for byte.

use std::collections::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::data::tokenizer::{Segment, Tokenizer};
use crate::domain::result::{ProcessResult, TypedWord, InputStatus};
use crate::domain::samas_type::display_name_for;
use crate::domain::traits::CompoundLookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplaceMode {
    #[default]
    Substring,
    WholeToken,
}

pub struct CompoundWordProcessor<'a, L: CompoundLookup + ?Sized> {
    table:     &'a L,
    tokenizer: Tokenizer,
    mode:      ReplaceMode,
}

impl<'a, L: CompoundLookup + ?Sized> CompoundWordProcessor<'a, L> {
    /// A processor over `table` using substring replacement
    pub fn new(table: &'a L) -> Self {
        Self {
            table,
            tokenizer: Tokenizer::new(),
            mode:      ReplaceMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ReplaceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ReplaceMode {
        self.mode
    }

    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.tokenizer.tokenize(text)
    }

    /// Tokens of `text` that are known compound words, left to right.
    /// A word appearing twice is returned twice.
    pub fn find_compound_words(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
            .into_iter()
            .filter(|token| self.table.contains(token))
            .map(str::to_string)
            .collect()
    }

    /// Replace every found compound word with its expansion.
    /// Returns the substituted text and the found words (duplicates kept).
    pub fn expand(&self, text: &str) -> (String, Vec<String>) {
        let found_words = self.find_compound_words(text);
        if found_words.is_empty() {
            return (text.to_string(), found_words);
        }

        // Distinct words in first-occurrence order, each with its expansion
        let mut seen          = HashSet::new();
        let mut substitutions = Vec::new();
        for word in &found_words {
            if !seen.insert(word.as_str()) {
                continue;
            }
            if let Some(entry) = self.table.lookup(word) {
                substitutions.push((word.as_str(), entry.expansion()));
            }
        }

        let expanded = match self.mode {
            ReplaceMode::Substring  => replace_substrings(text, &substitutions),
            ReplaceMode::WholeToken => self.replace_tokens(text, &substitutions),
        };

        (expanded, found_words)
    }

    /// One "<word>: <full type name>" line per word, joined with '\n'.
    /// Words missing from the table produce no line.
    pub fn describe_types(&self, found_words: &[String]) -> String {
        self.typed_words(found_words)
            .iter()
            .map(TypedWord::report_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The (word, full type name) pairs behind describe_types()
    pub fn typed_words(&self, found_words: &[String]) -> Vec<TypedWord> {
        found_words
            .iter()
            .filter_map(|word| {
                self.table
                    .lookup(word)
                    .map(|entry| TypedWord::new(word.as_str(), display_name_for(&entry.label)))
            })
            .collect()
    }

    /// Expand `text` and describe every compound word found in it.
    /// Blank input comes back unchanged with status EmptyInput.
    pub fn process(&self, text: &str) -> ProcessResult {
        if text.trim().is_empty() {
            tracing::debug!("Blank input — nothing to process");
            return ProcessResult::empty_input(text);
        }

        let (expanded_text, found_words) = self.expand(text);
        let typed_words = self.typed_words(&found_words);
        let report      = typed_words
            .iter()
            .map(TypedWord::report_line)
            .collect::<Vec<_>>()
            .join("\n");

        tracing::info!("Found {} compound word occurrences", found_words.len());

        ProcessResult {
            status: InputStatus::Processed,
            expanded_text,
            found_words,
            typed_words,
            report,
        }
    }

    fn replace_tokens(&self, text: &str, substitutions: &[(&str, String)]) -> String {
        let lookup: HashMap<&str, &str> = substitutions
            .iter()
            .map(|(word, expansion)| (*word, expansion.as_str()))
            .collect();

        let mut out = String::with_capacity(text.len());
        for segment in self.tokenizer.segments(text) {
            match segment {
                Segment::Token(token) => match lookup.get(token) {
                    Some(expansion) => out.push_str(expansion),
                    None            => out.push_str(token),
                },
                Segment::Space(space) => out.push_str(space),
            }
        }
        out
    }
}

/// Global substring replacement, one pass per distinct word, in order.
/// A later word is also replaced inside earlier expansions.
fn replace_substrings(text: &str, substitutions: &[(&str, String)]) -> String {
    let mut out = text.to_string();
    for (word, expansion) in substitutions {
        tracing::debug!("Replacing '{}' with '{}'", word, expansion);
        out = out.replace(word, expansion);
    }
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::reference_table::ReferenceTable;
    use crate::domain::entry::CompoundWordEntry;

    fn table() -> ReferenceTable {
        ReferenceTable::from_entries(vec![
            CompoundWordEntry::new("રાજપુત્ર", "રાજા", "નો", "પુત્ર", "T"),
            CompoundWordEntry::new("માતાપિતા", "માતા", "અને", "પિતા", "D"),
            CompoundWordEntry::new("ત્રિકોણ", "ત્રણ", "ખૂણાનો", "સમૂહ", "DV"),
            CompoundWordEntry::new("અજાણ્યું", "અ", "-", "જાણ્યું", "X"),
        ])
    }

    fn letters() -> ReferenceTable {
        ReferenceTable::from_entries(vec![
            CompoundWordEntry::new("B", "b1", "+", "b2", "K"),
            CompoundWordEntry::new("C", "c1", "+", "c2", "B"),
        ])
    }

    #[test]
    fn test_end_to_end_example() {
        let t = table();
        let p = CompoundWordProcessor::new(&t);

        let (text, found) = p.expand("આ રાજપુત્ર છે");
        assert_eq!(text, "આ રાજા નો પુત્ર છે");
        assert_eq!(found, vec!["રાજપુત્ર"]);
        assert_eq!(p.describe_types(&found), "રાજપુત્ર: તત્પુરૂષ સમાસ");
    }

    #[test]
    fn test_order_is_preserved() {
        let t = letters();
        let p = CompoundWordProcessor::new(&t);
        assert_eq!(p.find_compound_words("A B C"), vec!["B", "C"]);
        assert_eq!(p.find_compound_words("C A B"), vec!["C", "B"]);
    }

    #[test]
    fn test_duplicates_are_reported_and_replaced_once() {
        let t = letters();
        let p = CompoundWordProcessor::new(&t);

        let (text, found) = p.expand("B B");
        assert_eq!(found, vec!["B", "B"]);
        assert_eq!(text, "b1 + b2 b1 + b2");
        assert_eq!(p.describe_types(&found), "B: કર્મધારય સમાસ\nB: કર્મધારય સમાસ");
    }

    #[test]
    fn test_expansion_containing_the_word_is_not_re_expanded() {
        let t = ReferenceTable::from_entries(vec![
            CompoundWordEntry::new("B", "B", "and", "C", "D"),
        ]);
        let p = CompoundWordProcessor::new(&t);
        let (text, _) = p.expand("B B");
        assert_eq!(text, "B and C B and C");
    }

    #[test]
    fn test_no_match_passthrough() {
        let t = table();
        let p = CompoundWordProcessor::new(&t);
        let (text, found) = p.expand("આ ઘર છે");
        assert_eq!(text, "આ ઘર છે");
        assert!(found.is_empty());
        assert_eq!(p.describe_types(&found), "");
    }

    #[test]
    fn test_unknown_label_passes_through() {
        let t = table();
        let p = CompoundWordProcessor::new(&t);
        let found = p.find_compound_words("અજાણ્યું");
        assert_eq!(p.describe_types(&found), "અજાણ્યું: X");
    }

    #[test]
    fn test_describe_types_is_idempotent() {
        let t     = table();
        let p     = CompoundWordProcessor::new(&t);
        let found = p.find_compound_words("માતાપિતા ને ત્રિકોણ રાજપુત્ર");
        assert_eq!(p.describe_types(&found), p.describe_types(&found));
        assert_eq!(
            p.describe_types(&found),
            "માતાપિતા: દ્વંદ્વ સમાસ\nત્રિકોણ: દ્વીગુ સમાસ\nરાજપુત્ર: તત્પુરૂષ સમાસ"
        );
    }

    #[test]
    fn test_describe_types_skips_words_not_in_table() {
        let t = table();
        let p = CompoundWordProcessor::new(&t);
        let words = vec!["ઘર".to_string(), "રાજપુત્ર".to_string()];
        assert_eq!(p.describe_types(&words), "રાજપુત્ર: તત્પુરૂષ સમાસ");
    }

    #[test]
    fn test_empty_input() {
        let t = table();
        let p = CompoundWordProcessor::new(&t);

        for input in ["", "   "] {
            let r = p.process(input);
            assert_eq!(r.status, InputStatus::EmptyInput);
            assert_eq!(r.expanded_text, input);
            assert!(r.found_words.is_empty());
            assert_eq!(r.report, "");
        }
    }

    #[test]
    fn test_process_combines_expand_and_report() {
        let t = table();
        let p = CompoundWordProcessor::new(&t);
        let r = p.process("રાજપુત્ર અને માતાપિતા");

        assert_eq!(r.status, InputStatus::Processed);
        assert_eq!(r.expanded_text, "રાજા નો પુત્ર અને માતા અને પિતા");
        assert_eq!(r.found_words, vec!["રાજપુત્ર", "માતાપિતા"]);
        assert_eq!(r.typed_words[1], TypedWord::new("માતાપિતા", "દ્વંદ્વ સમાસ"));
        assert_eq!(r.report, "રાજપુત્ર: તત્પુરૂષ સમાસ\nમાતાપિતા: દ્વંદ્વ સમાસ");
        assert!(r.has_compounds());
    }

    #[test]
    fn test_substring_mode_rewrites_inside_longer_tokens() {
        let t = ReferenceTable::from_entries(vec![
            CompoundWordEntry::new("AB", "a", "-", "b", "T"),
        ]);
        let p = CompoundWordProcessor::new(&t);
        let (text, found) = p.expand("AB XABY");
        assert_eq!(found, vec!["AB"]);
        assert_eq!(text, "a - b Xa - bY");
    }

    #[test]
    fn test_whole_token_mode_leaves_longer_tokens_alone() {
        let t = ReferenceTable::from_entries(vec![
            CompoundWordEntry::new("AB", "a", "-", "b", "T"),
        ]);
        let p = CompoundWordProcessor::new(&t).with_mode(ReplaceMode::WholeToken);
        let (text, found) = p.expand("AB  XABY\tAB");
        assert_eq!(found, vec!["AB", "AB"]);
        assert_eq!(text, "a - b  XABY\ta - b");
    }

    #[test]
    fn test_unavailable_table_degrades_to_no_matches() {
        let t = ReferenceTable::unavailable();
        let p = CompoundWordProcessor::new(&t);
        let r = p.process("આ રાજપુત્ર છે");
        assert_eq!(r.status, InputStatus::Processed);
        assert_eq!(r.expanded_text, "આ રાજપુત્ર છે");
        assert!(!r.has_compounds());
    }

    #[test]
    fn test_works_through_a_trait_object() {
        let t: &dyn CompoundLookup = &letters();
        let p = CompoundWordProcessor::new(t);
        assert_eq!(p.find_compound_words("B"), vec!["B"]);
    }
}
