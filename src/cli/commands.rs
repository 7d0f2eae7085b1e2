// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands:
//   process — expand compound words in a text and name their types
//   lookup  — show one word's entry from the reference dataset
//   types   — list the samas label codes and their names
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;
use clap::{Args, Subcommand, ValueEnum};

use crate::application::process_use_case::ProcessConfig;
use crate::application::processor::ReplaceMode;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find, expand and classify compound words in Gujarati text
    Process(ProcessArgs),

    /// Look up a single compound word in the reference dataset
    Lookup(LookupArgs),

    /// List the samas label codes and their full names
    Types,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Reference dataset with columns Word, sangna1, Middle, sangna2, Label
    /// (.csv, .tsv or .json)
    #[arg(long, default_value = "data/samas_dataset.csv")]
    pub dataset: String,

    /// Text to process. Reads --file, or stdin, when absent
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from this file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Replace only whole whitespace-delimited tokens instead of
    /// every substring occurrence
    #[arg(long)]
    pub whole_tokens: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl From<&ProcessArgs> for ProcessConfig {
    fn from(a: &ProcessArgs) -> Self {
        ProcessConfig {
            dataset_path: a.dataset.clone(),
            replace_mode: if a.whole_tokens {
                ReplaceMode::WholeToken
            } else {
                ReplaceMode::Substring
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Reference dataset (.csv, .tsv or .json)
    #[arg(long, default_value = "data/samas_dataset.csv")]
    pub dataset: String,

    /// The compound word, matched exactly
    pub word: String,
}

impl From<&LookupArgs> for ProcessConfig {
    fn from(a: &LookupArgs) -> Self {
        ProcessConfig {
            dataset_path: a.dataset.clone(),
            ..ProcessConfig::default()
        }
    }
}
