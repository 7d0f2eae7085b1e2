// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, routes to the use case, prints.
// All processing is delegated to Layer 2.

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;

use commands::{Commands, LookupArgs, OutputFormat, ProcessArgs};
use crate::application::process_use_case::{ProcessConfig, ProcessUseCase};
use crate::domain::result::InputStatus;
use crate::infra::render;

#[derive(Parser, Debug)]
#[command(
    name = "samas-finder",
    version,
    about = "Find Gujarati compound words (samas), expand them, and name their types."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match &self.command {
            Commands::Process(args) => run_process(args),
            Commands::Lookup(args)  => run_lookup(args),
            Commands::Types         => {
                println!("{}", render::render_types());
                Ok(())
            }
        }
    }
}

fn run_process(args: &ProcessArgs) -> Result<()> {
    let text     = read_input(args)?;
    let use_case = ProcessUseCase::new(ProcessConfig::from(args));
    let result   = use_case.process(&text);

    // Blank input is a prompt to the user, not a failure
    if result.status == InputStatus::EmptyInput && args.format == OutputFormat::Text {
        eprintln!("Please enter some text.");
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => println!("{}", render::render_text(&result)),
        OutputFormat::Json => println!("{}", render::render_json(&result)?),
    }
    Ok(())
}

fn run_lookup(args: &LookupArgs) -> Result<()> {
    let use_case = ProcessUseCase::new(ProcessConfig::from(args));
    match use_case.lookup(&args.word) {
        Some(entry) => println!("{}", render::render_entry(entry)),
        None        => println!("'{}' is not a known compound word", args.word),
    }
    Ok(())
}

/// --text wins, then --file, then stdin
fn read_input(args: &ProcessArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read input file '{}'", path.display()));
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Cannot read text from stdin")?;
    Ok(buf)
}
