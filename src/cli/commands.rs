//! Command implementations for the spellreport CLI.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;
use log::{debug, info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ReportConfig;
use crate::error::{Result, SpellReportError};
use crate::pipeline::{InputDocument, run_batch};

/// Execute a CLI command.
pub fn execute_command(args: SpellReportArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_files(check_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest_words(suggest_args.clone(), &args),
    }
}

/// Spell check files and write the report archive.
fn check_files(args: CheckArgs, cli_args: &SpellReportArgs) -> Result<()> {
    let config = resolve_config(&args.dictionary)?;
    let paths = collect_inputs(&args.inputs, &config)?;
    if paths.is_empty() {
        return Err(SpellReportError::no_input("no .txt input files given"));
    }

    if cli_args.verbosity() > 1 {
        println!("Checking {} files", paths.len());
    }

    let start = Instant::now();
    let engine = config.build_engine()?;
    let documents = paths
        .iter()
        .map(InputDocument::from_path)
        .collect::<Result<Vec<_>>>()?;

    let batch = run_batch(
        &documents,
        &engine,
        Local::now().naive_local(),
        &config.layout,
    )?;
    let archive = batch.to_archive()?;

    fs::create_dir_all(&args.output_dir)?;
    let archive_path = args.output_dir.join(batch.archive_name());
    fs::write(&archive_path, &archive)?;
    info!(
        "wrote {} ({} bytes)",
        archive_path.display(),
        archive.len()
    );

    output_result(
        "Spell check completed",
        &CheckSummary::from_batch(
            &batch,
            archive_path.to_string_lossy().to_string(),
            start.elapsed().as_millis() as u64,
        ),
        cli_args,
    )?;

    Ok(())
}

/// Show ranked suggestions for each word.
fn suggest_words(args: SuggestArgs, cli_args: &SpellReportArgs) -> Result<()> {
    let config = resolve_config(&args.dictionary)?;
    let engine = config.build_engine()?;

    let words = args
        .words
        .iter()
        .map(|word| {
            let lower = word.to_lowercase();
            let known = engine.is_correct(&lower);
            WordSuggestions {
                word: word.clone(),
                known,
                suggestions: if known {
                    Vec::new()
                } else {
                    engine.suggest(&lower)
                },
            }
        })
        .collect();

    let (dictionary_words, dictionary_frequency) = engine.dictionary_stats();
    output_result(
        "Suggestions",
        &SuggestResults {
            dictionary_words,
            dictionary_frequency,
            words,
        },
        cli_args,
    )?;

    Ok(())
}

/// Load the configuration file and apply command line overrides.
fn resolve_config(args: &DictionaryArgs) -> Result<ReportConfig> {
    let mut config = ReportConfig::load_or_default(args.config.as_ref())?;
    if let Some(dictionary) = &args.dictionary {
        config.dictionary = Some(dictionary.clone());
    }
    if let Some(max_distance) = args.max_distance {
        config.suggestion.max_distance = max_distance;
    }
    config.validate()?;
    Ok(config)
}

/// Expand the given paths into the files to check.
///
/// Files named explicitly are always taken; directories contribute their
/// direct children whose extension the configuration accepts, sorted by name.
fn collect_inputs(inputs: &[PathBuf], config: &ReportConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found = Vec::new();
            for entry in fs::read_dir(input)? {
                let path = entry?.path();
                if path.is_file() && config.accepts(&path) {
                    found.push(path);
                }
            }
            found.sort();
            if found.is_empty() {
                warn!("{}: no files with an accepted extension", input.display());
            }
            debug!("{}: {} matching files", input.display(), found.len());
            files.extend(found);
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(SpellReportError::invalid_argument(format!(
                "{} does not exist",
                input.display()
            )));
        }
    }
    Ok(files)
}
