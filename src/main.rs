//! Command line entry point running a single rewrite pass over the given files.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use fingerprint_rev_replace::config::DEFAULT_CONFIG_FILE;
use fingerprint_rev_replace::{CandidateFile, FileOutcome, RevReplaceConfig, RevReplacer};

/// Rewrite asset references to their fingerprinted names.
#[derive(Debug, Parser)]
#[command(name = "rev-replace", version, about)]
struct Cli {
  /// Configuration file; defaults to `rev-replace.config.json` in the working directory.
  #[arg(long)]
  config: Option<PathBuf>,
  /// Manifest mapping original paths to fingerprinted paths.
  #[arg(long)]
  manifest: Option<PathBuf>,
  /// Prefix prepended to every rewritten reference.
  #[arg(long)]
  prefix: Option<String>,
  /// Extension eligible for rewriting; may be repeated.
  #[arg(long = "ext")]
  extensions: Vec<String>,
  /// Output files to rewrite.
  #[arg(required = true)]
  files: Vec<PathBuf>,
}

fn main() -> ExitCode {
  match run(Cli::parse()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("rev-replace: {err:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  let mut config = match &cli.config {
    Some(path) => RevReplaceConfig::from_path(path)?,
    None => {
      let cwd = std::env::current_dir().context("failed to read working directory")?;
      if cwd.join(DEFAULT_CONFIG_FILE).exists() {
        RevReplaceConfig::from_path(&cwd.join(DEFAULT_CONFIG_FILE))?
      } else {
        RevReplaceConfig::default()
      }
    }
  };

  if let Some(manifest) = cli.manifest {
    config.manifest = Some(manifest);
  }
  if let Some(prefix) = cli.prefix {
    config.prefix = prefix;
  }
  if !cli.extensions.is_empty() {
    config.replace_in_extensions = cli.extensions;
  }

  let candidates: Vec<CandidateFile> = cli.files.into_iter().map(CandidateFile::compiled).collect();
  let report = RevReplacer::new(config.to_policy()).run(&candidates)?;

  for (candidate, outcome) in &report.entries {
    match outcome {
      FileOutcome::Rewritten { real_path } => println!("rewrote {}", real_path.display()),
      FileOutcome::Unchanged { real_path } => println!("unchanged {}", real_path.display()),
      FileOutcome::Duplicate { .. } => {}
      FileOutcome::SkippedExtension | FileOutcome::Unresolved => {
        println!("skipped {}", candidate.display())
      }
    }
  }

  Ok(())
}
