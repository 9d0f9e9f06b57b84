//! CLI entry point for Nova.
//!
//! This binary provides the `nova` command: one-shot classification and
//! normalization, a rule listing, batch classification of a file, and an
//! interactive REPL.

mod cli;
mod config;
mod helpers;
mod output;
mod repl;
mod wake;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use nova_intent::{Classifier, default_classifier};
use tracing::{debug, info};

use crate::cli::{Cli, Commands};
use crate::config::AssistantConfig;
use crate::helpers::{init_tracing, join_words, utterance_lines};
use crate::output::{Format, render, render_batch, render_rules};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AssistantConfig::resolve(&cli.config)?;
    init_tracing(&config.log_level);
    debug!(config = ?config, "configuration loaded");

    let classifier = default_classifier().context("failed to build the intent rule table")?;

    match cli.command {
        Commands::Classify {
            text,
            json,
            explain,
        } => cmd_classify(classifier, &join_words(&text), Format::from_json_flag(json), explain),
        Commands::Normalize { text } => {
            println!("{}", classifier.normalizer().normalize(&join_words(&text)));
            Ok(())
        }
        Commands::Rules => {
            println!("{}", render_rules(classifier.rules()));
            Ok(())
        }
        Commands::Batch { file, json } => {
            cmd_batch(classifier, &file, Format::from_json_flag(json)).await
        }
        Commands::Repl { json } => {
            repl::cmd_repl(classifier, &config, Format::from_json_flag(json)).await
        }
    }
}

// ---------------------------------------------------------------------------
// Subcommand: classify
// ---------------------------------------------------------------------------

fn cmd_classify(classifier: &Classifier, text: &str, format: Format, explain: bool) -> Result<()> {
    let result = classifier.explain(text);
    println!("{}", render(format, text, &result, explain)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Subcommand: batch
// ---------------------------------------------------------------------------

/// Classify each line on its own task; print in input order.
async fn cmd_batch(classifier: &'static Classifier, path: &Path, format: Format) -> Result<()> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let lines = utterance_lines(&content);
    info!(path = %path.display(), lines = lines.len(), "classifying batch");

    let handles: Vec<_> = lines
        .into_iter()
        .map(|line| {
            tokio::spawn(async move {
                let result = classifier.explain(&line);
                (line, result)
            })
        })
        .collect();

    for handle in handles {
        let (line, result) = handle.await.context("classification task failed")?;
        println!("{}", render_batch(format, &line, &result)?);
    }
    Ok(())
}
