//! CLI argument definitions for Nova.
//!
//! All `clap` structures live here so that `main.rs` stays focused on
//! dispatching subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

/// Nova -- deterministic intent classification for a personal assistant.
#[derive(Parser)]
#[command(
    name = "nova",
    version,
    about = "Nova -- deterministic intent classification",
    long_about = "Classifies free-form English, Telugu, Hindi and Spanish utterances \
                  into a fixed set of assistant intents with an ordered rule cascade."
)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify an utterance and print the intent.
    Classify {
        /// The utterance; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Also print the deciding rule and the normalized text.
        #[arg(long, short)]
        explain: bool,
    },

    /// Print the normalized form of an utterance.
    Normalize {
        /// The utterance; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List the classification rules in priority order.
    Rules,

    /// Classify every non-empty line of a file.
    Batch {
        /// File with one utterance per line.
        file: PathBuf,

        /// Print one JSON object per line instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Start the interactive classification loop.
    Repl {
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}
