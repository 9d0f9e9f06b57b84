//! Subcommand: `nova repl` -- interactive classification loop.
//!
//! Reads one utterance per line, runs it through the wake-word gate and the
//! classifier, and prints the result.  An `EXIT` intent or end of input ends
//! the loop.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use nova_intent::{Classifier, IntentType};
use tracing::info;

use crate::config::AssistantConfig;
use crate::output::{Format, render};
use crate::wake::{Admission, WakeGate};

pub const GOODBYE: &str = "Goodbye.";
pub const LISTENING: &str = "I'm listening.";

/// Greeting printed when the loop starts.
pub fn greeting(config: &AssistantConfig) -> String {
    format!("Hello, I am {}. How can I help you today?", config.name)
}

/// What the session says back for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print.
    Silent,
    /// A rendered classification.
    Line(String),
    /// The session ends after this line.
    Goodbye,
}

/// REPL state: the wake gate plus output settings.
pub struct Session<'a> {
    classifier: &'a Classifier,
    gate: WakeGate,
    format: Format,
}

impl<'a> Session<'a> {
    pub fn new(classifier: &'a Classifier, config: &AssistantConfig, format: Format) -> Self {
        Self {
            classifier,
            gate: WakeGate::new(config.wake_word_enabled, &config.wake_word),
            format,
        }
    }

    pub fn handle(&mut self, line: &str) -> Result<Reply> {
        let utterance = line.trim();
        if utterance.is_empty() {
            return Ok(Reply::Silent);
        }

        match self.gate.admit(utterance) {
            Admission::Ignored => return Ok(Reply::Silent),
            Admission::Woke => return Ok(Reply::Line(LISTENING.to_string())),
            Admission::Pass => {}
        }

        let result = self.classifier.explain(utterance);
        if result.intent.intent_type == IntentType::Exit {
            info!("user requested exit");
            return Ok(Reply::Goodbye);
        }
        self.gate.command_handled();

        render(self.format, utterance, &result, false).map(Reply::Line)
    }
}

/// Drive a session over any line source until exit or end of input.
pub fn run_session<R, W>(mut session: Session<'_>, input: R, out: &mut W, prompt: bool) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush().ok();
        }

        let Some(line) = lines.next() else {
            if prompt {
                writeln!(out)?;
            }
            info!("EOF received, exiting");
            break;
        };
        let line = line.context("failed to read input")?;

        match session.handle(&line)? {
            Reply::Silent => {}
            Reply::Line(text) => writeln!(out, "{text}")?,
            Reply::Goodbye => {
                writeln!(out, "{GOODBYE}")?;
                break;
            }
        }
    }
    Ok(())
}

/// Run the interactive REPL on stdin and stdout.
pub async fn cmd_repl(
    classifier: &'static Classifier,
    config: &AssistantConfig,
    format: Format,
) -> Result<()> {
    info!(
        rules = classifier.rule_count(),
        wake_word_enabled = config.wake_word_enabled,
        "starting REPL"
    );

    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\n  {GOODBYE}");
            std::process::exit(0);
        }
    });

    println!("{}", greeting(config));
    if config.wake_word_enabled {
        println!("Say \"{}\" to wake me.", config.wake_word);
    }

    let session = Session::new(classifier, config, format);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(session, stdin.lock(), &mut stdout, true)?;

    info!("shutting down");
    Ok(())
}
