//! Text and JSON rendering of classifications.

use anyhow::{Context, Result};
use nova_intent::{Classification, IntentType};
use serde::Serialize;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// One classification as emitted in JSON mode.
#[derive(Debug, Serialize)]
struct Record<'a> {
    input: &'a str,
    intent_type: IntentType,
    payload: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized: Option<&'a str>,
}

/// Render one classification as a single line.
///
/// Text mode prints `intent(payload)`; `explain` appends the deciding rule
/// and the normalized text.  JSON mode prints one compact object.
pub fn render(
    format: Format,
    input: &str,
    result: &Classification,
    explain: bool,
) -> Result<String> {
    match format {
        Format::Text => {
            let mut line = result.intent.to_string();
            if explain {
                line.push_str(&format!(
                    "  [rule: {}, normalized: {:?}]",
                    result.rule, result.normalized
                ));
            }
            Ok(line)
        }
        Format::Json => {
            let record = Record {
                input,
                intent_type: result.intent.intent_type,
                payload: result.intent.payload.as_deref(),
                rule: explain.then_some(result.rule),
                normalized: explain.then_some(result.normalized.as_str()),
            };
            serde_json::to_string(&record).context("failed to serialize classification")
        }
    }
}

/// Render one batch line: the input next to its intent in text mode.
pub fn render_batch(format: Format, input: &str, result: &Classification) -> Result<String> {
    match format {
        Format::Text => Ok(format!("{input}\t{}", result.intent)),
        Format::Json => render(format, input, result, true),
    }
}

/// Render the rule listing.
pub fn render_rules<'a>(rules: impl Iterator<Item = (&'a str, IntentType)>) -> String {
    rules
        .enumerate()
        .map(|(i, (name, intent_type))| format!("{:>3}  {name:<22} {intent_type}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
