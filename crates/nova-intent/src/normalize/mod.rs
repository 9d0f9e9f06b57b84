//! Utterance normalization.
//!
//! Rewrites raw input into the canonical form the rule table is written
//! against.  The pipeline runs five steps in a fixed order; each step sees
//! the output of the previous one:
//!
//! 1. Lowercase.
//! 2. Replace [`tables::STRIPPED_PUNCTUATION`] with spaces and collapse all
//!    whitespace runs (tabs, newlines, repeated spaces) to one space.
//! 3. First matching anchored rewrite from [`tables::REGEX_REWRITES`].
//! 4. Token-boundary phrase substitutions from
//!    [`tables::PHRASE_SUBSTITUTIONS`].
//! 5. Per-token substitutions from [`tables::TOKEN_SUBSTITUTIONS`].
//!
//! The result is idempotent: normalizing canonical text returns it unchanged.

pub mod tables;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{IntentError, Result};

/// Compiled normalization tables.
#[derive(Debug)]
pub struct Normalizer {
    /// Anchored rewrites in table order.
    rewrites: Vec<(Regex, &'static str)>,

    /// Phrase keys pre-split into tokens, in table order.
    phrases: Vec<(Vec<&'static str>, &'static str)>,

    /// Single-token substitutions.
    tokens: HashMap<&'static str, &'static str>,
}

impl Normalizer {
    /// Compile the built-in tables.
    ///
    /// Fails only if a rewrite pattern in [`tables::REGEX_REWRITES`] is not a
    /// valid regex.
    pub fn new() -> Result<Self> {
        let rewrites = tables::REGEX_REWRITES
            .iter()
            .map(|(pattern, template)| {
                Regex::new(pattern)
                    .map(|re| (re, *template))
                    .map_err(|e| IntentError::InvalidPattern {
                        pattern: (*pattern).to_string(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let phrases = tables::PHRASE_SUBSTITUTIONS
            .iter()
            .map(|(key, value)| (key.split_whitespace().collect(), *value))
            .collect();

        let tokens = tables::TOKEN_SUBSTITUTIONS.iter().copied().collect();

        Ok(Self {
            rewrites,
            phrases,
            tokens,
        })
    }

    /// Run the full pipeline.  Total: never fails, never panics.
    pub fn normalize(&self, raw: &str) -> String {
        let cleaned = clean(raw);
        if cleaned.is_empty() {
            return cleaned;
        }

        let rewritten = self.rewrite(cleaned);

        let mut words: Vec<String> = rewritten.split_whitespace().map(str::to_string).collect();
        for (key, value) in &self.phrases {
            words = substitute_phrase(words, key, value);
        }

        let expanded: Vec<&str> = words
            .iter()
            .map(|w| self.tokens.get(w.as_str()).copied().unwrap_or(w.as_str()))
            .collect();

        collapse_whitespace(&expanded.join(" "))
    }

    /// Apply the first matching anchored rewrite, if any.
    fn rewrite(&self, text: String) -> String {
        for (re, template) in &self.rewrites {
            if re.is_match(&text) {
                let out = re.replace(&text, *template).into_owned();
                tracing::trace!(from = %text, to = %out, "regex rewrite applied");
                return out;
            }
        }
        text
    }
}

// ---------------------------------------------------------------------------
// Shared default
// ---------------------------------------------------------------------------

static DEFAULT_NORMALIZER: LazyLock<Option<Normalizer>> = LazyLock::new(|| match Normalizer::new() {
    Ok(n) => Some(n),
    Err(e) => {
        tracing::error!(error = %e, "failed to compile normalization tables");
        None
    }
});

/// Normalize with the built-in tables.
///
/// If the tables failed to compile, only the table-free cleanup (steps 1
/// and 2) is applied.
pub fn normalize(raw: &str) -> String {
    match DEFAULT_NORMALIZER.as_ref() {
        Some(n) => n.normalize(raw),
        None => clean(raw),
    }
}

/// Steps 1 and 2: lowercase, strip punctuation, collapse whitespace, trim.
pub fn clean(raw: &str) -> String {
    let lowered: String = raw
        .to_lowercase()
        .chars()
        .map(|c| {
            if tables::STRIPPED_PUNCTUATION.contains(&c) {
                ' '
            } else {
                c
            }
        })
        .collect();
    collapse_whitespace(&lowered)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace every non-overlapping occurrence of the token sequence `key`,
/// scanning left to right.  Replacement tokens are not rescanned.
fn substitute_phrase(words: Vec<String>, key: &[&str], value: &str) -> Vec<String> {
    if key.is_empty() || words.len() < key.len() {
        return words;
    }

    let mut out = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        let end = i + key.len();
        if end <= words.len() && words[i..end].iter().zip(key).all(|(w, k)| w == k) {
            out.extend(value.split_whitespace().map(str::to_string));
            i = end;
        } else {
            out.push(words[i].clone());
            i += 1;
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
