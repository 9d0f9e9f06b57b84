//! Utterance classifier.
//!
//! [`Classifier`] owns a [`Normalizer`] and the rule cascade from
//! [`crate::rules::build_rules`].  Classification normalizes the input, walks
//! the rules in priority order and returns the first match, or
//! [`IntentType::Unknown`].  It holds no mutable state and performs no I/O, so
//! one instance can serve any number of threads.
//!
//! # Example
//!
//! ```rust
//! # use nova_intent::{Classifier, IntentType};
//! let classifier = Classifier::new().unwrap();
//!
//! let intent = classifier.classify("Spent 250 on groceries!");
//! assert_eq!(intent.intent_type, IntentType::AddExpense);
//! assert_eq!(intent.payload.as_deref(), Some("250|groceries"));
//! ```

use std::sync::LazyLock;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::normalize::{self, Normalizer};
use crate::rules::{Rule, build_rules};
use crate::types::{Intent, IntentType};

/// Rule name reported when nothing matched.
pub const UNKNOWN_RULE: &str = "unknown";

/// An intent together with the reason it was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// The classified intent.
    pub intent: Intent,

    /// Name of the rule that fired, or [`UNKNOWN_RULE`].
    pub rule: &'static str,

    /// The normalized text the rules were evaluated against.
    pub normalized: String,
}

/// Deterministic first-match-wins intent classifier.
#[derive(Debug)]
pub struct Classifier {
    normalizer: Normalizer,
    rules: Vec<Rule>,
}

impl Classifier {
    /// Build the classifier with the built-in tables and rule cascade.
    ///
    /// Fails only if a built-in pattern is invalid.
    pub fn new() -> Result<Self> {
        let normalizer = Normalizer::new()?;
        let rules = build_rules()?;
        debug!(rules = rules.len(), "intent classifier built");
        Ok(Self { normalizer, rules })
    }

    /// Classify a raw utterance.
    pub fn classify(&self, raw: &str) -> Intent {
        self.explain(raw).intent
    }

    /// Classify a raw utterance and report which rule decided it.
    pub fn explain(&self, raw: &str) -> Classification {
        let normalized = self.normalizer.normalize(raw);
        tracing::trace!(raw = %raw, normalized = %normalized, "utterance normalized");

        let (intent, rule) = self.classify_normalized(&normalized);
        debug!(
            rule,
            intent = %intent.intent_type,
            payload = intent.payload().unwrap_or(""),
            "utterance classified"
        );

        Classification {
            intent,
            rule,
            normalized,
        }
    }

    /// Run the cascade over text that is already normalized.
    pub fn classify_normalized(&self, text: &str) -> (Intent, &'static str) {
        self.rules
            .iter()
            .find_map(|rule| rule.evaluate(text).map(|intent| (intent, rule.name)))
            .unwrap_or_else(|| (Intent::unknown(), UNKNOWN_RULE))
    }

    /// The normalizer used by this classifier.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// `(rule name, intent type)` pairs in priority order.
    pub fn rules(&self) -> impl Iterator<Item = (&'static str, IntentType)> + '_ {
        self.rules.iter().map(|r| (r.name, r.intent_type))
    }

    /// Number of rules in the cascade.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

// ---------------------------------------------------------------------------
// Shared default
// ---------------------------------------------------------------------------

static DEFAULT_CLASSIFIER: LazyLock<Option<Classifier>> = LazyLock::new(|| {
    match Classifier::new() {
        Ok(c) => Some(c),
        Err(e) => {
            tracing::error!(error = %e, "failed to build intent classifier; every utterance will be unknown");
            None
        }
    }
});

/// The process-wide classifier, built on first use.
///
/// `None` only if the built-in tables failed to compile, which the test
/// suite rules out.
pub fn default_classifier() -> Option<&'static Classifier> {
    DEFAULT_CLASSIFIER.as_ref()
}

/// Classify with the process-wide classifier.  Never fails.
pub fn classify(raw: &str) -> Intent {
    match default_classifier() {
        Some(c) => c.classify(raw),
        None => Intent::unknown(),
    }
}

/// Explain with the process-wide classifier.  Never fails.
pub fn explain(raw: &str) -> Classification {
    match default_classifier() {
        Some(c) => c.explain(raw),
        None => Classification {
            intent: Intent::unknown(),
            rule: UNKNOWN_RULE,
            normalized: normalize::clean(raw),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
