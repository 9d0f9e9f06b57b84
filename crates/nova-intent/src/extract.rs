//! Payload extractors.
//!
//! Every extractor takes normalized text and returns the payload, or `None`
//! when the expected shape is absent.  `None` makes the owning rule fall
//! through to the next one.  Multi-alternative extractors walk an ordered
//! slice of compiled patterns and stop at the first structural match whose
//! cleaned fields are non-empty.

use regex::Regex;

use crate::error::{IntentError, Result};
use crate::types::FIELD_DELIMITER;

/// Regex for a phone number: optional `+`, then at least nine characters of
/// digits, dashes or spaces that start and end with a digit.
pub const PHONE_NUMBER: &str = r"\+?\d[\d\-\s]{7,}\d";

/// Compile a built-in pattern.
pub fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| IntentError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Compile an ordered list of built-in patterns.
pub fn compile_all(patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns.iter().map(|p| compile(p)).collect()
}

// ---------------------------------------------------------------------------
// Field cleanup
// ---------------------------------------------------------------------------

/// Trim spaces and sentence punctuation from a free-text payload.
pub fn trim_payload(value: &str) -> &str {
    value.trim_matches(|c| matches!(c, ' ' | '.' | '!' | '?'))
}

/// Whether `c` counts as a digit.
///
/// Unicode-aware so it agrees with `\d` in [`PHONE_NUMBER`]: Devanagari or
/// Telugu digits are digits too.
pub fn is_digit(c: char) -> bool {
    c.is_numeric()
}

/// Keep only digits and `+`.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| is_digit(*c) || *c == '+').collect()
}

fn free_text(value: &str) -> String {
    trim_payload(value).to_string()
}

fn plain(value: &str) -> String {
    value.trim().to_string()
}

fn name(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Event times given as a bare date default to 10:00.
fn event_time(value: &str) -> String {
    let value = value.trim();
    if value.len() == 10 {
        format!("{value} 10:00")
    } else {
        value.to_string()
    }
}

// ---------------------------------------------------------------------------
// Simple extractors
// ---------------------------------------------------------------------------

/// Whether any keyword occurs as a substring.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Text after the first trigger phrase that is followed by a non-empty
/// remainder.  Phrases are tried in order.
pub fn after_phrase(text: &str, phrases: &[&str]) -> Option<String> {
    phrases.iter().find_map(|phrase| {
        let (_, rest) = text.split_once(phrase)?;
        let value = trim_payload(rest);
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Capture group 1 of the first matching pattern.
pub fn first_capture(text: &str, patterns: &[Regex]) -> Option<String> {
    patterns.iter().find_map(|re| {
        let caps = re.captures(text)?;
        let value = trim_payload(caps.get(1)?.as_str());
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// The first phone number in the text, reduced to digits and `+`.
pub fn phone_number(text: &str, number: &Regex) -> Option<String> {
    let found = number.find(text)?;
    let digits = digits_only(found.as_str());
    (!digits.is_empty()).then_some(digits)
}

/// Only digits, `. + - * / % ^ ( )` and whitespace, with at least one digit.
pub fn looks_like_math_expression(expr: &str) -> bool {
    let mut has_digit = false;
    for c in expr.chars().filter(|c| !c.is_whitespace()) {
        if c.is_ascii_digit() {
            has_digit = true;
        } else if !matches!(c, '.' | '+' | '-' | '*' | '/' | '%' | '^' | '(' | ')') {
            return false;
        }
    }
    has_digit
}

/// Expression after a calculator trigger, if it passes the math gate.
///
/// Only the first trigger with a remainder is considered, so "what is my
/// name" is rejected rather than retried against a later trigger.
pub fn calculation(text: &str) -> Option<String> {
    after_phrase(text, &["calculate ", "compute ", "what is "])
        .filter(|expr| looks_like_math_expression(expr))
}

/// Contact name after "call"/"dial", cut at " at " or " number ".
///
/// Names containing a digit are rejected so "call 98765" is never routed to
/// the contact book.
pub fn call_contact_name(text: &str) -> Option<String> {
    let raw = after_phrase(text, &["call ", "dial "])?;
    let head = raw.split(" at ").next().unwrap_or_default();
    let head = head.split(" number ").next().unwrap_or_default().trim();
    if head.is_empty() || head.chars().any(is_digit) {
        return None;
    }
    Some(head.to_string())
}

// ---------------------------------------------------------------------------
// Two-field extractors
// ---------------------------------------------------------------------------

/// How a raw capture is turned into a payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Trimmed of spaces and `.!?`.
    FreeText,
    /// Whitespace-trimmed.
    Plain,
    /// Whitespace-trimmed and lowercased.
    Name,
    /// Digits and `+` only.
    Number,
    /// `YYYY-MM-DD HH:MM`; a bare date gets ` 10:00`.
    EventTime,
}

impl Field {
    fn apply(self, raw: &str) -> String {
        match self {
            Self::FreeText => free_text(raw),
            Self::Plain => plain(raw),
            Self::Name => name(raw),
            Self::Number => digits_only(raw),
            Self::EventTime => event_time(raw),
        }
    }
}

/// A pattern yielding a two-field payload `first|second`.
///
/// The capture group for each field is configurable so alternative word
/// orders ("translate X to Y" / "translate to Y X") share one output shape.
/// A field containing [`FIELD_DELIMITER`] is no match, so the payload always
/// has exactly two fields.
#[derive(Debug, Clone)]
pub struct PairPattern {
    regex: Regex,
    first: (usize, Field),
    second: (usize, Field),
}

impl PairPattern {
    pub fn new(pattern: &str, first: (usize, Field), second: (usize, Field)) -> Result<Self> {
        Ok(Self {
            regex: compile(pattern)?,
            first,
            second,
        })
    }

    fn extract(&self, text: &str) -> Option<String> {
        let caps = self.regex.captures(text)?;
        let first = self.first.1.apply(caps.get(self.first.0)?.as_str());
        let second = self.second.1.apply(caps.get(self.second.0)?.as_str());
        let usable = |f: &str| !f.is_empty() && !f.contains(FIELD_DELIMITER);
        if !usable(&first) || !usable(&second) {
            return None;
        }
        Some(format!("{first}{FIELD_DELIMITER}{second}"))
    }
}

/// First pattern in order whose cleaned fields are both non-empty.
pub fn first_pair(text: &str, patterns: &[PairPattern]) -> Option<String> {
    patterns.iter().find_map(|p| p.extract(text))
}

/// `amount|category` from "spent N on X" or "add expense N X".
pub fn expense_patterns() -> Result<Vec<PairPattern>> {
    Ok(vec![
        PairPattern::new(
            r"(?:spent|spend)\s+(\d+(?:\.\d+)?)\s+(?:on|for)\s+(.+)",
            (1, Field::Plain),
            (2, Field::FreeText),
        )?,
        PairPattern::new(
            r"add expense\s+(\d+(?:\.\d+)?)\s+(.+)",
            (1, Field::Plain),
            (2, Field::FreeText),
        )?,
    ])
}

/// `target_language|phrase` from the four translation phrasings.
pub fn translation_patterns() -> Result<Vec<PairPattern>> {
    Ok(vec![
        PairPattern::new(
            r"translate\s+(.+?)\s+to\s+([a-z]+)$",
            (2, Field::Plain),
            (1, Field::FreeText),
        )?,
        PairPattern::new(
            r"what is\s+(.+?)\s+in\s+([a-z]+)$",
            (2, Field::Plain),
            (1, Field::FreeText),
        )?,
        PairPattern::new(
            r"how to say\s+(.+?)\s+in\s+([a-z]+)$",
            (2, Field::Plain),
            (1, Field::FreeText),
        )?,
        PairPattern::new(
            r"translate to\s+([a-z]+)\s+(.+)$",
            (1, Field::Plain),
            (2, Field::FreeText),
        )?,
    ])
}

/// `number|message` for an SMS to a raw phone number.
pub fn phone_sms_patterns() -> Result<Vec<PairPattern>> {
    Ok(vec![
        PairPattern::new(
            &format!(r"(?:send|text|sms)\s+(?:to\s+)?({PHONE_NUMBER})\s+(?:saying|message|that)\s+(.+)"),
            (1, Field::Number),
            (2, Field::FreeText),
        )?,
        PairPattern::new(
            &format!(r"(?:send|text|sms)\s+(.+)\s+to\s+({PHONE_NUMBER})"),
            (2, Field::Number),
            (1, Field::FreeText),
        )?,
    ])
}

/// `name|number` for a new contact.
pub fn contact_add_patterns() -> Result<Vec<PairPattern>> {
    Ok(vec![
        PairPattern::new(
            &format!(r"(?:add|save)\s+contact\s+([a-zA-Z ]+)\s+(?:number\s+)?({PHONE_NUMBER})"),
            (1, Field::Name),
            (2, Field::Number),
        )?,
        PairPattern::new(
            &format!(r"contact\s+([a-zA-Z ]+)\s+is\s+({PHONE_NUMBER})"),
            (1, Field::Name),
            (2, Field::Number),
        )?,
    ])
}

/// `name|message` for an SMS to a saved contact.
pub fn contact_sms_patterns() -> Result<Vec<PairPattern>> {
    Ok(vec![
        PairPattern::new(
            r"(?:sms|text)\s+([a-zA-Z ]+)\s+(?:message|saying|that)\s+(.+)",
            (1, Field::Name),
            (2, Field::FreeText),
        )?,
        PairPattern::new(
            r"(?:sms|text)\s+(.+)\s+to\s+([a-zA-Z ]+)",
            (2, Field::Name),
            (1, Field::FreeText),
        )?,
    ])
}

/// `name|message` for a WhatsApp message.
pub fn whatsapp_patterns() -> Result<Vec<PairPattern>> {
    Ok(vec![
        PairPattern::new(
            r"(?:whatsapp|wa)\s+(?:to\s+)?(.+?)\s+(?:message|saying|that)\s+(.+)",
            (1, Field::Plain),
            (2, Field::FreeText),
        )?,
        PairPattern::new(
            r"send whatsapp to\s+(.+?)\s+(?:message|saying|that)\s+(.+)",
            (1, Field::Plain),
            (2, Field::FreeText),
        )?,
    ])
}

/// `title|YYYY-MM-DD HH:MM` for a calendar event.
pub fn event_patterns() -> Result<Vec<PairPattern>> {
    Ok(vec![
        PairPattern::new(
            r"(?:add|create|schedule)\s+event\s+(.+?)\s+at\s+([0-9]{4}-[0-9]{2}-[0-9]{2}\s+[0-9]{2}:[0-9]{2})",
            (1, Field::FreeText),
            (2, Field::EventTime),
        )?,
        PairPattern::new(
            r"(?:add|create|schedule)\s+event\s+(.+?)\s+on\s+([0-9]{4}-[0-9]{2}-[0-9]{2})",
            (1, Field::FreeText),
            (2, Field::EventTime),
        )?,
    ])
}

// ---------------------------------------------------------------------------
// Phone app
// ---------------------------------------------------------------------------

/// Compiled patterns for opening an app on the phone.
#[derive(Debug, Clone)]
pub struct OpenAppPatterns {
    explicit: Regex,
    bare: Regex,
}

impl OpenAppPatterns {
    pub fn new() -> Result<Self> {
        Ok(Self {
            explicit: compile(r"(?:open|launch|start)\s+app\s+(.+)$")?,
            bare: compile(r"(?:open|launch|start)\s+(.+)$")?,
        })
    }

    /// App name after "open app"; falls back to "open <name>" when the name
    /// does not look like a URL.
    pub fn extract(&self, text: &str) -> Option<String> {
        if let Some(caps) = self.explicit.captures(text) {
            let value = trim_payload(caps.get(1)?.as_str());
            return (!value.is_empty()).then(|| value.to_string());
        }
        let caps = self.bare.captures(text)?;
        let candidate = trim_payload(caps.get(1)?.as_str());
        if candidate.is_empty() || candidate.contains('.') || candidate.contains("http") {
            return None;
        }
        Some(candidate.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
