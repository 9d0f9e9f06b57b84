//! Typed decoding of `|`-delimited payloads.
//!
//! Downstream handlers receive an [`Intent`] and split its payload into
//! sub-fields.  The decoders here fix the field order per intent type in one
//! place and reject payloads of the wrong shape with an [`IntentError`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{IntentError, Result};
use crate::types::{FIELD_DELIMITER, Intent, IntentType};

/// Timestamp layout of [`EventEntry::starts_at`] in an `ADD_EVENT` payload.
pub const EVENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// `ADD_EXPENSE`: `amount|category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub amount: f64,
    pub category: String,
}

/// `ADD_CONTACT`: `name|number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub name: String,
    pub number: String,
}

/// `PHONE_SMS`, `SMS_CONTACT`, `WHATSAPP_MESSAGE`: `recipient|body`.
///
/// The recipient is a phone number for `PHONE_SMS` and a contact name for
/// the other two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub recipient: String,
    pub body: String,
}

/// `ADD_EVENT`: `title|YYYY-MM-DD HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEntry {
    pub title: String,
    pub starts_at: NaiveDateTime,
}

/// `TRANSLATE`: `target_language|phrase`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub target_language: String,
    pub phrase: String,
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

fn expect_type<'a>(
    intent: &'a Intent,
    allowed: &[IntentType],
    expected: &'static str,
) -> Result<&'a str> {
    if !allowed.contains(&intent.intent_type) {
        return Err(IntentError::PayloadMismatch {
            expected,
            found: intent.intent_type,
        });
    }
    intent
        .payload
        .as_deref()
        .ok_or(IntentError::MissingPayload {
            intent: intent.intent_type,
        })
}

/// Split into exactly two non-empty fields.
///
/// Only the first delimiter separates; the second field keeps any further
/// `|` characters so free text survives intact.
fn two_fields(intent: &Intent, payload: &str) -> Result<(String, String)> {
    let malformed = |reason: &str| IntentError::MalformedPayload {
        intent: intent.intent_type,
        reason: reason.to_string(),
    };
    let (first, second) = payload
        .split_once(FIELD_DELIMITER)
        .ok_or_else(|| malformed("expected two `|`-separated fields"))?;
    let (first, second) = (first.trim(), second.trim());
    if first.is_empty() || second.is_empty() {
        return Err(malformed("empty field"));
    }
    Ok((first.to_string(), second.to_string()))
}

impl TryFrom<&Intent> for ExpenseEntry {
    type Error = IntentError;

    fn try_from(intent: &Intent) -> Result<Self> {
        let payload = expect_type(intent, &[IntentType::AddExpense], "add_expense")?;
        let (amount, category) = two_fields(intent, payload)?;
        let amount = amount
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a >= 0.0)
            .ok_or_else(|| IntentError::MalformedPayload {
                intent: intent.intent_type,
                reason: format!("invalid amount `{amount}`"),
            })?;
        Ok(Self { amount, category })
    }
}

impl TryFrom<&Intent> for ContactEntry {
    type Error = IntentError;

    fn try_from(intent: &Intent) -> Result<Self> {
        let payload = expect_type(intent, &[IntentType::AddContact], "add_contact")?;
        let (name, number) = two_fields(intent, payload)?;
        Ok(Self { name, number })
    }
}

impl TryFrom<&Intent> for OutgoingMessage {
    type Error = IntentError;

    fn try_from(intent: &Intent) -> Result<Self> {
        let payload = expect_type(
            intent,
            &[
                IntentType::PhoneSms,
                IntentType::SmsContact,
                IntentType::WhatsappMessage,
            ],
            "phone_sms, sms_contact or whatsapp_message",
        )?;
        let (recipient, body) = two_fields(intent, payload)?;
        Ok(Self { recipient, body })
    }
}

impl TryFrom<&Intent> for EventEntry {
    type Error = IntentError;

    fn try_from(intent: &Intent) -> Result<Self> {
        let payload = expect_type(intent, &[IntentType::AddEvent], "add_event")?;
        let (title, when) = two_fields(intent, payload)?;
        let starts_at = NaiveDateTime::parse_from_str(&when, EVENT_TIME_FORMAT).map_err(|e| {
            IntentError::MalformedPayload {
                intent: intent.intent_type,
                reason: format!("invalid event time `{when}`: {e}"),
            }
        })?;
        Ok(Self { title, starts_at })
    }
}

impl TryFrom<&Intent> for TranslationRequest {
    type Error = IntentError;

    fn try_from(intent: &Intent) -> Result<Self> {
        let payload = expect_type(intent, &[IntentType::Translate], "translate")?;
        let (target_language, phrase) = two_fields(intent, payload)?;
        Ok(Self {
            target_language,
            phrase,
        })
    }
}

/// The 1-based item number of `DELETE_REMINDER`, `COMPLETE_TASK` or
/// `DELETE_TASK`.
pub fn item_index(intent: &Intent) -> Result<usize> {
    let payload = expect_type(
        intent,
        &[
            IntentType::DeleteReminder,
            IntentType::CompleteTask,
            IntentType::DeleteTask,
        ],
        "delete_reminder, complete_task or delete_task",
    )?;
    payload
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|i| *i > 0)
        .ok_or_else(|| IntentError::MalformedPayload {
            intent: intent.intent_type,
            reason: format!("invalid item number `{payload}`"),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
