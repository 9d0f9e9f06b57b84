//! Deterministic intent classification for the Nova assistant.
//!
//! This crate provides:
//!
//! - **Normalization**: lowercase, punctuation and whitespace cleanup plus
//!   table-driven rewrites for Telugu, Hindi, Spanish, their romanized forms
//!   and chat slang, via [`normalize::Normalizer`].
//! - **Classification**: an ordered first-match-wins rule cascade over the
//!   normalized text via [`Classifier`].  No statistics, no confidence
//!   scores; the same input always yields the same [`Intent`], and
//!   [`Classifier::explain`] names the rule that decided it.
//! - **Payload decoding**: typed views of `|`-delimited payloads in
//!   [`payload`].
//!
//! Classification is total: anything unrecognized is
//! [`IntentType::Unknown`].

pub mod classifier;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod payload;
pub mod rules;
pub mod types;

pub use classifier::{Classification, Classifier, classify, default_classifier, explain};
pub use error::{IntentError, Result};
pub use normalize::{Normalizer, normalize};
pub use payload::{
    ContactEntry, EventEntry, ExpenseEntry, OutgoingMessage, TranslationRequest, item_index,
};
pub use types::{FIELD_DELIMITER, Intent, IntentType};
