//! Intent engine error types.
//!
//! Classification itself never fails: unmatched or malformed input degrades
//! to [`IntentType::Unknown`](crate::IntentType::Unknown).  Errors surface
//! only when building a rule table explicitly or when decoding a payload into
//! one of the typed structures in [`crate::payload`].

use crate::types::IntentType;

/// Unified error type for the intent engine.
#[derive(Debug, thiserror::Error)]
pub enum IntentError {
    // -- Table construction ---------------------------------------------------
    /// A built-in regex pattern failed to compile.
    #[error("invalid regex pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A keyword automaton could not be built.
    #[error("keyword automaton build error for rule `{rule}`: {reason}")]
    AutomatonBuild { rule: String, reason: String },

    // -- Intent names ---------------------------------------------------------
    /// The string is not the wire name of any [`IntentType`].
    #[error("unknown intent type: {0}")]
    UnknownIntentType(String),

    // -- Payload decoding -----------------------------------------------------
    /// The intent is of a different type than the decoder expects.
    #[error("payload decoder expected {expected}, found {found}")]
    PayloadMismatch {
        expected: &'static str,
        found: IntentType,
    },

    /// The intent carries no payload.
    #[error("intent {intent} has no payload")]
    MissingPayload { intent: IntentType },

    /// A payload field is absent or cannot be parsed.
    #[error("malformed {intent} payload: {reason}")]
    MalformedPayload { intent: IntentType, reason: String },
}

/// Convenience alias used throughout the intent crate.
pub type Result<T> = std::result::Result<T, IntentError>;
