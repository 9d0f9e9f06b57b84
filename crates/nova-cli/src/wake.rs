//! Wake-word gate for the REPL.
//!
//! When enabled the session starts asleep.  Utterances are dropped until one
//! contains the wake word; that utterance wakes the session and is itself
//! consumed.  Handling one non-exit command puts the session back to sleep.

/// What the gate decided for one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Awake (or gate disabled): classify the utterance.
    Pass,
    /// The utterance contained the wake word; the session is now awake.
    Woke,
    /// Asleep and no wake word: drop the utterance.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct WakeGate {
    /// Lowercased wake word; `None` disables the gate.
    wake_word: Option<String>,
    awake: bool,
}

impl WakeGate {
    pub fn new(enabled: bool, wake_word: &str) -> Self {
        let word = wake_word.trim().to_lowercase();
        let wake_word = (enabled && !word.is_empty()).then_some(word);
        Self {
            awake: wake_word.is_none(),
            wake_word,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.wake_word.is_some()
    }

    pub fn admit(&mut self, utterance: &str) -> Admission {
        let Some(word) = &self.wake_word else {
            return Admission::Pass;
        };
        if self.awake {
            return Admission::Pass;
        }
        if utterance.to_lowercase().contains(word.as_str()) {
            self.awake = true;
            tracing::debug!("wake word heard");
            Admission::Woke
        } else {
            Admission::Ignored
        }
    }

    /// Call after a non-exit command was handled.
    pub fn command_handled(&mut self) {
        if self.is_enabled() {
            self.awake = false;
        }
    }
}
