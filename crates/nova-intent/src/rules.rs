//! The rule cascade.
//!
//! A [`Rule`] pairs a [`Matcher`] with the [`IntentType`] it produces.  The
//! table returned by [`build_rules`] is evaluated top to bottom and the first
//! match wins, so a rule's position *is* its priority.  Adding an intent means
//! inserting a row at the right position, never editing control flow.
//!
//! | Tier | Rules |
//! |------|-------|
//! | 1 | exit |
//! | 2 | greeting |
//! | 3 | how are you, daily chores, motivation |
//! | 4 | reminders: add, list, delete, clear |
//! | 5 | tasks: add, list, complete, delete, clear |
//! | 6 | contacts, messaging, events, schedule, calendar sync |
//! | 7 | undo, Google account and sync |
//! | 8 | phone call by number, then by contact name |
//! | 9 | phone SMS, phone app, study plan / explain / quiz |
//! | 10 | translation, supported languages |
//! | 11 | thanks, name, wellbeing, tips |
//! | 12 | expenses |
//! | 13 | habits, day summary, history, help |
//! | 14 | bare "time" / "date" keywords |
//! | 15 | open site |
//! | 16 | web search |
//! | 17 | calculator (math-gated) |
//! | 18 | save note |
//! | 19 | joke |

use std::fmt;

use aho_corasick::AhoCorasick;
use regex::Regex;

use crate::error::{IntentError, Result};
use crate::extract::{self, PHONE_NUMBER};
use crate::types::{Intent, IntentType};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A payload extractor over normalized text.
pub type Extractor = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// How a rule recognizes its intent.
pub enum Matcher {
    /// Any keyword occurs as a substring.  No payload.
    Keywords(AhoCorasick),

    /// The regex matches anywhere.  No payload.
    Pattern(Regex),

    /// Remainder after the first trigger phrase with non-empty text.
    AfterPhrase(&'static [&'static str]),

    /// Capture group 1 of the first matching regex.
    Capture(Vec<Regex>),

    /// Custom extractor.
    Extract(Extractor),
}

impl Matcher {
    fn kind(&self) -> &'static str {
        match self {
            Self::Keywords(_) => "keywords",
            Self::Pattern(_) => "pattern",
            Self::AfterPhrase(_) => "after_phrase",
            Self::Capture(_) => "capture",
            Self::Extract(_) => "extract",
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// One row of the cascade.
#[derive(Debug)]
pub struct Rule {
    /// Stable identifier reported by [`crate::Classifier::explain`].
    pub name: &'static str,

    /// Intent produced on match.
    pub intent_type: IntentType,

    matcher: Matcher,
}

impl Rule {
    /// Match when any keyword is a substring of the text.
    pub fn keywords(
        name: &'static str,
        intent_type: IntentType,
        keywords: &[&str],
    ) -> Result<Self> {
        let automaton = AhoCorasick::new(keywords).map_err(|e| IntentError::AutomatonBuild {
            rule: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            name,
            intent_type,
            matcher: Matcher::Keywords(automaton),
        })
    }

    /// Match when the regex matches.
    pub fn pattern(name: &'static str, intent_type: IntentType, pattern: &str) -> Result<Self> {
        Ok(Self {
            name,
            intent_type,
            matcher: Matcher::Pattern(extract::compile(pattern)?),
        })
    }

    /// Payload is the text after the first present trigger phrase.
    pub fn after_phrase(
        name: &'static str,
        intent_type: IntentType,
        phrases: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            intent_type,
            matcher: Matcher::AfterPhrase(phrases),
        }
    }

    /// Payload is capture group 1 of the first matching pattern.
    pub fn capture(name: &'static str, intent_type: IntentType, patterns: &[&str]) -> Result<Self> {
        Ok(Self {
            name,
            intent_type,
            matcher: Matcher::Capture(extract::compile_all(patterns)?),
        })
    }

    /// Payload comes from a custom extractor.
    pub fn extract<F>(name: &'static str, intent_type: IntentType, extractor: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            name,
            intent_type,
            matcher: Matcher::Extract(Box::new(extractor)),
        }
    }

    /// The matcher kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        self.matcher.kind()
    }

    /// Evaluate against normalized text.
    ///
    /// A payload-bearing matcher that yields an empty payload counts as no
    /// match.
    pub fn evaluate(&self, text: &str) -> Option<Intent> {
        let payload = match &self.matcher {
            Matcher::Keywords(ac) => return ac.is_match(text).then(|| Intent::new(self.intent_type)),
            Matcher::Pattern(re) => return re.is_match(text).then(|| Intent::new(self.intent_type)),
            Matcher::AfterPhrase(phrases) => extract::after_phrase(text, phrases),
            Matcher::Capture(patterns) => extract::first_capture(text, patterns),
            Matcher::Extract(f) => f(text),
        }?;

        if payload.is_empty() {
            return None;
        }
        Some(Intent::with_payload(self.intent_type, payload))
    }
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// Exit keywords as whole words.
pub const EXIT_PATTERN: &str = r"\b(?:exit|quit|stop|goodbye|bye)\b";

/// Greeting prefixes, or an exact greeting phrase.
pub const GREETING_PATTERN: &str =
    r"^(?:hi|hello|hey)\b|^(?:good morning|good evening|what's up|whats up|what is up)$";

/// Build the cascade in priority order.
pub fn build_rules() -> Result<Vec<Rule>> {
    use IntentType as T;

    let contact_add = extract::contact_add_patterns()?;
    let contact_sms = extract::contact_sms_patterns()?;
    let whatsapp = extract::whatsapp_patterns()?;
    let event = extract::event_patterns()?;
    let number = extract::compile(PHONE_NUMBER)?;
    let phone_sms = extract::phone_sms_patterns()?;
    let open_app = extract::OpenAppPatterns::new()?;
    let translation = extract::translation_patterns()?;
    let expense = extract::expense_patterns()?;

    Ok(vec![
        // -- Control ----------------------------------------------------------
        Rule::pattern("exit", T::Exit, EXIT_PATTERN)?,
        Rule::pattern("greeting", T::Greeting, GREETING_PATTERN)?,
        // -- Small talk -------------------------------------------------------
        Rule::keywords(
            "how_are_you",
            T::HowAreYou,
            &["how are you", "how do you feel", "are you okay"],
        )?,
        Rule::keywords(
            "daily_chores",
            T::DailyChores,
            &["daily chores", "plan my day", "routine for today", "today plan"],
        )?,
        Rule::keywords(
            "motivation",
            T::Motivation,
            &["motivate me", "motivation", "i feel lazy", "encourage me"],
        )?,
        // -- Reminders --------------------------------------------------------
        Rule::after_phrase(
            "add_reminder",
            T::AddReminder,
            &[
                "remind me to ",
                "set reminder to ",
                "add reminder to ",
                "remember to ",
                "remind me 2 ",
            ],
        ),
        Rule::keywords(
            "list_reminders",
            T::ListReminders,
            &["show reminders", "my reminders", "list reminders", "what are my reminders"],
        )?,
        Rule::capture(
            "delete_reminder",
            T::DeleteReminder,
            &[
                r"(?:delete|remove)\s+reminder\s+(\d+)",
                r"reminder\s+(\d+)\s+(?:delete|remove)",
            ],
        )?,
        Rule::keywords(
            "clear_reminders",
            T::ClearReminders,
            &["clear reminders", "delete all reminders", "remove all reminders"],
        )?,
        // -- Tasks ------------------------------------------------------------
        Rule::after_phrase(
            "add_task",
            T::AddTask,
            &["add task ", "add todo ", "todo ", "to do "],
        ),
        Rule::keywords(
            "list_tasks",
            T::ListTasks,
            &["show tasks", "my tasks", "list tasks", "todo list", "to do list"],
        )?,
        Rule::capture(
            "complete_task",
            T::CompleteTask,
            &[
                r"(?:complete|finish|done)\s+task\s+(\d+)",
                r"mark\s+task\s+(\d+)\s+done",
            ],
        )?,
        Rule::capture(
            "delete_task",
            T::DeleteTask,
            &[
                r"(?:delete|remove)\s+task\s+(\d+)",
                r"task\s+(\d+)\s+(?:delete|remove)",
            ],
        )?,
        Rule::keywords(
            "clear_tasks",
            T::ClearTasks,
            &["clear tasks", "delete all tasks", "remove all tasks"],
        )?,
        // -- Contacts, messaging, calendar ------------------------------------
        Rule::extract("add_contact", T::AddContact, move |t| {
            extract::first_pair(t, &contact_add)
        }),
        Rule::keywords(
            "list_contacts",
            T::ListContacts,
            &["show contacts", "list contacts", "my contacts"],
        )?,
        Rule::extract("sms_contact", T::SmsContact, move |t| {
            extract::first_pair(t, &contact_sms)
        }),
        Rule::extract("whatsapp_message", T::WhatsappMessage, move |t| {
            extract::first_pair(t, &whatsapp)
        }),
        Rule::extract("add_event", T::AddEvent, move |t| extract::first_pair(t, &event)),
        Rule::keywords(
            "show_schedule",
            T::ShowSchedule,
            &["show schedule", "my schedule", "calendar events", "upcoming events"],
        )?,
        Rule::keywords(
            "sync_tasks_calendar",
            T::SyncTasksCalendar,
            &["sync tasks to calendar", "sync my tasks", "calendar sync"],
        )?,
        // -- Undo and Google --------------------------------------------------
        Rule::keywords("undo", T::Undo, &["undo", "undo last"])?,
        Rule::keywords(
            "google_login",
            T::GoogleLogin,
            &["google login", "login google", "connect google"],
        )?,
        Rule::keywords(
            "google_sync_contacts",
            T::GoogleSyncContacts,
            &["sync google contacts", "google contacts sync", "import google contacts"],
        )?,
        Rule::keywords(
            "google_sync_calendar",
            T::GoogleSyncCalendar,
            &["sync google calendar", "import google calendar", "pull google calendar"],
        )?,
        Rule::keywords(
            "google_push_events",
            T::GooglePushEvents,
            &["push events to google", "sync events to google", "export calendar"],
        )?,
        // -- Phone ------------------------------------------------------------
        Rule::extract("phone_call", T::PhoneCall, move |t| {
            if !extract::contains_any(t, &["call", "dial", "ring"]) {
                return None;
            }
            extract::phone_number(t, &number)
        }),
        Rule::extract("call_contact", T::CallContact, extract::call_contact_name),
        Rule::extract("phone_sms", T::PhoneSms, move |t| {
            extract::first_pair(t, &phone_sms)
        }),
        Rule::extract("phone_open_app", T::PhoneOpenApp, move |t| {
            if !extract::contains_any(t, &["open app", "launch app", "start app"]) {
                return None;
            }
            open_app.extract(t)
        }),
        // -- Study ------------------------------------------------------------
        Rule::after_phrase(
            "study_plan",
            T::StudyPlan,
            &["study plan for ", "make study plan for "],
        ),
        Rule::after_phrase(
            "study_explain",
            T::StudyExplain,
            &["explain ", "teach me ", "i want to learn "],
        ),
        Rule::after_phrase("study_quiz", T::StudyQuiz, &["quiz me on ", "test me on "]),
        // -- Translation ------------------------------------------------------
        Rule::extract("translate", T::Translate, move |t| {
            extract::first_pair(t, &translation)
        }),
        Rule::keywords(
            "show_translate_langs",
            T::ShowTranslateLangs,
            &["supported languages", "translation languages", "translate languages"],
        )?,
        // -- Profile and wellbeing --------------------------------------------
        Rule::keywords("thanks", T::Thanks, &["thank you", "thanks", "thank u"])?,
        Rule::after_phrase("set_name", T::SetName, &["my name is ", "call me "]),
        Rule::keywords(
            "get_name",
            T::GetName,
            &["what is my name", "do you know my name", "who am i"],
        )?,
        Rule::keywords(
            "check_in",
            T::CheckIn,
            &["check in with me", "check on me", "how am i doing"],
        )?,
        Rule::keywords(
            "breathing",
            T::Breathing,
            &["breathing exercise", "help me breathe", "calm me down"],
        )?,
        Rule::keywords(
            "affirmation",
            T::Affirmation,
            &["affirm me", "give me affirmation", "say something positive"],
        )?,
        Rule::keywords(
            "study_tip",
            T::StudyTip,
            &["study tip", "help me study", "study advice"],
        )?,
        Rule::keywords(
            "fitness_tip",
            T::FitnessTip,
            &["fitness tip", "workout tip", "health tip"],
        )?,
        Rule::keywords(
            "money_tip",
            T::MoneyTip,
            &["money tip", "finance tip", "save money"],
        )?,
        Rule::keywords(
            "sleep_tip",
            T::SleepTip,
            &["sleep tip", "help me sleep", "better sleep"],
        )?,
        // -- Expenses ---------------------------------------------------------
        Rule::extract("add_expense", T::AddExpense, move |t| {
            extract::first_pair(t, &expense)
        }),
        Rule::keywords(
            "show_expenses",
            T::ShowExpenses,
            &["show expenses", "list expenses", "my expenses"],
        )?,
        Rule::keywords(
            "expense_report",
            T::ExpenseReport,
            &["expense report", "monthly expense report", "spending report"],
        )?,
        // -- Habits, summary, history, help -----------------------------------
        Rule::after_phrase("add_habit", T::AddHabit, &["add habit ", "new habit "]),
        Rule::after_phrase(
            "done_habit",
            T::DoneHabit,
            &["done habit ", "mark habit done "],
        ),
        Rule::keywords(
            "show_habits",
            T::ShowHabits,
            &["show habits", "list habits", "my habits"],
        )?,
        Rule::keywords(
            "day_summary",
            T::DaySummary,
            &["summarize my day", "day summary", "daily summary"],
        )?,
        Rule::keywords(
            "show_history",
            T::ShowHistory,
            &["show history", "chat history", "conversation history"],
        )?,
        Rule::keywords(
            "clear_history",
            T::ClearHistory,
            &["clear history", "delete history", "erase history"],
        )?,
        Rule::keywords(
            "help",
            T::Help,
            &["what can you do", "help", "commands", "how can you help", "features"],
        )?,
        // -- Bare keywords ----------------------------------------------------
        Rule::keywords("get_time", T::GetTime, &["time"])?,
        Rule::keywords("get_date", T::GetDate, &["date", "day"])?,
        // -- Open-ended extraction --------------------------------------------
        Rule::capture(
            "open_site",
            T::OpenSite,
            &[
                r"(?:open|launch|go to)\s+([a-z0-9\.-]+)",
                r"(?:can you|please)\s+(?:open|launch)\s+([a-z0-9\.-]+)",
            ],
        )?,
        Rule::after_phrase(
            "search_web",
            T::SearchWeb,
            &["search for ", "search ", "look up ", "find "],
        ),
        Rule::extract("calculate", T::Calculate, extract::calculation),
        Rule::after_phrase(
            "save_note",
            T::SaveNote,
            &["note ", "write this down ", "save note ", "take a note "],
        ),
        Rule::keywords("joke", T::Joke, &["joke"])?,
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
