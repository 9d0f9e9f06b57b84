//! Core value types: [`IntentType`] and [`Intent`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IntentError;

// ---------------------------------------------------------------------------
// IntentType
// ---------------------------------------------------------------------------

/// Every intent the classifier can produce.
///
/// The set is closed.  Serialized names are the snake_case tags downstream
/// handlers dispatch on (`get_time`, `add_reminder`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentType {
    GetTime,
    GetDate,
    OpenSite,
    SearchWeb,
    SaveNote,
    Joke,
    Greeting,
    HowAreYou,
    DailyChores,
    Motivation,
    Thanks,
    AddReminder,
    ListReminders,
    DeleteReminder,
    ClearReminders,
    AddTask,
    ListTasks,
    CompleteTask,
    DeleteTask,
    ClearTasks,
    Calculate,
    SetName,
    GetName,
    CheckIn,
    Breathing,
    Affirmation,
    StudyTip,
    FitnessTip,
    MoneyTip,
    SleepTip,
    AddExpense,
    ShowExpenses,
    ExpenseReport,
    AddHabit,
    DoneHabit,
    ShowHabits,
    DaySummary,
    ShowHistory,
    ClearHistory,
    Translate,
    ShowTranslateLangs,
    PhoneCall,
    PhoneSms,
    PhoneOpenApp,
    StudyPlan,
    StudyExplain,
    StudyQuiz,
    AddContact,
    ListContacts,
    CallContact,
    SmsContact,
    WhatsappMessage,
    AddEvent,
    ShowSchedule,
    SyncTasksCalendar,
    GoogleLogin,
    GoogleSyncContacts,
    GoogleSyncCalendar,
    GooglePushEvents,
    Undo,
    Help,
    Exit,
    Unknown,
}

impl IntentType {
    /// All variants in declaration order.
    pub const ALL: [IntentType; 63] = [
        Self::GetTime,
        Self::GetDate,
        Self::OpenSite,
        Self::SearchWeb,
        Self::SaveNote,
        Self::Joke,
        Self::Greeting,
        Self::HowAreYou,
        Self::DailyChores,
        Self::Motivation,
        Self::Thanks,
        Self::AddReminder,
        Self::ListReminders,
        Self::DeleteReminder,
        Self::ClearReminders,
        Self::AddTask,
        Self::ListTasks,
        Self::CompleteTask,
        Self::DeleteTask,
        Self::ClearTasks,
        Self::Calculate,
        Self::SetName,
        Self::GetName,
        Self::CheckIn,
        Self::Breathing,
        Self::Affirmation,
        Self::StudyTip,
        Self::FitnessTip,
        Self::MoneyTip,
        Self::SleepTip,
        Self::AddExpense,
        Self::ShowExpenses,
        Self::ExpenseReport,
        Self::AddHabit,
        Self::DoneHabit,
        Self::ShowHabits,
        Self::DaySummary,
        Self::ShowHistory,
        Self::ClearHistory,
        Self::Translate,
        Self::ShowTranslateLangs,
        Self::PhoneCall,
        Self::PhoneSms,
        Self::PhoneOpenApp,
        Self::StudyPlan,
        Self::StudyExplain,
        Self::StudyQuiz,
        Self::AddContact,
        Self::ListContacts,
        Self::CallContact,
        Self::SmsContact,
        Self::WhatsappMessage,
        Self::AddEvent,
        Self::ShowSchedule,
        Self::SyncTasksCalendar,
        Self::GoogleLogin,
        Self::GoogleSyncContacts,
        Self::GoogleSyncCalendar,
        Self::GooglePushEvents,
        Self::Undo,
        Self::Help,
        Self::Exit,
        Self::Unknown,
    ];

    /// The snake_case wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetTime => "get_time",
            Self::GetDate => "get_date",
            Self::OpenSite => "open_site",
            Self::SearchWeb => "search_web",
            Self::SaveNote => "save_note",
            Self::Joke => "joke",
            Self::Greeting => "greeting",
            Self::HowAreYou => "how_are_you",
            Self::DailyChores => "daily_chores",
            Self::Motivation => "motivation",
            Self::Thanks => "thanks",
            Self::AddReminder => "add_reminder",
            Self::ListReminders => "list_reminders",
            Self::DeleteReminder => "delete_reminder",
            Self::ClearReminders => "clear_reminders",
            Self::AddTask => "add_task",
            Self::ListTasks => "list_tasks",
            Self::CompleteTask => "complete_task",
            Self::DeleteTask => "delete_task",
            Self::ClearTasks => "clear_tasks",
            Self::Calculate => "calculate",
            Self::SetName => "set_name",
            Self::GetName => "get_name",
            Self::CheckIn => "check_in",
            Self::Breathing => "breathing",
            Self::Affirmation => "affirmation",
            Self::StudyTip => "study_tip",
            Self::FitnessTip => "fitness_tip",
            Self::MoneyTip => "money_tip",
            Self::SleepTip => "sleep_tip",
            Self::AddExpense => "add_expense",
            Self::ShowExpenses => "show_expenses",
            Self::ExpenseReport => "expense_report",
            Self::AddHabit => "add_habit",
            Self::DoneHabit => "done_habit",
            Self::ShowHabits => "show_habits",
            Self::DaySummary => "day_summary",
            Self::ShowHistory => "show_history",
            Self::ClearHistory => "clear_history",
            Self::Translate => "translate",
            Self::ShowTranslateLangs => "show_translate_langs",
            Self::PhoneCall => "phone_call",
            Self::PhoneSms => "phone_sms",
            Self::PhoneOpenApp => "phone_open_app",
            Self::StudyPlan => "study_plan",
            Self::StudyExplain => "study_explain",
            Self::StudyQuiz => "study_quiz",
            Self::AddContact => "add_contact",
            Self::ListContacts => "list_contacts",
            Self::CallContact => "call_contact",
            Self::SmsContact => "sms_contact",
            Self::WhatsappMessage => "whatsapp_message",
            Self::AddEvent => "add_event",
            Self::ShowSchedule => "show_schedule",
            Self::SyncTasksCalendar => "sync_tasks_calendar",
            Self::GoogleLogin => "google_login",
            Self::GoogleSyncContacts => "google_sync_contacts",
            Self::GoogleSyncCalendar => "google_sync_calendar",
            Self::GooglePushEvents => "google_push_events",
            Self::Undo => "undo",
            Self::Help => "help",
            Self::Exit => "exit",
            Self::Unknown => "unknown",
        }
    }

    /// Whether intents of this type always carry a payload.
    ///
    /// Every other type is produced with `payload == None`.
    pub fn carries_payload(self) -> bool {
        matches!(
            self,
            Self::OpenSite
                | Self::SearchWeb
                | Self::SaveNote
                | Self::AddReminder
                | Self::DeleteReminder
                | Self::AddTask
                | Self::CompleteTask
                | Self::DeleteTask
                | Self::Calculate
                | Self::SetName
                | Self::AddExpense
                | Self::AddHabit
                | Self::DoneHabit
                | Self::Translate
                | Self::PhoneCall
                | Self::PhoneSms
                | Self::PhoneOpenApp
                | Self::StudyPlan
                | Self::StudyExplain
                | Self::StudyQuiz
                | Self::AddContact
                | Self::CallContact
                | Self::SmsContact
                | Self::WhatsappMessage
                | Self::AddEvent
        )
    }
}

impl fmt::Display for IntentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntentType {
    type Err = IntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| IntentError::UnknownIntentType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Intent
// ---------------------------------------------------------------------------

/// Delimiter separating sub-fields inside a multi-value payload.
pub const FIELD_DELIMITER: char = '|';

/// The structured outcome of classifying one utterance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intent {
    /// The symbolic intent tag.
    pub intent_type: IntentType,

    /// Intent-specific data.  Multi-value payloads are joined with
    /// [`FIELD_DELIMITER`] in a fixed, per-type field order.
    pub payload: Option<String>,
}

impl Intent {
    /// An intent that carries no data.
    pub fn new(intent_type: IntentType) -> Self {
        Self {
            intent_type,
            payload: None,
        }
    }

    /// An intent with a payload.
    pub fn with_payload(intent_type: IntentType, payload: impl Into<String>) -> Self {
        Self {
            intent_type,
            payload: Some(payload.into()),
        }
    }

    /// The fallback intent for unmatched input.
    pub fn unknown() -> Self {
        Self::new(IntentType::Unknown)
    }

    /// Payload as a string slice, if any.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Payload split on [`FIELD_DELIMITER`].  Empty when there is no payload.
    pub fn fields(&self) -> Vec<&str> {
        self.payload
            .as_deref()
            .map(|p| p.split(FIELD_DELIMITER).collect())
            .unwrap_or_default()
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Some(payload) => write!(f, "{}({payload})", self.intent_type),
            None => write!(f, "{}", self.intent_type),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
