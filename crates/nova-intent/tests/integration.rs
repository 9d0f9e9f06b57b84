//! Integration tests for the nova-intent crate.
//!
//! These exercise normalization and the rule cascade end to end through the
//! public API: per-intent behavior, the documented properties, and every
//! known rule-order collision.

use nova_intent::{
    Classifier, ExpenseEntry, Intent, IntentType, OutgoingMessage, TranslationRequest, classify,
    explain, normalize,
};

fn assert_intent(raw: &str, expected: IntentType) {
    let intent = classify(raw);
    assert_eq!(intent.intent_type, expected, "classify({raw:?}) = {intent}");
}

fn assert_payload(raw: &str, expected: IntentType, payload: &str) {
    let intent = classify(raw);
    assert_eq!(
        intent,
        Intent::with_payload(expected, payload),
        "classify({raw:?}) = {intent}"
    );
}

// ═══════════════════════════════════════════════════════════════════════
//  Control and small talk
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn exit() {
    assert_intent("exit now", IntentType::Exit);
}

#[test]
fn greetings() {
    assert_intent("hi", IntentType::Greeting);
    assert_intent("Hello there", IntentType::Greeting);
    assert_intent("gud mrng", IntentType::Greeting);
    assert_intent("whats up", IntentType::Greeting);
    assert_intent("What's up?", IntentType::Greeting);
    assert_intent("good evening", IntentType::Greeting);
}

#[test]
fn greeting_prefix_needs_word_boundary() {
    assert_ne!(classify("history lesson").intent_type, IntentType::Greeting);
}

#[test]
fn how_are_you() {
    assert_intent("how are you", IntentType::HowAreYou);
    assert_intent("hru", IntentType::HowAreYou);
}

#[test]
fn daily_chores_and_motivation() {
    assert_intent("show daily chores", IntentType::DailyChores);
    assert_intent("i feel lazy", IntentType::Motivation);
}

// ═══════════════════════════════════════════════════════════════════════
//  Reminders and tasks
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn reminders() {
    assert_payload("remind me to submit resume", IntentType::AddReminder, "submit resume");
    assert_intent("show reminders", IntentType::ListReminders);
    assert_payload("delete reminder 2", IntentType::DeleteReminder, "2");
    assert_payload("reminder 4 remove", IntentType::DeleteReminder, "4");
    assert_intent("clear reminders", IntentType::ClearReminders);
}

#[test]
fn tasks() {
    assert_payload("add task finish portfolio", IntentType::AddTask, "finish portfolio");
    assert_intent("show tasks", IntentType::ListTasks);
    assert_payload("mark task 1 done", IntentType::CompleteTask, "1");
    assert_payload("delete task 3", IntentType::DeleteTask, "3");
    assert_intent("clear tasks", IntentType::ClearTasks);
}

#[test]
fn reminder_trigger_without_text_falls_through() {
    // Nothing after the trigger: no empty ADD_REMINDER.
    let intent = classify("remind me to");
    assert_ne!(intent.intent_type, IntentType::AddReminder);
    assert_eq!(intent.payload, None);
}

// ═══════════════════════════════════════════════════════════════════════
//  Contacts, messaging, calendar
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn contacts() {
    assert_payload("add contact mom 9876543210", IntentType::AddContact, "mom|9876543210");
    assert_payload(
        "save contact Big Brother +91 98765-43210",
        IntentType::AddContact,
        "big brother|+919876543210",
    );
    assert_intent("list contacts", IntentType::ListContacts);
    assert_payload("call mom", IntentType::CallContact, "mom");
}

#[test]
fn messaging() {
    assert_payload("sms mom message reach home", IntentType::SmsContact, "mom|reach home");
    assert_payload("whatsapp mom message hello", IntentType::WhatsappMessage, "mom|hello");
    assert_payload(
        "send to 9876543210 message I will be late",
        IntentType::PhoneSms,
        "9876543210|i will be late",
    );
}

#[test]
fn calendar() {
    assert_payload(
        "add event exam revision at 2026-02-20 18:00",
        IntentType::AddEvent,
        "exam revision|2026-02-20 18:00",
    );
    assert_payload(
        "schedule event dentist on 2026-03-01",
        IntentType::AddEvent,
        "dentist|2026-03-01 10:00",
    );
    assert_intent("show schedule", IntentType::ShowSchedule);
    assert_intent("sync tasks to calendar", IntentType::SyncTasksCalendar);
}

#[test]
fn undo_and_google() {
    assert_intent("undo", IntentType::Undo);
    assert_intent("google login", IntentType::GoogleLogin);
    assert_intent("sync google contacts", IntentType::GoogleSyncContacts);
    assert_intent("sync google calendar", IntentType::GoogleSyncCalendar);
    assert_intent("push events to google", IntentType::GooglePushEvents);
}

// ═══════════════════════════════════════════════════════════════════════
//  Phone and study
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn phone() {
    assert_payload("nova please call +91 9876543210", IntentType::PhoneCall, "+919876543210");
    assert_payload("dial 98765 43210", IntentType::PhoneCall, "9876543210");
    assert_payload("open app whatsapp", IntentType::PhoneOpenApp, "whatsapp");
}

#[test]
fn non_latin_digits_dial_directly() {
    assert_payload("call ९८७६५४३२१०", IntentType::PhoneCall, "९८७६५४३२१०");
    assert_payload("dial ౯౮౭౬౫ ౪౩౨౧౦", IntentType::PhoneCall, "౯౮౭౬౫౪౩౨౧౦");
    assert_ne!(classify("call ९८७").intent_type, IntentType::CallContact);
}

#[test]
fn delimiter_inside_a_field_falls_through() {
    let intent = classify("whatsapp a|b saying hi");
    assert_ne!(intent.intent_type, IntentType::WhatsappMessage);
    assert!(intent.fields().len() != 3);
}

#[test]
fn study() {
    assert_payload(
        "make study plan for data structures",
        IntentType::StudyPlan,
        "data structures",
    );
    assert_payload("explain binary search", IntentType::StudyExplain, "binary search");
    assert_payload("quiz me on operating systems", IntentType::StudyQuiz, "operating systems");
}

// ═══════════════════════════════════════════════════════════════════════
//  Translation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn translation_forms() {
    assert_payload("translate hello to telugu", IntentType::Translate, "telugu|hello");
    assert_payload("what is thank you in hindi", IntentType::Translate, "hindi|thank you");
    assert_payload("how to say water in spanish", IntentType::Translate, "spanish|water");
    assert_payload("translate to hindi good night", IntentType::Translate, "hindi|good night");
    assert_intent("supported languages", IntentType::ShowTranslateLangs);
}

// ═══════════════════════════════════════════════════════════════════════
//  Profile, wellbeing, tips
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn profile_and_wellbeing() {
    assert_intent("thanks", IntentType::Thanks);
    assert_intent("thx", IntentType::Thanks);
    assert_payload("my name is sunil", IntentType::SetName, "sunil");
    assert_intent("what is my name", IntentType::GetName);
    assert_intent("check in with me", IntentType::CheckIn);
    assert_intent("help me breathe", IntentType::Breathing);
    assert_intent("give me affirmation", IntentType::Affirmation);
}

#[test]
fn tips() {
    assert_intent("study tip", IntentType::StudyTip);
    assert_intent("fitness tip", IntentType::FitnessTip);
    assert_intent("money tip", IntentType::MoneyTip);
    assert_intent("sleep tip", IntentType::SleepTip);
}

// ═══════════════════════════════════════════════════════════════════════
//  Expenses, habits, history, help
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn expenses() {
    assert_payload("spent 250 on groceries", IntentType::AddExpense, "250|groceries");
    assert_payload("add expense 99.5 books", IntentType::AddExpense, "99.5|books");
    assert_intent("show expenses", IntentType::ShowExpenses);
    assert_intent("monthly expense report", IntentType::ExpenseReport);
}

#[test]
fn habits_history_help() {
    assert_payload("add habit reading", IntentType::AddHabit, "reading");
    assert_payload("done habit reading", IntentType::DoneHabit, "reading");
    assert_intent("show habits", IntentType::ShowHabits);
    assert_intent("summarize my day", IntentType::DaySummary);
    assert_intent("show history", IntentType::ShowHistory);
    assert_intent("clear history", IntentType::ClearHistory);
    assert_intent("what can you do", IntentType::Help);
}

// ═══════════════════════════════════════════════════════════════════════
//  Fallbacks
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn time_and_date() {
    assert_intent("what time is it", IntentType::GetTime);
    assert_intent("tell me the date", IntentType::GetDate);
}

#[test]
fn open_site() {
    assert_payload("open github", IntentType::OpenSite, "github");
    assert_payload("can you open youtube please", IntentType::OpenSite, "youtube");
    assert_payload("plz open github", IntentType::OpenSite, "github");
    assert_payload("go to docs.rs", IntentType::OpenSite, "docs.rs");
}

#[test]
fn search_web() {
    assert_payload(
        "search python speech recognition",
        IntentType::SearchWeb,
        "python speech recognition",
    );
    assert_payload(
        "please search for python decorators",
        IntentType::SearchWeb,
        "python decorators",
    );
    assert_payload("look up rust closures", IntentType::SearchWeb, "rust closures");
}

#[test]
fn calculator_gate() {
    assert_payload("calculate 2 + 2", IntentType::Calculate, "2 + 2");
    assert_payload("compute (3 * 4) ^ 2", IntentType::Calculate, "3 * 4 ^ 2");
    assert_eq!(classify("what is this life brooo"), Intent::unknown());
}

#[test]
fn notes_and_jokes() {
    assert_payload("note prepare interview pitch", IntentType::SaveNote, "prepare interview pitch");
    assert_payload(
        "write this down finish portfolio website",
        IntentType::SaveNote,
        "finish portfolio website",
    );
    assert_intent("tell me a joke", IntentType::Joke);
}

#[test]
fn unknown() {
    assert_eq!(classify("sing a song"), Intent::unknown());
    assert_eq!(classify(""), Intent::unknown());
}

// ═══════════════════════════════════════════════════════════════════════
//  Languages
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn telugu() {
    assert_intent("నమస్తే", IntentType::Greeting);
    assert_intent("సమయం ఎంత", IntentType::GetTime);
    assert_intent("ela unav", IntentType::HowAreYou);
    assert_intent("bagunnava", IntentType::HowAreYou);
    assert_payload("నాకు గుర్తు చేయి నీళ్లు తాగు", IntentType::AddReminder, "నీళ్లు తాగు");
    assert_payload("gurtu cheyi call amma", IntentType::AddReminder, "call amma");
}

#[test]
fn hindi() {
    assert_intent("धन्यवाद", IntentType::Thanks);
    assert_payload("खोलो github", IntentType::OpenSite, "github");
    assert_payload("kholo github", IntentType::OpenSite, "github");
    assert_intent("मेरा नाम क्या है", IntentType::GetName);
}

#[test]
fn spanish() {
    assert_intent("hola", IntentType::Greeting);
    assert_payload("recuerdame beber agua", IntentType::AddReminder, "beber agua");
    assert_payload("Recuérdame beber agua", IntentType::AddReminder, "beber agua");
    assert_intent("que hora es", IntentType::GetTime);
    assert_intent("adios", IntentType::Exit);
    assert_intent("tareas", IntentType::ListTasks);
    assert_payload("buscar recetas faciles", IntentType::SearchWeb, "recetas faciles");
}

// ═══════════════════════════════════════════════════════════════════════
//  Properties
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn whole_word_exit_keyword_always_exits() {
    let keywords = ["exit", "quit", "stop", "goodbye", "bye"];
    let templates = [
        "{}",
        "please {} now",
        "remind me to {}",
        "open github and {}",
        "spent 250 on {}",
        "hello {}",
        "call mom then {}",
    ];
    for kw in keywords {
        for template in templates {
            let raw = template.replace("{}", kw);
            assert_intent(&raw, IntentType::Exit);
        }
    }
}

#[test]
fn exit_keyword_inside_a_word_does_not_exit() {
    assert_ne!(classify("stopwatch").intent_type, IntentType::Exit);
    assert_ne!(classify("open the desktop folder").intent_type, IntentType::Exit);
    assert_ne!(classify("byelaws").intent_type, IntentType::Exit);
}

const CORPUS: &[&str] = &[
    "exit now",
    "Hola!!",
    "hru",
    "remind me to submit resume",
    "recuerdame beber agua",
    "delete reminder 2",
    "add task finish portfolio",
    "mark task 1 done",
    "add contact mom 9876543210",
    "sms mom message reach home",
    "whatsapp mom message hello",
    "add event exam revision at 2026-02-20 18:00",
    "nova please call +91 9876543210",
    "call mom",
    "send to 9876543210 message I will be late",
    "open app whatsapp",
    "explain binary search",
    "translate hello to telugu",
    "my name is sunil",
    "spent 250 on groceries",
    "add habit reading",
    "what time is it",
    "can you open youtube please",
    "search python speech recognition",
    "calculate 2 + 2",
    "what is this life brooo",
    "write this down finish portfolio website",
    "tell me a joke",
    "నాకు గుర్తు చేయి నీళ్లు తాగు",
    "खोलो github",
    "gud mrng bro",
    "idk wyd tmrw",
    "  Spent 250 on (groceries)  ",
];

#[test]
fn normalize_is_idempotent() {
    for raw in CORPUS {
        let once = normalize(raw);
        assert_eq!(normalize(&once), once, "normalize not idempotent for {raw:?}");
    }
}

#[test]
fn classifying_normalized_text_gives_the_same_intent() {
    for raw in CORPUS {
        assert_eq!(classify(&normalize(raw)), classify(raw), "mismatch for {raw:?}");
    }
}

#[test]
fn payload_presence_matches_intent_type() {
    for raw in CORPUS {
        let intent = classify(raw);
        assert_eq!(
            intent.payload.is_some(),
            intent.intent_type.carries_payload(),
            "payload invariant broken for {raw:?}: {intent}"
        );
        if let Some(payload) = &intent.payload {
            assert!(!payload.trim().is_empty(), "empty payload for {raw:?}");
        }
    }
}

#[test]
fn classification_is_deterministic() {
    let a = Classifier::new().unwrap();
    let b = Classifier::new().unwrap();
    for raw in CORPUS {
        assert_eq!(a.classify(raw), b.classify(raw));
        assert_eq!(a.classify(raw), a.classify(raw));
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Rule-order collisions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn exit_beats_reminder() {
    assert_intent("remind me to stop smoking", IntentType::Exit);
}

#[test]
fn greeting_beats_reminder() {
    assert_intent("hello remind me to call mom", IntentType::Greeting);
    assert_intent("hi how are you", IntentType::Greeting);
}

#[test]
fn reminder_beats_calculator_and_call() {
    assert_payload("remind me to calculate tax", IntentType::AddReminder, "calculate tax");
    assert_payload("remind me to call mom", IntentType::AddReminder, "call mom");
    assert_payload("remind me to show reminders", IntentType::AddReminder, "show reminders");
}

#[test]
fn indexed_delete_beats_clear() {
    assert_payload("delete reminder 2", IntentType::DeleteReminder, "2");
    assert_intent("delete all reminders", IntentType::ClearReminders);
    assert_payload("remove task 5", IntentType::DeleteTask, "5");
    assert_intent("remove all tasks", IntentType::ClearTasks);
}

#[test]
fn task_add_beats_call() {
    assert_payload("add task call mom", IntentType::AddTask, "call mom");
}

#[test]
fn todo_trigger_beats_todo_list_keyword() {
    // "todo " is an add-task trigger and add-task is checked first.
    assert_payload("todo list", IntentType::AddTask, "list");
}

#[test]
fn list_tasks_beats_calendar_sync() {
    assert_intent("sync my tasks", IntentType::ListTasks);
}

#[test]
fn digits_pick_phone_call_over_contact() {
    assert_payload("call 9876543210", IntentType::PhoneCall, "9876543210");
    assert_payload("call mom", IntentType::CallContact, "mom");
}

#[test]
fn call_contact_beats_set_name() {
    assert_payload("call me sunil", IntentType::CallContact, "me sunil");
}

#[test]
fn digits_pick_phone_sms_over_contact_sms() {
    assert_payload("text 9876543210 saying hi", IntentType::PhoneSms, "9876543210|hi");
    assert_payload("text mom that i am late", IntentType::SmsContact, "mom|i am late");
}

#[test]
fn call_keyword_without_shape_falls_through_to_expense() {
    assert_payload("spent 100 on phone call", IntentType::AddExpense, "100|phone call");
}

#[test]
fn explain_beats_search() {
    assert_payload(
        "explain how to search binary trees",
        IntentType::StudyExplain,
        "how to search binary trees",
    );
}

#[test]
fn translation_beats_thanks_and_calculator() {
    assert_payload("what is thank you in hindi", IntentType::Translate, "hindi|thank you");
    assert_payload("what is hello in spanish", IntentType::Translate, "spanish|hello");
}

#[test]
fn wellbeing_beats_help() {
    assert_intent("help me breathe", IntentType::Breathing);
    assert_intent("help me sleep", IntentType::SleepTip);
}

#[test]
fn get_name_beats_calculator() {
    assert_intent("what is my name", IntentType::GetName);
}

#[test]
fn day_summary_beats_date_keyword() {
    assert_intent("my day summary", IntentType::DaySummary);
}

#[test]
fn time_keyword_beats_calculator() {
    assert_intent("what is the time", IntentType::GetTime);
    assert_payload("what is 2 + 2", IntentType::Calculate, "2 + 2");
}

#[test]
fn bare_keywords_beat_search() {
    assert_intent("search for today's news", IntentType::GetDate);
    assert_intent("look up rust lifetimes", IntentType::GetTime);
}

#[test]
fn phone_app_beats_site() {
    assert_payload("open app whatsapp", IntentType::PhoneOpenApp, "whatsapp");
    assert_payload("open github", IntentType::OpenSite, "github");
}

// ═══════════════════════════════════════════════════════════════════════
//  Explain and typed payloads
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn explain_names_the_deciding_rule() {
    let result = explain("remind me to calculate tax");
    assert_eq!(result.rule, "add_reminder");
    assert_eq!(result.normalized, "remind me to calculate tax");
}

#[test]
fn classified_payloads_decode() {
    let expense = ExpenseEntry::try_from(&classify("spent 250 on groceries")).unwrap();
    assert!((expense.amount - 250.0).abs() < f64::EPSILON);
    assert_eq!(expense.category, "groceries");

    let msg = OutgoingMessage::try_from(&classify("whatsapp mom message hello")).unwrap();
    assert_eq!(msg.recipient, "mom");
    assert_eq!(msg.body, "hello");

    let req = TranslationRequest::try_from(&classify("translate hello to telugu")).unwrap();
    assert_eq!(req.target_language, "telugu");
    assert_eq!(req.phrase, "hello");
}

#[test]
fn intent_serializes_with_wire_names() {
    let json = serde_json::to_value(classify("open github")).unwrap();
    assert_eq!(json["intent_type"], "open_site");
    assert_eq!(json["payload"], "github");

    let json = serde_json::to_value(classify("undo")).unwrap();
    assert_eq!(json["intent_type"], "undo");
    assert!(json["payload"].is_null());
}
