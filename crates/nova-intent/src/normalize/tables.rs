//! Normalization tables.
//!
//! Pure data.  Adding a language or slang form means adding a row here; the
//! pipeline in [`super`] never special-cases an entry.

/// Anchored whole-utterance rewrites, evaluated in order; the first match
/// wins.  `${1}` in a template is the captured remainder, kept verbatim.
///
/// These move the verb of a Telugu, Hindi or Spanish command into English
/// word order so the English rule patterns can see it.
pub const REGEX_REWRITES: &[(&str, &str)] = &[
    // remind me
    (r"^నాకు గుర్తు చేయి\s+(.+)$", "remind me to ${1}"),
    (r"^naaku gurtu cheyi\s+(.+)$", "remind me to ${1}"),
    (r"^gurtu cheyi\s+(.+)$", "remind me to ${1}"),
    (r"^मुझे याद दिलाओ\s+(.+)$", "remind me to ${1}"),
    (r"^mujhe yaad dilao\s+(.+)$", "remind me to ${1}"),
    (r"^recu[eé]rdame\s+(.+)$", "remind me to ${1}"),
    (r"^గుర్తుచేయి\s+(.+)$", "remind me to ${1}"),
    // open
    (r"^open cheyi\s+(.+)$", "open ${1}"),
    (r"^తెరువు\s+(.+)$", "open ${1}"),
    (r"^खोलो\s+(.+)$", "open ${1}"),
    (r"^kholo\s+(.+)$", "open ${1}"),
    (r"^abrir\s+(.+)$", "open ${1}"),
    (r"^abre\s+(.+)$", "open ${1}"),
    // search
    (r"^వెతుకు\s+(.+)$", "search ${1}"),
    (r"^ढूंढो\s+(.+)$", "search ${1}"),
    (r"^buscar\s+(.+)$", "search ${1}"),
    // note
    (r"^nota\s+(.+)$", "note ${1}"),
    (r"^గమనిక\s+(.+)$", "note ${1}"),
    (r"^नोट\s+(.+)$", "note ${1}"),
    // listings
    (r"^చూపు రిమైండర్లు$", "show reminders"),
    (r"^recordatorios$", "show reminders"),
    (r"^reminders dikhao$", "show reminders"),
    (r"^చూపు tasks$", "show tasks"),
    (r"^tareas$", "show tasks"),
    (r"^tasks dikhao$", "show tasks"),
    // add task
    (r"^పని జోడించు\s+(.+)$", "add task ${1}"),
    (r"^kaam jodo\s+(.+)$", "add task ${1}"),
    (r"^tarea\s+(.+)$", "add task ${1}"),
];

/// Token-boundary phrase substitutions, applied in order.
///
/// Keys are single-space separated and already lowercase; a key never
/// matches inside a longer word.
pub const PHRASE_SUBSTITUTIONS: &[(&str, &str)] = &[
    // chat slang
    ("gud mrng", "good morning"),
    ("gd mrng", "good morning"),
    ("whats up", "what is up"),
    ("watsup", "what is up"),
    ("wru", "where are you"),
    ("hru", "how are you"),
    ("wyd", "what are you doing"),
    ("idk", "i do not know"),
    ("dont", "do not"),
    ("cant", "can not"),
    ("wanna", "want to"),
    ("gonna", "going to"),
    ("kinda", "kind of"),
    ("sorta", "sort of"),
    // greetings
    ("namaste", "hello"),
    ("hola", "hello"),
    ("bonjour", "hello"),
    // romanized telugu
    ("nuvvu ela unnava", "how are you"),
    ("ela unnava", "how are you"),
    ("ela unnav", "how are you"),
    ("ela unav", "how are you"),
    ("ela unavu", "how are you"),
    ("bagunnava", "how are you"),
    ("bagunava", "how are you"),
    ("mee peru enti", "what is my name"),
    ("samayam entha", "what is time"),
    ("samayam enta", "what is time"),
    ("thedi emiti", "what is date"),
    // romanized hindi
    ("tarikh kya hai", "what is date"),
    ("kya kar sakte ho", "what can you do"),
    ("dhanyavad", "thanks"),
    ("shukriya", "thanks"),
    // spanish
    ("que hora es", "what is time"),
    ("que fecha es", "what is date"),
    ("como estas", "how are you"),
    ("ayuda", "help"),
    ("gracias", "thanks"),
    ("adios", "goodbye"),
    ("hasta luego", "goodbye"),
    ("buenos dias", "good morning"),
    ("buenas noches", "good night"),
    // telugu
    ("నమస్తే", "hello"),
    ("హలో", "hello"),
    ("హాయ్", "hello"),
    ("నువ్వు ఎలా ఉన్నావు", "how are you"),
    ("సమయం ఎంత", "what is time"),
    ("సమయం ఎంతా", "what is time"),
    ("తేదీ ఏమిటి", "what is date"),
    ("నా పేరు ఏమిటి", "what is my name"),
    ("నాకు సహాయం చేయి", "help"),
    ("ధన్యవాదాలు", "thanks"),
    ("వీడ్కోలు", "goodbye"),
    // hindi
    ("नमस्ते", "hello"),
    ("कैसे हो", "how are you"),
    ("समय क्या है", "what is time"),
    ("तारीख क्या है", "what is date"),
    ("मेरा नाम क्या है", "what is my name"),
    ("धन्यवाद", "thanks"),
    ("अलविदा", "goodbye"),
];

/// Single-token chat abbreviations.
pub const TOKEN_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("u", "you"),
    ("ur", "your"),
    ("r", "are"),
    ("pls", "please"),
    ("plz", "please"),
    ("thx", "thanks"),
    ("ty", "thank you"),
    ("im", "i am"),
    ("luv", "love"),
    ("bro", "friend"),
    ("sis", "friend"),
    ("gm", "good morning"),
    ("gn", "good night"),
    ("tmrw", "tomorrow"),
    ("2day", "today"),
];

/// Characters replaced by a space before any table is consulted.
pub const STRIPPED_PUNCTUATION: &[char] = &['!', ',', '?', ';', '"', '(', ')', '[', ']', '{', '}'];
