//! Built-in quote data, used when no `QUOTES_FILE` is configured.
//!
//! Non-English entries are either native to the language or static,
//! pre-authored translations; translations carry their English original.

use crate::i18n::Language;

pub(super) struct Entry {
    pub text: &'static str,
    pub author: &'static str,
    /// English text and author this entry was translated from
    pub original: Option<(&'static str, &'static str)>,
}

const fn native(text: &'static str, author: &'static str) -> Entry {
    Entry {
        text,
        author,
        original: None,
    }
}

const fn translated(
    text: &'static str,
    author: &'static str,
    original_text: &'static str,
    original_author: &'static str,
) -> Entry {
    Entry {
        text,
        author,
        original: Some((original_text, original_author)),
    }
}

const JOBS: &str = "The only way to do great work is to love what you do.";
const EINSTEIN: &str = "In the middle of every difficulty lies opportunity.";
const CONFUCIUS: &str = "It does not matter how slowly you go as long as you do not stop.";
const ROOSEVELT: &str = "Believe you can and you're halfway there.";
const DALAI_LAMA: &str =
    "Happiness is not something ready made. It comes from your own actions.";

const ENGLISH: &[Entry] = &[
    native(JOBS, "Steve Jobs"),
    native(EINSTEIN, "Albert Einstein"),
    native(CONFUCIUS, "Confucius"),
    native(ROOSEVELT, "Theodore Roosevelt"),
    native(DALAI_LAMA, "Dalai Lama"),
    native(
        "What you do today can improve all your tomorrows.",
        "Ralph Marston",
    ),
    native(
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    native(
        "Act as if what you do makes a difference. It does.",
        "William James",
    ),
];

const FRENCH: &[Entry] = &[
    translated(
        "La seule façon de faire du bon travail est d'aimer ce que vous faites.",
        "Steve Jobs",
        JOBS,
        "Steve Jobs",
    ),
    translated(
        "Au milieu de chaque difficulté se trouve une opportunité.",
        "Albert Einstein",
        EINSTEIN,
        "Albert Einstein",
    ),
    translated(
        "Le bonheur n'est pas quelque chose de tout fait. Il vient de vos propres actions.",
        "Dalaï-Lama",
        DALAI_LAMA,
        "Dalai Lama",
    ),
    native(
        "On ne voit bien qu'avec le cœur. L'essentiel est invisible pour les yeux.",
        "Antoine de Saint-Exupéry",
    ),
    native(
        "Il faut toujours viser la lune, car même en cas d'échec, on atterrit dans les étoiles.",
        "Oscar Wilde",
    ),
];

const ITALIAN: &[Entry] = &[
    translated(
        "L'unico modo di fare un ottimo lavoro è amare quello che fai.",
        "Steve Jobs",
        JOBS,
        "Steve Jobs",
    ),
    translated(
        "Non importa quanto vai piano, l'importante è non fermarsi.",
        "Confucio",
        CONFUCIUS,
        "Confucius",
    ),
    native(
        "Fatti non foste a viver come bruti, ma per seguir virtute e canoscenza.",
        "Dante Alighieri",
    ),
    native("Chi non risica non rosica.", "Proverbio italiano"),
];

const SPANISH: &[Entry] = &[
    translated(
        "En medio de cada dificultad se encuentra la oportunidad.",
        "Albert Einstein",
        EINSTEIN,
        "Albert Einstein",
    ),
    translated(
        "Cree que puedes y ya estás a medio camino.",
        "Theodore Roosevelt",
        ROOSEVELT,
        "Theodore Roosevelt",
    ),
    native(
        "Caminante, no hay camino, se hace camino al andar.",
        "Antonio Machado",
    ),
    native(
        "El que lee mucho y anda mucho, ve mucho y sabe mucho.",
        "Miguel de Cervantes",
    ),
];

const ARABIC: &[Entry] = &[
    translated(
        "الطريقة الوحيدة للقيام بعمل عظيم هي أن تحب ما تفعله.",
        "ستيف جوبز",
        JOBS,
        "Steve Jobs",
    ),
    translated(
        "في وسط كل صعوبة تكمن الفرصة.",
        "ألبرت أينشتاين",
        EINSTEIN,
        "Albert Einstein",
    ),
    native("لا يأس مع الحياة، ولا حياة مع اليأس.", "مصطفى كامل"),
    native("من جد وجد، ومن زرع حصد.", "مثل عربي"),
];

/// Built-in entries for a language.
pub(super) fn entries(language: Language) -> &'static [Entry] {
    match language {
        Language::English => ENGLISH,
        Language::French => FRENCH,
        Language::Italian => ITALIAN,
        Language::Spanish => SPANISH,
        Language::Arabic => ARABIC,
    }
}
