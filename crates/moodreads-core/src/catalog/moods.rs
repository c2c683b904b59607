//! Mood catalog.

use crate::types::Mood;

const MOODS: [Mood; 5] = [
    Mood {
        id: "dark",
        label: "Dark",
        icon: "🌙",
        is_easter_egg: false,
    },
    Mood {
        id: "cozy",
        label: "Cozy",
        icon: "☕",
        is_easter_egg: false,
    },
    Mood {
        id: "heartbreaking",
        label: "Heartbreaking",
        icon: "💔",
        is_easter_egg: false,
    },
    Mood {
        id: "motivational",
        label: "Motivational",
        icon: "⚡",
        is_easter_egg: false,
    },
    Mood {
        id: "chaotic",
        label: "Chaotic Gremlin Mode",
        icon: "🤪",
        is_easter_egg: true,
    },
];

/// All moods in declaration order, easter egg included.
pub fn all_moods() -> &'static [Mood] {
    &MOODS
}

/// Moods visible before the unlock gesture, in declaration order.
pub fn standard_moods() -> impl Iterator<Item = &'static Mood> {
    MOODS.iter().filter(|mood| !mood.is_easter_egg)
}

pub fn mood_by_id(id: &str) -> Option<&'static Mood> {
    MOODS.iter().find(|mood| mood.id == id)
}

pub fn easter_egg_mood() -> Option<&'static Mood> {
    MOODS.iter().find(|mood| mood.is_easter_egg)
}
