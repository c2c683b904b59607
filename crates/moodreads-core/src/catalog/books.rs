//! Book database, grouped by mood in display order.

use crate::error::MoodResult;
use crate::types::BookRecommendation;

struct BookEntry {
    mood: &'static str,
    title: &'static str,
    author: &'static str,
    description: &'static str,
}

const BOOKS: &[BookEntry] = &[
    // === DARK ===
    BookEntry {
        mood: "dark",
        title: "The Secret History",
        author: "Donna Tartt",
        description: "A circle of classics students at an elite college slides from obsession into murder.",
    },
    BookEntry {
        mood: "dark",
        title: "Rebecca",
        author: "Daphne du Maurier",
        description: "A new bride at Manderley lives in the shadow of her husband's first wife.",
    },
    BookEntry {
        mood: "dark",
        title: "Mexican Gothic",
        author: "Silvia Moreno-Garcia",
        description: "A socialite answers a frantic letter and finds a decaying mansion full of secrets.",
    },
    BookEntry {
        mood: "dark",
        title: "The Haunting of Hill House",
        author: "Shirley Jackson",
        description: "Four seekers spend a summer in a house that seems to want one of them to stay.",
    },
    // === COZY ===
    BookEntry {
        mood: "cozy",
        title: "The House in the Cerulean Sea",
        author: "TJ Klune",
        description: "A by-the-book caseworker is sent to an island orphanage of magical children.",
    },
    BookEntry {
        mood: "cozy",
        title: "Legends & Lattes",
        author: "Travis Baldree",
        description: "A retired orc mercenary trades her sword for an espresso machine.",
    },
    BookEntry {
        mood: "cozy",
        title: "A Psalm for the Wild-Built",
        author: "Becky Chambers",
        description: "A tea monk and a curious robot wander the wilds asking what people need.",
    },
    BookEntry {
        mood: "cozy",
        title: "The Guernsey Literary and Potato Peel Pie Society",
        author: "Mary Ann Shaffer and Annie Barrows",
        description: "Letters between a writer and islanders who found solace in a book club.",
    },
    // === HEARTBREAKING ===
    BookEntry {
        mood: "heartbreaking",
        title: "The Book Thief",
        author: "Markus Zusak",
        description: "Death narrates the story of a girl who steals books in Nazi Germany.",
    },
    BookEntry {
        mood: "heartbreaking",
        title: "Never Let Me Go",
        author: "Kazuo Ishiguro",
        description: "Three friends from an English boarding school slowly learn what they were made for.",
    },
    BookEntry {
        mood: "heartbreaking",
        title: "A Monster Calls",
        author: "Patrick Ness",
        description: "A boy facing his mother's illness is visited by a monster who wants the truth.",
    },
    BookEntry {
        mood: "heartbreaking",
        title: "A Little Life",
        author: "Hanya Yanagihara",
        description: "Four college friends in New York, and the long shadow of one man's past.",
    },
    // === MOTIVATIONAL ===
    BookEntry {
        mood: "motivational",
        title: "Atomic Habits",
        author: "James Clear",
        description: "Small changes, compounded daily, into remarkable results.",
    },
    BookEntry {
        mood: "motivational",
        title: "Man's Search for Meaning",
        author: "Viktor E. Frankl",
        description: "A psychiatrist's account of finding purpose in the worst of circumstances.",
    },
    BookEntry {
        mood: "motivational",
        title: "The Alchemist",
        author: "Paulo Coelho",
        description: "A shepherd boy follows a recurring dream across the desert toward his treasure.",
    },
    BookEntry {
        mood: "motivational",
        title: "Born a Crime",
        author: "Trevor Noah",
        description: "Growing up mixed-race under apartheid, told with humor and grit.",
    },
    // === CHAOTIC ===
    BookEntry {
        mood: "chaotic",
        title: "The Hitchhiker's Guide to the Galaxy",
        author: "Douglas Adams",
        description: "Earth is demolished for a bypass, and that is only the beginning.",
    },
    BookEntry {
        mood: "chaotic",
        title: "Good Omens",
        author: "Terry Pratchett and Neil Gaiman",
        description: "An angel and a demon team up to misplace the Antichrist.",
    },
    BookEntry {
        mood: "chaotic",
        title: "John Dies at the End",
        author: "David Wong",
        description: "A street drug called soy sauce opens doors that should stay shut.",
    },
];

/// Anything that can list the books for a mood.
///
/// Lookups may fail; the recommendation engine converts every failure into
/// an empty result.
pub trait BookSource {
    fn books_for(&self, mood_id: &str) -> MoodResult<Vec<BookRecommendation>>;
}

/// The compiled-in book database.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticBooks;

impl BookSource for StaticBooks {
    fn books_for(&self, mood_id: &str) -> MoodResult<Vec<BookRecommendation>> {
        Ok(BOOKS
            .iter()
            .filter(|entry| entry.mood == mood_id)
            .map(|entry| BookRecommendation::new(entry.title, entry.author, entry.description))
            .collect())
    }
}
