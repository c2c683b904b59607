//! Static lookup tables keyed by mood id.
//!
//! Every catalog is immutable and compiled in. Lookups never fail: a miss
//! resolves to the documented fallback (`None`, the neutral theme, an empty
//! message or an empty book list).

pub mod books;
pub mod messages;
pub mod moods;
pub mod themes;

pub use books::{BookSource, StaticBooks};
pub use moods::{all_moods, easter_egg_mood, mood_by_id, standard_moods};
pub use themes::{ApplyResult, ThemeConfig, ThemePalette, NEUTRAL_THEME};
