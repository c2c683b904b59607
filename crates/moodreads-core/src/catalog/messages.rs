//! Message catalog: one fixed line of encouragement per mood.

/// Message for a mood, or an empty string when the id is unknown.
pub fn message_for(mood_id: &str) -> &'static str {
    match mood_id {
        "dark" => "Sometimes we need to embrace the shadows. Here are some books that understand the beauty in darkness.",
        "cozy" => "Time to curl up with something warm and comforting. These books are like a hug for your soul.",
        "heartbreaking" => "It's okay to feel deeply. These stories honor your emotions and offer paths toward healing.",
        "motivational" => "You're ready to conquer the world! These books will fuel your fire and inspire your journey.",
        "chaotic" => "EMBRACE THE CHAOS! Reality is overrated anyway. These books are delightfully unhinged. 🤪",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::moods::all_moods;

    #[test]
    fn every_mood_has_a_message() {
        for mood in all_moods() {
            assert!(!message_for(mood.id).is_empty(), "{} has no message", mood.id);
        }
    }

    #[test]
    fn unknown_mood_yields_empty_message() {
        assert_eq!(message_for("neutral"), "");
        assert_eq!(message_for(""), "");
        assert_eq!(message_for("DARK"), "");
    }

    #[test]
    fn messages_match_their_mood() {
        let contains_any = |id: &str, words: &[&str]| {
            let text = message_for(id).to_lowercase();
            words.iter().any(|w| text.contains(w))
        };
        assert!(contains_any("heartbreaking", &["heal", "emotion", "feel", "deeply"]));
        assert!(contains_any("motivational", &["inspire", "conquer", "fire", "journey", "ready"]));
        assert!(contains_any("dark", &["dark", "shadow", "beauty", "embrace"]));
        assert!(contains_any("cozy", &["warm", "comfort", "cozy", "hug", "curl"]));
    }
}
