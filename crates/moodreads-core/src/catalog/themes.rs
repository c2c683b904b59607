//! Theme catalog: color palette and transition timing per mood.
//!
//! Themes are pushed to the rendering surface as CSS custom properties on
//! the page root, so stylesheet rules only ever reference `var(--color-*)`.

use std::time::Duration;

use serde::Serialize;

/// The seven color roles of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    pub background: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub card_bg: &'static str,
    pub border: &'static str,
}

/// Colors plus transition timing for one mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    pub mood_id: &'static str,
    pub colors: ThemePalette,
    pub transition_ms: u64,
}

/// Fallback theme for unknown ids and the initial page state.
pub const NEUTRAL_THEME: ThemeConfig = ThemeConfig {
    mood_id: "neutral",
    colors: ThemePalette {
        background: "#f5f5f5",
        primary: "#333333",
        secondary: "#666666",
        text: "#222222",
        accent: "#8b7fb8",
        card_bg: "rgba(255, 255, 255, 0.9)",
        border: "rgba(0, 0, 0, 0.1)",
    },
    transition_ms: 400,
};

const THEMES: [ThemeConfig; 5] = [
    ThemeConfig {
        mood_id: "dark",
        colors: ThemePalette {
            background: "#0a1128",
            primary: "#1e3a5f",
            secondary: "#2e5090",
            text: "#e0e7ff",
            accent: "#00d9ff",
            card_bg: "rgba(30, 58, 95, 0.6)",
            border: "rgba(0, 217, 255, 0.3)",
        },
        transition_ms: 500,
    },
    ThemeConfig {
        mood_id: "cozy",
        colors: ThemePalette {
            background: "#faf8f3",
            primary: "#8b7355",
            secondary: "#a0826d",
            text: "#3e2723",
            accent: "#d4a574",
            card_bg: "rgba(244, 236, 224, 0.9)",
            border: "rgba(139, 115, 85, 0.2)",
        },
        transition_ms: 400,
    },
    ThemeConfig {
        mood_id: "heartbreaking",
        colors: ThemePalette {
            background: "#e8eaf6",
            primary: "#5c6bc0",
            secondary: "#7986cb",
            text: "#37474f",
            accent: "#9fa8da",
            card_bg: "rgba(197, 202, 233, 0.7)",
            border: "rgba(92, 107, 192, 0.2)",
        },
        transition_ms: 450,
    },
    ThemeConfig {
        mood_id: "motivational",
        colors: ThemePalette {
            background: "#fffde7",
            primary: "#f57f17",
            secondary: "#fbc02d",
            text: "#33691e",
            accent: "#ffeb3b",
            card_bg: "rgba(255, 249, 196, 0.9)",
            border: "rgba(245, 127, 23, 0.2)",
        },
        transition_ms: 400,
    },
    ThemeConfig {
        mood_id: "chaotic",
        colors: ThemePalette {
            background: "#1a0033",
            primary: "#ff00ff",
            secondary: "#00ff00",
            text: "#ffff00",
            accent: "#00ffff",
            card_bg: "rgba(255, 0, 255, 0.2)",
            border: "rgba(0, 255, 255, 0.5)",
        },
        transition_ms: 300,
    },
];

/// Resolve a mood id to its theme, falling back to [`NEUTRAL_THEME`].
pub fn resolve(mood_id: &str) -> &'static ThemeConfig {
    THEMES
        .iter()
        .find(|theme| theme.mood_id == mood_id)
        .unwrap_or(&NEUTRAL_THEME)
}

/// The values to push onto the rendering surface for one theme change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyResult {
    pub mood_id: &'static str,
    /// Zero when reduced motion is preferred
    pub transition: Duration,
    pub colors: ThemePalette,
}

impl ApplyResult {
    /// Named style variables in the order they are written: transition first.
    pub fn style_vars(&self) -> [(&'static str, String); 8] {
        let c = &self.colors;
        [
            ("--transition-duration", format!("{}ms", self.transition.as_millis())),
            ("--color-background", c.background.to_string()),
            ("--color-primary", c.primary.to_string()),
            ("--color-secondary", c.secondary.to_string()),
            ("--color-text", c.text.to_string()),
            ("--color-accent", c.accent.to_string()),
            ("--color-card-bg", c.card_bg.to_string()),
            ("--color-border", c.border.to_string()),
        ]
    }
}

/// Compute the theme application for a mood. Pure.
pub fn plan(mood_id: &str, reduced_motion: bool) -> ApplyResult {
    let theme = resolve(mood_id);
    let transition = if reduced_motion {
        Duration::ZERO
    } else {
        Duration::from_millis(theme.transition_ms)
    };
    ApplyResult {
        mood_id: theme.mood_id,
        transition,
        colors: theme.colors,
    }
}
