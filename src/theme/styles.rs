//! Global CSS styles for MoodReads.
//!
//! Colors come from the `--color-*` custom properties the theme applier
//! writes on the root element; `--transition-duration` drops to `0ms` when
//! reduced motion is preferred.

pub const GLOBAL_STYLES: &str = r#"
/* === Defaults until a theme is applied === */
:root {
  --color-background: #f5f5f5;
  --color-primary: #6b7280;
  --color-secondary: #9ca3af;
  --color-text: #1f2937;
  --color-accent: #3b82f6;
  --color-card-bg: #ffffff;
  --color-border: #e5e7eb;
  --transition-duration: 400ms;

  --font-serif: 'Merriweather', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-3xl: 2.5rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  line-height: 1.6;
  min-height: 100vh;
}

/* === App Frame === */
.app {
  min-height: 100vh;
  padding: 2rem 1.5rem 4rem;
  background: var(--color-background);
  color: var(--color-text);
  transition:
    background-color var(--transition-duration) ease,
    color var(--transition-duration) ease;
}

.app-header {
  text-align: center;
  margin-bottom: 2rem;
}

.logo {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  color: var(--color-primary);
  user-select: none;
  transition: color var(--transition-duration) ease;
}

.logo.easter-egg-unlocked {
  animation: unlock-flash 1s ease-in-out;
}

@keyframes unlock-flash {
  0%, 100% { transform: scale(1); }
  25% { transform: scale(1.15) rotate(-4deg); }
  50% { transform: scale(1.1) rotate(4deg); }
  75% { transform: scale(1.05) rotate(-2deg); }
}

.tagline {
  font-size: var(--text-lg);
  color: var(--color-secondary);
}

/* === Mood Selector === */
.mood-selector {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
  margin-bottom: 2rem;
}

.mood-button {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1.25rem;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  color: var(--color-text);
  background: var(--color-card-bg);
  border: 2px solid var(--color-border);
  border-radius: 999px;
  cursor: pointer;
  transition:
    border-color var(--transition-duration) ease,
    background-color var(--transition-duration) ease,
    transform 150ms ease;
}

.mood-button:hover {
  border-color: var(--color-accent);
  transform: translateY(-2px);
}

.mood-button:focus-visible {
  outline: 3px solid var(--color-accent);
  outline-offset: 2px;
}

.mood-button--active {
  background: var(--color-primary);
  border-color: var(--color-primary);
  color: var(--color-card-bg);
}

.mood-button__icon {
  font-size: var(--text-xl);
}

/* === Message Panel === */
.message-panel {
  max-width: 40rem;
  margin: 0 auto 2rem;
  min-height: 3rem;
  text-align: center;
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-style: italic;
  color: var(--color-text);
  opacity: 0;
  transform: translateY(8px);
}

.message-panel--animate {
  animation: message-in var(--transition-duration) ease forwards;
}

@keyframes message-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Results Panel === */
.results-panel {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
  gap: 1.25rem;
  max-width: 64rem;
  margin: 0 auto;
}

.book-card {
  padding: 1.25rem;
  background: var(--color-card-bg);
  border: 1px solid var(--color-border);
  border-radius: 0.75rem;
  opacity: 0;
  transform: translateY(12px);
  transition:
    opacity 500ms ease,
    transform 500ms ease,
    background-color var(--transition-duration) ease,
    border-color var(--transition-duration) ease;
}

.book-card--animate {
  opacity: 1;
  transform: translateY(0);
}

.book-card:focus-visible {
  outline: 3px solid var(--color-accent);
  outline-offset: 2px;
}

.book-card__title {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  color: var(--color-primary);
  margin-bottom: 0.25rem;
}

.book-card__author {
  font-size: var(--text-sm);
  color: var(--color-secondary);
  margin-bottom: 0.75rem;
}

.book-card__description {
  font-size: var(--text-base);
  color: var(--color-text);
}

.results-panel__empty {
  grid-column: 1 / -1;
  padding: 2rem;
  text-align: center;
  color: var(--color-secondary);
  border: 1px dashed var(--color-border);
  border-radius: 0.75rem;
}

/* === Startup Failure === */
.mount-error {
  max-width: 40rem;
  margin: 4rem auto;
  padding: 1.5rem;
  color: #991b1b;
  background: #fef2f2;
  border: 1px solid #fecaca;
  border-radius: 0.75rem;
}

/* === Reduced Motion === */
@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0ms !important;
    transition-duration: 0ms !important;
  }
}
"#;
