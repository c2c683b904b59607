use std::time::Duration;

use dioxus::prelude::*;
use moodreads_core::{build_shell, DomTree, MoodReads, MoodResult, MotionPreference};
use moodreads_ui::TreeView;
use tokio::time::{Instant, MissedTickBehavior};

use crate::context::{forced_reduced_motion, get_config, open_session_store, use_moodreads, AppHandle};
use crate::theme::GLOBAL_STYLES;

/// Clock resolution for staggered reveals and gesture windows
const TICK: Duration = Duration::from_millis(16);

/// Reports the platform reduced-motion preference now and on every change.
const MOTION_QUERY_JS: &str = r#"
const query = window.matchMedia('(prefers-reduced-motion: reduce)');
dioxus.send(query.matches);
query.addEventListener('change', (event) => dioxus.send(event.matches));
"#;

fn mount_app() -> MoodResult<MoodReads<DomTree>> {
    let mut tree = DomTree::new();
    build_shell(&mut tree)?;
    MoodReads::mount(
        tree,
        open_session_store(),
        MotionPreference::new(forced_reduced_motion()),
        get_config(),
    )
}

/// Root application component.
///
/// Mounts the coordinator once, then hands it to the page.
#[component]
pub fn App() -> Element {
    let mounted = use_hook(|| {
        mount_app().map(Signal::new).map_err(|e| {
            tracing::error!(error = %e, "Failed to mount MoodReads");
            e.to_string()
        })
    });

    match mounted {
        Ok(app) => rsx! {
            style { {GLOBAL_STYLES} }
            Page { app }
        },
        Err(message) => rsx! {
            style { {GLOBAL_STYLES} }
            div { class: "mount-error", role: "alert", "MoodReads could not start: {message}" }
        },
    }
}

/// The mounted page: clock, motion preference and the painted tree.
#[component]
fn Page(app: AppHandle) -> Element {
    use_context_provider(|| app);

    rsx! {
        Clock {}
        MotionSync {}
        TreeView { app }
    }
}

/// Advances the coordinator's timers in real time.
#[component]
fn Clock() -> Element {
    let mut app = use_moodreads();

    use_future(move || async move {
        let mut interval = tokio::time::interval(TICK);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last = Instant::now();
        loop {
            interval.tick().await;
            let now = Instant::now();
            let elapsed = now - last;
            last = now;
            // Only touch the signal when something is scheduled.
            if app.peek().timers().pending() == 0 {
                continue;
            }
            let ran = app.write().advance(elapsed);
            if ran > 0 {
                tracing::trace!(ran, "Timers dispatched");
            }
        }
    });

    rsx! {}
}

/// Follows the platform reduced-motion preference unless forced on.
#[component]
fn MotionSync() -> Element {
    let app = use_moodreads();

    use_future(move || async move {
        if forced_reduced_motion() {
            tracing::info!("Reduced motion forced on from the command line");
            return;
        }
        let mut eval = document::eval(MOTION_QUERY_JS);
        loop {
            match eval.recv::<bool>().await {
                Ok(reduced) => app.peek().set_reduced_motion(reduced),
                Err(e) => {
                    tracing::warn!(error = %e, "Motion preference listener stopped");
                    break;
                }
            }
        }
    });

    rsx! {}
}
