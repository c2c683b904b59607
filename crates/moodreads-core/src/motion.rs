//! Reduced-motion preference shared between components.
//!
//! The shell owns a [`MotionPreference`] and forwards platform change
//! notifications into it. Components keep a [`MotionWatch`] and read the
//! latest value each time they animate, so changes apply without restart.

use tokio::sync::watch;

/// Writer side of the preference.
#[derive(Debug)]
pub struct MotionPreference {
    tx: watch::Sender<bool>,
}

impl MotionPreference {
    pub fn new(reduced: bool) -> Self {
        let (tx, _rx) = watch::channel(reduced);
        Self { tx }
    }

    /// Update the preference; subscribers observe it on their next read.
    pub fn set_reduced(&self, reduced: bool) {
        self.tx.send_if_modified(|current| {
            let changed = *current != reduced;
            *current = reduced;
            changed
        });
    }

    pub fn reduced(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> MotionWatch {
        MotionWatch {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for MotionPreference {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Reader side held by each animating component.
#[derive(Debug, Clone)]
pub struct MotionWatch {
    rx: watch::Receiver<bool>,
}

impl MotionWatch {
    /// Current preference. Stays at the last value if the sender is gone.
    pub fn reduced(&self) -> bool {
        *self.rx.borrow()
    }

    /// A watch pinned to a fixed value, for components built in isolation.
    pub fn fixed(reduced: bool) -> Self {
        let (_tx, rx) = watch::channel(reduced);
        Self { rx }
    }
}
