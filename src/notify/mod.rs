//! User Notification
//!
//! One transient message per completed fetch; the platform decides the
//! surface. Exactly one concrete notifier is compiled per target.

use std::sync::{Arc, Mutex, Weak};

use tauri::WebviewWindow;

use crate::viewmodel::UiState;

#[cfg(desktop)]
mod alert;
#[cfg(mobile)]
mod toast;

#[cfg(desktop)]
pub use alert::AlertNotifier;
#[cfg(mobile)]
pub use toast::ToastNotifier;

/// The notifier compiled for the current target.
#[cfg(desktop)]
pub type PlatformNotifier = AlertNotifier;
/// The notifier compiled for the current target.
#[cfg(mobile)]
pub type PlatformNotifier = ToastNotifier;

/// Fire-and-forget user notification.
pub trait Notify: Send + Sync {
    /// Show `message` once. Never fails; without a live surface the call
    /// is a silent no-op.
    fn notify(&self, message: &str);
}

/// Message shown for a state change, if any.
///
/// `Loading` produces nothing; a success shows the bare title; a failure
/// shows the message behind an `Error: ` prefix.
pub fn message_for(state: &UiState) -> Option<String> {
    match state {
        UiState::Loading => None,
        UiState::Success(todo) => Some(todo.title.clone()),
        UiState::Error(message) => Some(format!("Error: {message}")),
    }
}

/// Weak handle to the window that notifications attach to.
///
/// The reference is non-owning so a torn-down window is never kept alive.
/// The mutex only guards the swap; both sides touch it briefly.
pub(crate) struct SurfaceSlot {
    window: Mutex<Weak<WebviewWindow>>,
}

impl SurfaceSlot {
    pub(crate) fn new() -> Self {
        Self {
            window: Mutex::new(Weak::new()),
        }
    }

    pub(crate) fn set(&self, window: &Arc<WebviewWindow>) {
        if let Ok(mut slot) = self.window.lock() {
            *slot = Arc::downgrade(window);
        }
    }

    pub(crate) fn get(&self) -> Option<Arc<WebviewWindow>> {
        self.window.lock().ok().and_then(|slot| slot.upgrade())
    }
}
