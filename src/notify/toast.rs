//! Toast notifier for mobile targets.

use std::sync::Arc;

use tauri::WebviewWindow;
use tauri_plugin_notification::NotificationExt;
use tracing::debug;

use super::{Notify, SurfaceSlot};

/// Shows each message as a transient, auto-dismissing system notification.
pub struct ToastNotifier {
    surface: SurfaceSlot,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            surface: SurfaceSlot::new(),
        }
    }

    /// Register the window whose app the toasts are raised through. Held
    /// weakly.
    pub fn attach(&self, window: &Arc<WebviewWindow>) {
        self.surface.set(window);
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notify for ToastNotifier {
    fn notify(&self, message: &str) {
        let Some(window) = self.surface.get() else {
            debug!("no active surface, dropping notification");
            return;
        };
        if let Err(err) = window
            .notification()
            .builder()
            .title("Todoview")
            .body(message)
            .show()
        {
            debug!(%err, "notification dropped");
        }
    }
}
