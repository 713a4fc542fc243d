//! Modal alert notifier for desktop targets.

use std::sync::Arc;

use tauri::WebviewWindow;
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};
use tracing::debug;

use super::{Notify, SurfaceSlot};

/// Shows each message as a native, user-dismissed message dialog.
pub struct AlertNotifier {
    surface: SurfaceSlot,
}

impl AlertNotifier {
    pub fn new() -> Self {
        Self {
            surface: SurfaceSlot::new(),
        }
    }

    /// Register the window dialogs attach to. Held weakly.
    pub fn attach(&self, window: &Arc<WebviewWindow>) {
        self.surface.set(window);
    }
}

impl Default for AlertNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notify for AlertNotifier {
    fn notify(&self, message: &str) {
        let Some(window) = self.surface.get() else {
            debug!("no active surface, dropping notification");
            return;
        };
        window
            .dialog()
            .message(message)
            .kind(MessageDialogKind::Info)
            .title("Todoview")
            .show(|_| {});
    }
}
