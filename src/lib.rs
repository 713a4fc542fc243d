//! Todoview
//!
//! Shows a fixed web page in a webview window and, on startup, fetches one
//! todo record over HTTPS, surfacing its title as a native message.
//!
//! Layered architecture:
//! - domain: The fetched record and the fetch outcome
//! - transport: The single GET against the fixed endpoint
//! - repository: Error boundary turning transport failures into outcomes
//! - viewmodel: Loading/Success/Error state machine for the screen
//! - notify: Platform notifier (dialog on desktop, toast on mobile)

use std::sync::{Arc, Mutex};

use tauri::{Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder, WindowEvent};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod domain;
mod notify;
mod repository;
mod transport;
mod viewmodel;

use notify::{Notify, PlatformNotifier};
use repository::RemoteTodoRepository;
use transport::HttpTodoTransport;
use viewmodel::TodoViewModel;

/// Application state held for the app's lifetime.
///
/// The surface `Arc` is the only strong reference to the notifier's target
/// window; it is cleared on teardown so late notifications become no-ops.
pub struct AppState {
    pub view_model: TodoViewModel,
    surface: Mutex<Option<Arc<WebviewWindow>>>,
}

/// The page shown in the webview window, loaded once at startup.
pub const PAGE_URL: &str = "https://www.wikipedia.org/";

/// Env var that overrides the default log filter.
const LOG_ENV: &str = "TODOVIEW_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    // try_init: the subscriber may already be installed when run() is
    // re-entered in the same process
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_tracing();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_notification::init())
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                if let Some(state) = window.app_handle().try_state::<AppState>() {
                    if let Ok(mut surface) = state.surface.lock() {
                        surface.take();
                    }
                }
            }
        })
        .setup(|app| {
            #[cfg(desktop)]
            app.handle()
                .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                    // Focus the existing window when a second instance starts
                    if let Some(window) = app.get_webview_window("main") {
                        let _ = window.set_focus();
                    }
                }))?;

            // The embedded browser surface: fixed URL, loaded once, never
            // reloaded by this flow. Script execution is on by default for
            // tauri webviews; non-incognito keeps local storage persistent.
            let window =
                WebviewWindowBuilder::new(app, "main", WebviewUrl::External(PAGE_URL.parse()?))
                    .title("Todoview")
                    .incognito(false)
                    .build()?;
            let surface = Arc::new(window);

            let notifier = Arc::new(PlatformNotifier::new());
            notifier.attach(&surface);

            let transport = Arc::new(HttpTodoTransport::new());
            let repository = Arc::new(RemoteTodoRepository::new(transport));
            let view_model = TodoViewModel::new(repository);

            let mut states = view_model.subscribe();
            let observer: Arc<dyn Notify> = notifier;
            tauri::async_runtime::spawn(async move {
                while states.changed().await.is_ok() {
                    let state = states.borrow_and_update().clone();
                    if let Some(message) = notify::message_for(&state) {
                        observer.notify(&message);
                    }
                }
            });

            info!(endpoint = transport::TODO_ENDPOINT, "starting initial fetch");
            view_model.load();

            // The view model lives as long as the app; the screen here is
            // the app's only window.
            app.manage(AppState {
                view_model,
                surface: Mutex::new(Some(surface)),
            });

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
