mod analysis;
mod commands;
mod models;
mod uploader;
pub mod utils;

use commands::*;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Load .env file - try multiple locations
    // During `tauri dev`, CWD is project root; check current dir first
    if dotenvy::dotenv().is_err() {
        let _ = dotenvy::from_path("../.env");
    }

    // Initialize tracing with RUST_LOG env filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,resume_analyzer_lib=info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .manage(ShellState::default())
        .invoke_handler(tauri::generate_handler![
            // Uploader commands
            select_resume,
            clear_selection,
            get_selection,
            get_resume_preview,
            // Analysis commands
            analyze_resume,
            get_request_state,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
