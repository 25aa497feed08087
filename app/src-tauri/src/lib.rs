//! FILENAME: app/src-tauri/src/lib.rs
// PURPOSE: Main library entry point (Tauri host).
// CONTEXT: The webview calls `startPdf`; the same operation is optionally served over loopback IPC.

use diagnostics::log_info;
use std::sync::Arc;
use tauri::Manager;

pub mod commands;
pub mod config;
pub mod host;
pub mod logging;

pub use config::Settings;
pub use host::{build_router, start_pdf, start_pdf_blocking};

// ============================================================================
// TAURI APP ENTRY
// ============================================================================

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let _ = dotenvy::dotenv();

    let log_path = config::log_path_from(|key| std::env::var(key).ok());
    match diagnostics::init_log_file(&log_path) {
        Ok(path) => {
            eprintln!("[LOG_INIT] SUCCESS - Log file: {:?}", path);
            log_info!("SYS", "Tauri backend starting, log={}", path.display());
        }
        Err(e) => {
            eprintln!("[LOG_INIT] FAILED: {}", e);
            eprintln!("[LOG_INIT] Continuing with console-only logging");
        }
    }
    if let Err(e) = diagnostics::install_logger(log::LevelFilter::Debug) {
        eprintln!("[LOG_INIT] {}", e);
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let settings = Arc::new(Settings::from_env(app.path().app_data_dir().ok()));
            log_info!(
                "SYS",
                "Fonts '{}' from {}",
                settings.font_family,
                settings.font_dir.display()
            );
            if let Some(addr) = settings.ipc_addr {
                host::spawn_ipc(addr, Arc::clone(&settings));
            }
            app.manage(settings);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Sheet generation
            commands::startPdf,
            // Logging commands
            logging::log_frontend,
            logging::log_frontend_atomic,
            logging::get_next_seq,
            logging::sort_log_file,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
