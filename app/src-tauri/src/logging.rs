//! FILENAME: app/src-tauri/src/logging.rs
// PURPOSE: Lets the webview write into the unified log.
// FORMAT: seq|level|category|message

use diagnostics::{log_enter_info, log_exit_info, next_seq, write_log, write_log_raw};

/// Get next sequence number for frontend logging
#[tauri::command]
pub fn get_next_seq() -> u64 {
    next_seq()
}

/// Write a frontend log message (already formatted with seq)
#[tauri::command]
pub fn log_frontend(message: String) -> Result<(), String> {
    write_log_raw(&message);
    Ok(())
}

/// Write a frontend log message atomically (seq assigned and written together)
#[tauri::command]
pub fn log_frontend_atomic(level: String, category: String, message: String) -> Result<(), String> {
    write_log(&level, &category, &message);
    Ok(())
}

/// Sort the log file by sequence number
#[tauri::command]
pub fn sort_log_file() -> Result<String, String> {
    log_enter_info!("CMD", "sort_log_file");
    let line_count = diagnostics::sort_log_file().map_err(|e| e.to_string())?;
    log_exit_info!("CMD", "sort_log_file", "sorted {} lines", line_count);
    Ok(format!("Sorted {} lines", line_count))
}
