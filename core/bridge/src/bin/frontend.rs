//! FILENAME: core/bridge/src/bin/frontend.rs
// PURPOSE: Headless frontend: mounts a console view and asks the running host for startPdf once.
// CONFIG: PICKSHEET_IPC_ADDR (host endpoint), PICKSHEET_LOG_PATH (log file), read from env or .env

use bridge::{bootstrap, HeadlessMount, IpcClient, LogObserver, DEFAULT_IPC_ADDR};
use diagnostics::{log_error, log_info};
use std::path::PathBuf;
use std::process::ExitCode;

fn log_path() -> PathBuf {
    std::env::var_os("PICKSHEET_LOG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("picksheet").join("frontend.log"))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    match diagnostics::init_log_file(&log_path()) {
        Ok(path) => log_info!("SYS", "Frontend starting, log={}", path.display()),
        Err(e) => eprintln!("[LOG_INIT] FAILED: {} (console only)", e),
    }
    if let Err(e) = diagnostics::install_logger(log::LevelFilter::Info) {
        eprintln!("[LOG_INIT] {}", e);
    }

    let addr = std::env::var("PICKSHEET_IPC_ADDR").unwrap_or_else(|_| DEFAULT_IPC_ADDR.to_string());
    let client = IpcClient::new(addr);
    let mut mount = HeadlessMount::new();

    match bootstrap(&mut mount, &client, &LogObserver).await {
        Ok(outcome) if outcome.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            log_error!("SYS", "Startup failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
