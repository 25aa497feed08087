//! FILENAME: app/src-tauri/src/host.rs
// PURPOSE: Host side of startPdf, shared by the Tauri command and the IPC endpoint.

use crate::config::Settings;
use bridge::{serve, CommandRouter, StartPdfArgs, START_PDF};
use diagnostics::{log_enter_info, log_error, log_exit_info, log_info, log_warn};
use picksheet::{JobReport, JobRequest};
use serde_json::Value;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Run the job on the calling thread.
pub fn start_pdf_blocking(settings: &Settings, args: &StartPdfArgs) -> Result<JobReport, String> {
    log_enter_info!("CMD", "startPdf", "path={} folder={}", args.path, args.folder);

    let request = JobRequest {
        input: PathBuf::from(&args.path),
        folder: args.folder,
    };

    match picksheet::run(&request, &settings.job_settings()) {
        Ok(report) => {
            log_exit_info!(
                "CMD",
                "startPdf",
                "{} orders from {} file(s) -> {}",
                report.orders,
                report.files,
                report.output.display()
            );
            Ok(report)
        }
        Err(e) => {
            log_warn!("CMD", "startPdf failed: {}", e);
            Err(e.to_string())
        }
    }
}

/// Run the job on the blocking pool; extraction and rendering are CPU and disk bound.
pub async fn start_pdf(settings: Arc<Settings>, args: StartPdfArgs) -> Result<JobReport, String> {
    tokio::task::spawn_blocking(move || start_pdf_blocking(&settings, &args))
        .await
        .map_err(|e| format!("startPdf worker failed: {}", e))?
}

/// Commands reachable over the bridge.
pub fn build_router(settings: Arc<Settings>) -> CommandRouter {
    CommandRouter::new().register(START_PDF, move |args: Value| {
        let settings = Arc::clone(&settings);
        async move {
            let args = StartPdfArgs::from_value(args).map_err(|e| e.to_string())?;
            let report = start_pdf(settings, args).await?;
            serde_json::to_value(report).map_err(|e| e.to_string())
        }
    })
}

/// Serve the router on `addr` in the background for the lifetime of the app.
pub fn spawn_ipc(addr: SocketAddr, settings: Arc<Settings>) {
    tauri::async_runtime::spawn(async move {
        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                log_error!("IPC", "Could not bind {}: {}", addr, e);
                return;
            }
        };
        log_info!("IPC", "Listening on {}", addr);
        if let Err(e) = serve(listener, Arc::new(build_router(settings))).await {
            log_error!("IPC", "Endpoint stopped: {}", e);
        }
    });
}
