//! FILENAME: app/src-tauri/src/commands.rs
// PURPOSE: Tauri commands invoked by the webview.

use crate::config::Settings;
use crate::host;
use bridge::StartPdfArgs;
use picksheet::JobReport;
use std::sync::Arc;
use tauri::ipc::{InvokeBody, Request};
use tauri::{AppHandle, State};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

/// Title and body of the message box shown after a run.
pub fn result_dialog_text(success: bool) -> (&'static str, &'static str) {
    if success {
        ("Erfolgreich erstellt", "Die PDF wurde erfolgreich erstellt")
    } else {
        (
            "Fehler bei der Erstellung",
            "Die PDF konnte leider nicht erstellt werden",
        )
    }
}

fn show_result_dialog(app: &AppHandle, success: bool) {
    let (title, message) = result_dialog_text(success);
    let kind = if success {
        MessageDialogKind::Info
    } else {
        MessageDialogKind::Error
    };
    app.dialog()
        .message(message)
        .title(title)
        .kind(kind)
        .buttons(MessageDialogButtons::Ok)
        .show(|_| {});
}

/// Validate the raw invoke payload; extra keys are refused, not dropped.
pub fn start_pdf_args_from_body(body: &InvokeBody) -> Result<StartPdfArgs, String> {
    match body {
        InvokeBody::Json(value) => StartPdfArgs::from_value(value.clone()).map_err(|e| e.to_string()),
        InvokeBody::Raw(_) => Err("startPdf expects a JSON payload".to_string()),
    }
}

/// Build the pickup and pick sheet for a label PDF (or a folder of them).
/// The command name is part of the frontend contract, hence the casing.
#[allow(non_snake_case)]
#[tauri::command]
pub async fn startPdf(
    app: AppHandle,
    settings: State<'_, Arc<Settings>>,
    request: Request<'_>,
) -> Result<JobReport, String> {
    let args = start_pdf_args_from_body(request.body())?;
    let result = host::start_pdf(settings.inner().clone(), args).await;
    show_result_dialog(&app, result.is_ok());
    result
}
