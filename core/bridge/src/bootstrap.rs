//! FILENAME: core/bridge/src/bootstrap.rs
// PURPOSE: Frontend startup: mount the view, then request startPdf once and report the outcome.

use crate::{BridgeError, CommandRequest, HostBridge, Outcome, StartPdfArgs};

/// Anchor the view tree is attached to.
pub const MOUNT_ANCHOR: &str = "#app";

/// Attaches the view tree to an anchor.
pub trait Mount {
    fn mount(&mut self, anchor: &str) -> Result<(), BridgeError>;
}

/// Receives exactly one outcome per host call.
pub trait Observer {
    fn observe(&self, outcome: &Outcome);
}

/// Console stand-in for a view tree, used when no webview is present.
#[derive(Debug, Default)]
pub struct HeadlessMount {
    anchor: Option<String>,
}

impl HeadlessMount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }
}

impl Mount for HeadlessMount {
    fn mount(&mut self, anchor: &str) -> Result<(), BridgeError> {
        if let Some(existing) = &self.anchor {
            return Err(BridgeError::Mount {
                anchor: anchor.to_string(),
                message: format!("already mounted at {}", existing),
            });
        }
        log::info!(target: "UI", "Mounted console view at {}", anchor);
        self.anchor = Some(anchor.to_string());
        Ok(())
    }
}

/// Writes outcomes to the unified log, tagged by kind.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn observe(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Success(value) => {
                log::info!(target: "BRIDGE", "[{}] {}", outcome.kind(), value)
            }
            Outcome::Failure(error) => {
                log::error!(target: "BRIDGE", "[{}] {}", outcome.kind(), error)
            }
        }
    }
}

/// Mount, then send one `startPdf` request and hand its outcome to `observer`.
///
/// A failing host call is not an error of this function: it is observed as
/// `Outcome::Failure` and returned. Only a failed mount is returned as `Err`,
/// and in that case nothing is sent.
pub async fn bootstrap<M, B, O>(
    mount: &mut M,
    bridge: &B,
    observer: &O,
) -> Result<Outcome, BridgeError>
where
    M: Mount + ?Sized,
    B: HostBridge + ?Sized,
    O: Observer + ?Sized,
{
    mount.mount(MOUNT_ANCHOR)?;

    let request = CommandRequest::start_pdf(&StartPdfArgs::startup());
    let outcome = match bridge.invoke(request).await {
        Ok(value) => Outcome::Success(value),
        Err(e) => Outcome::Failure(e.to_string()),
    };

    observer.observe(&outcome);
    Ok(outcome)
}
