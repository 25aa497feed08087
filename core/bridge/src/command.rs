//! FILENAME: core/bridge/src/command.rs
// PURPOSE: Messages that cross the bridge.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Name of the host operation that builds the pickup sheet.
pub const START_PDF: &str = "startPdf";

/// A named operation with its JSON argument object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub cmd: String,
    pub args: Value,
}

impl CommandRequest {
    pub fn new(cmd: impl Into<String>, args: Value) -> Self {
        CommandRequest {
            cmd: cmd.into(),
            args,
        }
    }

    pub fn start_pdf(args: &StartPdfArgs) -> Self {
        Self::new(
            START_PDF,
            json!({ "path": args.path, "folder": args.folder }),
        )
    }
}

/// Arguments of `startPdf`. Exactly these two fields; anything else is refused by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StartPdfArgs {
    pub path: String,
    pub folder: bool,
}

impl StartPdfArgs {
    /// The request the frontend issues once at startup.
    pub fn startup() -> Self {
        StartPdfArgs {
            path: "World".to_string(),
            folder: false,
        }
    }

    pub fn from_value(args: Value) -> Result<Self, crate::BridgeError> {
        serde_json::from_value(args).map_err(|e| crate::BridgeError::InvalidArgs {
            cmd: START_PDF.to_string(),
            message: e.to_string(),
        })
    }
}

/// What the observation channel receives for one host call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Value),
    Failure(String),
}

impl Outcome {
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::Failure(_) => "failure",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}
