//! FILENAME: core/bridge/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    /// The host ran the operation and it failed
    #[error("host call failed: {0}")]
    Rejected(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid arguments for {cmd}: {message}")]
    InvalidArgs { cmd: String, message: String },

    #[error("Mount failed at {anchor}: {message}")]
    Mount { anchor: String, message: String },

    #[error("IPC error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("Line exceeds {0} bytes")]
    LineTooLong(usize),

    #[error("Host closed the connection before replying")]
    ConnectionClosed,

    #[error("Reply id {got} does not match request id {expected}")]
    ReplyMismatch { expected: u64, got: u64 },
}

impl BridgeError {
    /// Message to send back over the wire. Rejections carry only the host's own text
    /// so the client does not wrap it twice.
    pub fn reply_message(&self) -> String {
        match self {
            BridgeError::Rejected(message) => message.clone(),
            other => other.to_string(),
        }
    }
}
