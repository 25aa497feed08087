//! FILENAME: core/bridge/src/ipc.rs
// PURPOSE: Loopback transport for the bridge: newline-delimited JSON over TCP.
// FORMAT: request  {"id":1,"cmd":"startPdf","args":{...}}
//         reply    {"id":1,"status":"ok","value":...} | {"id":1,"status":"err","error":"..."}

use crate::{BridgeError, CommandRequest, CommandRouter, HostBridge};
use async_trait::async_trait;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::tcp::OwnedReadHalf;
use tokio::net::{TcpListener, TcpStream};
use tokio_util::codec::{FramedRead, LinesCodec, LinesCodecError};

pub const DEFAULT_IPC_ADDR: &str = "127.0.0.1:47615";

/// Longest request or reply line accepted, newline excluded.
pub const MAX_LINE_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireRequest {
    pub id: u64,
    pub cmd: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WireReply {
    Ok { id: u64, value: Value },
    Err { id: u64, error: String },
}

impl WireReply {
    pub fn id(&self) -> u64 {
        match self {
            WireReply::Ok { id, .. } | WireReply::Err { id, .. } => *id,
        }
    }
}

fn line_reader(read: OwnedReadHalf) -> FramedRead<OwnedReadHalf, LinesCodec> {
    FramedRead::new(read, LinesCodec::new_with_max_length(MAX_LINE_BYTES))
}

/// Next complete line, `None` at end of stream.
async fn next_line(
    lines: &mut FramedRead<OwnedReadHalf, LinesCodec>,
) -> Result<Option<String>, BridgeError> {
    match lines.next().await {
        None => Ok(None),
        Some(Ok(line)) => Ok(Some(line)),
        Some(Err(LinesCodecError::MaxLineLengthExceeded)) => {
            Err(BridgeError::LineTooLong(MAX_LINE_BYTES))
        }
        Some(Err(LinesCodecError::Io(e))) => Err(BridgeError::Io(e)),
    }
}

fn encode_line<T: Serialize>(message: &T) -> Result<Vec<u8>, BridgeError> {
    let mut line = serde_json::to_vec(message)?;
    line.push(b'\n');
    Ok(line)
}

// ============================================================================
// HOST SIDE
// ============================================================================

/// Accept connections forever, one task per connection. Requests on a single
/// connection are answered in order. A line over `MAX_LINE_BYTES` gets an error
/// reply and the connection is closed.
pub async fn serve(listener: TcpListener, router: Arc<CommandRouter>) -> Result<(), BridgeError> {
    if let Ok(addr) = listener.local_addr() {
        log::info!(target: "IPC", "Serving {} commands on {}", router.commands().len(), addr);
    }

    loop {
        let (stream, peer) = listener.accept().await?;
        let router = Arc::clone(&router);
        tokio::spawn(async move {
            log::debug!(target: "IPC", "Connection from {}", peer);
            if let Err(e) = handle_connection(stream, &router).await {
                log::warn!(target: "IPC", "Connection {} ended with error: {}", peer, e);
            }
        });
    }
}

async fn handle_connection(stream: TcpStream, router: &CommandRouter) -> Result<(), BridgeError> {
    let (read, mut write) = stream.into_split();
    let mut lines = line_reader(read);

    loop {
        let line = match next_line(&mut lines).await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(BridgeError::LineTooLong(limit)) => {
                let reply = WireReply::Err {
                    id: 0,
                    error: format!("Request exceeds {} bytes", limit),
                };
                write.write_all(&encode_line(&reply)?).await?;
                write.flush().await?;
                return Err(BridgeError::LineTooLong(limit));
            }
            Err(e) => return Err(e),
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<WireRequest>(&line) {
            Ok(request) => {
                let id = request.id;
                match router
                    .dispatch(CommandRequest::new(request.cmd, request.args))
                    .await
                {
                    Ok(value) => WireReply::Ok { id, value },
                    Err(e) => WireReply::Err {
                        id,
                        error: e.reply_message(),
                    },
                }
            }
            Err(e) => WireReply::Err {
                id: 0,
                error: format!("Malformed request: {}", e),
            },
        };

        write.write_all(&encode_line(&reply)?).await?;
        write.flush().await?;
    }

    Ok(())
}

// ============================================================================
// FRONTEND SIDE
// ============================================================================

/// Bridge to a host listening on a loopback address. One connection per call.
pub struct IpcClient {
    addr: String,
    next_id: AtomicU64,
}

impl IpcClient {
    pub fn new(addr: impl Into<String>) -> Self {
        IpcClient {
            addr: addr.into(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }
}

#[async_trait]
impl HostBridge for IpcClient {
    async fn invoke(&self, request: CommandRequest) -> Result<Value, BridgeError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let wire = WireRequest {
            id,
            cmd: request.cmd,
            args: request.args,
        };

        let stream = TcpStream::connect(&self.addr).await?;
        let (read, mut write) = stream.into_split();
        write.write_all(&encode_line(&wire)?).await?;
        write.flush().await?;

        let mut lines = line_reader(read);
        let line = next_line(&mut lines)
            .await?
            .ok_or(BridgeError::ConnectionClosed)?;

        let reply: WireReply = serde_json::from_str(&line)?;
        if reply.id() != id {
            return Err(BridgeError::ReplyMismatch {
                expected: id,
                got: reply.id(),
            });
        }

        match reply {
            WireReply::Ok { value, .. } => Ok(value),
            WireReply::Err { error, .. } => Err(BridgeError::Rejected(error)),
        }
    }
}
