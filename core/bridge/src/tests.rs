//! FILENAME: core/bridge/src/tests.rs

use super::*;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Shared event trail so tests can check the order of mount and invoke.
type Trail = Arc<Mutex<Vec<String>>>;

struct ScriptedBridge {
    trail: Trail,
    requests: Mutex<Vec<CommandRequest>>,
    reply: Result<Value, String>,
}

impl ScriptedBridge {
    fn new(trail: Trail, reply: Result<Value, String>) -> Self {
        ScriptedBridge {
            trail,
            requests: Mutex::new(Vec::new()),
            reply,
        }
    }
}

#[async_trait]
impl HostBridge for ScriptedBridge {
    async fn invoke(&self, request: CommandRequest) -> Result<Value, BridgeError> {
        self.trail.lock().unwrap().push(format!("invoke {}", request.cmd));
        self.requests.lock().unwrap().push(request);
        self.reply.clone().map_err(BridgeError::Rejected)
    }
}

struct TrailMount {
    trail: Trail,
    fail: bool,
}

impl Mount for TrailMount {
    fn mount(&mut self, anchor: &str) -> Result<(), BridgeError> {
        self.trail.lock().unwrap().push(format!("mount {}", anchor));
        if self.fail {
            return Err(BridgeError::Mount {
                anchor: anchor.to_string(),
                message: "anchor missing".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
struct RecordingObserver {
    seen: Mutex<Vec<Outcome>>,
}

impl Observer for RecordingObserver {
    fn observe(&self, outcome: &Outcome) {
        self.seen.lock().unwrap().push(outcome.clone());
    }
}

fn new_trail() -> Trail {
    Arc::new(Mutex::new(Vec::new()))
}

// ============================================================================
// BOOTSTRAP
// ============================================================================

#[tokio::test]
async fn test_bootstrap_sends_one_start_pdf_request() {
    let trail = new_trail();
    let bridge = ScriptedBridge::new(trail.clone(), Ok(json!("Hello, World!")));
    let mut mount = TrailMount { trail: trail.clone(), fail: false };
    let observer = RecordingObserver::default();

    bootstrap(&mut mount, &bridge, &observer).await.unwrap();

    let requests = bridge.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].cmd, "startPdf");
    assert_eq!(requests[0].args, json!({ "path": "World", "folder": false }));
}

#[tokio::test]
async fn test_bootstrap_mounts_before_invoking() {
    let trail = new_trail();
    let bridge = ScriptedBridge::new(trail.clone(), Ok(Value::Null));
    let mut mount = TrailMount { trail: trail.clone(), fail: false };

    bootstrap(&mut mount, &bridge, &LogObserver).await.unwrap();

    assert_eq!(
        *trail.lock().unwrap(),
        vec!["mount #app".to_string(), "invoke startPdf".to_string()]
    );
}

#[tokio::test]
async fn test_bootstrap_observes_success_value_once() {
    let trail = new_trail();
    let value = json!({ "output": "/tmp/picksheet.pdf", "orders": 4 });
    let bridge = ScriptedBridge::new(trail.clone(), Ok(value.clone()));
    let mut mount = TrailMount { trail, fail: false };
    let observer = RecordingObserver::default();

    let outcome = bootstrap(&mut mount, &bridge, &observer).await.unwrap();

    assert_eq!(outcome, Outcome::Success(value.clone()));
    assert_eq!(*observer.seen.lock().unwrap(), vec![Outcome::Success(value)]);
}

#[tokio::test]
async fn test_bootstrap_observes_rejection_without_failing() {
    let trail = new_trail();
    let bridge = ScriptedBridge::new(trail.clone(), Err("Input not found: \"World\"".to_string()));
    let mut mount = TrailMount { trail, fail: false };
    let observer = RecordingObserver::default();

    let outcome = bootstrap(&mut mount, &bridge, &observer).await.unwrap();

    assert_eq!(outcome.kind(), "failure");
    let seen = observer.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    match &seen[0] {
        Outcome::Failure(message) => {
            assert!(message.starts_with("host call failed"));
            assert!(message.contains("Input not found"));
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_bootstrap_failed_mount_sends_nothing() {
    let trail = new_trail();
    let bridge = ScriptedBridge::new(trail.clone(), Ok(Value::Null));
    let mut mount = TrailMount { trail, fail: true };
    let observer = RecordingObserver::default();

    let err = bootstrap(&mut mount, &bridge, &observer).await.unwrap_err();

    assert!(matches!(err, BridgeError::Mount { .. }));
    assert!(bridge.requests.lock().unwrap().is_empty());
    assert!(observer.seen.lock().unwrap().is_empty());
}

#[test]
fn test_headless_mount_only_once() {
    let mut mount = HeadlessMount::new();
    mount.mount(MOUNT_ANCHOR).unwrap();
    assert_eq!(mount.anchor(), Some("#app"));
    assert!(mount.mount(MOUNT_ANCHOR).is_err());
}

// ============================================================================
// COMMANDS
// ============================================================================

#[test]
fn test_start_pdf_args_reject_unknown_fields() {
    let err = StartPdfArgs::from_value(json!({ "path": "a.pdf", "folder": true, "out_dir": "/x" }))
        .unwrap_err();
    assert!(matches!(err, BridgeError::InvalidArgs { .. }));
}

#[test]
fn test_start_pdf_args_require_both_fields() {
    assert!(StartPdfArgs::from_value(json!({ "path": "a.pdf" })).is_err());
    assert!(StartPdfArgs::from_value(json!({ "path": "a.pdf", "folder": "no" })).is_err());
    assert_eq!(
        StartPdfArgs::from_value(json!({ "path": "a.pdf", "folder": true })).unwrap(),
        StartPdfArgs { path: "a.pdf".to_string(), folder: true }
    );
}

// ============================================================================
// ROUTER
// ============================================================================

fn echo_router() -> CommandRouter {
    CommandRouter::new()
        .register("echo", |args: Value| async move { Ok::<Value, String>(args) })
        .register("fail", |_args: Value| async move { Err::<Value, String>("boom".to_string()) })
}

#[tokio::test]
async fn test_router_dispatch() {
    let router = echo_router();
    let value = router
        .invoke(CommandRequest::new("echo", json!({ "a": 1 })))
        .await
        .unwrap();
    assert_eq!(value, json!({ "a": 1 }));
    assert_eq!(router.commands(), vec!["echo", "fail"]);
}

#[tokio::test]
async fn test_router_unknown_command() {
    let err = echo_router()
        .invoke(CommandRequest::new("startPdf", Value::Null))
        .await
        .unwrap_err();
    assert!(matches!(err, BridgeError::UnknownCommand(name) if name == "startPdf"));
}

#[tokio::test]
async fn test_router_handler_failure_is_rejection() {
    let err = echo_router()
        .invoke(CommandRequest::new("fail", Value::Null))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "host call failed: boom");
}

// ============================================================================
// IPC
// ============================================================================

async fn spawn_host(router: CommandRouter) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    tokio::spawn(serve(listener, Arc::new(router)));
    addr
}

#[tokio::test]
async fn test_ipc_round_trip() {
    let addr = spawn_host(echo_router()).await;
    let client = IpcClient::new(addr);

    let value = client
        .invoke(CommandRequest::new("echo", json!([1, 2, 3])))
        .await
        .unwrap();
    assert_eq!(value, json!([1, 2, 3]));
}

#[tokio::test]
async fn test_ipc_rejection_not_wrapped_twice() {
    let addr = spawn_host(echo_router()).await;
    let client = IpcClient::new(addr);

    let err = client
        .invoke(CommandRequest::new("fail", Value::Null))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "host call failed: boom");
}

#[tokio::test]
async fn test_ipc_unknown_command() {
    let addr = spawn_host(echo_router()).await;
    let client = IpcClient::new(addr);

    let err = client
        .invoke(CommandRequest::new("nope", Value::Null))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "host call failed: Unknown command: nope");
}

#[tokio::test]
async fn test_ipc_bootstrap_end_to_end() {
    let router = CommandRouter::new().register(START_PDF, |args: Value| async move {
        let args = StartPdfArgs::from_value(args).map_err(|e| e.to_string())?;
        Ok::<Value, String>(json!({ "path": args.path, "folder": args.folder }))
    });
    let addr = spawn_host(router).await;
    let client = IpcClient::new(addr);
    let mut mount = HeadlessMount::new();
    let observer = RecordingObserver::default();

    let outcome = bootstrap(&mut mount, &client, &observer).await.unwrap();
    assert_eq!(
        outcome,
        Outcome::Success(json!({ "path": "World", "folder": false }))
    );
}

#[tokio::test]
async fn test_ipc_host_unreachable_is_observed() {
    // Bind and drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    drop(listener);

    let client = IpcClient::new(addr);
    let mut mount = HeadlessMount::new();
    let observer = RecordingObserver::default();

    let outcome = bootstrap(&mut mount, &client, &observer).await.unwrap();
    assert!(!outcome.is_success());
    assert_eq!(observer.seen.lock().unwrap().len(), 1);
}

#[test]
fn test_wire_reply_format() {
    let ok = serde_json::to_value(ipc::WireReply::Ok { id: 3, value: json!(true) }).unwrap();
    assert_eq!(ok, json!({ "status": "ok", "id": 3, "value": true }));

    let err = serde_json::to_value(ipc::WireReply::Err { id: 4, error: "x".to_string() }).unwrap();
    assert_eq!(err, json!({ "status": "err", "id": 4, "error": "x" }));
}

#[tokio::test]
async fn test_ipc_oversized_line_gets_error_and_close() {
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

    let addr = spawn_host(echo_router()).await;
    let stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    let (read, mut write) = stream.into_split();

    // One byte over the limit, never terminated
    write
        .write_all(&vec![b'a'; ipc::MAX_LINE_BYTES + 1])
        .await
        .unwrap();
    write.flush().await.unwrap();

    let mut lines = BufReader::new(read).lines();
    let reply = lines.next_line().await.unwrap().expect("error reply");
    let reply: ipc::WireReply = serde_json::from_str(&reply).unwrap();
    match reply {
        ipc::WireReply::Err { id, error } => {
            assert_eq!(id, 0);
            assert!(error.contains("exceeds"), "unexpected error: {}", error);
        }
        other => panic!("expected error reply, got {:?}", other),
    }

    // Host hangs up after the error
    assert_eq!(lines.next_line().await.unwrap(), None);
}

// ============================================================================
// OBSERVATION CHANNEL
// ============================================================================

#[test]
fn test_log_observer_tags_outcomes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bridge.log");
    diagnostics::init_log_file(&path).unwrap();
    // Another test in this binary may have installed it already
    let _ = diagnostics::install_logger(log::LevelFilter::Info);

    LogObserver.observe(&Outcome::Success(json!({ "orders": 2 })));
    LogObserver.observe(&Outcome::Failure("host call failed: boom".to_string()));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(
        content.contains("|I|BRIDGE|[success] {\"orders\":2}"),
        "log was: {}",
        content
    );
    assert!(
        content.contains("|E|BRIDGE|[failure] host call failed: boom"),
        "log was: {}",
        content
    );
}
