//! FILENAME: core/bridge/src/invoke.rs
// PURPOSE: The invoke-by-name capability and the in-process host that implements it.

use crate::{BridgeError, CommandRequest};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

/// Ask the host to run `request.cmd`. The returned future is the pending result.
#[async_trait]
pub trait HostBridge: Send + Sync {
    async fn invoke(&self, request: CommandRequest) -> Result<Value, BridgeError>;
}

/// Host-side implementation of one named command.
/// Errors are plain strings, as with desktop shell commands.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn call(&self, args: Value) -> Result<Value, String>;
}

#[async_trait]
impl<F, Fut> CommandHandler for F
where
    F: Fn(Value) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, String>> + Send + 'static,
{
    async fn call(&self, args: Value) -> Result<Value, String> {
        (self)(args).await
    }
}

/// Name-keyed table of command handlers.
#[derive(Default, Clone)]
pub struct CommandRouter {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
}

impl CommandRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, replacing any previous one.
    pub fn register(mut self, name: impl Into<String>, handler: impl CommandHandler + 'static) -> Self {
        self.handlers.insert(name.into(), Arc::new(handler));
        self
    }

    pub fn commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub async fn dispatch(&self, request: CommandRequest) -> Result<Value, BridgeError> {
        let handler = self
            .handlers
            .get(&request.cmd)
            .cloned()
            .ok_or_else(|| BridgeError::UnknownCommand(request.cmd.clone()))?;

        log::debug!(target: "BRIDGE", "dispatch {}", request.cmd);
        handler.call(request.args).await.map_err(BridgeError::Rejected)
    }
}

#[async_trait]
impl HostBridge for CommandRouter {
    async fn invoke(&self, request: CommandRequest) -> Result<Value, BridgeError> {
        self.dispatch(request).await
    }
}
