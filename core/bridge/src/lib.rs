//! FILENAME: core/bridge/src/lib.rs
//! PURPOSE: Frontend side of the host command bridge.
//!
//! The frontend asks the host to run an operation by name with a JSON argument
//! object and gets back a pending result that resolves to a JSON value or a
//! failure. `HostBridge` is that capability; `CommandRouter` implements it
//! in-process and `IpcClient` implements it over a loopback socket served by
//! `ipc::serve`.

pub mod bootstrap;
pub mod command;
mod error;
pub mod invoke;
pub mod ipc;

#[cfg(test)]
mod tests;

pub use bootstrap::{bootstrap, HeadlessMount, LogObserver, Mount, Observer, MOUNT_ANCHOR};
pub use command::{CommandRequest, Outcome, StartPdfArgs, START_PDF};
pub use error::BridgeError;
pub use invoke::{CommandHandler, CommandRouter, HostBridge};
pub use ipc::{serve, IpcClient, DEFAULT_IPC_ADDR, MAX_LINE_BYTES};
