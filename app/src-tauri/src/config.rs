//! FILENAME: app/src-tauri/src/config.rs
// PURPOSE: Runtime settings of the host, read from the environment (and .env).
// CONTEXT: Window and bundle configuration stays in tauri.conf.json.

use diagnostics::log_warn;
use picksheet::{FontSpec, JobSettings, DEFAULT_FONT_FAMILY};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ENV_FONT_DIR: &str = "PICKSHEET_FONT_DIR";
pub const ENV_FONT_FAMILY: &str = "PICKSHEET_FONT_FAMILY";
pub const ENV_OUTPUT_DIR: &str = "PICKSHEET_OUTPUT_DIR";
pub const ENV_IPC_ADDR: &str = "PICKSHEET_IPC_ADDR";
pub const ENV_LOG_PATH: &str = "PICKSHEET_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding `<family>-Regular.ttf` and friends
    pub font_dir: PathBuf,
    pub font_family: String,
    /// Where sheets are written; next to the input when unset
    pub output_dir: Option<PathBuf>,
    /// Loopback endpoint for out-of-process frontends; disabled when unset
    pub ipc_addr: Option<SocketAddr>,
    pub log_path: PathBuf,
}

/// Treat empty variables as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// The IPC endpoint carries no authentication, so it may only listen on loopback.
pub fn parse_ipc_addr(raw: &str) -> Result<SocketAddr, String> {
    let addr: SocketAddr = raw
        .trim()
        .parse()
        .map_err(|e| format!("Invalid IPC address '{}': {}", raw, e))?;
    if !addr.ip().is_loopback() {
        return Err(format!("IPC address {} is not a loopback address", addr));
    }
    Ok(addr)
}

/// Log file location; needed before the rest of the settings can be resolved.
pub fn log_path_from<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup(ENV_LOG_PATH))
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("picksheet").join("log.log"))
}

impl Settings {
    /// Resolve settings from an arbitrary key lookup.
    /// Fonts default to the app data directory, then `./fonts`.
    pub fn from_lookup<F>(lookup: F, app_data_dir: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let font_dir = non_empty(lookup(ENV_FONT_DIR))
            .map(PathBuf::from)
            .or(app_data_dir)
            .unwrap_or_else(|| PathBuf::from("fonts"));

        Settings {
            font_dir,
            font_family: non_empty(lookup(ENV_FONT_FAMILY))
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            output_dir: non_empty(lookup(ENV_OUTPUT_DIR)).map(PathBuf::from),
            ipc_addr: non_empty(lookup(ENV_IPC_ADDR)).and_then(|raw| {
                parse_ipc_addr(&raw)
                    .map_err(|e| log_warn!("CFG", "{}; IPC endpoint disabled", e))
                    .ok()
            }),
            log_path: log_path_from(&lookup),
        }
    }

    pub fn from_env(app_data_dir: Option<PathBuf>) -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), app_data_dir)
    }

    pub fn job_settings(&self) -> JobSettings {
        JobSettings {
            fonts: FontSpec::new(self.font_dir.clone(), self.font_family.clone()),
            output_dir: self.output_dir.clone(),
        }
    }
}
