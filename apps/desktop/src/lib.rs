//! # Pharmacy Desktop Library
//!
//! Core library for the pharmacy stock manager.
//! This is the main entry point that configures and runs the terminal app.
//!
//! ## Module Organization
//! ```text
//! pharmacy_desktop_lib/
//! ├── lib.rs           ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs       ◄─── State type exports
//! │   ├── db.rs        ◄─── Database state wrapper
//! │   ├── config.rs    ◄─── Configuration state
//! │   └── view.rs      ◄─── Inventory screen state + command dispatch
//! ├── commands/
//! │   ├── mod.rs       ◄─── Command exports
//! │   ├── medicine.rs  ◄─── Add, search, edit, delete, total value
//! │   └── export.rs    ◄─── CSV export
//! ├── ui/
//! │   ├── app.rs       ◄─── Terminal setup and run loop
//! │   ├── events.rs    ◄─── Key handling
//! │   └── render.rs    ◄─── Drawing
//! └── error.rs         ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod ui;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pharmacy_db::{Database, DbConfig};
use state::{ConfigState, DbState};

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • PHARMACY_* environment variables over defaults                    │
/// │                                                                         │
/// │  2. Determine Database Path ──────────────────────────────────────────► │
/// │     • PHARMACY_DB_PATH, or the platform data directory                  │
/// │     • Linux: ~/.local/share/pharmacy/pharmacy.db                        │
/// │                                                                         │
/// │  3. Initialize Logging ───────────────────────────────────────────────► │
/// │     • pharmacy.log next to the database (the terminal belongs to UI)    │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  4. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Creates the medicines table on first run                          │
/// │                                                                         │
/// │  5. Run the Terminal UI until the user quits ─────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<()> {
    let config = ConfigState::from_env();
    let db_path = get_database_path()?;

    let log_dir = db_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    init_tracing(&log_dir.join("pharmacy.log"))?;

    info!(?db_path, store = %config.store_name, "Starting pharmacy stock manager");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Could not start async runtime")?;

    runtime.block_on(async {
        let db = Database::new(DbConfig::new(&db_path))
            .await
            .with_context(|| format!("Could not open database {}", db_path.display()))?;
        info!("Database connected and migrations applied");

        let result = ui::run(DbState::new(db.clone()), config).await;

        db.close().await;
        result
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pharmacy=trace` - Show trace for pharmacy crates only
/// - Default: INFO level
fn init_tracing(log_path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Could not open log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pharmacy=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Could not initialize logging: {}", e))
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.pharmacy.pharmacy/pharmacy.db`
/// - **Windows**: `%APPDATA%\pharmacy\pharmacy\data\pharmacy.db`
/// - **Linux**: `~/.local/share/pharmacy/pharmacy.db`
///
/// ## Development Override
/// Set `PHARMACY_DB_PATH` environment variable to use a custom path.
fn get_database_path() -> anyhow::Result<PathBuf> {
    if let Ok(path) = std::env::var("PHARMACY_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = project_dirs().context("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();

    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Could not create {}", data_dir.display()))?;

    Ok(data_dir.join("pharmacy.db"))
}

/// Platform directories for the application ("pharmacy" on Linux).
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "pharmacy", "pharmacy")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    #[test]
    fn test_data_dir_is_named_pharmacy() {
        // No home directory in some sandboxes
        if let Some(dirs) = project_dirs() {
            assert_eq!(
                dirs.data_dir().file_name().and_then(|n| n.to_str()),
                Some("pharmacy")
            );
        }
    }
}
