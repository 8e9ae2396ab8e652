use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Clinify";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Storage slot holding the serialized notification list.
pub const NOTIFICATIONS_STORAGE_KEY: &str = "clinify_notifications_v1";

/// Prompt shown by the confirmation gate before clearing all notifications.
pub const CLEAR_ALL_PROMPT: &str = "Clear all notifications? (Demo: this only clears local data)";

/// Local storage database file name (inside the data directory).
pub const STORAGE_FILE_NAME: &str = "local_storage.db";

/// Default `EnvFilter` directive when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "clinify_lib=info,warn"
}

/// Get the application data directory
/// ~/Clinify/ on all platforms. Falls back to the working directory
/// when no home directory can be resolved.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Get the local storage database path
pub fn storage_path() -> PathBuf {
    app_data_dir().join(STORAGE_FILE_NAME)
}

/// Where the notification store keeps its persisted representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
}

impl StoreConfig {
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE_NAME)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: app_data_dir(),
            storage_key: NOTIFICATIONS_STORAGE_KEY.to_string(),
        }
    }
}
