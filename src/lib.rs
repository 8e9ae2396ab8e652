pub mod commands;
pub mod config;
pub mod core_state;
pub mod db;
pub mod models;
pub mod notifications; // Notification center: list, filter, read state
pub mod shell; // Header bell and badge
pub mod storage; // Local key-value storage

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Honors `RUST_LOG`, falling back to [`config::default_log_filter`].
/// Calling it again after a subscriber is set is a no-op.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
}

/// Start-up sequence: logging, then the shared state.
pub fn init(
    store_config: config::StoreConfig,
) -> Result<core_state::CoreState, core_state::CoreError> {
    init_tracing();
    core_state::CoreState::init(store_config)
}
