//! Browser console logging.

/// Install the panic hook and console logger once at boot.
pub fn init(level: log::LevelFilter) {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if let Some(max) = level.to_level() {
            // Already initialized on a second call; keep the first logger.
            let _ = console_log::init_with_level(max);
        }
    }
    log::set_max_level(level);
}
