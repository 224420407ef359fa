use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// `default_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "glint_demo=debug,glint_engine=debug") and applies only when `RUST_LOG`
/// is unset. This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(default_filter: &str) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.parse_filters(default_filter);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
