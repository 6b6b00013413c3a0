use shared_types::{AppConfig, BookingConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<BookingConfig> = OnceLock::new();

/// `config.toml` from the workspace root, baked in at compile time so the
/// web build needs no filesystem access.
const CONFIG_SOURCE: &str = include_str!("../../../config.toml");

/// Parse booking settings, falling back to defaults on malformed input.
pub fn parse_booking_config(source: &str) -> BookingConfig {
    match toml::from_str::<AppConfig>(source) {
        Ok(config) => config.booking,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse config.toml, using default booking settings");
            BookingConfig::default()
        }
    }
}

/// Parse the embedded config once and store it. Later calls are no-ops.
pub fn load_booking_config() {
    CONFIG.get_or_init(|| {
        let config = parse_booking_config(CONFIG_SOURCE);
        tracing::info!(
            title = %config.title,
            reject_submissions = config.reject_submissions,
            "booking config loaded"
        );
        config
    });
}

/// The loaded config, or defaults if `load_booking_config()` has not run.
pub fn booking_config() -> BookingConfig {
    CONFIG.get().cloned().unwrap_or_default()
}
