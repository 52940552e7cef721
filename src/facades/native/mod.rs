/// Native Rust facade: logging setup and an environment-configured portal.
use crate::config::PortalConfig;
use crate::errors::PortalError;
use crate::portal::Portal;
use env_logger::Env;

/// Installs `env_logger` as the `log` backend. `RUST_LOG` overrides the
/// default `info` filter. Calling it twice is harmless.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();
}

/// Builds a portal from `APP_*` variables (and `.env`).
pub fn connect_from_env() -> Result<Portal, PortalError> {
    let config = PortalConfig::from_env()?;
    log::info!("Connecting to {}", config.request_url);
    Portal::new(config)
}
