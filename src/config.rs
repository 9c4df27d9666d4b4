//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Every variable is optional; the defaults run the service on port 8080 with
//! the landing page read from `index.html` in the working directory.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `INDEX_PATH` - Landing page file (default: `index.html`)
//! - `SWEEP_INTERVAL_SECONDS` - Delay between expiry sweeps (default: 3600)
//!
//! The link lifetime itself is fixed at 24 hours and is not configurable.

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::expiry_sweeper::DEFAULT_SWEEP_INTERVAL;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Landing page served on `GET /`. Read on every request, so a missing
    /// file only surfaces as a 500 on that route.
    pub index_path: PathBuf,
    /// Seconds between two background expiry sweeps.
    pub sweep_interval_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            index_path: PathBuf::from("index.html"),
            sweep_interval_seconds: DEFAULT_SWEEP_INTERVAL.as_secs(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SWEEP_INTERVAL_SECONDS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let index_path = env::var("INDEX_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.index_path);

        let sweep_interval_seconds = match env::var("SWEEP_INTERVAL_SECONDS") {
            Ok(v) => v.parse().map_err(|_| {
                anyhow::anyhow!("SWEEP_INTERVAL_SECONDS must be a whole number, got '{}'", v)
            })?,
            Err(_) => defaults.sweep_interval_seconds,
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            index_path,
            sweep_interval_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `sweep_interval_seconds` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.sweep_interval_seconds == 0 {
            anyhow::bail!("SWEEP_INTERVAL_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Delay between two background sweeps.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Landing page: {}", self.index_path.display());
        tracing::info!("  Sweep interval: {}s", self.sweep_interval_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "LISTEN",
        "RUST_LOG",
        "LOG_FORMAT",
        "INDEX_PATH",
        "SWEEP_INTERVAL_SECONDS",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment run serially due to #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        config.sweep_interval_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.index_path, PathBuf::from("index.html"));
        assert_eq!(config.sweep_interval(), Duration::from_secs(3600));
    }

    #[test]
    #[serial]
    fn test_overrides_from_env() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("LOG_FORMAT", "json");
            env::set_var("INDEX_PATH", "/srv/www/index.html");
            env::set_var("SWEEP_INTERVAL_SECONDS", "60");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.index_path, PathBuf::from("/srv/www/index.html"));
        assert_eq!(config.sweep_interval(), Duration::from_secs(60));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_malformed_sweep_interval() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("SWEEP_INTERVAL_SECONDS", "hourly");
        }

        assert!(Config::from_env().is_err());

        unsafe {
            env::set_var("SWEEP_INTERVAL_SECONDS", "0");
        }
        assert!(load_from_env().is_err());

        clear_env();
    }
}
