//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `blinkhub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

use blinkhub_domain::asset::AssetName;
use blinkhub_domain::error::InvalidAssetName;
use blinkhub_domain::register::OutputId;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Asset storage settings.
    pub assets: AssetsConfig,
    /// LED output settings.
    pub led: LedConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Asset storage configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding the read-only assets.
    pub root: PathBuf,
    /// Asset rendered as the status page.
    pub index: String,
}

/// LED output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LedConfig {
    /// Output line driving the LED.
    pub output: u32,
    /// Level applied at startup.
    pub initial: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `blinkhub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("blinkhub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("BLINKHUB_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("BLINKHUB_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Ok(val) = std::env::var("BLINKHUB_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("BLINKHUB_ASSETS_ROOT") {
            self.assets.root = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("BLINKHUB_ASSETS_INDEX") {
            self.assets.index = val;
        }
        if let Ok(val) = std::env::var("BLINKHUB_LED_OUTPUT")
            && let Ok(output) = val.parse()
        {
            self.led.output = output;
        }
        if let Ok(val) = std::env::var("BLINKHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        self.index_asset()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the validated name of the status page asset.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAssetName`] if the configured name is not a valid
    /// asset name.
    pub fn index_asset(&self) -> Result<AssetName, InvalidAssetName> {
        AssetName::new(self.assets.index.as_str())
    }

    /// Return the LED output line.
    #[must_use]
    pub fn led_output(&self) -> OutputId {
        OutputId::new(self.led.output)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 80,
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./data"),
            index: "index.html".to_string(),
        }
    }
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            output: 2,
            initial: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "blinkhubd=info,blinkhub=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Invalid status page asset name.
    #[error("invalid index asset")]
    Index(#[from] InvalidAssetName),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
