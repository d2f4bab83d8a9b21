//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use audio_socket_broadcaster::{ServerConfig, DEFAULT_PORT};

use crate::adapter::AdapterFilter;

/// HTTP ingestion bridge configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BridgeConfig {
    /// Run the HTTP bridge alongside the broadcaster
    pub enabled: bool,

    /// Interface for the HTTP listener. Browser userscripts post from
    /// the same machine, so loopback by default.
    pub host: IpAddr,

    /// HTTP port userscripts POST sound events to
    pub port: u16,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5151,
        }
    }
}

/// Daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DaemonConfig {
    /// Path to configuration file
    #[serde(skip)]
    pub config_path: PathBuf,

    /// TCP port to listen on for sound event connections
    pub port: u16,

    /// Stream standard sound effect events
    pub include_sound_effects: bool,

    /// Stream area sound effect events
    pub include_area_sounds: bool,

    /// Interface the broadcaster binds to
    pub bind_host: IpAddr,

    /// Per-client write bound in milliseconds
    pub write_timeout_ms: u64,

    /// Enable TCP_NODELAY on client sockets
    pub tcp_nodelay: bool,

    /// HTTP bridge settings
    pub bridge: BridgeConfig,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            config_path: Self::default_config_path(),
            port: DEFAULT_PORT,
            include_sound_effects: true,
            include_area_sounds: true,
            bind_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            write_timeout_ms: 2000,
            tcp_nodelay: true,
            bridge: BridgeConfig::default(),
        }
    }
}

impl DaemonConfig {
    /// Load configuration from the default location, or create it
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_config_path())
    }

    /// Load configuration from `path`, writing defaults there if it is missing
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config_path = path.as_ref().to_path_buf();

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;

            let mut config: DaemonConfig =
                toml::from_str(&contents).context("Failed to parse config file")?;

            config.config_path = config_path;
            Ok(config)
        } else {
            let config = Self {
                config_path,
                ..Self::default()
            };
            config.save().context("Failed to save default config")?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&self.config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Broadcaster settings derived from this config
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::with_host(self.bind_host)
            .write_timeout(Duration::from_millis(self.write_timeout_ms))
            .tcp_nodelay(self.tcp_nodelay)
    }

    /// Category toggles for the event adapter
    pub fn filter(&self) -> AdapterFilter {
        AdapterFilter {
            include_sound_effects: self.include_sound_effects,
            include_area_sounds: self.include_area_sounds,
        }
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("audio-socket")
            .join("config.toml")
    }
}
