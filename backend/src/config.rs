//! Server configuration.
//!
//! Settings come from an optional TOML file (path in `SDR_WEBAPI_CONFIG`)
//! and are then overridden by the `HOST`, `PORT` and `SDR_WEBAPI_BODY_LIMIT`
//! environment variables.
//!
//! ```toml
//! host = "127.0.0.1"
//! port = 8091
//! body_limit = 1048576
//!
//! [preset_channels]
//! "sdrangel.channel.bfm" = "BFMDemodSettings"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "SDR_WEBAPI_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value '{value}' for {name}")]
    InvalidEnv { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
    /// Preset channel URI to channel settings key.
    #[serde(default = "default_preset_channels")]
    pub preset_channels: BTreeMap<String, String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8091
}

fn default_body_limit() -> usize {
    1024 * 1024
}

/// Built-in preset channel URI table.
pub fn default_preset_channels() -> BTreeMap<String, String> {
    [
        ("sdrangel.channel.amdemod", "AMDemodSettings"),
        ("sdrangel.channeltx.modam", "AMModSettings"),
        ("sdrangel.channeltx.modatv", "ATVModSettings"),
        ("sdrangel.channel.bfm", "BFMDemodSettings"),
        ("sdrangel.channel.dsddemod", "DSDDemodSettings"),
        ("sdrangel.channel.freedvdemod", "FreeDVDemodSettings"),
        ("sdrangel.channeltx.freedvmod", "FreeDVModSettings"),
        ("sdrangel.channel.freqtracker", "FreqTrackerSettings"),
        ("de.maintech.sdrangelove.channel.nfm", "NFMDemodSettings"),
        ("sdrangel.channeltx.modnfm", "NFMModSettings"),
        ("sdrangel.channel.localsink", "LocalSinkSettings"),
        ("sdrangel.channeltx.localsource", "LocalSourceSettings"),
        ("sdrangel.channel.remotesink", "RemoteSinkSettings"),
        ("sdrangel.channeltx.remotesource", "RemoteSourceSettings"),
        ("de.maintech.sdrangelove.channel.ssb", "SSBDemodSettings"),
        ("sdrangel.channeltx.modssb", "SSBModSettings"),
        ("sdrangel.channeltx.udpsource", "UDPSourceSettings"),
        ("sdrangel.channel.udpsink", "UDPSinkSettings"),
        ("de.maintech.sdrangelove.channel.wfm", "WFMDemodSettings"),
        ("sdrangel.channeltx.modwfm", "WFMModSettings"),
    ]
    .into_iter()
    .map(|(uri, key)| (uri.to_string(), key.to_string()))
    .collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit: default_body_limit(),
            preset_channels: default_preset_channels(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads the file named by `SDR_WEBAPI_CONFIG` (defaults when unset) and
    /// applies the environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.is_empty() => Self::from_file(path)?,
            _ => Self::default(),
        };
        config.apply_env_overrides(|name| env::var(name).ok())?;
        Ok(config)
    }

    /// Applies `HOST`, `PORT` and `SDR_WEBAPI_BODY_LIMIT` from `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { name: "PORT", value: port })?;
        }
        if let Some(limit) = lookup("SDR_WEBAPI_BODY_LIMIT") {
            self.body_limit = limit.parse().map_err(|_| ConfigError::InvalidEnv {
                name: "SDR_WEBAPI_BODY_LIMIT",
                value: limit,
            })?;
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8091");
        assert_eq!(
            config.preset_channels.get("sdrangel.channel.bfm").map(String::as_str),
            Some("BFMDemodSettings")
        );
    }

    #[test]
    fn test_parse_partial_file() {
        let config = ServerConfig::from_toml_str(
            r#"
            port = 9000

            [preset_channels]
            "sdrangel.channel.bfm" = "BFMDemodSettings"
            "#,
        )
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.preset_channels.len(), 1);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = \"127.0.0.1\"\nbody_limit = 2048").unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.body_limit, 2048);
        assert_eq!(config.preset_channels, default_preset_channels());

        assert!(matches!(
            ServerConfig::from_file("/nonexistent/sdr-webapi.toml"),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ServerConfig::default();
        config
            .apply_env_overrides(|name| match name {
                "HOST" => Some("127.0.0.1".to_string()),
                "PORT" => Some("8080".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");

        let err = config
            .apply_env_overrides(|name| (name == "PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { name: "PORT", .. }));
    }
}
