pub mod model;
pub mod nickname;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use model::{AppConfig, JournalConfig, ServerConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ircsync")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_path())
}

/// A missing file yields the default configuration.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ircsync-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_is_default() {
        let cfg = load_config_from(&scratch("missing")).unwrap();
        assert!(cfg.servers.is_empty());
    }

    #[test]
    fn test_parse_error_names_file() {
        let path = scratch("broken");
        std::fs::write(&path, "servers = 3").unwrap();
        let err = load_config_from(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken"));
    }
}
