//! Serve configuration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default location of the `trunk build` output.
pub const DEFAULT_DIST: &str = "frontend/dist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub port: u16,
    pub dist: PathBuf,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PORT, DEFAULT_DIST)
    }
}

impl ServeConfig {
    pub fn new(port: u16, dist: impl AsRef<Path>) -> Self {
        Self {
            port,
            dist: dist.as_ref().to_path_buf(),
        }
    }

    /// Entry document served for every unmatched path.
    pub fn index_html(&self) -> PathBuf {
        self.dist.join("index.html")
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// The dist directory must exist and contain `index.html`.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.dist.is_dir() {
            return Err(ConfigError::MissingDist(self.dist.clone()));
        }
        if !self.index_html().is_file() {
            return Err(ConfigError::MissingIndex(self.dist.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = ServeConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.index_html(), PathBuf::from("frontend/dist/index.html"));
        assert_eq!(config.addr().port(), 3000);
    }

    #[test]
    fn test_validate_missing_dist() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServeConfig::new(3000, dir.path().join("nope"));
        assert!(matches!(config.validate(), Err(ConfigError::MissingDist(_))));
    }

    #[test]
    fn test_validate_missing_index() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServeConfig::new(3000, dir.path());
        assert!(matches!(config.validate(), Err(ConfigError::MissingIndex(_))));

        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        assert!(config.validate().is_ok());
    }
}
