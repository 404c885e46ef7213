// src/config/providers.rs
//! Providers file.
//!
//! ```yaml
//! output_dir: exports      # optional, default: current directory
//! timeout_secs: 60         # optional, default: wait forever
//! providers:
//!   - name: acme
//!     url: http://acme.example:8080
//!     username: me
//!     password: secret
//! ```

use std::{fmt, fs, path::{Path, PathBuf}, str::FromStr, time::Duration};

use serde::Deserialize;

use crate::error::ConfigError;

/// One remote catalog reachable under one set of credentials.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Provider {
    pub name: String,
    pub url: String,
    pub username: String,
    pub password: String,
}

// Password stays out of debug output and logs.
impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub providers: Vec<Provider>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Read and validate the providers file. Any failure here is fatal for the run.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    /// `None` keeps requests unbounded.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // A document that is just `~` comes back as None
        let config: Option<Config> = serde_yaml::from_str(s)?;
        match config {
            Some(c) if !c.providers.is_empty() => Ok(c),
            _ => Err(ConfigError::NoProviders),
        }
    }
}
