//! User configuration: extra hosts to parse with a known provider's rules.
//!
//! ```toml
//! [hosts]
//! "gitlab.example.com" = "gitlab"
//! "github.example.com" = "github"
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;
use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

use crate::descriptor::Provider;
use crate::host::Registry;

/// Errors from loading the configuration file.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", path.display())]
    #[diagnostic(help(
        "host aliases look like `\"git.example.com\" = \"gitlab\"` under `[hosts]`; providers \
         are github, gitlab, bitbucket and azure"
    ))]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Host name to the provider whose URL layout it uses.
    #[serde(default)]
    pub hosts: BTreeMap<String, Provider>,
}

impl Config {
    /// `<config dir>/vcsurl/config.toml` for the current platform.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "vcsurl").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), hosts = config.hosts.len(), "loaded config");
        Ok(config)
    }

    /// Load from an explicit path, or from the default path if it exists.
    ///
    /// A missing explicit file is an error; a missing default file yields an
    /// empty configuration.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                tracing::trace!("no config file, using built-in hosts only");
                Ok(Self::default())
            }
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The built-in registry extended with this configuration's hosts.
    pub fn registry(&self) -> Registry {
        self.hosts
            .iter()
            .fold(Registry::builtin().clone(), |registry, (host, provider)| {
                registry.with_alias(host.as_str(), *provider)
            })
    }
}
