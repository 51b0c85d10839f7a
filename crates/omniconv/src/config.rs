//! User configuration, read from an `omniconv.toml` file.
//!
//! Every key is optional. A file may look like:
//!
//! ```toml
//! [search]
//! case-insensitive = true
//!
//! [convert]
//! chain = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::scan::ScanOptions;

pub const CONFIG_FILE_NAME: &str = "omniconv.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How search patterns are interpreted.
    pub search: SearchConfig,

    /// Conversion defaults.
    pub convert: ConvertConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct SearchConfig {
    /// Letters match regardless of case.
    pub case_insensitive: bool,

    /// `^` and `$` match at the start and end of every line, rather than
    /// only at the start and end of the text.
    pub multi_line: bool,

    /// `.` matches newlines too.
    pub dot_matches_new_line: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Start sessions in chain mode.
    pub chain: bool,
}

impl SearchConfig {
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            case_insensitive: self.case_insensitive,
            multi_line: self.multi_line,
            dot_matches_new_line: self.dot_matches_new_line,
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `omniconv.toml` from `dir`, or the defaults if there is no such
    /// file.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
