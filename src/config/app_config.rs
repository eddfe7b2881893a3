use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{CipherSphereError, Result};
use crate::core::models::cipher_method::CipherMethod;

/// Optional user configuration read from `config.toml`.
///
/// Every section and field may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub defaults: DefaultsSection,
    #[serde(default)]
    pub output: OutputSection,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// With an explicit path, the file must exist. Without one, the
    /// platform default location is tried and a missing file just means
    /// "use defaults".
    pub fn load(custom: Option<&Path>) -> Result<Self> {
        match custom {
            Some(path) => {
                if !path.exists() {
                    return Err(CipherSphereError::InvalidConfig {
                        detail: format!("config file {} does not exist", path.display()),
                    });
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// `<config dir>/ciphersphere/config.toml`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("ciphersphere").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content).map_err(|e| match e {
            CipherSphereError::InvalidConfig { detail } => CipherSphereError::InvalidConfig {
                detail: format!("{}: {detail}", path.display()),
            },
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| CipherSphereError::InvalidConfig {
            detail: format!("failed to parse config: {e}"),
        })?;

        // Catch a bad default method now rather than on first use.
        config.default_method()?;

        Ok(config)
    }

    /// The configured default method, if any.
    pub fn default_method(&self) -> Result<Option<CipherMethod>> {
        self.defaults
            .method
            .as_deref()
            .map(|m| {
                m.parse().map_err(|_| CipherSphereError::InvalidConfig {
                    detail: format!(
                        "[defaults] method = '{m}' is not a known cipher (use atbash, caesar or vigenere)"
                    ),
                })
            })
            .transpose()
    }
}

/// The `[defaults]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsSection {
    /// Method used when `--method` is omitted.
    pub method: Option<String>,
    /// Key used when `--key` is omitted; interpreted like `--key`.
    pub key: Option<String>,
}

/// The `[output]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Emit JSON outcomes by default.
    #[serde(default)]
    pub json: bool,
}
