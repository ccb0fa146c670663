//! Alignment configuration
//!
//! Loaded from TOML, e.g.:
//!
//! ```toml
//! hash_threshold = 50
//! max_cells = 67108864
//! parallel = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default return-value length above which API symbols hash the value
pub const DEFAULT_HASH_THRESHOLD: usize = 50;

/// Default distance matrix cell limit (64 Mi cells)
pub const DEFAULT_MAX_CELLS: usize = 64 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Knobs for symbol extraction and matrix sizing
///
/// # Example
/// ```
/// use tracealign::config::AlignConfig;
///
/// let config = AlignConfig::default();
/// assert_eq!(config.hash_threshold, 50);
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlignConfig {
    /// Return values longer than this many characters are replaced by a hash
    pub hash_threshold: usize,

    /// Upper bound on `(m + 1) * (n + 1)` matrix cells; `None` disables the check
    ///
    /// Comparisons over the limit fail with a capacity error instead of
    /// allocating.
    pub max_cells: Option<usize>,

    /// Run API-level pair comparisons on the rayon thread pool
    pub parallel: bool,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            hash_threshold: DEFAULT_HASH_THRESHOLD,
            max_cells: Some(DEFAULT_MAX_CELLS),
            parallel: true,
        }
    }
}

impl AlignConfig {
    /// Small memory footprint, sequential execution
    pub fn strict() -> Self {
        Self {
            hash_threshold: DEFAULT_HASH_THRESHOLD,
            max_cells: Some(4 * 1024 * 1024),
            parallel: false,
        }
    }

    /// No cell limit; only allocation failure stops a comparison
    pub fn unbounded() -> Self {
        Self {
            max_cells: None,
            ..Self::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hash_threshold == 0 {
            return Err(ConfigError::Invalid(
                "hash_threshold must be greater than 0".to_string(),
            ));
        }
        if self.max_cells == Some(0) {
            return Err(ConfigError::Invalid(
                "max_cells must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
