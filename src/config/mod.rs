use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::emit::EmitOptions;
use crate::error::{PrimeError, Result};
use crate::parser::ExtractOptions;
use crate::repository::{default_exclude_dirs, MAX_PER_PAGE};

/// Top-level configuration from `.repoprime.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ExtractOptions,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub emit: EmitOptions,
}

/// Defaults for repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

fn default_per_page() -> usize {
    MAX_PER_PAGE
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

impl Config {
    /// Load config from a TOML file. Returns default if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(1..=MAX_PER_PAGE).contains(&self.listing.per_page) {
            return Err(PrimeError::Config(format!(
                "listing.per_page must be between 1 and {MAX_PER_PAGE}, got {}",
                self.listing.per_page
            )));
        }
        Ok(())
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# repo-prime configuration

[scan]
# Only report declarations that start at column 0. When false, methods and
# nested functions are reported alongside top-level ones.
top_level_only = false

[listing]
# Page size for `repoprime list` (1-100).
per_page = 100

# Directory names skipped while walking. Hidden entries are always skipped.
exclude_dirs = ["node_modules", "vendor", "__pycache__", "dist", "build"]

[emit]
# Copy each function's required parameters into `parameters.required`.
embed_required = false
"#
    }
}
