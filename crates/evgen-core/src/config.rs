//! Generator configuration (`evgen.config.json`).
//!
//! Every field is optional in the file; anything left out falls back to the
//! defaults, which read `template.hpp`/`template.cpp` from the current directory
//! and write `<snake_name>.hpp`/`<snake_name>.cpp` next to them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EvgenError, Result};

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "evgen.config.json";

/// Where templates are read from and where generated files are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory containing the header and implementation templates.
    pub template_dir: PathBuf,
    /// Directory the generated files are written to.
    pub output_dir: PathBuf,
    /// File name of the header template inside `template_dir`.
    pub header_template: String,
    /// File name of the implementation template inside `template_dir`.
    pub source_template: String,
    /// Extension of the generated header, without the dot.
    pub header_extension: String,
    /// Extension of the generated implementation file, without the dot.
    pub source_extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            header_template: "template.hpp".into(),
            source_template: "template.cpp".into(),
            header_extension: "hpp".into(),
            source_extension: "cpp".into(),
        }
    }
}

impl GeneratorConfig {
    /// Load a config file. Fails if the file is missing or not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| EvgenError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        serde_json::from_str(&contents).map_err(|e| EvgenError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load a config file if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| EvgenError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Full path of the header template.
    pub fn header_template_path(&self) -> PathBuf {
        self.template_dir.join(&self.header_template)
    }

    /// Full path of the implementation template.
    pub fn source_template_path(&self) -> PathBuf {
        self.template_dir.join(&self.source_template)
    }

    /// Output path of the generated header for a given file stem.
    pub fn header_output_path(&self, stem: &str) -> PathBuf {
        self.output_dir.join(format!("{stem}.{}", self.header_extension))
    }

    /// Output path of the generated implementation file for a given file stem.
    pub fn source_output_path(&self, stem: &str) -> PathBuf {
        self.output_dir.join(format!("{stem}.{}", self.source_extension))
    }
}
