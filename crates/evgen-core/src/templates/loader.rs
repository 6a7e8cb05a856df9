//! Reading the header and implementation templates from disk.

use std::path::Path;

use crate::config::GeneratorConfig;
use crate::error::{EvgenError, Result};
use crate::templates::embedded;

/// Raw contents of the two templates before substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePair {
    pub header: String,
    pub source: String,
}

impl TemplatePair {
    /// Read both templates from the locations named in `config`.
    ///
    /// Both files must exist; a missing template aborts generation before any
    /// output is written.
    pub fn load(config: &GeneratorConfig) -> Result<Self> {
        let header = read_template(&config.header_template_path())?;
        let source = read_template(&config.source_template_path())?;
        Ok(Self { header, source })
    }

    /// The templates compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            header: embedded::EVENT_HEADER.to_string(),
            source: embedded::EVENT_SOURCE.to_string(),
        }
    }
}

fn read_template(path: &Path) -> Result<String> {
    tracing::debug!("reading template {}", path.display());
    std::fs::read_to_string(path).map_err(|e| EvgenError::TemplateNotFound {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> GeneratorConfig {
        GeneratorConfig {
            template_dir: dir.to_path_buf(),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_load_both_templates() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("template.hpp"), "class Template;").unwrap();
        std::fs::write(dir.path().join("template.cpp"), "#include \"origin\"").unwrap();

        let pair = TemplatePair::load(&config_in(dir.path())).unwrap();
        assert_eq!(pair.header, "class Template;");
        assert_eq!(pair.source, "#include \"origin\"");
    }

    #[test]
    fn test_missing_header_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("template.cpp"), "").unwrap();

        let err = TemplatePair::load(&config_in(dir.path())).unwrap_err();
        match err {
            EvgenError::TemplateNotFound { path, .. } => {
                assert_eq!(path, dir.path().join("template.hpp"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_source_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("template.hpp"), "").unwrap();

        let err = TemplatePair::load(&config_in(dir.path())).unwrap_err();
        assert!(matches!(err, EvgenError::TemplateNotFound { ref path, .. }
            if path.ends_with("template.cpp")));
    }

    #[test]
    fn test_builtin_templates_contain_placeholders() {
        let pair = TemplatePair::builtin();
        for placeholder in ["Template", "TEMPLATE", "Scope"] {
            assert!(pair.header.contains(placeholder), "header lacks {placeholder}");
        }
        for placeholder in ["Template", "template", "Scope", "origin"] {
            assert!(pair.source.contains(placeholder), "source lacks {placeholder}");
        }
        assert!(!pair.header.contains("origin"));
    }
}
