//! The generation pipeline: name → category → templates → substitution → files.
//!
//! Rendering and writing are separate steps. [`Generator::render`] does all the
//! fallible work (validation, category dispatch, template loading) and returns
//! the finished texts; nothing touches the output directory until
//! [`GeneratedEvent::write`] is called, so a bad name or a missing template
//! never leaves partial output behind.

use std::path::PathBuf;

use crate::category::Category;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::name::EventName;
use crate::templates::loader::TemplatePair;
use crate::templates::substitute::Substitutions;

/// Where the generator takes its templates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateSource {
    /// Read from `template_dir` in the config.
    #[default]
    Directory,
    /// Use the templates compiled into the binary.
    Builtin,
}

/// A fully rendered event class, ready to be written.
#[derive(Debug, Clone)]
pub struct GeneratedEvent {
    pub name: EventName,
    pub category: Category,
    /// Destination of the header file.
    pub header_path: PathBuf,
    /// Destination of the implementation file.
    pub source_path: PathBuf,
    /// Substituted header text.
    pub header: String,
    /// Substituted implementation text.
    pub source: String,
}

impl GeneratedEvent {
    /// Write both files, overwriting any existing files of the same name.
    pub fn write(&self) -> Result<()> {
        if let Some(parent) = self.header_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        if let Some(parent) = self.source_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.header_path, &self.header)?;
        tracing::info!("wrote {}", self.header_path.display());
        std::fs::write(&self.source_path, &self.source)?;
        tracing::info!("wrote {}", self.source_path.display());
        Ok(())
    }
}

/// Produces event classes from a pair of templates.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
    templates: TemplateSource,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            templates: TemplateSource::Directory,
        }
    }

    /// Select where templates are taken from.
    pub fn with_template_source(mut self, templates: TemplateSource) -> Self {
        self.templates = templates;
        self
    }

    /// Validate `class_name`, resolve its category and render both templates.
    pub fn render(&self, class_name: &str) -> Result<GeneratedEvent> {
        let name = EventName::parse(class_name)?;
        let category = Category::from_class_name(&name)?;
        tracing::info!(
            "generating {} ({}) in category {}",
            name.class_name(),
            name.snake_name(),
            category
        );

        let templates = match self.templates {
            TemplateSource::Directory => TemplatePair::load(&self.config)?,
            TemplateSource::Builtin => TemplatePair::builtin(),
        };

        let header = Substitutions::for_header(&name, category).apply(&templates.header);
        let source = Substitutions::for_source(&name, category).apply(&templates.source);

        Ok(GeneratedEvent {
            header_path: self.config.header_output_path(name.snake_name()),
            source_path: self.config.source_output_path(name.snake_name()),
            name,
            category,
            header,
            source,
        })
    }

    /// Render and write in one step.
    pub fn generate(&self, class_name: &str) -> Result<GeneratedEvent> {
        let event = self.render(class_name)?;
        event.write()?;
        Ok(event)
    }
}
