use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use console::Term;
use dialoguer::Input;

use evgen_core::category::Category;
use evgen_core::config::{GeneratorConfig, DEFAULT_CONFIG_FILE};
use evgen_core::error::EvgenError;
use evgen_core::generator::{Generator, TemplateSource};

use crate::output;

/// Command-line options for a generation run.
pub struct Options {
    pub class_name: Option<String>,
    pub config: Option<PathBuf>,
    pub template_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub builtin: bool,
    pub dry_run: bool,
}

/// Generate a new event class.
///
/// Takes the class name from the command line or prompts for it, renders both
/// templates and writes the resulting files. Nothing is written if the name
/// is invalid, does not follow the A/M/G naming convention, or a template is
/// missing.
pub fn run(opts: Options) -> Result<()> {
    output::print_header("evgen");

    let config = resolve_config(&opts)?;

    let class_name = match opts.class_name {
        Some(name) => {
            output::print_info("Parsed class name from command line parameter");
            name
        }
        None => prompt_class_name()?,
    };

    let source = if opts.builtin {
        TemplateSource::Builtin
    } else {
        TemplateSource::Directory
    };
    let generator = Generator::new(config).with_template_source(source);

    let event = match generator.render(&class_name) {
        Err(err @ EvgenError::UnsupportedCategory(_)) => {
            output::print_error(&err.to_string());
            for category in Category::ALL {
                output::print_key_value(
                    &category.letter().to_string(),
                    &format!("{} ({})", category.scope_name(), category.include_path()),
                );
            }
            return Err(err.into());
        }
        other => other?,
    };

    output::print_key_value("Class", event.name.class_name());
    output::print_key_value("Scope", event.category.scope_name());
    output::print_key_value("Header", &event.header_path.display().to_string());
    output::print_key_value("Source", &event.source_path.display().to_string());

    if opts.dry_run {
        output::print_file(&event.header_path.display().to_string(), &event.header);
        output::print_file(&event.source_path.display().to_string(), &event.source);
        println!();
        output::print_warning("Dry run: no files were written");
        return Ok(());
    }

    event.write()?;

    output::print_success("Wrote class files successfully");
    println!();
    println!("  Don't forget adding them to CMake:");
    println!("    {}", event.header_path.display());
    println!("    {}", event.source_path.display());
    println!();

    Ok(())
}

/// Ask for the class name.
///
/// Uses an interactive prompt when both stdin and stderr are terminals. When
/// input is piped, prints the prompt and reads a single line instead.
fn prompt_class_name() -> Result<String> {
    if Term::stderr().is_term() && std::io::stdin().is_terminal() {
        let name = Input::<String>::new()
            .with_prompt("Please enter class name")
            .allow_empty(true)
            .interact_text()?;
        return Ok(name);
    }

    print!("Please enter class name: ");
    std::io::stdout().flush()?;
    read_class_name(std::io::stdin().lock())
}

/// Read one line as the class name. Trailing newline and whitespace are left
/// for [`evgen_core::name::EventName::parse`] to trim.
fn read_class_name(mut input: impl BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// Load the config file, then apply command-line overrides.
///
/// An explicit `--config` must exist; the default `evgen.config.json` is optional.
fn resolve_config(opts: &Options) -> Result<GeneratorConfig> {
    let mut config = match &opts.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };

    if let Some(dir) = &opts.template_dir {
        config.template_dir = dir.clone();
    }
    if let Some(dir) = &opts.output_dir {
        config.output_dir = dir.clone();
    }

    tracing::debug!("resolved config: {config:?}");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(config: Option<PathBuf>) -> Options {
        Options {
            class_name: None,
            config,
            template_dir: None,
            output_dir: None,
            builtin: false,
            dry_run: false,
        }
    }

    /// Options generating from the built-in templates into `dir`.
    fn builtin_into(dir: &Path, class_name: &str) -> Options {
        Options {
            class_name: Some(class_name.to_string()),
            output_dir: Some(dir.to_path_buf()),
            builtin: true,
            ..options(None)
        }
    }

    fn file_count(dir: &Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_run_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        run(builtin_into(dir.path(), "ActorSpawned")).unwrap();

        let header = std::fs::read_to_string(dir.path().join("actor_spawned.hpp")).unwrap();
        let source = std::fs::read_to_string(dir.path().join("actor_spawned.cpp")).unwrap();
        assert!(header.contains("class ActorSpawned : public Event<Actor>{"));
        assert!(source.contains("#include \"actor/actor.hpp\""));
        assert_eq!(file_count(dir.path()), 2);
    }

    #[test]
    fn test_run_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let opts = Options {
            dry_run: true,
            ..builtin_into(dir.path(), "MapLoaded")
        };

        run(opts).unwrap();
        assert_eq!(file_count(dir.path()), 0);
    }

    #[test]
    fn test_run_unsupported_category_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();

        let err = run(builtin_into(dir.path(), "PlayerJoined")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EvgenError>(),
            Some(EvgenError::UnsupportedCategory(name)) if name == "PlayerJoined"
        ));
        assert_eq!(file_count(dir.path()), 0);
    }

    #[test]
    fn test_run_missing_templates_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let opts = Options {
            template_dir: Some(dir.path().join("no-templates")),
            builtin: false,
            ..builtin_into(dir.path(), "GameSaved")
        };

        let err = run(opts).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EvgenError>(),
            Some(EvgenError::TemplateNotFound { .. })
        ));
        assert_eq!(file_count(dir.path()), 0);
    }

    #[test]
    fn test_read_class_name_from_piped_line() {
        let name = read_class_name(&b"ActorSpawned\nMapLoaded\n"[..]).unwrap();
        assert_eq!(name, "ActorSpawned\n");
        let parsed = evgen_core::name::EventName::parse(&name).unwrap();
        assert_eq!(parsed.snake_name(), "actor_spawned");
    }

    #[test]
    fn test_read_class_name_empty_input() {
        let name = read_class_name(&b""[..]).unwrap();
        assert!(name.is_empty());
        assert!(matches!(
            evgen_core::name::EventName::parse(&name),
            Err(EvgenError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(&path, r#"{ "template_dir": "tpl", "output_dir": "out" }"#).unwrap();

        let mut opts = options(Some(path));
        opts.output_dir = Some(PathBuf::from("elsewhere"));

        let config = resolve_config(&opts).unwrap();
        assert_eq!(config.template_dir, PathBuf::from("tpl"));
        assert_eq!(config.output_dir, PathBuf::from("elsewhere"));
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(Some(dir.path().join("missing.json")));
        assert!(resolve_config(&opts).is_err());
    }
}
