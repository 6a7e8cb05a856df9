//! evgen CLI: scaffold a new event class from header/implementation templates.
//!
//! `evgen ActorSpawned` reads `template.hpp` and `template.cpp`, replaces their
//! placeholders and writes `actor_spawned.hpp` and `actor_spawned.cpp`. Without
//! a class name argument the name is read interactively.
//!
//! The work itself is done by [`evgen_core::generator::Generator`].

mod generate;
mod output;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "evgen",
    about = "Scaffold a new Actor/MapData/GameInfo event class from templates",
    version
)]
struct Cli {
    /// Event class name in UpperCamelCase, starting with A, M or G (prompted if omitted)
    class_name: Option<String>,

    /// Path to evgen.config.json (default: ./evgen.config.json if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory containing template.hpp and template.cpp
    #[arg(long)]
    template_dir: Option<PathBuf>,

    /// Directory the generated files are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Use the built-in event templates instead of reading them from disk
    #[arg(long)]
    builtin: bool,

    /// Render and print the files without writing them
    #[arg(long)]
    dry_run: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    generate::run(generate::Options {
        class_name: cli.class_name,
        config: cli.config,
        template_dir: cli.template_dir,
        output_dir: cli.output_dir,
        builtin: cli.builtin,
        dry_run: cli.dry_run,
    })
}
