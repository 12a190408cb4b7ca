use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use lightscene::document::{self, LoadedDocument, render_document};
use lightscene::{Config, SceneDocument};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lightscene")]
#[command(version, about = "Inspect and normalise colour scene documents")]
struct Cli {
    /// Read settings from PATH instead of ~/.config/lightscene/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List scenes and their colours
    Show {
        /// Scene document (JSON or gzip JSON), `-` for stdin
        file: Option<PathBuf>,
    },
    /// Re-emit the document as normalised JSON
    Fmt {
        /// Scene document (JSON or gzip JSON), `-` for stdin
        file: Option<PathBuf>,

        /// Single-line output regardless of config
        #[arg(long)]
        compact: bool,
    },
    /// Parse the document and report whether it is valid
    Check {
        /// Scene document (JSON or gzip JSON), `-` for stdin
        file: Option<PathBuf>,
    },
    /// Print a JSON Schema
    Schema {
        #[arg(value_enum, default_value_t = SchemaTarget::Document)]
        target: SchemaTarget,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SchemaTarget {
    /// Scene document (a scene object or an array of scenes)
    Document,
    /// Configuration file
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Show { file } => {
            let loaded = load(&config, file)?;
            print_listing(&loaded.document);
        }
        Command::Fmt { file, compact } => {
            let loaded = load(&config, file)?;
            let text = render_document(&loaded.document, config.output_style(compact))?;
            println!("{text}");
        }
        Command::Check { file } => {
            let loaded = load(&config, file)?;
            println!(
                "ok: {} scene(s), {} colour(s) in {}",
                loaded.document.scenes().len(),
                loaded.document.colour_count(),
                loaded.source_label()
            );
        }
        Command::Schema { target } => {
            let schema = match target {
                SchemaTarget::Document => schemars::schema_for!(SceneDocument),
                SchemaTarget::Config => Config::json_schema(),
            };
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}

fn load(config: &Config, file: Option<PathBuf>) -> Result<LoadedDocument> {
    let path = file
        .or_else(|| config.input.default_document.clone())
        .ok_or_else(|| {
            anyhow!("no input document given; pass FILE or set input.default_document in the config")
        })?;

    log::debug!("Reading scene document {}", path.display());
    document::read_document_file(&path, &config.read_options())
        .with_context(|| format!("Could not load scenes from {}", path.display()))
}

fn print_listing(document: &SceneDocument) {
    if document.scenes().is_empty() {
        println!("No scenes.");
        return;
    }

    for scene in document.scenes() {
        println!("{scene}");
        for (index, colour) in scene.colours.iter().enumerate() {
            println!("  {}. {}", index + 1, colour);
        }
    }
}
