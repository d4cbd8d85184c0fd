use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use apicat_core::config::{self, ApicatConfig, CONFIG_FILE_NAME, EmitFormat};
use apicat_core::{Catalog, DocumentFormat, parse_with_format};

#[derive(Parser)]
#[command(
    name = "apicat",
    about = "Normalize OpenAPI 2/3 and Markdown API documents into an interface catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and emit its catalog
    Parse {
        /// Path to the API document (JSON, YAML or Markdown)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Format hint overriding the file extension (json, yaml, yml, md, markdown)
        #[arg(long)]
        format: Option<String>,

        /// Output serialization
        #[arg(long)]
        emit: Option<EmitArg>,

        /// Write the catalog to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a document parses
    Validate {
        /// Path to the API document
        #[arg(short, long)]
        input: PathBuf,

        /// Format hint overriding the file extension
        #[arg(long)]
        format: Option<String>,
    },

    /// Print a short summary of each interface in a document
    Inspect {
        /// Path to the API document
        #[arg(short, long)]
        input: PathBuf,

        /// Format hint overriding the file extension
        #[arg(long)]
        format: Option<String>,

        /// Output format
        #[arg(long, default_value = "yaml")]
        emit: EmitArg,
    },

    /// Initialize a new apicat configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum EmitArg {
    Json,
    Yaml,
}

impl From<EmitArg> for EmitFormat {
    fn from(arg: EmitArg) -> Self {
        match arg {
            EmitArg::Json => EmitFormat::Json,
            EmitArg::Yaml => EmitFormat::Yaml,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            format,
            emit,
            output,
        } => cmd_parse(input, format, emit, output),

        Commands::Validate { input, format } => cmd_validate(input, format),

        Commands::Inspect {
            input,
            format,
            emit,
        } => cmd_inspect(input, format, emit),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "apicat", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<ApicatConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

/// Read and parse a document. An explicit hint wins over the file extension.
fn load_catalog(path: &Path, hint: Option<&str>) -> Result<Catalog> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let format = match hint {
        Some(hint) => DocumentFormat::from_hint(hint)?,
        None => DocumentFormat::from_path(path)
            .with_context(|| format!("cannot infer the format of {}", path.display()))?,
    };
    log::info!("parsing {} as {format}", path.display());

    let catalog = parse_with_format(&content, format)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(catalog)
}

fn render<T: serde::Serialize>(value: &T, emit: EmitFormat, pretty: bool) -> Result<String> {
    let text = match emit {
        EmitFormat::Yaml => serde_yaml_ng::to_string(value)?,
        EmitFormat::Json if pretty => serde_json::to_string_pretty(value)? + "\n",
        EmitFormat::Json => serde_json::to_string(value)? + "\n",
    };
    Ok(text)
}

fn cmd_parse(
    input: Option<PathBuf>,
    format: Option<String>,
    emit: Option<EmitArg>,
    output: Option<PathBuf>,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let hint = format.or_else(|| cfg.format.clone());
    let emit = emit.map(EmitFormat::from).unwrap_or(cfg.emit);
    let output = output.or_else(|| cfg.output.as_ref().map(PathBuf::from));

    let catalog = load_catalog(&input, hint.as_deref())?;
    let text = render(&catalog, emit, cfg.pretty)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
            fs::write(&path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Wrote {} interfaces to {}", catalog.len(), path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn cmd_validate(input: PathBuf, format: Option<String>) -> Result<()> {
    let catalog = load_catalog(&input, format.as_deref())?;

    eprintln!("Valid {} document: {}", catalog.source, catalog.title);
    eprintln!("  Version: {}", catalog.schema_version);
    if !catalog.base_url.is_empty() {
        eprintln!("  Base URL: {}", catalog.base_url);
    }
    eprintln!("  Interfaces: {}", catalog.len());

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: Option<String>, emit: EmitArg) -> Result<()> {
    let catalog = load_catalog(&input, format.as_deref())?;
    let summary = build_inspect_summary(&catalog);
    print!("{}", render(&summary, emit.into(), true)?);
    Ok(())
}

fn build_inspect_summary(catalog: &Catalog) -> serde_json::Value {
    let interfaces: Vec<serde_json::Value> = catalog
        .interfaces
        .iter()
        .map(|i| {
            serde_json::json!({
                "id": i.id,
                "method": i.method.as_str(),
                "path": i.path,
                "summary": i.summary,
                "tags": i.tags,
                "parameters": i.parameters.len(),
                "has_body": i.request_body.is_some(),
                "responses": i.responses.keys().collect::<Vec<_>>(),
            })
        })
        .collect();

    serde_json::json!({
        "info": {
            "title": catalog.title,
            "version": catalog.schema_version,
            "source": catalog.source.as_str(),
            "base_url": catalog.base_url,
        },
        "interfaces": interfaces,
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
