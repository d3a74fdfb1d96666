//! html2hiccup: CLI tool to convert HTML to Hiccup notation

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use html2hiccup::{HiccupOptions, HiccupService, Scope};

use crate::config::{Config, ScopeArg};

#[derive(Parser, Debug)]
#[command(name = "html2hiccup")]
#[command(about = "Convert HTML to Hiccup notation")]
#[command(version)]
#[command(after_help = "Examples:
  html2hiccup page.html                 # Print the first element as Hiccup
  pbpaste | html2hiccup                 # Convert HTML from stdin
  html2hiccup page.html --scope all     # Convert every top-level element
  html2hiccup snippet.html -i           # Replace the file with its Hiccup form")]
struct Cli {
    /// Input HTML file (reads stdin when absent or `-`)
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Replace the input file with the converted Hiccup
    #[arg(short, long, conflicts_with = "output", requires = "input")]
    in_place: bool,

    /// Keep `class` in the attribute map instead of folding it into the tag
    #[arg(long)]
    no_shorthand: bool,

    /// Which part of the input to convert
    #[arg(long, value_enum)]
    scope: Option<ScopeArg>,

    /// Maximum element nesting depth
    #[arg(long)]
    max_depth: Option<usize>,

    /// Configuration file (defaults to .html2hiccup.toml in the working directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_dir(Path::new("."))?.unwrap_or_default(),
    };
    let (options, scope) = resolve_settings(&cli, &config);
    tracing::debug!(?options, %scope, "resolved settings");

    let input = input_path(cli.input.as_deref());
    if cli.in_place && input.is_none() {
        anyhow::bail!("--in-place needs an input file, not stdin");
    }

    let html = read_input(input)?;
    let hiccup = HiccupService::with_options(options)
        .with_scope(scope)
        .convert_html(&html)
        .with_context(|| match input {
            Some(path) => format!("Failed to convert: {}", path.display()),
            None => "Failed to convert stdin".to_string(),
        })?;

    let destination = if cli.in_place {
        input
    } else {
        cli.output.as_deref()
    };
    write_output(destination, &hiccup)
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Command line flags win over the config file, which wins over defaults
fn resolve_settings(cli: &Cli, config: &Config) -> (HiccupOptions, Scope) {
    let defaults = HiccupOptions::default();
    let options = HiccupOptions {
        class_shorthand: !cli.no_shorthand
            && config
                .convert
                .class_shorthand
                .unwrap_or(defaults.class_shorthand),
        max_depth: cli.max_depth.or(config.convert.max_depth),
    };
    let scope = cli
        .scope
        .or(config.convert.scope)
        .map(Scope::from)
        .unwrap_or_default();
    (options, scope)
}

/// `None` stands for stdin
fn input_path(input: Option<&Path>) -> Option<&Path> {
    input.filter(|path| *path != Path::new("-"))
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading input");
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read: {}", path.display()))
        }
        None => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .context("Failed to read stdin")?;
            Ok(html)
        }
    }
}

fn write_output(output: Option<&Path>, hiccup: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(path, format!("{}\n", hiccup))
                .with_context(|| format!("Failed to write: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", hiccup).context("Failed to write stdout")?;
        }
    }
    Ok(())
}
