//! podabio-theme: render and check page styles from the command line

mod config;
mod validate;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use config::PodabioConfig;
use podabio_theme::{
    PageRecord, StyleCache, ThemeEngine, ThemePreset, ThemeRecord, TokenColumns, TokenGroupKind,
};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "podabio-theme", author, version, about, long_about = None)]
struct Cli {
    /// Path to podabio.toml (or a directory containing it)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the CSS for one or more pages
    Render(RenderArgs),
    /// Strictly check stored token JSON
    Validate(ValidateArgs),
    /// List the built-in themes
    Presets {
        /// Print full theme records as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Page record JSON; repeat to render several pages
    #[arg(long, value_name = "FILE")]
    page: Vec<PathBuf>,

    /// Theme record JSON
    #[arg(long, value_name = "FILE", conflicts_with = "preset")]
    theme: Option<PathBuf>,

    /// Built-in theme id
    #[arg(long, value_name = "ID")]
    preset: Option<String>,

    /// Emit only the custom property declarations
    #[arg(long)]
    variables_only: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Page or theme record JSON, or a single group with --group
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Treat the file as one token group (shape, color, typography, widget)
    #[arg(long, value_name = "GROUP")]
    group: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum LogFormat {
    Pretty,
    Json,
}

fn init_logging(level: LogLevel, format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(level).into())
        .from_env_lossy();

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    match format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.log_format);

    if let Err(err) = run(cli) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = PodabioConfig::resolve(cli.config.as_deref())?;
    debug!(?config, "loaded configuration");

    match cli.command {
        Command::Render(args) => render(args, &config),
        Command::Validate(args) => validate(args),
        Command::Presets { json } => presets(json),
    }
}

fn render(args: RenderArgs, config: &PodabioConfig) -> Result<()> {
    let theme = match (&args.theme, &args.preset) {
        (Some(path), _) => Some(read_json::<ThemeRecord>(path)?),
        (None, Some(id)) => Some(
            ThemePreset::parse(id)
                .with_context(|| {
                    format!("Unknown preset `{id}`. Run `podabio-theme presets` to list them.")
                })?
                .record(),
        ),
        (None, None) => None,
    };

    let pages = if args.page.is_empty() {
        let mut preview = PageRecord::new(0, 0, "preview");
        preview.theme_id = theme.as_ref().map(|t| t.id);
        vec![preview]
    } else {
        args.page
            .iter()
            .map(|path| read_json::<PageRecord>(path))
            .collect::<Result<Vec<_>>>()?
    };

    let engine = ThemeEngine::with_config(config.style.clone());
    let mut cache = StyleCache::new(config.cache.capacity);
    let mut out = String::new();

    for page in &pages {
        info!(page_id = page.id, username = %page.username, "rendering");
        if pages.len() > 1 {
            out.push_str(&format!("/* {} */\n", page.username));
        }
        if args.variables_only {
            out.push_str(&engine.css_variables(page, theme.as_ref()));
        } else {
            out.push_str(&engine.style_block_cached(&mut cache, page, theme.as_ref()));
        }
    }

    let stats = cache.stats();
    debug!(hits = stats.hits, misses = stats.misses, "style cache");

    write_output(args.output.as_deref(), &out)
}

fn validate(args: ValidateArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let problems = match &args.group {
        Some(name) => {
            let kind = TokenGroupKind::parse(name).with_context(|| {
                format!("Unknown token group `{name}` (expected shape, color, typography or widget)")
            })?;
            validate::validate_group(kind, &text)
        }
        None => {
            let columns: TokenColumns = serde_json::from_str(&text).with_context(|| {
                format!("{} is not a page or theme record", args.file.display())
            })?;
            if columns.is_empty() {
                info!(file = %args.file.display(), "record has no token columns");
            }
            validate::validate_columns(&columns)
        }
    };

    if problems.is_empty() {
        println!("{}: ok", args.file.display());
        return Ok(());
    }

    for problem in &problems {
        eprintln!("{}: {problem}", args.file.display());
    }
    bail!(
        "{} problem(s) found in {}",
        problems.len(),
        args.file.display()
    )
}

fn presets(json: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if json {
        let records: Vec<ThemeRecord> = ThemePreset::all().iter().map(|p| p.record()).collect();
        let text = serde_json::to_string_pretty(&records).context("Failed to serialize presets")?;
        writeln!(stdout, "{text}")?;
        return Ok(());
    }

    let engine = ThemeEngine::default();
    for preset in ThemePreset::all() {
        let theme = preset.record();
        let mut page = PageRecord::new(0, 0, "preview");
        page.theme_id = Some(theme.id);
        let values = engine.values(&page, Some(&theme));
        writeln!(
            stdout,
            "{:<2} {:<10} {:<10} effect={:<7} corner={}",
            theme.id,
            preset.id(),
            preset.display_name(),
            values.border_effect,
            values.corner_radius
        )?;
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn write_output(path: Option<&Path>, css: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, css).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = css.len(), "wrote style block");
        }
        None => io::stdout().lock().write_all(css.as_bytes())?,
    }
    Ok(())
}
