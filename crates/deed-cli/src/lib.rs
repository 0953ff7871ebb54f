use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use deed_reader::{
    transform_coordinates, validate_plot, DeedReader, ExportFormat, Exports, FilterMode,
    ReaderConfig, DEFAULT_SOURCE_SYSTEM, DEFAULT_TARGET_SYSTEM,
};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    text.push('\n');
    print_stdout(&text)
}

#[derive(Parser)]
#[command(name = "deed-reader")]
#[command(about = "Turn metes and bounds deed text into a closed survey traverse", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,

    /// TOML config file (overrides DEED_READER_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Isolate the boundary description of a deed
    Filter(FilterArgs),

    /// Extract typed survey calls
    Parse(PipelineArgs),

    /// Compute coordinates, closure and exports
    Plot(PipelineArgs),

    /// Write one or all export formats
    Export(ExportArgs),

    /// Check closure and precision of the plotted deed
    Validate(PipelineArgs),

    /// Tag plotted coordinates with a target coordinate system (no reprojection)
    Transform(TransformArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Deed text file, or `-` for stdin
    input: PathBuf,

    /// Filter mode: rule_based, ai or hybrid (default from config)
    #[arg(long)]
    mode: Option<FilterMode>,
}

#[derive(Args)]
struct FilterArgs {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Args)]
struct PipelineArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Treat the input as boundary text and skip the relevance filter
    #[arg(long)]
    skip_filter: bool,
}

#[derive(Args)]
struct ExportArgs {
    #[command(flatten)]
    pipeline: PipelineArgs,

    /// Export key (dxf, csv, esri_traverse, autocad_script, kml) or `all`
    #[arg(long, short)]
    format: String,

    /// Directory to write files into; without it payloads go to stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct TransformArgs {
    #[command(flatten)]
    pipeline: PipelineArgs,

    /// Coordinate system the plotted points are in
    #[arg(long, default_value = DEFAULT_SOURCE_SYSTEM)]
    from: String,

    /// Coordinate system to tag the points with
    #[arg(long, default_value = DEFAULT_TARGET_SYSTEM)]
    to: String,
}

/// Export selection parsed from `--format`
enum ExportSelection {
    All,
    One(ExportFormat),
}

impl ExportSelection {
    fn parse(key: &str) -> Result<Self> {
        if key == "all" {
            return Ok(Self::All);
        }
        Ok(Self::One(key.parse()?))
    }
}

fn read_input(path: &Path) -> Result<String> {
    let text = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read deed text from stdin")?;
        buffer
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
    };

    if text.trim().is_empty() {
        anyhow::bail!("Deed text is empty. Provide a file or pipe text via stdin.");
    }
    Ok(text)
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

pub async fn main_entry() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = ReaderConfig::resolve(cli.config.as_deref()).context("Failed to load config")?;
    let reader = DeedReader::new(config)?;

    match cli.command {
        Commands::Filter(args) => run_filter(&reader, &args.input).await,
        Commands::Parse(args) => {
            let text = boundary_text(&reader, &args).await?;
            print_json(&reader.parse(&text))
        }
        Commands::Plot(args) => {
            let text = boundary_text(&reader, &args).await?;
            print_json(&reader.plot(&text))
        }
        Commands::Export(args) => run_export(&reader, args).await,
        Commands::Validate(args) => {
            let text = boundary_text(&reader, &args).await?;
            let plot = reader.plot(&text);
            print_json(&serde_json::json!({
                "validation": validate_plot(&plot),
                "closure": plot.closure,
            }))
        }
        Commands::Transform(args) => {
            let text = boundary_text(&reader, &args.pipeline).await?;
            let plot = reader.plot(&text);
            print_json(&transform_coordinates(&plot.coordinates, &args.from, &args.to))
        }
    }
}

async fn run_filter(reader: &DeedReader, input: &InputArgs) -> Result<()> {
    let text = read_input(&input.input)?;
    let mode = input.mode.unwrap_or(reader.mode());
    print_json(&reader.filter_with_mode(&text, mode).await)
}

/// Input text, passed through the relevance filter unless `--skip-filter`
async fn boundary_text(reader: &DeedReader, args: &PipelineArgs) -> Result<String> {
    let text = read_input(&args.input.input)?;
    if args.skip_filter {
        return Ok(text);
    }

    let mode = args.input.mode.unwrap_or(reader.mode());
    let filtered = reader.filter_with_mode(&text, mode).await;
    for note in &filtered.notes {
        log::warn!("{note}");
    }
    Ok(filtered.filtered_text)
}

async fn run_export(reader: &DeedReader, args: ExportArgs) -> Result<()> {
    // unknown keys fail before any work
    let selection = ExportSelection::parse(&args.format)?;

    let text = boundary_text(reader, &args.pipeline).await?;
    let plot = reader.plot(&text);
    let exports = &plot.exports;

    match (selection, args.out) {
        (ExportSelection::One(format), None) => print_stdout(exports.get(format)),
        (ExportSelection::All, None) => print_json(exports),
        (ExportSelection::One(format), Some(dir)) => {
            let path = write_export(&dir, format, exports)?;
            print_json(&serde_json::json!({ "written": [path] }))
        }
        (ExportSelection::All, Some(dir)) => {
            let written = ExportFormat::ALL
                .into_iter()
                .map(|format| write_export(&dir, format, exports))
                .collect::<Result<Vec<_>>>()?;
            print_json(&serde_json::json!({ "written": written }))
        }
    }
}

fn write_export(dir: &Path, format: ExportFormat, exports: &Exports) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(format.file_name());
    fs::write(&path, exports.get(format))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("wrote {} ({})", path.display(), format.mime_type());
    Ok(path)
}
