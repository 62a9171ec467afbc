// crates/value-engine-cli/src/main.rs
// ============================================================================
// Module: Value Engine CLI Entry Point
// Description: Command dispatcher for value calculation workflows.
// Purpose: Run the engine over JSON snapshots and emit canonical reports.
// Dependencies: clap, value-engine-core, value-engine-config, serde, thiserror, tracing.
// ============================================================================

//! ## Overview
//! The value engine CLI reads record snapshots (value items, use cases, run
//! telemetry, catalogue patterns) exported by the record store, runs the
//! pure engine over them, and writes either canonical JSON or a text summary
//! to stdout. Diagnostics go to stderr through `tracing`; stdout carries only
//! command output. Inputs are untrusted and read with hard size limits.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;
pub(crate) mod render;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use tracing::info;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use value_engine_config::ValueEngineConfig;
use value_engine_config::config_toml_example;
use value_engine_core::Archetype;
use value_engine_core::ConfidenceTotal;
use value_engine_core::Dimension;
use value_engine_core::DimensionTotal;
use value_engine_core::InputMap;
use value_engine_core::PatternBundle;
use value_engine_core::PatternRef;
use value_engine_core::UseCase;
use value_engine_core::ValueItem;
use value_engine_core::ValuedItem;
use value_engine_core::ZapRunCacheEntry;
use value_engine_core::combine_bundles;
use value_engine_core::confidence_totals;
use value_engine_core::deduplicate_patterns;
use value_engine_core::default_inputs;
use value_engine_core::dimension_breakdown;
use value_engine_core::dimension_totals;
use value_engine_core::grand_total;
use value_engine_core::summarize_projection;
use value_engine_core::summarize_realization;
use value_engine_core::total_annual_value;
use value_engine_core::unattributed_entries;
use value_engine_core::valuate_items;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of any JSON snapshot input.
const MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;
/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "VALUE_ENGINE_LOG";
/// Log filter used when [`LOG_ENV`] is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "value-engine", version, about = "Automation value calculation engine")]
struct Cli {
    /// Optional config file path (defaults to value-engine.toml or env override).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    format: OutputFormat,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Valuate every item and report the portfolio total.
    Value(ItemsArgs),
    /// Roll item values up by dimension and confidence.
    Breakdown(ItemsArgs),
    /// Project value over the configured horizon with ROI.
    Project(ProjectCommand),
    /// Compare projected value against run telemetry per use case.
    Realization(RealizationCommand),
    /// List archetypes with their inputs and assumption defaults.
    Archetypes,
    /// Catalogue pattern utilities.
    Patterns {
        /// Selected patterns subcommand.
        #[command(subcommand)]
        command: PatternsCommand,
    },
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments naming a value item snapshot.
#[derive(Args, Debug)]
struct ItemsArgs {
    /// Path to a JSON array of value items.
    #[arg(long, value_name = "PATH")]
    items: PathBuf,
}

/// Arguments for the `project` command.
#[derive(Args, Debug)]
struct ProjectCommand {
    /// Path to a JSON array of value items whose total is the base value.
    #[arg(long, value_name = "PATH", required_unless_present = "base_value")]
    items: Option<PathBuf>,
    /// Explicit base annual value.
    #[arg(long, value_name = "DOLLARS", conflicts_with = "items")]
    base_value: Option<f64>,
    /// Current annual platform spend (overrides config).
    #[arg(long, value_name = "DOLLARS")]
    current_spend: Option<f64>,
    /// Proposed annual platform spend (overrides config).
    #[arg(long, value_name = "DOLLARS")]
    proposed_spend: Option<f64>,
}

/// Arguments for the `realization` command.
#[derive(Args, Debug)]
struct RealizationCommand {
    /// Path to a JSON array of use cases.
    #[arg(long, value_name = "PATH")]
    use_cases: PathBuf,
    /// Path to a JSON array of value items.
    #[arg(long, value_name = "PATH")]
    items: PathBuf,
    /// Path to a JSON array of run telemetry rows (none when omitted).
    #[arg(long, value_name = "PATH")]
    telemetry: Option<PathBuf>,
}

/// Patterns subcommands.
#[derive(Subcommand, Debug)]
enum PatternsCommand {
    /// Remove exact and semantic duplicate patterns.
    Dedup(PatternsDedupCommand),
}

/// Arguments for `patterns dedup`.
#[derive(Args, Debug)]
struct PatternsDedupCommand {
    /// Path to a JSON array of pattern references (or bundles with `--bundles`).
    #[arg(long, value_name = "PATH")]
    input: PathBuf,
    /// Treat the input as an array of bundles and combine them first.
    #[arg(long)]
    bundles: bool,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a value engine configuration file.
    Validate,
    /// Print an example configuration with every default.
    Example,
}

/// Output formats for command reports.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Canonical JSON output.
    Json,
    /// Plain-text summary output.
    Text,
}

// ============================================================================
// SECTION: Reports
// ============================================================================

/// Output of the `value` command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValuationReport {
    /// Per-item valuations in display order.
    pub(crate) items: Vec<ValuedItem>,
    /// Sum of item annual values.
    pub(crate) total_annual_value: f64,
}

/// Output of the `breakdown` command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BreakdownReport {
    /// Sum of all item values.
    pub(crate) grand_total: f64,
    /// All five dimensions, zero-filled.
    pub(crate) dimensions: Vec<DimensionTotal>,
    /// Non-empty dimensions, largest first.
    pub(crate) breakdown: Vec<DimensionTotal>,
    /// All three confidence tiers, zero-filled.
    pub(crate) confidence: Vec<ConfidenceTotal>,
}

/// One entry of the `archetypes` command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ArchetypeInfo {
    /// Stable archetype tag.
    pub(crate) tag: &'static str,
    /// Human-readable name.
    pub(crate) label: &'static str,
    /// Rollup dimension.
    pub(crate) dimension: Dimension,
    /// Declared formula inputs.
    pub(crate) input_keys: Vec<&'static str>,
    /// True when the archetype carries a run-count proxy.
    pub(crate) task_based: bool,
    /// Inputs seeded from the configured assumptions.
    pub(crate) default_inputs: InputMap,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Installs the stderr log subscriber.
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let format = cli.format;
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Value(args) => command_value(&args, format),
        Commands::Breakdown(args) => command_breakdown(&args, format),
        Commands::Project(command) => command_project(&command, config_path, format),
        Commands::Realization(command) => command_realization(&command, format),
        Commands::Archetypes => command_archetypes(config_path, format),
        Commands::Patterns {
            command,
        } => command_patterns(&command, format),
        Commands::Config {
            command,
        } => command_config(&command, config_path),
    }
}

// ============================================================================
// SECTION: Valuation Commands
// ============================================================================

/// Executes the `value` command.
fn command_value(args: &ItemsArgs, format: OutputFormat) -> CliResult<ExitCode> {
    let items = read_items(&args.items)?;
    let report = ValuationReport {
        items: valuate_items(&items),
        total_annual_value: total_annual_value(&items),
    };
    info!(items = report.items.len(), total = report.total_annual_value, "valuation complete");
    emit_report(format, &report, render::render_valuations)
}

/// Executes the `breakdown` command.
fn command_breakdown(args: &ItemsArgs, format: OutputFormat) -> CliResult<ExitCode> {
    let items = read_items(&args.items)?;
    let report = BreakdownReport {
        grand_total: grand_total(&items),
        dimensions: dimension_totals(&items),
        breakdown: dimension_breakdown(&items),
        confidence: confidence_totals(&items),
    };
    info!(items = items.len(), total = report.grand_total, "breakdown complete");
    emit_report(format, &report, render::render_breakdown)
}

/// Executes the `project` command.
fn command_project(
    command: &ProjectCommand,
    config_path: Option<&Path>,
    format: OutputFormat,
) -> CliResult<ExitCode> {
    let config = load_config(config_path)?;
    let base_value = match (&command.items, command.base_value) {
        (_, Some(value)) => {
            ensure_base_value(value)?;
            value
        }
        (Some(path), None) => total_annual_value(&read_items(path)?),
        (None, None) => {
            return Err(CliError::new("project requires --items or --base-value".to_string()));
        }
    };
    let current = command.current_spend.unwrap_or(config.spend.current);
    let proposed = command.proposed_spend.unwrap_or(config.spend.proposed);
    ensure_spend("current spend", current)?;
    ensure_spend("proposed spend", proposed)?;
    let summary = summarize_projection(base_value, &config.assumptions(), current, proposed);
    info!(years = summary.years.len(), total = summary.total_value, "projection complete");
    emit_report(format, &summary, render::render_projection)
}

/// Executes the `realization` command.
fn command_realization(command: &RealizationCommand, format: OutputFormat) -> CliResult<ExitCode> {
    let use_cases: Vec<UseCase> = read_json(&command.use_cases, "use cases")?;
    let items = read_items(&command.items)?;
    let entries: Vec<ZapRunCacheEntry> = match &command.telemetry {
        Some(path) => read_json(path, "telemetry")?,
        None => Vec::new(),
    };
    debug!(use_cases = use_cases.len(), entries = entries.len(), "loaded realization inputs");
    for entry in unattributed_entries(&use_cases, &entries) {
        warn!(
            zap_id = %entry.zap_id,
            use_case_id = %entry.use_case_id,
            "telemetry row references an unknown use case and is ignored"
        );
    }
    let summary = summarize_realization(&use_cases, &items, &entries);
    info!(
        use_cases = summary.use_cases.len(),
        at_risk = summary.at_risk_count,
        "realization complete"
    );
    emit_report(format, &summary, render::render_realization)
}

/// Executes the `archetypes` command.
fn command_archetypes(config_path: Option<&Path>, format: OutputFormat) -> CliResult<ExitCode> {
    let assumptions = load_config(config_path)?.assumptions();
    let archetypes: Vec<ArchetypeInfo> = Archetype::ALL
        .into_iter()
        .map(|archetype| ArchetypeInfo {
            tag: archetype.as_str(),
            label: archetype.label(),
            dimension: archetype.dimension(),
            input_keys: archetype.input_keys().to_vec(),
            task_based: archetype.is_task_based(),
            default_inputs: default_inputs(archetype, &assumptions),
        })
        .collect();
    emit_report(format, &archetypes, |list: &Vec<ArchetypeInfo>| render::render_archetypes(list))
}

// ============================================================================
// SECTION: Pattern Commands
// ============================================================================

/// Dispatches patterns subcommands.
fn command_patterns(command: &PatternsCommand, format: OutputFormat) -> CliResult<ExitCode> {
    match command {
        PatternsCommand::Dedup(command) => command_patterns_dedup(command, format),
    }
}

/// Executes the `patterns dedup` command.
fn command_patterns_dedup(
    command: &PatternsDedupCommand,
    format: OutputFormat,
) -> CliResult<ExitCode> {
    let result = if command.bundles {
        let bundles: Vec<PatternBundle> = read_json(&command.input, "pattern bundles")?;
        debug!(bundles = bundles.len(), "loaded pattern bundles");
        combine_bundles(&bundles)
    } else {
        let patterns: Vec<PatternRef> = read_json(&command.input, "patterns")?;
        deduplicate_patterns(&patterns)
    };
    info!(
        before = result.total_before,
        removed = result.duplicates_removed,
        "pattern dedup complete"
    );
    emit_report(format, &result, render::render_dedup)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: &ConfigCommand, config_path: Option<&Path>) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate => {
            load_config(config_path)?;
            write_stdout_line("config ok").map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
        ConfigCommand::Example => {
            write_stdout_bytes(config_toml_example().as_bytes())
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Loads and validates configuration.
fn load_config(path: Option<&Path>) -> CliResult<ValueEngineConfig> {
    ValueEngineConfig::load(path)
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))
}

/// Rejects a non-finite explicit base value; negative values are allowed.
fn ensure_base_value(value: f64) -> CliResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CliError::new("base value must be a finite number".to_string()))
    }
}

/// Rejects negative or non-finite spend overrides.
fn ensure_spend(label: &str, value: f64) -> CliResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CliError::new(format!("{label} must be a finite, non-negative number")))
    }
}

/// Reads value items and warns about unrecognized archetype tags.
fn read_items(path: &Path) -> CliResult<Vec<ValueItem>> {
    let items: Vec<ValueItem> = read_json(path, "value items")?;
    debug!(path = %path.display(), items = items.len(), "loaded value items");
    for item in items.iter().filter(|item| item.known_archetype().is_none()) {
        warn!(
            item_id = %item.id,
            archetype = %item.archetype,
            "unrecognized archetype; item valuates to zero"
        );
    }
    Ok(items)
}

/// Errors returned by bounded file reads.
#[derive(Debug)]
enum ReadLimitError {
    /// File I/O failure.
    Io(std::io::Error),
    /// File size exceeds the configured limit.
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let metadata = file.metadata().map_err(ReadLimitError::Io)?;
    let size = metadata.len();
    let limit = u64::try_from(max_bytes).map_err(|_| ReadLimitError::TooLarge {
        size,
        limit: max_bytes,
    })?;
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let mut limited = file.take(limit.saturating_add(1));
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        return Err(ReadLimitError::TooLarge {
            size: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

/// Reads and parses a bounded JSON snapshot.
fn read_json<T: DeserializeOwned>(path: &Path, kind: &str) -> CliResult<T> {
    let bytes = read_bytes_with_limit(path, MAX_INPUT_BYTES).map_err(|err| match err {
        ReadLimitError::Io(err) => {
            CliError::new(format!("failed to read {kind} from {}: {err}", path.display()))
        }
        ReadLimitError::TooLarge {
            size,
            limit,
        } => CliError::new(format!(
            "{kind} input {} is too large ({size} bytes, limit {limit})",
            path.display()
        )),
    })?;
    parse_json(&bytes, kind).map_err(|err| CliError::new(format!("{err} ({})", path.display())))
}

/// Parses JSON bytes into a snapshot type.
fn parse_json<T: DeserializeOwned>(bytes: &[u8], kind: &str) -> CliResult<T> {
    serde_json::from_slice(bytes)
        .map_err(|err| CliError::new(format!("failed to parse {kind}: {err}")))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a report as canonical JSON or rendered text.
fn emit_report<T: Serialize>(
    format: OutputFormat,
    report: &T,
    render_text: impl FnOnce(&T) -> String,
) -> CliResult<ExitCode> {
    let bytes = match format {
        OutputFormat::Json => canonical_json_line(report)?,
        OutputFormat::Text => render_text(report).into_bytes(),
    };
    write_stdout_bytes(&bytes).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Serializes a value as newline-terminated canonical JSON.
fn canonical_json_line<T: Serialize>(value: &T) -> CliResult<Vec<u8>> {
    let mut bytes = serde_jcs::to_vec(value)
        .map_err(|err| CliError::new(format!("failed to serialize output: {err}")))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output stream failure message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
