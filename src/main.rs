//! Introscore: rubric scorer CLI for spoken self-introductions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use introscore::config::{load_config, Config, CONFIG_FILENAME};
use introscore::nlp::NlpServices;
use introscore::reporter::{ConsoleReporter, JsonReporter};
use introscore::scorer::{FileReport, RubricEngine};
use introscore::EvaluationRequest;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// Duration assumed for plain-text transcripts when neither the CLI nor the
/// config supplies one.
const DEFAULT_DURATION_SECS: f64 = 52.0;

/// Shortest recording the rubric is calibrated for.
const MIN_DURATION_SECS: f64 = 10.0;

/// Introscore: rubric scorer for spoken self-introductions
#[derive(Parser, Debug)]
#[command(name = "introscore")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Transcript file (.txt or .json) or directory to evaluate (omit when
    /// using a subcommand)
    #[arg(required = true)]
    path: Option<PathBuf>,

    /// Recording duration in seconds for plain-text transcripts
    #[arg(long, short)]
    duration: Option<f64>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Minimum total score (exit 1 if any report is below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (one line per transcript)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (feedback for full-score categories too)
    #[arg(long, short)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Path to config file (default: search .introscorerc.json in current
    /// dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Evaluate directory contents in parallel
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .introscorerc.json with sensible defaults
    Init {
        /// Minimum score threshold (e.g. 70)
        #[arg(long)]
        threshold: Option<u8>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(Commands::Init { threshold, dir }) = args.command {
        return run_init(threshold, dir.as_deref());
    }

    let path = args
        .path
        .clone()
        .context("path required when not using a subcommand")?;

    if let Some(d) = args.duration {
        if d < MIN_DURATION_SECS {
            anyhow::bail!(
                "Duration must be at least {} seconds (got {})",
                MIN_DURATION_SECS,
                d
            );
        }
    }

    // Resolve work directory for config search
    let work_dir = if path.is_file() {
        path.parent().unwrap_or(Path::new("."))
    } else {
        path.as_path()
    };

    // Load config (CLI flags override config file)
    let config =
        load_config(work_dir, args.config.as_deref())?.merge_with_cli(args.threshold, args.duration);
    let default_duration = config
        .default_duration_secs
        .unwrap_or(DEFAULT_DURATION_SECS);

    // Heavy NLP services are built exactly once and shared read-only by
    // every evaluation in this process
    let services = NlpServices::default_stack();
    let engine = RubricEngine::new(&services).with_extra_fillers(config.extra_fillers.clone());

    if args.no_color {
        colored::control::set_override(false);
    }

    if path.is_dir() {
        run_batch(&args, &config, &engine, &path, default_duration)
    } else {
        run_single(&args, &config, &engine, &path, default_duration)
    }
}

fn run_single(
    args: &Args,
    config: &Config,
    engine: &RubricEngine<'_>,
    path: &Path,
    default_duration: f64,
) -> Result<ExitCode> {
    let request = introscore::scorer::engine::load_request(path, default_duration)?;
    if request.transcript.trim().is_empty() {
        anyhow::bail!("Transcript is empty: {}", path.display());
    }
    validate_request(&request)?;

    let report = engine.evaluate(&request)?;

    if args.json {
        let reporter = if args.pretty {
            JsonReporter::new().pretty()
        } else {
            JsonReporter::new()
        };
        println!("{}", reporter.report(&report));
    } else {
        let reporter = console_reporter(args);
        if args.quiet {
            reporter.report_quiet(&path.display().to_string(), &report);
        } else {
            reporter.report(&path.display().to_string(), &report);
        }
    }

    Ok(threshold_exit(config.threshold, &[report.total]))
}

fn run_batch(
    args: &Args,
    config: &Config,
    engine: &RubricEngine<'_>,
    dir: &Path,
    default_duration: f64,
) -> Result<ExitCode> {
    let files = collect_transcript_files(dir);
    if files.is_empty() {
        eprintln!("{}: No transcript files found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let use_parallel = args.parallel || files.len() > 10;
    let outcomes = if use_parallel {
        engine.evaluate_paths_parallel(&files, default_duration)
    } else {
        engine.evaluate_paths(&files, default_duration)
    };

    let mut reports: Vec<FileReport> = Vec::with_capacity(outcomes.len());
    let mut had_errors = false;
    for outcome in outcomes {
        match outcome {
            Ok(report) => reports.push(report),
            Err(e) => {
                had_errors = true;
                eprintln!("{}: {:#}", "Warning".yellow(), e);
            }
        }
    }

    if reports.is_empty() {
        anyhow::bail!("All transcript files failed to evaluate");
    }

    let stats = RubricEngine::aggregate_stats(&reports);

    if args.json {
        let reporter = if args.pretty {
            JsonReporter::new().pretty()
        } else {
            JsonReporter::new()
        };
        println!("{}", reporter.report_with_summary(&reports, &stats));
    } else {
        let reporter = console_reporter(args);
        if args.quiet {
            for file_report in &reports {
                reporter.report_quiet(&file_report.path.display().to_string(), &file_report.report);
            }
        } else {
            reporter.report_many(&reports, &stats);
        }
    }

    if had_errors {
        return Ok(ExitCode::from(2));
    }
    let totals: Vec<u8> = reports.iter().map(|r| r.report.total).collect();
    Ok(threshold_exit(config.threshold, &totals))
}

fn run_init(threshold: Option<u8>, dir: Option<&Path>) -> Result<ExitCode> {
    let dir = dir.unwrap_or(Path::new("."));
    let config_path = dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        anyhow::bail!("Config already exists: {}", config_path.display());
    }

    let starter = Config::starter(threshold);
    let content = serde_json::to_string_pretty(&starter).context("Failed to render config")?;
    std::fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("{} {}", "Created".green(), config_path.display());
    Ok(ExitCode::SUCCESS)
}

fn validate_request(request: &EvaluationRequest) -> Result<()> {
    if request.duration_secs < MIN_DURATION_SECS {
        anyhow::bail!(
            "Duration must be at least {} seconds (got {})",
            MIN_DURATION_SECS,
            request.duration_secs
        );
    }
    Ok(())
}

fn console_reporter(args: &Args) -> ConsoleReporter {
    let mut reporter = ConsoleReporter::new();
    if args.no_color {
        reporter = reporter.without_colors();
    }
    if args.verbose {
        reporter = reporter.verbose();
    }
    reporter
}

fn threshold_exit(threshold: Option<u8>, totals: &[u8]) -> ExitCode {
    match threshold {
        Some(min) if totals.iter().any(|t| *t < min) => ExitCode::from(1),
        _ => ExitCode::SUCCESS,
    }
}

/// Collect transcript files (.txt/.json) under a directory, sorted for
/// stable output order.
fn collect_transcript_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == "txt" || ext == "json")
        })
        .collect();
    files.sort();
    files
}
