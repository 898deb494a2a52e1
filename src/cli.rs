use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

use crate::api::{self, Components};
use crate::log::ActivityLogger;
use crate::tools::fallback::extract_fallback_images;
use crate::tools::fetch::FetchStrategy;
use crate::tools::insertions::{classify_insertions, InsertionOverrides};
use crate::tools::settings::{extract_settings, PageSettings};
use crate::{ApiResponse, ExtractOptions};

#[derive(Parser)]
#[command(name = "lpseq", version, about = "Swipe page content sequences (JSON only)")]
pub struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a page and print its verified content sequence
    Extract(ExtractArgs),
    /// Parse the settings payload of saved markup (stdin when FILE is omitted)
    Settings { file: Option<PathBuf> },
    /// Run the plain image scan over saved markup
    Fallback {
        base_url: String,
        file: Option<PathBuf>,
    },
    /// Show the activity log, newest first
    Logs(LogsArgs),
}

#[derive(Args)]
struct ExtractArgs {
    url: String,
    #[arg(long, value_enum, default_value = "adaptive")]
    strategy: StrategyArg,
    #[arg(long = "probe-timeout-ms")]
    probe_timeout_ms: Option<u64>,
    #[arg(long = "probe-concurrency")]
    probe_concurrency: Option<usize>,
    /// Trust inferred image URLs without probing them
    #[arg(long = "no-verify")]
    no_verify: bool,
    /// Deadline for the whole call
    #[arg(long = "timeout-ms")]
    timeout_ms: Option<u64>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum StrategyArg {
    Fast,
    Adaptive,
}

impl From<StrategyArg> for FetchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Fast => FetchStrategy::Fast,
            StrategyArg::Adaptive => FetchStrategy::Adaptive,
        }
    }
}

#[derive(Args)]
struct LogsArgs {
    #[arg(long)]
    errors: bool,
    #[arg(long)]
    host: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SettingsReport {
    settings: PageSettings,
    overrides: InsertionOverrides,
}

pub fn run() {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Extract(args) => extract_cmd(args),
        Command::Settings { file } => finish_any(settings_cmd(file)),
        Command::Fallback { base_url, file } => {
            finish_any(read_markup(file).map(|html| extract_fallback_images(&html, &base_url)))
        }
        Command::Logs(LogsArgs { errors, host }) => finish(
            ActivityLogger::new().and_then(|logger| logger.read_logs(host.as_deref(), errors)),
        ),
    }
}

fn extract_cmd(args: ExtractArgs) {
    let mut opts = ExtractOptions::new()
        .with_fetch_strategy(args.strategy.into())
        .with_verify_images(!args.no_verify);
    if let Some(ms) = args.probe_timeout_ms {
        opts = opts.with_probe_timeout(Duration::from_millis(ms));
    }
    if let Some(n) = args.probe_concurrency {
        opts = opts.with_probe_concurrency(n);
    }
    if let Some(ms) = args.timeout_ms {
        opts = opts.with_call_timeout(Duration::from_millis(ms));
    }

    let components = match Components::from_options(opts) {
        Ok(c) => c,
        Err(e) => return print_json(ApiResponse::<()>::err(e.to_string())),
    };
    finish(crate::runtime::block_on(api::extract_content_sequence_with(
        &args.url,
        &components,
    )));
}

fn settings_cmd(file: Option<PathBuf>) -> anyhow::Result<SettingsReport> {
    let html = read_markup(file)?;
    let settings = extract_settings(&html).context("no usable settings payload")?;
    let overrides = classify_insertions(&settings.insertions);
    Ok(SettingsReport {
        settings,
        overrides,
    })
}

fn read_markup(file: Option<PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading markup from stdin")?;
            Ok(buf)
        }
    }
}

fn finish<T: Serialize>(res: crate::Result<T>) {
    match res {
        Ok(v) => print_json(ApiResponse::ok(v)),
        Err(e) => print_json(ApiResponse::<()>::err(e.to_string())),
    }
}

fn finish_any<T: Serialize>(res: anyhow::Result<T>) {
    match res {
        Ok(v) => print_json(ApiResponse::ok(v)),
        Err(e) => print_json(ApiResponse::<()>::err(format!("{e:#}"))),
    }
}

fn print_json<T: Serialize>(val: T) {
    match serde_json::to_string_pretty(&val) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("failed to render output: {e}"),
    }
}
