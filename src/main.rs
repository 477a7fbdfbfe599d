//! plcsnap - Content-addressed snapshots of PLC automation projects.
//!
//! Usage:
//!   plcsnap export <PROJECT> -o <DIR>   Export a project into a snapshot directory
//!   plcsnap inspect <PROJECT>           Show what a project contains
//!   plcsnap --help                      Show help

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use plcsnap_core::{ExportConfig, Mnemonic};
use plcsnap_export::{ExportReport, Exporter};
use plcsnap_load::{Credentials, JsonProjectLoader, ProjectLoader};

#[derive(Parser)]
#[command(
    name = "plcsnap",
    version,
    about = "Content-addressed snapshots of PLC automation projects",
    long_about = "plcsnap exports an automation project into a directory of XML files \
                  whose names and hashes stay stable between runs, so the snapshot \
                  can be committed and diffed."
)]
struct Cli {
    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export a project into a snapshot directory
    Export {
        /// Project description to export
        project: PathBuf,

        /// Snapshot directory (created if absent)
        #[arg(short, long)]
        output: PathBuf,

        /// User name for protected projects
        #[arg(short, long)]
        username: Option<String>,

        /// Password for protected projects
        #[arg(short, long, env = "PLCSNAP_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Mnemonic convention for program code
        #[arg(short, long, default_value = "english")]
        language: Language,

        /// Skip the device connection manifest
        #[arg(long)]
        no_manifest: bool,

        /// Output format of the report
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a summary of a project without exporting it
    Inspect {
        /// Project description to inspect
        project: PathBuf,

        /// User name for protected projects
        #[arg(short, long)]
        username: Option<String>,

        /// Password for protected projects
        #[arg(short, long, env = "PLCSNAP_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Language {
    English,
    German,
}

impl From<Language> for Mnemonic {
    fn from(language: Language) -> Self {
        match language {
            Language::English => Mnemonic::English,
            Language::German => Mnemonic::German,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Export {
            project,
            output,
            username,
            password,
            language,
            no_manifest,
            format,
        } => {
            let config = ExportConfig::builder()
                .output_root(output)
                .language(Mnemonic::from(language))
                .write_manifest(!no_manifest)
                .build()
                .context("Invalid export configuration")?;
            let credentials = Credentials::from_parts(username, password);
            run_export(&project, config, credentials, format)?;
        }
        Command::Inspect {
            project,
            username,
            password,
            format,
        } => {
            let credentials = Credentials::from_parts(username, password);
            run_inspect(&project, credentials, format)?;
        }
    }

    Ok(())
}

/// Send logs to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load and export a project, then print the report.
fn run_export(
    project: &Path,
    config: ExportConfig,
    credentials: Option<Credentials>,
    format: OutputFormat,
) -> Result<()> {
    eprintln!(
        "Exporting {} to {}...",
        project.display(),
        config.output_root.display()
    );

    let exporter = Exporter::new(config);
    let report = exporter
        .run(&JsonProjectLoader::new(), project, credentials)
        .context("Export failed")?;

    match format {
        OutputFormat::Text => print_report(&report, exporter.config().output_root.as_path()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn print_report(report: &ExportReport, output: &Path) {
    println!();
    println!("{}", "─".repeat(60));
    println!(" {}", output.display());
    println!(
        " {} items, {} files in {:.2}s",
        report.items,
        report.total_files(),
        report.duration.as_secs_f64()
    );
    println!("{}", "─".repeat(60));

    for (category, count) in &report.files {
        println!(" {:<10} {:>6}", category.to_string(), count);
    }
    if let Some(devices) = report.devices {
        println!(" {:<10} {:>6}", "devices", devices);
    }

    if report.has_warnings() {
        println!();
        println!("{} warning(s) during export", report.warnings.len());
        for warning in &report.warnings {
            println!("   {}: {}", warning.entity, warning.message);
        }
    }
}

/// Load a project and print its statistics.
fn run_inspect(
    project: &Path,
    credentials: Option<Credentials>,
    format: OutputFormat,
) -> Result<()> {
    let loaded = JsonProjectLoader::new()
        .load(project, credentials)
        .context("Failed to load project")?;
    let stats = loaded.stats();

    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", "─".repeat(60));
            println!(" {} ({} mnemonics)", project.display(), loaded.language);
            println!("{}", "─".repeat(60));
            println!(" {:<16} {:>6}", "stations", stats.stations);
            println!(" {:<16} {:>6}", "cpus", stats.cpus);
            println!(" {:<16} {:>6}", "cps", stats.cps);
            println!(" {:<16} {:>6}", "symbol tables", stats.symbol_tables);
            println!(" {:<16} {:>6}", "block folders", stats.block_folders);
            println!(" {:<16} {:>6}", "blocks", stats.blocks);
            println!(" {:<16} {:>6}", "source folders", stats.source_folders);
            println!(" {:<16} {:>6}", "sources", stats.sources);
            println!(" {:<16} {:>6}", "master systems", stats.master_systems);
            println!(" {:<16} {:>6}", "folders", stats.folders);
            println!(" {:<16} {:>6}", "max depth", stats.max_depth);

            let stations: Vec<_> = loaded.stations().map(|s| s.name.as_str()).collect();
            if !stations.is_empty() {
                println!();
                println!(" Stations: {}", stations.join(", "));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }

    Ok(())
}
