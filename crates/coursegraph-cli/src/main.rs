use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use coursegraph_catalog::{CatalogSource, HttpCatalog};
use coursegraph_core::{Config, Report, Severity, Term};
use coursegraph_engine::{read_course_list, write_artifacts, GraphPipeline};

const DEFAULT_CONFIG: &str = "coursegraph.toml";

/// CourseGraph - course prerequisite graphs from the course catalog
#[derive(Parser)]
#[command(name = "coursegraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Course list, one `DEPT NUM [annotation]` per line
    input: PathBuf,

    /// Output file for the edges artifact
    edges_out: PathBuf,

    /// Output file for the nodes artifact
    nodes_out: PathBuf,

    /// Path to config file (default: coursegraph.toml)
    #[arg(short, long, env = "COURSEGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Catalog term (fall or spring)
    #[arg(short, long)]
    term: Option<Term>,

    /// Catalog year
    #[arg(short, long)]
    year: Option<u16>,

    /// Maximum concurrent catalog requests
    #[arg(long)]
    concurrency: Option<usize>,

    /// Also write a JSON diagnostics report
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let config = load_config(&cli)?;

    if cli.verbose {
        eprintln!(
            "{} {} {} catalog at {}",
            "Using".cyan(),
            config.catalog.term,
            config.catalog.year,
            config.catalog.base_url
        );
    }

    let list = read_course_list(&cli.input)
        .with_context(|| format!("Failed to read course list {}", cli.input.display()))?;

    if cli.verbose {
        eprintln!("{} {} courses from {}", "Loaded".cyan(), list.len(), cli.input.display());
    }

    let catalog = HttpCatalog::new(&config.catalog)?;
    tracing::debug!(source = catalog.name(), "catalog client ready");

    let outcome = GraphPipeline::new(&catalog, &config).run(&list).await;

    write_artifacts(&outcome.graph, &cli.edges_out, &cli.nodes_out)?;
    eprintln!("{} {}", "Edges written to:".green(), cli.edges_out.display());
    eprintln!("{} {}", "Nodes written to:".green(), cli.nodes_out.display());

    if let Some(report_path) = &cli.report {
        outcome
            .report
            .save_to_file(report_path)
            .with_context(|| format!("Failed to write report {}", report_path.display()))?;
        eprintln!("{} {}", "Report saved to:".green(), report_path.display());
    }

    print_summary(&outcome.report, cli.verbose);

    Ok(())
}

/// Resolve configuration: explicit file, then ./coursegraph.toml, then
/// defaults, with command-line overrides applied last
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else if Path::new(DEFAULT_CONFIG).exists() {
        Config::from_file(Path::new(DEFAULT_CONFIG))?
    } else {
        if cli.verbose {
            eprintln!("{}", "No config file found, using defaults".yellow());
        }
        Config::default()
    };

    apply_overrides(&mut config, cli);
    config.validate()?;

    Ok(config)
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(term) = cli.term {
        config.catalog.term = term;
    }
    if let Some(year) = cli.year {
        config.catalog.year = year;
    }
    if let Some(concurrency) = cli.concurrency {
        config.catalog.concurrency = concurrency;
    }
}

/// Print run summary
fn print_summary(report: &Report, verbose: bool) {
    let summary = &report.summary;

    println!("\n{}", "=".repeat(60).bright_blue());
    println!("{}", "Course Graph Report".bold().bright_blue());
    println!("{}", "=".repeat(60).bright_blue());
    println!();

    println!("Courses requested: {}", summary.courses_requested);
    println!("Courses resolved:  {}", summary.courses_resolved);
    if summary.courses_skipped() > 0 {
        println!("Courses skipped:   {}", summary.courses_skipped().to_string().yellow());
    }
    println!("Nodes emitted:     {}", summary.nodes_emitted);
    println!("Edges emitted:     {}", summary.edges_emitted);
    println!();

    if summary.warnings > 0 {
        println!("  Warnings: {}", summary.warnings.to_string().yellow());
    } else {
        println!("  Warnings: {}", summary.warnings.to_string().green());
    }
    println!("  Info:     {}", summary.info);
    for (code, count) in report.counts_by_code() {
        println!("    {:<24} {}", code, count);
    }

    // Info diagnostics are routine drops; list them only when asked
    let shown: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| verbose || d.severity == Severity::Warn)
        .collect();

    if !shown.is_empty() {
        println!();
        println!("{}", "Details:".bold());
        for diag in shown {
            let severity_str = match diag.severity {
                Severity::Warn => "WARN".yellow().bold(),
                Severity::Info => "INFO".cyan(),
            };

            println!("  [{}] {}: {}", severity_str, diag.code, diag.message);

            if let Some(loc) = &diag.location {
                println!("    Location: {}", loc);
            }
            if let Some(dropped) = &diag.dropped {
                println!("    Dropped:  {}", dropped);
            }
        }
    }

    println!();
    println!("{}", "=".repeat(60).bright_blue());
}
