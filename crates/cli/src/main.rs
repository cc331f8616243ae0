use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use data_loader::{EventLog, ListenerId};
use pipeline::{AggregateProfile, ProfileEngine, UserProfile};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// listener-profiles - Listening-behavior summarizer
#[derive(Parser)]
#[command(name = "listener-profiles")]
#[command(about = "Summarize per-listener play behavior and the library-wide mean", long_about = None)]
struct Cli {
    /// Directory containing tracks.csv
    #[arg(short, long, default_value = "source_data")]
    data_dir: PathBuf,

    /// Directory to write live_table.csv and agg_table.csv into
    #[arg(short, long, default_value = "output")]
    out_dir: PathBuf,

    /// Worker threads for the summarization pool (defaults to all cores)
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Explicit execution context for the run; torn down when main returns
    let mut pool_builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = cli.threads {
        pool_builder = pool_builder.num_threads(threads);
    }
    let pool = pool_builder
        .build()
        .context("Failed to build worker thread pool")?;

    let tracks_path = cli.data_dir.join("tracks.csv");
    println!("Loading play log from {}...", tracks_path.display());
    let start = Instant::now();
    let log = EventLog::load_from_file(&tracks_path)
        .context("Failed to load play log")?;
    println!(
        "{} Loaded {} events for {} listeners in {:?}",
        "✓".green(),
        log.event_count(),
        log.listener_count(),
        start.elapsed()
    );

    // Per-listener summaries, in parallel on the scoped pool
    let engine = ProfileEngine::new();
    let profiles = pool
        .install(|| engine.summarize_all(&log))
        .context("Failed to summarize listeners")?;

    // Library-wide means; needs every profile, hence after the pool work
    let just_profiles: Vec<UserProfile> = profiles.iter().map(|(_, p)| *p).collect();
    let aggregate = AggregateProfile::from_profiles(&just_profiles)
        .context("Failed to compute the aggregate profile")?;

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create {}", cli.out_dir.display()))?;

    let live_path = cli.out_dir.join("live_table.csv");
    write_live_table(&live_path, &profiles)
        .with_context(|| format!("Failed to write {}", live_path.display()))?;

    let agg_path = cli.out_dir.join("agg_table.csv");
    write_agg_table(&agg_path, &aggregate)
        .with_context(|| format!("Failed to write {}", agg_path.display()))?;

    println!(
        "{} Wrote {} listener rows to {} and the aggregate to {}",
        "✓".green(),
        profiles.len(),
        live_path.display(),
        agg_path.display()
    );

    Ok(())
}

/// Build a writer with the table format: space-delimited, `|` as the quote
/// character, minimal quoting, no header row.
fn table_writer<W: std::io::Write>(w: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b' ')
        .quote(b'|')
        .has_headers(false)
        .from_writer(w)
}

/// Append one row per listener to `live_table.csv`.
///
/// The file is opened once and the writer held for every row, so rows from
/// one run never interleave mid-line. Append mode keeps earlier runs' rows,
/// matching the live-table semantics.
fn write_live_table(path: &Path, profiles: &[(ListenerId, UserProfile)]) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = table_writer(file);

    for (_, profile) in profiles {
        writer.serialize(profile)?;
    }
    writer.flush()?;
    Ok(())
}

/// Truncate-write the single aggregate row to `agg_table.csv`.
fn write_agg_table(path: &Path, aggregate: &AggregateProfile) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = table_writer(file);

    writer.serialize(aggregate)?;
    writer.flush()?;
    Ok(())
}
