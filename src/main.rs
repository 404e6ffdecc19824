use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use station_stats::{summarize, write_summary, BoundarySearch, EngineConfig, MappedInput};

#[derive(Debug, Parser)]
#[command(version, about = "Per-station min/mean/max over a `station;value` file")]
struct Args {
    /// Input file, one `station;value` pair per line
    #[arg(default_value = "measurements.txt")]
    path: PathBuf,

    /// Worker threads (and chunks); defaults to available parallelism
    #[arg(short, long)]
    threads: Option<usize>,

    /// Fail if a chunk boundary has no newline within this many bytes
    #[arg(long, value_name = "BYTES")]
    lookahead: Option<usize>,

    /// Print elapsed time to stderr after the result
    #[arg(long)]
    timings: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let start = Instant::now();

    let mut config = EngineConfig::default();
    if let Some(threads) = args.threads {
        config = config.with_parallelism(threads)?;
    }
    if let Some(window) = args.lookahead {
        config = config.with_boundary(BoundarySearch::Window(window))?;
    }

    let input = MappedInput::open(&args.path)?;
    info!(
        path = %args.path.display(),
        bytes = input.len(),
        elapsed = ?start.elapsed(),
        "mapped input"
    );

    let rows = summarize(&input, &config)
        .with_context(|| format!("failed to aggregate {}", args.path.display()))?;
    info!(
        stations = rows.len(),
        threads = config.parallelism.get(),
        elapsed = ?start.elapsed(),
        "aggregated"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_summary(&mut out, &rows).context("failed to write result")?;
    writeln!(out)?;
    out.flush()?;

    if args.timings {
        eprintln!("Elapsed: {:?}", start.elapsed());
    }
    Ok(())
}
