use anyhow::Context;
use clap::Parser;
use kmer_clumps::ClumpConfig;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Find k-mers forming clumps in a genome.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input file; its first line is the raw genome
    #[arg(short, long)]
    input: PathBuf,

    /// K-mer length (<= 14)
    #[arg(short = 'k', long, default_value_t = 9)]
    k: usize,

    /// Window length L
    #[arg(short = 'L', long, default_value_t = 500)]
    window: usize,

    /// Minimum occurrences t within one window
    #[arg(short = 't', long, default_value_t = 3)]
    threshold: usize,
}

fn init_trace() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn read_genome(path: &Path) -> anyhow::Result<String> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .with_context(|| format!("failed to read {}", path.display()))?;
    line.truncate(line.trim_end().len());
    Ok(line)
}

fn main() -> anyhow::Result<()> {
    init_trace();
    let args = Args::parse();

    let cfg = ClumpConfig::default()
        .with_k(args.k)
        .with_window(args.window)
        .with_threshold(args.threshold);

    let genome = read_genome(&args.input)?;
    info!(len = genome.len(), path = %args.input.display(), "loaded genome");

    let clumps = cfg
        .find(genome.as_bytes())
        .with_context(|| format!("clump finding failed for {}", args.input.display()))?;

    let line: Vec<&str> = clumps.iter().map(String::as_str).collect();
    println!("{}", line.join(" "));
    println!("Clumps count: {}", clumps.len());
    info!(
        k = cfg.k(),
        window = cfg.window(),
        threshold = cfg.threshold(),
        clumps = clumps.len(),
        "done"
    );

    Ok(())
}
