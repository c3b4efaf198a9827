use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use jlpt_vocab::{io, report, Pipeline, PipelineConfig};

/// Build a deduplicated, JLPT-level-tagged vocabulary list by segmenting
/// words with kagome.
#[derive(Parser, Debug)]
#[command(name = "jlpt-vocab", version)]
struct Args {
    /// Input CSV file with `word,level` rows
    input: PathBuf,

    /// Output CSV file (overwritten if present)
    output: PathBuf,

    /// Number of words sent to kagome per invocation
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u64).range(1..))]
    chunk_size: u64,

    /// Path to the kagome binary
    #[arg(long, default_value = "kagome")]
    kagome_path: String,

    /// Kagome tokenization mode (normal, search, extended)
    #[arg(long)]
    mode: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jlpt_vocab=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let mut config = PipelineConfig::default()
        .with_chunk_size(args.chunk_size as usize)
        .with_kagome_path(args.kagome_path);
    if let Some(mode) = args.mode {
        config = config.with_mode(mode);
    }

    let entries = io::load_entries(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    println!("Read {} rows from {}", entries.len(), args.input.display());

    let map = Pipeline::kagome(&config).run(&entries);
    let rows = report::sorted_rows(&map);

    io::write_rows(&args.output, &rows)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("Wrote {} unique words to {}", rows.len(), args.output.display());

    println!("\nWords per level:");
    for (level, count) in report::level_counts(&rows).iter().rev() {
        println!("  Level {level}: {count} words");
    }

    Ok(())
}
