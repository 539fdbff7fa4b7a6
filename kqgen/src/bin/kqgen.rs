use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

use kqgen::generator::{self, GeneratorConfig};

const EXPECTED_ARGS: usize = 3;

/// Writes a shuffled workload of `k` inserts and `q` range queries.
#[derive(Parser, Debug)]
#[command(long_about = None, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Number of insert commands.
    num_of_inserts: usize,

    /// Number of range-query commands.
    num_of_queries: usize,

    /// File the workload is written to; truncated if it exists. May start with `-`.
    #[arg(allow_hyphen_values = true)]
    out_filename: PathBuf,
}

impl From<&Args> for GeneratorConfig {
    fn from(args: &Args) -> Self {
        GeneratorConfig::new(args.num_of_inserts, args.num_of_queries)
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the usage line or the summary.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<_> = std::env::args_os().collect();
    if argv.len() != EXPECTED_ARGS + 1 {
        let program = argv
            .first()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "kqgen".to_string());
        println!("Usage: {program} <num_of_inserts> <num_of_queries> <out_filename>");
        std::process::exit(1);
    }

    let args = Args::parse_from(argv);
    let config = GeneratorConfig::from(&args);

    let mut rng = StdRng::from_entropy();
    let workload = generator::generate(&config, &mut rng)?;
    info!("Workload of {} commands generated.", workload.len());

    workload.save(&args.out_filename)?;

    println!(
        "Generated {} inserts and {} queries in '{}'.",
        args.num_of_inserts,
        args.num_of_queries,
        args.out_filename.display()
    );

    Ok(())
}
