use anyhow::{Context, Result};
use std::io::{self, BufWriter, Write};
use tracing::info;

use kqgen::reference::expected_answers;
use kqgen::workload::Workload;

/// Reads a workload from stdin and prints the answer to every range query, one per line, as an
/// ordered set would produce them.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(io::stderr)
        .init();

    let input = io::read_to_string(io::stdin()).context("Failed to read workload from stdin")?;
    let workload: Workload = input.parse()?;
    info!(
        "Replaying {} inserts and {} queries.",
        workload.insert_count(),
        workload.query_count()
    );

    let mut out = BufWriter::new(io::stdout().lock());
    for answer in expected_answers(&workload) {
        writeln!(out, "{answer}")?;
    }
    out.flush()?;

    Ok(())
}
