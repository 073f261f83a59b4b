use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

/// TOtal subarray POwer of an integer sequence, modulo 1e9 + 7
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Sequence values
    values: Vec<u32>,

    /// Read whitespace-separated values from a file instead
    #[arg(short, long, value_hint = clap::ValueHint::FilePath, conflicts_with = "values")]
    file: Option<PathBuf>,

    /// Use the O(n^2) reference implementation
    #[arg(long)]
    naive: bool,

    /// Fail unless the result equals this value
    #[arg(short, long)]
    expected: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let values: Vec<u32> = if let Some(path) = &args.file {
        std::fs::read_to_string(path)
            .context(format!("Failed to read {}", path.display()))?
            .split_whitespace()
            .map(|token| {
                token
                    .parse()
                    .context(format!("Invalid sequence value `{token}`"))
            })
            .collect::<anyhow::Result<_>>()?
    } else {
        args.values
    };

    let result = if args.naive {
        total_power::find_total_power_naive(&values)
    } else {
        total_power::find_total_power(&values)
    };
    println!("{result}");

    if let Some(expected) = args.expected {
        if result != expected {
            bail!("Expected {expected}, got {result}");
        }
    }

    Ok(())
}
