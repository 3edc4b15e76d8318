use std::path::PathBuf;

use clap::Parser;
use miette::*;

use aoc2025_day_7::{read_lines, solve_part_b};

#[derive(Parser, Debug)]
#[command(about = "Day 7, part 2: tachyon manifold")]
struct Args {
    /// Puzzle input, one manifold row per line
    #[arg(default_value = "input2.txt")]
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    let lines = read_lines(&args.input)?;
    let result = solve_part_b(&lines)?;
    println!("Result: {}", result);
    Ok(())
}
