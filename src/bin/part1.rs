use calorie_counting::cli::{init_logger, run, Args};

use anyhow::{Context, Result};
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let answer = run(&args, 1).with_context(|| format!("failed on {}", args.input.display()))?;

    println!("{answer}");

    Ok(())
}
