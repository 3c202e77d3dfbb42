use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    error::CalorieError,
    group::{make_groups, InvalidLinePolicy},
    input::read_lines,
    total::{group_totals, top_n_total},
};

#[derive(Parser, Debug)]
#[command(about = "Sums the largest calorie groups of a puzzle input")]
pub struct Args {
    /// Puzzle input, `-` for standard input
    #[arg(default_value = "input.txt")]
    pub input: PathBuf,

    /// How many of the largest group totals to add up
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// What to do with lines that aren't integers
    #[arg(long, value_enum, default_value_t = InvalidLinePolicy::Fatal)]
    pub on_invalid: InvalidLinePolicy,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Logs go to stderr so stdout only ever holds the answer.
pub fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("calorie_counting=debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("calorie_counting=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

pub fn run(args: &Args, default_top: usize) -> Result<i64, CalorieError> {
    let top = args.top.unwrap_or(default_top);
    info!(input = %args.input.display(), top, policy = ?args.on_invalid, "counting calories");

    let lines = read_lines(&args.input)?;
    let groups = make_groups(lines.into_iter(), args.on_invalid)?;
    let totals = group_totals(&groups)?;
    debug!(?totals, "group totals");

    top_n_total(&totals, top)
}
