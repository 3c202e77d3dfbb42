pub mod cli;
pub mod error;
pub mod group;
pub mod input;
pub mod total;

pub use error::{CalorieError, LineError};
pub use group::{make_groups, Group, InvalidLinePolicy};
pub use input::read_lines;
pub use total::{group_totals, max_total, top_n_total, top_three_total};

/// Groups and totals an in-memory input in one go.
pub fn group_totals_from_str(
    input: &str,
    policy: InvalidLinePolicy,
) -> Result<Vec<i64>, CalorieError> {
    group_totals(&make_groups(input.lines(), policy)?)
}
