use std::{mem, str::FromStr};

use nom::{
    character::complete::{digit1, one_of},
    combinator::{all_consuming, map_res, opt, recognize},
    error::ErrorKind,
    sequence::tuple,
    Finish, IResult,
};
use tracing::{debug, warn};

use crate::error::{CalorieError, LineError};

pub type Group = Vec<i64>;

/// What to do with a non-blank line that isn't an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum InvalidLinePolicy {
    #[default]
    Fatal,
    Skip,
    Warn,
}

fn parse_calories(i: &str) -> IResult<&str, i64> {
    map_res(
        recognize(tuple((opt(one_of("+-")), digit1))),
        FromStr::from_str,
    )(i)
}

pub fn parse_line(line: &str) -> Result<i64, LineError> {
    all_consuming(parse_calories)(line)
        .finish()
        .map(|(_, n)| n)
        .map_err(|e| match e.code {
            // digits matched but didn't fit
            ErrorKind::MapRes => LineError::OutOfRange,
            _ => LineError::NotAnInteger,
        })
}

#[derive(Debug, Default)]
struct Grouping {
    groups: Vec<Group>,
    current: Group,
}

impl Grouping {
    fn close_group(mut self) -> Self {
        self.groups.push(mem::take(&mut self.current));
        self
    }

    // The last group is always closed, even when empty: a trailing blank line
    // therefore yields one extra empty group.
    fn finish(self) -> Vec<Group> {
        self.close_group().groups
    }
}

/// Splits lines into groups at blank lines. There is always one more group
/// than there are blank lines.
pub fn make_groups(
    input: impl Iterator<Item = impl Into<String>>,
    policy: InvalidLinePolicy,
) -> Result<Vec<Group>, CalorieError> {
    let grouping = input
        .enumerate()
        .try_fold(Grouping::default(), |mut grouping, (i, line)| {
            let line: String = line.into();
            let line = line.trim();

            if line.is_empty() {
                return Ok(grouping.close_group());
            }

            match (parse_line(line), policy) {
                (Ok(calories), _) => grouping.current.push(calories),
                (Err(reason), InvalidLinePolicy::Fatal) => {
                    return Err(CalorieError::Parse {
                        line: i + 1,
                        content: line.to_string(),
                        reason,
                    })
                }
                (Err(reason), InvalidLinePolicy::Skip) => {
                    debug!(line = i + 1, content = line, %reason, "skipping invalid line")
                }
                (Err(reason), InvalidLinePolicy::Warn) => {
                    warn!(line = i + 1, content = line, %reason, "skipping invalid line")
                }
            }

            Ok(grouping)
        })?;

    let groups = grouping.finish();
    debug!(groups = groups.len(), "grouped input");

    Ok(groups)
}
