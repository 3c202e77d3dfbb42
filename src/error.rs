use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalorieError {
    #[error("Unable to read input from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid integer on line {line}: {content:?} ({reason})")]
    Parse {
        line: usize,
        content: String,
        reason: LineError,
    },

    #[error("Total of group {group} overflows")]
    GroupOverflow { group: usize },

    #[error("Sum of the top {n} totals overflows")]
    SelectionOverflow { n: usize },
}

/// Why a non-blank line was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    #[error("not an integer")]
    NotAnInteger,

    #[error("out of range")]
    OutOfRange,
}
