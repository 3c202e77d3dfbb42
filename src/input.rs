use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use tracing::debug;

use crate::error::CalorieError;

pub const STDIN_PATH: &str = "-";

/// Reads the whole input up front, one entry per line. A path of `-` reads
/// standard input instead of a file.
pub fn read_lines(path: &Path) -> Result<Vec<String>, CalorieError> {
    let to_error = |source: io::Error| CalorieError::Io {
        path: path.to_path_buf(),
        source,
    };

    let lines = if path == Path::new(STDIN_PATH) {
        let stdin = io::stdin();
        let lines = read_lines_from(stdin.lock());
        lines.map_err(to_error)?
    } else {
        let file = File::open(path).map_err(to_error)?;
        read_lines_from(BufReader::new(file)).map_err(to_error)?
    };

    debug!(path = %path.display(), lines = lines.len(), "read input");

    Ok(lines)
}

pub fn read_lines_from(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader.lines().collect()
}
