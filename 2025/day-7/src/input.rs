use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ManifoldError;

/// Reads `path` into its lines, in order, without line terminators.
///
/// Blank lines (trailing ones included) are kept as empty strings; it is up to
/// the loader to decide what they mean.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, ManifoldError> {
    let path = path.as_ref();
    let io_err = |source| ManifoldError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err)?;

    tracing::debug!(count = lines.len(), "read input lines");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn keeps_order_and_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, ".S.\r\n...\n\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec![".S.", "...", ""]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_lines(&path).unwrap_err();
        assert!(matches!(err, ManifoldError::Io { path: p, .. } if p == path));
    }
}
