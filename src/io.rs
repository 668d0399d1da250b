//! Bulk load and save of value files.
//!
//! The format is one signed integer per record, separated by any whitespace
//! (in practice one per line). Saving writes one value per line, creating or
//! truncating the target.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use crate::error::Error;
use crate::error::Result;
use crate::list::OrderedList;

/// Read every value in `path`, in file order, into a new list.
pub fn load(path: impl AsRef<Path>) -> Result<OrderedList> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut list = OrderedList::new();
    let mut tail = None;
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        for token in line.split_whitespace() {
            let value: i64 = token.parse().map_err(|_| Error::Parse {
                path: path.to_path_buf(),
                line: i + 1,
                token: token.to_string(),
            })?;
            tail = Some(list.push_after(tail, value));
        }
    }

    tracing::debug!(path = %path.display(), count = list.len(), "loaded values");
    return Ok(list);
}

/// Like [`load`], but a file that cannot be opened yields an empty list.
///
/// The open failure is logged and handed back so the caller can report it.
/// Read and parse failures after a successful open are also returned with an
/// empty list.
pub fn load_or_empty(path: impl AsRef<Path>) -> (OrderedList, Option<Error>) {
    match load(path.as_ref()) {
        Ok(list) => (list, None),
        Err(err) => {
            tracing::warn!(error = %err, "load failed, continuing with an empty list");
            (OrderedList::new(), Some(err))
        }
    }
}

/// Write the values of `list`, one per line, to `path`.
pub fn save(path: impl AsRef<Path>, list: &OrderedList) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    let mut count = 0usize;
    for value in list.iter() {
        writeln!(out, "{}", value).map_err(write_err)?;
        count += 1;
    }
    out.flush().map_err(write_err)?;

    tracing::debug!(path = %path.display(), count, "saved values");
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("missing.txt")).unwrap_err();
        assert!(err.is_open());
    }

    #[test]
    fn load_or_empty_reports_and_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let (list, err) = load_or_empty(dir.path().join("missing.txt"));
        assert!(list.is_empty());
        assert!(err.is_some_and(|e| e.is_open()));
    }

    #[test]
    fn parse_error_names_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, "1\n2\nthree\n").unwrap();
        match load(&path) {
            Err(Error::Parse { line, token, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "three");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
