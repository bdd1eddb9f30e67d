use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{error, warn};

use crate::error::{AccessError, Op};

const READ_BUFFER_SIZE: usize = 512;

/// Result of a control file access: the sentinel value the caller acts on,
/// plus the diagnostic for whatever went wrong, if anything did.
#[derive(Debug)]
pub struct Outcome<T> {
    pub value: T,
    pub diagnostic: Option<AccessError>,
}

impl<T> Outcome<T> {
    fn ok(value: T) -> Self {
        Outcome { value, diagnostic: None }
    }

    fn failed(value: T, err: AccessError) -> Self {
        log_failure(&err);
        Outcome { value, diagnostic: Some(err) }
    }
}

fn log_failure(err: &AccessError) {
    match err {
        AccessError::NotFound { .. } => warn!("{}", err),
        AccessError::Io { .. } => error!("{}", err),
    }
}

/// Overwrites `path` with `value`. The file must already exist; it is never created.
/// `value` is true only when the write itself went through.
pub fn write_value(path: impl AsRef<Path>, value: &str) -> Outcome<bool> {
    let path = path.as_ref();
    let mut file = match OpenOptions::new().write(true).truncate(true).open(path) {
        Ok(file) => file,
        Err(e) => return Outcome::failed(false, AccessError::from_io(Op::Open, path.to_path_buf(), e)),
    };
    // the handle is closed when `file` drops, on both paths below
    match file.write_all(value.as_bytes()) {
        Ok(()) => Outcome::ok(true),
        Err(e) => Outcome::failed(false, AccessError::from_io(Op::Write, path.to_path_buf(), e)),
    }
}

/// Reads the first line of `path` without its terminator.
/// Missing, unreadable and empty files all read as `None`.
pub fn read_first_line(path: impl AsRef<Path>) -> Outcome<Option<String>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return Outcome::failed(None, AccessError::from_io(Op::Open, path.to_path_buf(), e)),
    };
    let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Outcome::ok(None),
        Ok(_) => {
            // a line ends at "\n", "\r\n" or a bare "\r"
            if let Some(end) = line.find(['\r', '\n']) {
                line.truncate(end);
            }
            Outcome::ok(Some(line))
        }
        Err(e) => Outcome::failed(None, AccessError::from_io(Op::Read, path.to_path_buf(), e)),
    }
}

/// A control file at a fixed path, queried fresh on every access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlFile {
    path: PathBuf,
}

impl ControlFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ControlFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, value: &str) -> Outcome<bool> {
        write_value(&self.path, value)
    }

    pub fn read_first_line(&self) -> Outcome<Option<String>> {
        read_first_line(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn write_then_read_returns_same_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("brightness");
        fs::write(&path, "0").unwrap();

        let written = write_value(&path, "100");
        assert!(written.value);
        assert!(written.diagnostic.is_none());

        let read = read_first_line(&path);
        assert_eq!(read.value.as_deref(), Some("100"));
        assert!(read.diagnostic.is_none());
    }

    #[test]
    fn write_truncates_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("brightness");
        fs::write(&path, "100\n").unwrap();

        assert!(write_value(&path, "0").value);
        assert_eq!(fs::read_to_string(&path).unwrap(), "0");
    }

    #[test]
    fn write_does_not_create_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("brightness");

        let outcome = write_value(&path, "100");
        assert!(!outcome.value);
        assert!(outcome.diagnostic.unwrap().is_not_found());
        assert!(!path.exists());
    }

    #[test]
    fn write_to_directory_reports_io_error() {
        let dir = tempdir().unwrap();

        let outcome = write_value(dir.path(), "100");
        assert!(!outcome.value);
        assert!(matches!(outcome.diagnostic, Some(AccessError::Io { op: Op::Open, .. })));
    }

    #[test]
    fn read_missing_file_is_absent() {
        let dir = tempdir().unwrap();

        let outcome = read_first_line(dir.path().join("nope"));
        assert_eq!(outcome.value, None);
        assert!(outcome.diagnostic.unwrap().is_not_found());
    }

    #[test]
    fn read_strips_one_terminator_and_stops_at_first_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("brightness");

        fs::write(&path, "100\nignored\n").unwrap();
        assert_eq!(read_first_line(&path).value.as_deref(), Some("100"));

        fs::write(&path, "100\r\n").unwrap();
        assert_eq!(read_first_line(&path).value.as_deref(), Some("100"));

        fs::write(&path, " 100 \n").unwrap();
        assert_eq!(read_first_line(&path).value.as_deref(), Some(" 100 "));
    }

    #[test]
    fn read_empty_file_is_absent_without_diagnostic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("brightness");
        fs::write(&path, "").unwrap();

        let outcome = read_first_line(&path);
        assert_eq!(outcome.value, None);
        assert!(outcome.diagnostic.is_none());
    }

    #[test]
    fn read_directory_is_absent_with_diagnostic() {
        let dir = tempdir().unwrap();

        let outcome = read_first_line(dir.path());
        assert_eq!(outcome.value, None);
        assert!(outcome.diagnostic.is_some());
    }

    #[test]
    fn control_file_uses_its_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("brightness");
        fs::write(&path, "0").unwrap();
        let control = ControlFile::new(&path);

        assert_eq!(control.path(), path.as_path());
        assert!(control.write("100").value);
        assert_eq!(control.read_first_line().value.as_deref(), Some("100"));
    }
}
