//! Input loading: one integer reading per line

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

use crate::{LoadError, Readings};

/// How to treat a line that is not a base-10 integer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Substitute 0 and keep going
    #[default]
    Lenient,
    /// Abort loading at the first bad line
    Strict,
}

impl ParseMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict { ParseMode::Strict } else { ParseMode::Lenient }
    }
}

/// Load readings from a file on disk
pub fn load_readings(path: impl AsRef<Path>, mode: ParseMode) -> Result<Readings, LoadError> {
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?mode, "Opened input file");

    // The handle is dropped on return, including the error paths below.
    read_readings(BufReader::new(file), mode).map_err(|err| match err {
        LoadError::Io(source) => LoadError::Read {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Load readings from any buffered reader
///
/// I/O failures are reported as [`LoadError::Io`]; [`load_readings`] attaches
/// the file path to them.
pub fn read_readings(reader: impl BufRead, mode: ParseMode) -> Result<Readings, LoadError> {
    let mut values = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(value) = parse_line(idx + 1, &line, mode)? {
            values.push(value);
        }
    }

    debug!(count = values.len(), "Loaded readings");
    Ok(Readings::from(values))
}

/// Parse readings from an in-memory string
pub fn parse_readings(text: &str, mode: ParseMode) -> Result<Readings, LoadError> {
    read_readings(text.as_bytes(), mode)
}

/// Blank lines yield `None`
fn parse_line(line_no: usize, line: &str, mode: ParseMode) -> Result<Option<i64>, LoadError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<i64>() {
        Ok(value) => Ok(Some(value)),
        Err(source) => match mode {
            ParseMode::Lenient => {
                warn!(line = line_no, value = trimmed, "Unparseable reading, substituting 0");
                Ok(Some(0))
            }
            ParseMode::Strict => Err(LoadError::Parse {
                line: line_no,
                value: trimmed.to_string(),
                source,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_load_sweep_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("input.txt");
        fs::write(&path, "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n").unwrap();

        let readings = load_readings(&path, ParseMode::Lenient).unwrap();
        assert_eq!(readings.len(), 10);
        assert_eq!(readings.as_slice()[0], 199);
        assert_eq!(readings.as_slice()[9], 263);
    }

    #[test]
    fn test_load_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("input.txt");
        fs::write(&path, "").unwrap();

        let readings = load_readings(&path, ParseMode::Strict).unwrap();
        assert!(readings.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.txt");

        let err = load_readings(&path, ParseMode::Lenient).unwrap_err();
        assert!(err.is_missing_input());
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_load_invalid_utf8_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("binary.txt");
        fs::write(&path, [b'1', b'\n', 0xff, 0xfe, b'\n']).unwrap();

        let err = load_readings(&path, ParseMode::Lenient).unwrap_err();
        match err {
            LoadError::Read { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_reader_failure_has_no_path() {
        let err = read_readings(Cursor::new(vec![0xff, b'\n']), ParseMode::Lenient).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));

        let msg = err.to_string();
        assert!(msg.starts_with("Failed to read input: "), "unexpected message: {msg}");
        assert!(!msg.contains("file"));
    }

    #[test]
    fn test_lenient_substitutes_zero() {
        let readings = parse_readings("5\nabc\n7\n", ParseMode::Lenient).unwrap();
        assert_eq!(readings.as_slice(), &[5, 0, 7]);
    }

    #[test]
    fn test_strict_reports_line() {
        let err = parse_readings("5\n6\nabc\n7\n", ParseMode::Strict).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let readings = parse_readings("1\n\n   \n2\n", ParseMode::Strict).unwrap();
        assert_eq!(readings.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let err = parse_readings("1\n\nx\n", ParseMode::Strict).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_crlf_and_padding() {
        let readings = read_readings(Cursor::new("10\r\n -4 \r\n+3\r\n"), ParseMode::Strict).unwrap();
        assert_eq!(readings.as_slice(), &[10, -4, 3]);
    }

    #[test]
    fn test_missing_trailing_newline() {
        let readings = read_readings(Cursor::new("1\n2\n3"), ParseMode::Strict).unwrap();
        assert_eq!(readings.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_out_of_range_is_a_parse_failure() {
        let readings = parse_readings("99999999999999999999\n", ParseMode::Lenient).unwrap();
        assert_eq!(readings.as_slice(), &[0]);

        let err = parse_readings("99999999999999999999\n", ParseMode::Strict).unwrap_err();
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn test_parse_mode_from_strict() {
        assert_eq!(ParseMode::from_strict(true), ParseMode::Strict);
        assert_eq!(ParseMode::from_strict(false), ParseMode::Lenient);
        assert_eq!(ParseMode::default(), ParseMode::Lenient);
    }
}
