//! Delimited Text Writers
//!
//! Each call opens the file, writes, and closes it again. Open and write
//! failures are returned as [`TrackSimError::Backup`] with the offending path.

use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::error::{Result, TrackSimError};

/// Column names of a backup file, in the order episode rows are written
pub const SAVED_VALUES_NAMES: [&str; 3] = ["score", "computational_cost", "nb_calls"];

pub const DEFAULT_SEPARATOR: &str = ",";

/// How a writer opens its output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Replace any previous content
    #[default]
    Truncate,
    /// Add after the existing content
    Append,
}

fn open(output_path: &Path, mode: WriteMode) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Truncate => options.write(true).truncate(true),
        WriteMode::Append => options.append(true),
    };
    options.open(output_path)
}

fn backup_error(output_path: &Path, source: std::io::Error) -> TrackSimError {
    TrackSimError::Backup {
        path: output_path.display().to_string(),
        source,
    }
}

/// Write `v` as one line: values in order, `separator` between them, no
/// trailing separator, newline-terminated
pub fn save_vector<T: Display, P: AsRef<Path>>(
    v: &[T],
    output_path: P,
    separator: &str,
    mode: WriteMode,
) -> Result<()> {
    let output_path = output_path.as_ref();
    let file = open(output_path, mode).map_err(|e| backup_error(output_path, e))?;
    let mut writer = BufWriter::new(file);

    let write_line = |writer: &mut BufWriter<File>| -> std::io::Result<()> {
        for (i, value) in v.iter().enumerate() {
            if i > 0 {
                writer.write_all(separator.as_bytes())?;
            }
            write!(writer, "{}", value)?;
        }
        writeln!(writer)?;
        writer.flush()
    };
    write_line(&mut writer).map_err(|e| backup_error(output_path, e))
}

/// Write every inner sequence of `m` with [`save_vector`], in order, under
/// one mode
pub fn save_matrix<T: Display, P: AsRef<Path>>(
    m: &[Vec<T>],
    output_path: P,
    separator: &str,
    mode: WriteMode,
) -> Result<()> {
    let output_path = output_path.as_ref();
    for line in m {
        save_vector(line, output_path, separator, mode)?;
    }
    debug!(rows = m.len(), path = %output_path.display(), "matrix written");
    Ok(())
}

/// Truncate `output_path` and write the header line `names`
pub fn initialize_backup<P: AsRef<Path>>(
    names: &[&str],
    output_path: P,
    separator: &str,
) -> Result<()> {
    save_vector(names, output_path, separator, WriteMode::Truncate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_vector_line_format() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("v.csv");

        save_vector(&[1.5, 2.0, 3.25], &out, ";", WriteMode::Truncate).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "1.5;2;3.25\n");
    }

    #[test]
    fn test_truncate_replaces_and_append_extends() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("modes.csv");

        save_vector(&["a", "b"], &out, ",", WriteMode::Truncate).unwrap();
        save_vector(&["c", "d"], &out, ",", WriteMode::Append).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "a,b\nc,d\n");

        save_vector(&["e"], &out, ",", WriteMode::Truncate).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "e\n");
    }

    #[test]
    fn test_empty_vector_writes_blank_line() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.csv");

        save_vector::<f64, _>(&[], &out, ",", WriteMode::Truncate).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "\n");
    }

    #[test]
    fn test_header_then_matrix() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("results.csv");

        initialize_backup(&SAVED_VALUES_NAMES, &out, DEFAULT_SEPARATOR).unwrap();
        let rows = vec![vec![5.0, 0.25, 120.0], vec![7.0, 0.5, 168.0]];
        save_matrix(&rows, &out, DEFAULT_SEPARATOR, WriteMode::Append).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(
            content,
            "score,computational_cost,nb_calls\n5,0.25,120\n7,0.5,168\n"
        );
        for line in content.lines().skip(1) {
            assert_eq!(line.matches(',').count(), 2);
            assert!(!line.ends_with(','));
        }
    }

    #[test]
    fn test_header_resets_previous_results() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("rerun.csv");

        initialize_backup(&SAVED_VALUES_NAMES, &out, ",").unwrap();
        save_matrix(&[vec![1, 2, 3]], &out, ",", WriteMode::Append).unwrap();
        initialize_backup(&SAVED_VALUES_NAMES, &out, ",").unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_open_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("x.csv");

        let err = save_vector(&[1], &out, ",", WriteMode::Append).unwrap_err();
        match err {
            TrackSimError::Backup { path, .. } => assert!(path.ends_with("x.csv")),
            other => panic!("unexpected error: {}", other),
        }
    }
}
