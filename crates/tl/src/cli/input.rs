//! Loading ratings and teachers from JSON files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tl_core::{Rating, Teacher};
use tracing::debug;

/// Errors raised while reading an input file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not a JSON array of the expected records.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path to the file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Reads a JSON array of records from `path`.
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, InputError> {
    let contents = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<T> =
        serde_json::from_str(&contents).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), records = records.len(), "loaded input");
    Ok(records)
}

/// Reads ratings from a JSON file.
pub fn load_ratings(path: &Path) -> Result<Vec<Rating>, InputError> {
    read_records(path)
}

/// Reads teachers from a JSON file.
pub fn load_teachers(path: &Path) -> Result<Vec<Teacher>, InputError> {
    read_records(path)
}

#[cfg(test)]
mod tests {
    use tl_core::{Id, Tier};

    use super::*;

    #[test]
    fn reads_ratings_with_aliases() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ratings.json");
        fs::write(
            &path,
            r#"[{"id": "r1", "teacher": 3, "tier": "T2", "created_at": "2025-03-01T08:00:00Z"}]"#,
        )
        .unwrap();

        let ratings = load_ratings(&path).unwrap();
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].teacher_id, Id::Number(3));
        assert_eq!(ratings[0].tier, Tier::T2);
        assert!(ratings[0].reason.is_empty());
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_teachers(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teachers.json");
        fs::write(&path, r#"{"id": 1}"#).unwrap();

        let err = load_teachers(&path).unwrap_err();
        assert!(matches!(err, InputError::Parse { .. }));
    }
}
