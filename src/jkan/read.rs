//! Loading dataset records from a directory of JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::record::DatasetRecord;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Cannot list dataset directory `{}`: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid dataset record in `{}`: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads and parses a single dataset file.
pub fn read_dataset(path: &Path) -> Result<DatasetRecord, ReadError> {
    let data = fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ReadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Lists the regular files of `dir`, sorted by file name.
///
/// Directory iteration order is filesystem dependent; sorting keeps the
/// output of repeated runs identical.
pub fn dataset_paths(dir: &Path) -> Result<Vec<PathBuf>, ReadError> {
    let read_dir_err = |source| ReadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        } else {
            debug!("Skipping non-file entry {}", path.display());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Reads every dataset file in `dir`.
///
/// Stops at the first file that cannot be read or parsed.
pub fn read_datasets(dir: &Path) -> Result<Vec<(PathBuf, DatasetRecord)>, ReadError> {
    let mut datasets = Vec::new();
    for path in dataset_paths(dir)? {
        let record = read_dataset(&path)?;
        debug!("Loaded dataset `{}` from {}", record.basename, path.display());
        datasets.push((path, record));
    }
    Ok(datasets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_path(relative_path: &str) -> PathBuf {
        Path::new("tests/fixtures").join(relative_path)
    }

    #[test]
    fn test_read_dataset() {
        let record = read_dataset(&fixture_path("datasets/campus-buildings.json")).unwrap();
        assert_eq!(record.basename, "campus-buildings");
        assert_eq!(record.organization, "Facilities Management");
    }

    #[test]
    fn test_read_datasets_sorted() {
        let datasets = read_datasets(&fixture_path("datasets")).unwrap();
        let names: Vec<_> = datasets
            .iter()
            .map(|(path, _)| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(datasets.len(), 3);
    }

    #[test]
    fn test_read_dataset_missing_field_names_file() {
        let path = fixture_path("invalid/missing-basename.json");
        let err = read_dataset(&path).unwrap_err();
        assert!(matches!(err, ReadError::Json { .. }));
        assert!(err.to_string().contains("missing-basename.json"));
    }

    #[test]
    fn test_read_dataset_missing_file() {
        let err = read_dataset(&fixture_path("datasets/does-not-exist.json")).unwrap_err();
        assert!(matches!(err, ReadError::Io { .. }));
    }

    #[test]
    fn test_read_datasets_missing_dir() {
        let err = read_datasets(&fixture_path("no-such-dir")).unwrap_err();
        assert!(matches!(err, ReadError::ReadDir { .. }));
    }

    #[test]
    fn test_dataset_paths_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();

        let paths = dataset_paths(dir.path()).unwrap();
        assert_eq!(paths, vec![dir.path().join("a.json"), dir.path().join("b.json")]);
    }
}
