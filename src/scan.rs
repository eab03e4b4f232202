use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Run-directory scan
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("cannot read directory {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("no '{suffix}' files in {dir}")]
    NoMatches { dir: PathBuf, suffix: String },
}

/// List the waveform files of a run directory: plain files whose name ends
/// in `suffix`, sorted by name so plot order is deterministic.
pub fn find_wave_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let read_err = |source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if !entry.path().is_file() {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }

    let names = select_wave_names(names, suffix);
    if names.is_empty() {
        return Err(ScanError::NoMatches {
            dir: dir.to_path_buf(),
            suffix: suffix.to_string(),
        });
    }

    Ok(names.into_iter().map(|name| dir.join(name)).collect())
}

/// Suffix filter + byte-wise sort, separated out so the selection policy is
/// testable without a filesystem.
fn select_wave_names(mut names: Vec<String>, suffix: &str) -> Vec<String> {
    names.retain(|name| name.ends_with(suffix));
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_and_sorts_names() {
        let names = vec![
            "zz.dat".to_string(),
            "notes.txt".to_string(),
            "aa.dat".to_string(),
            "mid.dat".to_string(),
            "dat".to_string(),
        ];
        assert_eq!(
            select_wave_names(names, ".dat"),
            vec!["aa.dat", "mid.dat", "zz.dat"]
        );
    }

    #[test]
    fn empty_selection_when_nothing_matches() {
        let names = vec!["a.csv".to_string(), "b.log".to_string()];
        assert!(select_wave_names(names, ".dat").is_empty());
    }

    #[test]
    fn rejects_non_directory() {
        let err = find_wave_files(Path::new("/nonexistent/waveplot-run"), ".dat").unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory(_)));
    }

    #[test]
    fn scans_a_real_directory() {
        let dir = std::env::temp_dir().join("waveplot-scan-test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("b.dat"), "t v\ns V\n").unwrap();
        fs::write(dir.join("a.dat"), "t v\ns V\n").unwrap();
        fs::write(dir.join("skip.txt"), "").unwrap();

        let files = find_wave_files(&dir, ".dat").unwrap();
        assert_eq!(files, vec![dir.join("a.dat"), dir.join("b.dat")]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn reports_when_no_files_match() {
        let dir = std::env::temp_dir().join("waveplot-scan-empty-test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("readme.md"), "").unwrap();

        let err = find_wave_files(&dir, ".dat").unwrap_err();
        assert!(matches!(err, ScanError::NoMatches { .. }));

        fs::remove_dir_all(&dir).unwrap();
    }
}
