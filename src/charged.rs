//! Charged-word dictionary loading.
//!
//! The dictionary lives in one directory of plain-text files, one word per
//! line. All files are unioned into a single lowercase set, loaded once before
//! any article task spawns and shared read-only for the rest of the run.
//!
//! An unreadable directory or an empty union is a hard failure. Running with a
//! silently empty dictionary would score every article 0.0, which looks like a
//! valid answer and is worse than crashing.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("cannot read charged-word dictionary at {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("charged-word dictionary at {path} contains no words")]
    Empty { path: PathBuf },
}

/// Load every word file under `dir` into one flat set.
///
/// Entries are trimmed and lowercased; blank lines are skipped. Subdirectories
/// are ignored. Fails if the directory or any file in it cannot be read, or if
/// no words remain after trimming.
#[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
pub async fn load_charged_words(dir: &Path) -> Result<HashSet<String>, DictionaryError> {
    let unreadable = |source: std::io::Error| DictionaryError::Unreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir).await.map_err(unreadable)?;
    let mut words = HashSet::new();
    let mut files = 0usize;

    while let Some(entry) = entries.next_entry().await.map_err(unreadable)? {
        let path = entry.path();
        let file_type = entry.file_type().await.map_err(unreadable)?;
        if !file_type.is_file() {
            continue;
        }
        let contents = fs::read_to_string(&path)
            .await
            .map_err(|source| DictionaryError::Unreadable {
                path: path.clone(),
                source,
            })?;
        files += 1;
        words.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_lowercase),
        );
    }

    if words.is_empty() {
        return Err(DictionaryError::Empty {
            path: dir.to_path_buf(),
        });
    }

    info!(files, words = words.len(), "Loaded charged-word dictionary");
    Ok(words)
}
