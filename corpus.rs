use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::TEXT_EXTENSION;
use crate::error::AnalyserError;

/// A text file loaded for tokenization.
#[derive(Debug, Clone)]
pub struct Document {
    /// Base file name, used as the document identifier.
    pub name: String,
    /// Full lowercased content.
    pub text: String,
}

/// Collect `.txt` files directly inside `dir`, sorted by path. Hidden files are skipped.
pub fn scan_dir(dir: &Path) -> Result<Vec<PathBuf>, AnalyserError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| AnalyserError::io(dir, e))?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!("skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|p| p.is_file() && !is_hidden(p))
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some(TEXT_EXTENSION))
        .collect();

    if paths.is_empty() {
        return Err(AnalyserError::NoFilesFound(dir.to_path_buf()));
    }
    paths.sort();
    info!("found {} text files in {}", paths.len(), dir.display());
    Ok(paths)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

/// Read a file as UTF-8 (BOM stripped, invalid bytes replaced) and lowercase it.
pub fn read_lowercased(path: &Path) -> Result<String, AnalyserError> {
    let bytes = fs::read(path).map_err(|e| AnalyserError::io(path, e))?;
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
    if had_errors {
        warn!("{} is not valid UTF-8, replacing bad bytes", path.display());
    }
    Ok(text.to_lowercase())
}

pub fn load_document(path: &Path) -> Result<Document, AnalyserError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let text = read_lowercased(path)?;
    debug!("loaded {} ({} bytes)", name, text.len());
    Ok(Document { name, text })
}

/// Load the exclusion list: whitespace-separated words, lowercased.
pub fn load_exclusions(path: Option<&Path>) -> Result<HashSet<String>, AnalyserError> {
    let Some(path) = path else {
        return Ok(HashSet::new());
    };
    let words: HashSet<String> = read_lowercased(path)?
        .split_whitespace()
        .map(str::to_string)
        .collect();
    debug!("loaded {} excluded words from {}", words.len(), path.display());
    Ok(words)
}
