use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort an analysis run. None of them leave partial output behind.
#[derive(Debug, Error)]
pub enum AnalyserError {
    #[error("result size '{0}' is not a number, please type a non-negative integer")]
    InvalidSize(String),
    #[error("no .txt files in {} to process", .0.display())]
    NoFilesFound(PathBuf),
    #[error("all your files are empty, nothing to process")]
    EmptyContent,
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AnalyserError {
    /// Process exit status for this failure kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            AnalyserError::Io { .. } => 1,
            AnalyserError::InvalidSize(_) => 3,
            AnalyserError::NoFilesFound(_) => 4,
            AnalyserError::EmptyContent => 5,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AnalyserError::Io {
            path: path.into(),
            source,
        }
    }
}
