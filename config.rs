use std::path::PathBuf;

use clap::ValueEnum;

pub const DEFAULT_RESULT_SIZE: &str = "10"; // top-N when no size is given
pub const TEXT_EXTENSION: &str = "txt"; // only files with this extension are scanned

/// What the tokenizer does when it meets an excluded word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExclusionPolicy {
    /// Drop the excluded word and the rest of its sentence.
    #[default]
    #[value(name = "truncate")]
    TruncateSentence,
    /// Drop only the excluded word.
    #[value(name = "skip")]
    SkipWord,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Resolved settings for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Directory scanned (non-recursively) for documents.
    pub dir: PathBuf,
    /// Number of top-ranked words to keep.
    pub limit: usize,
    /// Optional file listing words to exclude.
    pub exclusion_file: Option<PathBuf>,
    pub exclusion_policy: ExclusionPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            limit: 10,
            exclusion_file: None,
            exclusion_policy: ExclusionPolicy::default(),
        }
    }
}
