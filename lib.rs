//! Word frequency reports over a directory of plain-text documents.
//!
//! The pipeline runs in one pass: every `.txt` file is tokenized into
//! (word, sentence, document) occurrences, the occurrences are folded into a
//! per-word table, and the table is ranked by descending count.

pub mod aggregator;
pub mod config;
pub mod corpus;
pub mod error;
pub mod ranker;
pub mod report;
pub mod tokenizer;
pub mod types;

use tracing::debug;

pub use config::{AnalysisConfig, ExclusionPolicy, OutputFormat};
pub use error::AnalyserError;
pub use types::{Occurrence, RankedWord, WordRecord};

/// Run the whole analysis and return at most `config.limit` ranked words.
pub fn analyse(config: &AnalysisConfig) -> Result<Vec<RankedWord>, AnalyserError> {
    let excluded = corpus::load_exclusions(config.exclusion_file.as_deref())?;
    let paths = corpus::scan_dir(&config.dir)?;
    let documents = paths
        .iter()
        .map(|p| corpus::load_document(p))
        .collect::<Result<Vec<_>, _>>()?;

    let mut table = aggregator::WordTable::new();
    for doc in &documents {
        let occurrences =
            tokenizer::tokenize(&doc.text, &doc.name, &excluded, config.exclusion_policy);
        let tokens = aggregator::aggregate_into(&mut table, occurrences);
        debug!("{}: {} tokens", doc.name, tokens);
    }
    let table = aggregator::ensure_content(table)?;

    Ok(ranker::top_n(ranker::rank(table), config.limit))
}

/// Validate a raw result size, then run [`analyse`] with it.
/// The size is checked before any file is touched.
pub fn analyse_with_size(
    raw_size: &str,
    mut config: AnalysisConfig,
) -> Result<Vec<RankedWord>, AnalyserError> {
    config.limit = ranker::parse_size(raw_size)?;
    analyse(&config)
}
