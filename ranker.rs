use std::cmp::Reverse;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::aggregator::WordTable;
use crate::error::AnalyserError;
use crate::types::RankedWord;

static SIZE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Parse a requested result size. Digit strings too large for `usize` clamp to `usize::MAX`.
pub fn parse_size(raw: &str) -> Result<usize, AnalyserError> {
    if !SIZE_REGEX.is_match(raw) {
        return Err(AnalyserError::InvalidSize(raw.to_string()));
    }
    Ok(raw.parse().unwrap_or(usize::MAX))
}

/// Sort by descending count. Equal counts keep first-seen order.
pub fn rank(table: WordTable) -> Vec<RankedWord> {
    table
        .into_iter()
        .sorted_by_key(|(_, record)| Reverse(record.count))
        .map(|(word, record)| RankedWord { word, record })
        .collect()
}

/// The first `n` ranked words, or all of them when fewer exist.
pub fn top_n(mut ranked: Vec<RankedWord>, n: usize) -> Vec<RankedWord> {
    ranked.truncate(n);
    ranked
}
