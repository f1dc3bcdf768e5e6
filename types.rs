use indexmap::IndexSet;
use serde::Serialize;

/// One tokenization event: a word seen in a sentence of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub word: String,
    pub sentence: String,
    pub document: String,
}

/// Aggregate for a single word.
///
/// `count` counts every occurrence, while the sets keep each distinct
/// sentence and document once, so `count` may exceed both set sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    pub count: usize,
    pub sentences: IndexSet<String>,
    pub documents: IndexSet<String>,
}

impl WordRecord {
    pub fn increment(&mut self, sentence: &str, document: &str) {
        self.count += 1;
        self.sentences.insert(sentence.to_string());
        self.documents.insert(document.to_string());
    }
}

/// A word and its aggregate, as emitted by the ranker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedWord {
    pub word: String,
    #[serde(flatten)]
    pub record: WordRecord,
}
