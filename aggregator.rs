use indexmap::IndexMap;
use tracing::debug;

use crate::error::AnalyserError;
use crate::types::{Occurrence, WordRecord};

/// Word -> aggregate, kept in first-seen order.
pub type WordTable = IndexMap<String, WordRecord>;

/// Consume the whole occurrence stream into a word table.
pub fn aggregate<I>(occurrences: I) -> Result<WordTable, AnalyserError>
where
    I: IntoIterator<Item = Occurrence>,
{
    let mut table = WordTable::new();
    let events = aggregate_into(&mut table, occurrences);
    debug!("aggregated {} occurrences", events);
    ensure_content(table)
}

/// Fold occurrences into an existing table. Returns how many were consumed.
pub fn aggregate_into<I>(table: &mut WordTable, occurrences: I) -> usize
where
    I: IntoIterator<Item = Occurrence>,
{
    let mut events = 0usize;
    for Occurrence {
        word,
        sentence,
        document,
    } in occurrences
    {
        events += 1;
        table
            .entry(word)
            .or_default()
            .increment(&sentence, &document);
    }
    events
}

/// A table without a single word means nothing was tokenized.
pub fn ensure_content(table: WordTable) -> Result<WordTable, AnalyserError> {
    if table.is_empty() {
        return Err(AnalyserError::EmptyContent);
    }
    debug!("{} distinct words", table.len());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ(word: &str, sentence: &str, document: &str) -> Occurrence {
        Occurrence {
            word: word.into(),
            sentence: sentence.into(),
            document: document.into(),
        }
    }

    #[test]
    fn counts_every_occurrence() {
        let table = aggregate(vec![
            occ("cat", "the cat", "a.txt"),
            occ("cat", "the cat", "a.txt"),
            occ("cat", "a cat", "b.txt"),
            occ("dog", "a dog", "b.txt"),
        ])
        .unwrap();

        let cat = &table["cat"];
        assert_eq!(cat.count, 3);
        assert_eq!(cat.sentences.len(), 2);
        assert_eq!(cat.documents.len(), 2);
        assert_eq!(table["dog"].count, 1);
    }

    #[test]
    fn keeps_first_seen_order() {
        let table = aggregate(vec![
            occ("b", "s", "d"),
            occ("a", "s", "d"),
            occ("b", "s", "d"),
        ])
        .unwrap();
        let keys: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn aggregate_into_accumulates_across_calls() {
        let mut table = WordTable::new();
        assert_eq!(aggregate_into(&mut table, vec![occ("a", "s", "x.txt")]), 1);
        assert_eq!(
            aggregate_into(&mut table, vec![occ("a", "t", "y.txt"), occ("b", "t", "y.txt")]),
            2
        );
        assert_eq!(aggregate_into(&mut table, Vec::new()), 0);

        assert_eq!(table["a"].count, 2);
        assert_eq!(table["a"].documents.len(), 2);
        assert!(ensure_content(table).is_ok());
        assert!(matches!(
            ensure_content(WordTable::new()),
            Err(AnalyserError::EmptyContent)
        ));
    }

    #[test]
    fn empty_stream_is_an_error() {
        let err = aggregate(Vec::new()).unwrap_err();
        assert!(matches!(err, AnalyserError::EmptyContent));
    }
}
