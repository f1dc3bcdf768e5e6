use std::io::{self, Write};

use itertools::Itertools;

use crate::config::OutputFormat;
use crate::types::RankedWord;

/// `(word, {doc, ...}, {sentence, ...})`
pub fn format_line(entry: &RankedWord) -> String {
    format!(
        "({}, {{{}}}, {{{}}})",
        entry.word,
        entry.record.documents.iter().join(", "),
        entry.record.sentences.iter().join(", ")
    )
}

pub fn write_report<W: Write>(
    out: &mut W,
    entries: &[RankedWord],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in entries {
                writeln!(out, "{}", format_line(entry))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordRecord;

    fn entry() -> RankedWord {
        let mut record = WordRecord::default();
        record.increment("the cat sat", "a.txt");
        record.increment("the dog ran", "a.txt");
        RankedWord {
            word: "the".into(),
            record,
        }
    }

    #[test]
    fn text_line_lists_documents_then_sentences() {
        assert_eq!(
            format_line(&entry()),
            "(the, {a.txt}, {the cat sat, the dog ran})"
        );
    }

    #[test]
    fn json_report_carries_counts() {
        let mut buf = Vec::new();
        write_report(&mut buf, &[entry()], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["word"], "the");
        assert_eq!(value[0]["count"], 2);
        assert_eq!(value[0]["documents"][0], "a.txt");
        assert_eq!(value[0]["sentences"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn empty_text_report_prints_nothing() {
        let mut buf = Vec::new();
        write_report(&mut buf, &[], OutputFormat::Text).unwrap();
        assert!(buf.is_empty());
    }
}
