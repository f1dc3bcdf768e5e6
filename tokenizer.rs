use std::collections::HashSet;

use crate::config::ExclusionPolicy;
use crate::types::Occurrence;

/// Lazily split one lowercased document into word occurrences.
///
/// Sentences end at every `.`; words are whitespace-separated and lose a
/// single trailing comma. Exclusion is checked against the raw token, so
/// `"the,"` survives an exclusion entry `"the"`.
pub fn tokenize<'a>(
    text: &'a str,
    document: &'a str,
    excluded: &'a HashSet<String>,
    policy: ExclusionPolicy,
) -> impl Iterator<Item = Occurrence> + 'a {
    text.split('.').flat_map(move |raw_sentence| {
        let sentence = raw_sentence.trim();
        raw_sentence
            .split_whitespace()
            .take_while(move |token| {
                policy != ExclusionPolicy::TruncateSentence || !excluded.contains(*token)
            })
            .filter(move |token| !excluded.contains(*token))
            .map(move |token| Occurrence {
                word: token.strip_suffix(',').unwrap_or(token).to_string(),
                sentence: sentence.to_string(),
                document: document.to_string(),
            })
    })
}
