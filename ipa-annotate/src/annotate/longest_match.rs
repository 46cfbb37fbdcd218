//! Greedy leftmost-longest matching for languages written without spaces.
use super::Span;
use crate::dictionary::LanguageDictionary;

/// Scans `text` left to right, emitting the longest dictionary key found at
/// each position, or a single unannotated character when nothing matches.
pub fn longest_match(text: &str, dict: &LanguageDictionary) -> Vec<Span> {
    // Byte offset of every character boundary, including the end.
    let bounds = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect::<Vec<_>>();
    let n = bounds.len() - 1;

    let mut spans = Vec::new();
    let mut i = 0;

    while i < n {
        let start = bounds[i];
        let limit = dict.max_key_len().min(n - i);

        let found = (1..=limit).rev().find_map(|len| {
            let candidate = &text[start..bounds[i + len]];
            dict.get(candidate).map(|ipa| (len, candidate, ipa))
        });

        match found {
            Some((len, candidate, ipa)) => {
                spans.push(Span::annotated(candidate, ipa.clone()));
                i += len;
            }
            None => {
                spans.push(Span::plain(&text[start..bounds[i + 1]]));
                i += 1;
            }
        }
    }

    spans
}
