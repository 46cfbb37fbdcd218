//! Whole-word lookup for space-delimited languages.
use super::Span;
use crate::dictionary::LanguageDictionary;
use crate::tokenizer::{Run, Tokenize};

/// Annotates each word run with its dictionary entry. Non-word runs are
/// emitted verbatim without a transcription.
pub fn annotate_words(text: &str, dict: &LanguageDictionary) -> Vec<Span> {
    text.word_runs()
        .map(|(_, run)| match run {
            Run::Word(word) => Span {
                text: word.into(),
                transcription: dict.lookup(word).cloned(),
            },
            Run::Other(other) => Span::plain(other),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::RawEntry;
    use crate::lang::LanguagePolicy;

    fn dict(language: &str, pairs: &[(&str, &str)]) -> LanguageDictionary {
        LanguageDictionary::from_entries(
            pairs.iter().map(|(k, v)| RawEntry {
                key: k.to_string(),
                value: v.to_string(),
            }),
            LanguagePolicy::for_language(language),
        )
    }

    #[test]
    fn punctuation_and_space_form_one_span() {
        let d = dict("en_US", &[("hello", "/həˈɫoʊ/"), ("world", "/ˈwɝɫd/")]);
        assert_eq!(
            annotate_words("hello, world!", &d),
            vec![
                Span::annotated("hello", "/həˈɫoʊ/"),
                Span::plain(", "),
                Span::annotated("world", "/ˈwɝɫd/"),
                Span::plain("!"),
            ]
        );
    }

    #[test]
    fn case_folded_lookup_keeps_original_text() {
        let d = dict("en_US", &[("the", "/ðə/")]);
        assert_eq!(annotate_words("THE", &d), vec![Span::annotated("THE", "/ðə/")]);
    }

    #[test]
    fn no_folding_for_other_languages() {
        let d = dict("de", &[("Hund", "/hʊnt/")]);
        assert_eq!(
            annotate_words("Hund hund", &d),
            vec![
                Span::annotated("Hund", "/hʊnt/"),
                Span::plain(" "),
                Span::plain("hund")
            ]
        );
    }

    #[test]
    fn apostrophes_are_part_of_words() {
        let d = dict("en_US", &[("don't", "/ˈdoʊnt/")]);
        assert_eq!(
            annotate_words("Don't!", &d),
            vec![Span::annotated("Don't", "/ˈdoʊnt/"), Span::plain("!")]
        );
    }

    #[test]
    fn newline_runs() {
        let d = dict("en_US", &[("a", "/ə/")]);
        assert_eq!(
            annotate_words("a\na.\n", &d),
            vec![
                Span::annotated("a", "/ə/"),
                Span::plain("\n"),
                Span::annotated("a", "/ə/"),
                Span::plain(".\n"),
            ]
        );
    }
}
