//! Pronunciation dictionaries and their process-wide cache.
use hashbrown::HashMap;
use smol_str::SmolStr;

use crate::constants::VARIANT_SEPARATOR;
use crate::lang::LanguagePolicy;
use crate::tokenizer::case_handling::fold_key;

pub mod document;
pub mod error;
mod store;

pub use self::document::{RawDocument, RawEntry};
pub use self::error::{DictionaryError, SourceError};
pub use self::store::DictionaryStore;

/// Normalized `key -> transcription` table for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageDictionary {
    entries: HashMap<SmolStr, SmolStr>,
    max_key_len: usize,
    case_fold: bool,
}

impl LanguageDictionary {
    /// Builds the normalized table from raw entries.
    ///
    /// Only the first of several comma-separated variants is kept. Keys are
    /// lowercased when the policy folds case; the maximum key length is
    /// measured in characters on the keys as written.
    pub fn from_entries<I>(entries: I, policy: LanguagePolicy) -> LanguageDictionary
    where
        I: IntoIterator<Item = RawEntry>,
    {
        let mut dict = LanguageDictionary {
            case_fold: policy.case_fold,
            ..LanguageDictionary::default()
        };

        for RawEntry { key, value } in entries {
            dict.max_key_len = dict.max_key_len.max(key.chars().count());
            let key = fold_key(&key, policy.case_fold);
            dict.entries.insert(key, first_variant(&value));
        }

        dict
    }

    pub fn from_document(document: RawDocument, policy: LanguagePolicy) -> LanguageDictionary {
        LanguageDictionary::from_entries(document.entries, policy)
    }

    /// Exact lookup of an already normalized key.
    #[inline(always)]
    pub fn get(&self, key: &str) -> Option<&SmolStr> {
        self.entries.get(key)
    }

    /// Looks up a word after applying this dictionary's case policy.
    pub fn lookup(&self, word: &str) -> Option<&SmolStr> {
        if self.case_fold {
            self.entries.get(fold_key(word, true).as_str())
        } else {
            self.entries.get(word)
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Longest key, in characters, as written in the source document.
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn case_fold(&self) -> bool {
        self.case_fold
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bulk access to the normalized table.
    pub fn entries(&self) -> &HashMap<SmolStr, SmolStr> {
        &self.entries
    }
}

fn first_variant(value: &str) -> SmolStr {
    match value.split_once(VARIANT_SEPARATOR) {
        Some((first, _)) => SmolStr::new(first.trim()),
        None => SmolStr::new(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::LanguageClass;

    const FOLD: LanguagePolicy = LanguagePolicy {
        class: LanguageClass::TokenBoundary,
        case_fold: true,
    };

    fn raw(pairs: &[(&str, &str)]) -> Vec<RawEntry> {
        pairs
            .iter()
            .map(|(k, v)| RawEntry {
                key: k.to_string(),
                value: v.to_string(),
            })
            .collect()
    }

    #[test]
    fn keeps_first_variant() {
        let dict = LanguageDictionary::from_entries(
            raw(&[("with", "/ˈwɪð/, /ˈwɪθ/"), ("a", " /ə/ , /eɪ/")]),
            LanguagePolicy::DEFAULT,
        );
        assert_eq!(dict.get("with").map(|s| s.as_str()), Some("/ˈwɪð/"));
        assert_eq!(dict.get("a").map(|s| s.as_str()), Some("/ə/"));
    }

    #[test]
    fn single_variant_is_kept_verbatim() {
        // Without the comma-space separator the value is not trimmed or split.
        let dict = LanguageDictionary::from_entries(
            raw(&[("x", " /x/ "), ("y", "/a/,/b/")]),
            LanguagePolicy::DEFAULT,
        );
        assert_eq!(dict.get("x").map(|s| s.as_str()), Some(" /x/ "));
        assert_eq!(dict.get("y").map(|s| s.as_str()), Some("/a/,/b/"));
    }

    #[test]
    fn folds_keys_when_policy_says_so() {
        let dict = LanguageDictionary::from_entries(raw(&[("The", "/ðə/")]), FOLD);
        assert!(dict.contains_key("the"));
        assert!(!dict.contains_key("The"));
        assert_eq!(dict.lookup("THE").map(|s| s.as_str()), Some("/ðə/"));

        let dict = LanguageDictionary::from_entries(raw(&[("Hund", "/hʊnt/")]), LanguagePolicy::DEFAULT);
        assert!(dict.contains_key("Hund"));
        assert!(dict.lookup("hund").is_none());
    }

    #[test]
    fn last_write_wins() {
        let dict = LanguageDictionary::from_entries(raw(&[("The", "/ðiː/"), ("the", "/ðə/")]), FOLD);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("the").map(|s| s.as_str()), Some("/ðə/"));
    }

    #[test]
    fn max_key_len_counts_characters() {
        let dict = LanguageDictionary::from_entries(
            raw(&[("东", "/tʊŋ/"), ("东西", "/tʊŋ ɕi/"), ("ab", "/ab/")]),
            LanguagePolicy::DEFAULT,
        );
        assert_eq!(dict.max_key_len(), 2);
        assert_eq!(LanguageDictionary::default().max_key_len(), 0);
    }

    #[test]
    fn max_key_len_uses_unfolded_keys() {
        // U+0130 lowercases to two characters.
        let dict = LanguageDictionary::from_entries(raw(&[("İ", "/i/")]), FOLD);
        assert_eq!(dict.max_key_len(), 1);
        assert!(dict.contains_key("i\u{307}"));
    }
}
