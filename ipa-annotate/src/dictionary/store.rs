use std::sync::Arc;

use hashbrown::HashMap;
use itertools::Itertools;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use smol_str::SmolStr;

use super::document::RawDocument;
use super::error::{DictionaryError, SourceError};
use super::LanguageDictionary;
use crate::lang::LanguagePolicy;
use crate::source::DictionarySource;

/// Loads dictionaries from a [`DictionarySource`] on first use and keeps them
/// for the lifetime of the store.
///
/// Builds are serialized, so each language is parsed at most once; readers of
/// already cached languages are never blocked by a build in progress.
pub struct DictionaryStore<S> {
    source: S,
    cache: RwLock<HashMap<SmolStr, Arc<LanguageDictionary>>>,
}

impl<S: DictionarySource> DictionaryStore<S> {
    pub fn new(source: S) -> DictionaryStore<S> {
        DictionaryStore {
            source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Language codes offered by the source, sorted. Empty if discovery fails.
    pub fn list_languages(&self) -> Vec<String> {
        match self.source.languages() {
            Ok(languages) => languages.into_iter().sorted().dedup().collect(),
            Err(e) => {
                log::warn!("Failed to list languages: {}", e);
                vec![]
            }
        }
    }

    /// Returns the cached dictionary for `language`, building it on first use.
    ///
    /// Repeated calls return the same `Arc`.
    pub fn load(&self, language: &str) -> Result<Arc<LanguageDictionary>, DictionaryError> {
        if let Some(dict) = self.cache.read().get(language) {
            log::trace!("cache hit: {}", language);
            return Ok(Arc::clone(dict));
        }

        let cache = self.cache.upgradable_read();

        // Another caller may have finished building while we waited.
        if let Some(dict) = cache.get(language) {
            return Ok(Arc::clone(dict));
        }

        let dict = Arc::new(self.build(language)?);

        let mut cache = RwLockUpgradableReadGuard::upgrade(cache);
        cache.insert(SmolStr::new(language), Arc::clone(&dict));

        Ok(dict)
    }

    /// Looks up one word. `Ok(None)` means the word is blank or the
    /// dictionary has no entry for it.
    pub fn lookup(&self, language: &str, word: &str) -> Result<Option<SmolStr>, DictionaryError> {
        let word = word.trim();
        if word.is_empty() {
            return Ok(None);
        }

        let dict = self.load(language)?;
        Ok(dict.lookup(word).cloned())
    }

    /// Whether `language` has already been loaded.
    pub fn is_cached(&self, language: &str) -> bool {
        self.cache.read().contains_key(language)
    }

    fn build(&self, language: &str) -> Result<LanguageDictionary, DictionaryError> {
        let policy = LanguagePolicy::for_language(language);

        let reader = self
            .source
            .open(language)
            .map_err(|e| DictionaryError::not_found(language, e))?;
        let document = RawDocument::from_reader(reader)
            .map_err(|e| DictionaryError::not_found(language, SourceError::Parse(e)))?;

        if document.skipped > 0 {
            log::warn!(
                "{}: skipped {} entries with non-string values",
                language,
                document.skipped
            );
        }

        let dict = LanguageDictionary::from_document(document, policy);
        log::debug!(
            "Loaded dictionary {}: {} entries, max key length {}",
            language,
            dict.len(),
            dict.max_key_len()
        );

        Ok(dict)
    }
}
