//! Turning text into annotated spans.
use std::borrow::Cow;
use std::sync::Arc;

use crate::constants::MAX_TEXT_LEN;
use crate::dictionary::{DictionaryError, DictionaryStore};
use crate::lang::{LanguageClass, LanguagePolicy};
use crate::source::DictionarySource;

mod longest_match;
mod span;
mod word;

pub use self::longest_match::longest_match;
pub use self::span::Span;
pub use self::word::annotate_words;

/// Annotates text using dictionaries from a shared [`DictionaryStore`].
pub struct Annotator<S> {
    store: Arc<DictionaryStore<S>>,
}

impl<S> Clone for Annotator<S> {
    fn clone(&self) -> Self {
        Annotator {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: DictionarySource> Annotator<S> {
    pub fn new(store: Arc<DictionaryStore<S>>) -> Annotator<S> {
        Annotator { store }
    }

    pub fn store(&self) -> &DictionaryStore<S> {
        &self.store
    }

    /// Splits `text` into spans annotated from `language`'s dictionary.
    ///
    /// Line endings are normalized to `\n` and the text is capped at
    /// 50,000 characters before tokenization. The spans concatenate to the
    /// normalized, capped text.
    pub fn annotate(&self, language: &str, text: &str) -> Result<Vec<Span>, DictionaryError> {
        let text = normalize_line_endings(text);
        let text = truncate_chars(&text, MAX_TEXT_LEN);

        let policy = LanguagePolicy::for_language(language);
        let dict = self.store.load(language)?;

        let spans = match policy.class {
            LanguageClass::ScriptBoundary => longest_match(text, &dict),
            LanguageClass::TokenBoundary => annotate_words(text, &dict),
        };

        log::trace!("{}: {} spans", language, spans.len());
        Ok(spans)
    }
}

/// Converts `\r\n` and lone `\r` to `\n`.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// The prefix of `text` holding at most `max` characters.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
