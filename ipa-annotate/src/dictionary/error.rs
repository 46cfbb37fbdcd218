//! Dictionary-related errors.
use smol_str::SmolStr;

/// The only error raised while resolving a language's dictionary.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DictionaryError {
    /// No usable dictionary exists for the language
    #[error("Dictionary not found: {language}")]
    NotFound {
        /// The requested language code
        language: SmolStr,
        /// Why the dictionary could not be resolved
        #[source]
        source: SourceError,
    },
}

impl DictionaryError {
    pub(crate) fn not_found(language: &str, source: SourceError) -> DictionaryError {
        DictionaryError::NotFound {
            language: language.into(),
            source,
        }
    }

    /// The language code the failed request was made for.
    pub fn language(&self) -> &str {
        match self {
            DictionaryError::NotFound { language, .. } => language,
        }
    }
}

/// Causes of a [`DictionaryError::NotFound`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SourceError {
    /// The source does not offer this language
    #[error("Unknown language")]
    Unknown,

    /// Dictionary data missing or unreadable
    #[error("I/O error reading dictionary")]
    Io(#[from] std::io::Error),

    /// Dictionary data is not a valid dictionary document
    #[error("Failed to parse dictionary document")]
    Parse(#[from] serde_json::Error),
}
