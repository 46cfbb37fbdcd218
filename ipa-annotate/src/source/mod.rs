//! Where raw dictionary documents come from.
//!
//! A [`DictionarySource`] hands out one byte stream per language code and
//! enumerates the codes it knows about. The store never touches the
//! filesystem directly.
use std::io::Read;

use crate::dictionary::SourceError;

pub mod directory;
pub mod memory;

pub use self::directory::DirectorySource;
pub use self::memory::MemorySource;

pub trait DictionarySource: Send + Sync {
    /// Language codes offered by this source, in no particular order.
    fn languages(&self) -> std::io::Result<Vec<String>>;

    /// Opens the raw dictionary document for `language`.
    fn open(&self, language: &str) -> Result<Box<dyn Read + Send + '_>, SourceError>;
}

impl<S: DictionarySource + ?Sized> DictionarySource for Box<S> {
    fn languages(&self) -> std::io::Result<Vec<String>> {
        (**self).languages()
    }

    fn open(&self, language: &str) -> Result<Box<dyn Read + Send + '_>, SourceError> {
        (**self).open(language)
    }
}
