//! In-memory dictionary documents, keyed by language code.
use std::io::{Cursor, Read};

use hashbrown::HashMap;
use smol_str::SmolStr;

use super::DictionarySource;
use crate::dictionary::SourceError;

#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    documents: HashMap<SmolStr, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> MemorySource {
        MemorySource::default()
    }

    /// Adds or replaces the document for `language`.
    pub fn insert<L: Into<SmolStr>, B: Into<Vec<u8>>>(&mut self, language: L, document: B) {
        self.documents.insert(language.into(), document.into());
    }

    pub fn with<L: Into<SmolStr>, B: Into<Vec<u8>>>(mut self, language: L, document: B) -> Self {
        self.insert(language, document);
        self
    }
}

impl DictionarySource for MemorySource {
    fn languages(&self) -> std::io::Result<Vec<String>> {
        Ok(self.documents.keys().map(|k| k.to_string()).collect())
    }

    fn open(&self, language: &str) -> Result<Box<dyn Read + Send + '_>, SourceError> {
        match self.documents.get(language) {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
            None => Err(SourceError::Unknown),
        }
    }
}
