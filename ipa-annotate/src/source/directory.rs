//! Dictionaries stored as `<code>.json` files in one directory.
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::DictionarySource;
use crate::config::StoreConfig;
use crate::constants::DICTIONARY_EXT;
use crate::dictionary::SourceError;

#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: Into<PathBuf>>(root: P) -> DirectorySource {
        DirectorySource { root: root.into() }
    }

    pub fn from_config(config: &StoreConfig) -> DirectorySource {
        DirectorySource::new(config.dictionary_dir.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the dictionary file for `language`, or `None` if the code
    /// could escape the dictionary directory.
    pub fn dictionary_path(&self, language: &str) -> Option<PathBuf> {
        if !is_plain_code(language) {
            return None;
        }
        Some(self.root.join(format!("{language}.{DICTIONARY_EXT}")))
    }
}

fn is_plain_code(language: &str) -> bool {
    !language.is_empty()
        && language != "."
        && language != ".."
        && !language.contains(|c| matches!(c, '/' | '\\' | '\0'))
}

impl DictionarySource for DirectorySource {
    fn languages(&self) -> std::io::Result<Vec<String>> {
        // globwalk silently yields nothing for a missing base directory.
        if !self.root.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("dictionary directory {} not found", self.root.display()),
            ));
        }

        let pattern = format!("*.{DICTIONARY_EXT}");
        let walker = globwalk::GlobWalkerBuilder::new(&self.root, &pattern)
            .max_depth(1)
            .follow_links(true)
            .build()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

        // Symlinks are followed, as in `open`.
        Ok(walker
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect())
    }

    fn open(&self, language: &str) -> Result<Box<dyn Read + Send + '_>, SourceError> {
        let path = self.dictionary_path(language).ok_or(SourceError::Unknown)?;
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}
