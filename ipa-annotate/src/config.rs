//! Store configuration.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one `<code>.json` dictionary per language.
    pub dictionary_dir: PathBuf,
}

impl StoreConfig {
    pub fn default() -> StoreConfig {
        StoreConfig {
            dictionary_dir: PathBuf::from("json"),
        }
    }
}
