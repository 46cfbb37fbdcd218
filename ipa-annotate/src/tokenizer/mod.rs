//! Splitting text into word and non-word runs.
//!
//! A word character is an ASCII letter or digit, `_` or `'`. Everything else,
//! including whitespace, punctuation, newlines and non-ASCII letters, belongs
//! to non-word runs. Runs are maximal, never empty, and concatenate back to
//! the input.
pub mod case_handling;

/// One maximal run of word or non-word characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run<'a> {
    Word(&'a str),
    Other(&'a str),
}

impl<'a> Run<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Run::Word(s) | Run::Other(s) => s,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Run::Word(_))
    }
}

#[inline(always)]
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '\''
}

/// Iterator over `(byte offset, run)` pairs.
#[derive(Debug, Clone)]
pub struct WordRuns<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> WordRuns<'a> {
    pub fn new(text: &'a str) -> WordRuns<'a> {
        WordRuns { text, offset: 0 }
    }
}

impl<'a> Iterator for WordRuns<'a> {
    type Item = (usize, Run<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.offset..];
        let first = rest.chars().next()?;
        let word = is_word_char(first);

        let len = rest
            .find(|c: char| is_word_char(c) != word)
            .unwrap_or(rest.len());
        let start = self.offset;
        let slice = &rest[..len];
        self.offset += len;

        let run = if word {
            Run::Word(slice)
        } else {
            Run::Other(slice)
        };
        Some((start, run))
    }
}

impl<'a> std::iter::FusedIterator for WordRuns<'a> {}

pub trait Tokenize {
    fn word_runs(&self) -> WordRuns;
    fn words(&self) -> Words;
}

impl Tokenize for str {
    fn word_runs(&self) -> WordRuns {
        WordRuns::new(self)
    }

    fn words(&self) -> Words {
        Words(WordRuns::new(self))
    }
}

/// Only the word runs of a text.
#[derive(Debug, Clone)]
pub struct Words<'a>(WordRuns<'a>);

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.0.by_ref().find_map(|(_, run)| match run {
            Run::Word(w) => Some(w),
            Run::Other(_) => None,
        })
    }
}
