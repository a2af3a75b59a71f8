//! Whitespace tokenization and corpus loading
//!
//! Corpus words are non-empty strings delimited by spaces, newlines, or
//! the ends of the file. Tokens are case-folded to lowercase before the
//! graph ever sees them; punctuation stays attached to its word.

use crate::errors::{PoetError, Result};
use std::fs;
use std::path::Path;

/// A whitespace tokenizer with lowercase folding
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text into lowercased, whitespace-delimited words.
    ///
    /// No filtering is applied: `"End."` yields the single token `"end."`.
    /// Empty or all-whitespace text yields no tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_lowercase).collect()
    }

    /// Read a corpus file and tokenize its entire contents.
    ///
    /// # Errors
    /// Returns [`PoetError::Io`] naming the path if the file cannot be read.
    pub fn tokenize_file(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|err| PoetError::io(format!("{}: {err}", path.display())))?;
        Ok(self.tokenize(&contents))
    }
}
