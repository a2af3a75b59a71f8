//! Graph-based poetry generation
//!
//! A [`GraphPoet`] derives a word-affinity graph from a corpus of text.
//! Vertices are lowercased words; the weight of the edge w1 -> w2 counts
//! how often w1 is immediately followed by w2 in the corpus.
//!
//! Given an input string, the poet attempts to insert a bridge word
//! between every adjacent pair of input words: a word b such that
//! w1 -> b -> w2 is the maximum-weight two-edge path from w1 to w2 in
//! the affinity graph. Input words keep their original case, bridge
//! words are inserted lowercase, and every pair of adjacent words in
//! the output is separated by a single space.
//!
//! Example: the corpus `"This is a test of the Mugar Omni Theater sound
//! system."` turns the input `"Test the system."` into
//! `"Test of the system."`.

use crate::errors::Result;
use crate::graph::{CorpusGraphBuilder, DirectedGraph};
use crate::nlp::Tokenizer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A bridge word inserted into a generated poem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bridge {
    /// The inserted word, lowercase
    pub word: String,
    /// Index of the input word the bridge was inserted after
    pub position: usize,
    /// Combined weight of the two-edge path through the bridge
    pub weight: u64,
}

/// A graph-based poetry generator
#[derive(Debug, Clone)]
pub struct GraphPoet {
    affinity: DirectedGraph<String>,
    corpus_words: Vec<String>,
}

impl GraphPoet {
    /// Create a poet from a pre-tokenized, lowercased corpus word sequence
    pub fn from_tokens(corpus_words: Vec<String>) -> Self {
        let affinity = CorpusGraphBuilder::from_tokens(corpus_words.iter().cloned());
        Self {
            affinity,
            corpus_words,
        }
    }

    /// Create a poet from corpus text held in memory
    pub fn from_text(corpus: &str) -> Self {
        Self::from_tokens(Tokenizer::new().tokenize(corpus))
    }

    /// Create a poet from a corpus file.
    ///
    /// # Errors
    /// Returns [`crate::PoetError::Io`] if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_tokens(Tokenizer::new().tokenize_file(path)?))
    }

    /// The corpus words, lowercased, in corpus order
    pub fn corpus_words(&self) -> &[String] {
        &self.corpus_words
    }

    /// Read-only access to the derived affinity graph
    pub fn graph(&self) -> &DirectedGraph<String> {
        &self.affinity
    }

    /// Generate a poem from an input string.
    ///
    /// Words of the input keep their original case; inserted bridge words
    /// are lowercase; adjacent output words are separated by exactly one
    /// space, with no leading or trailing whitespace. Empty or
    /// single-word input passes through with no insertion.
    pub fn poem(&self, input: &str) -> String {
        let words: Vec<&str> = input.split_whitespace().collect();
        let mut output: Vec<String> = Vec::with_capacity(words.len() * 2);

        for (i, word) in words.iter().enumerate() {
            output.push((*word).to_string());
            if let Some(next) = words.get(i + 1) {
                if let Some((bridge, _)) = self.best_bridge(word, next) {
                    output.push(bridge);
                }
            }
        }

        output.join(" ")
    }

    /// The bridge words [`poem`](Self::poem) would insert, annotated with
    /// their insertion point and path weight.
    pub fn bridges(&self, input: &str) -> Vec<Bridge> {
        let words: Vec<&str> = input.split_whitespace().collect();
        let mut bridges = Vec::new();

        for (i, pair) in words.windows(2).enumerate() {
            if let Some((word, weight)) = self.best_bridge(pair[0], pair[1]) {
                bridges.push(Bridge {
                    word,
                    position: i,
                    weight,
                });
            }
        }
        bridges
    }

    /// Find the best bridge word between two input words, if any.
    ///
    /// Candidates are words b with corpus edges lower(a) -> b and
    /// b -> lower(b_input). The winner maximizes the combined weight of
    /// the two edges; ties go to the lexicographically smallest
    /// candidate, so selection is deterministic.
    fn best_bridge(&self, a: &str, b: &str) -> Option<(String, u64)> {
        let forward = self.affinity.targets(&a.to_lowercase());
        if forward.is_empty() {
            return None;
        }
        let backward = self.affinity.sources(&b.to_lowercase());
        if backward.is_empty() {
            return None;
        }

        let mut best: Option<(&String, u64)> = None;
        for (candidate, &first_hop) in &forward {
            let Some(&second_hop) = backward.get(candidate) else {
                continue;
            };
            let combined = u64::from(first_hop) + u64::from(second_hop);
            best = match best {
                Some((word, weight))
                    if weight > combined || (weight == combined && word < candidate) =>
                {
                    Some((word, weight))
                }
                _ => Some((candidate, combined)),
            };
        }

        best.map(|(word, weight)| (word.clone(), weight))
    }
}

/// Renders the affinity graph as one `source -> target: weight` line per
/// edge, sorted for stable output.
impl fmt::Display for GraphPoet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut edges: Vec<(&String, &String, u32)> = self.affinity.edges().collect();
        edges.sort();
        for (i, (source, target, weight)) in edges.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{source} -> {target}: {weight}")?;
        }
        Ok(())
    }
}
