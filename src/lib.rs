//! # graph_poet
//!
//! A graph-based poetry generator.
//!
//! The library derives a word-affinity graph from a text corpus: vertices
//! are lowercased, whitespace-delimited words, and the weight of the edge
//! w1 -> w2 counts how often w1 is immediately followed by w2. Given an
//! input sentence, it inserts a "bridge" word between every adjacent pair
//! of input words wherever a maximum-weight two-edge path exists between
//! them in the graph.
//!
//! ## Example
//!
//! ```
//! use graph_poet::GraphPoet;
//!
//! let poet = GraphPoet::from_text("This is a test of the Mugar Omni Theater sound system.");
//! assert_eq!(poet.poem("Test the system."), "Test of the system.");
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod poet;

// Re-export commonly used types
pub use errors::{PoetError, Result};
pub use graph::{builder::CorpusGraphBuilder, directed::DirectedGraph};
pub use nlp::tokenizer::Tokenizer;
pub use poet::{Bridge, GraphPoet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
