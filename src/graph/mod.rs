//! Word-affinity graph: the directed graph ADT and its corpus builder

pub mod builder;
pub mod directed;

pub use builder::CorpusGraphBuilder;
pub use directed::DirectedGraph;
