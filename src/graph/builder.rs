//! Affinity graph construction from a token stream
//!
//! Folds an ordered sequence of lowercased corpus tokens into a
//! [`DirectedGraph`], counting adjacent-pair occurrences as edge weights.

use crate::graph::directed::DirectedGraph;

/// Builds a word-affinity graph incrementally from corpus tokens.
///
/// Each adjacent token pair (w_i, w_{i+1}) increments the weight of the
/// edge w_i -> w_{i+1} by one, so a finished graph's edge weights are
/// exact adjacency counts. Every token becomes a vertex, including the
/// final token, which has no outgoing edge.
///
/// Tokens are expected to be case-folded already; the builder treats
/// them as opaque labels. Adjacent identical tokens add the vertex but
/// record no edge, since the graph stores no self-loops.
#[derive(Debug, Clone, Default)]
pub struct CorpusGraphBuilder {
    graph: DirectedGraph<String>,
    previous: Option<String>,
}

impl CorpusGraphBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next corpus token in order
    pub fn push_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.graph.add_vertex(token.clone());

        if let Some(previous) = self.previous.take() {
            if previous != token {
                let current = self.graph.weight(&previous, &token);
                // never fails: previous != token rules out the self-loop
                let _ = self.graph.set_edge(previous, token.clone(), current + 1);
            }
        }
        self.previous = Some(token);
    }

    /// Consume the builder, yielding the finished graph
    pub fn finish(self) -> DirectedGraph<String> {
        self.graph
    }

    /// Number of vertices accumulated so far
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Check if no tokens have been fed yet
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Build a graph from a complete token sequence in one call.
    ///
    /// A sequence of zero or one tokens yields a graph with at most one
    /// vertex and no edges.
    pub fn from_tokens<I, S>(tokens: I) -> DirectedGraph<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = Self::new();
        for token in tokens {
            builder.push_token(token);
        }
        builder.finish()
    }
}
