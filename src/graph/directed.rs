//! Weighted directed graph with a vertex-centric representation
//!
//! This module provides the mutable graph ADT underlying the affinity
//! graph. Each vertex privately stores both its outgoing and incoming
//! adjacency maps in FxHashMap for O(1) edge updates; the two copies of
//! every edge weight are kept in agreement at all times.

use crate::errors::{PoetError, Result};
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::Hash;

/// Per-vertex adjacency storage.
///
/// An edge (s, t, w) is recorded twice: as `w` under `t` in s's `targets`
/// map and as `w` under `s` in t's `sources` map. Keeping both directions
/// makes `sources` and `targets` queries symmetric single lookups.
#[derive(Debug, Clone)]
struct VertexEntry<L> {
    /// Outgoing edges: target label -> weight
    targets: FxHashMap<L, u32>,
    /// Incoming edges: source label -> weight
    sources: FxHashMap<L, u32>,
}

// Manual impl: the derive would demand L: Default
impl<L> Default for VertexEntry<L> {
    fn default() -> Self {
        Self {
            targets: FxHashMap::default(),
            sources: FxHashMap::default(),
        }
    }
}

/// A mutable directed graph with positive integer edge weights.
///
/// Labels of type `L` identify vertices. At most one edge exists per
/// ordered (source, target) pair; stored weights are always strictly
/// positive, and no vertex ever has an edge to itself. A vertex may
/// exist with no incident edges.
#[derive(Debug, Clone)]
pub struct DirectedGraph<L> {
    vertices: FxHashMap<L, VertexEntry<L>>,
}

impl<L> Default for DirectedGraph<L> {
    fn default() -> Self {
        Self {
            vertices: FxHashMap::default(),
        }
    }
}

impl<L> DirectedGraph<L>
where
    L: Eq + Hash + Clone + fmt::Debug,
{
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            vertices: FxHashMap::default(),
        }
    }

    /// Create a graph with pre-allocated vertex capacity
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
        }
    }

    /// Add a vertex to the graph.
    ///
    /// Returns `true` if the vertex was newly added, `false` if it was
    /// already present. Idempotent either way.
    pub fn add_vertex(&mut self, label: L) -> bool {
        if self.vertices.contains_key(&label) {
            return false;
        }
        self.vertices.insert(label, VertexEntry::default());
        true
    }

    /// Set, overwrite, or remove the edge from `source` to `target`.
    ///
    /// A positive `weight` inserts or overwrites the edge, implicitly
    /// adding missing endpoints as vertices. A zero `weight` removes the
    /// edge if present. Either way the weight the edge carried before the
    /// call is returned (0 if the edge did not exist).
    ///
    /// This is the single mutation primitive for edges; callers that
    /// accumulate counts read the current weight and write back the sum.
    ///
    /// # Errors
    /// Returns [`PoetError::SelfLoop`] if `source == target`. The graph is
    /// left unchanged in that case.
    pub fn set_edge(&mut self, source: L, target: L, weight: u32) -> Result<u32> {
        if source == target {
            return Err(PoetError::self_loop(format!("{source:?}")));
        }

        let previous = if weight == 0 {
            self.remove_edge(&source, &target)
        } else {
            self.add_vertex(source.clone());
            self.add_vertex(target.clone());

            // source != target, so the two lookups hit distinct entries
            let prev_out = match self.vertices.get_mut(&source) {
                Some(entry) => entry.targets.insert(target.clone(), weight).unwrap_or(0),
                None => 0,
            };
            let prev_in = match self.vertices.get_mut(&target) {
                Some(entry) => entry.sources.insert(source, weight).unwrap_or(0),
                None => 0,
            };
            debug_assert_eq!(prev_out, prev_in, "dual adjacency maps disagree");
            prev_out
        };

        self.check_rep();
        Ok(previous)
    }

    /// Remove both stored copies of an edge, returning its prior weight.
    fn remove_edge(&mut self, source: &L, target: &L) -> u32 {
        let prev_out = match self.vertices.get_mut(source) {
            Some(entry) => entry.targets.remove(target).unwrap_or(0),
            None => 0,
        };
        let prev_in = match self.vertices.get_mut(target) {
            Some(entry) => entry.sources.remove(source).unwrap_or(0),
            None => 0,
        };
        debug_assert_eq!(prev_out, prev_in, "dual adjacency maps disagree");
        prev_out
    }

    /// Remove a vertex and every edge incident to it.
    ///
    /// Returns `true` if the vertex was present. Removing an absent
    /// vertex is a no-op returning `false`.
    pub fn remove_vertex(&mut self, label: &L) -> bool {
        let Some(entry) = self.vertices.remove(label) else {
            return false;
        };

        // Drop the back-references held by neighbors
        for target in entry.targets.keys() {
            if let Some(neighbor) = self.vertices.get_mut(target) {
                neighbor.sources.remove(label);
            }
        }
        for source in entry.sources.keys() {
            if let Some(neighbor) = self.vertices.get_mut(source) {
                neighbor.targets.remove(label);
            }
        }

        self.check_rep();
        true
    }

    /// Iterate over the vertex labels (order unspecified)
    pub fn vertices(&self) -> impl Iterator<Item = &L> {
        self.vertices.keys()
    }

    /// Check whether a label is a vertex of this graph
    pub fn contains_vertex(&self, label: &L) -> bool {
        self.vertices.contains_key(label)
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|e| e.targets.len()).sum()
    }

    /// Check if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The weight of the edge from `source` to `target`, 0 if absent
    pub fn weight(&self, source: &L, target: &L) -> u32 {
        self.vertices
            .get(source)
            .and_then(|entry| entry.targets.get(target).copied())
            .unwrap_or(0)
    }

    /// All vertices with an edge into `target`, with that edge's weight.
    ///
    /// Returns an owned snapshot; an unknown `target` yields an empty map
    /// rather than an error.
    pub fn sources(&self, target: &L) -> FxHashMap<L, u32> {
        self.vertices
            .get(target)
            .map(|entry| entry.sources.clone())
            .unwrap_or_default()
    }

    /// All vertices reachable from `source` in one hop, with that edge's
    /// weight. Symmetric to [`sources`](Self::sources).
    pub fn targets(&self, source: &L) -> FxHashMap<L, u32> {
        self.vertices
            .get(source)
            .map(|entry| entry.targets.clone())
            .unwrap_or_default()
    }

    /// Iterate over all edges as (source, target, weight) triples
    pub fn edges(&self) -> impl Iterator<Item = (&L, &L, u32)> {
        self.vertices.iter().flat_map(|(source, entry)| {
            entry
                .targets
                .iter()
                .map(move |(target, &weight)| (source, target, weight))
        })
    }

    /// Representation invariant, checked in debug builds only:
    /// no self-loops, strictly positive weights, and the two copies of
    /// every edge weight in agreement.
    #[cfg(debug_assertions)]
    fn check_rep(&self) {
        for (label, entry) in &self.vertices {
            for (target, &weight) in &entry.targets {
                debug_assert!(target != label, "self-loop stored at {label:?}");
                debug_assert!(weight > 0, "zero-weight edge stored at {label:?}");
                let mirrored = self
                    .vertices
                    .get(target)
                    .and_then(|t| t.sources.get(label).copied());
                debug_assert_eq!(
                    mirrored,
                    Some(weight),
                    "edge {label:?} -> {target:?} not mirrored in target's sources"
                );
            }
            for (source, &weight) in &entry.sources {
                debug_assert!(source != label, "self-loop stored at {label:?}");
                debug_assert!(weight > 0, "zero-weight edge stored at {label:?}");
            }
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_rep(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn graph_with_edges(edges: &[(&str, &str, u32)]) -> DirectedGraph<String> {
        let mut graph = DirectedGraph::new();
        for &(s, t, w) in edges {
            graph.set_edge(s.to_string(), t.to_string(), w).unwrap();
        }
        graph
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut graph: DirectedGraph<String> = DirectedGraph::new();
        assert!(graph.add_vertex("word".to_string()));
        assert!(!graph.add_vertex("word".to_string()));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_set_edge_adds_endpoints() {
        let graph = graph_with_edges(&[("hello", "world", 3)]);

        assert!(graph.contains_vertex(&"hello".to_string()));
        assert!(graph.contains_vertex(&"world".to_string()));
        assert_eq!(graph.weight(&"hello".to_string(), &"world".to_string()), 3);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_set_edge_returns_previous_weight() {
        let mut graph = graph_with_edges(&[("a", "b", 1)]);

        let prev = graph.set_edge("a".to_string(), "b".to_string(), 5).unwrap();
        assert_eq!(prev, 1);
        assert_eq!(graph.weight(&"a".to_string(), &"b".to_string()), 5);

        // a fresh edge reports previous weight 0
        let prev = graph.set_edge("b".to_string(), "c".to_string(), 2).unwrap();
        assert_eq!(prev, 0);
    }

    #[test]
    fn test_set_edge_zero_removes() {
        let mut graph = graph_with_edges(&[("a", "b", 4)]);

        let prev = graph.set_edge("a".to_string(), "b".to_string(), 0).unwrap();
        assert_eq!(prev, 4);
        assert_eq!(graph.weight(&"a".to_string(), &"b".to_string()), 0);
        assert_eq!(graph.edge_count(), 0);
        // endpoints survive edge removal
        assert!(graph.contains_vertex(&"a".to_string()));
        assert!(graph.contains_vertex(&"b".to_string()));

        // removing an absent edge is a no-op returning 0
        let prev = graph.set_edge("a".to_string(), "b".to_string(), 0).unwrap();
        assert_eq!(prev, 0);
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut graph: DirectedGraph<String> = DirectedGraph::new();
        let err = graph
            .set_edge("word".to_string(), "word".to_string(), 1)
            .unwrap_err();
        assert!(err.is_self_loop());
        // rejection leaves the graph untouched
        assert!(graph.is_empty());
    }

    #[test]
    fn test_sources_and_targets_symmetry() {
        let graph = graph_with_edges(&[("a", "b", 2), ("c", "b", 7), ("b", "d", 1)]);

        let sources = graph.sources(&"b".to_string());
        assert_eq!(sources.len(), 2);
        assert_eq!(sources.get("a"), Some(&2));
        assert_eq!(sources.get("c"), Some(&7));

        let targets = graph.targets(&"b".to_string());
        assert_eq!(targets.len(), 1);
        assert_eq!(targets.get("d"), Some(&1));
    }

    #[test]
    fn test_queries_on_absent_vertex_are_empty() {
        let graph = graph_with_edges(&[("a", "b", 1)]);
        assert!(graph.sources(&"nope".to_string()).is_empty());
        assert!(graph.targets(&"nope".to_string()).is_empty());
        assert_eq!(graph.weight(&"nope".to_string(), &"a".to_string()), 0);
    }

    #[test]
    fn test_remove_vertex_removes_incident_edges() {
        let mut graph = graph_with_edges(&[("a", "b", 1), ("b", "c", 2), ("c", "a", 3)]);

        assert!(graph.remove_vertex(&"b".to_string()));
        assert_eq!(graph.vertex_count(), 2);
        // both the edge out of b and the edge into b are gone
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.sources(&"c".to_string()).is_empty());
        assert!(graph.targets(&"a".to_string()).is_empty());
        // the untouched edge survives
        assert_eq!(graph.weight(&"c".to_string(), &"a".to_string()), 3);
    }

    #[test]
    fn test_remove_absent_vertex_idempotent() {
        let mut graph: DirectedGraph<String> = DirectedGraph::new();
        assert!(!graph.remove_vertex(&"ghost".to_string()));
        assert!(!graph.remove_vertex(&"ghost".to_string()));
    }

    #[test]
    fn test_vertices_view() {
        let graph = graph_with_edges(&[("a", "b", 1)]);
        let labels: FxHashSet<&String> = graph.vertices().collect();
        assert_eq!(labels.len(), 2);
        assert!(labels.contains(&"a".to_string()));
        assert!(labels.contains(&"b".to_string()));
    }

    #[test]
    fn test_edges_iterator() {
        let graph = graph_with_edges(&[("a", "b", 1), ("b", "c", 2)]);
        let mut edges: Vec<(String, String, u32)> = graph
            .edges()
            .map(|(s, t, w)| (s.clone(), t.clone(), w))
            .collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                ("a".to_string(), "b".to_string(), 1),
                ("b".to_string(), "c".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_non_string_labels() {
        let mut graph: DirectedGraph<u32> = DirectedGraph::new();
        graph.set_edge(1, 2, 10).unwrap();
        assert_eq!(graph.weight(&1, &2), 10);
        assert!(graph.set_edge(3, 3, 1).is_err());
    }
}
