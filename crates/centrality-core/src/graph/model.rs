//! Node, edge and graph types.
//!
//! ## Edge Direction
//!
//! An edge `A → B` is stored three times: as an [`Edge`] in the graph's
//! edge list, as `B` in `A.edges_out`, and as `A` in `B.edges_in`. Parallel
//! edges are kept; self-loops are rejected.

#![allow(clippy::module_name_repetitions)]

use petgraph::graph::DiGraph;
use serde::Serialize;

use crate::error::{GraphError, Result};

// ---------------------------------------------------------------------------
// Node / Edge
// ---------------------------------------------------------------------------

/// A graph vertex with its adjacency in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Stable index into the node collection.
    pub id: usize,
    /// Display label. Never read by the algorithms.
    pub label: String,
    /// Targets of outgoing edges, in insertion order.
    pub edges_out: Vec<usize>,
    /// Sources of incoming edges, in insertion order.
    pub edges_in: Vec<usize>,
}

impl Node {
    fn new(id: usize) -> Self {
        Self {
            id,
            label: id.to_string(),
            edges_out: Vec::new(),
            edges_in: Vec::new(),
        }
    }

    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.edges_out.len()
    }

    #[must_use]
    pub fn in_degree(&self) -> usize {
        self.edges_in.len()
    }

    /// In-degree plus out-degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.edges_in.len() + self.edges_out.len()
    }
}

/// A directed edge `from → to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An in-memory directed graph over nodes `0..N`.
///
/// Fields are private so every mutation goes through [`Graph::try_connect`]
/// (or the generator's unchecked path) and the adjacency lists can never
/// drift from the edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create `node_count` isolated nodes labelled by their id.
    #[must_use]
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            nodes: (0..node_count).map(Node::new).collect(),
            edges: Vec::new(),
        }
    }

    /// Build a graph from an explicit edge list.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeOutOfRange`] if an endpoint is `>= node_count`
    /// and [`GraphError::SelfLoop`] if an edge starts and ends on the same node.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::with_nodes(node_count);
        for &(from, to) in edges {
            graph.try_connect(from, to)?;
        }
        Ok(graph)
    }

    /// Add the edge `from → to` after checking it against the invariants.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::from_edges`].
    pub fn try_connect(&mut self, from: usize, to: usize) -> Result<()> {
        let node_count = self.nodes.len();
        for id in [from, to] {
            if id >= node_count {
                return Err(GraphError::NodeOutOfRange { id, node_count });
            }
        }
        if from == to {
            return Err(GraphError::SelfLoop { id: from });
        }
        self.connect(from, to);
        Ok(())
    }

    /// Unchecked edge insertion; callers guarantee distinct in-range ids.
    pub(crate) fn connect(&mut self, from: usize, to: usize) {
        debug_assert!(from != to, "self-loop {from} → {to}");
        self.nodes[from].edges_out.push(to);
        self.nodes[to].edges_in.push(from);
        self.edges.push(Edge { from, to });
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn node(&self, id: usize) -> Option<&Node> {
        self.nodes.get(id)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Outgoing neighbor ids of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this graph.
    #[must_use]
    pub fn out_neighbors(&self, id: usize) -> &[usize] {
        &self.nodes[id].edges_out
    }

    /// Ids whose out-degree is at most `min_out_degree`.
    ///
    /// These are the nodes the generator may still pick as an edge source;
    /// an empty result means generation is complete.
    #[must_use]
    pub fn source_candidates(&self, min_out_degree: usize) -> Vec<usize> {
        self.nodes
            .iter()
            .filter(|n| n.out_degree() <= min_out_degree)
            .map(|n| n.id)
            .collect()
    }

    /// Ids whose out-degree is at most `max_out_degree` (all ids when `None`).
    #[must_use]
    pub fn target_candidates(&self, max_out_degree: Option<usize>) -> Vec<usize> {
        self.nodes
            .iter()
            .filter(|n| max_out_degree.is_none_or(|max| n.out_degree() <= max))
            .map(|n| n.id)
            .collect()
    }

    /// Re-check every structural invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a node whose id is not its index
    /// or whose adjacency disagrees with the edge list
    /// ([`GraphError::AdjacencyMismatch`]), an out-of-range endpoint, or a
    /// self-loop.
    pub fn validate(&self) -> Result<()> {
        let node_count = self.nodes.len();
        let mut expected_out: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        let mut expected_in: Vec<Vec<usize>> = vec![Vec::new(); node_count];

        for edge in &self.edges {
            for id in [edge.from, edge.to] {
                if id >= node_count {
                    return Err(GraphError::NodeOutOfRange { id, node_count });
                }
            }
            if edge.from == edge.to {
                return Err(GraphError::SelfLoop { id: edge.from });
            }
            expected_out[edge.from].push(edge.to);
            expected_in[edge.to].push(edge.from);
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            if node.id != idx {
                return Err(GraphError::AdjacencyMismatch { id: idx });
            }
            // Multiset comparison: order within a list carries no meaning.
            let mut out = node.edges_out.clone();
            let mut inc = node.edges_in.clone();
            out.sort_unstable();
            inc.sort_unstable();
            expected_out[idx].sort_unstable();
            expected_in[idx].sort_unstable();
            if out != expected_out[idx] || inc != expected_in[idx] {
                return Err(GraphError::AdjacencyMismatch { id: idx });
            }
        }

        Ok(())
    }

    /// BLAKE3 fingerprint of the node count and the ordered edge list.
    #[must_use]
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.nodes.len() as u64).to_le_bytes());
        for edge in &self.edges {
            hasher.update(&(edge.from as u64).to_le_bytes());
            hasher.update(&(edge.to as u64).to_le_bytes());
        }
        format!("blake3:{}", hasher.finalize().to_hex())
    }

    /// A petgraph view where `NodeIndex::new(id)` is node `id`.
    #[must_use]
    pub fn to_digraph(&self) -> DiGraph<usize, ()> {
        let mut g = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let indices: Vec<_> = self.nodes.iter().map(|n| g.add_node(n.id)).collect();
        for edge in &self.edges {
            g.add_edge(indices[edge.from], indices[edge.to], ());
        }
        g
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
