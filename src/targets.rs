//! [`GraphTarget`] implementations for petgraph's graph types.
//!
//! `Graph` and `StableGraph` accept parallel edges, so every `e` line becomes an edge.
//! `GraphMap` keeps at most one edge per vertex pair and refuses repeats, which makes
//! the reader count them as rejected.

use std::hash::BuildHasher;

use petgraph::graph::{EdgeIndex, Graph, IndexType, NodeIndex};
use petgraph::graphmap::{GraphMap, NodeTrait};
use petgraph::stable_graph::StableGraph;
use petgraph::EdgeType;

use crate::{GraphTarget, config::DEFAULT_EDGE_WEIGHT};

/// Edge data a petgraph target can be built with.
pub trait EdgeValue {
    /// Whether the value actually stores a weight.
    const WEIGHTED: bool;

    /// Value of a freshly created edge.
    fn initial() -> Self;

    fn set_weight(&mut self, weight: f64);
}

impl EdgeValue for () {
    const WEIGHTED: bool = false;

    fn initial() -> Self {}

    fn set_weight(&mut self, _weight: f64) {}
}

impl EdgeValue for f64 {
    const WEIGHTED: bool = true;

    fn initial() -> Self {
        DEFAULT_EDGE_WEIGHT
    }

    fn set_weight(&mut self, weight: f64) {
        *self = weight;
    }
}

impl EdgeValue for f32 {
    const WEIGHTED: bool = true;

    fn initial() -> Self {
        DEFAULT_EDGE_WEIGHT as f32
    }

    fn set_weight(&mut self, weight: f64) {
        *self = weight as f32;
    }
}

impl<N, E, Ty, Ix> GraphTarget for Graph<N, E, Ty, Ix>
where
    E: EdgeValue,
    Ty: EdgeType,
    Ix: IndexType,
{
    type Vertex = N;
    type VertexId = NodeIndex<Ix>;
    type Edge = EdgeIndex<Ix>;

    fn add_vertex(&mut self, vertex: N) -> NodeIndex<Ix> {
        self.add_node(vertex)
    }

    fn add_edge(&mut self, a: &NodeIndex<Ix>, b: &NodeIndex<Ix>) -> Option<EdgeIndex<Ix>> {
        Some(Graph::add_edge(self, *a, *b, E::initial()))
    }

    fn supports_weights(&self) -> bool {
        E::WEIGHTED
    }

    fn set_edge_weight(&mut self, edge: &EdgeIndex<Ix>, weight: f64) {
        if let Some(w) = self.edge_weight_mut(*edge) {
            w.set_weight(weight);
        }
    }
}

impl<N, E, Ty, Ix> GraphTarget for StableGraph<N, E, Ty, Ix>
where
    E: EdgeValue,
    Ty: EdgeType,
    Ix: IndexType,
{
    type Vertex = N;
    type VertexId = NodeIndex<Ix>;
    type Edge = EdgeIndex<Ix>;

    fn add_vertex(&mut self, vertex: N) -> NodeIndex<Ix> {
        self.add_node(vertex)
    }

    fn add_edge(&mut self, a: &NodeIndex<Ix>, b: &NodeIndex<Ix>) -> Option<EdgeIndex<Ix>> {
        Some(StableGraph::add_edge(self, *a, *b, E::initial()))
    }

    fn supports_weights(&self) -> bool {
        E::WEIGHTED
    }

    fn set_edge_weight(&mut self, edge: &EdgeIndex<Ix>, weight: f64) {
        if let Some(w) = self.edge_weight_mut(*edge) {
            w.set_weight(weight);
        }
    }
}

/// Vertices are their own identity here: a factory yielding the same value twice
/// maps both identifiers to one node.
impl<N, E, Ty, S> GraphTarget for GraphMap<N, E, Ty, S>
where
    N: NodeTrait,
    E: EdgeValue,
    Ty: EdgeType,
    S: BuildHasher,
{
    type Vertex = N;
    type VertexId = N;
    type Edge = (N, N);

    fn add_vertex(&mut self, vertex: N) -> N {
        self.add_node(vertex)
    }

    fn add_edge(&mut self, a: &N, b: &N) -> Option<(N, N)> {
        if self.contains_edge(*a, *b) {
            return None;
        }
        GraphMap::add_edge(self, *a, *b, E::initial());
        Some((*a, *b))
    }

    fn supports_weights(&self) -> bool {
        E::WEIGHTED
    }

    fn set_edge_weight(&mut self, edge: &(N, N), weight: f64) {
        if let Some(w) = self.edge_weight_mut(edge.0, edge.1) {
            w.set_weight(weight);
        }
    }
}
