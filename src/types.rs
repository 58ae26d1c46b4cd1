use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Produces a fresh vertex value each time the reader asks for one.
pub trait VertexFactory {
    type Vertex;

    fn create_vertex(&mut self) -> Self::Vertex;
}

impl<V, F: FnMut() -> V> VertexFactory for F {
    type Vertex = V;

    fn create_vertex(&mut self) -> V {
        self()
    }
}

/// Labels vertices `1, 2, 3, ...`, i.e. with their DIMACS identifiers.
#[derive(Debug, Clone, Default)]
pub struct SequentialLabels {
    next: u32,
}

impl SequentialLabels {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VertexFactory for SequentialLabels {
    type Vertex = u32;

    fn create_vertex(&mut self) -> u32 {
        self.next += 1;
        self.next
    }
}

/// Graph being built by a [`DimacsReader`](crate::DimacsReader).
///
/// `Vertex` is what the factory produces, `VertexId` is how the target refers to it
/// afterwards. For graphs where the vertex is its own identity both are the same type.
pub trait GraphTarget {
    type Vertex;
    type VertexId: Clone;
    type Edge;

    fn add_vertex(&mut self, vertex: Self::Vertex) -> Self::VertexId;

    /// Returns `None` when the target refuses the edge (e.g. it already exists).
    fn add_edge(&mut self, a: &Self::VertexId, b: &Self::VertexId) -> Option<Self::Edge>;

    /// Whether [`set_edge_weight`](GraphTarget::set_edge_weight) stores anything.
    fn supports_weights(&self) -> bool {
        false
    }

    fn set_edge_weight(&mut self, _edge: &Self::Edge, _weight: f64) {}
}

/// Identifier map filled during the vertex phase: `"1"..="n"` to vertex ids.
pub trait VertexMap<Id> {
    fn insert(&mut self, key: String, id: Id);

    fn get(&self, key: &str) -> Option<&Id>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<Id, S: BuildHasher> VertexMap<Id> for HashMap<String, Id, S> {
    fn insert(&mut self, key: String, id: Id) {
        HashMap::insert(self, key, id);
    }

    fn get(&self, key: &str) -> Option<&Id> {
        HashMap::get(self, key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<Id, S: BuildHasher> VertexMap<Id> for hashbrown::HashMap<String, Id, S> {
    fn insert(&mut self, key: String, id: Id) {
        hashbrown::HashMap::insert(self, key, id);
    }

    fn get(&self, key: &str) -> Option<&Id> {
        hashbrown::HashMap::get(self, key)
    }

    fn len(&self) -> usize {
        hashbrown::HashMap::len(self)
    }
}

impl<Id> VertexMap<Id> for BTreeMap<String, Id> {
    fn insert(&mut self, key: String, id: Id) {
        BTreeMap::insert(self, key, id);
    }

    fn get(&self, key: &str) -> Option<&Id> {
        BTreeMap::get(self, key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

/// Graph produced by the [`input`](crate::input) loaders.
///
/// Node weights are the 1-based DIMACS identifiers, edge weights the parsed weights.
pub type UnGraph = petgraph::graph::UnGraph<u32, f64>;
