use crate::GraphTarget;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Vertex(u32),
    Edge(u32, u32),
    /// Edge index in creation order and the weight set on it.
    Weight(usize, f64),
}

/// Target that only remembers the calls it received.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub events: Vec<Event>,
    weighted: bool,
    simple: bool,
    edges: Vec<(u32, u32)>,
}

impl RecordingTarget {
    pub fn new(weighted: bool) -> Self {
        RecordingTarget {
            weighted,
            ..Default::default()
        }
    }

    /// Reject parallel edges, ignoring direction.
    pub fn simple(mut self) -> Self {
        self.simple = true;
        self
    }

    pub fn vertices(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Vertex(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    pub fn edges(&self) -> Vec<(u32, u32)> {
        self.edges.clone()
    }
}

impl GraphTarget for RecordingTarget {
    type Vertex = u32;
    type VertexId = u32;
    type Edge = usize;

    fn add_vertex(&mut self, vertex: u32) -> u32 {
        self.events.push(Event::Vertex(vertex));
        vertex
    }

    fn add_edge(&mut self, a: &u32, b: &u32) -> Option<usize> {
        if self.simple && self.edges.iter().any(|&(x, y)| (x, y) == (*a, *b) || (y, x) == (*a, *b)) {
            return None;
        }
        self.events.push(Event::Edge(*a, *b));
        self.edges.push((*a, *b));
        Some(self.edges.len() - 1)
    }

    fn supports_weights(&self) -> bool {
        self.weighted
    }

    fn set_edge_weight(&mut self, edge: &usize, weight: f64) {
        self.events.push(Event::Weight(*edge, weight));
    }
}
