pub mod random_graphs;
pub mod recording;
