// #![warn(missing_docs)]

//! # dimacs_reader
//!
//! Reads graphs in the DIMACS edge format (`c` comments, a `p edge <n> <m>` header,
//! `e <u> <v> [<w>]` edges) as used by graph coloring and clique benchmarks.
//!
//! The reader does not own a graph type. It drives any [`GraphTarget`], with vertices
//! coming from a [`VertexFactory`]. [`targets`] implements the target for
//! [`petgraph`](https://docs.rs/petgraph) graphs, and [`input`] has ready-made loaders.

pub mod config;
pub mod error;
pub mod input;
pub mod reader;
pub mod reader_blocks;
pub mod targets;
pub mod types;

#[cfg(test)]
mod testing;

pub use config::{DEFAULT_EDGE_WEIGHT, ReaderConfig};
pub use error::DimacsError;
pub use input::{from_file, from_reader, from_str};
pub use reader::{DimacsReader, Summary};
pub use reader_blocks::header::Header;
pub use targets::EdgeValue;
pub use types::{GraphTarget, SequentialLabels, UnGraph, VertexFactory, VertexMap};
