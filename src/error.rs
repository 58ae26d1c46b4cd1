use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Everything that can go wrong while reading a DIMACS graph.
///
/// Line numbers are 1-based and count every physical line, comments included.
#[derive(Error, Debug)]
pub enum DimacsError {
    #[error("io error")]
    Io(#[from] std::io::Error),
    #[error("no `p` header line found")]
    MissingHeader,
    #[error("line {line}: expected `p` header, got `{found}`")]
    MalformedHeader { line: usize, found: String },
    #[error("line {line}: invalid vertex count `{token}`")]
    InvalidVertexCount {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: missing {expected}")]
    MissingToken { line: usize, expected: &'static str },
    #[error("line {line}: unknown vertex `{id}`")]
    UnknownVertex { line: usize, id: String },
    #[error("line {line}: invalid edge weight `{token}`")]
    InvalidWeight {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("weighted reader used with a target that does not store edge weights")]
    WeightsUnsupported,
}
