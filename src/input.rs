use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{DEFAULT_EDGE_WEIGHT, DimacsError, DimacsReader, SequentialLabels, UnGraph};

/// Reads a DIMACS graph from a file.
///
/// Input format:
/// - `c` and `%` lines are comments,
/// - one `p edge <n> <m>` header,
/// - one edge per line in format `e <u> <v> [<weight>]`, vertices numbered from 1 to n.
///
/// <div class="warning">
///
/// > Node weights are the DIMACS identifiers, node indices are shifted by one (`NodeIndex(0)` is vertex `1`).
/// > Edges without a weight get weight 1.0.
/// > Parallel edges and self-loops are kept as they are.
///
/// </div>
///
/// Example input:
/// ```text
/// c triangle with a tail
/// p edge 4 4
/// e 1 2
/// e 2 3
/// e 3 1 2.5
/// e 3 4
/// ```
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<UnGraph, DimacsError> {
    let file = File::open(path)?;
    from_reader(file)
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<UnGraph, DimacsError> {
    from_reader(input.as_bytes())
}

/// This is equivalent to [`from_file`], but reads from any byte stream.
pub fn from_reader<R: Read>(input: R) -> Result<UnGraph, DimacsError> {
    let mut graph = UnGraph::new_undirected();
    let summary =
        DimacsReader::weighted(input, DEFAULT_EDGE_WEIGHT).generate(&mut graph, &mut SequentialLabels::new())?;
    log::debug!(
        "loaded {} vertices, {} edges",
        summary.vertices,
        summary.edges
    );
    Ok(graph)
}
