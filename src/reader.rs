use std::io::{BufReader, Read};

use crate::{
    DimacsError, GraphTarget, ReaderConfig, VertexFactory, VertexMap,
    reader_blocks::{header::Header, lines::LineSource, lines::TokenLine},
};

/// What a single [`DimacsReader::generate`] pass produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub header: Header,
    pub vertices: usize,
    /// `e` lines the target accepted.
    pub edges: usize,
    /// `e` lines the target refused, e.g. duplicates in a simple graph.
    pub rejected_edges: usize,
    /// Substantive lines after the header that were not `e` lines.
    pub skipped_lines: usize,
}

/// Reads a graph in DIMACS edge format and drives it into a [`GraphTarget`].
///
/// ```text
/// c comment
/// p edge <vertices> <edges>
/// e <source> <target> [<weight>]
/// ```
///
/// Vertices are numbered from 1 in the input. Lines starting with `c` or `%` and blank
/// lines are ignored everywhere.
///
/// # Example
///
/// ```
/// use dimacs_reader::{DimacsReader, SequentialLabels};
/// use petgraph::graph::UnGraph;
///
/// let input = "c sample\np edge 3 2\ne 1 2\ne 2 3 4.5\n";
/// let mut graph = UnGraph::<u32, f64>::new_undirected();
/// let summary = DimacsReader::weighted(input.as_bytes(), 1.0)
///     .generate(&mut graph, &mut SequentialLabels::new())
///     .unwrap();
///
/// assert_eq!(summary.vertices, 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
pub struct DimacsReader<R> {
    lines: LineSource<BufReader<R>>,
    config: ReaderConfig,
}

impl<R: Read> DimacsReader<R> {
    /// Reader ignoring weights.
    pub fn new(input: R) -> Self {
        Self::with_config(input, ReaderConfig::unweighted())
    }

    /// Reader applying weights, `default_weight` for edges without one.
    pub fn weighted(input: R, default_weight: f64) -> Self {
        Self::with_config(input, ReaderConfig::weighted(default_weight))
    }

    pub fn with_config(input: R, config: ReaderConfig) -> Self {
        DimacsReader {
            lines: LineSource::new(BufReader::new(input)),
            config,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Reads the whole stream into `target`, creating vertices with `factory`.
    pub fn generate<G, F>(&mut self, target: &mut G, factory: &mut F) -> Result<Summary, DimacsError>
    where
        G: GraphTarget,
        F: VertexFactory<Vertex = G::Vertex>,
    {
        let mut ids: hashbrown::HashMap<String, G::VertexId> = hashbrown::HashMap::new();
        self.generate_with_map(target, factory, &mut ids)
    }

    /// Like [`generate`](Self::generate), but fills `ids` with `"1"..="n"` to vertex ids
    /// so the caller can look vertices up afterwards.
    ///
    /// On error, vertices and edges added so far stay in `target`.
    pub fn generate_with_map<G, F, M>(
        &mut self,
        target: &mut G,
        factory: &mut F,
        ids: &mut M,
    ) -> Result<Summary, DimacsError>
    where
        G: GraphTarget,
        F: VertexFactory<Vertex = G::Vertex>,
        M: VertexMap<G::VertexId> + ?Sized,
    {
        if self.config.weighted && !target.supports_weights() {
            return Err(DimacsError::WeightsUnsupported);
        }

        let header = self.read_header()?;
        log::debug!(
            "header on line {}: {} vertices, {:?} edges declared",
            header.line,
            header.vertices,
            header.edges
        );

        for i in 1..=header.vertices {
            let id = target.add_vertex(factory.create_vertex());
            ids.insert(i.to_string(), id);
        }

        let mut summary = Summary {
            vertices: header.vertices,
            header,
            edges: 0,
            rejected_edges: 0,
            skipped_lines: 0,
        };

        while let Some(line) = self.lines.next_line()? {
            if line.directive() != "e" {
                log::debug!("line {}: skipping `{}` line", line.number, line.directive());
                summary.skipped_lines += 1;
                continue;
            }
            if self.read_edge(&line, target, ids)? {
                summary.edges += 1;
            } else {
                summary.rejected_edges += 1;
            }
        }

        let seen = summary.edges + summary.rejected_edges;
        if let Some(declared) = summary.header.edges
            && declared != seen
        {
            log::warn!("header declares {} edges, read {}", declared, seen);
        }

        Ok(summary)
    }

    fn read_header(&mut self) -> Result<Header, DimacsError> {
        match self.lines.next_line()? {
            Some(line) => Header::parse(&line),
            None => Err(DimacsError::MissingHeader),
        }
    }

    /// Returns whether the target accepted the edge.
    fn read_edge<G, M>(&self, line: &TokenLine, target: &mut G, ids: &M) -> Result<bool, DimacsError>
    where
        G: GraphTarget,
        M: VertexMap<G::VertexId> + ?Sized,
    {
        let a = resolve(line, 1, "edge source", ids)?;
        let b = resolve(line, 2, "edge target", ids)?;

        let Some(edge) = target.add_edge(a, b) else {
            log::debug!("line {}: edge rejected by target", line.number);
            return Ok(false);
        };

        if self.config.weighted {
            let weight = match line.token(3) {
                Some(token) => token.parse::<f64>().map_err(|source| DimacsError::InvalidWeight {
                    line: line.number,
                    token: token.to_owned(),
                    source,
                })?,
                None => self.config.default_weight,
            };
            target.set_edge_weight(&edge, weight);
        }

        Ok(true)
    }
}

fn resolve<'m, Id, M>(
    line: &TokenLine,
    index: usize,
    expected: &'static str,
    ids: &'m M,
) -> Result<&'m Id, DimacsError>
where
    M: VertexMap<Id> + ?Sized,
{
    let token = line.token(index).ok_or(DimacsError::MissingToken {
        line: line.number,
        expected,
    })?;
    ids.get(token).ok_or_else(|| DimacsError::UnknownVertex {
        line: line.number,
        id: token.to_owned(),
    })
}
