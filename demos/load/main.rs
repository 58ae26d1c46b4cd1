use petgraph::visit::EdgeRef;
use dimacs_reader::from_file;

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "assets/myciel3.col".to_string());
    let graph = match from_file(&path) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{}: {}", path, err);
            std::process::exit(1);
        }
    };

    println!("Number of nodes: {}", graph.node_count());
    println!("Number of edges: {}", graph.edge_count());

    for edge in graph.edge_references() {
        println!(
            "Edge: {} <-> {} [{}]",
            graph[edge.source()],
            graph[edge.target()],
            edge.weight()
        );
    }
}
