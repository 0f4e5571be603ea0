//! Example: converting a directory of JKAN dataset files to RDF
//!
//! Reads every dataset file in a directory (the test fixtures by default),
//! merges them into one graph and prints it as Turtle and RDF/XML.
//!
//! Run with:
//! ```bash
//! cargo run --example convert_dir -- path/to/datasets
//! ```

use std::path::PathBuf;

use datasets_rdf::jkan::rdf::{build_dataset_graph, RdfFormat, RdfGraph, UriScheme};
use datasets_rdf::jkan::read_datasets;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/datasets"));

    let scheme = UriScheme::default();
    let mut graph = RdfGraph::new();
    for (path, record) in read_datasets(&dir)? {
        let fragment = build_dataset_graph(&record, &scheme)?;
        println!("{}: {} triples", path.display(), fragment.len());
        graph.merge(fragment);
    }

    println!("\n=== Merged graph: {} triples ===\n", graph.len());

    println!("--- Turtle Format ---");
    println!("{}\n", graph.to_string(RdfFormat::Turtle)?);

    println!("--- RDF/XML Format ---");
    println!("{}", graph.to_string(RdfFormat::RdfXml)?);

    Ok(())
}
