//! RDF rendering of JKAN datasets.
//!
//! Each [`DatasetRecord`](crate::jkan::DatasetRecord) becomes a
//! `dcat:Dataset` with its `dcat:Distribution`s, a `foaf:Organization`
//! publisher and a `vcard:Kind` contact point. Subject IRIs are minted by a
//! [`UriScheme`].
//!
//! # Example
//!
//! ```ignore
//! use datasets_rdf::jkan::read_datasets;
//! use datasets_rdf::jkan::rdf::{build_dataset_graph, RdfFormat, RdfGraph, UriScheme};
//!
//! let scheme = UriScheme::default();
//! let mut graph = RdfGraph::new();
//! for (_path, record) in read_datasets(Path::new("datasets"))? {
//!     graph.merge(build_dataset_graph(&record, &scheme)?);
//! }
//! let xml = graph.to_string(RdfFormat::RdfXml)?;
//! ```

pub mod context;
pub mod convert;
pub mod error;
pub mod graph;
pub mod name;
pub mod rdf_io;
pub mod vocab;

// Re-exports
pub use context::UriScheme;
pub use convert::{build_dataset_graph, build_maintainer, datasets_to_rdf};
pub use error::RdfError;
pub use graph::{GraphFragment, RdfGraph};
pub use name::{parse_name, FamilyName, ParsedName};
pub use rdf_io::RdfFormat;
