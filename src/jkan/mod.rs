//! JKAN dataset records and their RDF rendering.

pub mod rdf;
pub mod read;
pub mod record;

pub use read::{read_dataset, read_datasets, ReadError};
pub use record::{DatasetRecord, ResourceRecord};
