//! Conversion of JKAN dataset descriptions into a DCAT / VCard RDF graph.
//!
//! The [`jkan`] module holds the record model and loader, and
//! [`jkan::rdf`] turns records into triples and serializes the merged graph.

pub mod jkan;
