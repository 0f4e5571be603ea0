//! RDF serialization support for RdfGraph.
//!
//! Output is deterministic: triples are written in sorted order and the
//! vocabulary prefixes are always declared in the same order.

use std::io::Write;

use oxrdfio::{RdfFormat as OxRdfFormat, RdfSerializer};

use super::error::RdfError;
use super::graph::RdfGraph;
use super::vocab::PREFIXES;

/// Supported RDF serialization formats.
///
/// This enum wraps oxrdfio's format types and provides a convenient interface
/// for specifying the desired output format when serializing RDF graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RdfFormat {
    /// RDF/XML format (.rdf) - what VIVO ingests
    #[default]
    RdfXml,
    /// Turtle format (.ttl) - compact and human-readable
    Turtle,
    /// N-Triples format (.nt) - simple line-based format
    NTriples,
}

impl RdfFormat {
    /// Converts this RdfFormat to the corresponding oxrdfio format.
    fn to_oxrdf_format(self) -> OxRdfFormat {
        match self {
            RdfFormat::RdfXml => OxRdfFormat::RdfXml,
            RdfFormat::Turtle => OxRdfFormat::Turtle,
            RdfFormat::NTriples => OxRdfFormat::NTriples,
        }
    }

    /// Conventional file extension, without the dot.
    pub fn file_extension(self) -> &'static str {
        match self {
            RdfFormat::RdfXml => "rdf",
            RdfFormat::Turtle => "ttl",
            RdfFormat::NTriples => "nt",
        }
    }
}

impl RdfGraph {
    /// Writes the RDF graph to the provided writer in the specified format.
    ///
    /// # Errors
    ///
    /// Returns `RdfError::Serialization` if writing fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use std::fs::File;
    /// use datasets_rdf::jkan::rdf::{RdfGraph, RdfFormat};
    ///
    /// let file = File::create("datasets.rdf")?;
    /// graph.write(file, RdfFormat::RdfXml)?;
    /// ```
    pub fn write<W: Write>(&self, writer: W, format: RdfFormat) -> Result<(), RdfError> {
        let mut serializer = RdfSerializer::from_format(format.to_oxrdf_format());
        for (name, iri) in PREFIXES {
            serializer = serializer
                .with_prefix(*name, *iri)
                .map_err(|e| RdfError::Serialization(format!("Invalid prefix {}: {}", name, e)))?;
        }
        let mut serializer = serializer.for_writer(writer);

        for triple in self.sorted() {
            serializer
                .serialize_triple(triple)
                .map_err(|e: std::io::Error| RdfError::Serialization(e.to_string()))?;
        }

        serializer
            .finish()
            .map_err(|e: std::io::Error| RdfError::Serialization(e.to_string()))?;

        Ok(())
    }

    /// Serializes the RDF graph to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns `RdfError::Serialization` if serialization fails or the output
    /// is not valid UTF-8.
    pub fn to_string(&self, format: RdfFormat) -> Result<String, RdfError> {
        let mut buffer = Vec::new();
        self.write(&mut buffer, format)?;

        String::from_utf8(buffer)
            .map_err(|e| RdfError::Serialization(format!("Invalid UTF-8 in output: {}", e)))
    }
}
