//! Error types for RDF conversion.

use std::fmt;

/// Errors that can occur during RDF conversion and serialization.
#[derive(Debug)]
pub enum RdfError {
    /// A minted subject IRI is not a valid IRI.
    InvalidIri(String),
    /// Writing the graph in the requested format failed.
    Serialization(String),
}

impl fmt::Display for RdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfError::InvalidIri(iri) => write!(f, "Invalid IRI: {}", iri),
            RdfError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for RdfError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rdf_error_display() {
        let err = RdfError::InvalidIri("http://example.org/a b".to_string());
        assert!(err.to_string().contains("http://example.org/a b"));

        let err = RdfError::Serialization("broken pipe".to_string());
        assert!(err.to_string().contains("broken pipe"));
    }
}
