//! RDF graph types for dataset conversion.

use std::collections::HashSet;

use oxrdf::vocab::rdf;
use oxrdf::{NamedNode, NamedNodeRef, Term, Triple};

/// Triples produced for a single dataset record, in emission order.
///
/// Unlike [`RdfGraph`] this keeps duplicates, so a record listing the same
/// category twice yields two keyword triples here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphFragment {
    pub triples: Vec<Triple>,
}

impl GraphFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `subject predicate object`.
    pub fn add(&mut self, subject: &NamedNode, predicate: NamedNodeRef<'_>, object: impl Into<Term>) {
        self.triples
            .push(Triple::new(subject.clone(), predicate.into_owned(), object));
    }

    /// Appends every triple of `other`.
    pub fn append(&mut self, other: GraphFragment) {
        self.triples.extend(other.triples);
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }
}

/// The merged graph of all converted datasets.
#[derive(Debug, Clone, Default)]
pub struct RdfGraph {
    /// The RDF triples. Uses HashSet for automatic deduplication.
    pub triples: HashSet<Triple>,
}

impl RdfGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple to the graph.
    pub fn insert(&mut self, triple: Triple) {
        self.triples.insert(triple);
    }

    /// Adds every triple of a fragment. Triples already present are ignored.
    pub fn merge(&mut self, fragment: GraphFragment) {
        self.triples.extend(fragment.triples);
    }

    /// Returns the number of triples in the graph.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph contains no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Returns an iterator over the triples.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Triples grouped by subject, each subject's `rdf:type` triples first,
    /// then ordered by their N-Triples form.
    ///
    /// Leading with the type lets RDF/XML writers emit typed node elements
    /// such as `<dcat:Dataset rdf:about="...">`.
    pub fn sorted(&self) -> Vec<&Triple> {
        let mut triples: Vec<&Triple> = self.triples.iter().collect();
        triples.sort_by_cached_key(|t| {
            (
                t.subject.to_string(),
                t.predicate.as_str() != rdf::TYPE.as_str(),
                t.to_string(),
            )
        });
        triples
    }
}

impl IntoIterator for RdfGraph {
    type Item = Triple;
    type IntoIter = std::collections::hash_set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}
