//! Vocabulary terms used in the dataset graph.
//!
//! `rdf:` and `rdfs:` terms come from [`oxrdf::vocab`]; the rest are declared
//! here the same way.

use oxrdf::NamedNodeRef;

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDF Schema namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// Data Catalog Vocabulary namespace.
pub const DCAT: &str = "http://www.w3.org/ns/dcat#";
/// Dublin Core Terms namespace.
pub const DCTERMS: &str = "http://purl.org/dc/terms/";
/// Friend of a Friend namespace.
pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
/// vCard ontology namespace.
pub const VCARD: &str = "http://www.w3.org/2006/vcard/ns#";
/// VIVO core ontology namespace.
pub const VIVO: &str = "http://vivoweb.org/ontology/core#";

/// Prefix declarations emitted by serializers that support them.
pub const PREFIXES: &[(&str, &str)] = &[
    ("rdf", RDF),
    ("rdfs", RDFS),
    ("dcat", DCAT),
    ("dcterms", DCTERMS),
    ("foaf", FOAF),
    ("vcard", VCARD),
    ("vivo", VIVO),
];

pub mod dcat {
    use super::NamedNodeRef;

    pub const DATASET: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#Dataset");
    pub const DISTRIBUTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#Distribution");
    pub const KEYWORD: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#keyword");
    pub const DISTRIBUTION_REL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#distribution");
    pub const MEDIA_TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#mediaType");
    pub const ACCESS_URL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#accessURL");
    pub const CONTACT_POINT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#contactPoint");
}

pub mod dcterms {
    use super::NamedNodeRef;

    pub const TITLE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://purl.org/dc/terms/title");
    pub const DESCRIPTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/description");
    pub const PUBLISHER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/publisher");
}

pub mod foaf {
    use super::NamedNodeRef;

    pub const ORGANIZATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/Organization");
}

pub mod vcard {
    use super::NamedNodeRef;

    pub const KIND: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#Kind");
    pub const NAME: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#Name");
    pub const EMAIL: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#Email");
    pub const HAS_NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#hasName");
    pub const HAS_EMAIL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#hasEmail");
    pub const GIVEN_NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#givenName");
    pub const FAMILY_NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#familyName");
    pub const ADDITIONAL_NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#additionalName");
    /// The `vcard:email` property, as opposed to the `vcard:Email` class.
    pub const EMAIL_PROP: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#email");
}

pub mod vivo {
    use super::NamedNodeRef;

    pub const DESCRIPTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://vivoweb.org/ontology/core#description");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_live_in_their_namespace() {
        let checks = [
            (dcat::DATASET, DCAT),
            (dcat::CONTACT_POINT, DCAT),
            (dcterms::PUBLISHER, DCTERMS),
            (foaf::ORGANIZATION, FOAF),
            (vcard::EMAIL_PROP, VCARD),
            (vcard::ADDITIONAL_NAME, VCARD),
            (vivo::DESCRIPTION, VIVO),
        ];
        for (term, namespace) in checks {
            assert!(term.as_str().starts_with(namespace), "{} not in {}", term, namespace);
        }
    }

    #[test]
    fn test_oxrdf_vocab_matches_namespaces() {
        assert!(oxrdf::vocab::rdf::TYPE.as_str().starts_with(RDF));
        assert!(oxrdf::vocab::rdfs::LABEL.as_str().starts_with(RDFS));
    }
}
