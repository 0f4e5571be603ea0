//! IRI minting for dataset, distribution, organization and vCard subjects.

use oxrdf::NamedNode;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::error::RdfError;

/// Base under which all subject IRIs are minted unless configured otherwise.
pub const DEFAULT_BASE: &str = "http://vivo.northwestern.edu/individual/";

const DATASET_LOCAL_PREFIX: &str = "n_dcat_dataset_";
const VCARD_LOCAL_PREFIX: &str = "n_vcard_";
const ORG_LOCAL_PREFIX: &str = "n_org_";

/// ASCII characters that cannot appear verbatim in an IRI path segment, plus
/// `#` and `?`, which would start a fragment or query.
const IRI_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Prefixes used to mint subject IRIs.
///
/// Every IRI is derived from record fields alone, so converting the same
/// record twice yields the same subjects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriScheme {
    /// Prepended to a record's `basename`.
    pub dataset_prefix: String,
    /// Prepended to `basename` + `-vcard` for the maintainer contact card.
    pub vcard_prefix: String,
    /// Prepended to the normalized organization name.
    pub org_prefix: String,
}

impl Default for UriScheme {
    fn default() -> Self {
        Self::with_base(DEFAULT_BASE)
    }
}

impl UriScheme {
    /// Builds the standard `n_dcat_dataset_` / `n_vcard_` / `n_org_`
    /// prefixes under `base`.
    pub fn with_base(base: &str) -> Self {
        Self {
            dataset_prefix: format!("{}{}", base, DATASET_LOCAL_PREFIX),
            vcard_prefix: format!("{}{}", base, VCARD_LOCAL_PREFIX),
            org_prefix: format!("{}{}", base, ORG_LOCAL_PREFIX),
        }
    }

    pub fn dataset_uri(&self, basename: &str) -> Result<NamedNode, RdfError> {
        named_node(format!("{}{}", self.dataset_prefix, basename))
    }

    /// `<dataset>-<normalized name>`
    pub fn distribution_uri(&self, dataset: &NamedNode, name: &str) -> Result<NamedNode, RdfError> {
        named_node(format!("{}-{}", dataset.as_str(), normalize_resource_name(name)))
    }

    pub fn organization_uri(&self, organization: &str) -> Result<NamedNode, RdfError> {
        named_node(format!(
            "{}{}",
            self.org_prefix,
            normalize_organization_name(organization)
        ))
    }

    pub fn vcard_uri(&self, basename: &str) -> Result<NamedNode, RdfError> {
        named_node(format!("{}{}-vcard", self.vcard_prefix, basename))
    }

    pub fn vcard_name_uri(&self, vcard: &NamedNode) -> Result<NamedNode, RdfError> {
        named_node(format!("{}-name", vcard.as_str()))
    }

    pub fn vcard_email_uri(&self, vcard: &NamedNode) -> Result<NamedNode, RdfError> {
        named_node(format!("{}-email", vcard.as_str()))
    }
}

/// Spaces become underscores, parentheses are dropped, the rest is lowercased.
/// Characters not allowed in an IRI are then percent-encoded.
pub fn normalize_resource_name(name: &str) -> String {
    encode_local_part(&name.replace(' ', "_").replace(['(', ')'], "").to_lowercase())
}

/// Spaces become underscores and the rest is lowercased. Characters not
/// allowed in an IRI are then percent-encoded.
pub fn normalize_organization_name(organization: &str) -> String {
    encode_local_part(&organization.replace(' ', "_").to_lowercase())
}

/// Percent-encodes the ASCII characters of [`IRI_UNSAFE`]. Non-ASCII
/// characters are kept as they are, since IRIs allow them.
fn encode_local_part(local: &str) -> String {
    let mut encoded = String::with_capacity(local.len());
    let mut buf = [0u8; 4];
    for c in local.chars() {
        if c.is_ascii() {
            encoded.extend(utf8_percent_encode(c.encode_utf8(&mut buf), IRI_UNSAFE));
        } else {
            encoded.push(c);
        }
    }
    encoded
}

fn named_node(iri: String) -> Result<NamedNode, RdfError> {
    NamedNode::new(iri.as_str()).map_err(|e| RdfError::InvalidIri(format!("{} ({})", iri, e)))
}
