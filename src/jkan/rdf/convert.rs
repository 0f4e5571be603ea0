//! Dataset record to RDF conversion.

use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Literal, NamedNode};
use tracing::{debug, warn};

use crate::jkan::record::{DatasetRecord, ResourceRecord};

use super::context::UriScheme;
use super::error::RdfError;
use super::graph::{GraphFragment, RdfGraph};
use super::name::{parse_name, FamilyName};
use super::vocab::{dcat, dcterms, foaf, vcard, vivo};

/// Converts a set of dataset records into one merged graph.
///
/// # Example
/// ```ignore
/// use datasets_rdf::jkan::rdf::{datasets_to_rdf, UriScheme};
///
/// let graph = datasets_to_rdf(&records, &UriScheme::default())?;
/// println!("Generated {} triples", graph.len());
/// ```
pub fn datasets_to_rdf<'a>(
    records: impl IntoIterator<Item = &'a DatasetRecord>,
    scheme: &UriScheme,
) -> Result<RdfGraph, RdfError> {
    let mut graph = RdfGraph::new();
    for record in records {
        graph.merge(build_dataset_graph(record, scheme)?);
    }
    Ok(graph)
}

/// Converts one record into its `dcat:Dataset`, distributions, publisher
/// and contact point triples.
pub fn build_dataset_graph(record: &DatasetRecord, scheme: &UriScheme) -> Result<GraphFragment, RdfError> {
    let mut fragment = GraphFragment::new();
    let dataset = scheme.dataset_uri(&record.basename)?;
    debug!("Converting dataset {}", dataset);

    fragment.add(&dataset, rdf::TYPE, dcat::DATASET.into_owned());

    // rdfs:label for VIVO display, dcterms:title for DCAT
    let title = Literal::new_simple_literal(record.title.trim());
    fragment.add(&dataset, rdfs::LABEL, title.clone());
    fragment.add(&dataset, dcterms::TITLE, title);

    let notes = Literal::new_simple_literal(record.notes.trim());
    fragment.add(&dataset, vivo::DESCRIPTION, notes.clone());
    fragment.add(&dataset, dcterms::DESCRIPTION, notes);

    for keyword in &record.category {
        fragment.add(&dataset, dcat::KEYWORD, Literal::new_simple_literal(keyword));
    }

    if let Some(resources) = &record.resources {
        for resource in resources {
            add_distribution(&mut fragment, &dataset, resource, scheme)?;
        }
    }

    fragment.append(build_maintainer(record, &dataset, scheme)?);

    if !record.organization.is_empty() {
        let org = scheme.organization_uri(&record.organization)?;
        fragment.add(&org, rdf::TYPE, foaf::ORGANIZATION.into_owned());
        fragment.add(&dataset, dcterms::PUBLISHER, org);
    }

    Ok(fragment)
}

/// Media type for a JKAN resource format. Only `html` and `json` are known.
pub fn media_type(format: &str) -> Option<&'static str> {
    match format {
        "html" => Some("text/html"),
        "json" => Some("application/json"),
        _ => None,
    }
}

fn add_distribution(
    fragment: &mut GraphFragment,
    dataset: &NamedNode,
    resource: &ResourceRecord,
    scheme: &UriScheme,
) -> Result<(), RdfError> {
    if resource.name.is_empty() {
        debug!("Skipping unnamed resource of {}", dataset);
        return Ok(());
    }

    let distribution = scheme.distribution_uri(dataset, &resource.name)?;
    fragment.add(&distribution, rdf::TYPE, dcat::DISTRIBUTION.into_owned());
    fragment.add(&distribution, rdfs::LABEL, Literal::new_simple_literal(&resource.name));

    if !resource.format.is_empty() {
        match media_type(&resource.format) {
            Some(mime) => fragment.add(&distribution, dcat::MEDIA_TYPE, Literal::new_simple_literal(mime)),
            None => debug!("No media type for format `{}` of {}", resource.format, distribution),
        }
    }
    if !resource.url.is_empty() {
        fragment.add(&distribution, dcat::ACCESS_URL, Literal::new_simple_literal(&resource.url));
    }

    fragment.add(dataset, dcat::DISTRIBUTION_REL, distribution);
    Ok(())
}

/// Builds the maintainer's `vcard:Kind` and links it as the dataset's
/// `dcat:contactPoint`.
///
/// Returns an empty fragment when the record has neither a maintainer name
/// nor a maintainer email.
pub fn build_maintainer(
    record: &DatasetRecord,
    dataset: &NamedNode,
    scheme: &UriScheme,
) -> Result<GraphFragment, RdfError> {
    let mut fragment = GraphFragment::new();
    if record.maintainer.is_empty() && record.maintainer_email.is_empty() {
        return Ok(fragment);
    }

    let card = scheme.vcard_uri(&record.basename)?;
    fragment.add(&card, rdf::TYPE, vcard::KIND.into_owned());

    let label_source = if record.maintainer.is_empty() {
        &record.maintainer_email
    } else {
        &record.maintainer
    };
    fragment.add(
        &card,
        rdfs::LABEL,
        Literal::new_simple_literal(format!("{} VCard", label_source)),
    );

    if !record.maintainer.is_empty() {
        let name_node = scheme.vcard_name_uri(&card)?;
        fragment.add(&card, vcard::HAS_NAME, name_node.clone());
        fragment.add(&name_node, rdf::TYPE, vcard::NAME.into_owned());

        if let Some(parsed) = parse_name(&record.maintainer) {
            if !parsed.given_name.is_empty() {
                fragment.add(&name_node, vcard::GIVEN_NAME, Literal::new_simple_literal(parsed.given_name));
            }
            if !parsed.family_name.is_empty() {
                if let FamilyName::Remainder(tokens) = &parsed.family_name {
                    warn!(
                        "Maintainer name `{}` has {} tokens; joining {:?} into one family name",
                        record.maintainer,
                        tokens.len() + 2,
                        tokens
                    );
                }
                fragment.add(
                    &name_node,
                    vcard::FAMILY_NAME,
                    Literal::new_simple_literal(parsed.family_name.literal_value()),
                );
            }
            if !parsed.additional_name.is_empty() {
                fragment.add(
                    &name_node,
                    vcard::ADDITIONAL_NAME,
                    Literal::new_simple_literal(parsed.additional_name),
                );
            }
        }
    }

    if !record.maintainer_email.is_empty() {
        let email_node = scheme.vcard_email_uri(&card)?;
        fragment.add(&card, vcard::HAS_EMAIL, email_node.clone());
        fragment.add(&email_node, rdf::TYPE, vcard::EMAIL.into_owned());
        fragment.add(
            &email_node,
            vcard::EMAIL_PROP,
            Literal::new_simple_literal(&record.maintainer_email),
        );
    }

    fragment.add(dataset, dcat::CONTACT_POINT, card);
    Ok(fragment)
}
