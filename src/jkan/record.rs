//! Typed form of a JKAN dataset file.
//!
//! A dataset file looks like:
//!
//! ```json
//! {
//!   "title": "TITLE",
//!   "organization": "ORGANIZATION",
//!   "notes": "NOTES",
//!   "resources": [
//!     { "name": "NAME1", "url": "URL1", "format": "FORMAT1" }
//!   ],
//!   "category": ["CATEGORY1", "CATEGORY2"],
//!   "maintainer": "MAINTAINER_NAME",
//!   "maintainer_email": "MAINTAINER_EMAIL",
//!   "author": "AUTHOR_NAME",
//!   "author_email": "AUTHOR_EMAIL",
//!   "basename": "BASENAME"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// One dataset description.
///
/// Every field the graph builder reads unconditionally is required, so a
/// malformed file fails at parse time instead of halfway through conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub title: String,
    pub organization: String,
    pub notes: String,
    pub category: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourceRecord>>,
    pub maintainer: String,
    pub maintainer_email: String,
    /// Accepted but not rendered.
    #[serde(default)]
    pub author: String,
    /// Accepted but not rendered.
    #[serde(default)]
    pub author_email: String,
    /// Stem used for every IRI minted for this dataset.
    pub basename: String,
}

/// A downloadable resource of a dataset, rendered as a `dcat:Distribution`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub format: String,
}
